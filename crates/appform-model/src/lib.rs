pub mod error;
pub mod failure;
pub mod field;
pub mod report;
pub mod snapshot;
pub mod tier;
pub mod value;

pub use error::{FormError, Result};
pub use failure::FailureReason;
pub use field::FieldId;
pub use report::{FieldIssue, ValidationReport};
pub use snapshot::SubmissionSnapshot;
pub use tier::ExpertiseTier;
pub use value::FieldValue;
