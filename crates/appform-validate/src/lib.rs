//! Conditional validation engine for the application form.
//!
//! The engine owns the field model and re-derives conditional validator
//! bindings whenever a trigger field changes: the expertise selector routes
//! which dependent field becomes required, and the job-searching toggle
//! drives the cover-letter requirement. Validators themselves are pure
//! single-field predicates from the catalog.

mod binder;
mod catalog;
mod form;
mod message;

pub use binder::{
    COVER_LETTER_MIN_LENGTH, ConditionalBinding, JUNIOR_EXPECTED_ANSWER, MID_FORBIDDEN_LETTER,
    TIER_CONDITIONAL_FIELDS, TIER_RESET_FIELDS, tier_binding, toggle_binding,
};
pub use catalog::{TextPattern, Validator, ValidatorSet, base_validators};
pub use form::ApplicationForm;
pub use message::{message_for, resolve_message};
