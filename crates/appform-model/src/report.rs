use serde::{Deserialize, Serialize};

use crate::field::FieldId;

/// Resolved validation state of a single field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: FieldId,
    /// Wire codes of every active failure reason, in validator order.
    pub codes: Vec<String>,
    /// User-facing message for the highest-precedence reason.
    pub message: String,
}

/// Validation snapshot of the whole form.
///
/// One entry per field with at least one active failure reason; a valid form
/// produces an empty report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn error_count(&self) -> usize {
        self.issues.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn issue_for(&self, field: FieldId) -> Option<&FieldIssue> {
        self.issues.iter().find(|issue| issue.field == field)
    }
}
