use std::path::PathBuf;

use appform_model::{SubmissionSnapshot, ValidationReport};

#[derive(Debug)]
pub struct ReplayResult {
    pub events_applied: usize,
    pub submits_attempted: usize,
    pub submits_rejected: usize,
    pub report: ValidationReport,
    pub rows: Vec<FieldRow>,
    pub submission: Option<SubmissionSnapshot>,
    pub report_path: Option<PathBuf>,
    pub submission_path: Option<PathBuf>,
    pub has_errors: bool,
}

/// One row of the per-field summary table.
#[derive(Debug)]
pub struct FieldRow {
    pub field: &'static str,
    pub value: String,
    pub validators: String,
    pub error_count: usize,
    pub message: String,
}
