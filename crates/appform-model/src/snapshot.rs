use serde::{Deserialize, Serialize};

/// Form values captured at submission time.
///
/// Struct field order is the form's declaration order, so the serialized
/// JSON object lists keys in the same order the review screen displays them.
/// The snapshot is a copy: discarding it (going back from the review screen)
/// leaves the live form untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_job_searching: bool,
    pub expertise_level: String,
    pub calculation_result: String,
    pub description: String,
    pub cover_letter: String,
}
