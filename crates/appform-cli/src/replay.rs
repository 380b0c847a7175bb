//! Scripted form-event replay.
//!
//! The fill/review loop as a deterministic event sequence: each event maps
//! to exactly one engine entry point, in order, the way the rendering layer
//! would invoke them on user input. `back` models returning from the review
//! screen: the captured submission is discarded, the form is not.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use appform_model::{ExpertiseTier, FieldId, FieldValue, SubmissionSnapshot};
use appform_validate::ApplicationForm;

use crate::logging::redact_value;

/// One scripted user interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FormEvent {
    /// Type a value into a field.
    Set { field: FieldId, value: FieldValue },
    /// Change the expertise selector. Unknown values clear the selection.
    Tier { value: String },
    /// Flip the job-searching toggle.
    Toggle { value: bool },
    /// Attempt submission; captures a snapshot when the form is valid.
    Submit,
    /// Return from the review screen.
    Back,
}

/// Outcome of replaying an event script against a fresh form.
#[derive(Debug)]
pub struct ReplayOutcome {
    pub form: ApplicationForm,
    /// Snapshot from the most recent successful submit, unless discarded by
    /// a later `back` event.
    pub submission: Option<SubmissionSnapshot>,
    pub events_applied: usize,
    pub submits_attempted: usize,
    pub submits_rejected: usize,
}

/// Replay events in order against a fresh form.
pub fn replay(events: &[FormEvent]) -> ReplayOutcome {
    let mut form = ApplicationForm::new();
    let mut submission = None;
    let mut submits_attempted = 0usize;
    let mut submits_rejected = 0usize;

    for event in events {
        match event {
            FormEvent::Set { field, value } => {
                debug!(%field, value = redact_value(&value.to_string()), "set");
                form.set_value(*field, value.clone());
            }
            FormEvent::Tier { value } => {
                let selection = ExpertiseTier::parse_selection(value);
                if selection.is_none() && !value.trim().is_empty() {
                    warn!(value = %value, "unknown expertise level, clearing selection");
                }
                form.select_tier(selection);
            }
            FormEvent::Toggle { value } => {
                form.set_job_searching(*value);
            }
            FormEvent::Submit => {
                submits_attempted += 1;
                match form.submit() {
                    Some(snapshot) => submission = Some(snapshot),
                    None => {
                        submits_rejected += 1;
                        warn!(
                            errors = form.report().error_count(),
                            "submission rejected"
                        );
                    }
                }
            }
            FormEvent::Back => {
                debug!("back to edit screen, discarding submission snapshot");
                submission = None;
            }
        }
    }

    ReplayOutcome {
        form,
        submission,
        events_applied: events.len(),
        submits_attempted,
        submits_rejected,
    }
}
