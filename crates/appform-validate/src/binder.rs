//! Conditional validator binding.
//!
//! The expertise selector and the job-searching toggle each map to a
//! validator profile for one dependent field. Profiles are pure functions of
//! the trigger value; the engine installs them atomically during a
//! Clear -> Reset -> Install transition so a field never carries validators
//! from two trigger states at once.

use appform_model::{ExpertiseTier, FieldId};

use crate::catalog::{Validator, ValidatorSet};

/// Expected answer for the junior tier's arithmetic check.
pub const JUNIOR_EXPECTED_ANSWER: i64 = 4;
/// Letter the mid tier's description must not contain.
pub const MID_FORBIDDEN_LETTER: char = 'a';
/// Minimum cover-letter length required while not job searching.
pub const COVER_LETTER_MIN_LENGTH: usize = 140;

/// The two fields whose validators are driven by the expertise selector.
pub const TIER_CONDITIONAL_FIELDS: [FieldId; 2] =
    [FieldId::CalculationResult, FieldId::Description];

/// All fields whose values are cleared when the expertise selector changes.
/// The cover letter is included even though its validators are toggle-driven:
/// a tier change wipes all prior conditional input.
pub const TIER_RESET_FIELDS: [FieldId; 3] = [
    FieldId::CalculationResult,
    FieldId::Description,
    FieldId::CoverLetter,
];

/// A validator set to install on one dependent field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalBinding {
    pub field: FieldId,
    pub validators: ValidatorSet,
}

/// Validator profile for an expertise selection.
///
/// At most one field is bound per selection. Senior installs nothing here:
/// its conditional requirement (the cover letter) is driven entirely by the
/// job-searching toggle.
pub fn tier_binding(selection: Option<ExpertiseTier>) -> Option<ConditionalBinding> {
    match selection? {
        ExpertiseTier::Junior => Some(ConditionalBinding {
            field: FieldId::CalculationResult,
            validators: ValidatorSet::of(&[
                Validator::Required,
                Validator::EqualsNumber(JUNIOR_EXPECTED_ANSWER),
            ]),
        }),
        ExpertiseTier::Mid => Some(ConditionalBinding {
            field: FieldId::Description,
            validators: ValidatorSet::of(&[
                Validator::Required,
                Validator::ForbidsChar(MID_FORBIDDEN_LETTER),
            ]),
        }),
        ExpertiseTier::Senior => None,
    }
}

/// Validator profile for the job-searching toggle. A candidate who is not
/// currently searching must justify the application with a long-form cover
/// letter; one who is searching owes nothing extra.
pub fn toggle_binding(is_job_searching: bool) -> Option<ConditionalBinding> {
    if is_job_searching {
        None
    } else {
        Some(ConditionalBinding {
            field: FieldId::CoverLetter,
            validators: ValidatorSet::of(&[
                Validator::Required,
                Validator::MinLength(COVER_LETTER_MIN_LENGTH),
            ]),
        })
    }
}
