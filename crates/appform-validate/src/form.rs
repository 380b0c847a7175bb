//! The form engine: field values, installed validator sets, and error state.
//!
//! Invariant: every field's error list is the full recomputation of its
//! installed validators against its current value. Each mutating entry point
//! revalidates the touched fields before returning, so errors are never
//! stale. Trigger changes (expertise selection, job-searching toggle) run
//! their Clear -> Reset -> Install transition under one `&mut self` borrow
//! and revalidate only after Install; no intermediate state is observable.

use tracing::debug;

use appform_model::{
    ExpertiseTier, FailureReason, FieldId, FieldIssue, FieldValue, SubmissionSnapshot,
    ValidationReport,
};

use crate::binder::{TIER_CONDITIONAL_FIELDS, TIER_RESET_FIELDS, tier_binding, toggle_binding};
use crate::catalog::{ValidatorSet, base_validators};
use crate::message::resolve_message;

#[derive(Debug, Clone, Default)]
struct FieldState {
    value: FieldValue,
    validators: ValidatorSet,
    errors: Vec<FailureReason>,
}

/// A live application form session.
///
/// Created once per form; fields are never added or removed afterwards.
#[derive(Debug, Clone)]
pub struct ApplicationForm {
    fields: [FieldState; FieldId::ALL.len()],
    tier: Option<ExpertiseTier>,
}

impl ApplicationForm {
    /// Fresh form: base validators installed, `isJobSearching` defaults to
    /// true, every other field empty. The empty required fields surface
    /// their errors immediately, so a new form is not valid.
    pub fn new() -> Self {
        let mut form = Self {
            fields: std::array::from_fn(|index| FieldState {
                value: FieldValue::empty(),
                validators: base_validators(FieldId::ALL[index]),
                errors: Vec::new(),
            }),
            tier: None,
        };
        form.state_mut(FieldId::IsJobSearching).value = FieldValue::Bool(true);
        for field in FieldId::ALL {
            form.revalidate(field);
        }
        form
    }

    pub fn value(&self, field: FieldId) -> &FieldValue {
        &self.state(field).value
    }

    /// Active failure reasons for a field, in validator order.
    pub fn errors(&self, field: FieldId) -> &[FailureReason] {
        &self.state(field).errors
    }

    /// The validator set currently installed on a field.
    pub fn validators(&self, field: FieldId) -> &ValidatorSet {
        &self.state(field).validators
    }

    pub fn tier(&self) -> Option<ExpertiseTier> {
        self.tier
    }

    pub fn is_job_searching(&self) -> bool {
        self.state(FieldId::IsJobSearching)
            .value
            .as_bool()
            .unwrap_or(true)
    }

    /// Store a value and revalidate the field against its currently
    /// installed validators.
    ///
    /// The trigger fields have dedicated entry points (`select_tier`,
    /// `set_job_searching`); writing them here stores the value without
    /// re-deriving any conditional bindings.
    pub fn set_value(&mut self, field: FieldId, value: FieldValue) {
        self.state_mut(field).value = value;
        self.revalidate(field);
    }

    /// Change the expertise selection.
    ///
    /// Runs the full transition even when the selection is unchanged:
    /// 1. Clear all validators from both tier-conditional fields.
    /// 2. Reset the values of all three conditional fields (the cover
    ///    letter's validators are left to the toggle binder, but its prior
    ///    input is wiped with the rest).
    /// 3. Install the new selection's validator profile.
    /// Revalidation happens once, after Install, so cleared validators never
    /// see the reset values.
    pub fn select_tier(&mut self, selection: Option<ExpertiseTier>) {
        debug!(?selection, "expertise selection changed");
        self.tier = selection;
        let wire = selection.map(|tier| tier.as_str()).unwrap_or_default();
        self.state_mut(FieldId::ExpertiseLevel).value = FieldValue::from(wire);

        for field in TIER_CONDITIONAL_FIELDS {
            self.state_mut(field).validators = ValidatorSet::empty();
        }
        for field in TIER_RESET_FIELDS {
            self.state_mut(field).value = FieldValue::empty();
        }
        if let Some(binding) = tier_binding(selection) {
            self.state_mut(binding.field).validators = binding.validators;
        }

        self.revalidate(FieldId::ExpertiseLevel);
        for field in TIER_RESET_FIELDS {
            self.revalidate(field);
        }
    }

    /// Flip the job-searching toggle. Clears the cover letter's validators
    /// and value, then installs the profile for the new toggle state.
    /// Independent of the tier: tier changes never re-derive this binding.
    pub fn set_job_searching(&mut self, is_searching: bool) {
        debug!(is_searching, "job-searching toggle changed");
        self.state_mut(FieldId::IsJobSearching).value = FieldValue::Bool(is_searching);

        self.state_mut(FieldId::CoverLetter).validators = ValidatorSet::empty();
        self.state_mut(FieldId::CoverLetter).value = FieldValue::empty();
        if let Some(binding) = toggle_binding(is_searching) {
            self.state_mut(binding.field).validators = binding.validators;
        }

        self.revalidate(FieldId::IsJobSearching);
        self.revalidate(FieldId::CoverLetter);
    }

    /// Whole-form validity: every field's error list is empty. Required
    /// fields with empty values carry a `required` error, so this single
    /// condition also covers "every required field has a value".
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|state| state.errors.is_empty())
    }

    /// Capture a submission snapshot, only when the form is valid.
    pub fn submit(&self) -> Option<SubmissionSnapshot> {
        if self.is_valid() {
            Some(self.snapshot())
        } else {
            debug!("submission rejected: form has validation errors");
            None
        }
    }

    /// Current values in declaration order, regardless of validity.
    pub fn snapshot(&self) -> SubmissionSnapshot {
        SubmissionSnapshot {
            first_name: self.value(FieldId::FirstName).text().to_string(),
            last_name: self.value(FieldId::LastName).text().to_string(),
            email: self.value(FieldId::Email).text().to_string(),
            is_job_searching: self.is_job_searching(),
            expertise_level: self.value(FieldId::ExpertiseLevel).text().to_string(),
            calculation_result: self.value(FieldId::CalculationResult).text().to_string(),
            description: self.value(FieldId::Description).text().to_string(),
            cover_letter: self.value(FieldId::CoverLetter).text().to_string(),
        }
    }

    /// Resolved messages for every field with active failures.
    pub fn report(&self) -> ValidationReport {
        let issues = FieldId::ALL
            .iter()
            .filter_map(|&field| {
                let errors = self.errors(field);
                if errors.is_empty() {
                    return None;
                }
                Some(FieldIssue {
                    field,
                    codes: errors.iter().map(|reason| reason.code().to_string()).collect(),
                    message: resolve_message(errors),
                })
            })
            .collect();
        ValidationReport { issues }
    }

    /// Resolved message for one field; empty string when the field is clean.
    pub fn message(&self, field: FieldId) -> String {
        resolve_message(self.errors(field))
    }

    fn revalidate(&mut self, field: FieldId) {
        let state = self.state_mut(field);
        state.errors = state.validators.evaluate(&state.value);
    }

    fn state(&self, field: FieldId) -> &FieldState {
        &self.fields[field as usize]
    }

    fn state_mut(&mut self, field: FieldId) -> &mut FieldState {
        &mut self.fields[field as usize]
    }
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self::new()
    }
}
