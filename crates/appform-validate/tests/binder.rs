//! Binder state-machine tests: validator re-binding on trigger changes.

use appform_model::{ExpertiseTier, FieldId, FieldValue};
use appform_validate::{
    ApplicationForm, COVER_LETTER_MIN_LENGTH, JUNIOR_EXPECTED_ANSWER, MID_FORBIDDEN_LETTER,
    TIER_CONDITIONAL_FIELDS, Validator, ValidatorSet, tier_binding, toggle_binding,
};
use proptest::prelude::*;

#[test]
fn tier_profiles_bind_at_most_one_field() {
    let junior = tier_binding(Some(ExpertiseTier::Junior)).unwrap();
    assert_eq!(junior.field, FieldId::CalculationResult);
    assert_eq!(
        junior.validators,
        ValidatorSet::of(&[
            Validator::Required,
            Validator::EqualsNumber(JUNIOR_EXPECTED_ANSWER),
        ])
    );

    let mid = tier_binding(Some(ExpertiseTier::Mid)).unwrap();
    assert_eq!(mid.field, FieldId::Description);
    assert_eq!(
        mid.validators,
        ValidatorSet::of(&[
            Validator::Required,
            Validator::ForbidsChar(MID_FORBIDDEN_LETTER),
        ])
    );

    assert!(tier_binding(Some(ExpertiseTier::Senior)).is_none());
    assert!(tier_binding(None).is_none());
}

#[test]
fn toggle_profile_requires_cover_letter_when_not_searching() {
    let binding = toggle_binding(false).unwrap();
    assert_eq!(binding.field, FieldId::CoverLetter);
    assert_eq!(
        binding.validators,
        ValidatorSet::of(&[
            Validator::Required,
            Validator::MinLength(COVER_LETTER_MIN_LENGTH),
        ])
    );
    assert!(toggle_binding(true).is_none());
}

#[test]
fn switching_tiers_never_unions_validator_sets() {
    let mut form = ApplicationForm::new();
    form.select_tier(Some(ExpertiseTier::Junior));
    form.select_tier(Some(ExpertiseTier::Mid));

    // The junior binding must be gone entirely, not merged.
    assert!(form.validators(FieldId::CalculationResult).is_empty());
    assert_eq!(
        *form.validators(FieldId::Description),
        tier_binding(Some(ExpertiseTier::Mid)).unwrap().validators
    );
}

#[test]
fn switching_to_senior_leaves_both_tier_fields_bare() {
    let mut form = ApplicationForm::new();
    form.select_tier(Some(ExpertiseTier::Mid));
    form.select_tier(Some(ExpertiseTier::Senior));
    for field in TIER_CONDITIONAL_FIELDS {
        assert!(form.validators(field).is_empty());
        assert!(form.value(field).is_empty());
        assert!(form.errors(field).is_empty());
    }
}

#[test]
fn reselecting_the_same_tier_clears_and_resets_again() {
    let mut form = ApplicationForm::new();
    form.select_tier(Some(ExpertiseTier::Junior));
    form.set_value(FieldId::CalculationResult, FieldValue::from("4"));
    assert!(form.errors(FieldId::CalculationResult).is_empty());

    form.select_tier(Some(ExpertiseTier::Junior));
    // Same profile installed, but the entered value is wiped both times.
    assert!(form.value(FieldId::CalculationResult).is_empty());
    assert_eq!(
        *form.validators(FieldId::CalculationResult),
        tier_binding(Some(ExpertiseTier::Junior)).unwrap().validators
    );
    assert!(!form.errors(FieldId::CalculationResult).is_empty());
}

#[test]
fn tier_change_resets_all_three_conditional_values() {
    let mut form = ApplicationForm::new();
    form.select_tier(Some(ExpertiseTier::Mid));
    form.set_value(FieldId::Description, FieldValue::from("no letter"));
    form.set_value(FieldId::CoverLetter, FieldValue::from("kept so far"));

    form.select_tier(Some(ExpertiseTier::Junior));
    assert!(form.value(FieldId::CalculationResult).is_empty());
    assert!(form.value(FieldId::Description).is_empty());
    // The cover letter's value is wiped too, even though its validators are
    // driven by the toggle, not the tier.
    assert!(form.value(FieldId::CoverLetter).is_empty());
}

#[test]
fn tier_change_does_not_touch_cover_letter_validators() {
    let mut form = ApplicationForm::new();
    form.set_job_searching(false);
    let installed = form.validators(FieldId::CoverLetter).clone();
    assert!(!installed.is_empty());

    form.select_tier(Some(ExpertiseTier::Senior));
    assert_eq!(*form.validators(FieldId::CoverLetter), installed);
    // Value was reset while still required, so the error resurfaces.
    assert!(!form.errors(FieldId::CoverLetter).is_empty());
}

#[test]
fn toggle_round_trip_leaves_cover_letter_optional_and_empty() {
    let mut form = ApplicationForm::new();
    form.set_job_searching(false);
    form.set_value(FieldId::CoverLetter, FieldValue::from("x".repeat(140)));
    assert!(form.errors(FieldId::CoverLetter).is_empty());

    form.set_job_searching(true);
    assert!(form.validators(FieldId::CoverLetter).is_empty());
    assert!(form.value(FieldId::CoverLetter).is_empty());
    assert!(form.errors(FieldId::CoverLetter).is_empty());
}

#[test]
fn toggle_is_independent_of_tier() {
    let mut form = ApplicationForm::new();
    form.select_tier(Some(ExpertiseTier::Junior));
    form.set_job_searching(false);

    // Both bindings coexist: junior on the calculation field, toggle on the
    // cover letter.
    assert_eq!(
        *form.validators(FieldId::CalculationResult),
        tier_binding(Some(ExpertiseTier::Junior)).unwrap().validators
    );
    assert_eq!(
        *form.validators(FieldId::CoverLetter),
        toggle_binding(false).unwrap().validators
    );
}

fn selection_strategy() -> impl Strategy<Value = Option<ExpertiseTier>> {
    prop_oneof![
        Just(None),
        Just(Some(ExpertiseTier::Junior)),
        Just(Some(ExpertiseTier::Mid)),
        Just(Some(ExpertiseTier::Senior)),
    ]
}

proptest! {
    /// The conditional bindings depend only on the last selection, never on
    /// the path taken to reach it.
    #[test]
    fn final_bindings_depend_only_on_last_selection(
        selections in prop::collection::vec(selection_strategy(), 1..16),
    ) {
        let mut form = ApplicationForm::new();
        for selection in &selections {
            form.select_tier(*selection);
        }
        let last = *selections.last().unwrap();
        let expected = tier_binding(last);
        for field in TIER_CONDITIONAL_FIELDS {
            let installed = form.validators(field);
            match &expected {
                Some(binding) if binding.field == field => {
                    prop_assert_eq!(installed, &binding.validators);
                }
                _ => {
                    prop_assert!(installed.is_empty());
                }
            }
            // Every selection wipes prior input.
            prop_assert!(form.value(field).is_empty());
        }
        prop_assert_eq!(form.tier(), last);
    }

    /// Toggle sequences likewise: only the final state matters.
    #[test]
    fn final_cover_letter_binding_depends_only_on_last_toggle(
        toggles in prop::collection::vec(any::<bool>(), 1..16),
    ) {
        let mut form = ApplicationForm::new();
        for toggle in &toggles {
            form.set_job_searching(*toggle);
        }
        let last = *toggles.last().unwrap();
        match toggle_binding(last) {
            Some(binding) => {
                prop_assert_eq!(form.validators(FieldId::CoverLetter), &binding.validators);
            }
            None => {
                prop_assert!(form.validators(FieldId::CoverLetter).is_empty());
            }
        }
        prop_assert!(form.value(FieldId::CoverLetter).is_empty());
    }
}
