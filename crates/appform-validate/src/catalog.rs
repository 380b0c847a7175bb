//! Validator catalog.
//!
//! Each validator is a pure predicate over a single field's value. No
//! validator reads another field; cross-field policy lives in the binders.
//! Non-required validators pass on empty input; emptiness is reported by
//! `Required` alone.

use std::sync::LazyLock;

use regex::Regex;

use appform_model::{FailureReason, FieldId, FieldValue};

/// Letters-only pattern used by the name fields.
static LETTERS_ONLY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("invalid letters-only regex"));

/// Structural email shape: dot-separated local atoms, '@', dot-separated
/// domain labels. Single-label domains are accepted.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*$",
    )
    .expect("invalid email regex")
});

/// Maximum total length of an email address.
const EMAIL_MAX_LEN: usize = 254;
/// Maximum length of the local part (before '@').
const EMAIL_LOCAL_MAX_LEN: usize = 64;

/// Named text patterns usable by `Validator::Pattern`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPattern {
    LettersOnly,
}

impl TextPattern {
    fn regex(&self) -> &'static Regex {
        match self {
            TextPattern::LettersOnly => &LETTERS_ONLY_REGEX,
        }
    }
}

/// A single validation predicate, tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Fails on empty input.
    Required,
    /// Fails when non-empty text is shorter than the given character count.
    MinLength(usize),
    /// Fails when non-empty text does not fully match the named pattern.
    Pattern(TextPattern),
    /// Fails when non-empty text is not a syntactically valid email address.
    Email,
    /// Fails unless the entered text parses to the given number. Empty and
    /// non-numeric input fail too; the value is carried as entered.
    EqualsNumber(i64),
    /// Fails when the text contains the given character, case-insensitively.
    ForbidsChar(char),
}

impl Validator {
    /// Evaluate this validator against a value.
    pub fn check(&self, value: &FieldValue) -> Option<FailureReason> {
        match self {
            Validator::Required => value.is_empty().then_some(FailureReason::Required),
            Validator::MinLength(min) => {
                let text = value.text();
                if text.is_empty() {
                    return None;
                }
                (text.chars().count() < *min).then_some(FailureReason::MinLength(*min))
            }
            Validator::Pattern(pattern) => {
                let text = value.text();
                if text.is_empty() {
                    return None;
                }
                (!pattern.regex().is_match(text)).then_some(FailureReason::Pattern)
            }
            Validator::Email => {
                let text = value.text();
                if text.is_empty() {
                    return None;
                }
                (!is_valid_email(text)).then_some(FailureReason::Email)
            }
            Validator::EqualsNumber(expected) => {
                let matches = value
                    .text()
                    .trim()
                    .parse::<f64>()
                    .is_ok_and(|parsed| parsed == *expected as f64);
                (!matches).then_some(FailureReason::NotEqualToFour)
            }
            Validator::ForbidsChar(forbidden) => {
                let needle = forbidden.to_ascii_lowercase();
                value
                    .text()
                    .chars()
                    .any(|ch| ch.to_ascii_lowercase() == needle)
                    .then_some(FailureReason::ForbiddenLetter)
            }
        }
    }

    /// Short description for field listings, e.g. `minLength(140)`.
    pub fn describe(&self) -> String {
        match self {
            Validator::Required => "required".to_string(),
            Validator::MinLength(min) => format!("minLength({min})"),
            Validator::Pattern(TextPattern::LettersOnly) => "pattern(letters-only)".to_string(),
            Validator::Email => "email".to_string(),
            Validator::EqualsNumber(expected) => format!("equals({expected})"),
            Validator::ForbidsChar(forbidden) => format!("excludes('{forbidden}')"),
        }
    }
}

fn is_valid_email(text: &str) -> bool {
    if text.len() > EMAIL_MAX_LEN {
        return false;
    }
    match text.split_once('@') {
        Some((local, _domain)) if local.len() > EMAIL_LOCAL_MAX_LEN => false,
        Some(_) => EMAIL_REGEX.is_match(text),
        None => false,
    }
}

/// Ordered validator collection for one field.
///
/// Sets are replaced wholesale by the binders; they are never edited
/// validator-by-validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorSet {
    validators: Vec<Validator>,
}

impl ValidatorSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn of(validators: &[Validator]) -> Self {
        Self {
            validators: validators.to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Validator> {
        self.validators.iter()
    }

    /// True when the set makes its field mandatory.
    pub fn requires_value(&self) -> bool {
        self.validators.contains(&Validator::Required)
    }

    /// Evaluate every validator in order. Evaluation is total: no
    /// short-circuit, so the resolver can tie-break deterministically among
    /// simultaneously failing validators.
    pub fn evaluate(&self, value: &FieldValue) -> Vec<FailureReason> {
        self.validators
            .iter()
            .filter_map(|validator| validator.check(value))
            .collect()
    }
}

/// Always-on validator sets per field. Conditional fields start with no
/// validators; the binders install theirs at runtime.
pub fn base_validators(field: FieldId) -> ValidatorSet {
    match field {
        FieldId::FirstName | FieldId::LastName => ValidatorSet::of(&[
            Validator::Required,
            Validator::MinLength(2),
            Validator::Pattern(TextPattern::LettersOnly),
        ]),
        FieldId::Email => ValidatorSet::of(&[Validator::Required, Validator::Email]),
        FieldId::IsJobSearching
        | FieldId::ExpertiseLevel
        | FieldId::CalculationResult
        | FieldId::Description
        | FieldId::CoverLetter => ValidatorSet::empty(),
    }
}
