//! Named validation outcomes.
//!
//! Every validator reports a `FailureReason` value instead of throwing.
//! Reasons carry a stable wire code and a precedence rank used by the
//! message resolver when several reasons are active on the same field at
//! once.

use std::fmt;

/// A named validation outcome, distinct from an exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The field is required but empty.
    Required,
    /// The text does not fully match the field's pattern.
    Pattern,
    /// The text is shorter than the required character count.
    MinLength(usize),
    /// The text is not a syntactically valid email address.
    Email,
    /// The entered answer does not equal 4.
    NotEqualToFour,
    /// The text contains the forbidden letter.
    ForbiddenLetter,
}

impl FailureReason {
    /// Stable wire code for reports and event logs.
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::Required => "required",
            FailureReason::Pattern => "pattern",
            FailureReason::MinLength(_) => "minlength",
            FailureReason::Email => "email",
            FailureReason::NotEqualToFour => "notEqualToFour",
            FailureReason::ForbiddenLetter => "forbiddenLetter",
        }
    }

    /// Resolver tie-break rank. Lower wins when several reasons are active
    /// on a field simultaneously.
    pub fn precedence(&self) -> u8 {
        match self {
            FailureReason::Required => 1,
            FailureReason::Pattern => 2,
            FailureReason::MinLength(_) => 3,
            FailureReason::Email => 4,
            FailureReason::NotEqualToFour => 5,
            FailureReason::ForbiddenLetter => 6,
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
