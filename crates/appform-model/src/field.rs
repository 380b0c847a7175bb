//! Form field identifiers.
//!
//! The application form is a fixed set of eight fields. Declaration order
//! matters: it is the key order of the submitted JSON object and the order
//! in which summaries list fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// Identifier of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    IsJobSearching,
    ExpertiseLevel,
    CalculationResult,
    Description,
    CoverLetter,
}

impl FieldId {
    /// All fields in declaration order.
    pub const ALL: [FieldId; 8] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::IsJobSearching,
        FieldId::ExpertiseLevel,
        FieldId::CalculationResult,
        FieldId::Description,
        FieldId::CoverLetter,
    ];

    /// Wire name as used in the submitted JSON and event scripts.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::IsJobSearching => "isJobSearching",
            FieldId::ExpertiseLevel => "expertiseLevel",
            FieldId::CalculationResult => "calculationResult",
            FieldId::Description => "description",
            FieldId::CoverLetter => "coverLetter",
        }
    }

    /// Human-readable label for summaries.
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FirstName => "First name",
            FieldId::LastName => "Last name",
            FieldId::Email => "Email",
            FieldId::IsJobSearching => "Job searching",
            FieldId::ExpertiseLevel => "Expertise level",
            FieldId::CalculationResult => "Calculation result",
            FieldId::Description => "Description",
            FieldId::CoverLetter => "Cover letter",
        }
    }

    /// True for fields whose validator set is installed at runtime by the
    /// expertise selector or the job-searching toggle.
    pub fn is_conditional(&self) -> bool {
        matches!(
            self,
            FieldId::CalculationResult | FieldId::Description | FieldId::CoverLetter
        )
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    /// Parse a wire field name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        FieldId::ALL
            .iter()
            .copied()
            .find(|field| field.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for field in FieldId::ALL {
            assert_eq!(field.as_str().parse::<FieldId>().unwrap(), field);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("FIRSTNAME".parse::<FieldId>().unwrap(), FieldId::FirstName);
        assert_eq!(
            "coverletter".parse::<FieldId>().unwrap(),
            FieldId::CoverLetter
        );
        assert!("middleName".parse::<FieldId>().is_err());
    }
}
