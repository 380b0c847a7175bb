//! User-facing message resolution.
//!
//! Messages are literal Lithuanian strings. Only the minimum-length message
//! is parameterized, by its required count.

use appform_model::FailureReason;

/// Message template for a single failure reason.
pub fn message_for(reason: FailureReason) -> String {
    match reason {
        FailureReason::Required => "Šis laukas yra privalomas!".to_string(),
        FailureReason::Pattern => "Šis laukas turi būti sudarytas tik iš raidžių!".to_string(),
        FailureReason::MinLength(min) => {
            format!("Šis laukas turi būti sudarytas bent iš {min} simbolių!")
        }
        FailureReason::Email => "Šis laukas turi atitikti elektroninio pašto formatą!".to_string(),
        FailureReason::NotEqualToFour => "Šio lauko reikšmė privalo būti 4!".to_string(),
        FailureReason::ForbiddenLetter => "Jūsų aprašyme negali būti A raidžių!".to_string(),
    }
}

/// Resolve the message to display for a field's active failure reasons.
///
/// Pure and safe to call on every render. When several reasons are active at
/// once the highest-precedence one wins (required > pattern > minlength >
/// email > notEqualToFour > forbiddenLetter); no reasons means an empty
/// string.
pub fn resolve_message(reasons: &[FailureReason]) -> String {
    reasons
        .iter()
        .min_by_key(|reason| reason.precedence())
        .map(|reason| message_for(*reason))
        .unwrap_or_default()
}
