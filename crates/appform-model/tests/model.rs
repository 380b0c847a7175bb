//! Tests for appform-model types.

use appform_model::{
    ExpertiseTier, FailureReason, FieldId, FieldIssue, FieldValue, SubmissionSnapshot,
    ValidationReport,
};

#[test]
fn field_declaration_order_matches_form() {
    let names: Vec<&str> = FieldId::ALL.iter().map(FieldId::as_str).collect();
    assert_eq!(
        names,
        vec![
            "firstName",
            "lastName",
            "email",
            "isJobSearching",
            "expertiseLevel",
            "calculationResult",
            "description",
            "coverLetter",
        ]
    );
}

#[test]
fn conditional_fields_are_flagged() {
    let conditional: Vec<FieldId> = FieldId::ALL
        .iter()
        .copied()
        .filter(FieldId::is_conditional)
        .collect();
    assert_eq!(
        conditional,
        vec![
            FieldId::CalculationResult,
            FieldId::Description,
            FieldId::CoverLetter,
        ]
    );
}

#[test]
fn field_value_serializes_untagged() {
    let text = serde_json::to_string(&FieldValue::from("Jonas")).unwrap();
    assert_eq!(text, "\"Jonas\"");
    let flag = serde_json::to_string(&FieldValue::Bool(true)).unwrap();
    assert_eq!(flag, "true");

    let round: FieldValue = serde_json::from_str("\"Jonas\"").unwrap();
    assert_eq!(round, FieldValue::from("Jonas"));
    let round: FieldValue = serde_json::from_str("false").unwrap();
    assert_eq!(round, FieldValue::Bool(false));
}

#[test]
fn empty_values() {
    assert!(FieldValue::empty().is_empty());
    assert!(!FieldValue::from("x").is_empty());
    // A boolean is always considered set, even when false.
    assert!(!FieldValue::Bool(false).is_empty());
}

#[test]
fn failure_codes_match_form_error_keys() {
    assert_eq!(FailureReason::Required.code(), "required");
    assert_eq!(FailureReason::Pattern.code(), "pattern");
    assert_eq!(FailureReason::MinLength(140).code(), "minlength");
    assert_eq!(FailureReason::Email.code(), "email");
    assert_eq!(FailureReason::NotEqualToFour.code(), "notEqualToFour");
    assert_eq!(FailureReason::ForbiddenLetter.code(), "forbiddenLetter");
}

#[test]
fn failure_precedence_is_strictly_ordered() {
    let ranked = [
        FailureReason::Required,
        FailureReason::Pattern,
        FailureReason::MinLength(2),
        FailureReason::Email,
        FailureReason::NotEqualToFour,
        FailureReason::ForbiddenLetter,
    ];
    for window in ranked.windows(2) {
        assert!(window[0].precedence() < window[1].precedence());
    }
}

#[test]
fn tier_parses_case_insensitively() {
    assert_eq!(
        "Junior".parse::<ExpertiseTier>().unwrap(),
        ExpertiseTier::Junior
    );
    assert_eq!(
        "MID".parse::<ExpertiseTier>().unwrap(),
        ExpertiseTier::Mid
    );
    assert!("principal".parse::<ExpertiseTier>().is_err());
    assert_eq!(ExpertiseTier::parse_selection("principal"), None);
}

#[test]
fn snapshot_round_trip_preserves_values() {
    let snapshot = SubmissionSnapshot {
        first_name: "Jonas".to_string(),
        last_name: "Petraitis".to_string(),
        email: "jonas@example.com".to_string(),
        is_job_searching: false,
        expertise_level: "senior".to_string(),
        calculation_result: String::new(),
        description: String::new(),
        cover_letter: "x".repeat(140),
    };
    let json = serde_json::to_string_pretty(&snapshot).expect("serialize snapshot");
    let round: SubmissionSnapshot = serde_json::from_str(&json).expect("deserialize snapshot");
    assert_eq!(round, snapshot);
}

#[test]
fn snapshot_keys_follow_declaration_order() {
    let json = serde_json::to_string(&SubmissionSnapshot::default()).unwrap();
    let positions: Vec<usize> = [
        "\"firstName\"",
        "\"lastName\"",
        "\"email\"",
        "\"isJobSearching\"",
        "\"expertiseLevel\"",
        "\"calculationResult\"",
        "\"description\"",
        "\"coverLetter\"",
    ]
    .iter()
    .map(|key| json.find(key).expect("key present"))
    .collect();
    for window in positions.windows(2) {
        assert!(window[0] < window[1]);
    }
}

#[test]
fn report_issue_lookup() {
    let report = ValidationReport {
        issues: vec![FieldIssue {
            field: FieldId::CalculationResult,
            codes: vec!["required".to_string(), "notEqualToFour".to_string()],
            message: "Šis laukas yra privalomas!".to_string(),
        }],
    };
    let issue = report.issue_for(FieldId::CalculationResult).unwrap();
    assert_eq!(issue.codes.len(), 2);
    assert!(report.issue_for(FieldId::Description).is_none());
}
