use healthaccess_core::models::answer::{empty_answer_set, first_unanswered, OptionValue};
use healthaccess_core::models::record::SavedAssessment;

#[test]
fn integer_matches_its_text_form() {
    let scale = OptionValue::Int(5);
    assert!(scale.matches(&OptionValue::from("5")));
    assert!(OptionValue::from(" 5 ").matches(&scale));
    assert!(!scale.matches(&OptionValue::from("4")));
    assert!(!scale.matches(&OptionValue::from("five")));
}

#[test]
fn text_values_compare_exactly() {
    let value = OptionValue::from("7-8");
    assert!(value.matches(&OptionValue::from("7-8")));
    assert!(!value.matches(&OptionValue::from("7-8 ")));
    assert_eq!(value.as_int(), None);
}

#[test]
fn untagged_json_keeps_integers_and_strings_apart() {
    let values: Vec<OptionValue> = serde_json::from_str(r#"[3, "less-than-4"]"#).unwrap();
    assert_eq!(values[0], OptionValue::Int(3));
    assert_eq!(values[1], OptionValue::from("less-than-4"));
}

#[test]
fn first_unanswered_finds_the_earliest_gap() {
    let mut answers = empty_answer_set(3);
    assert_eq!(first_unanswered(&answers), Some(0));

    answers[0] = Some(OptionValue::Int(1));
    answers[2] = Some(OptionValue::Int(1));
    assert_eq!(first_unanswered(&answers), Some(1));

    answers[1] = Some(OptionValue::Int(1));
    assert_eq!(first_unanswered(&answers), None);
}

#[test]
fn saved_assessment_id_is_completion_millis() {
    let completed_at: jiff::Timestamp = "2026-03-01T12:00:00Z".parse().unwrap();
    let record = SavedAssessment::new(
        "diabetes-risk",
        "Diabetes Risk Assessment",
        vec![OptionValue::from("under-40")],
        &serde_json::json!({ "score": 0 }),
        completed_at,
    )
    .unwrap();

    assert_eq!(record.id, completed_at.as_millisecond());
    assert_eq!(record.result["score"], 0);
}
