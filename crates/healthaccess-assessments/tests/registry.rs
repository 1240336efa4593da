use healthaccess_assessments::error::ValidationError;
use healthaccess_assessments::questionnaire::QuestionType;
use healthaccess_assessments::{all_questionnaires, get_questionnaire, score};
use healthaccess_core::models::answer::OptionValue;

#[test]
fn three_questionnaires_are_registered() {
    let ids: Vec<String> = all_questionnaires()
        .iter()
        .map(|q| q.id().to_string())
        .collect();
    assert_eq!(ids, vec!["general-health", "diabetes-risk", "heart-health"]);
}

#[test]
fn question_ids_are_unique_within_each_questionnaire() {
    for questionnaire in all_questionnaires() {
        let questions = questionnaire.questions();
        for (i, q) in questions.iter().enumerate() {
            assert!(
                questions[i + 1..].iter().all(|other| other.id != q.id),
                "duplicate question id {} in {}",
                q.id,
                questionnaire.id()
            );
            assert!(!q.options.is_empty());
        }
    }
}

#[test]
fn scale_questions_offer_one_to_five() {
    let general = get_questionnaire("general-health").unwrap();
    let energy = &general.questions()[0];
    assert_eq!(energy.question_type, QuestionType::Scale);
    let values: Vec<OptionValue> = energy.options.iter().map(|o| o.value.clone()).collect();
    assert_eq!(values, (1..=5).map(OptionValue::Int).collect::<Vec<_>>());
}

#[test]
fn only_diabetes_options_carry_scores() {
    for questionnaire in all_questionnaires() {
        let scored = questionnaire
            .questions()
            .iter()
            .flat_map(|q| &q.options)
            .any(|o| o.score.is_some());
        assert_eq!(scored, questionnaire.id() == "diabetes-risk");
    }
}

#[test]
fn unknown_questionnaire_fails_validation() {
    assert_eq!(
        score("sleep-apnea", &[]).unwrap_err(),
        ValidationError::UnknownQuestionnaire {
            id: "sleep-apnea".to_string()
        }
    );
}

#[test]
fn any_null_slot_fails_before_scoring() {
    let mut answers: Vec<Option<OptionValue>> = [
        "under-40", "under-25", "dont-know", "yes", "daily", "no", "no", "no",
    ]
    .iter()
    .map(|v| Some((*v).into()))
    .collect();
    assert!(score("diabetes-risk", &answers).is_ok());

    answers[7] = None;
    // An invalid value earlier in the set does not mask the gap.
    answers[0] = Some("over-90".into());
    assert_eq!(
        score("diabetes-risk", &answers).unwrap_err(),
        ValidationError::Unanswered {
            index: 7,
            question_id: "family-history".to_string()
        }
    );
}

#[test]
fn wrong_answer_count_is_rejected() {
    let answers = vec![Some(OptionValue::Int(3)); 3];
    assert_eq!(
        score("general-health", &answers).unwrap_err(),
        ValidationError::AnswerCountMismatch {
            expected: 7,
            actual: 3
        }
    );
}

#[test]
fn values_outside_the_options_are_rejected() {
    let answers: Vec<Option<OptionValue>> = vec![
        Some(OptionValue::Int(3)),
        Some("9-10".into()),
        Some("3-4".into()),
        Some("often".into()),
        Some(OptionValue::Int(2)),
        Some("5-7".into()),
        Some("never".into()),
    ];
    assert_eq!(
        score("general-health", &answers).unwrap_err(),
        ValidationError::InvalidOption {
            question_id: "sleep".to_string(),
            value: "9-10".to_string()
        }
    );
}

#[test]
fn scoring_is_deterministic() {
    let answers: Vec<Option<OptionValue>> = vec![
        Some("high-stage1".into()),
        Some("borderline".into()),
        Some("former".into()),
        Some("no".into()),
        Some("rarely".into()),
        Some("yes-distant".into()),
        Some("poor".into()),
        Some(OptionValue::Int(5)),
    ];
    let first = serde_json::to_string(&score("heart-health", &answers).unwrap()).unwrap();
    let second = serde_json::to_string(&score("heart-health", &answers).unwrap()).unwrap();
    assert_eq!(first, second);
}
