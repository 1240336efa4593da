use std::io::Cursor;

use healthaccess_assessments::result::{AssessmentResult, RiskTier};
use healthaccess_assessments::session::AssessmentSession;
use healthaccess_cli::commands::run_session;
use healthaccess_cli::input::{parse_answers, parse_reply, Reply};
use healthaccess_core::models::answer::OptionValue;

fn drive(id: &str, script: &str) -> (Option<healthaccess_assessments::session::CompletedAssessment>, String) {
    let mut session = AssessmentSession::start(id).unwrap();
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut out = Vec::new();
    let completed = run_session(&mut session, &mut input, &mut out).unwrap();
    (completed, String::from_utf8(out).unwrap())
}

#[test]
fn numbers_pick_options_by_position() {
    let session = AssessmentSession::start("diabetes-risk").unwrap();
    let question = session.current_question();
    assert_eq!(parse_reply(question, "2\n"), Reply::Answer(OptionValue::from("40-49")));
    assert_eq!(parse_reply(question, " 60-plus "), Reply::Answer(OptionValue::from("60-plus")));
    assert_eq!(parse_reply(question, "9"), Reply::Answer(OptionValue::from("9")));
    assert_eq!(parse_reply(question, ""), Reply::Continue);
    assert_eq!(parse_reply(question, "b"), Reply::Back);
    assert_eq!(parse_reply(question, "q"), Reply::Quit);
}

#[test]
fn scale_numbers_map_to_ratings() {
    let session = AssessmentSession::start("general-health").unwrap();
    assert_eq!(
        parse_reply(session.current_question(), "4"),
        Reply::Answer(OptionValue::Int(4))
    );
}

#[test]
fn full_run_submits_after_last_answer() {
    let (completed, out) = drive("diabetes-risk", "4\n4\n4\n2\n2\n2\n2\n2\n");
    let completed = completed.unwrap();
    assert_eq!(completed.questionnaire_id, "diabetes-risk");
    match completed.result {
        AssessmentResult::RiskScore(r) => {
            assert_eq!(r.score, 3 + 2 + 2 + 1 + 1 + 1 + 2 + 2);
            assert_eq!(r.risk_tier, RiskTier::High);
        }
        other => panic!("unexpected result {other:?}"),
    }
    assert!(out.contains("Question 1 of 8 (0%)"));
    assert!(out.contains("Question 8 of 8 (100%)"));
}

#[test]
fn empty_line_on_unanswered_question_is_refused() {
    let (completed, out) = drive("diabetes-risk", "\nq\n");
    assert!(completed.is_none());
    assert!(out.contains("Please answer the question before continuing."));
}

#[test]
fn invalid_answer_stays_on_question() {
    let (_, out) = drive("diabetes-risk", "seventy\nq\n");
    assert!(out.contains("'seventy' is not an option for question 'age'"));
    assert_eq!(out.matches("Question 1 of 8").count(), 2);
}

#[test]
fn back_keeps_earlier_answers() {
    // Answer q1, go back, accept the kept answer, then finish.
    let (completed, out) = drive("diabetes-risk", "1\nb\n\n1\n1\n1\n1\n1\n1\n1\n");
    let completed = completed.unwrap();
    assert_eq!(completed.answers[0], OptionValue::from("under-40"));
    assert!(out.contains(" *1) Under 40 years"));
    match completed.result {
        AssessmentResult::RiskScore(r) => assert_eq!(r.risk_tier, RiskTier::Low),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn back_on_first_question_is_noted() {
    let (_, out) = drive("heart-health", "b\nq\n");
    assert!(out.contains("Already at the first question."));
}

#[test]
fn end_of_input_abandons() {
    let (completed, _) = drive("general-health", "5\n");
    assert!(completed.is_none());
}

#[test]
fn answers_file_allows_nulls_and_mixed_values() {
    let answers = parse_answers(r#"[5, "7-8", null]"#).unwrap();
    assert_eq!(
        answers,
        vec![Some(OptionValue::Int(5)), Some(OptionValue::from("7-8")), None]
    );
    assert!(parse_answers(r#"{"energy": 5}"#).is_err());
}
