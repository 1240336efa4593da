//! healthaccess-assessments
//!
//! Self-assessment questionnaire definitions and their scoring rules. Pure
//! data and pure functions, no I/O. Each questionnaire owns one scoring
//! strategy: wellness areas, additive risk points, or factor
//! classification.

pub mod error;
pub mod questionnaire;
pub mod questionnaires;
pub mod result;
pub mod session;

use healthaccess_core::models::answer::OptionValue;

use error::ValidationError;
use questionnaire::Question;
use result::AssessmentResult;

/// Trait implemented by each self-assessment questionnaire.
pub trait Questionnaire: Send + Sync {
    /// Unique key (e.g., "general-health", "diabetes-risk").
    fn id(&self) -> &str;

    /// Human-readable title (e.g., "General Health Check").
    fn title(&self) -> &str;

    fn description(&self) -> &str;

    /// The questions, in the order they are asked.
    fn questions(&self) -> &[Question];

    /// Apply this questionnaire's scoring rules to answers that have already
    /// passed [`Questionnaire::validate_answers`].
    fn score_answers(&self, answers: &[OptionValue]) -> Result<AssessmentResult, ValidationError>;

    /// Check an answer set and return the canonical option value for every
    /// slot. Fails on a length mismatch, on the first unanswered slot, and
    /// then on the first value that is not one of the question's options.
    fn validate_answers(
        &self,
        answers: &[Option<OptionValue>],
    ) -> Result<Vec<OptionValue>, ValidationError> {
        let questions = self.questions();
        if answers.len() != questions.len() {
            return Err(ValidationError::AnswerCountMismatch {
                expected: questions.len(),
                actual: answers.len(),
            });
        }

        if let Some(index) = answers.iter().position(Option::is_none) {
            return Err(ValidationError::Unanswered {
                index,
                question_id: questions[index].id.clone(),
            });
        }

        questions
            .iter()
            .zip(answers.iter().flatten())
            .map(|(question, value)| {
                question
                    .find_option(value)
                    .map(|option| option.value.clone())
                    .ok_or_else(|| question.invalid(value))
            })
            .collect()
    }

    /// Validate, then score. Nothing is scored unless every slot is answered.
    fn score(&self, answers: &[Option<OptionValue>]) -> Result<AssessmentResult, ValidationError> {
        let values = self.validate_answers(answers)?;
        self.score_answers(&values)
    }
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(questionnaires::general_health::GeneralHealth),
        Box::new(questionnaires::diabetes_risk::DiabetesRisk),
        Box::new(questionnaires::heart_health::HeartHealth),
    ]
}

/// Look up a questionnaire by ID.
pub fn get_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}

/// Score a complete answer set for the questionnaire with the given ID.
pub fn score(
    questionnaire_id: &str,
    answers: &[Option<OptionValue>],
) -> Result<AssessmentResult, ValidationError> {
    let questionnaire =
        get_questionnaire(questionnaire_id).ok_or_else(|| ValidationError::UnknownQuestionnaire {
            id: questionnaire_id.to_string(),
        })?;
    questionnaire.score(answers)
}
