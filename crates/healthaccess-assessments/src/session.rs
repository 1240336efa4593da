use serde::{Deserialize, Serialize};
use ts_rs::TS;

use healthaccess_core::error::CoreError;
use healthaccess_core::models::answer::{empty_answer_set, first_unanswered, AnswerSet, OptionValue};
use healthaccess_core::models::record::SavedAssessment;

use crate::error::ValidationError;
use crate::questionnaire::Question;
use crate::result::AssessmentResult;
use crate::{get_questionnaire, Questionnaire};

/// An in-progress assessment: one questionnaire, its answer slots, and the
/// question currently being asked. Owned by whoever is collecting answers.
pub struct AssessmentSession {
    questionnaire: Box<dyn Questionnaire>,
    answers: AnswerSet,
    current: usize,
}

/// Position within the questionnaire, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based question number.
    pub position: usize,
    pub total: usize,
    /// 0 on the first question, 100 on the last.
    pub percent: usize,
}

/// A scored assessment. The answers are a frozen copy taken at submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompletedAssessment {
    pub questionnaire_id: String,
    pub title: String,
    pub answers: Vec<OptionValue>,
    pub result: AssessmentResult,
}

impl CompletedAssessment {
    /// Shape this assessment for the results log.
    pub fn to_record(&self, completed_at: jiff::Timestamp) -> Result<SavedAssessment, CoreError> {
        SavedAssessment::new(
            self.questionnaire_id.clone(),
            self.title.clone(),
            self.answers.clone(),
            &self.result,
            completed_at,
        )
    }
}

impl AssessmentSession {
    pub fn start(questionnaire_id: &str) -> Result<Self, ValidationError> {
        let questionnaire =
            get_questionnaire(questionnaire_id).ok_or_else(|| ValidationError::UnknownQuestionnaire {
                id: questionnaire_id.to_string(),
            })?;
        Ok(Self::new(questionnaire))
    }

    pub fn new(questionnaire: Box<dyn Questionnaire>) -> Self {
        let answers = empty_answer_set(questionnaire.questions().len());
        Self {
            questionnaire,
            answers,
            current: 0,
        }
    }

    pub fn questionnaire(&self) -> &dyn Questionnaire {
        self.questionnaire.as_ref()
    }

    pub fn answers(&self) -> &[Option<OptionValue>] {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.questionnaire.questions()[self.current]
    }

    pub fn current_answer(&self) -> Option<&OptionValue> {
        self.answers[self.current].as_ref()
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.answers.len()
    }

    pub fn progress(&self) -> Progress {
        let total = self.answers.len();
        let percent = if total <= 1 {
            100
        } else {
            self.current * 100 / (total - 1)
        };
        Progress {
            position: self.current + 1,
            total,
            percent,
        }
    }

    /// Record an answer for the current question.
    pub fn answer(&mut self, value: impl Into<OptionValue>) -> Result<(), ValidationError> {
        self.answer_at(self.current, value)
    }

    /// Record an answer for any question. The stored value is the option's
    /// own value, so `"3"` typed for a scale question is kept as `3`.
    pub fn answer_at(
        &mut self,
        index: usize,
        value: impl Into<OptionValue>,
    ) -> Result<(), ValidationError> {
        let value = value.into();
        let question = self
            .questionnaire
            .questions()
            .get(index)
            .ok_or(ValidationError::QuestionOutOfRange {
                index,
                len: self.answers.len(),
            })?;
        let option = question
            .find_option(&value)
            .ok_or_else(|| question.invalid(&value))?;
        self.answers[index] = Some(option.value.clone());
        Ok(())
    }

    /// Move to the next question. Refuses while the current question is
    /// unanswered. Returns `false` when already on the last question.
    pub fn advance(&mut self) -> Result<bool, ValidationError> {
        if self.answers[self.current].is_none() {
            return Err(ValidationError::Unanswered {
                index: self.current,
                question_id: self.current_question().id.clone(),
            });
        }
        if self.is_last() {
            return Ok(false);
        }
        self.current += 1;
        Ok(true)
    }

    /// Move to the previous question. Returns `false` on the first question.
    pub fn back(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), ValidationError> {
        if index >= self.answers.len() {
            return Err(ValidationError::QuestionOutOfRange {
                index,
                len: self.answers.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    pub fn first_unanswered(&self) -> Option<usize> {
        first_unanswered(&self.answers)
    }

    /// Score the session. On an unanswered question the session is left
    /// untouched so the caller can [`go_to`](Self::go_to) it.
    pub fn submit(&self) -> Result<CompletedAssessment, ValidationError> {
        let answers = self.questionnaire.validate_answers(&self.answers)?;
        let result = self.questionnaire.score_answers(&answers)?;
        Ok(CompletedAssessment {
            questionnaire_id: self.questionnaire.id().to_string(),
            title: self.questionnaire.title().to_string(),
            answers,
            result,
        })
    }
}
