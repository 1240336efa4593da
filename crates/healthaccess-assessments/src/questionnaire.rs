use serde::{Deserialize, Serialize};
use ts_rs::TS;

use healthaccess_core::models::answer::OptionValue;

use crate::error::ValidationError;

/// How a question is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum QuestionType {
    /// 1–5 rating, integer option values.
    Scale,
    /// One of several keyed options.
    SingleSelect,
}

/// A selectable answer. `score` only matters to additive risk questionnaires;
/// a missing score counts as 0.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: OptionValue,
    pub label: String,
    pub score: Option<u32>,
}

impl AnswerOption {
    pub fn score_or_zero(&self) -> u32 {
        self.score.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Find the option a raw answer refers to.
    pub fn find_option(&self, value: &OptionValue) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.value.matches(value))
    }

    pub(crate) fn invalid(&self, value: &OptionValue) -> ValidationError {
        ValidationError::InvalidOption {
            question_id: self.id.clone(),
            value: value.to_string(),
        }
    }
}

/// Build a 1–5 scale question with the standard "Very low" … "Very high" labels.
pub(crate) fn scale_question(id: &str, text: &str) -> Question {
    let labels = ["Very low", "Low", "Moderate", "High", "Very high"];
    Question {
        id: id.to_string(),
        text: text.to_string(),
        question_type: QuestionType::Scale,
        options: labels
            .iter()
            .zip(1i64..)
            .map(|(label, value)| AnswerOption {
                value: OptionValue::Int(value),
                label: label.to_string(),
                score: None,
            })
            .collect(),
    }
}

/// Build a select question from `(value, label)` pairs.
pub(crate) fn select_question(id: &str, text: &str, options: &[(&str, &str)]) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        question_type: QuestionType::SingleSelect,
        options: options
            .iter()
            .map(|(value, label)| AnswerOption {
                value: OptionValue::from(*value),
                label: label.to_string(),
                score: None,
            })
            .collect(),
    }
}

/// Build a select question whose options carry risk points.
pub(crate) fn scored_question(id: &str, text: &str, options: &[(&str, &str, u32)]) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        question_type: QuestionType::SingleSelect,
        options: options
            .iter()
            .map(|(value, label, score)| AnswerOption {
                value: OptionValue::from(*value),
                label: label.to_string(),
                score: Some(*score),
            })
            .collect(),
    }
}
