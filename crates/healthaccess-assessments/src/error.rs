use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Why an answer set could not be scored or an answer could not be recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationError {
    #[error("unknown questionnaire: {id}")]
    UnknownQuestionnaire { id: String },

    #[error("question '{question_id}' at index {index} is unanswered")]
    Unanswered { index: usize, question_id: String },

    #[error("expected {expected} answers, got {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },

    #[error("'{value}' is not an option for question '{question_id}'")]
    InvalidOption { question_id: String, value: String },

    #[error("question index {index} is out of range ({len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },
}
