use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::OptionValue;
use crate::error::CoreError;

/// A completed assessment as it is kept in the results log.
///
/// `id` is the completion time in epoch milliseconds. `result` holds the
/// serialized scoring result; its shape depends on the questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SavedAssessment {
    pub id: i64,
    pub questionnaire_id: String,
    pub title: String,
    pub completed_at: jiff::Timestamp,
    pub answers: Vec<OptionValue>,
    pub result: serde_json::Value,
}

impl SavedAssessment {
    pub fn new<R: Serialize>(
        questionnaire_id: impl Into<String>,
        title: impl Into<String>,
        answers: Vec<OptionValue>,
        result: &R,
        completed_at: jiff::Timestamp,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            id: completed_at.as_millisecond(),
            questionnaire_id: questionnaire_id.into(),
            title: title.into(),
            completed_at,
            answers,
            result: serde_json::to_value(result)?,
        })
    }
}
