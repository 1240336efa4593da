use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The value carried by a selectable option.
///
/// Scale questions use integers (1–5), select questions use string keys
/// such as `"7-8"` or `"less-than-1-year"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum OptionValue {
    Int(i64),
    Text(String),
}

impl OptionValue {
    /// Compare two values, treating an integer and its decimal string form
    /// as equal. Answers typed at a prompt always arrive as text.
    pub fn matches(&self, other: &OptionValue) -> bool {
        match (self, other) {
            (OptionValue::Int(a), OptionValue::Int(b)) => a == b,
            (OptionValue::Text(a), OptionValue::Text(b)) => a == b,
            (OptionValue::Int(n), OptionValue::Text(s))
            | (OptionValue::Text(s), OptionValue::Int(n)) => {
                s.trim().parse::<i64>().is_ok_and(|parsed| parsed == *n)
            }
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            OptionValue::Int(_) => None,
        }
    }

    /// Integer view of the value, parsing text if needed.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptionValue::Int(n) => Some(*n),
            OptionValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Int(n) => write!(f, "{n}"),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Int(n)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

/// One slot per question, `None` until the question is answered.
pub type AnswerSet = Vec<Option<OptionValue>>;

/// A fresh answer set with every slot unanswered.
pub fn empty_answer_set(len: usize) -> AnswerSet {
    vec![None; len]
}

/// Index of the first unanswered slot, if any.
pub fn first_unanswered(answers: &[Option<OptionValue>]) -> Option<usize> {
    answers.iter().position(Option::is_none)
}
