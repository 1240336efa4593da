//! Turning typed input into answers.

use std::path::Path;

use healthaccess_assessments::questionnaire::Question;
use healthaccess_core::models::answer::{AnswerSet, OptionValue};

/// One line typed during an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Answer(OptionValue),
    /// Empty line: keep the current answer and move on.
    Continue,
    Back,
    Quit,
}

/// Interpret a line for `question`. A number from 1 to the option count
/// picks that option; anything else is taken as an option value and
/// checked when it is recorded.
pub fn parse_reply(question: &Question, line: &str) -> Reply {
    let line = line.trim();
    match line {
        "" => return Reply::Continue,
        "b" | "back" => return Reply::Back,
        "q" | "quit" => return Reply::Quit,
        _ => {}
    }

    let numbered = line
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| question.options.get(i));
    match numbered {
        Some(option) => Reply::Answer(option.value.clone()),
        None => Reply::Answer(OptionValue::from(line)),
    }
}

/// Read an answers file: a JSON array with one entry per question, each a
/// string, an integer, or `null`.
pub fn read_answers_file(path: &Path) -> eyre::Result<AnswerSet> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read answers at {}: {e}", path.display()))?;
    parse_answers(&contents)
}

pub fn parse_answers(json: &str) -> eyre::Result<AnswerSet> {
    serde_json::from_str(json).map_err(|e| eyre::eyre!("answers must be a JSON array: {e}"))
}
