pub mod diabetes_risk;
pub mod general_health;
pub mod heart_health;

use healthaccess_core::models::answer::OptionValue;

use crate::error::ValidationError;

/// Every positional strategy needs exactly one answer per question.
pub(crate) fn expect_len(answers: &[OptionValue], expected: usize) -> Result<(), ValidationError> {
    if answers.len() == expected {
        Ok(())
    } else {
        Err(ValidationError::AnswerCountMismatch {
            expected,
            actual: answers.len(),
        })
    }
}
