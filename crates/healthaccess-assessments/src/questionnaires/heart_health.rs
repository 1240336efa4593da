use healthaccess_core::models::answer::OptionValue;

use crate::error::ValidationError;
use crate::questionnaire::{scale_question, select_question, Question};
use crate::result::{AssessmentResult, FactorResult, FactorStatus};
use crate::Questionnaire;

use super::expect_len;

pub const DISCLAIMER: &str = "This assessment provides a general indication of heart health factors but does not constitute medical advice or diagnosis. Please consult with a healthcare provider for proper evaluation.";

/// Appended to every heart health result, after the per-question advice.
const GENERAL_ADVICE: [&str; 2] = [
    "Schedule regular check-ups with your healthcare provider",
    "Know your numbers (blood pressure, cholesterol, blood sugar)",
];

/// Heart Health Assessment: eight cardiovascular questions, each
/// classified independently into a risk factor, a positive factor, or
/// neither. The risk-factor count picks the overall status.
pub struct HeartHealth;

impl Questionnaire for HeartHealth {
    fn id(&self) -> &str {
        "heart-health"
    }

    fn title(&self) -> &str {
        "Heart Health Assessment"
    }

    fn description(&self) -> &str {
        "Evaluate your cardiovascular health and risk factors."
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            vec![
                select_question(
                    "blood-pressure",
                    "Do you know your blood pressure?",
                    &[
                        ("normal", "Normal (less than 120/80)"),
                        ("elevated", "Elevated (120-129/less than 80)"),
                        ("high-stage1", "High Stage 1 (130-139/80-89)"),
                        ("high-stage2", "High Stage 2 (140+/90+)"),
                        ("dont-know", "I don't know"),
                    ],
                ),
                select_question(
                    "cholesterol",
                    "Do you know your cholesterol levels?",
                    &[
                        ("normal", "Normal (Total < 200, LDL < 100, HDL > 60)"),
                        ("borderline", "Borderline high"),
                        ("high", "High"),
                        ("dont-know", "I don't know"),
                    ],
                ),
                select_question(
                    "smoking",
                    "Do you smoke tobacco products?",
                    &[
                        ("never", "Never smoked"),
                        ("former", "Former smoker"),
                        ("current", "Current smoker"),
                    ],
                ),
                select_question(
                    "diabetes",
                    "Do you have diabetes?",
                    &[
                        ("no", "No"),
                        ("prediabetes", "Prediabetes"),
                        ("yes", "Yes"),
                        ("dont-know", "I don't know"),
                    ],
                ),
                select_question(
                    "exercise",
                    "How often do you engage in moderate to vigorous physical activity?",
                    &[
                        ("rarely", "Rarely or never"),
                        ("sometimes", "1-2 times per week"),
                        ("regular", "3-4 times per week"),
                        ("frequent", "5+ times per week"),
                    ],
                ),
                select_question(
                    "family-history",
                    "Do you have a family history of heart disease?",
                    &[
                        ("no", "No"),
                        ("yes-distant", "Yes (extended family)"),
                        ("yes-immediate", "Yes (immediate family)"),
                        ("dont-know", "I don't know"),
                    ],
                ),
                select_question(
                    "diet",
                    "How would you describe your diet?",
                    &[
                        ("poor", "High in processed foods, salt, and sugar"),
                        ("fair", "Moderate balance of healthy and unhealthy foods"),
                        ("good", "Mostly fruits, vegetables, whole grains, lean proteins"),
                        (
                            "excellent",
                            "Heart-healthy diet (low sodium, low saturated fat, high fiber)",
                        ),
                    ],
                ),
                scale_question("stress", "How would you rate your stress level most days?"),
            ]
        });
        &QUESTIONS
    }

    fn score_answers(&self, answers: &[OptionValue]) -> Result<AssessmentResult, ValidationError> {
        let questions = self.questions();
        expect_len(answers, questions.len())?;

        let mut risk_factors = Vec::new();
        let mut positive_factors = Vec::new();
        let mut advice = Vec::new();
        for (position, (question, value)) in questions.iter().zip(answers).enumerate() {
            let finding = classify(position, value).ok_or_else(|| question.invalid(value))?;
            match finding {
                Finding::Risk { factor, advice: a } => {
                    risk_factors.push(factor.to_string());
                    advice.push(a.to_string());
                }
                Finding::Positive(factor) => positive_factors.push(factor.to_string()),
                Finding::Neutral => {}
            }
        }
        advice.extend(GENERAL_ADVICE.iter().map(|a| a.to_string()));

        let overall_status = status_for(risk_factors.len());
        let mut recommendations = Vec::with_capacity(advice.len() + 1);
        recommendations.push(status_summary(overall_status).to_string());
        recommendations.extend(advice);

        Ok(AssessmentResult::Factor(FactorResult {
            risk_factors,
            positive_factors,
            overall_status,
            recommendations,
            disclaimer: DISCLAIMER.to_string(),
        }))
    }
}

/// What a single answer contributes to the result.
enum Finding {
    Risk {
        factor: &'static str,
        advice: &'static str,
    },
    Positive(&'static str),
    Neutral,
}

fn risk(factor: &'static str, advice: &'static str) -> Finding {
    Finding::Risk { factor, advice }
}

/// `None` when the value is not a recognized answer for that position.
fn classify(position: usize, value: &OptionValue) -> Option<Finding> {
    match position {
        0 => value.as_text().and_then(blood_pressure),
        1 => value.as_text().and_then(cholesterol),
        2 => value.as_text().and_then(smoking),
        3 => value.as_text().and_then(diabetes),
        4 => value.as_text().and_then(exercise),
        5 => value.as_text().and_then(family_history),
        6 => value.as_text().and_then(diet),
        7 => value.as_int().and_then(stress),
        _ => None,
    }
}

fn blood_pressure(value: &str) -> Option<Finding> {
    Some(match value {
        "high-stage1" | "high-stage2" => risk(
            "Elevated blood pressure",
            "Work with a healthcare provider to monitor and manage your blood pressure",
        ),
        "normal" => Finding::Positive("Normal blood pressure"),
        "elevated" | "dont-know" => Finding::Neutral,
        _ => return None,
    })
}

fn cholesterol(value: &str) -> Option<Finding> {
    Some(match value {
        "high" => risk(
            "High cholesterol",
            "Discuss cholesterol management with a healthcare provider",
        ),
        "normal" => Finding::Positive("Healthy cholesterol levels"),
        "borderline" | "dont-know" => Finding::Neutral,
        _ => return None,
    })
}

fn smoking(value: &str) -> Option<Finding> {
    Some(match value {
        "current" => risk(
            "Current smoker",
            "Quitting smoking is one of the most important steps to improve heart health",
        ),
        "never" => Finding::Positive("Non-smoker"),
        "former" => Finding::Positive(
            "Former smoker (quitting smoking significantly reduces heart disease risk)",
        ),
        _ => return None,
    })
}

fn diabetes(value: &str) -> Option<Finding> {
    Some(match value {
        "yes" => risk(
            "Diabetes",
            "Continue to work with healthcare providers to manage diabetes",
        ),
        "prediabetes" => risk(
            "Prediabetes",
            "Work with healthcare providers to prevent progression to diabetes",
        ),
        "no" | "dont-know" => Finding::Neutral,
        _ => return None,
    })
}

fn exercise(value: &str) -> Option<Finding> {
    Some(match value {
        "rarely" => risk(
            "Limited physical activity",
            "Gradually increase physical activity to at least 150 minutes of moderate activity per week",
        ),
        "regular" | "frequent" => Finding::Positive("Regular physical activity"),
        "sometimes" => Finding::Neutral,
        _ => return None,
    })
}

fn family_history(value: &str) -> Option<Finding> {
    Some(match value {
        "yes-immediate" => risk(
            "Family history of heart disease (immediate family)",
            "Share your family history with your healthcare provider",
        ),
        "no" | "yes-distant" | "dont-know" => Finding::Neutral,
        _ => return None,
    })
}

fn diet(value: &str) -> Option<Finding> {
    Some(match value {
        "poor" => risk(
            "Diet high in processed foods, salt, and sugar",
            "Gradually transition to a heart-healthy diet with more fruits, vegetables, and whole grains",
        ),
        "good" | "excellent" => Finding::Positive("Heart-healthy diet"),
        "fair" => Finding::Neutral,
        _ => return None,
    })
}

fn stress(rating: i64) -> Option<Finding> {
    Some(match rating {
        4 | 5 => risk(
            "High stress levels",
            "Incorporate stress management techniques like meditation, deep breathing, or physical activity",
        ),
        1..=3 => Finding::Neutral,
        _ => return None,
    })
}

fn status_for(risk_factor_count: usize) -> FactorStatus {
    match risk_factor_count {
        3.. => FactorStatus::Multiple,
        1..=2 => FactorStatus::Present,
        0 => FactorStatus::FewOrNone,
    }
}

fn status_summary(status: FactorStatus) -> &'static str {
    match status {
        FactorStatus::Multiple => "Consider discussing these risk factors with a healthcare provider",
        FactorStatus::Present => "Consider lifestyle changes to address the identified risk factors",
        FactorStatus::FewOrNone => "Continue your heart-healthy habits",
    }
}
