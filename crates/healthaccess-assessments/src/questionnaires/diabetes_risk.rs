use healthaccess_core::models::answer::OptionValue;

use crate::error::ValidationError;
use crate::questionnaire::{scored_question, Question};
use crate::result::{AssessmentResult, RiskScoreResult, RiskTier};
use crate::Questionnaire;

use super::expect_len;

pub const DISCLAIMER: &str = "This assessment provides a general indication of diabetes risk but does not constitute medical advice or diagnosis. Please consult with a healthcare provider for proper evaluation.";

/// Diabetes Risk Assessment: eight type 2 diabetes risk questions, each
/// option worth 0–3 points. Total ≤3 low, 4–8 moderate, 9+ high.
pub struct DiabetesRisk;

impl Questionnaire for DiabetesRisk {
    fn id(&self) -> &str {
        "diabetes-risk"
    }

    fn title(&self) -> &str {
        "Diabetes Risk Assessment"
    }

    fn description(&self) -> &str {
        "Evaluate your risk factors for developing type 2 diabetes."
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            vec![
                scored_question(
                    "age",
                    "What is your age?",
                    &[
                        ("under-40", "Under 40 years", 0),
                        ("40-49", "40-49 years", 1),
                        ("50-59", "50-59 years", 2),
                        ("60-plus", "60+ years", 3),
                    ],
                ),
                scored_question(
                    "bmi",
                    "What is your BMI (Body Mass Index)? If you don't know, select \"I don't know\" for guidance on calculating it.",
                    &[
                        ("dont-know", "I don't know", 0),
                        ("under-25", "Less than 25", 0),
                        ("25-30", "25-30", 1),
                        ("30-plus", "Above 30", 2),
                    ],
                ),
                scored_question(
                    "waist",
                    "Measure your waist circumference at the level of your navel. What is your waist measurement?",
                    &[
                        ("dont-know", "I don't know", 0),
                        (
                            "men-under-37-women-under-31",
                            "For men: less than 37 inches / For women: less than 31 inches",
                            0,
                        ),
                        (
                            "men-37-40-women-31-35",
                            "For men: 37-40 inches / For women: 31-35 inches",
                            1,
                        ),
                        (
                            "men-over-40-women-over-35",
                            "For men: over 40 inches / For women: over 35 inches",
                            2,
                        ),
                    ],
                ),
                scored_question(
                    "activity",
                    "Are you physically active for at least 30 minutes daily?",
                    &[("yes", "Yes", 0), ("no", "No", 1)],
                ),
                scored_question(
                    "diet",
                    "How often do you eat vegetables and fruits?",
                    &[("daily", "Every day", 0), ("not-daily", "Not every day", 1)],
                ),
                scored_question(
                    "blood-pressure",
                    "Have you ever been diagnosed with high blood pressure?",
                    &[("no", "No", 0), ("yes", "Yes", 1)],
                ),
                scored_question(
                    "blood-glucose",
                    "Have you ever been found to have high blood glucose (sugar)?",
                    &[("no", "No", 0), ("yes", "Yes", 2)],
                ),
                scored_question(
                    "family-history",
                    "Do you have a family history of diabetes (parent, sibling)?",
                    &[("no", "No", 0), ("yes", "Yes", 2)],
                ),
            ]
        });
        &QUESTIONS
    }

    fn score_answers(&self, answers: &[OptionValue]) -> Result<AssessmentResult, ValidationError> {
        let questions = self.questions();
        expect_len(answers, questions.len())?;

        let mut score = 0;
        for (question, value) in questions.iter().zip(answers) {
            let option = question
                .find_option(value)
                .ok_or_else(|| question.invalid(value))?;
            score += option.score_or_zero();
        }

        let risk_tier = tier_for(score);
        Ok(AssessmentResult::RiskScore(RiskScoreResult {
            score,
            risk_tier,
            explanation: explanation(risk_tier).to_string(),
            recommendations: recommendations(risk_tier)
                .iter()
                .map(|r| r.to_string())
                .collect(),
            disclaimer: DISCLAIMER.to_string(),
        }))
    }
}

pub fn tier_for(score: u32) -> RiskTier {
    match score {
        0..=3 => RiskTier::Low,
        4..=8 => RiskTier::Moderate,
        _ => RiskTier::High,
    }
}

fn explanation(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Low => {
            "Your results suggest a lower risk of type 2 diabetes based on the factors assessed."
        }
        RiskTier::Moderate => {
            "Your results suggest a moderate risk of type 2 diabetes based on the factors assessed."
        }
        RiskTier::High => {
            "Your results suggest a higher risk of type 2 diabetes based on the factors assessed."
        }
    }
}

fn recommendations(tier: RiskTier) -> &'static [&'static str] {
    match tier {
        RiskTier::Low => &[
            "Maintain a healthy lifestyle with regular physical activity and balanced diet",
            "Continue with regular healthcare check-ups",
            "Learn about the warning signs of diabetes",
        ],
        RiskTier::Moderate => &[
            "Consider speaking with a healthcare provider about your diabetes risk",
            "Aim for at least 30 minutes of physical activity most days",
            "Focus on a diet rich in fruits, vegetables, and whole grains",
            "Maintain a healthy weight or work towards weight loss if needed",
            "Consider getting your blood sugar tested",
        ],
        RiskTier::High => &[
            "Schedule an appointment with a healthcare provider to discuss your diabetes risk",
            "Ask about getting your blood sugar tested",
            "Work with healthcare providers on a plan to reduce risk factors",
            "Aim for 150 minutes of physical activity per week",
            "Consider consulting with a nutritionist for dietary guidance",
            "Monitor for symptoms like increased thirst, frequent urination, or unexplained fatigue",
        ],
    }
}
