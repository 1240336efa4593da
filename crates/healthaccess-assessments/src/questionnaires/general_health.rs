use healthaccess_core::models::answer::OptionValue;

use crate::error::ValidationError;
use crate::questionnaire::{scale_question, select_question, Question};
use crate::result::{AreaScore, AreaStatus, AssessmentResult, WellnessArea, WellnessLevel, WellnessResult};
use crate::Questionnaire;

use super::expect_len;

/// General Health Check: seven lifestyle areas, each scored 1–5.
/// Overall score 7–35, banded into four wellness levels.
pub struct GeneralHealth;

impl Questionnaire for GeneralHealth {
    fn id(&self) -> &str {
        "general-health"
    }

    fn title(&self) -> &str {
        "General Health Check"
    }

    fn description(&self) -> &str {
        "A basic assessment of your overall health and wellness."
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            vec![
                scale_question("energy", "How would you rate your energy level on most days?"),
                select_question(
                    "sleep",
                    "How many hours of sleep do you typically get each night?",
                    &[
                        ("less-than-4", "Less than 4 hours"),
                        ("4-5", "4-5 hours"),
                        ("6-7", "6-7 hours"),
                        ("7-8", "7-8 hours"),
                        ("more-than-8", "More than 8 hours"),
                    ],
                ),
                select_question(
                    "nutrition",
                    "How many servings of fruits and vegetables do you eat daily?",
                    &[
                        ("none", "None"),
                        ("1-2", "1-2 servings"),
                        ("3-4", "3-4 servings"),
                        ("5-plus", "5 or more servings"),
                    ],
                ),
                select_question(
                    "exercise",
                    "How often do you engage in moderate physical activity for at least 30 minutes?",
                    &[
                        ("never", "Never"),
                        ("rarely", "Rarely (few times a month)"),
                        ("sometimes", "Sometimes (once a week)"),
                        ("often", "2-3 times a week"),
                        ("daily", "Daily or almost daily"),
                    ],
                ),
                scale_question("stress", "How would you rate your stress level on most days?"),
                select_question(
                    "water",
                    "How many glasses of water do you drink daily?",
                    &[
                        ("less-than-2", "Less than 2"),
                        ("2-4", "2-4 glasses"),
                        ("5-7", "5-7 glasses"),
                        ("8-plus", "8 or more glasses"),
                    ],
                ),
                select_question(
                    "checkup",
                    "When was your last regular health check-up with a healthcare provider?",
                    &[
                        ("never", "Never had one"),
                        ("more-than-3-years", "More than 3 years ago"),
                        ("1-3-years", "1-3 years ago"),
                        ("less-than-1-year", "Less than a year ago"),
                    ],
                ),
            ]
        });
        &QUESTIONS
    }

    fn score_answers(&self, answers: &[OptionValue]) -> Result<AssessmentResult, ValidationError> {
        expect_len(answers, WellnessArea::ALL.len())?;

        let mut areas = Vec::with_capacity(WellnessArea::ALL.len());
        let mut advice = Vec::new();
        for ((area, question), value) in WellnessArea::ALL.into_iter().zip(self.questions()).zip(answers) {
            let (score, status, recommendation) =
                area_rule(area, value).ok_or_else(|| question.invalid(value))?;
            areas.push(AreaScore { area, score, status });
            advice.extend(recommendation.map(str::to_string));
        }

        let overall_score = areas.iter().map(|a| a.score).sum();
        let level = level_for(overall_score);

        let mut recommendations = Vec::with_capacity(advice.len() + 1);
        recommendations.push(level_summary(level).to_string());
        recommendations.extend(advice);

        Ok(AssessmentResult::Wellness(WellnessResult {
            areas,
            overall_score,
            level,
            recommendations,
        }))
    }
}

/// Area score, status, and the advice to add (if any) for one answer.
type AreaRule = (u32, AreaStatus, Option<&'static str>);

fn area_rule(area: WellnessArea, value: &OptionValue) -> Option<AreaRule> {
    match area {
        WellnessArea::Energy => value.as_int().and_then(energy),
        WellnessArea::Sleep => value.as_text().and_then(sleep),
        WellnessArea::Nutrition => value.as_text().and_then(nutrition),
        WellnessArea::Exercise => value.as_text().and_then(exercise),
        WellnessArea::Stress => value.as_int().and_then(stress),
        WellnessArea::Hydration => value.as_text().and_then(hydration),
        WellnessArea::Preventive => value.as_text().and_then(preventive),
    }
}

fn energy(rating: i64) -> Option<AreaRule> {
    const LOW: &str = "Consider discussing low energy levels with a healthcare provider.";
    Some(match rating {
        1 => (1, AreaStatus::NeedsImprovement, Some(LOW)),
        2 => (2, AreaStatus::NeedsImprovement, Some(LOW)),
        3 => (
            3,
            AreaStatus::Moderate,
            Some("Try to identify activities or times when your energy is highest and schedule important tasks then."),
        ),
        4 => (4, AreaStatus::Good, None),
        5 => (5, AreaStatus::Good, None),
        _ => return None,
    })
}

fn sleep(value: &str) -> Option<AreaRule> {
    Some(match value {
        "less-than-4" => (
            1,
            AreaStatus::NeedsImprovement,
            Some("Chronic sleep deprivation can severely impact health. Consider speaking with a healthcare provider about sleep issues."),
        ),
        "4-5" => (
            2,
            AreaStatus::NeedsImprovement,
            Some("Try to increase your sleep duration to at least 7 hours per night."),
        ),
        "6-7" => (
            3,
            AreaStatus::Moderate,
            Some("You're getting close to the recommended amount of sleep. Try to get a full 7-8 hours when possible."),
        ),
        "7-8" => (5, AreaStatus::Good, None),
        "more-than-8" => (4, AreaStatus::Good, None),
        _ => return None,
    })
}

// "3-4" scores 4 but is only Moderate; kept as-is.
fn nutrition(value: &str) -> Option<AreaRule> {
    Some(match value {
        "none" => (
            1,
            AreaStatus::NeedsImprovement,
            Some("Try to gradually add fruits and vegetables to your diet, aiming for at least 5 servings daily."),
        ),
        "1-2" => (
            2,
            AreaStatus::NeedsImprovement,
            Some("Increase your fruit and vegetable intake to at least 5 servings daily."),
        ),
        "3-4" => (
            4,
            AreaStatus::Moderate,
            Some("You're doing well with fruits and vegetables. Try to reach 5 or more servings daily."),
        ),
        "5-plus" => (5, AreaStatus::Good, None),
        _ => return None,
    })
}

fn exercise(value: &str) -> Option<AreaRule> {
    Some(match value {
        "never" => (
            1,
            AreaStatus::NeedsImprovement,
            Some("Start with short walks and gradually build up to 30 minutes of physical activity most days."),
        ),
        "rarely" => (
            2,
            AreaStatus::NeedsImprovement,
            Some("Try to increase your physical activity to at least 150 minutes per week."),
        ),
        "sometimes" => (
            3,
            AreaStatus::Moderate,
            Some("You're on the right track with exercise. Aim for at least 30 minutes of activity 5 days a week."),
        ),
        "often" => (4, AreaStatus::Good, None),
        "daily" => (5, AreaStatus::Good, None),
        _ => return None,
    })
}

/// Stress is inverted: area score is `6 - rating`.
fn stress(rating: i64) -> Option<AreaRule> {
    const HIGH: &str = "Consider stress management techniques like meditation, deep breathing, or speaking with a mental health professional.";
    Some(match rating {
        1 => (5, AreaStatus::Good, None),
        2 => (4, AreaStatus::Good, None),
        3 => (
            3,
            AreaStatus::Moderate,
            Some("Practice regular stress reduction activities like walking in nature, mindfulness, or hobbies you enjoy."),
        ),
        4 => (2, AreaStatus::NeedsImprovement, Some(HIGH)),
        5 => (1, AreaStatus::NeedsImprovement, Some(HIGH)),
        _ => return None,
    })
}

fn hydration(value: &str) -> Option<AreaRule> {
    Some(match value {
        "less-than-2" => (
            1,
            AreaStatus::NeedsImprovement,
            Some("Increase your water intake gradually to at least 8 glasses per day."),
        ),
        "2-4" => (
            2,
            AreaStatus::NeedsImprovement,
            Some("Try to drink at least 8 glasses of water daily for proper hydration."),
        ),
        "5-7" => (
            4,
            AreaStatus::Moderate,
            Some("You're doing well with hydration. Try to reach 8 or more glasses daily."),
        ),
        "8-plus" => (5, AreaStatus::Good, None),
        _ => return None,
    })
}

fn preventive(value: &str) -> Option<AreaRule> {
    Some(match value {
        "never" => (
            1,
            AreaStatus::NeedsImprovement,
            Some("Schedule a check-up with a healthcare provider as soon as possible."),
        ),
        "more-than-3-years" => (
            2,
            AreaStatus::NeedsImprovement,
            Some("It's been over 3 years since your last check-up. Consider scheduling one soon."),
        ),
        "1-3-years" => (
            3,
            AreaStatus::Moderate,
            Some("Consider scheduling your next regular check-up if it's been close to 2 years."),
        ),
        "less-than-1-year" => (5, AreaStatus::Good, None),
        _ => return None,
    })
}

fn level_for(overall_score: u32) -> WellnessLevel {
    match overall_score {
        28.. => WellnessLevel::Excellent,
        21..=27 => WellnessLevel::Good,
        14..=20 => WellnessLevel::Moderate,
        _ => WellnessLevel::NeedsSignificantImprovement,
    }
}

fn level_summary(level: WellnessLevel) -> &'static str {
    match level {
        WellnessLevel::Excellent => {
            "Your overall health habits are excellent. Continue your healthy lifestyle and schedule regular check-ups."
        }
        WellnessLevel::Good => {
            "Your overall health habits are good. Focus on the specific areas for improvement identified in this assessment."
        }
        WellnessLevel::Moderate => {
            "Your overall health habits need some improvement. Consider discussing this assessment with a healthcare provider."
        }
        WellnessLevel::NeedsSignificantImprovement => {
            "Your overall health habits need significant improvement. We strongly recommend discussing these results with a healthcare provider."
        }
    }
}
