use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Scored output of an assessment. The shape depends on the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentResult {
    Wellness(WellnessResult),
    RiskScore(RiskScoreResult),
    Factor(FactorResult),
}

impl AssessmentResult {
    pub fn recommendations(&self) -> &[String] {
        match self {
            AssessmentResult::Wellness(r) => &r.recommendations,
            AssessmentResult::RiskScore(r) => &r.recommendations,
            AssessmentResult::Factor(r) => &r.recommendations,
        }
    }

    pub fn disclaimer(&self) -> Option<&str> {
        match self {
            AssessmentResult::Wellness(_) => None,
            AssessmentResult::RiskScore(r) => Some(&r.disclaimer),
            AssessmentResult::Factor(r) => Some(&r.disclaimer),
        }
    }

    /// One-line summary: wellness level, risk tier, or overall status.
    pub fn headline(&self) -> String {
        match self {
            AssessmentResult::Wellness(r) => {
                format!("{} ({}/{})", r.level, r.overall_score, WellnessResult::MAX_SCORE)
            }
            AssessmentResult::RiskScore(r) => format!("{} (score {})", r.risk_tier, r.score),
            AssessmentResult::Factor(r) => r.overall_status.to_string(),
        }
    }
}

// ── Wellness ────────────────────────────────────────────────────────

/// The seven areas of the general health check, in question order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WellnessArea {
    Energy,
    Sleep,
    Nutrition,
    Exercise,
    Stress,
    Hydration,
    Preventive,
}

impl WellnessArea {
    pub const ALL: [WellnessArea; 7] = [
        WellnessArea::Energy,
        WellnessArea::Sleep,
        WellnessArea::Nutrition,
        WellnessArea::Exercise,
        WellnessArea::Stress,
        WellnessArea::Hydration,
        WellnessArea::Preventive,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            WellnessArea::Energy => "Energy Level",
            WellnessArea::Sleep => "Sleep Quality",
            WellnessArea::Nutrition => "Nutrition",
            WellnessArea::Exercise => "Physical Activity",
            WellnessArea::Stress => "Stress Management",
            WellnessArea::Hydration => "Hydration",
            WellnessArea::Preventive => "Preventive Care",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AreaStatus {
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Moderate,
    Good,
}

impl AreaStatus {
    pub fn label(self) -> &'static str {
        match self {
            AreaStatus::NeedsImprovement => "Needs Improvement",
            AreaStatus::Moderate => "Moderate",
            AreaStatus::Good => "Good",
        }
    }
}

impl fmt::Display for AreaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AreaScore {
    pub area: WellnessArea,
    pub score: u32,
    pub status: AreaStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum WellnessLevel {
    Excellent,
    Good,
    Moderate,
    #[serde(rename = "Needs Significant Improvement")]
    NeedsSignificantImprovement,
}

impl WellnessLevel {
    pub fn label(self) -> &'static str {
        match self {
            WellnessLevel::Excellent => "Excellent",
            WellnessLevel::Good => "Good",
            WellnessLevel::Moderate => "Moderate",
            WellnessLevel::NeedsSignificantImprovement => "Needs Significant Improvement",
        }
    }
}

impl fmt::Display for WellnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WellnessResult {
    pub areas: Vec<AreaScore>,
    pub overall_score: u32,
    pub level: WellnessLevel,
    pub recommendations: Vec<String>,
}

impl WellnessResult {
    pub const MAX_SCORE: u32 = 35;

    pub fn area(&self, area: WellnessArea) -> Option<&AreaScore> {
        self.areas.iter().find(|a| a.area == area)
    }
}

// ── Additive risk score ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskTier {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskTier {
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Moderate => "Moderate Risk",
            RiskTier::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskScoreResult {
    pub score: u32,
    pub risk_tier: RiskTier,
    pub explanation: String,
    pub recommendations: Vec<String>,
    pub disclaimer: String,
}

// ── Factor classification ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FactorStatus {
    #[serde(rename = "Multiple heart health risk factors identified")]
    Multiple,
    #[serde(rename = "Some heart health risk factors identified")]
    Present,
    #[serde(rename = "Few or no heart health risk factors identified")]
    FewOrNone,
}

impl FactorStatus {
    pub fn label(self) -> &'static str {
        match self {
            FactorStatus::Multiple => "Multiple heart health risk factors identified",
            FactorStatus::Present => "Some heart health risk factors identified",
            FactorStatus::FewOrNone => "Few or no heart health risk factors identified",
        }
    }
}

impl fmt::Display for FactorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FactorResult {
    pub risk_factors: Vec<String>,
    pub positive_factors: Vec<String>,
    pub overall_status: FactorStatus,
    pub recommendations: Vec<String>,
    pub disclaimer: String,
}
