use std::collections::BTreeMap;

use tera::{Context, Tera};

use healthaccess_assessments::result::{AssessmentResult, WellnessArea, WellnessResult};
use healthaccess_core::models::record::SavedAssessment;

use crate::error::ExportError;
use crate::templates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Text,
    Html,
}

fn template_for(result: &AssessmentResult, format: RenderFormat) -> &'static str {
    match (result, format) {
        (AssessmentResult::Wellness(_), RenderFormat::Text) => templates::WELLNESS_TEXT,
        (AssessmentResult::Wellness(_), RenderFormat::Html) => templates::WELLNESS_HTML,
        (AssessmentResult::RiskScore(_), RenderFormat::Text) => templates::RISK_SCORE_TEXT,
        (AssessmentResult::RiskScore(_), RenderFormat::Html) => templates::RISK_SCORE_HTML,
        (AssessmentResult::Factor(_), RenderFormat::Text) => templates::FACTOR_TEXT,
        (AssessmentResult::Factor(_), RenderFormat::Html) => templates::FACTOR_HTML,
    }
}

/// Render a scored result for display.
///
/// `title` is the questionnaire title; `completed_at` is shown as a UTC
/// calendar date.
pub fn render_result(
    title: &str,
    completed_at: jiff::Timestamp,
    result: &AssessmentResult,
    format: RenderFormat,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(templates::all())
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let area_names: BTreeMap<&str, &str> = WellnessArea::ALL
        .iter()
        .map(|area| (area_key(*area), area.display_name()))
        .collect();

    let mut context = Context::new();
    context.insert("title", title);
    context.insert("completed_on", &completed_at.strftime("%Y-%m-%d").to_string());
    context.insert("result", &serde_json::to_value(result)?);
    context.insert("max_score", &WellnessResult::MAX_SCORE);
    context.insert("area_names", &area_names);
    context.insert("general_disclaimer", templates::GENERAL_DISCLAIMER);

    let name = template_for(result, format);
    let rendered = tera.render(name, &context)?;
    tracing::debug!(template = name, bytes = rendered.len(), "result rendered");
    Ok(rendered)
}

/// Render an entry from the results log.
pub fn render_record(record: &SavedAssessment, format: RenderFormat) -> Result<String, ExportError> {
    let result: AssessmentResult = serde_json::from_value(record.result.clone())?;
    render_result(&record.title, record.completed_at, &result, format)
}

/// The serialized name of an area, as it appears in `result.areas[].area`.
fn area_key(area: WellnessArea) -> &'static str {
    match area {
        WellnessArea::Energy => "energy",
        WellnessArea::Sleep => "sleep",
        WellnessArea::Nutrition => "nutrition",
        WellnessArea::Exercise => "exercise",
        WellnessArea::Stress => "stress",
        WellnessArea::Hydration => "hydration",
        WellnessArea::Preventive => "preventive",
    }
}
