use healthaccess_assessments::result::AssessmentResult;
use healthaccess_assessments::score;
use healthaccess_core::models::answer::OptionValue;
use healthaccess_core::models::record::SavedAssessment;
use healthaccess_export::render::{render_record, render_result, RenderFormat};
use healthaccess_export::templates::GENERAL_DISCLAIMER;

fn completed_at() -> jiff::Timestamp {
    "2026-02-20T15:45:00Z".parse().unwrap()
}

fn wellness() -> AssessmentResult {
    let answers: Vec<Option<OptionValue>> = vec![
        Some(OptionValue::Int(1)),
        Some("less-than-4".into()),
        Some("none".into()),
        Some("never".into()),
        Some(OptionValue::Int(5)),
        Some("less-than-2".into()),
        Some("never".into()),
    ];
    score("general-health", &answers).unwrap()
}

fn heart(values: [&str; 7], stress: i64) -> AssessmentResult {
    let mut answers: Vec<Option<OptionValue>> = values.iter().map(|v| Some((*v).into())).collect();
    answers.push(Some(OptionValue::Int(stress)));
    score("heart-health", &answers).unwrap()
}

#[test]
fn wellness_text_shows_score_level_areas_and_advice() {
    let result = wellness();
    let text = render_result("General Health Check", completed_at(), &result, RenderFormat::Text).unwrap();

    assert!(text.starts_with("Your General Health Check Results"));
    assert!(text.contains("Assessment completed 2026-02-20"));
    assert!(text.contains("Overall Score: 7/35"));
    assert!(text.contains("Wellness Level: Needs Significant Improvement"));
    assert!(text.contains("- Energy Level: Needs Improvement (1/5)"));
    assert!(text.contains("- Preventive Care: Needs Improvement (1/5)"));
    for rec in result.recommendations() {
        assert!(text.contains(rec.as_str()), "missing recommendation: {rec}");
    }
    assert!(text.trim_end().ends_with(GENERAL_DISCLAIMER));
}

#[test]
fn wellness_html_uses_status_classes() {
    let html = render_result("General Health Check", completed_at(), &wellness(), RenderFormat::Html).unwrap();

    assert!(html.contains(r#"<span class="score-number">7</span>"#));
    assert!(html.contains(r#"class="area-status status-needs-improvement""#));
    assert!(html.contains("<div class=\"area-name\">Sleep Quality</div>"));
}

#[test]
fn risk_score_output_includes_tier_and_disclaimer() {
    let answers: Vec<Option<OptionValue>> = [
        "60-plus", "30-plus", "men-over-40-women-over-35", "yes", "daily", "no", "yes", "no",
    ]
    .iter()
    .map(|v| Some((*v).into()))
    .collect();
    let result = score("diabetes-risk", &answers).unwrap();

    let text = render_result("Diabetes Risk Assessment", completed_at(), &result, RenderFormat::Text).unwrap();
    assert!(text.contains("High Risk"));
    assert!(text.contains("Score: 9"));
    assert!(text.contains("does not constitute medical advice"));

    let html = render_result("Diabetes Risk Assessment", completed_at(), &result, RenderFormat::Html).unwrap();
    assert!(html.contains(r#"class="risk-level risk-high""#));
}

#[test]
fn factor_output_falls_back_when_lists_are_empty() {
    let result = heart(["elevated", "dont-know", "current", "no", "sometimes", "no", "fair"], 2);
    let text = render_result("Heart Health Assessment", completed_at(), &result, RenderFormat::Text).unwrap();

    assert!(text.contains("Some heart health risk factors identified"));
    assert!(text.contains("- Current smoker"));
    assert!(text.contains("- No specific positive factors identified"));

    let healthy = heart(["normal", "normal", "never", "no", "regular", "no", "good"], 1);
    let html = render_result("Heart Health Assessment", completed_at(), &healthy, RenderFormat::Html).unwrap();
    assert!(html.contains("<li>No major risk factors identified</li>"));
    assert!(html.contains("<li>Non-smoker</li>"));
}

#[test]
fn html_output_is_escaped() {
    let result = wellness();
    let html = render_result("Check <script>", completed_at(), &result, RenderFormat::Html).unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn saved_records_render_like_fresh_results() {
    let result = wellness();
    let record = SavedAssessment::new(
        "general-health",
        "General Health Check",
        vec![],
        &result,
        completed_at(),
    )
    .unwrap();

    let from_record = render_record(&record, RenderFormat::Text).unwrap();
    let direct = render_result("General Health Check", completed_at(), &result, RenderFormat::Text).unwrap();
    assert_eq!(from_record, direct);
}
