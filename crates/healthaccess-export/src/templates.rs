//! Built-in result templates, one per (result kind, format).
//!
//! Template names end in `.txt` or `.html`; Tera autoescapes the `.html`
//! ones. Each template sees `title`, `completed_on`, `result` (the
//! serialized result), `max_score`, `area_names`, and `general_disclaimer`.

pub const WELLNESS_TEXT: &str = "wellness.txt";
pub const WELLNESS_HTML: &str = "wellness.html";
pub const RISK_SCORE_TEXT: &str = "risk_score.txt";
pub const RISK_SCORE_HTML: &str = "risk_score.html";
pub const FACTOR_TEXT: &str = "factor.txt";
pub const FACTOR_HTML: &str = "factor.html";

pub const GENERAL_DISCLAIMER: &str = "Important: This self-assessment is for informational purposes only and is not a substitute for professional medical advice, diagnosis, or treatment. Always seek the advice of your physician or other qualified health provider with any questions you may have regarding a medical condition.";

const WELLNESS_TEXT_BODY: &str = r#"Your {{ title }} Results
Assessment completed {{ completed_on }}

Overall Score: {{ result.overall_score }}/{{ max_score }}
Wellness Level: {{ result.level }}

Health Areas
{% for area in result.areas -%}
  - {{ area_names[area.area] }}: {{ area.status }} ({{ area.score }}/5)
{% endfor %}
Recommendations
{% for rec in result.recommendations -%}
  - {{ rec }}
{% endfor %}
{{ general_disclaimer }}
"#;

const RISK_SCORE_TEXT_BODY: &str = r#"Your {{ title }} Results
Assessment completed {{ completed_on }}

{{ result.risk_tier }}
Score: {{ result.score }}

{{ result.explanation }}

Recommendations
{% for rec in result.recommendations -%}
  - {{ rec }}
{% endfor %}
{{ result.disclaimer }}

{{ general_disclaimer }}
"#;

const FACTOR_TEXT_BODY: &str = r#"Your {{ title }} Results
Assessment completed {{ completed_on }}

{{ result.overall_status }}

Risk Factors
{% for factor in result.risk_factors -%}
  - {{ factor }}
{% else -%}
  - No major risk factors identified
{% endfor %}
Positive Factors
{% for factor in result.positive_factors -%}
  - {{ factor }}
{% else -%}
  - No specific positive factors identified
{% endfor %}
Recommendations
{% for rec in result.recommendations -%}
  - {{ rec }}
{% endfor %}
{{ result.disclaimer }}

{{ general_disclaimer }}
"#;

const WELLNESS_HTML_BODY: &str = r#"<div class="assessment-results">
  <div class="results-header">
    <h2>Your {{ title }} Results</h2>
    <p>Assessment completed {{ completed_on }}</p>
  </div>
  <div class="results-overview">
    <div class="results-score">
      <span class="score-number">{{ result.overall_score }}</span><span class="score-max">/{{ max_score }}</span>
      <div class="score-label">Overall Score</div>
    </div>
    <h3>Wellness Level: <span class="wellness-level">{{ result.level }}</span></h3>
  </div>
  <div class="results-areas">
    <h3>Health Areas</h3>
    <div class="areas-grid">
{%- for area in result.areas %}
      <div class="health-area">
        <div class="area-name">{{ area_names[area.area] }}</div>
        <div class="area-status status-{{ area.status | lower | replace(from=" ", to="-") }}">{{ area.status }}</div>
      </div>
{%- endfor %}
    </div>
  </div>
  <div class="results-recommendations">
    <h3>Recommendations</h3>
    <ul class="recommendations-list">
{%- for rec in result.recommendations %}
      <li>{{ rec }}</li>
{%- endfor %}
    </ul>
  </div>
  <div class="disclaimer"><p>{{ general_disclaimer }}</p></div>
</div>
"#;

const RISK_SCORE_HTML_BODY: &str = r#"<div class="assessment-results">
  <div class="results-header">
    <h2>Your {{ title }} Results</h2>
    <p>Assessment completed {{ completed_on }}</p>
  </div>
  <div class="results-overview">
    <div class="risk-level risk-{{ result.risk_tier | split(pat=" ") | first | lower }}">
      <h3>{{ result.risk_tier }}</h3>
      <p>Score: {{ result.score }}</p>
    </div>
    <div class="risk-explanation"><p>{{ result.explanation }}</p></div>
  </div>
  <div class="results-recommendations">
    <h3>Recommendations</h3>
    <ul class="recommendations-list">
{%- for rec in result.recommendations %}
      <li>{{ rec }}</li>
{%- endfor %}
    </ul>
  </div>
  <div class="results-disclaimer"><p>{{ result.disclaimer }}</p></div>
  <div class="disclaimer"><p>{{ general_disclaimer }}</p></div>
</div>
"#;

const FACTOR_HTML_BODY: &str = r#"<div class="assessment-results">
  <div class="results-header">
    <h2>Your {{ title }} Results</h2>
    <p>Assessment completed {{ completed_on }}</p>
  </div>
  <div class="results-overview">
    <div class="heart-status"><h3>{{ result.overall_status }}</h3></div>
  </div>
  <div class="results-factors">
    <div class="risk-factors">
      <h3>Risk Factors</h3>
      <ul>
{%- for factor in result.risk_factors %}
        <li>{{ factor }}</li>
{%- else %}
        <li>No major risk factors identified</li>
{%- endfor %}
      </ul>
    </div>
    <div class="positive-factors">
      <h3>Positive Factors</h3>
      <ul>
{%- for factor in result.positive_factors %}
        <li>{{ factor }}</li>
{%- else %}
        <li>No specific positive factors identified</li>
{%- endfor %}
      </ul>
    </div>
  </div>
  <div class="results-recommendations">
    <h3>Recommendations</h3>
    <ul class="recommendations-list">
{%- for rec in result.recommendations %}
      <li>{{ rec }}</li>
{%- endfor %}
    </ul>
  </div>
  <div class="results-disclaimer"><p>{{ result.disclaimer }}</p></div>
  <div class="disclaimer"><p>{{ general_disclaimer }}</p></div>
</div>
"#;

/// Every built-in template as `(name, body)`, ready for
/// `Tera::add_raw_templates`.
pub fn all() -> Vec<(&'static str, &'static str)> {
    vec![
        (WELLNESS_TEXT, WELLNESS_TEXT_BODY),
        (WELLNESS_HTML, WELLNESS_HTML_BODY),
        (RISK_SCORE_TEXT, RISK_SCORE_TEXT_BODY),
        (RISK_SCORE_HTML, RISK_SCORE_HTML_BODY),
        (FACTOR_TEXT, FACTOR_TEXT_BODY),
        (FACTOR_HTML, FACTOR_HTML_BODY),
    ]
}
