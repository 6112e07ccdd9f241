//! Wire-schema DTOs for the PatentAI analysis API.
//!
//! DESIGN
//! ======
//! Raw response types mirror the backend payloads field-for-field so serde
//! can parse them without lossy massaging. The bilingual optional fields in
//! [`AiAnalysis`] are resolved into an [`AnalysisReport`] exactly once, at
//! this boundary, so view code never deals with alternate field names or
//! absent values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Placeholder shown wherever the analysis omitted a value.
pub const UNDETERMINED: &str = "Belirsiz";

/// Request body for `POST /api/analyze-comprehensive`.
#[derive(Clone, Debug, Serialize)]
pub struct AnalyzeRequest {
    /// Free-text patent idea description.
    pub patent_text: String,
}

/// Response body for `POST /api/analyze-comprehensive`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Server-side report id (a database id, or a fixed marker on backend
    /// fallback paths).
    pub analysis_id: String,
    /// `"completed"` or `"error"`.
    pub status: String,
    /// Ranked nearest patents, best match first.
    pub similar_patents: Vec<SimilarPatent>,
    /// AI assessment with bilingual optional fields.
    pub ai_analysis: AiAnalysis,
    /// Multi-line prose report.
    pub detailed_report: String,
    /// Echo of the submitted description.
    pub user_input: String,
}

/// One retrieved patent in the similarity ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimilarPatent {
    /// 1-based position in the ranking.
    pub rank: u32,
    /// Normalized closeness in `[0, 1]`.
    pub similarity_score: f64,
    /// Patent title.
    pub title: String,
    /// Technology category label.
    pub technology_category: String,
    /// Assignee (owning organization).
    pub assignee: String,
    /// Source dataset id, if provided.
    #[serde(default)]
    pub patent_id: Option<String>,
    /// Publication date string, if provided.
    #[serde(default)]
    pub publication_date: Option<String>,
    /// Filing date string, if provided.
    #[serde(default)]
    pub filing_date: Option<String>,
}

/// Raw AI assessment.
///
/// The model is prompted for English field names, but several backend
/// fallback paths emit Turkish spellings instead, so every field exists in
/// both variants and all of them are optional. Unknown keys (the backend
/// also sends `strategic_advice`, `risk_assessment`, and friends) are
/// ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    /// Novelty label, English spelling.
    #[serde(default)]
    pub novelty_score: Option<String>,
    /// Novelty label, Turkish spelling.
    #[serde(default)]
    pub yenilik_puani: Option<String>,
    /// Technical differences, English spelling.
    #[serde(default)]
    pub differences: Option<Vec<String>>,
    /// Technical differences, Turkish spelling.
    #[serde(default)]
    pub teknik_farklar: Option<Vec<String>>,
    /// Novel aspects, English spelling.
    #[serde(default)]
    pub novel_aspects: Option<Vec<String>>,
    /// Novel aspects, Turkish spelling.
    #[serde(default, rename = "yenilikçi_yonler")]
    pub yenilikci_yonler: Option<Vec<String>>,
    /// Improvement suggestions, English spelling.
    #[serde(default)]
    pub improvement_suggestions: Option<Vec<String>>,
    /// Improvement suggestions, Turkish spelling.
    #[serde(default)]
    pub gelistirme_onerileri: Option<Vec<String>>,
}

/// Response body for `GET /health`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status token, e.g. `"healthy"`.
    pub status: String,
    /// Per-subsystem status tokens.
    pub services: ServiceStatus,
}

/// Subsystem status tokens reported by the health endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Report database connectivity.
    pub database: String,
    /// LLM generation service.
    pub llm_service: String,
    /// Similarity search + AI analysis pipeline.
    pub patent_analysis_service: String,
    /// Patent CSV dataset availability.
    pub csv_data: String,
}

/// Analysis result with every optional field resolved, ready to render.
///
/// Produced from [`AnalysisResponse`] exactly once at the network boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisReport {
    /// Novelty label for the badge, [`UNDETERMINED`] when the AI gave none.
    pub novelty_label: String,
    /// Ranked nearest patents, order preserved from the response.
    pub similar_patents: Vec<SimilarPatent>,
    /// Technical differences bullet list.
    pub technical_differences: Vec<String>,
    /// Novel aspects bullet list.
    pub novel_aspects: Vec<String>,
    /// Improvement suggestions bullet list.
    pub suggestions: Vec<String>,
    /// Multi-line prose report.
    pub detailed_report: String,
}

impl AnalysisReport {
    /// Resolve a raw response into render-ready form.
    ///
    /// The novelty label prefers the English spelling (the one the model is
    /// prompted for); the bullet lists prefer the Turkish spellings, which
    /// the fallback paths emit. An empty novelty string counts as absent; a
    /// list absent in both spellings becomes a single [`UNDETERMINED`]
    /// entry, while a present-but-empty list stays empty.
    #[must_use]
    pub fn resolve(response: AnalysisResponse) -> Self {
        let ai = response.ai_analysis;
        Self {
            novelty_label: non_empty(ai.novelty_score)
                .or_else(|| non_empty(ai.yenilik_puani))
                .unwrap_or_else(|| UNDETERMINED.to_owned()),
            similar_patents: response.similar_patents,
            technical_differences: resolve_list(ai.teknik_farklar, ai.differences),
            novel_aspects: resolve_list(ai.yenilikci_yonler, ai.novel_aspects),
            suggestions: resolve_list(ai.gelistirme_onerileri, ai.improvement_suggestions),
            detailed_report: response.detailed_report,
        }
    }
}

/// Treat empty strings as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Pick the first list that is present at all; only full absence falls back
/// to the placeholder entry.
fn resolve_list(primary: Option<Vec<String>>, fallback: Option<Vec<String>>) -> Vec<String> {
    primary
        .or(fallback)
        .unwrap_or_else(|| vec![UNDETERMINED.to_owned()])
}
