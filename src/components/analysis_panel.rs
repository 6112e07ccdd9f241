//! Structured analysis result panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders a resolved [`AnalysisReport`] as the bot's answer to a
//! submission: novelty badge, ranked similar patents, the three assessment
//! bullet lists, and the prose report block.

#[cfg(test)]
#[path = "analysis_panel_test.rs"]
mod analysis_panel_test;

use leptos::prelude::*;

use crate::net::types::{AnalysisReport, SimilarPatent};
use crate::util::novelty;

/// Panel showing the full analysis result for one submission.
#[component]
pub fn AnalysisPanel(report: AnalysisReport) -> impl IntoView {
    let AnalysisReport {
        novelty_label,
        similar_patents,
        technical_differences,
        novel_aspects,
        suggestions,
        detailed_report,
    } = report;

    let patent_count = similar_patents.len();
    let badge_class = format!(
        "analysis-panel__badge analysis-panel__badge--{}",
        novelty::classify(&novelty_label).css_modifier()
    );
    let badge_label = format!("Yenilik: {novelty_label}");
    let report_body = report_html(&detailed_report);

    view! {
        <div class="analysis-panel">
            <div class="analysis-panel__header">
                <h3>"🔍 Patent Analiz Sonuçları"</h3>
                <div class=badge_class>{badge_label}</div>
            </div>

            <div class="analysis-panel__patents">
                <h4>{format!("📊 Benzer Patentler ({patent_count})")}</h4>
                {similar_patents
                    .into_iter()
                    .map(patent_item)
                    .collect::<Vec<_>>()}
            </div>

            <div class="analysis-panel__assessment">
                <h4>"🤖 AI Değerlendirmesi"</h4>
                <div class="analysis-panel__points">
                    {bullet_list("Teknik Farklar:", technical_differences)}
                    {bullet_list("Yenilikçi Yönler:", novel_aspects)}
                    {bullet_list("Öneriler:", suggestions)}
                </div>
            </div>

            <div class="analysis-panel__report">
                <h4>"📄 Detaylı Rapor"</h4>
                <div class="analysis-panel__report-content" inner_html=report_body></div>
            </div>
        </div>
    }
}

fn patent_item(patent: SimilarPatent) -> impl IntoView {
    let rank_line = format!(
        "#{} - {}%",
        patent.rank,
        similarity_percent(patent.similarity_score)
    );
    view! {
        <div class="analysis-panel__patent">
            <div class="analysis-panel__patent-rank">{rank_line}</div>
            <div class="analysis-panel__patent-title">{patent.title}</div>
            <div class="analysis-panel__patent-details">
                <span class="analysis-panel__patent-category">{patent.technology_category}</span>
                <span class="analysis-panel__patent-assignee">{patent.assignee}</span>
            </div>
        </div>
    }
}

fn bullet_list(title: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <div class="analysis-panel__point">
            <strong>{title}</strong>
            <ul>
                {items
                    .into_iter()
                    .map(|item| view! { <li>{item}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// Similarity as a percentage with one decimal, e.g. `0.85` → `"85.0"`.
fn similarity_percent(score: f64) -> String {
    format!("{:.1}", score * 100.0)
}

/// Convert the plain-text report into display HTML: escape any markup in
/// the model output, then turn newlines into `<br>` line breaks.
fn report_html(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
