use super::*;
use serde_json::{Value, json};

/// Full payload in the shape the backend actually sends, bookkeeping fields
/// and wire extras included.
fn backend_analyze_json() -> Value {
    json!({
        "analysis_id": "42",
        "status": "completed",
        "similar_patents": [
            {
                "rank": 1,
                "similarity_score": 0.85,
                "title": "Akıllı telefon batarya optimizasyonu",
                "patent_id": "SAMPLE_001",
                "assignee": "Teknoloji Şirketi",
                "technology_category": "Elektronik",
                "publication_date": "2023-05-15",
                "filing_date": "2022-11-20"
            },
            {
                "rank": 2,
                "similarity_score": 0.65,
                "title": "Mobil cihaz güç yönetim sistemi",
                "patent_id": "SAMPLE_002",
                "assignee": "İnovasyon A.Ş.",
                "technology_category": "Yazılım",
                "publication_date": "2023-03-10",
                "filing_date": "2022-09-05"
            }
        ],
        "ai_analysis": {
            "differences": ["fark1", "fark2"],
            "novelty_score": "Yüksek",
            "novel_aspects": ["yenilik1"],
            "improvement_suggestions": ["öneri1"],
            "strategic_advice": "stratejik tavsiye",
            "risk_assessment": "risk değerlendirmesi"
        },
        "detailed_report": "Giriş\nSonuç",
        "user_input": "akıllı batarya"
    })
}

fn parse(value: Value) -> Result<AnalysisResponse, serde_json::Error> {
    serde_json::from_value(value)
}

// =============================================================
// AnalyzeRequest serialization
// =============================================================

#[test]
fn analyze_request_serializes_to_patent_text_body() {
    let body = AnalyzeRequest {
        patent_text: "güneş enerjili şarj cihazı".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({ "patent_text": "güneş enerjili şarj cihazı" })
    );
}

// =============================================================
// AnalysisResponse parsing
// =============================================================

#[test]
fn backend_shaped_response_parses() {
    let resp = parse(backend_analyze_json()).unwrap();
    assert_eq!(resp.analysis_id, "42");
    assert_eq!(resp.status, "completed");
    assert_eq!(resp.similar_patents.len(), 2);
    assert_eq!(resp.similar_patents[0].rank, 1);
    assert_eq!(resp.similar_patents[0].patent_id.as_deref(), Some("SAMPLE_001"));
    assert_eq!(resp.detailed_report, "Giriş\nSonuç");
    assert_eq!(resp.user_input, "akıllı batarya");
}

#[test]
fn unknown_ai_analysis_keys_are_ignored() {
    let resp = parse(backend_analyze_json()).unwrap();
    assert_eq!(resp.ai_analysis.novelty_score.as_deref(), Some("Yüksek"));
    assert_eq!(
        resp.ai_analysis.differences,
        Some(vec!["fark1".to_owned(), "fark2".to_owned()])
    );
}

#[test]
fn missing_required_fields_fail_parsing() {
    for field in ["similar_patents", "ai_analysis", "detailed_report"] {
        let mut value = backend_analyze_json();
        value.as_object_mut().unwrap().remove(field);
        assert!(parse(value).is_err(), "expected parse failure without {field}");
    }
}

#[test]
fn optional_patent_fields_may_be_absent() {
    let value = json!({
        "analysis_id": "err",
        "status": "completed",
        "similar_patents": [{
            "rank": 1,
            "similarity_score": 0.5,
            "title": "t",
            "technology_category": "c",
            "assignee": "a"
        }],
        "ai_analysis": {},
        "detailed_report": "r",
        "user_input": "u"
    });
    let resp = parse(value).unwrap();
    assert!(resp.similar_patents[0].patent_id.is_none());
    assert!(resp.similar_patents[0].publication_date.is_none());
    assert!(resp.similar_patents[0].filing_date.is_none());
}

#[test]
fn backend_error_path_response_parses() {
    // Backend fallback responses carry an `error` key and empty patents.
    let value = json!({
        "analysis_id": "error_comp",
        "status": "error",
        "similar_patents": [],
        "ai_analysis": { "error": "Analiz hatası" },
        "detailed_report": "Analiz sırasında bir sunucu hatası oluştu.",
        "user_input": "x"
    });
    let resp = parse(value).unwrap();
    assert_eq!(resp.status, "error");
    assert!(resp.similar_patents.is_empty());
}

// =============================================================
// AnalysisReport::resolve — novelty label
// =============================================================

fn response_with_ai(ai: Value) -> AnalysisResponse {
    let mut value = backend_analyze_json();
    value.as_object_mut().unwrap().insert("ai_analysis".to_owned(), ai);
    parse(value).unwrap()
}

#[test]
fn novelty_label_prefers_english_spelling() {
    let report = AnalysisReport::resolve(response_with_ai(json!({
        "novelty_score": "Orta",
        "yenilik_puani": "Yüksek"
    })));
    assert_eq!(report.novelty_label, "Orta");
}

#[test]
fn empty_novelty_label_falls_through_to_turkish() {
    let report = AnalysisReport::resolve(response_with_ai(json!({
        "novelty_score": "",
        "yenilik_puani": "Düşük"
    })));
    assert_eq!(report.novelty_label, "Düşük");
}

#[test]
fn absent_novelty_label_defaults_to_placeholder() {
    let report = AnalysisReport::resolve(response_with_ai(json!({})));
    assert_eq!(report.novelty_label, UNDETERMINED);
}

// =============================================================
// AnalysisReport::resolve — bullet lists
// =============================================================

#[test]
fn lists_prefer_turkish_spelling() {
    let report = AnalysisReport::resolve(response_with_ai(json!({
        "teknik_farklar": ["tr"],
        "differences": ["en"]
    })));
    assert_eq!(report.technical_differences, vec!["tr".to_owned()]);
}

#[test]
fn lists_fall_back_to_english_spelling() {
    let report = AnalysisReport::resolve(response_with_ai(json!({
        "novel_aspects": ["aspect"]
    })));
    assert_eq!(report.novel_aspects, vec!["aspect".to_owned()]);
}

#[test]
fn lists_absent_in_both_spellings_become_single_placeholder() {
    let report = AnalysisReport::resolve(response_with_ai(json!({})));
    assert_eq!(report.technical_differences, vec![UNDETERMINED.to_owned()]);
    assert_eq!(report.novel_aspects, vec![UNDETERMINED.to_owned()]);
    assert_eq!(report.suggestions, vec![UNDETERMINED.to_owned()]);
}

#[test]
fn present_but_empty_list_stays_empty() {
    let report = AnalysisReport::resolve(response_with_ai(json!({
        "teknik_farklar": [],
        "differences": ["en"]
    })));
    assert!(report.technical_differences.is_empty());
}

#[test]
fn null_list_counts_as_absent() {
    let report = AnalysisReport::resolve(response_with_ai(json!({
        "gelistirme_onerileri": null,
        "improvement_suggestions": ["öneri"]
    })));
    assert_eq!(report.suggestions, vec!["öneri".to_owned()]);
}

#[test]
fn turkish_novel_aspects_key_uses_wire_spelling() {
    let report = AnalysisReport::resolve(response_with_ai(json!({
        "yenilikçi_yonler": ["yön"]
    })));
    assert_eq!(report.novel_aspects, vec!["yön".to_owned()]);
}

// =============================================================
// AnalysisReport::resolve — patents and report text
// =============================================================

#[test]
fn resolve_preserves_patent_count_and_order() {
    let report = AnalysisReport::resolve(parse(backend_analyze_json()).unwrap());
    assert_eq!(report.similar_patents.len(), 2);
    assert_eq!(report.similar_patents[0].rank, 1);
    assert_eq!(report.similar_patents[1].rank, 2);
    assert_eq!(report.detailed_report, "Giriş\nSonuç");
}

// =============================================================
// HealthResponse parsing
// =============================================================

#[test]
fn health_response_parses_with_extra_fields() {
    let value = json!({
        "status": "healthy",
        "services": {
            "database": "active",
            "llm_service": "inactive (deprecated)",
            "patent_analysis_service": "active",
            "csv_data": "available"
        },
        "project": "Patent AI",
        "csv_file": "patentAI.csv"
    });
    let health: HealthResponse = serde_json::from_value(value).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.services.database, "active");
    assert_eq!(health.services.csv_data, "available");
}

#[test]
fn health_response_missing_service_fails_parsing() {
    let value = json!({
        "status": "healthy",
        "services": {
            "database": "active",
            "llm_service": "active",
            "patent_analysis_service": "active"
        }
    });
    let parsed: Result<HealthResponse, _> = serde_json::from_value(value);
    assert!(parsed.is_err());
}
