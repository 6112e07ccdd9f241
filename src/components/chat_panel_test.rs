use super::*;
use crate::net::types::ServiceStatus;

// ============================================================================
// Helpers
// ============================================================================

fn sample_health() -> HealthResponse {
    HealthResponse {
        status: "healthy".to_owned(),
        services: ServiceStatus {
            database: "connected".to_owned(),
            llm_service: "ready".to_owned(),
            patent_analysis_service: "ready".to_owned(),
            csv_data: "loaded".to_owned(),
        },
    }
}

// ============================================================================
// validate_submission
// ============================================================================

#[test]
fn submission_is_trimmed() {
    assert_eq!(validate_submission("  akıllı sulama sistemi  "), Some("akıllı sulama sistemi"));
}

#[test]
fn interior_whitespace_survives_trimming() {
    assert_eq!(validate_submission(" çok  boşluklu  fikir "), Some("çok  boşluklu  fikir"));
}

#[test]
fn empty_submission_is_rejected() {
    assert_eq!(validate_submission(""), None);
}

#[test]
fn whitespace_only_submission_is_rejected() {
    assert_eq!(validate_submission("   \t\n  "), None);
}

// ============================================================================
// health_lines
// ============================================================================

#[test]
fn health_lines_cover_all_four_services_in_order() {
    let lines = health_lines(&sample_health());

    assert_eq!(lines[0], ("📊 Database", "connected".to_owned()));
    assert_eq!(lines[1], ("🤖 LLM", "ready".to_owned()));
    assert_eq!(lines[2], ("🔍 Patent Analiz", "ready".to_owned()));
    assert_eq!(lines[3], ("📁 CSV Data", "loaded".to_owned()));
}

// ============================================================================
// Fixed messages
// ============================================================================

#[test]
fn failure_texts_are_fixed() {
    assert_eq!(ANALYZE_FAILED_TEXT, "❌ Sunucuya bağlanırken bir hata oluştu. Backend çalışıyor mu?");
    assert_eq!(HEALTH_FAILED_TITLE, "❌ Sistem Kontrolü Hatası");
    assert_eq!(HEALTH_FAILED_DETAIL, "Backend çalışmıyor olabilir.");
}
