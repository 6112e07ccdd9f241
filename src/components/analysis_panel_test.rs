use super::*;

// =============================================================
// similarity_percent
// =============================================================

#[test]
fn similarity_percent_formats_one_decimal() {
    assert_eq!(similarity_percent(0.85), "85.0");
    assert_eq!(similarity_percent(0.728), "72.8");
    assert_eq!(similarity_percent(1.0), "100.0");
    assert_eq!(similarity_percent(0.0), "0.0");
}

#[test]
fn similarity_percent_rounds_to_nearest() {
    assert_eq!(similarity_percent(0.8567), "85.7");
    assert_eq!(similarity_percent(0.12349), "12.3");
}

// =============================================================
// report_html
// =============================================================

#[test]
fn report_html_turns_newlines_into_breaks() {
    assert_eq!(report_html("a\nb"), "a<br>b");
    assert_eq!(report_html("Giriş\nSonuç\n"), "Giriş<br>Sonuç<br>");
}

#[test]
fn report_html_passes_plain_text_through() {
    assert_eq!(report_html("sade metin"), "sade metin");
}

#[test]
fn report_html_escapes_markup_in_model_output() {
    assert_eq!(
        report_html("<script>alert(1)</script>"),
        "&lt;script&gt;alert(1)&lt;/script&gt;"
    );
    assert_eq!(report_html("a & b"), "a &amp; b");
    assert_eq!(report_html("\"alıntı\"\n'tek'"), "&quot;alıntı&quot;<br>&#39;tek&#39;");
}

#[test]
fn report_html_escapes_before_inserting_breaks() {
    // A literal "<br>" in the report must not survive as markup.
    assert_eq!(report_html("x<br>y\nz"), "x&lt;br&gt;y<br>z");
}
