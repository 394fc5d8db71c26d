use doc_metrics_core::{
    AnalysisConfig, CharUnit, DocumentMetrics, LabelLocale, ReadabilityLabel, analyze, compute_metrics,
    compute_metrics_with, extract_text,
};

const ARTICLE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Release notes</title>
  <style>p { margin: 0 }</style>
  <script>window.analytics = { track: function () {} };</script>
</head>
<body>
  <h1>Release notes</h1>
  <!-- draft section -->
  <p>The new build is faster. It also uses less memory!</p>
  <p>Try it &amp; tell us what you think?</p>
</body>
</html>
"#;

#[test]
fn empty_document_is_not_applicable() {
    let metrics = compute_metrics("");
    assert_eq!(metrics.word_count, 0);
    assert_eq!(metrics.char_count, 0);
    assert_eq!(metrics.readability_score, 0);
    assert_eq!(metrics.readability_label, ReadabilityLabel::NotApplicable);
}

#[test]
fn markup_only_document_counts_characters_only() {
    let html = "<html><head><title>x</title></head><body><img src=a.png></body></html>";
    let metrics = compute_metrics(html);
    assert_eq!(metrics.word_count, 0);
    assert_eq!(metrics.char_count, html.encode_utf16().count());
    assert_eq!(metrics.readability_label, ReadabilityLabel::NotApplicable);
}

#[test]
fn full_page_counts_body_words_only() {
    let text = extract_text(ARTICLE);
    assert!(!text.contains("analytics"));
    assert!(!text.contains("margin"));
    assert!(!text.contains("draft"));
    assert!(text.contains("Try it & tell us"));

    let metrics = compute_metrics(ARTICLE);
    // "&" stands alone and counts as a word.
    assert_eq!(metrics.word_count, 2 + 10 + 8);
    assert_eq!(metrics.char_count, ARTICLE.encode_utf16().count());
    assert!(metrics.readability_label != ReadabilityLabel::NotApplicable);
}

#[test]
fn analysis_matches_compute_metrics() {
    let config = AnalysisConfig::default();
    let analysis = analyze(ARTICLE, &config);
    assert_eq!(analysis.metrics, compute_metrics(ARTICLE));
    assert_eq!(analysis.statistics().words, analysis.metrics.word_count.value());
    assert_eq!(analysis.readability.score(), analysis.metrics.readability_score);
}

#[test]
fn byte_unit_counts_utf8_length() {
    let html = "<p>Olá, mundo</p>";
    let bytes = AnalysisConfig { char_unit: CharUnit::Bytes, ..AnalysisConfig::default() };
    assert_eq!(compute_metrics(html).char_count, 17);
    assert_eq!(compute_metrics_with(html, &bytes).char_count, 18);
}

#[test]
fn locale_changes_label_text_only() {
    let english = analyze(ARTICLE, &AnalysisConfig::default());
    let portuguese = analyze(ARTICLE, &AnalysisConfig { locale: LabelLocale::Portuguese, ..AnalysisConfig::default() });
    assert_eq!(english.metrics, portuguese.metrics);
    assert_eq!(english.label_text(), english.metrics.readability_label.as_str());
}

#[test]
fn metrics_round_trip_through_json() {
    let metrics = compute_metrics("<p>The cat sat.</p>");
    let json = serde_json::to_string(&metrics).unwrap();
    assert_eq!(json, r#"{"wordCount":3,"charCount":19,"readabilityScore":100,"readabilityLabel":"Very Easy"}"#);
    let back: DocumentMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(back, metrics);
}

#[test]
fn out_of_range_score_is_rejected_on_input() {
    let json = r#"{"wordCount":1,"charCount":1,"readabilityScore":101,"readabilityLabel":"Easy"}"#;
    assert!(serde_json::from_str::<DocumentMetrics>(json).is_err());
}
