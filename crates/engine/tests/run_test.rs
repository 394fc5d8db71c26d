use doc_metrics_core::{LabelLocale, ReadabilityLabel};
use doc_metrics_engine::config::{Config, ConfigBuilder, WalkOptions, WalkOptionsBuilder};
use doc_metrics_engine::error::EngineError;
use doc_metrics_engine::{analyze_reader, run};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn site() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::write(root.join("index.html"), "<html><body><p>The cat sat.</p></body></html>").unwrap();
    fs::write(root.join("about.htm"), "<style>p{}</style><p>Hello world</p>").unwrap();
    fs::write(root.join("readme.txt"), "not a page").unwrap();
    fs::write(root.join("logo.html"), b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR").unwrap();
    fs::create_dir(root.join("blog")).unwrap();
    fs::write(root.join("blog/post.xhtml"), "<p>Short words win.</p>").unwrap();
    dir
}

fn config_for(roots: &[&Path]) -> Config {
    let walk = WalkOptionsBuilder::default()
        .roots(roots.iter().map(|p| p.to_path_buf()).collect::<Vec<_>>())
        .threads(2usize)
        .build()
        .unwrap();
    ConfigBuilder::default().walk(walk).build().unwrap()
}

fn names(config: &Config) -> Vec<String> {
    run(config)
        .unwrap()
        .reports
        .iter()
        .map(|r| r.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn analyzes_html_documents_sorted_by_path() {
    let dir = site();
    let result = run(&config_for(&[dir.path()])).unwrap();

    let paths: Vec<_> = result.reports.iter().map(|r| r.path.strip_prefix(dir.path()).unwrap().to_path_buf()).collect();
    assert_eq!(
        paths,
        [Path::new("about.htm"), Path::new("blog/post.xhtml"), Path::new("index.html")]
    );
    assert_eq!(result.skipped, 1);
    assert!(result.errors.is_empty());

    let about = &result.reports[0];
    assert_eq!(about.metrics.word_count, 2);
    let index = &result.reports[2];
    assert_eq!(index.metrics.word_count, 3);
    assert_eq!(index.metrics.readability_label, ReadabilityLabel::VeryEasy);
}

#[test]
fn totals_cover_all_reports() {
    let dir = site();
    let result = run(&config_for(&[dir.path()])).unwrap();
    let totals = result.totals();
    assert_eq!(totals.documents, 3);
    assert_eq!(totals.words, 2 + 3 + 3);
    assert!(totals.mean_score.is_some());
}

#[test]
fn custom_extensions_replace_defaults() {
    let dir = site();
    let mut config = config_for(&[dir.path()]);
    config.walk.allow_ext = vec!["txt".to_string()];
    assert_eq!(names(&config), ["readme.txt"]);
}

#[test]
fn missing_path_is_collected_unless_strict() {
    let dir = site();
    let missing = dir.path().join("missing.html");

    let lenient = config_for(&[dir.path(), &missing]);
    let result = run(&lenient).unwrap();
    assert_eq!(result.reports.len(), 3);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].0, missing);

    let strict = Config { strict: true, ..config_for(&[&missing]) };
    assert!(matches!(run(&strict), Err(EngineError::Walk(_))));
}

#[test]
fn invalid_config_is_rejected() {
    let config = Config { walk: WalkOptions { threads: 0, ..WalkOptions::default() }, ..Config::default() };
    assert!(matches!(run(&config), Err(EngineError::Config(_))));
}

#[test]
fn empty_roots_yield_empty_result() {
    let result = run(&Config::default()).unwrap();
    assert!(result.reports.is_empty());
    assert_eq!(result.totals().mean_score, None);
}

#[test]
fn stdin_documents_use_the_same_analysis() {
    let mut config = Config { keep_text: true, ..Config::default() };
    config.analysis.locale = LabelLocale::Portuguese;
    let report = analyze_reader("<title>t</title><p>Olá.</p>".as_bytes(), "-", &config).unwrap().unwrap();
    assert_eq!(report.text.as_deref(), Some("Olá."));
    assert_eq!(report.metrics.readability_label.localized(config.analysis.locale), "Muito Fácil");
}
