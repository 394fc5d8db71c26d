use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::stats::DocumentReport;
use chrono::Local;
use doc_metrics_core::analyze;
use std::fs::Metadata;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Bytes inspected for a NUL when deciding whether content is binary.
const BINARY_PROBE_LEN: usize = 8 * 1024;

#[must_use]
pub fn is_binary(bytes: &[u8]) -> bool {
    bytes[..bytes.len().min(BINARY_PROBE_LEN)].contains(&0)
}

/// Analyze one file. Binary files yield `Ok(None)`.
pub fn process_file(path: PathBuf, meta: &Metadata, config: &Config) -> Result<Option<DocumentReport>> {
    let bytes = std::fs::read(&path).map_err(|source| EngineError::FileRead { path: path.clone(), source })?;
    let mtime = meta.modified().ok().map(chrono::DateTime::<Local>::from);

    Ok(analyze_bytes(path, &bytes, config).map(|report| report.with_mtime(mtime)))
}

/// Analyze a whole stream, such as standard input, reported under `label`.
///
/// # Errors
/// Returns [`EngineError::Io`] if reading fails.
pub fn analyze_reader<R: Read>(mut reader: R, label: impl AsRef<Path>, config: &Config) -> Result<Option<DocumentReport>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(analyze_bytes(label.as_ref().to_path_buf(), &bytes, config))
}

fn analyze_bytes(path: PathBuf, bytes: &[u8], config: &Config) -> Option<DocumentReport> {
    if is_binary(bytes) {
        log::debug!("skipping binary content in {}", path.display());
        return None;
    }

    // Invalid UTF-8 becomes U+FFFD rather than an error.
    let document = String::from_utf8_lossy(bytes);
    let analysis = analyze(&document, &config.analysis);
    log::debug!("{}: {} words, score {}", path.display(), analysis.metrics.word_count, analysis.metrics.readability_score);

    Some(DocumentReport::from_analysis(path, bytes.len() as u64, analysis, config.keep_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_metrics_core::{CharUnit, ReadabilityLabel};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn analyzes_file_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "<html><body><p>The cat sat.</p></body></html>").unwrap();
        let path = file.path().to_path_buf();
        let meta = std::fs::metadata(&path).unwrap();

        let report = process_file(path.clone(), &meta, &Config::default()).unwrap().unwrap();
        assert_eq!(report.path, path);
        assert_eq!(report.size, 45);
        assert_eq!(report.metrics.word_count, 3);
        assert_eq!(report.metrics.char_count, 45);
        assert!(report.mtime.is_some());
    }

    #[test]
    fn binary_content_is_skipped() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"<p>ok</p>\0\x01\x02").unwrap();
        let meta = std::fs::metadata(file.path()).unwrap();
        assert!(process_file(file.path().to_path_buf(), &meta, &Config::default()).unwrap().is_none());
    }

    #[test]
    fn nul_after_probe_window_is_text() {
        let mut bytes = vec![b'a'; BINARY_PROBE_LEN];
        bytes.push(0);
        assert!(!is_binary(&bytes));
        assert!(is_binary(b"\0"));
        assert!(!is_binary(b""));
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let config = Config::default();
        let report = analyze_reader(&b"<p>caf\xe9 ok</p>"[..], "-", &config).unwrap().unwrap();
        assert_eq!(report.metrics.word_count, 2);
        assert_eq!(report.size, 14);
        assert_eq!(report.path, PathBuf::from("-"));
    }

    #[test]
    fn reader_respects_analysis_config() {
        let mut config = Config { keep_text: true, ..Config::default() };
        config.analysis.char_unit = CharUnit::Bytes;
        let report = analyze_reader("<p>Olá</p>".as_bytes(), "stdin", &config).unwrap().unwrap();
        assert_eq!(report.metrics.char_count, 11);
        assert_eq!(report.text.as_deref(), Some("Olá"));
        assert_eq!(report.metrics.readability_label, ReadabilityLabel::VeryEasy);
    }

    #[test]
    fn unreadable_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let meta = std::fs::metadata(dir.path()).unwrap();
        let missing = dir.path().join("gone.html");
        let err = process_file(missing.clone(), &meta, &Config::default()).unwrap_err();
        assert!(matches!(err, EngineError::FileRead { path, .. } if path == missing));
    }
}
