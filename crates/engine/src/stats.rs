use crate::error::EngineError;
use chrono::{DateTime, Local};
use doc_metrics_core::{Analysis, CharCount, DocumentMetrics, TextStatistics, WordCount};
use serde::Serialize;
use std::path::PathBuf;

/// Metrics for one analyzed document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReport {
    pub path: PathBuf,
    /// Size in bytes as read.
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtime: Option<DateTime<Local>>,
    #[serde(flatten)]
    pub metrics: DocumentMetrics,
    pub statistics: TextStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl DocumentReport {
    #[must_use]
    pub fn from_analysis(path: PathBuf, size: u64, analysis: Analysis, keep_text: bool) -> Self {
        Self {
            path,
            size,
            mtime: None,
            metrics: analysis.metrics,
            statistics: analysis.statistics(),
            text: keep_text.then_some(analysis.text),
        }
    }

    #[must_use]
    pub fn with_mtime(mut self, mtime: Option<DateTime<Local>>) -> Self {
        self.mtime = mtime;
        self
    }
}

/// Sums over a set of reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub documents: usize,
    pub words: WordCount,
    pub chars: CharCount,
    /// Mean score over documents that have one. `None` when every document
    /// was word-less.
    pub mean_score: Option<f64>,
}

impl Totals {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_reports<'a>(reports: impl IntoIterator<Item = &'a DocumentReport>) -> Self {
        let mut totals = Self::default();
        let mut scored = 0usize;
        let mut score_sum = 0u64;

        for report in reports {
            totals.documents += 1;
            totals.words += report.metrics.word_count;
            totals.chars += report.metrics.char_count;
            if report.metrics.readability_label != doc_metrics_core::ReadabilityLabel::NotApplicable {
                scored += 1;
                score_sum += u64::from(report.metrics.readability_score.value());
            }
        }

        if scored > 0 {
            totals.mean_score = Some(score_sum as f64 / scored as f64);
        }
        totals
    }
}

/// Outcome of a run: reports sorted by path plus per-file failures.
#[derive(Debug, Default)]
pub struct RunResult {
    pub reports: Vec<DocumentReport>,
    pub errors: Vec<(PathBuf, EngineError)>,
    /// Files skipped as binary.
    pub skipped: usize,
}

impl RunResult {
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals::from_reports(&self.reports)
    }
}
