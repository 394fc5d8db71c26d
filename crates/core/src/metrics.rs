use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, LabelLocale};
use crate::counts::{CharCount, ReadabilityScore, WordCount};
use crate::markup::{ExtractOptions, extract_text_with};
use crate::readability::{ReadabilityLabel, ReadabilityResult, TextStatistics, score_readability};
use crate::text::count_words;

/// Metrics reported for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetrics {
    pub word_count: WordCount,
    /// Raw document length, markup included.
    pub char_count: CharCount,
    pub readability_score: ReadabilityScore,
    pub readability_label: ReadabilityLabel,
}

/// Full outcome of analyzing one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub metrics: DocumentMetrics,
    pub readability: ReadabilityResult,
    /// Extracted reader-visible text.
    pub text: String,
    pub locale: LabelLocale,
}

impl Analysis {
    #[must_use]
    pub fn statistics(&self) -> TextStatistics {
        self.readability.statistics
    }

    /// Readability label in the configured locale.
    #[must_use]
    pub fn label_text(&self) -> &'static str {
        self.metrics.readability_label.localized(self.locale)
    }
}

/// Computes metrics with the default configuration.
#[must_use]
pub fn compute_metrics(document: &str) -> DocumentMetrics {
    compute_metrics_with(document, &AnalysisConfig::default())
}

#[must_use]
pub fn compute_metrics_with(document: &str, config: &AnalysisConfig) -> DocumentMetrics {
    analyze(document, config).metrics
}

/// Extracts text once and derives every metric from it.
#[must_use]
pub fn analyze(document: &str, config: &AnalysisConfig) -> Analysis {
    let text = extract_text_with(document, ExtractOptions { separate_blocks: config.separate_blocks });
    let readability = score_readability(&text);

    let metrics = DocumentMetrics {
        word_count: WordCount::new(count_words(&text)),
        char_count: CharCount::new(config.char_unit.measure(document)),
        readability_score: readability.score(),
        readability_label: readability.label,
    };
    log::debug!(
        "analyzed document: {} words, {} chars, score {} ({})",
        metrics.word_count,
        metrics.char_count,
        metrics.readability_score,
        metrics.readability_label
    );

    Analysis { metrics, readability, text, locale: config.locale }
}
