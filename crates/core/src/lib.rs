#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

//! Pure text-metrics engine for HTML documents.
//!
//! The pipeline is `markup::extract_text` -> `readability::score_readability`
//! (which calls `syllables::estimate_syllables` per word), composed by
//! `metrics::compute_metrics`. Every function here is total: any string,
//! including malformed markup and the empty string, yields a value.

extern crate alloc;

pub mod config;
pub mod counts;
pub mod markup;
pub mod metrics;
pub mod readability;
pub mod syllables;
pub mod text;

pub use config::{AnalysisConfig, CharUnit, LabelLocale};
pub use counts::{CharCount, ReadabilityScore, WordCount};
pub use markup::{ExtractOptions, extract_text, extract_text_with};
pub use metrics::{Analysis, DocumentMetrics, analyze, compute_metrics, compute_metrics_with};
pub use readability::{ReadabilityLabel, ReadabilityResult, TextStatistics, score_readability};
pub use syllables::estimate_syllables;
