use derive_builder::Builder;
use doc_metrics_core::AnalysisConfig;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{EngineError, Result};

/// Extensions analyzed when walking directories.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["html", "htm", "xhtml"];

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default)]
    pub roots: Vec<PathBuf>,
    #[builder(default = "num_cpus::get()")]
    pub threads: usize,
    #[builder(default)]
    pub hidden: bool,
    #[builder(default = "true")]
    pub git_ignore: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
    #[builder(default)]
    pub follow_links: bool,
    /// Lowercase extensions without the dot. Files named directly as roots
    /// are analyzed regardless.
    #[builder(default = "default_extensions()")]
    pub allow_ext: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            roots: vec![],
            threads: num_cpus::get(),
            hidden: false,
            git_ignore: true,
            max_depth: None,
            follow_links: false,
            allow_ext: default_extensions(),
        }
    }
}

impl WalkOptions {
    #[must_use]
    pub fn allows(&self, ext: &str) -> bool {
        self.allow_ext.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub analysis: AnalysisConfig,

    /// Keep the extracted text on each report.
    #[builder(default)]
    pub keep_text: bool,
    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub watch: bool,
    #[builder(default = "Duration::from_secs(1)")]
    pub watch_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            analysis: AnalysisConfig::default(),
            keep_text: false,
            strict: false,
            watch: false,
            watch_interval: Duration::from_secs(1),
        }
    }
}

impl Config {
    /// # Errors
    /// Returns [`EngineError::Config`] for a zero thread count or an empty
    /// extension allow-list.
    pub fn validate(&self) -> Result<()> {
        if self.walk.threads == 0 {
            return Err(EngineError::Config("thread count must be at least 1".into()));
        }
        if self.walk.allow_ext.is_empty() {
            return Err(EngineError::Config("at least one extension must be allowed".into()));
        }
        Ok(())
    }
}
