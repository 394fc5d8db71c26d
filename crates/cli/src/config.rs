// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use crate::options::{self, OutputFormat, SortKey};
use doc_metrics_core::{AnalysisConfig, CharUnit, LabelLocale};
use doc_metrics_engine::error::EngineError;
pub use doc_metrics_engine::config::{Config, ConfigBuilder, WalkOptions, WalkOptionsBuilder};

/// Engine settings plus the presentation choices made on the command line.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub engine: Config,
    pub format: OutputFormat,
    pub sort: Vec<(SortKey, bool)>,
    pub print_text: bool,
    /// Read a single document from standard input instead of walking paths.
    pub stdin: bool,
}

impl AppConfig {
    #[must_use]
    pub fn locale(&self) -> LabelLocale {
        self.engine.analysis.locale
    }
}

impl TryFrom<Args> for AppConfig {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let stdin = args.reads_stdin();
        let walk = walk_options_from_args(&args, stdin)?;

        let analysis = AnalysisConfig {
            locale: args.locale.into(),
            char_unit: args.char_unit.into(),
            separate_blocks: args.separate_blocks,
        };

        let engine = ConfigBuilder::default()
            .walk(walk)
            .analysis(analysis)
            .keep_text(args.print_text)
            .strict(args.strict)
            .watch(args.watch)
            .watch_interval(args.watch_interval)
            .build()
            .map_err(EngineError::from)?;

        Ok(Self {
            engine,
            format: args.format,
            sort: args.sort.map(|spec| spec.0).unwrap_or_default(),
            print_text: args.print_text,
            stdin,
        })
    }
}

fn walk_options_from_args(args: &Args, stdin: bool) -> Result<WalkOptions> {
    let roots = if stdin { Vec::new() } else { args.paths.clone() };

    let mut builder = WalkOptionsBuilder::default();
    builder
        .roots(roots)
        .hidden(args.hidden)
        .git_ignore(!args.no_gitignore)
        .max_depth(args.max_depth)
        .follow_links(args.follow);

    if let Some(jobs) = args.jobs {
        builder.threads(jobs);
    }
    if !args.ext.is_empty() {
        builder.allow_ext(normalize_extensions(&args.ext));
    }

    let walk = builder.build().map_err(EngineError::from)?;
    Ok(walk)
}

/// `.HTML` and `html` both mean `html`.
fn normalize_extensions(exts: &[String]) -> Vec<String> {
    exts.iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::LocaleArg, LabelLocale, English, Portuguese);
map_enum!(options::CharUnitArg, CharUnit, Chars, Utf16, Bytes);
