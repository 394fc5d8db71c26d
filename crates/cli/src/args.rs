use std::path::PathBuf;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueHint};

use crate::options::{CharUnitArg, LocaleArg, OutputFormat, SortSpec};
use crate::parsers;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "doc_metrics",
    version = crate::VERSION,
    about = "Word count, character count and Flesch readability of HTML documents",
    long_about = "Reports the visible word count, raw character count and a normalized \
                  Flesch reading-ease score for each HTML document.\n\n\
                  Directories are walked for .html, .htm and .xhtml files. \
                  Pass `-` or no path at all to read one document from standard input."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Files or directories to analyze (`-` reads standard input)
    #[arg(value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Sort keys, e.g. `score:desc,name` (keys: words, chars, score, name)
    #[arg(long, help_heading = "Output")]
    pub sort: Option<SortSpec>,

    /// Language of readability labels in table, csv, tsv and md output
    #[arg(long, value_enum, default_value = "en", help_heading = "Output")]
    pub locale: LocaleArg,

    /// Print the extracted visible text instead of metrics
    #[arg(long, help_heading = "Output")]
    pub print_text: bool,

    /// Unit of the character count
    #[arg(long, value_enum, default_value = "utf16", help_heading = "Analysis")]
    pub char_unit: CharUnitArg,

    /// Break text at block elements so adjacent blocks do not merge words
    #[arg(long, help_heading = "Analysis")]
    pub separate_blocks: bool,

    /// Extensions analyzed inside directories (comma separated, repeatable)
    #[arg(long, value_delimiter = ',', help_heading = "Scan")]
    pub ext: Vec<String>,

    /// Include hidden files and directories
    #[arg(long, help_heading = "Scan")]
    pub hidden: bool,

    /// Do not honor .gitignore files
    #[arg(long, help_heading = "Scan")]
    pub no_gitignore: bool,

    /// Follow symbolic links
    #[arg(long, help_heading = "Scan")]
    pub follow: bool,

    /// Maximum directory depth
    #[arg(long = "max-depth", help_heading = "Scan")]
    pub max_depth: Option<usize>,

    /// Worker threads for the directory walk
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "Scan")]
    pub jobs: Option<usize>,

    /// Fail on the first unreadable file instead of reporting and continuing
    #[arg(long, help_heading = "Behavior")]
    pub strict: bool,

    /// Re-run whenever a watched file changes
    #[arg(long, help_heading = "Behavior")]
    pub watch: bool,

    /// Debounce interval for --watch (e.g. 2, 1.5s, 500ms)
    #[arg(long, value_parser = parsers::parse_interval, default_value = "1", requires = "watch", help_heading = "Behavior")]
    pub watch_interval: Duration,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// True when the single document comes from standard input.
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.paths.is_empty() || (self.paths.len() == 1 && self.paths[0].as_os_str() == "-")
    }

    /// Checks constraints clap cannot express declaratively.
    ///
    /// # Errors
    /// Returns an argument-conflict error when `-` is mixed with other paths.
    pub fn validate(&self) -> Result<(), clap::Error> {
        if self.paths.len() > 1 && self.paths.iter().any(|p| p.as_os_str() == "-") {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                "`-` (standard input) cannot be combined with other paths",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SortKey;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["doc_metrics"]);
        assert!(args.reads_stdin());
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.locale, LocaleArg::English);
        assert_eq!(args.char_unit, CharUnitArg::Utf16);
        assert!(args.sort.is_none());
        assert_eq!(args.watch_interval, Duration::from_secs(1));
    }

    #[test]
    fn parses_flags() {
        let args = Args::parse_from([
            "doc_metrics", "site", "page.html", "--format", "json", "--sort", "score:desc", "--locale", "pt",
            "--char-unit", "chars", "--ext", "html,php", "--ext", "tpl", "-vv",
        ]);
        assert!(!args.reads_stdin());
        assert_eq!(args.paths.len(), 2);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.sort, Some(SortSpec(vec![(SortKey::Score, true)])));
        assert_eq!(args.locale, LocaleArg::Portuguese);
        assert_eq!(args.char_unit, CharUnitArg::Chars);
        assert_eq!(args.ext, ["html", "php", "tpl"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn dash_means_stdin() {
        assert!(Args::parse_from(["doc_metrics", "-"]).reads_stdin());
        assert!(Args::parse_from(["doc_metrics", "-"]).validate().is_ok());
    }

    #[test]
    fn dash_cannot_be_mixed_with_paths() {
        let args = Args::parse_from(["doc_metrics", "-", "a.html"]);
        assert!(!args.reads_stdin());
        let err = args.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        assert!(Args::parse_from(["doc_metrics", "a.html", "b.html"]).validate().is_ok());
    }

    #[test]
    fn watch_interval_requires_watch() {
        assert!(Args::try_parse_from(["doc_metrics", "--watch-interval", "2"]).is_err());
        let args = Args::try_parse_from(["doc_metrics", "--watch", "--watch-interval", "250ms"]).unwrap();
        assert_eq!(args.watch_interval, Duration::from_millis(250));
    }
}
