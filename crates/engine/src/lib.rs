// crates/engine/src/lib.rs
//! Walks directories and analyzes HTML documents in parallel.

use rayon::prelude::*;
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod stats;
pub mod watch;

pub use processor::analyze_reader;
pub use watch::watch_loop;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::filesystem::WalkItem;
use crate::stats::{DocumentReport, RunResult};

type Outcome = std::result::Result<Option<DocumentReport>, (PathBuf, EngineError)>;

/// Analyze every document reachable from `config.walk.roots`.
///
/// Reports come back sorted by path.
///
/// # Errors
///
/// Returns an error for an invalid configuration, or in strict mode for the
/// first file or walk failure. Otherwise per-file failures are collected in
/// `RunResult::errors`.
pub fn run(config: &Config) -> Result<RunResult> {
    config.validate()?;

    let (tx, rx) = crossbeam_channel::bounded::<WalkItem>(1024);
    let walk = config.walk.clone();
    std::thread::spawn(move || filesystem::walk_parallel(&walk, &tx));

    let iter = rx.into_iter().par_bridge().map(|item| process(item, config));

    let outcomes: Vec<Outcome> = if config.strict {
        // Strict mode: fail on first error
        iter.map(|outcome| outcome.map(Ok).map_err(|(_, e)| e))
            .collect::<Result<Vec<_>>>()?
    } else {
        iter.collect()
    };

    let mut result = RunResult::default();
    for outcome in outcomes {
        match outcome {
            Ok(Some(report)) => result.reports.push(report),
            Ok(None) => result.skipped += 1,
            Err(failure) => result.errors.push(failure),
        }
    }

    result.reports.sort_by(|a, b| a.path.cmp(&b.path));
    result.errors.sort_by(|a, b| a.0.cmp(&b.0));
    log::info!(
        "analyzed {} document(s), {} skipped, {} error(s)",
        result.reports.len(),
        result.skipped,
        result.errors.len()
    );

    Ok(result)
}

fn process(item: WalkItem, config: &Config) -> Outcome {
    let (path, meta) = item?;
    processor::process_file(path.clone(), &meta, config).map_err(|e| (path, e))
}
