use clap::Parser;
use doc_metrics_cli::args::Args;
use doc_metrics_cli::config::AppConfig;
use doc_metrics_cli::error::Result;
use doc_metrics_cli::{logging, presentation};
use doc_metrics_engine::stats::RunResult;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = args.validate() {
        e.exit();
    }
    logging::init(args.verbose);

    let config = match AppConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = if config.stdin {
        if config.engine.watch {
            log::warn!("--watch has no effect when reading standard input");
        }
        run_stdin(&config)
    } else if config.engine.watch {
        run_watch(&config)
    } else {
        run_once(&config)
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_stdin(config: &AppConfig) -> Result<()> {
    let report = doc_metrics_engine::analyze_reader(std::io::stdin().lock(), "-", &config.engine)?;
    if report.is_none() {
        log::warn!("standard input looks binary; nothing to analyze");
    }

    let mut out = std::io::stdout().lock();
    presentation::write_results(&mut out, report.as_slice(), config)?;
    out.flush()?;
    Ok(())
}

fn run_once(config: &AppConfig) -> Result<()> {
    let result = doc_metrics_engine::run(&config.engine)?;
    print_run(&result, config)
}

fn run_watch(config: &AppConfig) -> Result<()> {
    let run_cycle = || {
        let cycle: Result<()> = doc_metrics_engine::run(&config.engine).map_err(Into::into).and_then(|result| {
            presentation::clear_screen(&mut std::io::stdout().lock(), config.format)?;
            print_run(&result, config)
        });
        if let Err(e) = cycle {
            eprintln!("Error in watch cycle: {e}");
        }
    };

    doc_metrics_engine::watch_loop(&config.engine, run_cycle)?;
    Ok(())
}

fn print_run(result: &RunResult, config: &AppConfig) -> Result<()> {
    for (path, err) in &result.errors {
        eprintln!("Error processing {}: {err}", path.display());
    }

    let mut out = std::io::stdout().lock();
    presentation::write_results(&mut out, &result.reports, config)?;
    out.flush()?;
    Ok(())
}
