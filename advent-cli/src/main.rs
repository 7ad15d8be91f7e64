//! Command-line runner for the daily puzzle solvers

mod cache;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

use advent_http_client::AdventClient;
use advent_solver::RegistryBuilder;
use cache::InputCache;
use clap::Parser;
use cli::Args;
use config::Config;
use error::{CliError, ExecutorError};
use executor::Executor;
use input::InputProvider;
use output::OutputFormatter;

fn main() {
    let raw = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let args = Args::parse_from(cli::normalize_args(raw));
    init_logging(args.debug);

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// `RUST_LOG` wins; otherwise `warn`, or `debug` with `--debug`
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Run the selected solvers; `Ok(false)` when any part failed or mismatched
fn run(args: Args) -> Result<bool, CliError> {
    let config = Config::from_args(args)?;

    rayon::ThreadPoolBuilder::new()
        .num_threads(config.thread_count)
        .build_global()?;

    let registry = advent_solutions::register_all(RegistryBuilder::new())?.build();
    let provider = InputProvider::new(
        InputCache::new(config.cache_dir.clone()),
        AdventClient::new()?,
        config.session.clone(),
    );
    let executor = Executor::new(registry, provider, &config);

    let selected = executor.selected();
    if selected.is_empty() {
        println!("No solvers match the selected years and days.");
        return Ok(true);
    }
    log::info!("running {} solver(s) in {:?} mode", selected.len(), config.mode);

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let mut formatter = OutputFormatter::new(config.quiet);
    for report in rx {
        formatter.print_report(&report);
    }

    executor_handle
        .join()
        .map_err(|_| ExecutorError::Panicked)??;

    formatter.print_summary();
    Ok(formatter.summary().is_success())
}
