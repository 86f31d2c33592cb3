//! AOC CLI - Command-line interface for running Advent of Code solutions

mod cli;
mod config;
mod error;

// Import aoc-solutions to link the solution plugins
use aoc_solutions as _;

use aoc_runner::{
    FsFileLoader, RegistryBuilder, RunOutcome, SolutionRegistry, SolutionRunner, format_duration,
};
use clap::Parser;
use cli::Args;
use config::Config;
use log::{LevelFilter, debug, info};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    // Config::from_args logs, so the logger comes first
    init_logging(config::log_level(args.verbose));
    let config = Config::from_args(args)?;

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;
    debug!("Registered days: {:?}", registry.days().collect::<Vec<_>>());

    let loader = match &config.data_dir {
        Some(dir) => FsFileLoader::new(dir),
        None => {
            let base = std::env::current_dir().map_err(|source| error::CliError::Io {
                path: ".".into(),
                source,
            })?;
            FsFileLoader::discover(&base)
        }
    };
    info!("Reading inputs from {}", loader.root().display());

    let runner = SolutionRunner::new(registry, loader, config.options);
    let mut stdout = std::io::stdout().lock();

    if config.run_all {
        let summary = runner.run_all(&mut stdout)?;
        info!("{} part(s) solved, {} failed", summary.solved, summary.failed);
    } else if let RunOutcome::Solved(report) = runner.run(&mut stdout)? {
        info!("Solved in {}", format_duration(report.duration()));
    }

    Ok(())
}

/// `RUST_LOG` takes precedence over `-v`
fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolutionRegistry, error::CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solution_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
