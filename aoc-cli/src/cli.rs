//! CLI argument parsing using clap

use aoc_runner::RunMode;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Input file selection
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ModeArg {
    /// Sample input (`Test1.txt` / `Test2.txt`)
    Test,
    /// Complete puzzle input (`Full1.txt` / `Full2.txt`)
    Full,
}

impl From<ModeArg> for RunMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Test => RunMode::Test,
            ModeArg::Full => RunMode::Full,
        }
    }
}

/// Advent of Code solution runner
#[derive(Parser, Debug, Default)]
#[command(name = "aoc", about = "Run Advent of Code solutions", version)]
pub struct Args {
    /// Settings file with a "Solution" section [default: appsettings.json]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Day to run, overriding the settings file
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..))]
    pub day: Option<u8>,

    /// Part to run, overriding the settings file
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Input to run against, overriding the settings file
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Run both parts of every registered day
    #[arg(long)]
    pub all: bool,

    /// Data root holding DayNN/Data/ folders (discovered if omitted)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Tags to filter solutions (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
