//! Advent of Code Runner Library
//!
//! Loads puzzle input for a day, part and run mode, hands it to the solution
//! registered for that day, and prints the answer.
//!
//! # Overview
//!
//! This library provides:
//! - [`Grid`]: a bounds-checked 2D container with flood fill and perimeter queries
//! - [`FileLoader`] / [`FileLoaderExt`]: input resolution and conversion into lines,
//!   items, or grids
//! - [`Solution`]: the trait every day implements, solved against a [`SolveContext`]
//! - [`RegistryBuilder`] / [`SolutionRegistry`]: a day-keyed table filled by hand
//!   or from `inventory` plugins
//! - [`SolutionRunner`]: runs the configured day, or every day for both parts
//!
//! # Quick Example
//!
//! ```
//! use aoc_runner::{
//!     InMemoryFileLoader, Part, RegistryBuilder, RunMode, SolutionOptions, SolutionRunner,
//!     SolveContext, SolveError, Solution,
//! };
//!
//! struct Day1;
//!
//! impl Solution for Day1 {
//!     fn day(&self) -> u8 {
//!         1
//!     }
//!
//!     fn solve(&self, ctx: &SolveContext<'_>) -> Result<String, SolveError> {
//!         let grid = ctx.load_grid_with(aoc_runner::convert::char)?;
//!         Ok(grid.find_items(&'#').len().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new().register(&Day1, &[]).unwrap().build();
//! let loader = InMemoryFileLoader::new().with_input(1, Part::First, RunMode::Test, "#.#\n.#.");
//! let runner = SolutionRunner::new(registry, loader, SolutionOptions::default());
//!
//! let mut out = Vec::new();
//! runner.run(&mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().ends_with("Solution: 3\n"));
//! ```
//!
//! # Plugin System and Derive Macro
//!
//! Use `#[derive(AutoRegisterSolution)]` to submit a solution to the plugin list:
//! ```ignore
//! #[derive(AutoRegisterSolution)]
//! #[aoc(tags = ["grid"])]
//! struct Day12;
//! ```
//! then build the registry with [`RegistryBuilder::register_all_plugins`].

pub mod debug;
mod error;
mod grid;
pub mod loader;
mod options;
mod point;
mod registry;
mod runner;
mod solution;

// Re-export public API
pub use error::{GridError, LoadError, RegistrationError, RunnerError, SolveError};
pub use grid::Grid;
pub use loader::{
    FileLoader, FileLoaderExt, FsFileLoader, InMemoryFileLoader, Value, convert,
};
pub use options::{Part, RunMode, SolutionOptions, UnknownVariant};
pub use point::{Direction, Point};
pub use registry::{RegistryBuilder, SolutionEntry, SolutionPlugin, SolutionRegistry};
pub use runner::{
    PUZZLE_URL_BASE, RunAllSummary, RunOutcome, SolutionRunner, SolveReport, format_duration,
    solve_timed,
};
pub use solution::{Solution, SolveContext};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use aoc_runner_macros::AutoRegisterSolution;
