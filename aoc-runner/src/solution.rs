//! Core solution trait and the context it solves against

use crate::error::{LoadError, SolveError};
use crate::grid::Grid;
use crate::loader::{FileLoader, FileLoaderExt, Value};
use crate::options::{Part, RunMode, SolutionOptions};
use std::error::Error;

/// Trait that every puzzle solution implements.
///
/// A solution is stateless: it names its day and, given a [`SolveContext`],
/// loads its own input and returns the answer as display text. The same
/// solution serves both parts; [`SolveContext::part`] tells them apart.
///
/// # Example
///
/// ```
/// use aoc_runner::{
///     InMemoryFileLoader, Part, RunMode, SolutionOptions, SolveContext, SolveError, Solution,
/// };
///
/// struct Sum;
///
/// impl Solution for Sum {
///     fn day(&self) -> u8 {
///         1
///     }
///
///     fn solve(&self, ctx: &SolveContext<'_>) -> Result<String, SolveError> {
///         let numbers = ctx.load_lines_with(str::parse::<i64>)?;
///         Ok(numbers.iter().sum::<i64>().to_string())
///     }
/// }
///
/// let loader = InMemoryFileLoader::new().with_input(1, Part::First, RunMode::Test, "1\n2\n3");
/// let ctx = SolveContext::new(&loader, SolutionOptions::default());
/// assert_eq!(Sum.solve(&ctx).unwrap(), "6");
/// ```
pub trait Solution: Sync {
    /// The puzzle day this solution answers
    fn day(&self) -> u8;

    /// Compute the answer for the part selected in `ctx`
    fn solve(&self, ctx: &SolveContext<'_>) -> Result<String, SolveError>;
}

/// Input access bound to one day, part and mode
#[derive(Clone, Copy)]
pub struct SolveContext<'a> {
    loader: &'a dyn FileLoader,
    options: SolutionOptions,
}

impl<'a> SolveContext<'a> {
    pub fn new(loader: &'a dyn FileLoader, options: SolutionOptions) -> Self {
        Self { loader, options }
    }

    pub fn options(&self) -> SolutionOptions {
        self.options
    }

    pub fn day(&self) -> u8 {
        self.options.day
    }

    pub fn part(&self) -> Part {
        self.options.part
    }

    pub fn mode(&self) -> RunMode {
        self.options.mode
    }

    pub fn load_raw(&self) -> Result<String, LoadError> {
        let SolutionOptions { day, part, mode } = self.options;
        self.loader.load_raw(day, part, mode)
    }

    pub fn load_lines(&self) -> Result<Vec<Value>, LoadError> {
        let SolutionOptions { day, part, mode } = self.options;
        self.loader.load_lines(day, part, mode)
    }

    pub fn load_lines_with<T, E, F>(&self, converter: F) -> Result<Vec<T>, LoadError>
    where
        F: FnMut(&str) -> Result<T, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        let SolutionOptions { day, part, mode } = self.options;
        self.loader.load_lines_with(day, part, mode, converter)
    }

    pub fn load_grid(&self) -> Result<Grid<Value>, LoadError> {
        let SolutionOptions { day, part, mode } = self.options;
        self.loader.load_grid(day, part, mode)
    }

    pub fn load_grid_with<T, E, F>(&self, converter: F) -> Result<Grid<T>, LoadError>
    where
        F: FnMut(&str) -> Result<T, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        let SolutionOptions { day, part, mode } = self.options;
        self.loader.load_grid_with(day, part, mode, converter)
    }

    pub fn load_items(&self) -> Result<Vec<Vec<Value>>, LoadError> {
        let SolutionOptions { day, part, mode } = self.options;
        self.loader.load_items(day, part, mode)
    }

    pub fn load_items_with<T, E, F>(&self, converter: F) -> Result<Vec<Vec<T>>, LoadError>
    where
        F: FnMut(&str) -> Result<T, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        let SolutionOptions { day, part, mode } = self.options;
        self.loader.load_items_with(day, part, mode, converter)
    }
}
