//! Error types for the runner library

use crate::options::Part;
use crate::point::Point;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for grid construction and mutation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The grid was built from no rows, or from an empty first row
    #[error("Grid must have at least one row and column")]
    Empty,
    /// A point outside the grid was used where an in-bounds point is required
    #[error("Point ({}, {}) is outside grid bounds", .0.x, .0.y)]
    OutOfBounds(Point),
    /// Flood fill was started from a point that holds no value
    #[error("Start point ({}, {}) must be within the grid", .0.x, .0.y)]
    StartNotInGrid(Point),
}

/// Error type for loading puzzle input
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The converter rejected a line, token or character
    #[error("(line {line}) cannot convert {input:?}: {source}")]
    Convert {
        line: usize,
        input: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The loaded rows do not form a valid grid
    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),
}

/// Error type for solving a puzzle
#[derive(Debug, Error)]
pub enum SolveError {
    /// Loading the input failed
    #[error("Load error: {0}")]
    Load(#[from] LoadError),
    /// A grid operation failed
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),
    /// The input loaded fine but does not fit the puzzle
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// An error occurred while solving
    #[error("Solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Two solutions claim the same day
    #[error("Duplicate solution registration for day {0}")]
    DuplicateSolution(u8),
}

/// Error type for runner operations
#[derive(Debug, Error)]
pub enum RunnerError {
    /// A solution returned an error
    #[error("Day {day} {part} part failed: {source}")]
    Solve {
        day: u8,
        part: Part,
        #[source]
        source: SolveError,
    },
    /// Writing to the output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}
