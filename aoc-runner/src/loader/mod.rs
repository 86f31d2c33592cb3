//! Puzzle input loading
//!
//! Input files live at `<root>/Day{NN}/Data/{Test|Full}{1|2}.txt`. A [`FileLoader`]
//! produces the raw text for a `(day, part, mode)` triple; [`FileLoaderExt`] turns that
//! text into lines, whitespace-separated items, or a [`Grid`] of characters.
//!
//! # Loaders
//!
//! - [`FsFileLoader`]: reads from disk, with data root discovery
//! - [`InMemoryFileLoader`]: serves fixed strings, for tests
//!
//! # Converters
//!
//! Every `load_*` method has a `_with` variant taking a converter
//! `FnMut(&str) -> Result<T, E>`. Anything from `str::parse::<i64>` to a closure
//! returning `anyhow::Result` works. The plain variants use the default converter,
//! [`Value::from_str`](std::str::FromStr), which guesses between integer, float,
//! boolean and text.
//!
//! ```
//! use aoc_runner::{FileLoaderExt, InMemoryFileLoader, Part, RunMode};
//!
//! let loader = InMemoryFileLoader::new()
//!     .with_input(100, Part::First, RunMode::Test, "3 4\n\n4 3\n");
//!
//! let rows = loader
//!     .load_items_with(100, Part::First, RunMode::Test, str::parse::<i64>)
//!     .unwrap();
//! assert_eq!(rows, vec![vec![3, 4], vec![4, 3]]);
//! ```

mod fs;
mod memory;
mod value;

#[cfg(test)]
mod tests;

pub use fs::{DATA_DIR_CANDIDATES, FsFileLoader, data_file_name, relative_data_path};
pub use memory::InMemoryFileLoader;
pub use value::Value;

use crate::error::LoadError;
use crate::grid::Grid;
use crate::options::{Part, RunMode};
use std::error::Error;

/// Source of raw puzzle input
pub trait FileLoader {
    /// Read the whole input for a day, part and mode
    fn load_raw(&self, day: u8, part: Part, mode: RunMode) -> Result<String, LoadError>;
}

/// Structured loading on top of any [`FileLoader`]
pub trait FileLoaderExt: FileLoader {
    /// Non-blank lines through the default converter
    fn load_lines(&self, day: u8, part: Part, mode: RunMode) -> Result<Vec<Value>, LoadError> {
        self.load_lines_with(day, part, mode, convert::value)
    }

    fn load_lines_with<T, E, F>(
        &self,
        day: u8,
        part: Part,
        mode: RunMode,
        converter: F,
    ) -> Result<Vec<T>, LoadError>
    where
        F: FnMut(&str) -> Result<T, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        parse_lines(&self.load_raw(day, part, mode)?, converter)
    }

    /// One grid row per non-blank line, one cell per non-whitespace character
    fn load_grid(&self, day: u8, part: Part, mode: RunMode) -> Result<Grid<Value>, LoadError> {
        self.load_grid_with(day, part, mode, convert::value)
    }

    fn load_grid_with<T, E, F>(
        &self,
        day: u8,
        part: Part,
        mode: RunMode,
        converter: F,
    ) -> Result<Grid<T>, LoadError>
    where
        F: FnMut(&str) -> Result<T, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        parse_grid(&self.load_raw(day, part, mode)?, converter)
    }

    /// One row per non-blank line, one entry per whitespace-separated token
    fn load_items(
        &self,
        day: u8,
        part: Part,
        mode: RunMode,
    ) -> Result<Vec<Vec<Value>>, LoadError> {
        self.load_items_with(day, part, mode, convert::value)
    }

    fn load_items_with<T, E, F>(
        &self,
        day: u8,
        part: Part,
        mode: RunMode,
        converter: F,
    ) -> Result<Vec<Vec<T>>, LoadError>
    where
        F: FnMut(&str) -> Result<T, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        parse_items(&self.load_raw(day, part, mode)?, converter)
    }
}

impl<L: FileLoader + ?Sized> FileLoaderExt for L {}

/// Ready-made converters for the `_with` loaders
pub mod convert {
    use super::Value;
    use std::convert::Infallible;
    use thiserror::Error;

    /// The default converter
    pub fn value(s: &str) -> Result<Value, Infallible> {
        s.parse()
    }

    /// Keep the text as-is
    pub fn owned(s: &str) -> Result<String, Infallible> {
        Ok(s.to_owned())
    }

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[error("expected a single character")]
    pub struct NotAChar;

    /// Exactly one character, as produced by grid loading
    pub fn char(s: &str) -> Result<char, NotAChar> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(NotAChar),
        }
    }
}

/// Non-blank lines with their 1-based line numbers, trailing newline characters removed
fn content_lines(raw: &str) -> impl Iterator<Item = (usize, &str)> {
    raw.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_end_matches(['\r', '\n'])))
        .filter(|(_, line)| !line.trim().is_empty())
}

fn convert_one<T, E, F>(line: usize, input: &str, converter: &mut F) -> Result<T, LoadError>
where
    F: FnMut(&str) -> Result<T, E>,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    converter(input).map_err(|e| LoadError::Convert {
        line,
        input: input.to_string(),
        source: e.into(),
    })
}

/// Convert every non-blank line of `raw`
pub fn parse_lines<T, E, F>(raw: &str, mut converter: F) -> Result<Vec<T>, LoadError>
where
    F: FnMut(&str) -> Result<T, E>,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    content_lines(raw)
        .map(|(line_no, line)| convert_one(line_no, line, &mut converter))
        .collect()
}

/// Convert every non-blank line of `raw` into a row of characters, skipping whitespace
pub fn parse_grid<T, E, F>(raw: &str, mut converter: F) -> Result<Grid<T>, LoadError>
where
    F: FnMut(&str) -> Result<T, E>,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    let mut rows = Vec::new();
    for (line_no, line) in content_lines(raw) {
        let mut buf = [0u8; 4];
        let row = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| convert_one(line_no, c.encode_utf8(&mut buf), &mut converter))
            .collect::<Result<Vec<T>, LoadError>>()?;
        rows.push(row);
    }
    Ok(Grid::new(rows)?)
}

/// Split every non-blank line of `raw` on whitespace and convert each token
pub fn parse_items<T, E, F>(raw: &str, mut converter: F) -> Result<Vec<Vec<T>>, LoadError>
where
    F: FnMut(&str) -> Result<T, E>,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    let mut rows = Vec::new();
    for (line_no, line) in content_lines(raw) {
        let row = line
            .split_whitespace()
            .map(|token| convert_one(line_no, token, &mut converter))
            .collect::<Result<Vec<T>, LoadError>>()?;
        if !row.is_empty() {
            rows.push(row);
        }
    }
    Ok(rows)
}
