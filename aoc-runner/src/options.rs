//! Day, part and run mode selection

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which half of a puzzle to solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Part {
    #[default]
    First,
    Second,
}

impl Part {
    pub const ALL: [Part; 2] = [Part::First, Part::Second];

    /// 1 for [`Part::First`], 2 for [`Part::Second`]
    pub const fn number(self) -> u8 {
        match self {
            Part::First => 1,
            Part::Second => 2,
        }
    }

    pub const fn from_number(number: u8) -> Option<Part> {
        match number {
            1 => Some(Part::First),
            2 => Some(Part::Second),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Part::First => "First",
            Part::Second => "Second",
        }
    }
}

/// Whether to read the sample input or the full puzzle input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RunMode {
    #[default]
    Test,
    Full,
}

impl RunMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            RunMode::Test => "Test",
            RunMode::Full => "Full",
        }
    }
}

/// Error for option names that match no variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized {kind} {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

fn match_ignore_case<T: Copy>(
    kind: &'static str,
    value: &str,
    variants: &[(T, &str)],
) -> Result<T, UnknownVariant> {
    let normalized = value.trim();
    variants
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(normalized))
        .map(|(variant, _)| *variant)
        .ok_or_else(|| UnknownVariant {
            kind,
            value: value.to_string(),
        })
}

impl FromStr for Part {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_case(
            "solution type",
            s,
            &[(Part::First, "First"), (Part::Second, "Second")],
        )
    }
}

impl FromStr for RunMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_case(
            "run type",
            s,
            &[(RunMode::Test, "Test"), (RunMode::Full, "Full")],
        )
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The day, part and mode that drive input selection.
///
/// Options are passed around by value; changing them for a single solve means
/// building a new value with [`SolutionOptions::with_part`] or
/// [`SolutionOptions::with_day`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolutionOptions {
    pub day: u8,
    pub part: Part,
    pub mode: RunMode,
}

impl Default for SolutionOptions {
    fn default() -> Self {
        Self {
            day: 1,
            part: Part::First,
            mode: RunMode::Test,
        }
    }
}

impl SolutionOptions {
    pub fn new(day: u8, part: Part, mode: RunMode) -> Self {
        Self { day, part, mode }
    }

    pub fn with_day(self, day: u8) -> Self {
        Self { day, ..self }
    }

    pub fn with_part(self, part: Part) -> Self {
        Self { part, ..self }
    }

    pub fn with_mode(self, mode: RunMode) -> Self {
        Self { mode, ..self }
    }
}
