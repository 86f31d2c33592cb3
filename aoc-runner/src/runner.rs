//! Runs the configured solution, or every solution for both parts

use crate::error::{RunnerError, SolveError};
use crate::loader::FileLoader;
use crate::options::{Part, SolutionOptions};
use crate::registry::SolutionRegistry;
use crate::solution::{Solution, SolveContext};
use chrono::{DateTime, TimeDelta, Utc};
use log::info;
use std::io::Write;

/// Puzzle page linked in the run header
pub const PUZZLE_URL_BASE: &str = "https://adventofcode.com/2025/day";

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveReport {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// What [`SolutionRunner::run`] did
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The configured day was solved
    Solved(SolveReport),
    /// No solution is registered for the configured day
    NotFound { day: u8 },
}

/// Tally of a [`SolutionRunner::run_all`] pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunAllSummary {
    pub solved: usize,
    pub failed: usize,
}

/// Solve one solution with timing
pub fn solve_timed(
    solution: &dyn Solution,
    loader: &dyn FileLoader,
    options: SolutionOptions,
) -> Result<SolveReport, SolveError> {
    let ctx = SolveContext::new(loader, options);

    let solve_start = Utc::now();
    let answer = solution.solve(&ctx)?;
    let solve_end = Utc::now();

    let report = SolveReport {
        answer,
        solve_start,
        solve_end,
    };
    info!(
        "Day {} {} part ({} run) solved in {}",
        options.day,
        options.part,
        options.mode,
        format_duration(report.duration())
    );
    Ok(report)
}

/// Dispatches solutions from a registry against a loader
pub struct SolutionRunner<L> {
    registry: SolutionRegistry,
    loader: L,
    options: SolutionOptions,
}

impl<L: FileLoader> SolutionRunner<L> {
    pub fn new(registry: SolutionRegistry, loader: L, options: SolutionOptions) -> Self {
        Self {
            registry,
            loader,
            options,
        }
    }

    pub fn options(&self) -> SolutionOptions {
        self.options
    }

    pub fn registry(&self) -> &SolutionRegistry {
        &self.registry
    }

    /// Solve the configured day and part, writing a header and the answer.
    ///
    /// An unknown day is reported on `out` and returned as
    /// [`RunOutcome::NotFound`]; solve failures are returned as errors.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunOutcome, RunnerError> {
        let options = self.options;
        let Some(entry) = self.registry.get(options.day) else {
            writeln!(out, "Solution for day {} not found.", options.day)?;
            return Ok(RunOutcome::NotFound { day: options.day });
        };

        writeln!(
            out,
            "Day {}, {} part, {} run",
            options.day, options.part, options.mode
        )?;
        writeln!(out, "{}/{}", PUZZLE_URL_BASE, options.day)?;

        let report = solve_timed(entry.solution, &self.loader, options).map_err(|source| {
            RunnerError::Solve {
                day: options.day,
                part: options.part,
                source,
            }
        })?;
        writeln!(out, "Solution: {}", report.answer)?;

        Ok(RunOutcome::Solved(report))
    }

    /// Solve both parts of every registered day in ascending order.
    ///
    /// Each solve gets its own options value carrying that solution's day and
    /// the forced part; the runner's configured options are left untouched.
    /// A failing part is written as an error line and the pass continues.
    pub fn run_all<W: Write>(&self, out: &mut W) -> Result<RunAllSummary, RunnerError> {
        let mut summary = RunAllSummary::default();

        for entry in self.registry.iter() {
            let day = entry.day();
            for part in Part::ALL {
                let options = self.options.with_day(day).with_part(part);
                match solve_timed(entry.solution, &self.loader, options) {
                    Ok(report) => {
                        summary.solved += 1;
                        writeln!(
                            out,
                            "Day: {}, Solution {}: {}",
                            day,
                            part.number(),
                            report.answer
                        )?;
                    }
                    Err(e) => {
                        summary.failed += 1;
                        writeln!(out, "Day: {}, Solution {}: Error - {}", day, part.number(), e)?;
                    }
                }
            }
        }

        Ok(summary)
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(250)), "250µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }
}
