//! Solution registry keyed by day

use crate::error::RegistrationError;
use crate::solution::Solution;
use std::collections::BTreeMap;

/// Plugin information for automatic solution registration
///
/// Submitted through `inventory::submit!`, usually by
/// `#[derive(AutoRegisterSolution)]`.
///
/// # Example
///
/// ```no_run
/// use aoc_runner::{SolveContext, SolveError, Solution, SolutionPlugin};
///
/// struct Day3;
///
/// impl Solution for Day3 {
///     fn day(&self) -> u8 {
///         3
///     }
///
///     fn solve(&self, _ctx: &SolveContext<'_>) -> Result<String, SolveError> {
///         Ok("Hello, World!".to_string())
///     }
/// }
///
/// inventory::submit! {
///     SolutionPlugin {
///         solution: &Day3,
///         tags: &["placeholder"],
///     }
/// }
/// ```
pub struct SolutionPlugin {
    /// The solution instance (type-erased)
    pub solution: &'static dyn Solution,
    /// Optional tags for filtering (e.g., "placeholder", "grid")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolutionPlugin);

/// A registered solution with its tags
#[derive(Clone, Copy)]
pub struct SolutionEntry {
    pub solution: &'static dyn Solution,
    pub tags: &'static [&'static str],
}

impl SolutionEntry {
    pub fn day(&self) -> u8 {
        self.solution.day()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }
}

/// Builder for constructing a [`SolutionRegistry`]
///
/// Rejects a second solution for a day that is already taken.
///
/// # Example
///
/// ```no_run
/// # use aoc_runner::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_solution_plugins(|plugin| !plugin.tags.contains(&"placeholder"))
///     .unwrap()
///     .build();
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    solutions: BTreeMap<u8, SolutionEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a solution under its own day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solution registered, ready for chaining
    /// * `Err(RegistrationError)` - Another solution already claims this day
    pub fn register(
        mut self,
        solution: &'static dyn Solution,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError> {
        let day = solution.day();
        if self.solutions.contains_key(&day) {
            return Err(RegistrationError::DuplicateSolution(day));
        }
        self.solutions.insert(day, SolutionEntry { solution, tags });
        Ok(self)
    }

    /// Register every plugin collected through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solution_plugins(|_| true)
    }

    /// Register the plugins for which `filter` returns `true`
    pub fn register_solution_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolutionPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolutionPlugin>() {
            if filter(plugin) {
                self = self.register(plugin.solution, plugin.tags)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolutionRegistry {
        SolutionRegistry {
            solutions: self.solutions,
        }
    }
}

/// Immutable day-to-solution table
pub struct SolutionRegistry {
    solutions: BTreeMap<u8, SolutionEntry>,
}

impl SolutionRegistry {
    pub fn get(&self, day: u8) -> Option<&SolutionEntry> {
        self.solutions.get(&day)
    }

    /// All entries in ascending day order
    pub fn iter(&self) -> impl Iterator<Item = &SolutionEntry> + '_ {
        self.solutions.values()
    }

    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.solutions.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}
