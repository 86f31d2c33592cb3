//! Advent of Code puzzle solutions with automatic registration
//!
//! This crate contains actual puzzle solutions organized by year.
//! Each solution uses the `AutoRegisterSolution` derive macro for automatic
//! plugin registration with the runner; linking the crate is enough for
//! `RegistryBuilder::register_all_plugins` to see them.

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
