//! In-memory input loader

use super::{FileLoader, relative_data_path};
use crate::error::LoadError;
use crate::options::{Part, RunMode};
use std::collections::HashMap;
use std::io;

/// Serves inputs registered up front, keyed by day, part and mode
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileLoader {
    files: HashMap<(u8, Part, RunMode), String>,
}

impl InMemoryFileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`InMemoryFileLoader::insert`]
    pub fn with_input(
        mut self,
        day: u8,
        part: Part,
        mode: RunMode,
        content: impl Into<String>,
    ) -> Self {
        self.insert(day, part, mode, content);
        self
    }

    /// Register the same content for both parts
    pub fn with_shared_input(self, day: u8, mode: RunMode, content: impl Into<String>) -> Self {
        let content = content.into();
        self.with_input(day, Part::First, mode, content.clone())
            .with_input(day, Part::Second, mode, content)
    }

    pub fn insert(&mut self, day: u8, part: Part, mode: RunMode, content: impl Into<String>) {
        self.files.insert((day, part, mode), content.into());
    }
}

impl FileLoader for InMemoryFileLoader {
    fn load_raw(&self, day: u8, part: Part, mode: RunMode) -> Result<String, LoadError> {
        self.files
            .get(&(day, part, mode))
            .cloned()
            .ok_or_else(|| LoadError::Io {
                path: relative_data_path(day, part, mode),
                source: io::Error::new(io::ErrorKind::NotFound, "no in-memory input registered"),
            })
    }
}
