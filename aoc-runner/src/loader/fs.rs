//! Filesystem-backed input loader

use super::FileLoader;
use crate::error::LoadError;
use crate::options::{Part, RunMode};
use log::debug;
use std::path::{Path, PathBuf};

/// Data roots tried by [`FsFileLoader::discover`], in order
pub const DATA_DIR_CANDIDATES: [&str; 5] = [
    "data",
    "Solutions",
    "solutions",
    "../dotnet/Solutions",
    "../typescript/Solutions",
];

/// `{Test|Full}{1|2}.txt`
pub fn data_file_name(part: Part, mode: RunMode) -> String {
    format!("{}{}.txt", mode.as_str(), part.number())
}

/// `Day{NN}/Data/{Test|Full}{1|2}.txt`, relative to a data root
pub fn relative_data_path(day: u8, part: Part, mode: RunMode) -> PathBuf {
    PathBuf::from(format!("Day{day:02}"))
        .join("Data")
        .join(data_file_name(part, mode))
}

/// Reads input files below a data root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsFileLoader {
    root: PathBuf,
}

impl FsFileLoader {
    /// Use `root` as the data root without checking that it exists
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Pick the first of [`DATA_DIR_CANDIDATES`] that exists below `base`.
    ///
    /// Falls back to the first candidate when none exist, so the failure shows
    /// up as a missing file on the first read.
    pub fn discover(base: &Path) -> Self {
        let root = DATA_DIR_CANDIDATES
            .iter()
            .map(|candidate| base.join(candidate))
            .find(|candidate| candidate.exists());

        let root = match root {
            Some(root) => {
                debug!("Using data root {}", root.display());
                root
            }
            None => {
                let fallback = base.join(DATA_DIR_CANDIDATES[0]);
                debug!(
                    "No data root found below {}, falling back to {}",
                    base.display(),
                    fallback.display()
                );
                fallback
            }
        };

        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the input file for a day, part and mode
    pub fn data_file_path(&self, day: u8, part: Part, mode: RunMode) -> PathBuf {
        self.root.join(relative_data_path(day, part, mode))
    }
}

impl FileLoader for FsFileLoader {
    fn load_raw(&self, day: u8, part: Part, mode: RunMode) -> Result<String, LoadError> {
        let path = self.data_file_path(day, part, mode);
        debug!("Reading {}", path.display());
        std::fs::read_to_string(&path).map_err(|source| LoadError::Io { path, source })
    }
}
