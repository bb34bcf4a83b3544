//! Ordered output destinations.

use std::path::{Path, PathBuf};

/// File name used for the default and fallback destinations.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "usernames.list";

/// Destinations tried in order until one accepts the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    destinations: Vec<PathBuf>,
}

impl OutputPlan {
    pub fn new(destinations: Vec<PathBuf>) -> Self {
        Self { destinations }
    }

    /// The primary path, then the home directory, then the system temp directory.
    ///
    /// The home entry is left out when no home directory can be determined.
    pub fn standard(primary: impl Into<PathBuf>) -> Self {
        let mut destinations = vec![primary.into()];
        if let Some(home) = dirs::home_dir() {
            destinations.push(home.join(DEFAULT_OUTPUT_FILE_NAME));
        }
        destinations.push(std::env::temp_dir().join(DEFAULT_OUTPUT_FILE_NAME));
        Self { destinations }
    }

    /// Primary path used when the caller gives none: `usernames.list` in `dir`.
    pub fn default_primary(dir: &Path) -> PathBuf {
        dir.join(DEFAULT_OUTPUT_FILE_NAME)
    }

    pub fn destinations(&self) -> &[PathBuf] {
        &self.destinations
    }

    pub fn primary(&self) -> Option<&Path> {
        self.destinations.first().map(PathBuf::as_path)
    }
}
