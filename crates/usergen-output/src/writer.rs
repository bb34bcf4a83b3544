//! Line rendering and fallback writing.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{OutputError, Result};
use crate::plan::OutputPlan;

/// A destination that refused the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteAttempt {
    pub path: PathBuf,
    pub error: String,
}

/// Where the candidate list ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Destination that accepted the file.
    pub path: PathBuf,
    /// Destinations rejected before `path`, in plan order.
    pub rejected: Vec<WriteAttempt>,
    pub lines_written: usize,
}

impl WriteOutcome {
    /// True when the primary destination was not the one written.
    pub fn fallback_used(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// File system operations used by [`write_candidates_with`].
pub trait OutputFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// The real file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFs;

impl OutputFs for StdFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// Renders candidates one per line, each terminated by `\n`.
pub fn render_lines(candidates: &[String]) -> String {
    let capacity = candidates.iter().map(|line| line.len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for candidate in candidates {
        out.push_str(candidate);
        out.push('\n');
    }
    out
}

/// Writes `candidates` to the first destination of `plan` that accepts them.
pub fn write_candidates(plan: &OutputPlan, candidates: &[String]) -> Result<WriteOutcome> {
    write_candidates_with(&StdFs, plan, candidates)
}

/// Writes `candidates` through `fs`, trying each destination in order.
///
/// Missing parent directories are created. A permission failure moves on to
/// the next destination; any other I/O error is returned immediately.
pub fn write_candidates_with<F: OutputFs>(
    fs: &F,
    plan: &OutputPlan,
    candidates: &[String],
) -> Result<WriteOutcome> {
    if plan.destinations().is_empty() {
        return Err(OutputError::NoDestinations);
    }

    let contents = render_lines(candidates);
    let mut rejected = Vec::new();

    for path in plan.destinations() {
        match write_one(fs, path, contents.as_bytes()) {
            Ok(()) => {
                info!(
                    path = %path.display(),
                    lines = candidates.len(),
                    "candidates written"
                );
                return Ok(WriteOutcome {
                    path: path.clone(),
                    rejected,
                    lines_written: candidates.len(),
                });
            }
            Err(error) if is_rejection(&error) => {
                warn!(path = %path.display(), %error, "output destination rejected");
                rejected.push(WriteAttempt {
                    path: path.clone(),
                    error: error.to_string(),
                });
            }
            Err(source) => {
                return Err(OutputError::Write {
                    path: path.clone(),
                    source,
                });
            }
        }
    }

    Err(OutputError::AllDestinationsRejected { attempts: rejected })
}

fn write_one<F: OutputFs>(fs: &F, path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs.create_dir_all(parent)?;
    }
    fs.write(path, contents)
}

fn is_rejection(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::PermissionDenied | ErrorKind::ReadOnlyFilesystem
    )
}
