//! Candidate list output.
//!
//! Candidates are written one per line, `\n`-terminated, in the order the
//! caller supplies (normally sorted). Writes go to an [`OutputPlan`]: an
//! ordered list of destinations tried until one accepts the file.

mod error;
mod plan;
mod writer;

pub use error::{OutputError, Result};
pub use plan::{DEFAULT_OUTPUT_FILE_NAME, OutputPlan};
pub use writer::{
    OutputFs, StdFs, WriteAttempt, WriteOutcome, render_lines, write_candidates,
    write_candidates_with,
};
