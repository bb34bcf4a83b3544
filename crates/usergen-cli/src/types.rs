use std::path::PathBuf;

use usergen_ingest::ColumnChoice;
use usergen_output::WriteOutcome;

#[derive(Debug)]
pub struct RunResult {
    pub source: PathBuf,
    pub column: ColumnChoice,
    pub total_rows: usize,
    pub skipped_rows: usize,
    pub names_processed: usize,
    pub candidates: usize,
    pub written: Option<WriteOutcome>,
}
