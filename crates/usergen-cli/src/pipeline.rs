//! Candidate generation pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the input table, pick the name column, filter rows
//! 2. **Generate**: Build the candidate corpus from the accepted names
//! 3. **Output**: Sort the corpus and write it to the first accepting destination
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{Level, debug, info};

use usergen_core::{Corpus, generate_corpus};
use usergen_ingest::{ColumnChoice, ColumnSelector, NameColumn, RowFilter, read_name_table};
use usergen_output::{OutputPlan, WriteOutcome, write_candidates};

use crate::logging::redact_value;

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    /// Input table path.
    pub source: PathBuf,
    /// Column the names were read from.
    pub choice: ColumnChoice,
    /// Accepted names and row counts.
    pub column: NameColumn,
}

/// Read the table and extract the names to process.
pub fn ingest(target: &Path, selector: &ColumnSelector, filter: &RowFilter) -> Result<IngestResult> {
    let table = read_name_table(target)
        .with_context(|| format!("read input table {}", target.display()))?;
    info!(
        rows = table.len(),
        columns = %table.headers.join(", "),
        "input table read"
    );

    let choice = selector.select(&table).context("select name column")?;
    info!(column = %choice.name, detection = ?choice.detection, "using name column");

    let column = table.name_column(&choice, filter);
    Ok(IngestResult {
        source: table.path,
        choice,
        column,
    })
}

// ============================================================================
// Stage 2: Generate
// ============================================================================

/// Build the candidate corpus for `names`.
///
/// When debug logging is enabled each name is processed in input order and
/// logged with its candidate count; otherwise the work is spread over
/// `workers` threads.
pub fn generate(names: &[String], workers: NonZeroUsize) -> Corpus {
    if tracing::enabled!(Level::DEBUG) {
        let mut corpus = Corpus::new();
        for name in names {
            let count = corpus.add_name(name);
            debug!(name = %redact_value(name), candidates = count, "processed name");
        }
        return corpus;
    }
    generate_corpus(names, workers)
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Result of the output stage.
#[derive(Debug)]
pub struct OutputResult {
    /// Number of unique candidates.
    pub candidates: usize,
    /// Where the list was written; `None` for dry runs.
    pub written: Option<WriteOutcome>,
}

/// Sort the corpus and write it according to `plan`.
pub fn output(corpus: Corpus, plan: &OutputPlan, dry_run: bool) -> Result<OutputResult> {
    let sorted = corpus.into_sorted();
    let candidates = sorted.len();
    if dry_run {
        info!(candidates, "dry run, skipping output");
        return Ok(OutputResult {
            candidates,
            written: None,
        });
    }
    let outcome = write_candidates(plan, &sorted).context("write candidate list")?;
    Ok(OutputResult {
        candidates,
        written: Some(outcome),
    })
}
