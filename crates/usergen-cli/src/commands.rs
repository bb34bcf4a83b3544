use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use usergen_core::Corpus;
use usergen_ingest::{ColumnSelector, RowFilter};
use usergen_output::OutputPlan;

use crate::cli::{GenerateArgs, PreviewArgs};
use crate::types::RunResult;
use usergen_cli::pipeline::{IngestResult, OutputResult, ingest, output};

pub fn run_generate(args: &GenerateArgs) -> Result<RunResult> {
    let run_span = info_span!("generate", target = %args.target.display());
    let _run_guard = run_span.enter();

    let selector = match &args.column {
        Some(column) => ColumnSelector::Explicit(column.clone()),
        None => ColumnSelector::auto_with(args.headers.iter().cloned()),
    };
    let filter = RowFilter::default().with_placeholders(&args.placeholders);
    let primary = match &args.output {
        Some(path) => path.clone(),
        None => {
            let cwd = std::env::current_dir().context("resolve current directory")?;
            OutputPlan::default_primary(&cwd)
        }
    };
    let plan = OutputPlan::standard(primary);
    let workers = args.jobs.unwrap_or_else(default_workers);

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let ingest_start = Instant::now();
    let IngestResult {
        source,
        choice,
        column,
    } = info_span!("ingest").in_scope(|| ingest(&args.target, &selector, &filter))?;
    info!(
        names = column.names.len(),
        skipped = column.skipped_rows,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Generate
    // =========================================================================
    let generate_start = Instant::now();
    let corpus = info_span!("candidates", workers = workers.get())
        .in_scope(|| usergen_cli::pipeline::generate(&column.names, workers));
    let names_processed = corpus.names_processed();
    info!(
        names = names_processed,
        candidates = corpus.len(),
        duration_ms = generate_start.elapsed().as_millis(),
        "generation complete"
    );

    // =========================================================================
    // Stage 3: Output
    // =========================================================================
    let output_start = Instant::now();
    let OutputResult {
        candidates,
        written,
    } = info_span!("output").in_scope(|| output(corpus, &plan, args.dry_run))?;
    info!(
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );

    Ok(RunResult {
        source,
        column: choice,
        total_rows: column.total_rows,
        skipped_rows: column.skipped_rows,
        names_processed,
        candidates,
        written,
    })
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let mut corpus = Corpus::new();
    for name in &args.names {
        corpus.add_name(name);
    }
    let mut out = io::stdout().lock();
    for candidate in corpus.into_sorted() {
        writeln!(out, "{candidate}").context("write to stdout")?;
    }
    Ok(())
}

fn default_workers() -> NonZeroUsize {
    thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}
