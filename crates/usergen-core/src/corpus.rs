//! Corpus-wide aggregation of candidate sets.

use std::num::NonZeroUsize;
use std::thread;

use tracing::debug;

use crate::candidates::CandidateSet;
use crate::generate::generate;

/// Union of the candidates generated for many names.
///
/// The corpus is an explicit accumulator owned by the caller; partial
/// corpora built on different threads are combined with [`Corpus::merge`].
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    candidates: CandidateSet,
    names_processed: usize,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates candidates for `full_name` and adds them to the corpus.
    ///
    /// Returns the number of candidates generated for this name alone.
    pub fn add_name(&mut self, full_name: &str) -> usize {
        let candidates = generate(full_name);
        let count = candidates.len();
        self.extend(candidates);
        count
    }

    /// Adds an already generated candidate set, counting it as one name.
    pub fn extend(&mut self, candidates: CandidateSet) {
        self.names_processed += 1;
        self.candidates.union_with(candidates);
    }

    /// Folds another corpus into this one.
    pub fn merge(&mut self, other: Corpus) {
        self.names_processed += other.names_processed;
        self.candidates.union_with(other.candidates);
    }

    /// Number of unique candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of names folded into the corpus.
    pub fn names_processed(&self) -> usize {
        self.names_processed
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Consumes the corpus and returns its candidates in lexicographic order.
    pub fn into_sorted(self) -> Vec<String> {
        self.candidates.into_sorted()
    }
}

/// Builds a corpus from `names`, splitting the work across `workers` threads.
///
/// Each worker builds a private corpus over a contiguous chunk of names and
/// the partial corpora are merged afterwards, so the result is identical to
/// folding the names sequentially.
pub fn generate_corpus(names: &[String], workers: NonZeroUsize) -> Corpus {
    let workers = workers.get().min(names.len());
    if workers <= 1 {
        return sequential_corpus(names);
    }

    let chunk_size = names.len().div_ceil(workers);
    debug!(
        names = names.len(),
        workers,
        chunk_size,
        "generating candidates in parallel"
    );

    thread::scope(|scope| {
        let handles: Vec<_> = names
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || sequential_corpus(chunk)))
            .collect();

        let mut corpus = Corpus::new();
        for handle in handles {
            match handle.join() {
                Ok(partial) => corpus.merge(partial),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        corpus
    })
}

fn sequential_corpus(names: &[String]) -> Corpus {
    let mut corpus = Corpus::new();
    for name in names {
        corpus.add_name(name);
    }
    corpus
}
