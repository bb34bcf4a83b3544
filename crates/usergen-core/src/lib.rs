//! Username candidate generation.
//!
//! This crate turns a person's full name into a deterministic set of login
//! username candidates by enumerating combinations of the name parts
//! (single parts, pairs in both orders, ordered triples, initials and the
//! full concatenation).
//!
//! # Example
//!
//! ```
//! use usergen_core::generate;
//!
//! let candidates = generate("Ada Lovelace");
//! assert!(candidates.contains("alovelace"));
//! assert!(candidates.contains("lovelaceada"));
//! assert_eq!(candidates.len(), 6);
//! ```
//!
//! Generation is total: any input string, including empty or
//! whitespace-only strings, yields a (possibly empty) [`CandidateSet`].

mod candidates;
mod corpus;
mod generate;
mod name;

pub use candidates::CandidateSet;
pub use corpus::{Corpus, generate_corpus};
pub use generate::{generate, generate_from_parts};
pub use name::NameParts;
