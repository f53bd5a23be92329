//! Error types for the family tree pipeline.
//!
//! Structural issues found while ingesting (a household with the wrong
//! parent count) are reported and skipped; everything discovered later
//! aborts the run, since a partially emitted descriptor is useless to the
//! downstream layout engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FamilyError>;

/// Failure modes across ingestion, traversal and emission.
#[derive(Debug, Error)]
pub enum FamilyError {
    /// A person record with no content after trimming.
    #[error("line {line}: empty person record")]
    MalformedRecord { line: usize },

    /// A household finalized with a parent count other than two.
    #[error("household must have exactly 2 parents, found {found} ({parents:?})")]
    MalformedHousehold { found: usize, parents: Vec<String> },

    /// The layout has no defined shape beyond two unions per person.
    #[error("person \"{name}\" has {count} spouses/husbands: drawing this is not implemented")]
    UnsupportedSpouseCount { name: String, count: usize },

    #[error("cannot find person \"{name}\"")]
    PersonNotFound { name: String },

    #[error("no ancestor found: every person has a recorded parent household")]
    NoAncestorFound,

    /// Traversal produced more generations than registered persons,
    /// which only a parent/child cycle can cause.
    #[error("family graph is cyclic: traversal exceeded {persons} generations")]
    CyclicFamily { persons: usize },

    #[error("invalid id normalization pattern: {0}")]
    IdPattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
