use std::io;

use thiserror::Error;

/// Everything that can abort a mining run.
///
/// Empty results (no frequent items, no rules above the confidence bar) are
/// not errors; they come back as empty collections.
#[derive(Debug, Error)]
pub enum MiningError {
    #[error("{name} must be in range {range}, got {value}")]
    InvalidThreshold {
        name: &'static str,
        range: &'static str,
        value: f64,
    },

    #[error("{name} must be greater than zero")]
    InvalidLimit { name: &'static str },

    #[error("input contains no items")]
    EmptyDomain,

    #[error("item {item} is outside the item domain [1,{domain}]")]
    ItemOutOfDomain { item: u32, domain: usize },

    #[error("level {level} produced {candidates} candidates, more than the limit of {limit}")]
    CandidateLimitExceeded {
        level: usize,
        candidates: usize,
        limit: usize,
    },

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}
