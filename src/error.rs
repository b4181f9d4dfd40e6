// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the parse/derive pipeline.
///
/// The pipeline is strictly fail-fast: none of these are retried, and a run
/// that hits `Io`, `Format` or `ColumnCount` produces no dataset (and so no
/// chart) at all. `LengthMismatch`, `UnknownChannel` and `DuplicateChannel`
/// indicate a broken caller contract rather than bad input.
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log file could not be opened or read.
    #[error("cannot read log file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line matched the expected column count but a token was not a number.
    #[error("line {line}: token '{token}' is not a valid number")]
    Format { line: usize, token: String },

    /// Strict mode only: a data line had the wrong number of columns.
    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Too few samples for the requested differentiation scheme.
    #[error("differentiation requires at least {needed} samples, got {actual}")]
    InsufficientSamples { needed: usize, actual: usize },

    /// A channel being added does not match the established sample count.
    #[error("channel '{name}' has {actual} samples, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Lookup of a channel name that is not in the set.
    #[error("unknown channel '{0}'")]
    UnknownChannel(String),

    /// A channel with this name already exists in the set.
    #[error("channel '{0}' already exists")]
    DuplicateChannel(String),

    /// Fixed-step differentiation was configured with a non-positive or
    /// non-finite time step.
    #[error("time step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),
}
