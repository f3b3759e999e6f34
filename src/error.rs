//! Error types for the run test.
//!
//! Every variant carries the values needed to diagnose the failure.

use thiserror::Error;

/// Errors raised while loading residuals or evaluating the run test.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunTestError {
    /// Counts or sequence length outside the valid domain.
    #[error("invalid input: {reason} (N={n}, NA={na}, r={r})")]
    InvalidInput {
        reason: String,
        n: usize,
        na: usize,
        r: usize,
    },

    /// Variance of the run count is undefined for fewer than two values.
    #[error("division by zero: V(r) needs N >= 2, got N={n}")]
    DivisionByZero { n: usize },

    /// A computed variance came out negative.
    #[error("negative variance {variance} for N={n}, NA={na}")]
    NumericConsistency { variance: f64, n: usize, na: usize },

    /// A data line whose first column is not a finite number.
    #[error("line {line}: cannot read a residual from '{content}'")]
    Parse { line: usize, content: String },

    /// Input contained no data lines.
    #[error("no residual values found")]
    EmptyInput,
}

impl RunTestError {
    pub(crate) fn invalid(reason: impl Into<String>, n: usize, na: usize, r: usize) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
            n,
            na,
            r,
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, RunTestError>;
