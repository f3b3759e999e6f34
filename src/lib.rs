//! runs-test: exact Wald-Wolfowitz run test on ordered residuals.
//!
//! Counts runs of same-sign residuals and computes the exact probability of
//! observing that many runs or fewer under random ordering.

pub mod error;
pub mod exact;
pub mod report;
pub mod residuals;
pub mod runs;
pub mod stats;
pub mod types;

pub use error::{Result, RunTestError};
pub use runs::count_runs;
pub use stats::{compute_moments, compute_p_value, run_test};
