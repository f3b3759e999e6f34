//! Run counting over the signs of an ordered residual sequence.

use crate::error::{Result, RunTestError};
use crate::types::{RunStatistics, RunStep, Sign};

/// Counts runs of same-sign residuals.
///
/// The scan is strictly sequential: a new run starts whenever an element's
/// sign differs from the previous element's. The first element always opens
/// a run.
pub fn count_runs(residuals: &[f64]) -> Result<RunStatistics> {
    if residuals.is_empty() {
        return Err(RunTestError::invalid(
            "empty residual sequence has no run count",
            0,
            0,
            0,
        ));
    }

    let steps = trace_runs(residuals);
    let na = steps.iter().filter(|s| s.sign == Sign::Positive).count();
    let runs = steps.last().map_or(0, |step| step.runs);

    let n = residuals.len();
    Ok(RunStatistics {
        n,
        na,
        nb: n - na,
        runs,
    })
}

/// Scans the residuals in order, recording the running run count per element.
pub fn trace_runs(residuals: &[f64]) -> Vec<RunStep> {
    let mut previous: Option<Sign> = None;
    let mut runs = 0;

    residuals
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let sign = Sign::of(value);
            if previous != Some(sign) {
                runs += 1;
                previous = Some(sign);
            }
            RunStep {
                index,
                value,
                sign,
                runs,
            }
        })
        .collect()
}
