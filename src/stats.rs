//! Run-count moments and the exact run-test p-value.
//!
//! Under the null hypothesis that the `na` positive and `nb` non-positive
//! signs are randomly ordered, the run count has a closed-form mass
//! function built from binomial coefficients. Summing it up to the observed
//! run count gives the exact cumulative p-value.

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Result, RunTestError};
use crate::exact::{binomial, ratio_to_f64};
use crate::runs::count_runs;
use crate::types::{MomentSummary, PValueResult, PValueTerm, Parity, RunTestReport, Sign};

/// Computes E(r), V(r) and sd(r) for a sequence of `n` signs, `na` positive.
pub fn compute_moments(n: usize, na: usize) -> Result<MomentSummary> {
    if na > n {
        return Err(RunTestError::invalid("NA exceeds N", n, na, 0));
    }
    if n < 2 {
        return Err(RunTestError::DivisionByZero { n });
    }

    let n_f = n as f64;
    let product = na as f64 * (n - na) as f64;

    let expected = 1.0 + 2.0 * product / n_f;
    let variance = 2.0 * product * (2.0 * product - n_f) / (n_f * n_f * (n_f - 1.0));

    Ok(MomentSummary {
        expected,
        variance,
        sd: checked_sd(variance, n, na)?,
    })
}

/// Square root of a variance that must not be negative.
///
/// With `0 <= na <= n` and `n >= 2`, `2·na·nb >= n` whenever both counts are
/// non-zero, so this only fails on inconsistent counts.
fn checked_sd(variance: f64, n: usize, na: usize) -> Result<f64> {
    if variance < 0.0 {
        return Err(RunTestError::NumericConsistency { variance, n, na });
    }
    Ok(variance.sqrt())
}

/// Computes the moments and P(runs <= r) for `n` signs, `na` of them positive.
///
/// Requires `0 <= na <= n`, `1 <= r <= n` and `n >= 2`.
pub fn compute_p_value(n: usize, na: usize, r: usize) -> Result<(MomentSummary, PValueResult)> {
    if na > n {
        return Err(RunTestError::invalid("NA exceeds N", n, na, r));
    }
    if r < 1 || r > n {
        return Err(RunTestError::invalid("run count outside 1..=N", n, na, r));
    }
    let moments = compute_moments(n, na)?;

    Ok((moments, exact_result(n, na, r)))
}

/// Counts runs in `residuals` and evaluates the run test on them.
pub fn run_test(residuals: &[f64]) -> Result<RunTestReport> {
    if residuals.len() < 2 {
        return Err(RunTestError::invalid(
            "run test needs at least two residuals",
            residuals.len(),
            residuals.iter().filter(|&&v| Sign::of(v) == Sign::Positive).count(),
            0,
        ));
    }

    let statistics = count_runs(residuals)?;
    let (moments, p_value) = compute_p_value(statistics.n, statistics.na, statistics.runs)?;

    Ok(RunTestReport {
        statistics,
        moments,
        p_value,
    })
}

const fn half_index(i: usize) -> (usize, Parity) {
    if i % 2 == 0 {
        (i / 2, Parity::Even)
    } else {
        ((i + 1) / 2, Parity::Odd)
    }
}

/// Numerator of P(runs == i) over the common denominator C(N, NA).
fn term_numerator(na: i64, nb: i64, s: i64, parity: Parity) -> BigUint {
    match parity {
        Parity::Even => binomial(na - 1, s - 1) * binomial(nb - 1, s - 1) * 2u32,
        Parity::Odd => {
            binomial(na - 1, s - 2) * binomial(nb - 1, s - 1)
                + binomial(na - 1, s - 1) * binomial(nb - 1, s - 2)
        }
    }
}

fn exact_result(n: usize, na: usize, r: usize) -> PValueResult {
    let denom = binomial(n as i64, na as i64);
    let (na_i, nb_i) = (na as i64, (n - na) as i64);

    let mut total = BigUint::zero();
    let mut terms = Vec::with_capacity(r + 1);

    for i in 0..=r {
        let (s, parity) = half_index(i);
        let numerator = term_numerator(na_i, nb_i, s as i64, parity);
        terms.push(PValueTerm {
            runs: i,
            s,
            parity,
            probability: ratio_to_f64(&numerator, &denom),
        });
        total += numerator;
    }

    PValueResult {
        observed_runs: r,
        p_value: ratio_to_f64(&total, &denom),
        terms,
    }
}
