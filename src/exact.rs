//! Exact integer helpers.
//!
//! Binomial coefficients for run counts in the hundreds overflow `f64` (and
//! lose precision well before that), so they are kept as unbounded integers
//! and only the final ratio is converted to floating point.

#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// Exact binomial coefficient C(n, k).
///
/// Vanishes outside `0 <= k <= n`, including for negative `n`.
pub fn binomial(n: i64, k: i64) -> BigUint {
    if n < 0 || k < 0 || k > n {
        return BigUint::zero();
    }

    let k = k.min(n - k);
    let mut acc = BigUint::one();
    for i in 0..k {
        // acc == C(n, i) here, so the division is exact.
        acc *= (n - i).unsigned_abs();
        acc /= (i + 1).unsigned_abs();
    }
    acc
}

/// Converts `num / den` to the nearest representable `f64`.
///
/// Works when both operands are far beyond `f64` range by aligning their bit
/// lengths first and dividing as integers with 64 bits to spare.
pub fn ratio_to_f64(num: &BigUint, den: &BigUint) -> f64 {
    if den.is_zero() {
        return f64::NAN;
    }
    if num.is_zero() {
        return 0.0;
    }

    let shift = den.bits() as i64 - num.bits() as i64 + 64;
    if shift >= 0 {
        let quotient = (num << shift.unsigned_abs()) / den;
        quotient.to_f64().unwrap_or(f64::INFINITY) * (-(shift as f64)).exp2()
    } else {
        let quotient = num / (den << shift.unsigned_abs());
        quotient.to_f64().unwrap_or(f64::INFINITY) * (shift.unsigned_abs() as f64).exp2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_binomial_small() {
        assert_eq!(binomial(5, 2), BigUint::from(10u32));
        assert_eq!(binomial(10, 0), BigUint::one());
        assert_eq!(binomial(10, 10), BigUint::one());
        assert_eq!(binomial(0, 0), BigUint::one());
    }

    #[test]
    fn test_binomial_out_of_range_vanishes() {
        assert!(binomial(5, -1).is_zero());
        assert!(binomial(5, 6).is_zero());
        assert!(binomial(-1, -1).is_zero());
        assert!(binomial(-1, 0).is_zero());
    }

    #[test]
    fn test_binomial_large_is_exact() {
        // C(100, 50) = 100891344545564193334812497256
        let expected: BigUint = "100891344545564193334812497256".parse().unwrap();
        assert_eq!(binomial(100, 50), expected);
    }

    #[test]
    fn test_binomial_symmetry() {
        assert_eq!(binomial(300, 120), binomial(300, 180));
    }

    #[test]
    fn test_ratio_simple() {
        let r = ratio_to_f64(&BigUint::from(1u32), &BigUint::from(3u32));
        assert_relative_eq!(r, 1.0 / 3.0, max_relative = 1e-15);
    }

    #[test]
    fn test_ratio_beyond_f64_range() {
        // Both operands exceed f64::MAX; their ratio is 1/2.
        let den = binomial(2000, 1000);
        assert!(!den.to_f64().is_some_and(f64::is_finite));
        let num = &den / 2u32;
        assert_relative_eq!(ratio_to_f64(&num, &den), 0.5, max_relative = 1e-15);
    }

    #[test]
    fn test_ratio_greater_than_one() {
        let r = ratio_to_f64(&BigUint::from(7u32), &BigUint::from(2u32));
        assert_relative_eq!(r, 3.5, max_relative = 1e-15);
    }

    #[test]
    fn test_ratio_edge_cases() {
        assert!(ratio_to_f64(&BigUint::one(), &BigUint::zero()).is_nan());
        assert!(ratio_to_f64(&BigUint::zero(), &BigUint::one()).abs() < f64::EPSILON);
    }
}
