//! Common types for runs-test.
//!
//! Defines the run statistics, moment summary and p-value results produced
//! by the run test, plus the verbosity levels used when reporting them.

use std::fmt;

/// Sign class of a single residual.
///
/// Only strictly positive values are `Positive`; zero falls on the
/// `Negative` side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Classifies a residual.
    #[inline]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Positive => '+',
            Self::Negative => '-',
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Counts gathered in one pass over the residuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatistics {
    /// Sequence length.
    pub n: usize,
    /// Number of positive residuals.
    pub na: usize,
    /// Number of non-positive residuals (`n - na`).
    pub nb: usize,
    /// Observed number of runs.
    pub runs: usize,
}

/// Mean, variance and standard deviation of the run count under random ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentSummary {
    pub expected: f64,
    pub variance: f64,
    pub sd: f64,
}

/// Which branch of the mass function produced a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Even => f.write_str("Even"),
            Self::Odd => f.write_str("Odd "),
        }
    }
}

/// Probability of observing exactly `runs` runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PValueTerm {
    /// Run count this term belongs to (the summation index `i`).
    pub runs: usize,
    /// Half-index `s` used in the binomial arguments.
    pub s: usize,
    pub parity: Parity,
    pub probability: f64,
}

/// Cumulative probability of observing `r` or fewer runs.
#[derive(Debug, Clone, PartialEq)]
pub struct PValueResult {
    /// Upper bound on the run count that was summed up to.
    pub observed_runs: usize,
    /// P(runs <= observed_runs), in [0, 1].
    pub p_value: f64,
    /// Per-term breakdown, indexed from zero runs.
    pub terms: Vec<PValueTerm>,
}

impl PValueResult {
    /// The p-value as a percentage.
    pub fn percent(&self) -> f64 {
        100.0 * self.p_value
    }
}

/// One element of the run-counting scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStep {
    pub index: usize,
    pub value: f64,
    pub sign: Sign,
    /// Runs counted so far, including the one this element belongs to.
    pub runs: usize,
}

/// Everything the run test produces for one residual sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct RunTestReport {
    pub statistics: RunStatistics,
    pub moments: MomentSummary,
    pub p_value: PValueResult,
}

/// How much detail the report shows. Each level includes the ones below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Summary statistics only.
    #[default]
    Quiet,
    /// Also the residuals as read.
    Data,
    /// Also each step of the run count.
    Steps,
    /// Also each term of the p-value sum.
    Terms,
}

impl From<u8> for Verbosity {
    fn from(level: u8) -> Self {
        match level {
            0 => Self::Quiet,
            1 => Self::Data,
            2 => Self::Steps,
            _ => Self::Terms,
        }
    }
}

impl From<Verbosity> for u8 {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Quiet => 0,
            Verbosity::Data => 1,
            Verbosity::Steps => 2,
            Verbosity::Terms => 3,
        }
    }
}
