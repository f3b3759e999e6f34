//! Text report for a run-test evaluation.
//!
//! Output grows with the verbosity level: raw residuals, then each scan
//! step, then each term of the p-value sum.

use std::fmt::Write;

use colored::Colorize;

use crate::runs::trace_runs;
use crate::types::{PValueResult, RunTestReport, Verbosity};

const VALUES_PER_ROW: usize = 8;

/// Builds the full report text for `report`, computed from `residuals`.
pub fn render_report(residuals: &[f64], report: &RunTestReport, verbosity: Verbosity) -> String {
    let mut out = String::new();

    if verbosity >= Verbosity::Data {
        render_residuals(&mut out, residuals);
    }
    if verbosity >= Verbosity::Steps {
        render_steps(&mut out, residuals);
    }

    let stats = &report.statistics;
    let moments = &report.moments;
    let _ = writeln!(out, "{} {}", label("Nbins"), stats.n);
    let _ = writeln!(out, "{} {}", label("npos"), stats.na);
    let _ = writeln!(out, "{} {}", label("number of runs, r"), stats.runs);
    let _ = writeln!(out, "{} {}", label("E(r)"), moments.expected);
    let _ = writeln!(
        out,
        "{} {}, sd(r) : {}",
        label("V(r)"),
        moments.variance,
        moments.sd
    );

    if verbosity >= Verbosity::Terms {
        render_terms(&mut out, &report.p_value);
    }

    let _ = writeln!(out, "{}", p_value_line(&report.p_value));
    out
}

/// Prints the report to stdout, with a note on stderr for single-sign input.
pub fn print_report(residuals: &[f64], report: &RunTestReport, verbosity: Verbosity) {
    let stats = &report.statistics;
    if stats.na == 0 || stats.nb == 0 {
        eprintln!(
            "{} all {} residuals share one sign; the run-test p-value is degenerate",
            "note:".yellow(),
            stats.n
        );
    }
    print!("{}", render_report(residuals, report, verbosity));
}

/// The closing verdict line, with the p-value as a percentage.
pub fn p_value_line(result: &PValueResult) -> String {
    format!(
        "{} {} is {}",
        "Run test p-value for robs <=".bold(),
        result.observed_runs,
        format!("{}(%)", result.percent()).green()
    )
}

fn label(name: &str) -> String {
    format!("{name:<26}:").cyan().to_string()
}

fn render_residuals(out: &mut String, residuals: &[f64]) {
    let _ = writeln!(out, "{}", "Residuals".bold());
    for row in residuals.chunks(VALUES_PER_ROW) {
        let line: Vec<String> = row.iter().map(|v| format!("{v:>10.4}")).collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }
}

fn render_steps(out: &mut String, residuals: &[f64]) {
    let _ = writeln!(out, "{}", "Run count".bold());
    for step in trace_runs(residuals) {
        let _ = writeln!(
            out,
            "{:>6} {:>12.6} {} {:>6}",
            step.index, step.value, step.sign, step.runs
        );
    }
}

fn render_terms(out: &mut String, result: &PValueResult) {
    for term in &result.terms {
        let _ = writeln!(
            out,
            "{}: i,s,p = {} {} {}",
            term.parity, term.runs, term.s, term.probability
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::run_test;

    const RESIDUALS: [f64; 5] = [1.0, 2.0, -1.0, -3.0, 0.5];

    #[test]
    fn test_quiet_report() {
        let report = run_test(&RESIDUALS).unwrap();
        let text = render_report(&RESIDUALS, &report, Verbosity::Quiet);

        assert!(text.contains("Nbins"));
        assert!(text.contains("number of runs, r"));
        assert!(text.contains("3.4"));
        assert!(text.contains("50(%)"));
        assert!(!text.contains("Residuals"));
        assert!(!text.contains("i,s,p"));
    }

    #[test]
    fn test_levels_are_cumulative() {
        let report = run_test(&RESIDUALS).unwrap();
        let data = render_report(&RESIDUALS, &report, Verbosity::Data);
        let steps = render_report(&RESIDUALS, &report, Verbosity::Steps);
        let terms = render_report(&RESIDUALS, &report, Verbosity::Terms);

        assert!(data.contains("Residuals"));
        assert!(!data.contains("Run count"));
        assert!(steps.contains("Residuals") && steps.contains("Run count"));
        assert!(!steps.contains("i,s,p"));
        assert!(terms.contains("Run count"));
        // One line per term, i = 0..=3.
        assert_eq!(terms.matches("i,s,p").count(), 4);
    }

    #[test]
    fn test_p_value_line() {
        let report = run_test(&RESIDUALS).unwrap();
        let line = p_value_line(&report.p_value);
        assert!(line.contains("Run test p-value for robs <="));
        assert!(line.contains(" 3 "));
    }

    #[test]
    fn test_single_sign_report_shows_zero() {
        let residuals = [0.4, 1.1, 2.0];
        let report = run_test(&residuals).unwrap();
        let text = render_report(&residuals, &report, Verbosity::Quiet);
        assert!(text.contains(" 1 is "));
        assert!(text.contains("0(%)"));
    }
}
