//! Residual file loading.
//!
//! Reads the first numeric column of a whitespace- or comma-delimited text
//! file. Blank lines and `#` comments are skipped.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::error::{Result, RunTestError};

/// Parses residuals from file content, one per data line.
pub fn load_residuals(content: &str) -> Result<Vec<f64>> {
    let mut residuals = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let field = trimmed
            .split(|c: char| c.is_whitespace() || c == ',')
            .find(|f| !f.is_empty())
            .unwrap_or(trimmed);

        let value = field
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| RunTestError::Parse {
                line: idx + 1,
                content: trimmed.to_string(),
            })?;
        residuals.push(value);
    }

    if residuals.is_empty() {
        return Err(RunTestError::EmptyInput);
    }

    Ok(residuals)
}

/// Reads and parses a residual file.
pub fn read_residuals(path: &Path) -> anyhow::Result<Vec<f64>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read residual file: {}", path.display()))?;
    let residuals = load_residuals(&content)
        .with_context(|| format!("Failed to parse residual file: {}", path.display()))?;
    Ok(residuals)
}
