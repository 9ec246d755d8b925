//! Desired voltage input.

use std::io::BufRead;

use crate::error::{DividerError, Result};

/// Parse a desired output voltage in volts.
///
/// Surrounding whitespace is ignored. Anything that is not a finite number
/// is rejected.
pub fn parse_voltage(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|e| DividerError::invalid_voltage(trimmed, format!("{e}")))?;

    if !value.is_finite() {
        return Err(DividerError::invalid_voltage(
            trimmed,
            "voltage must be a finite number",
        ));
    }

    Ok(value)
}

/// Read one line from `reader` and parse it as a voltage.
pub fn read_voltage<R: BufRead>(reader: &mut R) -> Result<f64> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|source| DividerError::InputReadError { source })?;
    parse_voltage(&line)
}
