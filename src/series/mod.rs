//! Standard resistor value series.
//!
//! A series holds the mantissas of one decade (1.0 up to, but excluding,
//! 10.0). Absolute resistances are formed by multiplying each mantissa by a
//! decade multiplier, see [`expand`].
//!
//! # Example
//!
//! ```
//! use divider_core::series::{expand, ResistorSeries};
//!
//! let series = ResistorSeries::new("E3", vec![1.0, 2.2, 4.7]).unwrap();
//! let values = expand(series.values(), &[10.0, 100.0]);
//! assert_eq!(values.len(), 6);
//! ```

mod standard;

pub use standard::{E24, E96, STANDARD_SERIES};

use std::borrow::Cow;

use crate::error::{DividerError, Result};

/// An ordered, immutable set of decade mantissas.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistorSeries {
    name: Cow<'static, str>,
    values: Cow<'static, [f64]>,
}

impl ResistorSeries {
    /// Create a custom series.
    ///
    /// Fails when `values` is empty or contains a value that is not a
    /// finite positive number.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        validate_positive("series", &values)?;
        Ok(Self {
            name: Cow::Owned(name.into()),
            values: Cow::Owned(values),
        })
    }

    /// Look up a standard series by name (case-insensitive).
    pub fn by_name(name: &str) -> Result<&'static ResistorSeries> {
        STANDARD_SERIES
            .iter()
            .copied()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| DividerError::UnknownSeries {
                name: name.to_string(),
            })
    }

    /// Series name, e.g. `"E24"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mantissa values in series order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Expand mantissas into absolute resistances.
///
/// The result is multiplier-major: all of `series` scaled by the first
/// multiplier, then all of `series` scaled by the second, and so on.
/// Values that coincide across overlapping bands are kept.
pub fn expand(series: &[f64], multipliers: &[f64]) -> Vec<f64> {
    multipliers
        .iter()
        .flat_map(|m| series.iter().map(move |v| v * m))
        .collect()
}

/// Check that `values` is non-empty and holds only finite positive numbers.
pub(crate) fn validate_positive(what: &str, values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(DividerError::invalid_configuration(format!("{what} is empty")));
    }

    if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v <= 0.0) {
        return Err(DividerError::invalid_configuration(format!(
            "{what} contains non-positive value {bad}"
        )));
    }

    Ok(())
}
