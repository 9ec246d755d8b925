//! Regulator configurations.
//!
//! Each supported part is a named [`RegulatorConfig`] value rather than a
//! separate code path: the optimizer only sees the formula and the
//! multiplier set.
//!
//! | Part | Formula | Multipliers | Resistor range |
//! |------|---------|-------------|----------------|
//! | LM317 | `1.25 * (1 + R2/R1)` | 100 | 100 Ohm to 976 Ohm |
//! | LTC4020 | `2.5 * (1 + RFB1/RFB2)` | 1, 10, 100 | 1 Ohm to 976 Ohm |

mod formula;

pub use formula::DividerFormula;

use std::borrow::Cow;
use std::fmt;

use crate::error::{DividerError, Result};
use crate::optimizer::{find_best_combinations, Candidate};
use crate::series::{validate_positive, ResistorSeries};

/// Display names of the two divider resistors.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistorLabels {
    pub r1: Cow<'static, str>,
    pub r2: Cow<'static, str>,
}

impl ResistorLabels {
    /// Labels `R1` and `R2`.
    pub const PLAIN: ResistorLabels = ResistorLabels {
        r1: Cow::Borrowed("R1"),
        r2: Cow::Borrowed("R2"),
    };

    /// Labels `RFB1` and `RFB2` for feedback dividers.
    pub const FEEDBACK: ResistorLabels = ResistorLabels {
        r1: Cow::Borrowed("RFB1"),
        r2: Cow::Borrowed("RFB2"),
    };
}

impl Default for ResistorLabels {
    fn default() -> Self {
        Self::PLAIN
    }
}

/// Everything the optimizer needs to know about one regulator part.
#[derive(Debug, Clone, PartialEq)]
pub struct RegulatorConfig {
    name: Cow<'static, str>,
    formula: DividerFormula,
    multipliers: Cow<'static, [f64]>,
    labels: ResistorLabels,
}

/// LM317 adjustable linear regulator.
///
/// The adjust pin current limits practical resistors to the 100 Ohm decade.
pub static LM317: RegulatorConfig = RegulatorConfig {
    name: Cow::Borrowed("LM317"),
    formula: DividerFormula::R2OverR1 { vref: 1.25 },
    multipliers: Cow::Borrowed(&[100.0]),
    labels: ResistorLabels::PLAIN,
};

/// LTC4020 buck-boost charge controller feedback divider.
pub static LTC4020: RegulatorConfig = RegulatorConfig {
    name: Cow::Borrowed("LTC4020"),
    formula: DividerFormula::R1OverR2 { vref: 2.5 },
    multipliers: Cow::Borrowed(&[1.0, 10.0, 100.0]),
    labels: ResistorLabels::FEEDBACK,
};

/// All built-in regulator presets.
pub static PRESETS: [&RegulatorConfig; 2] = [&LM317, &LTC4020];

impl RegulatorConfig {
    /// Create a custom regulator configuration.
    pub fn new(
        name: impl Into<String>,
        formula: DividerFormula,
        multipliers: Vec<f64>,
        labels: ResistorLabels,
    ) -> Result<Self> {
        validate_positive("multipliers", &multipliers)?;
        if !formula.vref().is_finite() {
            return Err(DividerError::invalid_configuration(format!(
                "reference voltage {} is not finite",
                formula.vref()
            )));
        }

        Ok(Self {
            name: Cow::Owned(name.into()),
            formula,
            multipliers: Cow::Owned(multipliers),
            labels,
        })
    }

    /// Look up a built-in preset by part name (case-insensitive).
    pub fn by_name(name: &str) -> Result<&'static RegulatorConfig> {
        PRESETS
            .iter()
            .copied()
            .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| DividerError::UnknownRegulator {
                name: name.to_string(),
            })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn formula(&self) -> DividerFormula {
        self.formula
    }

    pub fn multipliers(&self) -> &[f64] {
        &self.multipliers
    }

    pub fn labels(&self) -> &ResistorLabels {
        &self.labels
    }

    /// Output voltage of this regulator for a resistor pair.
    pub fn voltage(&self, r1: f64, r2: f64) -> Result<f64> {
        self.formula.evaluate(r1, r2)
    }

    /// Rank resistor pairs from `series` for `desired_voltage`.
    ///
    /// See [`find_best_combinations`] for the search rules.
    pub fn find_best(
        &self,
        desired_voltage: f64,
        series: &ResistorSeries,
        top_n: usize,
    ) -> Result<Vec<Candidate>> {
        tracing::debug!(
            regulator = %self.name,
            series = series.name(),
            formula = %self.formula,
            "searching divider pairs"
        );
        find_best_combinations(
            desired_voltage,
            series.values(),
            &self.multipliers,
            |r1, r2| self.formula.evaluate(r1, r2),
            top_n,
        )
    }
}

impl fmt::Display for RegulatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Vout = {})", self.name, self.formula)
    }
}
