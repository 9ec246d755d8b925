//! Scored resistor pair.

use std::fmt;

use crate::RATIO_DECIMALS;

/// One resistor pair scored against the desired output voltage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// First resistance in ohms
    pub r1: f64,
    /// Second resistance in ohms
    pub r2: f64,
    /// `r1 / r2` rounded to [`RATIO_DECIMALS`] places
    pub ratio: f64,
    /// Output voltage produced by the pair
    pub voltage: f64,
    /// `|voltage - desired|`
    pub error: f64,
    /// `voltage - desired`, positive when the pair overshoots
    pub diff: f64,
}

impl Candidate {
    pub(crate) fn new(r1: f64, r2: f64, ratio: f64, voltage: f64, desired: f64) -> Self {
        let diff = voltage - desired;
        Self {
            r1,
            r2,
            ratio,
            voltage,
            error: diff.abs(),
            diff,
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R1: {:.2} Ohm, R2: {:.2} Ohm, Voltage: {:.4} V, Diff: {:.4} V",
            self.r1, self.r2, self.voltage, self.diff
        )
    }
}

/// `r1 / r2` rounded to [`RATIO_DECIMALS`] places, used to detect
/// equivalent dividers.
///
/// The exact binary quotient is rounded through its decimal expansion, so a
/// quotient just below a half-way point rounds down even when scaling it by
/// `1e6` would land exactly on the half. Ratios that are mathematically
/// equal but differ past that precision after division still collapse;
/// ratios that differ only past it are treated as the same divider.
pub(crate) fn rounded_ratio(r1: f64, r2: f64) -> f64 {
    let ratio = r1 / r2;
    format!("{:.*}", RATIO_DECIMALS, ratio)
        .parse()
        .unwrap_or(ratio)
}
