//! Output voltage formulas for adjustable regulators.

use std::fmt;

use crate::error::{DividerError, Result};

/// Relation between the two divider resistors and the regulated output.
///
/// Argument order matters: `R1` and `R2` are named after the datasheet of
/// the part using the formula, and the two variants are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DividerFormula {
    /// `Vout = vref * (1 + R2 / R1)`
    ///
    /// R1 sits between the output and the adjust pin, R2 between the
    /// adjust pin and ground (LM317 family).
    R2OverR1 { vref: f64 },
    /// `Vout = vref * (1 + R1 / R2)`
    ///
    /// R1 is the upper feedback resistor, R2 the lower one (LTC4020 family).
    R1OverR2 { vref: f64 },
}

impl DividerFormula {
    /// Reference voltage of the regulator.
    pub fn vref(&self) -> f64 {
        match *self {
            DividerFormula::R2OverR1 { vref } | DividerFormula::R1OverR2 { vref } => vref,
        }
    }

    /// Output voltage for the given pair of resistances.
    pub fn evaluate(&self, r1: f64, r2: f64) -> Result<f64> {
        let (num, den) = match *self {
            DividerFormula::R2OverR1 { .. } => (r2, r1),
            DividerFormula::R1OverR2 { .. } => (r1, r2),
        };

        if den == 0.0 {
            return Err(DividerError::DivisionByZero { r1, r2 });
        }

        Ok(self.vref() * (1.0 + num / den))
    }
}

impl fmt::Display for DividerFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DividerFormula::R2OverR1 { vref } => write!(f, "{vref} * (1 + R2/R1)"),
            DividerFormula::R1OverR2 { vref } => write!(f, "{vref} * (1 + R1/R2)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_r2_over_r1() {
        let f = DividerFormula::R2OverR1 { vref: 1.25 };
        assert_relative_eq!(f.evaluate(100.0, 200.0).unwrap(), 3.75);
        assert_relative_eq!(f.evaluate(200.0, 100.0).unwrap(), 1.875);
    }

    #[test]
    fn test_r1_over_r2() {
        let f = DividerFormula::R1OverR2 { vref: 2.5 };
        assert_relative_eq!(f.evaluate(300.0, 100.0).unwrap(), 10.0);
    }

    #[test]
    fn test_zero_denominator() {
        let f = DividerFormula::R2OverR1 { vref: 1.25 };
        assert!(matches!(
            f.evaluate(0.0, 100.0),
            Err(DividerError::DivisionByZero { .. })
        ));
        // Zero numerator is fine: output equals the reference
        assert_relative_eq!(f.evaluate(100.0, 0.0).unwrap(), 1.25);
    }

    #[test]
    fn test_display() {
        let f = DividerFormula::R1OverR2 { vref: 2.5 };
        assert_eq!(f.to_string(), "2.5 * (1 + R1/R2)");
    }
}
