//! Pair enumeration and ranking.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{DividerError, Result};
use crate::series::{expand, validate_positive};

use super::candidate::{rounded_ratio, Candidate};

/// Find the resistor pairs whose output is closest to `desired_voltage`.
///
/// Every ordered pair `(r1, r2)` of the expanded set (see
/// [`crate::series::expand`]) with `r1 != r2` is visited R1-major. Pairs are
/// deduplicated by `r1 / r2` rounded to [`crate::RATIO_DECIMALS`] places:
/// the first pair reaching a ratio is kept, later pairs with the same ratio
/// are skipped. Survivors are stably sorted by absolute error and the first
/// `top_n` are returned.
///
/// # Arguments
/// * `desired_voltage` - Target output voltage in volts
/// * `series` - Decade mantissas, e.g. [`crate::series::E24`]`.values()`
/// * `multipliers` - Decade scale factors applied to every mantissa
/// * `voltage_fn` - Output voltage for `(r1, r2)`
/// * `top_n` - Maximum number of candidates to return
///
/// # Errors
/// Fails before any evaluation when `desired_voltage` is not finite, when
/// `series` or `multipliers` is empty or holds a non-positive value, or when
/// `top_n` is zero. Errors from `voltage_fn` and non-finite voltages abort
/// the search.
///
/// # Example
/// ```
/// use divider_core::optimizer::find_best_combinations;
///
/// let best = find_best_combinations(
///     3.75,
///     &[1.0, 2.0],
///     &[100.0],
///     |r1, r2| Ok(1.25 * (1.0 + r2 / r1)),
///     20,
/// )
/// .unwrap();
///
/// assert_eq!((best[0].r1, best[0].r2), (100.0, 200.0));
/// ```
pub fn find_best_combinations<F>(
    desired_voltage: f64,
    series: &[f64],
    multipliers: &[f64],
    voltage_fn: F,
    top_n: usize,
) -> Result<Vec<Candidate>>
where
    F: Fn(f64, f64) -> Result<f64>,
{
    if !desired_voltage.is_finite() {
        return Err(DividerError::invalid_voltage(
            desired_voltage.to_string(),
            "desired voltage must be a finite number",
        ));
    }
    validate_positive("series", series)?;
    validate_positive("multipliers", multipliers)?;
    if top_n == 0 {
        return Err(DividerError::invalid_configuration(
            "result count must be at least 1",
        ));
    }

    let resistors = expand(series, multipliers);
    debug!(
        expanded = resistors.len(),
        pairs = resistors.len() * resistors.len(),
        "expanded resistor set"
    );

    let mut seen_ratios = HashSet::new();
    let mut candidates = Vec::new();

    for &r1 in &resistors {
        for &r2 in &resistors {
            if r1 == r2 {
                continue;
            }

            let ratio = rounded_ratio(r1, r2);
            if !seen_ratios.insert(ratio.to_bits()) {
                continue;
            }

            let voltage = voltage_fn(r1, r2)?;
            if !voltage.is_finite() {
                return Err(DividerError::NonFiniteVoltage { r1, r2, voltage });
            }

            candidates.push(Candidate::new(r1, r2, ratio, voltage, desired_voltage));
        }
    }

    // Stable: equal errors keep enumeration order
    candidates.sort_by(|a, b| a.error.total_cmp(&b.error));
    debug!(
        distinct_ratios = candidates.len(),
        best_error = candidates.first().map(|c| c.error),
        "ranked divider candidates"
    );

    candidates.truncate(top_n);
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regulator::LTC4020;
    use crate::series::E96;
    use approx::assert_abs_diff_eq;

    fn lm317(r1: f64, r2: f64) -> Result<f64> {
        Ok(1.25 * (1.0 + r2 / r1))
    }

    fn ltc4020(r1: f64, r2: f64) -> Result<f64> {
        Ok(2.5 * (1.0 + r1 / r2))
    }

    const E12: [f64; 12] = [1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2];

    #[test]
    fn test_exact_match_ranks_first() {
        let results = find_best_combinations(3.75, &[1.0, 2.0], &[100.0], lm317, 20).unwrap();

        assert_eq!(results.len(), 2);
        assert_abs_diff_eq!(results[0].r1, 100.0);
        assert_abs_diff_eq!(results[0].r2, 200.0);
        assert_abs_diff_eq!(results[0].voltage, 3.75, epsilon = 1e-12);
        assert_abs_diff_eq!(results[0].diff, 0.0, epsilon = 1e-12);

        assert_abs_diff_eq!(results[1].r1, 200.0);
        assert_abs_diff_eq!(results[1].r2, 100.0);
        assert_abs_diff_eq!(results[1].voltage, 1.875, epsilon = 1e-12);
        assert_abs_diff_eq!(results[1].error, 1.875, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_series_is_rejected() {
        let err = find_best_combinations(3.3, &[], &[100.0], lm317, 20).unwrap_err();
        assert!(matches!(err, DividerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_empty_multipliers_are_rejected() {
        let err = find_best_combinations(3.3, &E12, &[], lm317, 20).unwrap_err();
        assert!(matches!(err, DividerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_zero_top_n_is_rejected() {
        let err = find_best_combinations(3.3, &E12, &[100.0], lm317, 0).unwrap_err();
        assert!(matches!(err, DividerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_non_finite_voltage_is_rejected() {
        for desired in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = find_best_combinations(desired, &E12, &[100.0], lm317, 20).unwrap_err();
            assert!(matches!(err, DividerError::InvalidVoltage { .. }));
        }
    }

    #[test]
    fn test_formula_error_propagates() {
        let err = find_best_combinations(
            3.3,
            &E12,
            &[100.0],
            |r1, r2| Err(DividerError::DivisionByZero { r1, r2 }),
            20,
        )
        .unwrap_err();
        assert!(matches!(err, DividerError::DivisionByZero { .. }));
    }

    #[test]
    fn test_non_finite_formula_output_is_rejected() {
        let err = find_best_combinations(3.3, &E12, &[100.0], |_, _| Ok(f64::NAN), 20).unwrap_err();
        assert!(matches!(err, DividerError::NonFiniteVoltage { .. }));
    }

    #[test]
    fn test_single_resistor_yields_no_pairs() {
        let results = find_best_combinations(3.3, &[4.7], &[100.0], lm317, 20).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_unreachable_voltage_still_ranks() {
        let results = find_best_combinations(1000.0, &E12, &[100.0], lm317, 20).unwrap();

        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|c| c.error > 900.0));
        assert!(results.windows(2).all(|w| w[0].error <= w[1].error));
        // Largest reachable output is 1.25 * (1 + 8.2 / 1.0)
        assert_abs_diff_eq!(results[0].r1, 100.0);
        assert_abs_diff_eq!(results[0].r2, 820.0, epsilon = 1e-9);
    }

    #[test]
    fn test_equal_ratios_keep_first_pair() {
        // (100, 200) and (200, 400) share ratio 0.5, likewise 2.0
        let results = find_best_combinations(3.75, &[1.0, 2.0, 4.0], &[100.0], lm317, 20).unwrap();

        let halves: Vec<_> = results.iter().filter(|c| c.ratio == 0.5).collect();
        assert_eq!(halves.len(), 1);
        assert_abs_diff_eq!(halves[0].r1, 100.0);
        assert_abs_diff_eq!(halves[0].r2, 200.0);

        let doubles: Vec<_> = results.iter().filter(|c| c.ratio == 2.0).collect();
        assert_eq!(doubles.len(), 1);
        assert_abs_diff_eq!(doubles[0].r1, 200.0);
        assert_abs_diff_eq!(doubles[0].r2, 100.0);

        // Distinct ratios: 0.25, 0.5, 2.0, 4.0
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn test_overlapping_bands_keep_duplicates() {
        // 1.0 * 100 and 10.0 * 10 both expand to 100 and never pair with each other
        let results =
            find_best_combinations(5.0, &[1.0, 10.0], &[10.0, 100.0], ltc4020, 20).unwrap();

        assert!(results.iter().all(|c| c.r1 != c.r2));
        // Expanded {10, 100, 100, 1000}: ratios 0.1, 0.01, 10, 100
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn test_result_invariants_on_standard_sized_input() {
        let multipliers = [1.0, 10.0, 100.0];
        let results = find_best_combinations(5.0, &E12, &multipliers, ltc4020, 20).unwrap();

        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|c| c.r1 != c.r2));
        assert!(results.windows(2).all(|w| w[0].error <= w[1].error));

        let keys: HashSet<_> = results.iter().map(|c| c.ratio.to_bits()).collect();
        assert_eq!(keys.len(), results.len());

        for c in &results {
            assert_abs_diff_eq!(c.diff.abs(), c.error);
            assert_abs_diff_eq!(c.voltage - 5.0, c.diff, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_length_is_capped_by_distinct_ratios() {
        let all = find_best_combinations(5.0, &E12, &[100.0], ltc4020, usize::MAX).unwrap();
        let capped = find_best_combinations(5.0, &E12, &[100.0], ltc4020, 7).unwrap();

        assert!(all.len() > 7);
        assert!(all.len() <= 12 * 11);
        assert_eq!(capped.len(), 7);
        assert_eq!(&all[..7], &capped[..]);
    }

    #[test]
    fn test_near_half_ratios_stay_distinct() {
        // 3.48 / 76.8 rounds down to 0.045312 while 2.61 / 57.6 rounds up
        // to 0.045313; both pairs hit 2.61328125 V
        let results = LTC4020.find_best(2.61328125, &E96, 3).unwrap();

        assert!(results
            .iter()
            .any(|c| c.r1 == 2.61 && (c.r2 - 57.6).abs() < 1e-9));
        assert!(results
            .iter()
            .any(|c| c.r1 == 3.48 && (c.r2 - 76.8).abs() < 1e-9));
    }

    #[test]
    fn test_deterministic() {
        let first = find_best_combinations(3.3, &E12, &[1.0, 10.0, 100.0], lm317, 20).unwrap();
        let second = find_best_combinations(3.3, &E12, &[1.0, 10.0, 100.0], lm317, 20).unwrap();
        assert_eq!(first, second);
    }
}
