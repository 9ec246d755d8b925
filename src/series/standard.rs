//! IEC 60063 preferred value tables.

use std::borrow::Cow;

use super::ResistorSeries;

const E24_VALUES: [f64; 24] = [
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, //
    2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1, 5.6, 6.2, //
    6.8, 7.5, 8.2, 9.1,
];

const E96_VALUES: [f64; 96] = [
    1.00, 1.02, 1.05, 1.07, 1.10, 1.13, 1.15, 1.18, 1.21, 1.24, //
    1.27, 1.30, 1.33, 1.37, 1.40, 1.43, 1.47, 1.50, 1.54, 1.58, //
    1.62, 1.65, 1.69, 1.74, 1.78, 1.82, 1.87, 1.91, 1.96, 2.00, //
    2.05, 2.10, 2.15, 2.21, 2.26, 2.32, 2.37, 2.43, 2.49, 2.55, //
    2.61, 2.67, 2.74, 2.80, 2.87, 2.94, 3.01, 3.09, 3.16, 3.24, //
    3.32, 3.40, 3.48, 3.57, 3.65, 3.74, 3.83, 3.92, 4.02, 4.12, //
    4.22, 4.32, 4.42, 4.53, 4.64, 4.75, 4.87, 4.99, 5.11, 5.23, //
    5.36, 5.49, 5.62, 5.76, 5.90, 6.04, 6.19, 6.34, 6.49, 6.65, //
    6.81, 6.98, 7.15, 7.32, 7.50, 7.68, 7.87, 8.06, 8.25, 8.45, //
    8.66, 8.87, 9.09, 9.31, 9.53, 9.76,
];

/// E24 series (5% tolerance), 24 values per decade.
pub static E24: ResistorSeries = ResistorSeries {
    name: Cow::Borrowed("E24"),
    values: Cow::Borrowed(&E24_VALUES),
};

/// E96 series (1% tolerance), 96 values per decade.
pub static E96: ResistorSeries = ResistorSeries {
    name: Cow::Borrowed("E96"),
    values: Cow::Borrowed(&E96_VALUES),
};

/// All standard series, in the order reports list them.
pub static STANDARD_SERIES: [&ResistorSeries; 2] = [&E24, &E96];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_sizes() {
        assert_eq!(E24.len(), 24);
        assert_eq!(E96.len(), 96);
    }

    #[test]
    fn test_series_strictly_increasing_within_decade() {
        for series in STANDARD_SERIES {
            let values = series.values();
            assert_eq!(values[0], 1.0);
            assert!(values.windows(2).all(|w| w[0] < w[1]), "{} not sorted", series.name());
            assert!(*values.last().unwrap() < 10.0);
        }
    }
}
