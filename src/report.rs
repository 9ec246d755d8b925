//! Text reports of ranked resistor pairs.
//!
//! Output format, one section per series:
//!
//! ```text
//! Top 10 unique resistor combinations from expanded E24 series:
//! R1: 240.00 Ohm, R2: 390.00 Ohm, Voltage: 3.2813 V, Diff: -0.0187 V
//! ...
//! ```

use std::io::Write;

use crate::error::{DividerError, Result};
use crate::optimizer::{Candidate, SearchConfig};
use crate::regulator::{RegulatorConfig, ResistorLabels};
use crate::series::ResistorSeries;

/// Format one candidate using the regulator's resistor labels.
pub fn format_candidate(candidate: &Candidate, labels: &ResistorLabels) -> String {
    format!(
        "{}: {:.2} Ohm, {}: {:.2} Ohm, Voltage: {:.4} V, Diff: {:.4} V",
        labels.r1, candidate.r1, labels.r2, candidate.r2, candidate.voltage, candidate.diff
    )
}

/// Format a section header followed by at most `display_count` candidates.
///
/// `candidates` is expected to be ranked already; it is only truncated here.
pub fn format_section(
    series_name: &str,
    candidates: &[Candidate],
    labels: &ResistorLabels,
    display_count: usize,
) -> String {
    let shown = &candidates[..candidates.len().min(display_count)];

    let mut out = format!(
        "Top {} unique resistor combinations from expanded {} series:\n",
        shown.len(),
        series_name
    );
    for candidate in shown {
        out.push_str(&format_candidate(candidate, labels));
        out.push('\n');
    }
    out
}

/// Search one series and format its section.
///
/// The search keeps `config.top_n` candidates and the section shows at most
/// `config.display_count` of them.
pub fn search_section(
    regulator: &RegulatorConfig,
    series: &ResistorSeries,
    desired_voltage: f64,
    config: &SearchConfig,
) -> Result<String> {
    let candidates = regulator.find_best(desired_voltage, series, config.top_n)?;
    Ok(format_section(
        series.name(),
        &candidates,
        regulator.labels(),
        config.display_count,
    ))
}

/// Search every series in turn and write one section per series.
///
/// Sections are separated by a blank line. A search error stops the report
/// before anything for that series is written.
pub fn write_report<W: Write>(
    out: &mut W,
    regulator: &RegulatorConfig,
    series: &[&ResistorSeries],
    desired_voltage: f64,
    config: &SearchConfig,
) -> Result<()> {
    for (i, s) in series.iter().enumerate() {
        let section = search_section(regulator, s, desired_voltage, config)?;

        if i > 0 {
            writeln!(out).map_err(|source| DividerError::OutputWriteError { source })?;
        }
        out.write_all(section.as_bytes())
            .map_err(|source| DividerError::OutputWriteError { source })?;
    }

    out.flush()
        .map_err(|source| DividerError::OutputWriteError { source })
}
