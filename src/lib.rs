//! # Divider Core
//!
//! Resistor divider optimizer for adjustable voltage regulators.
//!
//! This library provides:
//! - Standard E24 and E96 resistor series
//! - Regulator presets (LM317, LTC4020) as plain configuration values
//! - A search that ranks resistor pairs by how close they hit a target voltage
//! - Text reports matching the `divider` CLI output
//!
//! ## Architecture
//!
//! - [`series`] - Resistor value tables and decade expansion
//! - [`regulator`] - Output voltage formulas and regulator presets
//! - [`optimizer`] - Pair enumeration, ratio dedup and ranking
//! - [`report`] - Formatting of ranked pairs
//! - [`input`] - Parsing of the desired voltage
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! divider 3.3 --regulator lm317
//! echo 12 | divider --regulator ltc4020 --series e96
//! ```
//!
//! ### Library
//!
//! ```
//! use divider_core::{regulator::LM317, series::E96, DEFAULT_TOP_N};
//!
//! let best = LM317.find_best(3.3, &E96, DEFAULT_TOP_N).unwrap();
//! assert!((best[0].voltage - 3.3).abs() < 0.01);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmDividerCalc } from 'divider_core';
//!
//! const calc = new WasmDividerCalc('LM317', 'E96');
//! console.log(calc.report(3.3, 20, 10));
//! ```
//!
//! ## Ratio Deduplication
//!
//! Many absolute pairs share the same `R1 / R2` and therefore the same output
//! voltage. The optimizer keeps only the first pair per ratio rounded to
//! [`RATIO_DECIMALS`] places. This is an approximation: ratios that differ
//! only beyond that precision count as the same divider.

pub mod error;
pub mod input;
pub mod optimizer;
pub mod regulator;
pub mod report;
pub mod series;

// Re-export main types for convenience
pub use error::{DividerError, Result};
pub use optimizer::{find_best_combinations, Candidate, SearchConfig};
pub use regulator::{DividerFormula, RegulatorConfig};
pub use series::ResistorSeries;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmDividerCalc;

/// Default number of candidates returned by a search
pub const DEFAULT_TOP_N: usize = 20;

/// Default number of candidates shown per report section
pub const DEFAULT_DISPLAY_COUNT: usize = 10;

/// Decimal places of `R1 / R2` used to detect equivalent dividers
pub const RATIO_DECIMALS: usize = 6;
