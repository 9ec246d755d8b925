//! WASM bindings for Divider Core.
//!
//! This module provides JavaScript-friendly bindings for use in web pages.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmDividerCalc } from 'divider_core';
//!
//! await init();
//!
//! const calc = new WasmDividerCalc('LTC4020', 'E96');
//!
//! // Flattened rows of [r1, r2, voltage, error, diff]
//! const rows = calc.search(12.0, 20);
//! for (let i = 0; i < rows.length; i += 5) {
//!   console.log(rows[i], rows[i + 1], rows[i + 2]);
//! }
//!
//! // Same text the CLI prints
//! console.log(calc.report(12.0, 20, 10));
//! ```

use wasm_bindgen::prelude::*;

use crate::optimizer::{Candidate, SearchConfig};
use crate::regulator::RegulatorConfig;
use crate::report::search_section;
use crate::series::ResistorSeries;

/// Number of values per candidate in [`WasmDividerCalc::search`] output.
const FIELDS_PER_CANDIDATE: usize = 5;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible divider calculator bound to one regulator and series.
#[wasm_bindgen]
pub struct WasmDividerCalc {
    regulator: &'static RegulatorConfig,
    series: &'static ResistorSeries,
}

#[wasm_bindgen]
impl WasmDividerCalc {
    /// Create a calculator for a regulator preset and a standard series.
    ///
    /// # Arguments
    /// * `regulator` - Part name, `"LM317"` or `"LTC4020"`
    /// * `series` - Series name, `"E24"` or `"E96"`
    #[wasm_bindgen(constructor)]
    pub fn new(regulator: &str, series: &str) -> Result<WasmDividerCalc, JsValue> {
        let regulator = RegulatorConfig::by_name(regulator).map_err(to_js)?;
        let series = ResistorSeries::by_name(series).map_err(to_js)?;
        Ok(WasmDividerCalc { regulator, series })
    }

    /// Rank resistor pairs for `desired_voltage`.
    ///
    /// # Returns
    /// A Float64Array of `[r1, r2, voltage, error, diff]` per candidate,
    /// best first.
    #[wasm_bindgen]
    pub fn search(&self, desired_voltage: f64, top_n: usize) -> Result<Vec<f64>, JsValue> {
        let candidates = self.find(desired_voltage, top_n)?;

        let mut out = Vec::with_capacity(candidates.len() * FIELDS_PER_CANDIDATE);
        for c in &candidates {
            out.extend_from_slice(&[c.r1, c.r2, c.voltage, c.error, c.diff]);
        }
        Ok(out)
    }

    /// Rank resistor pairs and format them like the CLI does.
    ///
    /// # Arguments
    /// * `desired_voltage` - Target output voltage in volts
    /// * `top_n` - Number of candidates kept by the search
    /// * `display_count` - Number of candidates printed
    #[wasm_bindgen]
    pub fn report(
        &self,
        desired_voltage: f64,
        top_n: usize,
        display_count: usize,
    ) -> Result<String, JsValue> {
        let config = SearchConfig::new()
            .with_top_n(top_n)
            .with_display_count(display_count);
        search_section(self.regulator, self.series, desired_voltage, &config).map_err(to_js)
    }

    /// Output voltage of the bound regulator for a resistor pair.
    #[wasm_bindgen]
    pub fn voltage(&self, r1: f64, r2: f64) -> Result<f64, JsValue> {
        self.regulator.voltage(r1, r2).map_err(to_js)
    }

    /// Name of the bound regulator.
    #[wasm_bindgen(getter)]
    pub fn regulator(&self) -> String {
        self.regulator.name().to_string()
    }

    /// Name of the bound series.
    #[wasm_bindgen(getter)]
    pub fn series(&self) -> String {
        self.series.name().to_string()
    }
}

impl WasmDividerCalc {
    fn find(&self, desired_voltage: f64, top_n: usize) -> Result<Vec<Candidate>, JsValue> {
        self.regulator
            .find_best(desired_voltage, self.series, top_n)
            .map_err(to_js)
    }
}

fn to_js(e: crate::DividerError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the default number of candidates a search returns.
#[wasm_bindgen]
pub fn default_top_n() -> usize {
    crate::DEFAULT_TOP_N
}
