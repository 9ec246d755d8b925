//! Resistor-pair optimizer.
//!
//! Given a regulator formula `Vout = f(R1, R2)`, a resistor series and a set
//! of decade multipliers, the optimizer ranks every distinct divider ratio by
//! how close its output lands to the desired voltage.
//!
//! ## Search
//!
//! 1. Expand the series: every mantissa times every multiplier
//! 2. Visit each ordered pair `(R1, R2)` with `R1 != R2`
//! 3. Keep only the first pair for each `R1 / R2` rounded to 6 places
//! 4. Score the pair: `error = |f(R1, R2) - desired|`
//! 5. Stable sort by error and keep the first `top_n`
//!
//! With E96 and three decades this is 288² pair visits, small enough that a
//! plain nested loop is all that is needed.

mod candidate;
mod search;

pub use candidate::Candidate;
pub use search::find_best_combinations;

use crate::{DEFAULT_DISPLAY_COUNT, DEFAULT_TOP_N};

/// Result limits for a search.
///
/// `top_n` caps how many candidates the optimizer returns; `display_count`
/// caps how many of those a report shows. The two are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum candidates returned by the optimizer.
    pub top_n: usize,
    /// Maximum candidates shown per report section.
    pub display_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            display_count: DEFAULT_DISPLAY_COUNT,
        }
    }
}

impl SearchConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of candidates the optimizer returns.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the number of candidates shown per report section.
    pub fn with_display_count(mut self, display_count: usize) -> Self {
        self.display_count = display_count;
        self
    }
}
