//! Program entry computation
//!
//! Computing the approximation and reporting it are separate steps: this
//! module returns values, and the caller decides how to surface them. The
//! float result is never folded into a process exit status.

use crate::config::SeriesConfig;
use crate::series::{SeriesApproximator, approximate_pi, remainder_bound};
use serde::Serialize;

/// Outcome of a configured run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    /// Configuration the value was computed with
    pub config: SeriesConfig,
    /// The approximation of pi
    pub value: f64,
    /// Upper bound on the truncation error for `config.terms`
    pub bound: f64,
    /// `|value - pi|` against `std::f64::consts::PI`
    pub error: f64,
}

/// Run the default approximation once and return its value unchanged
pub fn entry_point() -> f64 {
    approximate_pi()
}

/// Run a configured approximation and collect its error figures
pub fn run(config: &SeriesConfig) -> Report {
    let value = SeriesApproximator::new(*config).approximate();
    Report {
        config: *config,
        value,
        bound: remainder_bound(config.terms),
        error: (value - std::f64::consts::PI).abs(),
    }
}
