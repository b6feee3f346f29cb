//! Leibniz Core: pi from a truncated alternating series
//!
//! pi = 4 * (1 - 1/3 + 1/5 - 1/7 + ...), summed over a fixed number of terms
//! (800 unless configured otherwise). The computation is pure, synchronous,
//! and total: it never fails and always terminates after exactly the
//! configured number of iterations.
//!
//! # Modules
//!
//! - `partial_sum`: Running accumulator for series terms
//! - `series`: The series itself, term generation, and the error bound
//! - `config`: Term count and precision, with TOML loading
//! - `entry`: Entry computation and run reports
//!
//! # Example
//!
//! ```rust
//! use leibniz_core::{approximate_pi, entry_point, remainder_bound};
//!
//! let pi = entry_point();
//! assert_eq!(pi, approximate_pi());
//! assert!((pi - std::f64::consts::PI).abs() <= remainder_bound(800));
//! ```

pub mod config;
pub mod entry;
pub mod partial_sum;
pub mod series;

pub use config::{DEFAULT_TERMS, Precision, SeriesConfig};
pub use entry::{Report, entry_point, run};
pub use partial_sum::{PartialSum, PartialSumF32};
pub use series::{
    SeriesApproximator, approximate_pi, approximate_pi_with, remainder_bound, sign, term, terms,
};
