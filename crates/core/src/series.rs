//! Leibniz series for pi
//!
//! pi = 4 * sum_{i>=0} (-1)^i / (2i + 1), truncated after a configured number
//! of terms.
//!
//! Terms are summed strictly in ascending index order. Float addition is not
//! associative, so reordering (pairing, reverse summation, parallel
//! reduction) would change the rounding profile of the result.

use crate::config::{Precision, SeriesConfig};
use crate::partial_sum::{PartialSum, PartialSumF32};
use tracing::{debug, trace};

/// Odd denominator `2i + 1` for term `i`
///
/// Widened to u64 so every `u32` index is representable.
#[inline]
fn denominator(i: u32) -> u64 {
    2 * u64::from(i) + 1
}

/// Sign applied to term `i`: `+1` for even `i`, `-1` for odd `i`
#[inline]
pub fn sign(i: u32) -> i32 {
    if i % 2 == 0 { 1 } else { -1 }
}

/// Signed term `i` of the series
///
/// Computed the same way the approximation loop does: a float division
/// `1.0 / (2i + 1)` followed by multiplication with the sign.
pub fn term(i: u32) -> f64 {
    let mut term = 1.0 / denominator(i) as f64;
    term *= f64::from(sign(i));
    term
}

/// The first `limit` signed terms, in ascending order
pub fn terms(limit: u32) -> impl Iterator<Item = f64> {
    (0..limit).map(term)
}

/// Upper bound on `|approximation - pi|` after `limit` terms
///
/// Alternating-series remainder: the magnitude of the first omitted term,
/// scaled by 4. For 800 terms this is 4/1601.
pub fn remainder_bound(limit: u32) -> f64 {
    4.0 / denominator(limit) as f64
}

/// Computes pi from a truncated Leibniz series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesApproximator {
    config: SeriesConfig,
}

impl SeriesApproximator {
    pub fn new(config: SeriesConfig) -> Self {
        SeriesApproximator { config }
    }

    /// Double-precision approximator with the given term count
    pub fn with_terms(terms: u32) -> Self {
        SeriesApproximator::new(SeriesConfig::new().with_terms(terms))
    }

    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }

    /// Run the series and return the scaled sum
    ///
    /// Total for every configuration: `terms = 0` yields `0.0`.
    pub fn approximate(&self) -> f64 {
        let limit = self.config.terms;
        debug!(terms = limit, precision = ?self.config.precision, "approximating pi");

        let result = match self.config.precision {
            Precision::Double => sum_f64(limit),
            Precision::Single => f64::from(sum_f32(limit)),
        };

        debug!(terms = limit, result, "approximation complete");
        result
    }
}

fn sum_f64(limit: u32) -> f64 {
    let mut sum = PartialSum::new();
    let mut sign: i32 = 1;

    for i in 0..limit {
        let denominator = denominator(i);
        let mut term = 1.0 / denominator as f64;
        term *= f64::from(sign);
        trace!(i, term, "series term");
        sum.push(term);
        sign = -sign;
    }

    sum.scaled()
}

fn sum_f32(limit: u32) -> f32 {
    let mut sum = PartialSumF32::new();
    let mut sign: i32 = 1;

    for i in 0..limit {
        let denominator = denominator(i);
        let mut term = 1.0f32 / denominator as f32;
        term *= sign as f32;
        trace!(i, term, "series term (single)");
        sum.push(term);
        sign = -sign;
    }

    sum.scaled()
}

/// Approximate pi with the default 800 terms in double precision
pub fn approximate_pi() -> f64 {
    SeriesApproximator::default().approximate()
}

/// Approximate pi with `limit` terms in double precision
pub fn approximate_pi_with(limit: u32) -> f64 {
    SeriesApproximator::with_terms(limit).approximate()
}
