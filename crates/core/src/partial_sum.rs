//! Running accumulator for the series
//!
//! A `PartialSum` lives for exactly one approximation: it is created empty,
//! receives one term per iteration, and is consumed by [`PartialSum::scaled`]
//! once the loop is done.

/// Running sum of signed series terms, before the final ×4 scaling
///
/// After `i` calls to [`push`](PartialSum::push) with the first `i` terms,
/// `value()` is their left-to-right floating-point sum.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartialSum {
    value: f64,
    index: u32,
}

impl PartialSum {
    /// Create an empty accumulator (value 0.0, index 0)
    pub fn new() -> Self {
        PartialSum::default()
    }

    /// Add the next term and advance the term index
    pub fn push(&mut self, term: f64) {
        self.value += term;
        self.index += 1;
    }

    /// Current unscaled sum
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Number of terms accumulated so far
    pub fn terms(&self) -> u32 {
        self.index
    }

    /// Consume the accumulator and return `value * 4.0`
    pub fn scaled(self) -> f64 {
        self.value * 4.0
    }
}

/// Single-precision twin of [`PartialSum`]
///
/// Mirrors a 32-bit `float` accumulator. Kept as a separate type so the
/// rounding profile of each width stays explicit at the call site.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartialSumF32 {
    value: f32,
    index: u32,
}

impl PartialSumF32 {
    pub fn new() -> Self {
        PartialSumF32::default()
    }

    pub fn push(&mut self, term: f32) {
        self.value += term;
        self.index += 1;
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn terms(&self) -> u32 {
        self.index
    }

    pub fn scaled(self) -> f32 {
        self.value * 4.0
    }
}
