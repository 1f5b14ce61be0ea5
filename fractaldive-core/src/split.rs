//! Double-single encoding of f64 values for limited-precision GPU registers.
//!
//! A `SplitDouble` carries a value as a (hi, lo) pair of f32 components whose
//! sum approximates the original f64. The hi component is the nearest f32 to
//! the value; the lo component is the rounding residue, itself rounded to
//! f32. Summed back in f64, the pair recovers roughly twice the significant
//! bits of hi alone, which is what lets the extended pipeline resolve detail
//! below native f32 resolution.

/// An f64 value split into paired f32 components.
///
/// Transient: recomputed from the view state every frame, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitDouble {
    pub hi: f32,
    pub lo: f32,
}

/// Split a value into its double-single representation.
///
/// `hi` is the round-to-nearest f32 of `value`; `lo` is the f32 rounding of
/// the remainder `value - hi`.
pub fn split(value: f64) -> SplitDouble {
    let hi = value as f32;
    let lo = (value - hi as f64) as f32;
    SplitDouble { hi, lo }
}

impl SplitDouble {
    /// Recombine the components in f64. Used by tests and diagnostics; the
    /// GPU kernel consumes hi/lo separately.
    pub fn reconstruct(self) -> f64 {
        self.hi as f64 + self.lo as f64
    }
}
