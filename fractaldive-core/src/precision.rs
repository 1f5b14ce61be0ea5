//! Precision-mode selection for the dual render pipelines.
//!
//! The renderer owns two compiled variants of the same kernel: a standard
//! f32 pipeline and a double-single pipeline with extended-precision
//! arithmetic. Which one draws a given frame is a pure function of the
//! current zoom (the plane-height spanned by the viewport).

use std::fmt;

/// Zoom below which the double-single pipeline takes over.
///
/// Roughly 10,000x magnification from the default view; past that point the
/// standard pipeline's f32 coordinates quantize visibly.
pub const DS_ZOOM_THRESHOLD: f64 = 3.5e-4;

/// Which compiled kernel variant renders a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrecisionMode {
    /// Plain f32 arithmetic.
    Standard,
    /// Paired-f32 double-single arithmetic.
    DoubleSingle,
}

impl PrecisionMode {
    /// Select the pipeline for a zoom depth.
    ///
    /// Strict `<`: a zoom exactly at the threshold stays on Standard.
    pub fn for_zoom(zoom: f64) -> Self {
        if zoom < DS_ZOOM_THRESHOLD {
            PrecisionMode::DoubleSingle
        } else {
            PrecisionMode::Standard
        }
    }

    /// Short label for status display.
    pub fn label(self) -> &'static str {
        match self {
            PrecisionMode::Standard => "SP",
            PrecisionMode::DoubleSingle => "DS",
        }
    }
}

impl fmt::Display for PrecisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
