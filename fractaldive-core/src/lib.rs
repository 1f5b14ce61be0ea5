//! Camera and numeric core for the fractaldive explorer.
//!
//! Everything in this crate is pure state and arithmetic: the view
//! controller that owns the camera, the double-single codec that stretches
//! f64 coordinates onto f32 GPU registers, the precision-mode selection,
//! and the adaptive iteration heuristic. No GPU or windowing types leak in
//! here, which keeps all of it testable on the CPU.

pub mod iterations;
pub mod params;
pub mod precision;
pub mod split;
pub mod view;

pub use iterations::{auto_iterations, AUTO_ITER_MAX, AUTO_ITER_MIN};
pub use params::{FractalKind, FractalParams, DEFAULT_JULIA_C, PALETTE_NAMES};
pub use precision::{PrecisionMode, DS_ZOOM_THRESHOLD};
pub use split::{split, SplitDouble};
pub use view::{
    PressAction, ViewController, ViewState, ZoomDirection, DEFAULT_CENTER, DEFAULT_ZOOM,
};
