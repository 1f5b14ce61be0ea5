//! Adaptive iteration budget tied to zoom depth.
//!
//! Escape-time detail needs more iterations to resolve as magnification
//! increases; the cap bounds per-frame GPU cost. Used when the automatic
//! quality mode is enabled, otherwise the user-selected cap applies.

use crate::view::DEFAULT_ZOOM;

pub const AUTO_ITER_MIN: u32 = 128;
pub const AUTO_ITER_MAX: u32 = 2048;

/// Base budget at the default view (magnification 1).
const AUTO_ITER_BASE: f64 = 200.0;
/// Extra iterations per doubling of magnification.
const AUTO_ITER_PER_DOUBLING: f64 = 50.0;

/// Iteration budget for a zoom depth.
///
/// `level = max(1, DEFAULT_ZOOM / zoom)` is the magnification relative to
/// the startup view; the budget grows logarithmically with it and is
/// clamped to `[AUTO_ITER_MIN, AUTO_ITER_MAX]`.
pub fn auto_iterations(zoom: f64) -> u32 {
    let level = (DEFAULT_ZOOM / zoom).max(1.0);
    let raw = (AUTO_ITER_BASE + AUTO_ITER_PER_DOUBLING * level.log2()).floor();
    (raw as u32).clamp(AUTO_ITER_MIN, AUTO_ITER_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_zoom_gives_base_budget() {
        assert_eq!(auto_iterations(DEFAULT_ZOOM), 200);
    }

    #[test]
    fn zoomed_out_views_stay_at_base_budget() {
        // level is clamped to 1 when zoom exceeds the default.
        assert_eq!(auto_iterations(10.0), 200);
        assert_eq!(auto_iterations(1e6), 200);
    }

    #[test]
    fn budget_grows_as_zoom_deepens() {
        let mut prev = auto_iterations(DEFAULT_ZOOM);
        for exp in 1..30 {
            let zoom = DEFAULT_ZOOM * 2f64.powi(-exp);
            let iter = auto_iterations(zoom);
            assert!(
                iter >= prev,
                "budget dropped from {prev} to {iter} at zoom {zoom}"
            );
            prev = iter;
        }
    }

    #[test]
    fn one_doubling_of_magnification_adds_fifty() {
        assert_eq!(auto_iterations(DEFAULT_ZOOM / 2.0), 250);
        assert_eq!(auto_iterations(DEFAULT_ZOOM / 4.0), 300);
    }

    #[test]
    fn extreme_depth_is_capped() {
        assert_eq!(auto_iterations(1e-300), AUTO_ITER_MAX);
    }

    #[test]
    fn budget_stays_within_clamp_range() {
        for exp in -300..300 {
            let iter = auto_iterations(10f64.powi(exp));
            assert!((AUTO_ITER_MIN..=AUTO_ITER_MAX).contains(&iter));
        }
    }
}
