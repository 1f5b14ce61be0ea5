//! Uniform blocks for the two kernel variants.
//!
//! Layouts mirror the std140 blocks declared in the fragment shader. The
//! standard block has no low-component fields at all: that code path is
//! compiled out of the standard pipeline, not merely zeroed.

use bytemuck::{Pod, Zeroable};
use fractaldive_core::{split, FractalParams, ViewState};

/// Uniforms for the standard f32 pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct StandardUniforms {
    pub resolution: [f32; 2],
    pub center_hi: [f32; 2],
    pub julia_c_hi: [f32; 2],
    pub zoom: f32,
    pub max_iterations: i32,
    pub mode: i32,
    pub color_scheme: i32,
}

impl StandardUniforms {
    pub fn new(surface_size: (u32, u32), view: &ViewState, params: &FractalParams) -> Self {
        Self {
            resolution: [surface_size.0 as f32, surface_size.1 as f32],
            center_hi: [view.center.0 as f32, view.center.1 as f32],
            julia_c_hi: [params.julia_c.0 as f32, params.julia_c.1 as f32],
            zoom: view.zoom as f32,
            max_iterations: params.max_iterations as i32,
            mode: params.kind.mode_index(),
            color_scheme: params.color_scheme as i32,
        }
    }
}

/// Uniforms for the double-single pipeline: each f64 coordinate axis is
/// split into paired hi/lo f32 components.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct DoubleSingleUniforms {
    pub resolution: [f32; 2],
    pub center_hi: [f32; 2],
    pub center_lo: [f32; 2],
    pub julia_c_hi: [f32; 2],
    pub julia_c_lo: [f32; 2],
    pub zoom: f32,
    pub max_iterations: i32,
    pub mode: i32,
    pub color_scheme: i32,
}

impl DoubleSingleUniforms {
    pub fn new(surface_size: (u32, u32), view: &ViewState, params: &FractalParams) -> Self {
        let cx = split(view.center.0);
        let cy = split(view.center.1);
        let jx = split(params.julia_c.0);
        let jy = split(params.julia_c.1);
        Self {
            resolution: [surface_size.0 as f32, surface_size.1 as f32],
            center_hi: [cx.hi, cy.hi],
            center_lo: [cx.lo, cy.lo],
            julia_c_hi: [jx.hi, jy.hi],
            julia_c_lo: [jx.lo, jy.lo],
            zoom: view.zoom as f32,
            max_iterations: params.max_iterations as i32,
            mode: params.kind.mode_index(),
            color_scheme: params.color_scheme as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractaldive_core::FractalKind;

    fn test_view() -> ViewState {
        ViewState {
            center: (-0.743643887037151, 0.131825904205330),
            zoom: 2.0e-5,
        }
    }

    #[test]
    fn standard_block_matches_std140_size() {
        // vec2 ×3 + float + int ×3 = 40 bytes, struct alignment 8.
        assert_eq!(std::mem::size_of::<StandardUniforms>(), 40);
    }

    #[test]
    fn double_single_block_matches_std140_size() {
        // vec2 ×5 + float + int ×3 = 56 bytes.
        assert_eq!(std::mem::size_of::<DoubleSingleUniforms>(), 56);
    }

    #[test]
    fn standard_uniforms_cast_directly_to_f32() {
        let view = test_view();
        let params = FractalParams::default();
        let u = StandardUniforms::new((800, 600), &view, &params);

        assert_eq!(u.resolution, [800.0, 600.0]);
        assert_eq!(u.center_hi, [view.center.0 as f32, view.center.1 as f32]);
        assert_eq!(u.zoom, view.zoom as f32);
        assert_eq!(u.max_iterations, 256);
        assert_eq!(u.mode, 0);
    }

    #[test]
    fn double_single_uniforms_split_every_axis() {
        let view = test_view();
        let mut params = FractalParams::default();
        params.kind = FractalKind::Julia;
        let u = DoubleSingleUniforms::new((800, 600), &view, &params);

        // hi + lo recovers far more of the f64 coordinate than hi alone.
        let recombined = u.center_hi[0] as f64 + u.center_lo[0] as f64;
        assert!((recombined - view.center.0).abs() < (u.center_hi[0] as f64 - view.center.0).abs());

        let j_recombined = u.julia_c_hi[1] as f64 + u.julia_c_lo[1] as f64;
        assert!((j_recombined - params.julia_c.1).abs() < 1e-13);
        assert_eq!(u.mode, 1);
    }
}
