//! Fractal parameter block shared between the frame driver and the GPU
//! uniforms.

use serde::{Deserialize, Serialize};

/// Palette names, indexed by `FractalParams::color_scheme`.
pub const PALETTE_NAMES: [&str; 4] = ["Classic", "Fire", "Ice", "Psychedelic"];

/// Seahorse-valley Julia constant used until the user picks their own.
pub const DEFAULT_JULIA_C: (f64, f64) = (-0.7, 0.27015);

pub const DEFAULT_MAX_ITERATIONS: u32 = 256;

/// The two fractal families the kernel renders. Mandelbrot iterates the
/// pixel coordinate; Julia holds a fixed constant and iterates from the
/// pixel instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FractalKind {
    Mandelbrot,
    Julia,
}

impl FractalKind {
    /// Integer mode selector passed to the kernel (0 = Mandelbrot, 1 = Julia).
    pub fn mode_index(self) -> i32 {
        match self {
            FractalKind::Mandelbrot => 0,
            FractalKind::Julia => 1,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            FractalKind::Mandelbrot => FractalKind::Julia,
            FractalKind::Julia => FractalKind::Mandelbrot,
        }
    }
}

/// Parameters uploaded to the render pipeline each frame.
///
/// Owned by the frame driver; the iteration heuristic overwrites
/// `max_iterations` when automatic quality mode is active.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FractalParams {
    pub kind: FractalKind,
    pub julia_c: (f64, f64),
    pub max_iterations: u32,
    pub color_scheme: u32,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            kind: FractalKind::Mandelbrot,
            julia_c: DEFAULT_JULIA_C,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            color_scheme: 0,
        }
    }
}

impl FractalParams {
    pub fn cycle_color_scheme(&mut self) {
        self.color_scheme = (self.color_scheme + 1) % PALETTE_NAMES.len() as u32;
    }

    pub fn palette_name(&self) -> &'static str {
        PALETTE_NAMES[self.color_scheme as usize % PALETTE_NAMES.len()]
    }
}
