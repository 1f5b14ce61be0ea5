//! GPU render pipeline manager for the fractaldive explorer.
//!
//! Owns two compiled variants of the same fractal kernel: a standard f32
//! pipeline and a double-single pipeline with extended-precision arithmetic
//! enabled at compile time. One of them draws a full-surface quad per frame,
//! selected by the current zoom depth.

mod device;
mod error;
mod pipeline;
mod renderer;
mod uniforms;

pub use device::GpuContext;
pub use error::GpuError;
pub use pipeline::ShaderSources;
pub use renderer::FrameRenderer;
pub use uniforms::{DoubleSingleUniforms, StandardUniforms};
