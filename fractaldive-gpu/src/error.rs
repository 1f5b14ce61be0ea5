//! GPU error types.

use thiserror::Error;

/// Startup failures are fatal: the system cannot degrade to a single
/// pipeline, so every variant here aborts initialization.
#[derive(Debug, Error)]
pub enum GpuError {
    #[error("No GPU adapter found")]
    NoAdapter,

    #[error("Failed to create device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),

    #[error("Failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("Pipeline '{label}' failed to build: {message}")]
    Pipeline { label: &'static str, message: String },
}
