//! Per-frame rendering: pipeline selection, uniform upload, one draw call.

use fractaldive_core::{FractalParams, PrecisionMode, ViewState};
use wgpu::util::DeviceExt;

use crate::device::GpuContext;
use crate::error::GpuError;
use crate::pipeline::{FractalPipeline, ShaderSources, QUAD_VERTICES};
use crate::uniforms::{DoubleSingleUniforms, StandardUniforms};

/// Owns the two compiled kernel variants and the static full-surface quad.
///
/// Nothing per-frame persists on the GPU between [`FrameRenderer::render_frame`]
/// calls: the pipelines, uniform buffers, and geometry are created once at
/// startup and only the uniform contents change.
pub struct FrameRenderer {
    context: GpuContext,
    quad: wgpu::Buffer,
    standard: FractalPipeline,
    double_single: FractalPipeline,
}

impl FrameRenderer {
    /// Compile both pipelines from the given shader sources.
    ///
    /// Either variant failing to build is fatal; there is no degraded
    /// single-pipeline mode.
    pub async fn new(
        context: GpuContext,
        format: wgpu::TextureFormat,
        sources: ShaderSources<'_>,
    ) -> Result<Self, GpuError> {
        let quad = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("fullscreen_quad"),
                contents: bytemuck::cast_slice(&QUAD_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let standard = FractalPipeline::build(
            &context.device,
            format,
            &sources,
            PrecisionMode::Standard,
            std::mem::size_of::<StandardUniforms>() as u64,
            "fractal_standard",
        )
        .await?;

        let double_single = FractalPipeline::build(
            &context.device,
            format,
            &sources,
            PrecisionMode::DoubleSingle,
            std::mem::size_of::<DoubleSingleUniforms>() as u64,
            "fractal_double_single",
        )
        .await?;

        log::info!("compiled standard and double-single fractal pipelines");

        Ok(Self {
            context,
            quad,
            standard,
            double_single,
        })
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.context.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.context.queue
    }

    /// Draw one full-surface frame into `target`.
    ///
    /// Selects the pipeline from the zoom depth, encodes the matching
    /// uniform block (splitting center and Julia constant into hi/lo pairs
    /// in double-single mode), and issues exactly one draw call. Returns
    /// the mode used, for status display.
    pub fn render_frame(
        &self,
        target: &wgpu::TextureView,
        surface_size: (u32, u32),
        view: &ViewState,
        params: &FractalParams,
    ) -> PrecisionMode {
        let mode = PrecisionMode::for_zoom(view.zoom);

        let pipeline = match mode {
            PrecisionMode::Standard => {
                let uniforms = StandardUniforms::new(surface_size, view, params);
                self.context.queue.write_buffer(
                    &self.standard.uniform_buffer,
                    0,
                    bytemuck::bytes_of(&uniforms),
                );
                &self.standard
            }
            PrecisionMode::DoubleSingle => {
                let uniforms = DoubleSingleUniforms::new(surface_size, view, params);
                self.context.queue.write_buffer(
                    &self.double_single.uniform_buffer,
                    0,
                    bytemuck::bytes_of(&uniforms),
                );
                &self.double_single
            }
        };

        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("fractal_frame"),
                });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("fractal_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_pipeline(&pipeline.pipeline);
            pass.set_bind_group(0, &pipeline.bind_group, &[]);
            pass.set_vertex_buffer(0, self.quad.slice(..));
            pass.draw(0..QUAD_VERTICES.len() as u32, 0..1);
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));

        mode
    }
}
