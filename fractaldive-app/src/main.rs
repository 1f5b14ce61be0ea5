//! fractaldive: interactive deep-zoom Mandelbrot/Julia explorer.
//!
//! Controls:
//!   - Drag: pan
//!   - Wheel: zoom toward the cursor
//!   - M: toggle Mandelbrot/Julia
//!   - J: arm Julia-constant pick (next click selects the constant)
//!   - C: cycle color palette
//!   - A: toggle automatic iteration budget
//!   - [ / ]: halve / double the manual iteration cap
//!   - - / =: zoom speed down / up
//!   - R: reset view and parameters
//!   - Q / Escape: quit

use std::error::Error;
use std::sync::Arc;

use fractaldive_core::{
    auto_iterations, FractalKind, FractalParams, PrecisionMode, PressAction, ViewController,
    ZoomDirection,
};
use fractaldive_gpu::{FrameRenderer, GpuContext, ShaderSources};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowBuilder;

const VERTEX_SRC: &str = include_str!("../shaders/fractal.vert");
const FRAGMENT_SRC: &str = include_str!("../shaders/fractal.frag");

const INITIAL_WIDTH: u32 = 1280;
const INITIAL_HEIGHT: u32 = 800;

const MANUAL_ITER_MIN: u32 = 16;
const MANUAL_ITER_MAX: u32 = 2048;

const DEFAULT_ZOOM_SPEED: u32 = 3;

/// Zoom-speed setting (1..=10) to wheel step multiplier.
fn zoom_speed_to_factor(step: u32) -> f64 {
    1.0 + step as f64 * 0.05
}

fn format_status(
    controller: &ViewController,
    params: &FractalParams,
    mode: PrecisionMode,
    auto_iter: bool,
) -> String {
    let (cx, cy) = controller.center();
    let mut status = format!(
        "fractaldive — {:.4} {} {:.4}i · {:.1e}x · {} iter{} · {} · {}",
        cx,
        if cy >= 0.0 { '+' } else { '-' },
        cy.abs(),
        controller.magnification(),
        params.max_iterations,
        if auto_iter { " (auto)" } else { "" },
        params.palette_name(),
        mode,
    );
    if params.kind == FractalKind::Julia {
        let (jx, jy) = params.julia_c;
        status.push_str(&format!(
            " · c = {:.4} {} {:.4}i",
            jx,
            if jy >= 0.0 { '+' } else { '-' },
            jy.abs()
        ));
    }
    if controller.pick_armed() {
        status.push_str(" · click to pick c");
    }
    status
}

fn apply_julia_pick(controller: &mut ViewController, params: &mut FractalParams, c: (f64, f64)) {
    log::info!("julia constant picked: {:.6} {:+.6}i", c.0, c.1);
    params.julia_c = c;
    params.kind = FractalKind::Julia;
    controller.recenter_origin();
}

fn toggle_kind(controller: &mut ViewController, params: &mut FractalParams) {
    params.kind = params.kind.toggled();
    controller.set_pick_mode(false);
    match params.kind {
        // The Mandelbrot view returns home; the Julia parameter plane is
        // conventionally centered at the origin.
        FractalKind::Mandelbrot => controller.reset(),
        FractalKind::Julia => controller.recenter_origin(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("fractaldive")
            .with_inner_size(PhysicalSize::new(INITIAL_WIDTH, INITIAL_HEIGHT))
            .build(&event_loop)?,
    );

    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });
    let surface = instance.create_surface(window.clone())?;
    let context = pollster::block_on(GpuContext::init(&instance, Some(&surface)))?;

    let caps = surface.get_capabilities(&context.adapter);
    let format = caps.formats[0];
    let size = window.inner_size();
    let mut config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode: caps.alpha_modes[0],
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&context.device, &config);

    // Both pipelines must compile before the first frame; any failure here
    // is fatal.
    let renderer = pollster::block_on(FrameRenderer::new(
        context,
        format,
        ShaderSources {
            vertex: VERTEX_SRC,
            fragment: FRAGMENT_SRC,
        },
    ))?;

    let mut controller = ViewController::new(config.width, config.height);
    let mut params = FractalParams::default();
    let mut auto_iter = true;
    let mut zoom_speed = DEFAULT_ZOOM_SPEED;
    controller.set_zoom_factor(zoom_speed_to_factor(zoom_speed));

    let mut cursor = (0.0f64, 0.0f64);
    let mut last_mode = None::<PrecisionMode>;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(new_size) => {
                config.width = new_size.width.max(1);
                config.height = new_size.height.max(1);
                surface.configure(renderer.device(), &config);
                controller.set_surface_size(config.width, config.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                cursor = (position.x, position.y);
                if controller.is_dragging() {
                    controller.drag_to(cursor.0, cursor.1);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    match state {
                        ElementState::Pressed => {
                            if let PressAction::Pick(c) = controller.press(cursor.0, cursor.1) {
                                apply_julia_pick(&mut controller, &mut params, c);
                            }
                        }
                        ElementState::Released => controller.release(),
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                // Positive scroll is away from the user, i.e. zoom in.
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y as f64,
                    MouseScrollDelta::PixelDelta(pos) => pos.y,
                };
                if scroll != 0.0 {
                    let direction = if scroll > 0.0 {
                        ZoomDirection::In
                    } else {
                        ZoomDirection::Out
                    };
                    controller.zoom_at(cursor.0, cursor.1, direction);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match key {
                KeyCode::Escape | KeyCode::KeyQ => elwt.exit(),
                KeyCode::KeyR => {
                    params = FractalParams::default();
                    auto_iter = true;
                    zoom_speed = DEFAULT_ZOOM_SPEED;
                    controller.set_zoom_factor(zoom_speed_to_factor(zoom_speed));
                    controller.set_pick_mode(false);
                    controller.reset();
                }
                KeyCode::KeyM => toggle_kind(&mut controller, &mut params),
                KeyCode::KeyJ => {
                    // Picking selects the Julia constant from the Mandelbrot
                    // plane, so it only arms there.
                    if params.kind == FractalKind::Mandelbrot {
                        controller.set_pick_mode(!controller.pick_armed());
                    }
                }
                KeyCode::KeyC => params.cycle_color_scheme(),
                KeyCode::KeyA => auto_iter = !auto_iter,
                KeyCode::BracketRight => {
                    auto_iter = false;
                    params.max_iterations = (params.max_iterations * 2).min(MANUAL_ITER_MAX);
                }
                KeyCode::BracketLeft => {
                    auto_iter = false;
                    params.max_iterations = (params.max_iterations / 2).max(MANUAL_ITER_MIN);
                }
                KeyCode::Minus => {
                    zoom_speed = zoom_speed.saturating_sub(1).max(1);
                    controller.set_zoom_factor(zoom_speed_to_factor(zoom_speed));
                }
                KeyCode::Equal => {
                    zoom_speed = (zoom_speed + 1).min(10);
                    controller.set_zoom_factor(zoom_speed_to_factor(zoom_speed));
                }
                _ => {}
            },
            WindowEvent::RedrawRequested => {
                // The per-frame tick is the sole writer of the current view
                // state; smoothing decays here even without input.
                controller.advance();
                if auto_iter {
                    params.max_iterations = auto_iterations(controller.zoom());
                }

                let frame = match surface.get_current_texture() {
                    Ok(frame) => frame,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        surface.configure(renderer.device(), &config);
                        return;
                    }
                    Err(e) => {
                        log::warn!("skipping frame: {e}");
                        return;
                    }
                };
                let target = frame.texture.create_view(&Default::default());

                let mode = renderer.render_frame(
                    &target,
                    (config.width, config.height),
                    &controller.view(),
                    &params,
                );
                frame.present();

                if last_mode != Some(mode) {
                    log::info!("precision mode: {mode}");
                    last_mode = Some(mode);
                }
                window.set_title(&format_status(&controller, &params, mode, auto_iter));
            }
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;

    Ok(())
}
