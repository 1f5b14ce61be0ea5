//! View state controller: the authoritative camera over the complex plane.
//!
//! The controller keeps two copies of the camera: the *current* state that
//! every frame renders from, and a *target* state that input events write
//! to. Each display tick [`ViewController::advance`] moves current toward
//! target by a fixed fraction of the remaining gap, so discrete wheel steps
//! turn into smooth motion that decays after the last event.
//!
//! Drags are the exception: they track the pointer exactly, writing current
//! and target center together so no smoothing lag appears under the cursor.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CENTER: (f64, f64) = (-0.5, 0.0);
/// Plane-height spanned by the viewport at startup. Smaller = more magnified.
pub const DEFAULT_ZOOM: f64 = 3.5;

/// Fraction of the remaining gap closed per smoothing tick.
const SMOOTHING_RATE: f64 = 0.15;

/// Wheel step multiplier at the default zoom-speed setting.
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.15;

/// Camera state: center coordinate and plane-height zoom.
///
/// Invariant: `zoom > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub center: (f64, f64),
    pub zoom: f64,
}

impl ViewState {
    /// The fixed startup view over the Mandelbrot set.
    pub fn home() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Origin-centered view at the default zoom, for the Julia parameter
    /// plane.
    pub fn origin() -> Self {
        Self {
            center: (0.0, 0.0),
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Wheel direction, already mapped from the event's scroll sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// What a primary-button press turned into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PressAction {
    /// A drag began; feed subsequent pointer positions to
    /// [`ViewController::drag_to`].
    DragStarted,
    /// Pick mode was armed: the press selected this plane coordinate as the
    /// Julia parameter and the latch has cleared itself.
    Pick((f64, f64)),
}

/// Owns the camera. Input handlers mutate targets; the per-frame tick is the
/// sole writer of the current state.
pub struct ViewController {
    current: ViewState,
    target: ViewState,
    surface: (u32, u32),
    zoom_factor: f64,
    drag_anchor: Option<(f64, f64)>,
    pick_armed: bool,
}

impl ViewController {
    pub fn new(surface_width: u32, surface_height: u32) -> Self {
        Self {
            current: ViewState::home(),
            target: ViewState::home(),
            surface: (surface_width.max(1), surface_height.max(1)),
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            drag_anchor: None,
            pick_armed: false,
        }
    }

    /// Track the display surface size; pixel mapping depends on it.
    pub fn set_surface_size(&mut self, width: u32, height: u32) {
        self.surface = (width.max(1), height.max(1));
    }

    fn aspect(&self) -> f64 {
        self.surface.0 as f64 / self.surface.1 as f64
    }

    /// Map a pixel coordinate to a complex-plane coordinate using the
    /// *current* (not target) state.
    ///
    /// Pixels are normalized to the unit interval with a vertical flip
    /// (screen-down becomes plane-up), scaled by zoom (and by aspect ratio
    /// on the horizontal axis), then offset by the center. The render
    /// pipeline applies the exact inverse, so a feature under the cursor
    /// stays put during cursor-anchored zoom.
    pub fn screen_to_complex(&self, px: f64, py: f64) -> (f64, f64) {
        let (w, h) = (self.surface.0 as f64, self.surface.1 as f64);
        let ux = px / w;
        let uy = 1.0 - py / h;
        (
            (ux - 0.5) * self.current.zoom * self.aspect() + self.current.center.0,
            (uy - 0.5) * self.current.zoom + self.current.center.1,
        )
    }

    /// Inverse of [`Self::screen_to_complex`].
    pub fn complex_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        let (w, h) = (self.surface.0 as f64, self.surface.1 as f64);
        let ux = (x - self.current.center.0) / (self.current.zoom * self.aspect()) + 0.5;
        let uy = (y - self.current.center.1) / self.current.zoom + 0.5;
        (ux * w, (1.0 - uy) * h)
    }

    /// Anchor-preserving zoom toward (or away from) the cursor.
    ///
    /// Captures the plane coordinate under the cursor at the current zoom,
    /// sets the target zoom, then solves the target center so the same pixel
    /// still maps to that coordinate once the animation lands.
    pub fn zoom_at(&mut self, px: f64, py: f64, direction: ZoomDirection) {
        let (cursor_x, cursor_y) = self.screen_to_complex(px, py);

        let factor = match direction {
            ZoomDirection::In => 1.0 / self.zoom_factor,
            ZoomDirection::Out => self.zoom_factor,
        };
        self.target.zoom = self.current.zoom * factor;

        let (w, h) = (self.surface.0 as f64, self.surface.1 as f64);
        let ux = px / w;
        let uy = 1.0 - py / h;
        self.target.center.0 = cursor_x - (ux - 0.5) * self.target.zoom * self.aspect();
        self.target.center.1 = cursor_y - (uy - 0.5) * self.target.zoom;
    }

    /// Handle a primary-button press: either fire the pick latch or start a
    /// drag.
    pub fn press(&mut self, px: f64, py: f64) -> PressAction {
        if self.pick_armed {
            self.pick_armed = false;
            return PressAction::Pick(self.screen_to_complex(px, py));
        }
        self.drag_anchor = Some((px, py));
        PressAction::DragStarted
    }

    /// Pan by the pixel delta since the previous pointer event.
    ///
    /// Writes current and target center together: a drag tracks the pointer
    /// exactly, smoothing applies only to wheel-initiated motion.
    pub fn drag_to(&mut self, px: f64, py: f64) {
        let Some((ax, ay)) = self.drag_anchor else {
            return;
        };
        let (w, h) = (self.surface.0 as f64, self.surface.1 as f64);
        let dx = px - ax;
        let dy = py - ay;

        self.current.center.0 -= dx / w * self.current.zoom * self.aspect();
        self.current.center.1 += dy / h * self.current.zoom;
        self.target.center = self.current.center;

        self.drag_anchor = Some((px, py));
    }

    /// End an active drag, if any.
    pub fn release(&mut self) {
        self.drag_anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// One smoothing tick: each component exponentially approaches its
    /// target by a fixed fraction of the remaining gap. Must run every
    /// display frame whether or not input occurred.
    pub fn advance(&mut self) {
        self.current.center.0 += (self.target.center.0 - self.current.center.0) * SMOOTHING_RATE;
        self.current.center.1 += (self.target.center.1 - self.current.center.1) * SMOOTHING_RATE;
        self.current.zoom += (self.target.zoom - self.current.zoom) * SMOOTHING_RATE;
    }

    /// Restore the fixed startup view, cancelling any in-flight animation.
    pub fn reset(&mut self) {
        self.current = ViewState::home();
        self.target = ViewState::home();
    }

    /// Jump to the plane origin at the default zoom. Used when entering
    /// Julia mode, whose parameter plane is conventionally origin-centered.
    pub fn recenter_origin(&mut self) {
        self.current = ViewState::origin();
        self.target = ViewState::origin();
    }

    /// Arm or disarm the pick latch. While armed, the next primary press is
    /// a parameter selection instead of a drag; the latch clears itself
    /// after firing once.
    pub fn set_pick_mode(&mut self, armed: bool) {
        self.pick_armed = armed;
    }

    pub fn pick_armed(&self) -> bool {
        self.pick_armed
    }

    /// Set the wheel step multiplier (> 1).
    pub fn set_zoom_factor(&mut self, factor: f64) {
        self.zoom_factor = factor.max(1.0 + f64::EPSILON);
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    pub fn view(&self) -> ViewState {
        self.current
    }

    pub fn center(&self) -> (f64, f64) {
        self.current.center
    }

    pub fn zoom(&self) -> f64 {
        self.current.zoom
    }

    /// Magnification relative to the startup view, for status display.
    pub fn magnification(&self) -> f64 {
        DEFAULT_ZOOM / self.current.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_controller() -> ViewController {
        ViewController::new(1000, 1000)
    }

    #[test]
    fn center_pixel_of_square_surface_maps_to_view_center() {
        let vc = square_controller();
        let (x, y) = vc.screen_to_complex(500.0, 500.0);
        assert!((x - -0.5).abs() < 1e-12);
        assert!(y.abs() < 1e-12);
    }

    #[test]
    fn screen_complex_round_trip() {
        let mut vc = ViewController::new(1280, 720);
        vc.set_zoom_factor(1.3);
        for &(px, py) in &[(0.0, 0.0), (640.0, 360.0), (1279.0, 719.0), (17.0, 703.0)] {
            let (x, y) = vc.screen_to_complex(px, py);
            let (rx, ry) = vc.complex_to_screen(x, y);
            assert!((rx - px).abs() < 1e-9, "x: {rx} vs {px}");
            assert!((ry - py).abs() < 1e-9, "y: {ry} vs {py}");
        }
    }

    #[test]
    fn vertical_flip_points_plane_up() {
        let vc = square_controller();
        // A pixel above the center (smaller py) lies above the center in
        // the plane (larger imaginary part).
        let (_, y_top) = vc.screen_to_complex(500.0, 100.0);
        let (_, y_bottom) = vc.screen_to_complex(500.0, 900.0);
        assert!(y_top > y_bottom);
    }

    #[test]
    fn wheel_zoom_in_at_center_leaves_target_center_unchanged() {
        let mut vc = square_controller();
        vc.set_zoom_factor(1.0 / 0.87); // so zooming in multiplies by 0.87
        vc.zoom_at(500.0, 500.0, ZoomDirection::In);

        assert!((vc.target.zoom - 3.5 * 0.87).abs() < 1e-12);
        assert!((vc.target.center.0 - -0.5).abs() < 1e-12);
        assert!(vc.target.center.1.abs() < 1e-12);
        // Current state is untouched until advance() runs.
        assert_eq!(vc.zoom(), 3.5);
    }

    #[test]
    fn anchor_point_survives_full_zoom_convergence() {
        let mut vc = ViewController::new(1600, 900);
        let (px, py) = (300.0, 400.0);
        let cursor = vc.screen_to_complex(px, py);

        vc.zoom_at(px, py, ZoomDirection::In);
        for _ in 0..400 {
            vc.advance();
        }

        let after = vc.screen_to_complex(px, py);
        assert!((after.0 - cursor.0).abs() < 1e-9);
        assert!((after.1 - cursor.1).abs() < 1e-9);
    }

    #[test]
    fn anchor_holds_across_repeated_wheel_steps() {
        let mut vc = ViewController::new(1024, 768);
        let (px, py) = (700.0, 150.0);
        let cursor = vc.screen_to_complex(px, py);

        for _ in 0..5 {
            vc.zoom_at(px, py, ZoomDirection::In);
            for _ in 0..400 {
                vc.advance();
            }
        }

        let after = vc.screen_to_complex(px, py);
        assert!((after.0 - cursor.0).abs() < 1e-6);
        assert!((after.1 - cursor.1).abs() < 1e-6);
    }

    #[test]
    fn drag_shifts_center_against_pointer_motion() {
        let mut vc = square_controller();
        assert_eq!(vc.press(400.0, 400.0), PressAction::DragStarted);
        vc.drag_to(500.0, 400.0);

        // 100px right on a 1000px-wide square surface at zoom 3.5 moves the
        // center 0.35 left.
        assert!((vc.center().0 - (-0.5 - 0.35)).abs() < 1e-12);
        assert!(vc.center().1.abs() < 1e-12);
    }

    #[test]
    fn drag_tracks_pointer_without_smoothing() {
        let mut vc = square_controller();
        vc.press(100.0, 100.0);
        vc.drag_to(150.0, 130.0);

        // Current and target move together; advance() changes nothing.
        assert_eq!(vc.current.center, vc.target.center);
        let before = vc.center();
        vc.advance();
        assert_eq!(vc.center(), before);
    }

    #[test]
    fn drag_deltas_accumulate_per_move_event() {
        let mut one_move = square_controller();
        one_move.press(0.0, 0.0);
        one_move.drag_to(90.0, -40.0);

        let mut many_moves = square_controller();
        many_moves.press(0.0, 0.0);
        for i in 1..=9 {
            many_moves.drag_to(i as f64 * 10.0, i as f64 * -40.0 / 9.0);
        }

        assert!((one_move.center().0 - many_moves.center().0).abs() < 1e-9);
        assert!((one_move.center().1 - many_moves.center().1).abs() < 1e-9);
    }

    #[test]
    fn moves_without_active_drag_are_ignored() {
        let mut vc = square_controller();
        vc.drag_to(500.0, 500.0);
        assert_eq!(vc.center(), DEFAULT_CENTER);

        vc.press(100.0, 100.0);
        vc.release();
        vc.drag_to(500.0, 500.0);
        assert_eq!(vc.center(), DEFAULT_CENTER);
    }

    #[test]
    fn advance_closes_a_fixed_fraction_of_the_gap() {
        let mut vc = square_controller();
        vc.zoom_at(500.0, 500.0, ZoomDirection::Out);
        let gap = vc.target.zoom - vc.zoom();
        vc.advance();
        let remaining = vc.target.zoom - vc.zoom();
        assert!((remaining - gap * 0.85).abs() < 1e-12);
    }

    #[test]
    fn advance_without_input_is_a_fixed_point() {
        let mut vc = square_controller();
        for _ in 0..10 {
            vc.advance();
        }
        assert_eq!(vc.view(), ViewState::home());
    }

    #[test]
    fn pick_latch_fires_exactly_once() {
        let mut vc = square_controller();
        vc.set_pick_mode(true);
        assert!(vc.pick_armed());

        let action = vc.press(500.0, 500.0);
        let PressAction::Pick((x, y)) = action else {
            panic!("expected pick, got {action:?}");
        };
        assert!((x - -0.5).abs() < 1e-12);
        assert!(y.abs() < 1e-12);
        assert!(!vc.pick_armed());

        // Latch has cleared: the next press is an ordinary drag.
        assert_eq!(vc.press(500.0, 500.0), PressAction::DragStarted);
    }

    #[test]
    fn reset_restores_home_view_and_cancels_animation() {
        let mut vc = square_controller();
        vc.zoom_at(250.0, 750.0, ZoomDirection::In);
        vc.advance();
        vc.reset();

        assert_eq!(vc.view(), ViewState::home());
        // No residual target motion.
        vc.advance();
        assert_eq!(vc.view(), ViewState::home());
    }

    #[test]
    fn recenter_origin_keeps_default_zoom() {
        let mut vc = square_controller();
        vc.zoom_at(100.0, 100.0, ZoomDirection::In);
        for _ in 0..50 {
            vc.advance();
        }
        vc.recenter_origin();

        assert_eq!(vc.center(), (0.0, 0.0));
        assert_eq!(vc.zoom(), DEFAULT_ZOOM);
    }

    #[test]
    fn magnification_is_relative_to_default_zoom() {
        let vc = square_controller();
        assert!((vc.magnification() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn view_state_serialization_roundtrip() {
        let state = ViewState {
            center: (-0.743643887037151, 0.131825904205330),
            zoom: 2.4e-7,
        };
        let json = serde_json::to_string(&state).unwrap();
        let restored: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
