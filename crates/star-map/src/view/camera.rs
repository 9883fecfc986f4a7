use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::config::CameraParams;

/// Pan and zoom applied by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    /// Screen-space offset subtracted after scaling.
    pub pan: Vec2,
    pub zoom: f32,
}

impl CameraTransform {
    pub const IDENTITY: Self = Self { pan: Vec2::ZERO, zoom: 1.0 };
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Pan/zoom camera for the star map.
///
/// Rendering maps world to screen as `(world - center) * zoom + center - pan`,
/// where `center` is the middle of the current canvas. Current values chase
/// the user-set targets by a fixed fraction each frame, unless a transition
/// writes them directly through [`Camera::apply`].
#[derive(Debug, Clone)]
pub struct Camera {
    /// Canvas width in screen pixels.
    pub width: f32,
    /// Canvas height in screen pixels.
    pub height: f32,
    current: CameraTransform,
    target: CameraTransform,
    /// Fraction of the remaining distance covered per tick.
    smoothing: f32,
    zoom_min: f32,
    zoom_max: f32,
    scroll_sensitivity: f32,
}

/// GPU/host-side uniform data for the camera: 8 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub pan_x: f32,
    pub pan_y: f32,
    pub zoom: f32,
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
    pub _pad: f32,
}

impl CameraUniform {
    pub const FLOATS: usize = 8;
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_params(width, height, &CameraParams::default())
    }

    pub fn with_params(width: f32, height: f32, params: &CameraParams) -> Self {
        Self {
            width,
            height,
            current: CameraTransform::IDENTITY,
            target: CameraTransform::IDENTITY,
            smoothing: params.smoothing,
            zoom_min: params.zoom_min,
            zoom_max: params.zoom_max,
            scroll_sensitivity: params.scroll_sensitivity,
        }
    }

    /// Canvas center in screen coordinates.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Current pan/zoom, as handed to the renderer.
    pub fn transform(&self) -> CameraTransform {
        self.current
    }

    pub fn target(&self) -> CameraTransform {
        self.target
    }

    pub fn zoom(&self) -> f32 {
        self.current.zoom
    }

    pub fn pan(&self) -> Vec2 {
        self.current.pan
    }

    /// Set the convergence target. Zoom is clamped to the user range.
    pub fn set_target(&mut self, pan: Vec2, zoom: f32) {
        self.target.pan = pan;
        self.target.zoom = zoom.clamp(self.zoom_min, self.zoom_max);
    }

    /// Drag: move the target pan against the pointer, scaled by the current zoom.
    pub fn pan_by_screen_delta(&mut self, delta: Vec2) {
        let pan = self.target.pan - delta / self.current.zoom;
        self.set_target(pan, self.target.zoom);
    }

    /// Scroll: positive delta zooms out, negative zooms in.
    pub fn zoom_by_scroll(&mut self, delta: f32) {
        let zoom = self.target.zoom + delta * -self.scroll_sensitivity;
        self.set_target(self.target.pan, zoom);
    }

    /// One frame of exponential smoothing toward the target.
    pub fn tick(&mut self) {
        let k = self.smoothing;
        self.current.pan += (self.target.pan - self.current.pan) * k;
        self.current.zoom += (self.target.zoom - self.current.zoom) * k;
    }

    /// Write current values directly (transition-driven, not clamped).
    pub fn apply(&mut self, transform: CameraTransform) {
        self.current = transform;
    }

    /// Snap current and target to the centered, unit-zoom state.
    pub fn reset(&mut self) {
        self.current = CameraTransform::IDENTITY;
        self.target = CameraTransform::IDENTITY;
    }

    /// Resize the canvas. World positions are untouched; only the center moves.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Map a world position to screen pixels through the current transform.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let c = self.center();
        (world - c) * self.current.zoom + c - self.current.pan
    }

    /// Exact inverse of [`Camera::world_to_screen`].
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        let c = self.center();
        let zoom = self.current.zoom;
        (screen - c) / zoom + c + self.current.pan / zoom
    }

    pub fn uniform(&self) -> CameraUniform {
        let c = self.center();
        CameraUniform {
            pan_x: self.current.pan.x,
            pan_y: self.current.pan.y,
            zoom: self.current.zoom,
            center_x: c.x,
            center_y: c.y,
            width: self.width,
            height: self.height,
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn identity_transform_is_noop() {
        let cam = Camera::new(800.0, 600.0);
        let p = Vec2::new(123.0, 456.0);
        assert!(approx(cam.world_to_screen(p), p));
        assert!(approx(cam.screen_to_world(p), p));
    }

    #[test]
    fn screen_to_world_inverts_world_to_screen() {
        let mut cam = Camera::new(1280.0, 720.0);
        cam.apply(CameraTransform { pan: Vec2::new(-40.0, 75.0), zoom: 2.5 });
        for p in [Vec2::new(0.0, 0.0), Vec2::new(640.0, 360.0), Vec2::new(1000.0, 90.0)] {
            let back = cam.screen_to_world(cam.world_to_screen(p));
            assert!(approx(back, p), "{:?} came back as {:?}", p, back);
        }
    }

    #[test]
    fn zoom_scales_about_center() {
        let mut cam = Camera::new(800.0, 600.0);
        cam.apply(CameraTransform { pan: Vec2::ZERO, zoom: 2.0 });
        assert!(approx(cam.world_to_screen(Vec2::new(400.0, 300.0)), Vec2::new(400.0, 300.0)));
        assert!(approx(cam.world_to_screen(Vec2::new(500.0, 300.0)), Vec2::new(600.0, 300.0)));
    }

    #[test]
    fn smoothing_moves_fraction_without_overshoot() {
        let mut cam = Camera::new(800.0, 600.0);
        cam.set_target(Vec2::new(100.0, 0.0), 2.0);
        cam.tick();
        assert!((cam.pan().x - 5.0).abs() < 1e-4);
        assert!((cam.zoom() - 1.05).abs() < 1e-4);
        for _ in 0..500 {
            cam.tick();
            assert!(cam.pan().x <= 100.0);
            assert!(cam.zoom() <= 2.0);
        }
        assert!((cam.pan().x - 100.0).abs() < 0.01);
    }

    #[test]
    fn scroll_clamps_target_zoom() {
        let mut cam = Camera::new(800.0, 600.0);
        cam.zoom_by_scroll(-1.0e9);
        assert_eq!(cam.target().zoom, 3.0);
        cam.zoom_by_scroll(1.0e9);
        assert_eq!(cam.target().zoom, 0.5);
        cam.zoom_by_scroll(-100.0);
        assert!((cam.target().zoom - 0.6).abs() < 1e-5);
    }

    #[test]
    fn drag_divides_by_current_zoom() {
        let mut cam = Camera::new(800.0, 600.0);
        cam.apply(CameraTransform { pan: Vec2::ZERO, zoom: 2.0 });
        cam.pan_by_screen_delta(Vec2::new(10.0, -20.0));
        assert!(approx(cam.target().pan, Vec2::new(-5.0, 10.0)));
    }

    #[test]
    fn apply_is_not_clamped() {
        let mut cam = Camera::new(800.0, 600.0);
        cam.apply(CameraTransform { pan: Vec2::ZERO, zoom: 5.0 });
        assert_eq!(cam.zoom(), 5.0);
    }

    #[test]
    fn reset_snaps_current_and_target() {
        let mut cam = Camera::new(800.0, 600.0);
        cam.set_target(Vec2::new(50.0, 50.0), 2.0);
        cam.apply(CameraTransform { pan: Vec2::new(9.0, 9.0), zoom: 4.0 });
        cam.reset();
        assert_eq!(cam.transform(), CameraTransform::IDENTITY);
        assert_eq!(cam.target(), CameraTransform::IDENTITY);
    }

    #[test]
    fn uniform_carries_center() {
        let cam = Camera::new(1000.0, 500.0);
        let u = cam.uniform();
        assert_eq!(std::mem::size_of::<CameraUniform>(), CameraUniform::FLOATS * 4);
        assert_eq!((u.center_x, u.center_y, u.zoom), (500.0, 250.0, 1.0));
    }
}
