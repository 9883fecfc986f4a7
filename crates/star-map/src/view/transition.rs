// view/transition.rs
//
// Timed camera flight from the overview onto one star.
// Progress is a function of wall-clock time, not of frame count, so a slow
// frame never stretches the animation.
//
// Usage:
//   let t = Transition::toward(star, &camera, now, &view_params);
//   camera.apply(t.sample(later));
//   if t.is_complete(later) { /* enter detail */ }

use glam::Vec2;

use crate::api::types::StarId;
use crate::config::ViewParams;
use crate::galaxy::star::Star;
use crate::view::camera::{Camera, CameraTransform};
use crate::view::easing::{ease, ease_vec2, Easing};

/// An in-flight overview-to-detail animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Star being flown to.
    pub target: StarId,
    /// Clock time at which the transition began, in seconds.
    pub started_at: f64,
    /// Duration in seconds.
    pub duration: f32,
    /// Camera snapshot taken at the start.
    pub from: CameraTransform,
    /// Final camera values.
    pub to: CameraTransform,
    pub easing: Easing,
}

/// Pan that puts `world` at the canvas center at the given zoom.
#[inline]
pub fn centering_pan(world: Vec2, center: Vec2, zoom: f32) -> Vec2 {
    (world - center) * zoom
}

impl Transition {
    /// Start a flight toward `star` from wherever `camera` is right now.
    pub fn toward(star: &Star, camera: &Camera, now: f64, params: &ViewParams) -> Self {
        let zoom = params.transition_zoom;
        Self {
            target: star.id,
            started_at: now,
            duration: params.transition_duration,
            from: camera.transform(),
            to: CameraTransform {
                pan: centering_pan(star.position, camera.center(), zoom),
                zoom,
            },
            easing: params.transition_easing,
        }
    }

    /// Raw progress in [0, 1]. A non-positive duration is complete immediately.
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration as f64).clamp(0.0, 1.0) as f32
    }

    /// Progress as a whole percentage, for the overlay. Reaches 100 only once complete.
    pub fn percent(&self, now: f64) -> u32 {
        if self.is_complete(now) {
            return 100;
        }
        ((self.progress(now) * 100.0).floor() as u32).min(99)
    }

    pub fn is_complete(&self, now: f64) -> bool {
        now - self.started_at >= self.duration as f64
    }

    /// Eased camera values at `now`.
    pub fn sample(&self, now: f64) -> CameraTransform {
        let t = self.progress(now);
        if t <= 0.0 {
            return self.from;
        }
        CameraTransform {
            pan: ease_vec2(self.from.pan, self.to.pan, t, self.easing),
            zoom: ease(self.from.zoom, self.to.zoom, t, self.easing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galaxy::star::StarColor;

    fn star(x: f32, y: f32) -> Star {
        Star {
            id: StarId(7),
            position: Vec2::new(x, y),
            size: 3.0,
            color: StarColor::rgb(255, 200, 180),
            name: "Rigel Major".into(),
            pulse_rate: 1.0,
            frequency: 500.0,
            planets: Vec::new(),
            pulse: 0.0,
        }
    }

    fn flight(now: f64) -> (Camera, Transition) {
        let mut cam = Camera::new(800.0, 600.0);
        cam.apply(CameraTransform { pan: Vec2::new(12.5, -3.0), zoom: 1.7 });
        let t = Transition::toward(&star(600.0, 200.0), &cam, now, &ViewParams::default());
        (cam, t)
    }

    #[test]
    fn sample_at_start_is_exact_snapshot() {
        let (cam, t) = flight(3.25);
        assert_eq!(t.sample(3.25), cam.transform());
        assert_eq!(t.sample(0.0), cam.transform());
    }

    #[test]
    fn destination_centers_the_star() {
        let (cam, t) = flight(0.0);
        let mut end = cam.clone();
        end.apply(t.sample(1.0));
        let screen = end.world_to_screen(Vec2::new(600.0, 200.0));
        assert!((screen - cam.center()).length() < 1e-3);
        assert_eq!(t.to.zoom, 5.0);
    }

    #[test]
    fn progress_is_clamped_and_time_based() {
        let (_, t) = flight(10.0);
        assert_eq!(t.progress(9.0), 0.0);
        assert!((t.progress(10.5) - 0.5).abs() < 1e-6);
        assert_eq!(t.progress(12.0), 1.0);
        assert_eq!(t.percent(10.5), 50);
        assert!(!t.is_complete(10.99));
        assert!(t.is_complete(11.0));
    }

    #[test]
    fn percent_reaches_100_only_when_complete() {
        let (_, t) = flight(10.0);
        assert_eq!(t.percent(10.996), 99);
        assert!(!t.is_complete(10.996));
        assert_eq!(t.percent(11.0), 100);
    }

    #[test]
    fn progress_resolves_steps_on_large_clock() {
        let (_, t) = flight(600_000.0);
        let step = 1.0 / 60.0;
        let a = t.progress(600_000.0 + step);
        let b = t.progress(600_000.0 + 2.0 * step);
        assert!(a > 0.0 && b > a);
        assert!(t.is_complete(600_001.0));
    }

    #[test]
    fn cubic_midpoint_is_halfway() {
        let (_, t) = flight(0.0);
        let mid = t.sample(0.5);
        assert!((mid.zoom - (t.from.zoom + t.to.zoom) / 2.0).abs() < 1e-4);
    }

    #[test]
    fn zero_duration_completes_at_once() {
        let params = ViewParams { transition_duration: 0.0, ..ViewParams::default() };
        let cam = Camera::new(800.0, 600.0);
        let t = Transition::toward(&star(100.0, 100.0), &cam, 2.0, &params);
        assert_eq!(t.progress(2.0), 1.0);
        assert!(t.is_complete(2.0));
    }
}
