use glam::Vec2;

use crate::api::types::StarId;
use crate::view::camera::Camera;

/// Click tolerance as a multiple of star size. Also the radius of the debug ring.
pub const HIT_RADIUS_SCALE: f32 = 5.0;

/// Converts elapsed seconds into the pulse phase: 0.02 radians per frame at 60 fps.
pub const PULSE_PHASE_PER_SECOND: f64 = 0.02 * 60.0;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl StarColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Channels as normalized floats (r, g, b, a) in [0, 1].
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// A planet in circular orbit around exactly one star.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    /// Orbit radius in screen pixels (detail view is unscaled).
    pub distance: f32,
    pub size: f32,
    pub color: StarColor,
    /// Radians advanced per frame.
    pub angular_speed: f32,
    /// Current orbital angle in radians. Not wrapped; trig handles the period.
    pub angle: f32,
}

impl Planet {
    /// Advance one frame along the orbit.
    #[inline]
    pub fn advance(&mut self) {
        self.angle += self.angular_speed;
    }

    /// Position relative to the parent star.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin()) * self.distance
    }
}

/// A generated star system.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub id: StarId,
    /// World position, fixed at generation time.
    pub position: Vec2,
    pub size: f32,
    pub color: StarColor,
    pub name: String,
    /// Pulsation speed multiplier.
    pub pulse_rate: f32,
    /// Tone frequency in Hz for the audio collaborator.
    pub frequency: f32,
    /// 1 to 5 planets, owned.
    pub planets: Vec<Planet>,
    /// Pulse value in [0, 1] for the current frame. Derived from the clock.
    pub pulse: f32,
}

impl Star {
    #[inline]
    pub fn hit_radius(&self) -> f32 {
        self.size * HIT_RADIUS_SCALE
    }

    /// Pulse at `elapsed` seconds. Pure function of time and pulse rate.
    pub fn pulse_at(&self, elapsed: f64) -> f32 {
        let phase = elapsed * PULSE_PHASE_PER_SECOND * self.pulse_rate as f64;
        ((phase.sin() + 1.0) * 0.5) as f32
    }

    pub fn update_pulse(&mut self, elapsed: f64) {
        self.pulse = self.pulse_at(elapsed);
    }

    pub fn advance_planets(&mut self) {
        for planet in &mut self.planets {
            planet.advance();
        }
    }

    /// Whether a world-space point falls inside the hit circle.
    #[inline]
    pub fn contains(&self, world: Vec2) -> bool {
        self.position.distance(world) < self.hit_radius()
    }

    /// Screen-space distance from the pointer to this star under `camera`.
    pub fn distance_to_pointer(&self, pointer: Vec2, camera: &Camera) -> f32 {
        camera.world_to_screen(self.position).distance(pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::camera::CameraTransform;

    fn star_at(x: f32, y: f32, size: f32) -> Star {
        Star {
            id: StarId(0),
            position: Vec2::new(x, y),
            size,
            color: StarColor::rgb(200, 200, 200),
            name: "Vega Prime".into(),
            pulse_rate: 1.0,
            frequency: 440.0,
            planets: vec![Planet {
                distance: 50.0,
                size: 4.0,
                color: StarColor::rgb(150, 150, 150),
                angular_speed: 0.01,
                angle: 0.0,
            }],
            pulse: 0.0,
        }
    }

    #[test]
    fn hit_radius_is_five_times_size() {
        let star = star_at(0.0, 0.0, 4.0);
        assert_eq!(star.hit_radius(), 20.0);
        assert!(star.contains(Vec2::new(19.9, 0.0)));
        assert!(!star.contains(Vec2::new(20.0, 0.0)));
    }

    #[test]
    fn pulse_is_pure_and_bounded() {
        let star = star_at(0.0, 0.0, 3.0);
        assert!((star.pulse_at(0.0) - 0.5).abs() < 1e-6);
        for i in 0..600 {
            let t = i as f64 / 60.0;
            let p = star.pulse_at(t);
            assert!((0.0..=1.0).contains(&p));
            assert_eq!(p, star.pulse_at(t));
        }
    }

    #[test]
    fn pulse_keeps_moving_on_large_clock() {
        let star = star_at(0.0, 0.0, 3.0);
        let t = 600_000.0;
        assert_ne!(star.pulse_at(t), star.pulse_at(t + 1.0 / 60.0));
    }

    #[test]
    fn planets_advance_by_angular_speed() {
        let mut star = star_at(0.0, 0.0, 3.0);
        for _ in 0..10 {
            star.advance_planets();
        }
        assert!((star.planets[0].angle - 0.1).abs() < 1e-6);
        let offset = star.planets[0].offset();
        assert!((offset.length() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn distance_to_pointer_uses_screen_space() {
        let star = star_at(500.0, 300.0, 3.0);
        let mut cam = Camera::new(800.0, 600.0);
        cam.apply(CameraTransform { pan: Vec2::ZERO, zoom: 2.0 });
        // (500 - 400) * 2 + 400 = 600
        let d = star.distance_to_pointer(Vec2::new(600.0, 300.0), &cam);
        assert!(d.abs() < 1e-4);
    }
}
