// view/easing.rs
//
// Pure easing functions for camera transitions.
// No dependencies on stars or camera state, just math.

use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Easing curve applied to a transition's normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant velocity (no easing).
    Linear,
    /// Slow start and end.
    QuadInOut,
    /// Stronger slow start and end. Used for the overview-to-detail zoom.
    #[default]
    CubicInOut,
    /// Sine wave easing (smooth).
    SineInOut,
}

impl Easing {
    /// Apply the easing function to a normalized time value `t`, clamped to [0, 1].
    /// Every curve here maps 0 to 0, 0.5 to 0.5 and 1 to 1 and is monotonic.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec2 values.
#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}

/// Interpolate Vec2 with easing.
#[inline]
pub fn ease_vec2(a: Vec2, b: Vec2, t: f32, easing: Easing) -> Vec2 {
    lerp_vec2(a, b, easing.apply(t))
}
