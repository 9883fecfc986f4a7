//! Per-star tone levels for the host's oscillators.
//!
//! Nothing here plays sound. The bank holds one frequency and one amplitude
//! per star; the host reads both buffers each frame and drives its own
//! oscillators with them.

use glam::Vec2;

use crate::galaxy::star::Star;
use crate::view::camera::Camera;

/// Loudest a single tone gets, reached with the pointer right on the star.
pub const MAX_AMPLITUDE: f32 = 0.2;
/// Screen distance at which a tone fades to silence.
pub const AUDIBLE_DISTANCE: f32 = 200.0;

/// Amplitude for a star `distance` screen pixels from the pointer.
///
/// Linear falloff from [`MAX_AMPLITUDE`] at 0 to 0 at [`AUDIBLE_DISTANCE`],
/// scaled by the star's current pulse.
#[inline]
pub fn tone_amplitude(distance: f32, pulse: f32) -> f32 {
    let level = MAX_AMPLITUDE * (1.0 - distance / AUDIBLE_DISTANCE);
    level.clamp(0.0, MAX_AMPLITUDE) * pulse
}

#[derive(Debug, Clone, Default)]
pub struct ToneBank {
    frequencies: Vec<f32>,
    amplitudes: Vec<f32>,
    started: bool,
}

impl ToneBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create one silent tone per star. Returns false if already started.
    pub fn start(&mut self, stars: &[Star]) -> bool {
        if self.started {
            return false;
        }
        self.frequencies = stars.iter().map(|s| s.frequency).collect();
        self.amplitudes = vec![0.0; stars.len()];
        self.started = true;
        log::info!("audio: started {} tones", stars.len());
        true
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Recompute every amplitude from the pointer position.
    pub fn update(&mut self, stars: &[Star], camera: &Camera, pointer: Vec2) {
        if !self.started {
            return;
        }
        for (amp, star) in self.amplitudes.iter_mut().zip(stars) {
            *amp = tone_amplitude(star.distance_to_pointer(pointer, camera), star.pulse);
        }
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn frequencies(&self) -> &[f32] {
        &self.frequencies
    }

    pub fn amplitudes(&self) -> &[f32] {
        &self.amplitudes
    }

    pub fn frequencies_ptr(&self) -> *const f32 {
        self.frequencies.as_ptr()
    }

    pub fn amplitudes_ptr(&self) -> *const f32 {
        self.amplitudes.as_ptr()
    }
}
