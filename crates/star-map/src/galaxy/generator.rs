//! Rejection-sampling star placement.
//!
//! Candidate positions walk a noise-driven spiral: attempt `i` takes its angle
//! from `noise(i * 0.1)` and its radius from `noise(i * 0.05 + 100)`, so
//! consecutive candidates drift smoothly and trace arm-like structures. A
//! candidate is discarded when it lands too close to any accepted star. The
//! attempt budget is fixed; running out is reported, never an error.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::api::types::StarId;
use crate::config::GalaxyParams;
use crate::core::noise::NoiseField;
use crate::core::rng::Rng;
use crate::galaxy::names;
use crate::galaxy::star::{Planet, Star, StarColor};

/// Noise input step per attempt for the candidate angle.
const ANGLE_NOISE_STEP: f32 = 0.1;
/// Full turns covered by the angle noise range.
const ANGLE_TURNS: f32 = 4.0;
/// Noise input step per attempt for the candidate radius.
const RADIUS_NOISE_STEP: f32 = 0.05;
/// Offsets the radius channel away from the angle channel.
const RADIUS_NOISE_OFFSET: f32 = 100.0;

const STAR_SIZE: (f32, f32) = (2.0, 6.0);
const STAR_CHANNEL: (u32, u32) = (150, 255);
const PULSE_RATE: (f32, f32) = (0.5, 2.0);
const FREQUENCY_HZ: (f32, f32) = (200.0, 800.0);

const PLANET_COUNT: (u32, u32) = (1, 5);
const PLANET_DISTANCE: (f32, f32) = (20.0, 100.0);
const PLANET_SIZE: (f32, f32) = (2.0, 8.0);
const PLANET_CHANNEL: (u32, u32) = (100, 255);
const PLANET_SPEED: (f32, f32) = (0.005, 0.02);

/// Outcome counters of one generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationReport {
    pub requested: usize,
    pub placed: usize,
    pub attempts: u32,
    pub max_attempts: u32,
    /// Fraction of `requested` below which the shortfall is worth a warning.
    pub warning_ratio: f32,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.placed >= self.requested
    }

    pub fn is_short(&self) -> bool {
        self.placed < self.requested
    }

    /// True when the galaxy came out noticeably sparser than requested.
    pub fn below_warning_threshold(&self) -> bool {
        (self.placed as f32) < self.requested as f32 * self.warning_ratio
    }
}

/// Generated stars plus the report describing how placement went.
#[derive(Debug, Clone)]
pub struct Galaxy {
    pub stars: Vec<Star>,
    pub report: GenerationReport,
}

/// Minimum distance between a candidate and an already accepted star.
///
/// Deliberately asymmetric: the constant margin is added to the candidate's
/// size, then the existing star's size on top.
#[inline]
pub fn required_separation(margin: f32, candidate_size: f32, existing_size: f32) -> f32 {
    (margin + candidate_size) + existing_size
}

/// Produces non-overlapping stars on a canvas.
pub struct GalaxyGenerator<'a> {
    noise: &'a NoiseField,
    rng: &'a mut Rng,
    params: GalaxyParams,
}

impl<'a> GalaxyGenerator<'a> {
    pub fn new(noise: &'a NoiseField, rng: &'a mut Rng) -> Self {
        Self {
            noise,
            rng,
            params: GalaxyParams::default(),
        }
    }

    pub fn with_params(mut self, params: GalaxyParams) -> Self {
        self.params = params;
        self
    }

    /// Place up to `target_count` stars on a `width` x `height` canvas.
    pub fn generate(&mut self, target_count: usize, width: f32, height: f32) -> Galaxy {
        let mut stars: Vec<Star> = Vec::with_capacity(target_count);
        let mut attempts = 0u32;

        while stars.len() < target_count && attempts < self.params.max_attempts {
            attempts += 1;

            let position = self.candidate_position(attempts, width, height);
            let size = self.rng.range(STAR_SIZE.0, STAR_SIZE.1);

            let margin = self.params.min_separation;
            let blocked = stars.iter().any(|other| {
                position.distance(other.position) < required_separation(margin, size, other.size)
            });
            if blocked {
                continue;
            }

            let id = StarId(stars.len() as u32);
            let star = self.build_star(id, position, size);
            stars.push(star);
        }

        let report = GenerationReport {
            requested: target_count,
            placed: stars.len(),
            attempts,
            max_attempts: self.params.max_attempts,
            warning_ratio: self.params.short_warning_ratio,
        };

        if report.below_warning_threshold() {
            log::warn!(
                "galaxy: only placed {}/{} stars after {} attempts",
                report.placed, report.requested, report.attempts
            );
        } else if report.is_short() {
            log::info!(
                "galaxy: placed {}/{} stars (attempt budget of {} exhausted)",
                report.placed, report.requested, report.max_attempts
            );
        } else {
            log::info!(
                "galaxy: placed {} stars in {} attempts",
                report.placed, report.attempts
            );
        }

        Galaxy { stars, report }
    }

    /// Noise-driven polar candidate around the canvas center, kept off the edges.
    fn candidate_position(&self, attempt: u32, width: f32, height: f32) -> Vec2 {
        let i = attempt as f32;
        let angle = self.noise.sample1(i * ANGLE_NOISE_STEP) * TAU * ANGLE_TURNS;
        let radius = self.noise.sample1(i * RADIUS_NOISE_STEP + RADIUS_NOISE_OFFSET)
            * width.min(height)
            * self.params.spread;

        let center = Vec2::new(width / 2.0, height / 2.0);
        let raw = center + Vec2::new(angle.cos(), angle.sin()) * radius;

        let margin = self.params.edge_margin;
        Vec2::new(
            clamp_to_margin(raw.x, width, margin),
            clamp_to_margin(raw.y, height, margin),
        )
    }

    fn build_star(&mut self, id: StarId, position: Vec2, size: f32) -> Star {
        let color = self.random_color(STAR_CHANNEL);
        let name = names::random_name(self.rng);
        let pulse_rate = self.rng.range(PULSE_RATE.0, PULSE_RATE.1);
        let frequency = self.rng.range(FREQUENCY_HZ.0, FREQUENCY_HZ.1);

        let planet_count = self.rng.range_inclusive(PLANET_COUNT.0, PLANET_COUNT.1);
        let planets = (0..planet_count).map(|_| self.random_planet()).collect();

        Star {
            id,
            position,
            size,
            color,
            name,
            pulse_rate,
            frequency,
            planets,
            pulse: 0.0,
        }
    }

    fn random_planet(&mut self) -> Planet {
        Planet {
            distance: self.rng.range(PLANET_DISTANCE.0, PLANET_DISTANCE.1),
            size: self.rng.range(PLANET_SIZE.0, PLANET_SIZE.1),
            color: self.random_color(PLANET_CHANNEL),
            angular_speed: self.rng.range(PLANET_SPEED.0, PLANET_SPEED.1),
            // `range` can round up to its upper bound; fold TAU back onto 0.
            angle: self.rng.range(0.0, TAU) % TAU,
        }
    }

    fn random_color(&mut self, (lo, hi): (u32, u32)) -> StarColor {
        StarColor::rgb(
            self.rng.range_inclusive(lo, hi) as u8,
            self.rng.range_inclusive(lo, hi) as u8,
            self.rng.range_inclusive(lo, hi) as u8,
        )
    }
}

/// Clamp into `[margin, extent - margin]`; collapse to the middle when the canvas is too small.
#[inline]
fn clamp_to_margin(v: f32, extent: f32, margin: f32) -> f32 {
    let lo = margin;
    let hi = extent - margin;
    if hi < lo {
        extent / 2.0
    } else {
        v.clamp(lo, hi)
    }
}
