use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::view::easing::Easing;

/// Top-level configuration for an [`Explorer`](crate::explorer::Explorer).
/// Every section has defaults, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarMapConfig {
    /// Canvas width in screen pixels at generation time.
    pub canvas_width: f32,
    /// Canvas height in screen pixels at generation time.
    pub canvas_height: f32,
    /// Fixed simulation step in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Run seed. `None` lets the host pick one (the web bridge draws it from `Math.random`).
    pub seed: Option<u64>,
    pub galaxy: GalaxyParams,
    pub camera: CameraParams,
    pub view: ViewParams,
}

/// Star placement parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyParams {
    /// Number of stars requested from the generator.
    pub star_count: usize,
    /// Placement attempts before the generator gives up.
    pub max_attempts: u32,
    /// Constant part of the minimum distance between two stars.
    pub min_separation: f32,
    /// Stars are kept at least this far from every canvas edge.
    pub edge_margin: f32,
    /// Galaxy radius as a fraction of the smaller canvas dimension.
    pub spread: f32,
    /// Below this fraction of `star_count` a short galaxy is logged as a warning.
    pub short_warning_ratio: f32,
    /// Number of non-interactive background dust points.
    pub background_count: usize,
}

/// User camera limits and smoothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraParams {
    /// Fraction of the remaining distance covered per frame.
    pub smoothing: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// Zoom change per unit of scroll delta (negated: scrolling up zooms in).
    pub scroll_sensitivity: f32,
}

/// View state machine parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewParams {
    /// Overview-to-detail transition length in seconds.
    pub transition_duration: f32,
    /// Zoom reached at the end of the transition. Not subject to the user clamp.
    pub transition_zoom: f32,
    pub transition_easing: Easing,
    /// Clicks above this screen Y belong to the host UI and are ignored.
    pub ui_band_height: f32,
}

impl Default for StarMapConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            fixed_dt: 1.0 / 60.0,
            seed: None,
            galaxy: GalaxyParams::default(),
            camera: CameraParams::default(),
            view: ViewParams::default(),
        }
    }
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            star_count: 100,
            max_attempts: 1000,
            min_separation: 30.0,
            edge_margin: 50.0,
            spread: 0.45,
            short_warning_ratio: 0.8,
            background_count: 200,
        }
    }
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            smoothing: 0.05,
            zoom_min: 0.5,
            zoom_max: 3.0,
            scroll_sensitivity: 0.001,
        }
    }
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            transition_duration: 1.0,
            transition_zoom: 5.0,
            transition_easing: Easing::CubicInOut,
            ui_band_height: 150.0,
        }
    }
}

impl StarMapConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: StarMapConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Default config for a given canvas size.
    pub fn for_canvas(width: f32, height: f32) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_star_count(mut self, count: usize) -> Self {
        self.galaxy.star_count = count;
        self
    }

    /// Check value ranges that would otherwise produce NaNs or a frozen view.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("canvas_width", self.canvas_width)?;
        positive("canvas_height", self.canvas_height)?;
        positive("fixed_dt", self.fixed_dt)?;

        let g = &self.galaxy;
        non_negative("galaxy.min_separation", g.min_separation)?;
        non_negative("galaxy.edge_margin", g.edge_margin)?;
        non_negative("galaxy.spread", g.spread)?;
        if !(0.0..=1.0).contains(&g.short_warning_ratio) {
            return Err(ConfigError::invalid(
                "galaxy.short_warning_ratio",
                format!("must be within [0, 1], got {}", g.short_warning_ratio),
            ));
        }

        let c = &self.camera;
        if !(c.smoothing > 0.0 && c.smoothing <= 1.0) {
            return Err(ConfigError::invalid(
                "camera.smoothing",
                format!("must be within (0, 1], got {}", c.smoothing),
            ));
        }
        positive("camera.zoom_min", c.zoom_min)?;
        positive("camera.zoom_max", c.zoom_max)?;
        if c.zoom_min > c.zoom_max {
            return Err(ConfigError::invalid(
                "camera.zoom_min",
                format!("{} is greater than zoom_max {}", c.zoom_min, c.zoom_max),
            ));
        }

        let v = &self.view;
        positive("view.transition_duration", v.transition_duration)?;
        positive("view.transition_zoom", v.transition_zoom)?;
        non_negative("view.ui_band_height", v.ui_band_height)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive, got {}", value)))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be non-negative, got {}", value)))
    }
}
