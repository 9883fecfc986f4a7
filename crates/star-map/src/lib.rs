pub mod api;
pub mod audio;
pub mod config;
pub mod core;
pub mod error;
pub mod explorer;
pub mod galaxy;
pub mod input;
pub mod render;
pub mod view;

// Re-export key types at crate root for convenience
pub use api::types::{event_kind, StarId, ViewEvent};
pub use audio::{tone_amplitude, ToneBank};
pub use config::{CameraParams, GalaxyParams, StarMapConfig, ViewParams};
pub use core::noise::NoiseField;
pub use core::rng::Rng;
pub use core::time::FixedTimestep;
pub use error::ConfigError;
pub use explorer::Explorer;
pub use galaxy::{Galaxy, GalaxyGenerator, GenerationReport, Planet, Star, StarColor};
pub use input::queue::{InputEvent, InputQueue, UiCommand};
pub use render::instance::{DustInstance, PlanetInstance, RenderBuffer, StarInstance};
pub use render::overlay::NAVIGATION_HINTS;
pub use view::camera::{Camera, CameraTransform, CameraUniform};
pub use view::easing::{ease, ease_vec2, lerp, lerp_vec2, Easing};
pub use view::state::{ViewMode, ViewStateMachine};
pub use view::transition::Transition;
