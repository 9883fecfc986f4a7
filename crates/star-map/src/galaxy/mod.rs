// galaxy/mod.rs
//
// Procedural star systems: data model, name pools, placement.

pub mod generator;
pub mod names;
pub mod star;

pub use generator::{Galaxy, GalaxyGenerator, GenerationReport, required_separation};
pub use star::{Planet, Star, StarColor, HIT_RADIUS_SCALE};
