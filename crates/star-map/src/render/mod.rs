pub mod build;
pub mod dust;
pub mod instance;
pub mod overlay;

pub use build::build_render_buffer;
pub use dust::build_dust;
pub use instance::{DustInstance, PlanetInstance, RenderBuffer, StarInstance};
pub use overlay::{info_lines, OverlayContext, NAVIGATION_HINTS};
