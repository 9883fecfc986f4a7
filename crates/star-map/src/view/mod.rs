pub mod camera;
pub mod easing;
pub mod hit_test;
pub mod state;
pub mod transition;

pub use camera::{Camera, CameraTransform, CameraUniform};
pub use easing::Easing;
pub use state::{ViewMode, ViewStateMachine, ViewUpdate};
pub use transition::Transition;
