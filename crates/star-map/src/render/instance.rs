use bytemuck::{Pod, Zeroable};

use crate::view::camera::CameraUniform;

/// Per-star render data read by the host renderer.
/// 8 floats = 32 bytes stride. Position is in world space; the host applies
/// the camera uniform.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct StarInstance {
    pub x: f32,
    pub y: f32,
    /// Base visual size; the host grows its glow by `pulse`.
    pub size: f32,
    /// Pulse in [0, 1].
    pub pulse: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Click tolerance radius (5 x size), drawn as the debug ring.
    pub hit_radius: f32,
}

impl StarInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// A planet of the selected system, in screen space around the canvas center.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PlanetInstance {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Orbit ring radius.
    pub orbit_radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub angle: f32,
}

impl PlanetInstance {
    pub const FLOATS: usize = 8;
}

/// Non-interactive background point.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DustInstance {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    pub _pad: f32,
}

impl DustInstance {
    pub const FLOATS: usize = 8;
}

/// Everything the host needs to draw one frame.
pub struct RenderBuffer {
    pub stars: Vec<StarInstance>,
    pub planets: Vec<PlanetInstance>,
    pub dust: Vec<DustInstance>,
    pub camera: CameraUniform,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            stars: Vec::with_capacity(128),
            planets: Vec::with_capacity(8),
            dust: Vec::with_capacity(256),
            camera: CameraUniform::default(),
        }
    }

    pub fn clear(&mut self) {
        self.stars.clear();
        self.planets.clear();
        self.dust.clear();
    }

    pub fn star_count(&self) -> u32 {
        self.stars.len() as u32
    }

    pub fn planet_count(&self) -> u32 {
        self.planets.len() as u32
    }

    pub fn dust_count(&self) -> u32 {
        self.dust.len() as u32
    }

    /// Raw pointers for zero-copy reads from wasm memory.
    pub fn stars_ptr(&self) -> *const f32 {
        self.stars.as_ptr() as *const f32
    }

    pub fn planets_ptr(&self) -> *const f32 {
        self.planets.as_ptr() as *const f32
    }

    pub fn dust_ptr(&self) -> *const f32 {
        self.dust.as_ptr() as *const f32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraUniform as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
