// render/dust.rs
//
// Ambient background points. Positions come straight from the noise field,
// so they drift very slowly with the frame counter and never need storing.

use glam::Vec2;

use crate::core::noise::NoiseField;
use crate::render::instance::DustInstance;

const INDEX_STEP: f32 = 0.1;
const TIME_STEP: f32 = 0.0001;
const Y_OFFSET: f32 = 100.0;
const SIZE_OFFSET: f32 = 200.0;
const MAX_SIZE: f32 = 1.5;
const COLOR: [f32; 4] = [200.0 / 255.0, 200.0 / 255.0, 1.0, 150.0 / 255.0];

/// World position of dust point `i` at `frame` on a `width` x `height` canvas.
pub fn dust_position(noise: &NoiseField, i: usize, frame: u64, width: f32, height: f32) -> Vec2 {
    let u = i as f32 * INDEX_STEP;
    let t = frame as f32 * TIME_STEP;
    Vec2::new(
        noise.sample2(u, t) * width,
        noise.sample2(u + Y_OFFSET, t) * height,
    )
}

pub fn dust_size(noise: &NoiseField, i: usize) -> f32 {
    noise.sample1(i as f32 * INDEX_STEP + SIZE_OFFSET) * MAX_SIZE
}

/// Regenerate `count` dust points into `out`.
pub fn build_dust(
    noise: &NoiseField,
    count: usize,
    frame: u64,
    width: f32,
    height: f32,
    out: &mut Vec<DustInstance>,
) {
    out.clear();
    out.extend((0..count).map(|i| {
        let p = dust_position(noise, i, frame, width, height);
        DustInstance {
            x: p.x,
            y: p.y,
            size: dust_size(noise, i),
            r: COLOR[0],
            g: COLOR[1],
            b: COLOR[2],
            a: COLOR[3],
            _pad: 0.0,
        }
    }));
}
