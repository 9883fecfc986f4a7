// core/mod.rs
//
// Deterministic building blocks: random draws, coherent noise, fixed-step time.

pub mod noise;
pub mod rng;
pub mod time;
