pub mod runner;

pub use runner::ExplorerRunner;

use std::cell::RefCell;

use star_map::{InputEvent, StarMapConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<ExplorerRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut ExplorerRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Explorer not initialized. Call game_init() first.");
        f(runner)
    })
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Seed for a fresh universe on every page load.
fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

fn install(mut config: StarMapConfig) {
    if config.seed.is_none() {
        config.seed = Some(random_seed());
    }
    let runner = ExplorerRunner::new(config);
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("star-map: initialized");
}

#[wasm_bindgen]
pub fn game_init(width: f32, height: f32) {
    init_logging();
    install(StarMapConfig::for_canvas(width, height));
}

/// Initialize from a JSON config. Canvas size always comes from the page.
/// A rejected config is logged and replaced by the defaults.
#[wasm_bindgen]
pub fn game_init_with_config(json: &str, width: f32, height: f32) {
    init_logging();
    let mut config = match StarMapConfig::from_json(json) {
        Ok(config) => config,
        Err(err) => {
            log::error!("star-map: {}; using defaults", err);
            StarMapConfig::default()
        }
    };
    config.canvas_width = width;
    config.canvas_height = height;
    install(config);
}

#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn game_click(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::Click { x, y }));
}

#[wasm_bindgen]
pub fn game_drag(dx: f32, dy: f32) {
    with_runner(|r| r.push_input(InputEvent::Drag { dx, dy }));
}

#[wasm_bindgen]
pub fn game_scroll(delta: f32) {
    with_runner(|r| r.push_input(InputEvent::Scroll { delta }));
}

#[wasm_bindgen]
pub fn game_resize(width: f32, height: f32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

#[wasm_bindgen]
pub fn game_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

/// 1 = start audio, 2 = toggle debug, 3 = show first system, 4 = return to galaxy.
#[wasm_bindgen]
pub fn game_command(kind: u32) {
    with_runner(|r| r.push_command(kind));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_stars_ptr() -> *const f32 {
    with_runner(|r| r.stars_ptr())
}

#[wasm_bindgen]
pub fn get_star_count() -> u32 {
    with_runner(|r| r.star_count())
}

#[wasm_bindgen]
pub fn get_planets_ptr() -> *const f32 {
    with_runner(|r| r.planets_ptr())
}

#[wasm_bindgen]
pub fn get_planet_count() -> u32 {
    with_runner(|r| r.planet_count())
}

#[wasm_bindgen]
pub fn get_dust_ptr() -> *const f32 {
    with_runner(|r| r.dust_ptr())
}

#[wasm_bindgen]
pub fn get_dust_count() -> u32 {
    with_runner(|r| r.dust_count())
}

#[wasm_bindgen]
pub fn get_camera_ptr() -> *const f32 {
    with_runner(|r| r.camera_ptr())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len())
}

#[wasm_bindgen]
pub fn get_event_stride() -> u32 {
    with_runner(|r| r.event_stride_floats())
}

#[wasm_bindgen]
pub fn get_frequencies_ptr() -> *const f32 {
    with_runner(|r| r.frequencies_ptr())
}

#[wasm_bindgen]
pub fn get_amplitudes_ptr() -> *const f32 {
    with_runner(|r| r.amplitudes_ptr())
}

#[wasm_bindgen]
pub fn get_tone_count() -> u32 {
    with_runner(|r| r.tone_count())
}

#[wasm_bindgen]
pub fn get_view_mode() -> u32 {
    with_runner(|r| r.view_mode())
}

#[wasm_bindgen]
pub fn get_selected_star() -> i32 {
    with_runner(|r| r.selected_star())
}

#[wasm_bindgen]
pub fn get_transition_percent() -> u32 {
    with_runner(|r| r.transition_percent())
}

#[wasm_bindgen]
pub fn get_debug_enabled() -> bool {
    with_runner(|r| r.debug_enabled())
}

#[wasm_bindgen]
pub fn get_audio_started() -> bool {
    with_runner(|r| r.audio_started())
}

#[wasm_bindgen]
pub fn get_overlay_text() -> String {
    with_runner(|r| r.overlay_text().to_string())
}

#[wasm_bindgen]
pub fn get_navigation_text() -> String {
    with_runner(|r| r.navigation_text())
}

#[wasm_bindgen]
pub fn get_star_name(index: u32) -> String {
    with_runner(|r| r.star_name(index))
}

#[wasm_bindgen]
pub fn get_canvas_width() -> f32 {
    with_runner(|r| r.canvas_width())
}

#[wasm_bindgen]
pub fn get_canvas_height() -> f32 {
    with_runner(|r| r.canvas_height())
}
