//! The star map controller.
//!
//! `Explorer` owns the generated galaxy and every piece of per-frame state.
//! Hosts feed it input through the `on_*` entry points (or [`Explorer::handle`])
//! and advance it with [`Explorer::tick`] at a fixed step.

use glam::Vec2;

use crate::api::types::{StarId, ViewEvent};
use crate::audio::ToneBank;
use crate::config::StarMapConfig;
use crate::core::noise::NoiseField;
use crate::core::rng::Rng;
use crate::galaxy::generator::{GalaxyGenerator, GenerationReport};
use crate::galaxy::star::Star;
use crate::input::queue::{InputEvent, UiCommand};
use crate::render::build::build_render_buffer;
use crate::render::dust::build_dust;
use crate::render::instance::RenderBuffer;
use crate::render::overlay::{info_lines, OverlayContext};
use crate::view::camera::Camera;
use crate::view::hit_test;
use crate::view::state::{ViewMode, ViewStateMachine, ViewUpdate};

/// Seed used when the config does not carry one.
pub const DEFAULT_SEED: u64 = 42;

/// Decorrelates the attribute stream from the noise lattice built on the same seed.
const ATTRIBUTE_SEED_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

pub struct Explorer {
    config: StarMapConfig,
    seed: u64,
    noise: NoiseField,
    stars: Vec<Star>,
    report: GenerationReport,
    camera: Camera,
    view: ViewStateMachine,
    tones: ToneBank,
    debug: bool,
    pointer: Vec2,
    /// Simulation clock in seconds. f64: it must keep resolving 1/60 s steps after weeks of uptime.
    elapsed: f64,
    frame: u64,
    events: Vec<ViewEvent>,
}

impl Explorer {
    /// Generate a galaxy for `config` and start in the overview.
    pub fn new(config: StarMapConfig) -> Self {
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        let noise = NoiseField::new(seed);
        let mut rng = Rng::new(seed ^ ATTRIBUTE_SEED_MIX);

        let galaxy = GalaxyGenerator::new(&noise, &mut rng)
            .with_params(config.galaxy.clone())
            .generate(config.galaxy.star_count, config.canvas_width, config.canvas_height);

        let mut events = Vec::new();
        if galaxy.report.below_warning_threshold() {
            events.push(ViewEvent::generation_short(
                galaxy.report.placed,
                galaxy.report.requested,
            ));
        }

        let camera = Camera::with_params(config.canvas_width, config.canvas_height, &config.camera);
        let view = ViewStateMachine::new(config.view.clone());

        log::info!(
            "explorer: seed {} on {}x{} canvas, {} stars",
            seed,
            config.canvas_width,
            config.canvas_height,
            galaxy.stars.len()
        );

        Self {
            config,
            seed,
            noise,
            stars: galaxy.stars,
            report: galaxy.report,
            camera,
            view,
            tones: ToneBank::new(),
            debug: false,
            pointer: Vec2::ZERO,
            elapsed: 0.0,
            frame: 0,
            events,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(StarMapConfig::default().with_seed(seed))
    }

    // -- Input --

    /// Route a queued input event to its entry point.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Click { x, y } => self.on_click(x, y),
            InputEvent::Drag { dx, dy } => self.on_drag_delta(dx, dy),
            InputEvent::Scroll { delta } => self.on_scroll(delta),
            InputEvent::Resize { width, height } => self.on_resize(width, height),
            InputEvent::PointerMove { x, y } => self.on_pointer_move(x, y),
            InputEvent::Command(cmd) => self.command(cmd),
        }
    }

    pub fn on_click(&mut self, x: f32, y: f32) {
        log::debug!("click at {}, {}", x, y);

        if y < self.config.view.ui_band_height {
            return;
        }

        match self.view.mode() {
            ViewMode::Overview => {
                let screen = Vec2::new(x, y);
                let Some(id) = hit_test::resolve(&self.stars, screen, &self.camera) else {
                    log::debug!(
                        "no star under click (world {:?})",
                        self.camera.screen_to_world(screen)
                    );
                    return;
                };
                let star = &self.stars[id.index()];
                log::debug!("clicked star {} at {:?}", star.name, star.position);
                if self.view.begin_transition(star, &self.camera, self.elapsed) {
                    self.events.push(ViewEvent::star_selected(id));
                }
            }
            ViewMode::TransitioningToDetail => {}
            ViewMode::Detail => self.return_to_overview(),
        }
    }

    pub fn on_drag_delta(&mut self, dx: f32, dy: f32) {
        if self.view.accepts_navigation() {
            self.camera.pan_by_screen_delta(Vec2::new(dx, dy));
        }
    }

    pub fn on_scroll(&mut self, delta: f32) {
        if self.view.accepts_navigation() {
            self.camera.zoom_by_scroll(delta);
        }
    }

    /// Only the viewport changes; star world positions stay where they were generated.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) {
            log::warn!("ignoring resize to {}x{}", width, height);
            return;
        }
        self.camera.resize(width, height);
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn command(&mut self, cmd: UiCommand) {
        match cmd {
            UiCommand::StartAudio => {
                if self.tones.start(&self.stars) {
                    self.events.push(ViewEvent::audio_started(self.tones.len()));
                }
            }
            UiCommand::ToggleDebug => {
                self.debug = !self.debug;
                log::info!("debug mode {}", if self.debug { "on" } else { "off" });
                self.events.push(ViewEvent::debug_toggled(self.debug));
            }
            UiCommand::ShowFirstSystem => {
                if self.stars.is_empty() {
                    return;
                }
                let first = StarId(0);
                if self.view.enter_detail_immediately(first, &mut self.camera) {
                    self.events.push(ViewEvent::entered_detail(first));
                }
            }
            UiCommand::ReturnToGalaxy => self.return_to_overview(),
        }
    }

    fn return_to_overview(&mut self) {
        if self.view.return_to_overview() {
            self.events.push(ViewEvent::returned_to_overview());
        }
    }

    // -- Simulation --

    /// Advance one fixed step of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt as f64;
        self.frame += 1;

        for star in &mut self.stars {
            star.update_pulse(self.elapsed);
            star.advance_planets();
        }

        if let ViewUpdate::EnteredDetail(id) = self.view.update(self.elapsed, &mut self.camera) {
            self.events.push(ViewEvent::entered_detail(id));
        }

        if self.view.mode() == ViewMode::Overview {
            self.tones.update(&self.stars, &self.camera, self.pointer);
        }
    }

    /// Pack the current frame into `buffer`. Dust is skipped in the detail view.
    pub fn fill_render_buffer(&self, buffer: &mut RenderBuffer) {
        build_render_buffer(&self.stars, &self.view, &self.camera, buffer);
        if self.view.mode() == ViewMode::Detail {
            buffer.dust.clear();
        } else {
            build_dust(
                &self.noise,
                self.config.galaxy.background_count,
                self.frame,
                self.camera.width,
                self.camera.height,
                &mut buffer.dust,
            );
        }
    }

    /// Star the overlay talks about: the selected one, or the transition target.
    pub fn focus(&self) -> Option<&Star> {
        self.view
            .selected()
            .or_else(|| self.view.transition().map(|t| t.target))
            .and_then(|id| self.star(id))
    }

    pub fn overlay_lines(&self) -> Vec<String> {
        info_lines(&OverlayContext {
            mode: self.view.mode(),
            star_count: self.stars.len(),
            focus: self.focus(),
            progress_percent: self.progress_percent(),
            debug: self.debug,
            pointer: self.pointer,
            camera: self.camera.transform(),
        })
    }

    pub fn progress_percent(&self) -> u32 {
        self.view
            .transition()
            .map_or(0, |t| t.percent(self.elapsed))
    }

    // -- Accessors --

    pub fn config(&self) -> &StarMapConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn star(&self, id: StarId) -> Option<&Star> {
        self.stars.get(id.index())
    }

    pub fn report(&self) -> &GenerationReport {
        &self.report
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn view(&self) -> &ViewStateMachine {
        &self.view
    }

    pub fn mode(&self) -> ViewMode {
        self.view.mode()
    }

    pub fn tones(&self) -> &ToneBank {
        &self.tones
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}
