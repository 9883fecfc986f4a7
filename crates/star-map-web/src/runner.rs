use star_map::{
    Explorer, FixedTimestep, InputEvent, InputQueue, RenderBuffer, StarMapConfig, UiCommand,
    ViewEvent, NAVIGATION_HINTS,
};

/// Wires the explorer to a browser frame loop.
///
/// Input arrives between frames and is queued; each `tick` applies it, runs
/// the fixed steps the frame time pays for, then repacks the flat buffers the
/// host reads through the pointer accessors.
pub struct ExplorerRunner {
    explorer: Explorer,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    /// Info panel text, newline separated.
    overlay_text: String,
}

impl ExplorerRunner {
    pub fn new(config: StarMapConfig) -> Self {
        let timestep = FixedTimestep::new(config.fixed_dt);
        let explorer = Explorer::new(config);
        let mut runner = Self {
            explorer,
            input: InputQueue::new(),
            render_buffer: RenderBuffer::new(),
            timestep,
            overlay_text: String::new(),
        };
        runner.rebuild_frame_data();
        runner
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Push a UI command by its numeric kind. Unknown kinds are dropped.
    pub fn push_command(&mut self, kind: u32) {
        match UiCommand::from_kind(kind) {
            Some(cmd) => self.input.push(InputEvent::Command(cmd)),
            None => log::warn!("unknown ui command kind {}", kind),
        }
    }

    /// Run one browser frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        // Events describe this frame only
        self.explorer.clear_events();

        for event in self.input.drain() {
            self.explorer.handle(event);
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.explorer.tick(self.timestep.dt());
        }

        self.rebuild_frame_data();
    }

    fn rebuild_frame_data(&mut self) {
        self.explorer.fill_render_buffer(&mut self.render_buffer);
        self.overlay_text = self.explorer.overlay_lines().join("\n");
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    // ---- Pointer accessors for zero-copy reads from wasm memory ----

    pub fn stars_ptr(&self) -> *const f32 {
        self.render_buffer.stars_ptr()
    }

    pub fn star_count(&self) -> u32 {
        self.render_buffer.star_count()
    }

    pub fn planets_ptr(&self) -> *const f32 {
        self.render_buffer.planets_ptr()
    }

    pub fn planet_count(&self) -> u32 {
        self.render_buffer.planet_count()
    }

    pub fn dust_ptr(&self) -> *const f32 {
        self.render_buffer.dust_ptr()
    }

    pub fn dust_count(&self) -> u32 {
        self.render_buffer.dust_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.render_buffer.camera_ptr()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.explorer.events().as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.explorer.events().len() as u32
    }

    pub fn frequencies_ptr(&self) -> *const f32 {
        self.explorer.tones().frequencies_ptr()
    }

    pub fn amplitudes_ptr(&self) -> *const f32 {
        self.explorer.tones().amplitudes_ptr()
    }

    pub fn tone_count(&self) -> u32 {
        self.explorer.tones().len() as u32
    }

    // ---- Scalar accessors ----

    pub fn view_mode(&self) -> u32 {
        self.explorer.mode().code()
    }

    /// Selected star index, or -1.
    pub fn selected_star(&self) -> i32 {
        self.explorer.view().selected().map_or(-1, |id| id.0 as i32)
    }

    pub fn transition_percent(&self) -> u32 {
        self.explorer.progress_percent()
    }

    pub fn debug_enabled(&self) -> bool {
        self.explorer.debug()
    }

    pub fn audio_started(&self) -> bool {
        self.explorer.tones().is_started()
    }

    pub fn overlay_text(&self) -> &str {
        &self.overlay_text
    }

    pub fn navigation_text(&self) -> String {
        NAVIGATION_HINTS.join("\n")
    }

    /// Name of star `index`, empty when out of range.
    pub fn star_name(&self, index: u32) -> String {
        self.explorer
            .stars()
            .get(index as usize)
            .map(|s| s.name.clone())
            .unwrap_or_default()
    }

    pub fn canvas_width(&self) -> f32 {
        self.explorer.camera().width
    }

    pub fn canvas_height(&self) -> f32 {
        self.explorer.camera().height
    }

    pub fn event_stride_floats(&self) -> u32 {
        ViewEvent::FLOATS as u32
    }
}
