/// Fixed timestep accumulator.
/// Per-frame constants (camera smoothing, planet angular speed) assume 60
/// steps per second, so the runner feeds variable frame time through this.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Total fixed steps handed out so far.
    steps_taken: u64,
}

/// Upper bound on steps per frame (avoids a spiral of death after a stall).
pub const MAX_STEPS_PER_FRAME: u32 = 10;

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            steps_taken: 0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if frame_dt.is_nan() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * MAX_STEPS_PER_FRAME as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        self.steps_taken += steps as u64;
        steps
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }
}
