/// Converts variable frame time into whole simulation ticks.
///
/// Orbital speeds are expressed per tick, so ticks run at a fixed rate
/// regardless of display refresh. Elapsed wall time is tracked separately
/// for the background field, which animates continuously.
pub struct TickClock {
    /// Seconds per tick.
    dt: f32,
    /// Time carried over between frames.
    accumulator: f32,
    /// Total wall-clock seconds since the session started.
    elapsed: f64,
    /// Ticks run since the session started.
    ticks: u64,
}

/// Upper bound on ticks per frame so a stalled tab does not fast-forward.
const MAX_TICKS_PER_FRAME: u32 = 10;

impl TickClock {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            elapsed: 0.0,
            ticks: 0,
        }
    }

    /// Add frame time. Returns the number of ticks to run this frame.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = frame_dt.max(0.0);
        self.elapsed += frame_dt as f64;
        self.accumulator = (self.accumulator + frame_dt).min(self.dt * MAX_TICKS_PER_FRAME as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        self.ticks += steps as u64;
        steps
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Seconds since start, as fed to the background field.
    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
