/// Tracks simulation time: a monotonic frame counter and elapsed seconds.
///
/// Frames are driven by wall-clock deltas, so `elapsed` is the only
/// quantity the needs model depends on; the frame number just stamps events.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    frame: u64,
    elapsed: f64,
}

impl FrameClock {
    /// Create a clock at frame 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame of `delta_time` seconds. Returns the new frame number.
    ///
    /// Negative or non-finite deltas still count a frame but add no time.
    pub fn advance(&mut self, delta_time: f32) -> u64 {
        self.frame += 1;
        if delta_time.is_finite() && delta_time > 0.0 {
            self.elapsed += f64::from(delta_time);
        }
        self.frame
    }

    /// Return the current frame number.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Total simulated seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }
}
