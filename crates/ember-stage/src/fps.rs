//! Windowed FPS sampling

/// How often a new reading is produced, in milliseconds
const FPS_UPDATE_INTERVAL_MS: f64 = 200.0;

/// Displayed readings are capped here so a burst of cheap frames does not
/// flash implausible numbers
const FPS_DISPLAY_CAP: u32 = 99;

/// Counts frames and emits an averaged frames-per-second reading at a fixed
/// interval. The caller feeds it timestamps in milliseconds; the first frame
/// only arms the counter and is not counted.
pub struct FpsCounter {
    interval_ms: f64,
    last_time: f64,
    frame_count: u32,
    last_update: f64,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::with_interval(FPS_UPDATE_INTERVAL_MS)
    }

    pub fn with_interval(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_time: 0.0,
            frame_count: 0,
            last_update: 0.0,
        }
    }

    /// Record a frame at `now_ms`. Returns a reading when the sampling
    /// window has elapsed, otherwise `None`.
    pub fn frame(&mut self, now_ms: f64) -> Option<u32> {
        if self.last_time > 0.0 {
            self.frame_count += 1;
        }
        self.last_time = now_ms;
        if self.last_update == 0.0 {
            self.last_update = now_ms;
        }
        if now_ms - self.last_update >= self.interval_ms {
            let elapsed_sec = (now_ms - self.last_update) / 1000.0;
            let fps = if elapsed_sec > 0.0 {
                (self.frame_count as f64 / elapsed_sec).round() as u32
            } else {
                60
            };
            self.frame_count = 0;
            self.last_update = now_ms;
            return Some(fps.min(FPS_DISPLAY_CAP));
        }
        None
    }
}
