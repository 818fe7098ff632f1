use std::time::{Duration, Instant};

/// Monotonic clock driving the animation frame counter.
///
/// Elapsed time excludes paused intervals, so the frame index derived from
/// it freezes while paused and resumes without a jump.
pub struct FrameClock {
    start: Instant,
    paused: bool,
    pause_time: Option<Instant>,
    total_pause_duration: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            paused: false,
            pause_time: None,
            total_pause_duration: Duration::ZERO,
        }
    }

    /// Elapsed unpaused time since the clock started (or was last reset).
    pub fn elapsed(&self) -> Duration {
        match (self.paused, self.pause_time) {
            (true, Some(pause_time)) => {
                pause_time.duration_since(self.start) - self.total_pause_duration
            }
            (true, None) => Duration::ZERO,
            (false, _) => Instant::now().duration_since(self.start) - self.total_pause_duration,
        }
    }

    /// Frame index at the given rate for the current elapsed time.
    pub fn frame_at(&self, fps: u32) -> u64 {
        (self.elapsed().as_secs_f64() * fps as f64) as u64
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.pause_time = Some(Instant::now());
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            if let Some(pause_time) = self.pause_time {
                self.total_pause_duration += Instant::now().duration_since(pause_time);
            }
            self.paused = false;
            self.pause_time = None;
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Restart from frame zero.
    pub fn reset(&mut self) {
        self.start = Instant::now();
        self.paused = false;
        self.pause_time = None;
        self.total_pause_duration = Duration::ZERO;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
