use std::time::Instant;

/// Seconds between FPS read-out updates
pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Wall-clock frame timing, used only for the FPS read-out.
/// Scene animation never depends on it.
#[derive(Debug)]
pub struct FrameClock {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
    fps: FpsCounter,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
        }
    }

    /// Record a new frame and return its timing
    pub fn next_frame(&mut self) -> FrameInfo {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;
        if let Some(fps) = self.fps.record(delta) {
            log::debug!("FPS: {:.1}", fps);
        }

        info
    }

    pub fn fps(&self) -> f32 {
        self.fps.fps()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Averages frame rate over a fixed window
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            frames: 0,
            elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Count one frame; returns the new average when the window closes
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed >= self.interval {
            self.fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    /// Last completed average
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_counter_window() {
        let mut counter = FpsCounter::new(1.0);
        // 1/64 sums exactly, so the window closes on the 64th frame
        for _ in 0..63 {
            assert_eq!(counter.record(1.0 / 64.0), None);
        }
        let fps = counter.record(1.0 / 64.0).expect("window closes at one second");
        assert_eq!(fps, 64.0);
        assert_eq!(counter.fps(), 64.0);
    }

    #[test]
    fn test_fps_starts_at_zero() {
        let counter = FpsCounter::new(1.0);
        assert_eq!(counter.fps(), 0.0);
    }

    #[test]
    fn test_frame_clock_numbers_frames() {
        let mut clock = FrameClock::new();
        let a = clock.next_frame();
        let b = clock.next_frame();
        assert_eq!(a.number, 0);
        assert_eq!(b.number, 1);
        assert!(b.time >= a.time);
        assert!(b.delta >= 0.0);
    }
}
