//! Frame clock

/// Source of per-frame elapsed time
pub trait Clock {
    /// Seconds since the previous frame
    fn elapsed_seconds(&mut self) -> f32;
    /// The window (or host) asked the loop to stop
    fn close_requested(&self) -> bool;
}

/// Headless clock: a constant delta for a fixed number of frames
#[derive(Debug, Clone)]
pub struct FixedClock {
    dt: f32,
    remaining: u64,
}

impl FixedClock {
    pub fn new(dt: f32, frames: u64) -> Self {
        Self {
            dt,
            remaining: frames,
        }
    }

    /// `seconds` worth of frames at `fps`
    pub fn for_duration(fps: u32, seconds: f32) -> Self {
        let fps = fps.max(1);
        Self::new(1.0 / fps as f32, (seconds * fps as f32).ceil() as u64)
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Clock for FixedClock {
    fn elapsed_seconds(&mut self) -> f32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.dt
    }

    fn close_requested(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_counts_down() {
        let mut clock = FixedClock::new(0.5, 2);
        assert!(!clock.close_requested());
        assert_eq!(clock.elapsed_seconds(), 0.5);
        assert!(!clock.close_requested());
        clock.elapsed_seconds();
        assert!(clock.close_requested());
    }

    #[test]
    fn test_for_duration() {
        let clock = FixedClock::for_duration(60, 2.0);
        assert_eq!(clock.remaining(), 120);
    }
}
