// Match clock, one step per wall-clock second

/// Seconds on the clock at match start
pub const MATCH_SECONDS: u32 = 100;

/// Result of a clock step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// Clock moved down and still has time left
    Running(u32),
    /// Clock reached zero on this step
    Expired,
    /// Clock was already stopped or expired
    Idle,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            running: seconds > 0,
        }
    }

    /// Count one second down
    pub fn tick(&mut self) -> CountdownTick {
        if !self.running {
            return CountdownTick::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            CountdownTick::Expired
        } else {
            CountdownTick::Running(self.remaining)
        }
    }

    /// Cancel the clock, keeping the value shown
    pub fn stop(&mut self) {
        self.running = false;
    }

    #[allow(dead_code)]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[allow(dead_code)]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(MATCH_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_expiry() {
        let mut clock = Countdown::default();
        assert_eq!(clock.remaining(), 100);

        assert_eq!(clock.tick(), CountdownTick::Running(99));
        for _ in 0..98 {
            clock.tick();
        }
        assert_eq!(clock.remaining(), 1);
        assert_eq!(clock.tick(), CountdownTick::Expired);
        assert_eq!(clock.remaining(), 0);
        assert!(!clock.is_running());
        assert_eq!(clock.tick(), CountdownTick::Idle);
    }

    #[test]
    fn test_stop_freezes_value() {
        let mut clock = Countdown::new(10);
        clock.tick();
        clock.stop();
        assert_eq!(clock.tick(), CountdownTick::Idle);
        assert_eq!(clock.remaining(), 9);
    }
}
