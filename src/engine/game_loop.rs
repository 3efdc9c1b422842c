/// Game loop timing
///
/// Gameplay runs on a fixed 60 Hz tick regardless of the display refresh
/// rate; a separate wall-clock accumulator emits whole seconds for the match
/// countdown.
use std::time::{Duration, Instant};

/// Target update rate (60 ticks per second)
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Countdown period
const SECOND: Duration = Duration::from_secs(1);

/// Maximum number of updates per frame to prevent spiral of death
const MAX_UPDATES_PER_FRAME: u32 = 5;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Work due for one rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameSteps {
    /// Fixed gameplay ticks to run
    pub updates: u32,
    /// Whole wall-clock seconds elapsed since the previous frame
    pub seconds: u32,
}

/// Game loop timing state
pub struct GameLoop {
    /// Accumulated time for fixed timestep updates
    accumulator: Duration,

    /// Accumulated time towards the next countdown second
    second_accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Total updates executed
    update_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            accumulator: Duration::ZERO,
            second_accumulator: Duration::ZERO,
            last_frame_time: now,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            update_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returning the ticks and seconds that are due
    pub fn begin_frame(&mut self) -> FrameSteps {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for `frame_time` of elapsed wall-clock time
    fn advance(&mut self, frame_time: Duration) -> FrameSteps {
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        self.accumulator += frame_time;
        let mut updates = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && updates < MAX_UPDATES_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            updates += 1;
        }
        // Drop the backlog a stalled frame left behind
        if updates == MAX_UPDATES_PER_FRAME {
            self.accumulator = self.accumulator.min(FIXED_TIMESTEP_DURATION);
        }
        self.update_count += updates as u64;

        // The countdown follows the wall clock even when ticks were dropped
        self.second_accumulator += frame_time;
        let mut seconds = 0;
        while self.second_accumulator >= SECOND {
            self.second_accumulator -= SECOND;
            seconds += 1;
        }

        FrameSteps { updates, seconds }
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total number of frames rendered
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of updates executed
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.update_count(), 0);
        assert!((FIXED_TIMESTEP_DURATION.as_secs_f32() - 1.0 / 60.0).abs() < 0.0001);
    }

    #[test]
    fn test_one_tick_per_timestep() {
        let mut game_loop = GameLoop::new();
        let steps = game_loop.advance(FIXED_TIMESTEP_DURATION);
        assert_eq!(steps, FrameSteps { updates: 1, seconds: 0 });

        let steps = game_loop.advance(FIXED_TIMESTEP_DURATION * 2);
        assert_eq!(steps.updates, 2);
        assert_eq!(game_loop.update_count(), 3);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut game_loop = GameLoop::new();
        let half = FIXED_TIMESTEP_DURATION / 2;
        assert_eq!(game_loop.advance(half).updates, 0);
        assert_eq!(game_loop.advance(half + Duration::from_micros(1)).updates, 1);
    }

    #[test]
    fn test_max_updates_limit() {
        let mut game_loop = GameLoop::new();
        let steps = game_loop.advance(Duration::from_millis(300));
        // 300ms would allow 18 updates
        assert_eq!(steps.updates, MAX_UPDATES_PER_FRAME);
        // The backlog is not replayed on the next frame
        assert!(game_loop.advance(Duration::ZERO).updates <= 1);
    }

    #[test]
    fn test_seconds_follow_wall_clock() {
        let mut game_loop = GameLoop::new();
        let mut seconds = 0;
        // 2.5 seconds of 50ms frames
        for _ in 0..50 {
            seconds += game_loop.advance(Duration::from_millis(50)).seconds;
        }
        assert_eq!(seconds, 2);

        // A long stall still reports every whole second
        assert_eq!(game_loop.advance(Duration::from_millis(3_500)).seconds, 4);
    }

    #[test]
    fn test_frame_counting() {
        let mut game_loop = GameLoop::new();
        game_loop.begin_frame();
        game_loop.begin_frame();
        assert_eq!(game_loop.frame_count(), 2);
    }

    #[test]
    fn test_fps_estimate() {
        let mut game_loop = GameLoop::new();
        for _ in 0..10 {
            game_loop.advance(Duration::from_millis(20));
        }
        assert!((game_loop.fps() - 50.0).abs() < 0.5);
    }
}
