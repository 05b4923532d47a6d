//! Frame clock and pacing
//!
//! Variable timestep: each tick receives the wall-clock milliseconds since the previous
//! tick. After the frame's work is done the loop sleeps for whatever is left of the target
//! frame budget. There is no frame skipping or catch-up.

use std::time::{Duration, Instant};

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Frame timing state
pub struct GameLoop {
    /// Target duration of one frame
    frame_budget: Duration,
    /// Time the current frame began
    frame_start: Instant,
    /// Time when the loop started
    start_time: Instant,
    /// Recent frame durations for FPS calculation
    frame_times: Vec<Duration>,
    frame_count: u64,
    current_fps: f32,
}

impl GameLoop {
    /// Create a loop that paces frames to `target_fps`
    pub fn new(target_fps: f64) -> Self {
        let now = Instant::now();
        Self {
            frame_budget: frame_budget(target_fps),
            frame_start: now,
            start_time: now,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returning milliseconds elapsed since the previous one
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.frame_start);
        self.frame_start = now;
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        frame_time.as_secs_f32() * 1000.0
    }

    /// Sleep for the rest of the frame budget; returns how long it slept
    pub fn end_frame(&self) -> Duration {
        let delay = pacing_delay(self.frame_budget, self.frame_start.elapsed());
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        delay
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total elapsed time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
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

/// Duration of one frame at `target_fps`; a non-positive target disables pacing
pub fn frame_budget(target_fps: f64) -> Duration {
    if target_fps.is_finite() && target_fps > 0.0 {
        Duration::from_secs_f64(1.0 / target_fps)
    } else {
        Duration::ZERO
    }
}

/// Remaining sleep for a frame that took `work`, clamped to zero
pub fn pacing_delay(budget: Duration, work: Duration) -> Duration {
    budget.saturating_sub(work)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::thread;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new(240.0);
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.fps(), 0.0);
        assert_eq!(game_loop.frame_budget(), frame_budget(240.0));
    }

    #[test]
    fn test_frame_budget() {
        assert_relative_eq!(frame_budget(240.0).as_secs_f64(), 1.0 / 240.0, epsilon = 1e-9);
        assert_eq!(frame_budget(0.0), Duration::ZERO);
        assert_eq!(frame_budget(-5.0), Duration::ZERO);
        assert_eq!(frame_budget(f64::NAN), Duration::ZERO);
    }

    #[test]
    fn test_pacing_delay_fills_budget() {
        let budget = Duration::from_millis(16);
        assert_eq!(pacing_delay(budget, Duration::from_millis(6)), Duration::from_millis(10));
    }

    #[test]
    fn test_pacing_delay_clamped_when_over_budget() {
        let budget = Duration::from_millis(16);
        assert_eq!(pacing_delay(budget, Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn test_frame_counting() {
        let mut game_loop = GameLoop::new(240.0);
        game_loop.begin_frame();
        assert_eq!(game_loop.frame_count(), 1);

        game_loop.begin_frame();
        assert_eq!(game_loop.frame_count(), 2);
    }

    #[test]
    fn test_delta_is_milliseconds() {
        let mut game_loop = GameLoop::new(240.0);
        game_loop.begin_frame();
        thread::sleep(Duration::from_millis(10));
        let dt = game_loop.begin_frame();
        assert!(dt >= 10.0, "dt was {dt}");
        assert!(dt >= 0.0);
    }

    #[test]
    fn test_end_frame_sleeps_rest_of_budget() {
        let mut game_loop = GameLoop::new(100.0);
        game_loop.begin_frame();
        let slept = game_loop.end_frame();
        assert!(slept <= Duration::from_millis(10));
        assert!(game_loop.elapsed() >= slept);
    }

    #[test]
    fn test_unpaced_loop_never_sleeps() {
        let mut game_loop = GameLoop::new(0.0);
        game_loop.begin_frame();
        assert_eq!(game_loop.end_frame(), Duration::ZERO);
    }
}
