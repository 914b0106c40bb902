use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TickResult {
    pub should_render: bool,
    pub frames_advanced: u32,
}

/// Paces rendering to a target fps independent of how often the host event
/// loop calls in, and keeps a rolling average of the achieved frame rate.
#[derive(Debug)]
pub struct FramePacer {
    fps: f32,
    frame_count: u64,
    last_tick: Instant,
    accumulator: Duration,
    frame_intervals: VecDeque<Duration>,
    last_render_at: Option<Instant>,
    max_intervals: usize,
}

impl FramePacer {
    pub fn new(fps: f32) -> Self {
        Self::with_start(fps, Instant::now())
    }

    pub fn with_start(fps: f32, now: Instant) -> Self {
        Self {
            fps: fps.max(1.0),
            frame_count: 0,
            last_tick: now,
            accumulator: Duration::ZERO,
            frame_intervals: VecDeque::new(),
            last_render_at: None,
            max_intervals: 90,
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.fps)
    }

    /// Drops any accumulated debt, e.g. when a new session starts
    pub fn reset(&mut self, now: Instant) {
        self.last_tick = now;
        self.accumulator = Duration::ZERO;
        self.frame_intervals.clear();
        self.last_render_at = None;
    }

    pub fn tick(&mut self, now: Instant) -> TickResult {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.accumulator += elapsed;

        let frame_duration = self.frame_duration();
        let mut advanced = 0u32;

        while self.accumulator >= frame_duration {
            self.accumulator -= frame_duration;
            advanced += 1;
        }

        if advanced == 0 {
            return TickResult::default();
        }

        self.frame_count += u64::from(advanced);
        self.record_render(now);

        TickResult {
            should_render: true,
            frames_advanced: advanced,
        }
    }

    pub fn average_fps(&self) -> f32 {
        if self.frame_intervals.is_empty() {
            return 0.0;
        }

        let sum: Duration = self.frame_intervals.iter().copied().sum();
        let avg = sum / self.frame_intervals.len() as u32;

        if avg.is_zero() {
            return 0.0;
        }

        1.0 / avg.as_secs_f32()
    }

    fn record_render(&mut self, now: Instant) {
        let Some(last_render_at) = self.last_render_at else {
            self.last_render_at = Some(now);
            return;
        };

        let interval = now.saturating_duration_since(last_render_at);
        self.last_render_at = Some(now);
        self.frame_intervals.push_back(interval);
        if self.frame_intervals.len() > self.max_intervals {
            self.frame_intervals.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_once_a_frame_duration_has_passed() {
        let start = Instant::now();
        let mut pacer = FramePacer::with_start(60.0, start);
        let now = start + pacer.frame_duration();

        let tick = pacer.tick(now);
        assert!(tick.should_render);
        assert_eq!(tick.frames_advanced, 1);
        assert_eq!(pacer.frame_count(), 1);
    }

    #[test]
    fn skips_when_called_too_early() {
        let start = Instant::now();
        let mut pacer = FramePacer::with_start(30.0, start);
        let tick = pacer.tick(start + Duration::from_millis(5));
        assert_eq!(tick, TickResult::default());
    }

    #[test]
    fn stall_renders_once_and_keeps_only_the_remainder() {
        let start = Instant::now();
        let mut pacer = FramePacer::with_start(64.0, start);
        let step = Duration::from_micros(15_625);

        let tick = pacer.tick(start + step * 3 + step / 2);
        assert!(tick.should_render);
        assert_eq!(tick.frames_advanced, 3);
        assert_eq!(pacer.frame_count(), 3);

        let early = pacer.tick(start + step * 4 - Duration::from_micros(1));
        assert!(!early.should_render);

        let due = pacer.tick(start + step * 4);
        assert_eq!(due.frames_advanced, 1);
        assert_eq!(pacer.frame_count(), 4);
    }

    #[test]
    fn fps_is_at_least_one() {
        let pacer = FramePacer::new(0.0);
        assert_eq!(pacer.fps(), 1.0);
    }

    #[test]
    fn average_fps_tracks_render_intervals() {
        let start = Instant::now();
        let mut pacer = FramePacer::with_start(64.0, start);
        let step = Duration::from_micros(15_625);

        for i in 1..=10 {
            pacer.tick(start + step * i);
        }

        let avg = pacer.average_fps();
        assert!((avg - 64.0).abs() < 1.0, "avg fps was {}", avg);
    }
}
