use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::core::util::AtomicF32;

/// Supplies the seconds elapsed since a session began
pub trait ClockSource: Clone {
    fn elapsed(&self) -> f32;
}

#[derive(Clone, Debug)]
pub enum Clock {
    Wall(WallClock),
    Manual(ManualClock),
}

impl Clock {
    pub fn wall() -> Self {
        Self::Wall(WallClock::new())
    }

    pub fn manual() -> Self {
        Self::Manual(ManualClock::new())
    }
}

impl ClockSource for Clock {
    fn elapsed(&self) -> f32 {
        match self {
            Self::Wall(c) => c.elapsed(),
            Self::Manual(c) => c.elapsed(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self::with_start(Instant::now())
    }

    pub fn with_start(start: Instant) -> Self {
        Self { start }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for WallClock {
    fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// Externally driven clock. Clones share the same time so a test can keep
/// a handle while a session owns another.
#[derive(Clone, Debug)]
pub struct ManualClock {
    seconds: Arc<AtomicF32>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            seconds: Arc::new(AtomicF32::new(0.0)),
        }
    }

    pub fn set(&self, seconds: f32) {
        self.seconds.store(seconds.max(0.0), Ordering::Release);
    }

    pub fn advance(&self, seconds: f32) {
        self.set(self.elapsed() + seconds);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for ManualClock {
    fn elapsed(&self) -> f32 {
        self.seconds.load(Ordering::Acquire)
    }
}
