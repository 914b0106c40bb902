#![allow(dead_code)]

use breath::catalog::find_pattern;
use breath::clock::{Clock, ManualClock};
use breath::render::Renderer;
use breath::session::Session;

pub const SEED: u64 = 7;

/// A session driven by a clock the test controls
pub fn manual_session(id: &str) -> (Session, ManualClock) {
    let pattern = find_pattern(id)
        .unwrap_or_else(|| panic!("expected `{}` in the catalog", id));
    let clock = ManualClock::new();
    let session = Session::with_renderer(
        pattern,
        Clock::Manual(clock.clone()),
        Renderer::with_seed(0.2, SEED),
    );
    (session, clock)
}

/// Sample times that never land on a phase boundary
pub fn sample_times(count: usize) -> impl Iterator<Item = f32> {
    (0..count).map(|k| k as f32 * 0.37 + 0.011)
}

pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}
