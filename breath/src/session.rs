//! Session state for the visualization screen and the two-screen
//! navigation around it.
//!
//! A [`Session`] is created when a pattern is selected and owns everything
//! that lives only while the pattern plays: its clock, renderer and
//! [`CancelToken`]. Leaving the screen cancels the token and drops the
//! session, so nothing keeps producing frames for a pattern that is no
//! longer shown.

use nannou::geom::Rect;
use std::cell::Cell;
use std::rc::Rc;

use crate::catalog::{BreathPattern, find_pattern};
use crate::clock::{
    Clock, ClockSource, Phase, PhaseSample, compute_phase, cycle_count,
};
use crate::core::logging::{debug, error, info, warn};
use crate::render::{Primitive, Renderer};

const LABEL_PULSE_SPEED: f32 = 2.0;
const LABEL_BASE_OPACITY: f32 = 0.4;
const LABEL_PULSE_DEPTH: f32 = 0.2;

#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Per-frame values derived from the session clock
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    pub elapsed: f32,
    pub sample: PhaseSample,
    pub cycle_count: u64,
}

impl FrameState {
    pub fn phase(&self) -> Phase {
        self.sample.phase
    }

    pub fn progress(&self) -> f32 {
        self.sample.progress
    }

    pub fn label(&self) -> &'static str {
        self.sample.phase.label()
    }

    /// Slow decorative pulse of the phase label, unrelated to the breath
    pub fn label_opacity(&self) -> f32 {
        LABEL_BASE_OPACITY
            + (self.elapsed * LABEL_PULSE_SPEED).sin() * LABEL_PULSE_DEPTH
    }
}

#[derive(Clone, Debug)]
pub struct SessionFrame {
    pub state: FrameState,
    pub primitives: Vec<Primitive>,
}

pub struct Session {
    pattern: &'static BreathPattern,
    clock: Clock,
    token: CancelToken,
    renderer: Renderer,
    last_state: Option<FrameState>,
}

impl Session {
    pub fn start(pattern: &'static BreathPattern, clock: Clock, veil: f32) -> Self {
        Self::with_renderer(pattern, clock, Renderer::new(veil))
    }

    pub fn with_renderer(
        pattern: &'static BreathPattern,
        clock: Clock,
        renderer: Renderer,
    ) -> Self {
        info!(
            "Starting session `{}` ({}, {}, cycle {}s)",
            pattern.id,
            pattern.visual,
            pattern.hex(),
            pattern.timing.total()
        );
        Self {
            pattern,
            clock,
            token: CancelToken::new(),
            renderer,
            last_state: None,
        }
    }

    pub fn pattern(&self) -> &'static BreathPattern {
        self.pattern
    }

    /// A handle that observes (and can trigger) this session's cancellation
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn last_state(&self) -> Option<FrameState> {
        self.last_state
    }

    /// Samples the clock. Returns `None` once the session is cancelled.
    pub fn tick(&mut self) -> Option<FrameState> {
        if !self.is_active() {
            return None;
        }

        let timing = &self.pattern.timing;
        let elapsed = self.clock.elapsed();
        let state = FrameState {
            elapsed,
            sample: compute_phase(elapsed, timing),
            cycle_count: cycle_count(elapsed, timing),
        };

        if let Some(previous) = self.last_state {
            if previous.cycle_count != state.cycle_count {
                debug!("`{}` cycle {}", self.pattern.id, state.cycle_count);
            }
            if previous.sample.phase != state.sample.phase {
                debug!(
                    "`{}` {} -> {}",
                    self.pattern.id, previous.sample.phase, state.sample.phase
                );
            }
        }

        self.last_state = Some(state);
        Some(state)
    }

    /// Samples the clock and renders the frame into primitives, trail
    /// included
    pub fn advance(&mut self, bounds: Rect) -> Option<SessionFrame> {
        let state = self.tick()?;
        let mut primitives: Vec<Primitive> = vec![];
        self.renderer.render(
            &mut primitives,
            state.sample,
            self.pattern,
            bounds,
            state.elapsed,
        );
        Some(SessionFrame { state, primitives })
    }

    pub fn clear_trail(&mut self) {
        self.renderer.reset();
    }

    pub fn end(&self) {
        if self.is_active() {
            info!(
                "Ending session `{}` after {} cycles",
                self.pattern.id,
                self.last_state.map_or(0, |s| s.cycle_count)
            );
        }
        self.token.cancel();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

pub enum Screen {
    Dashboard,
    Visualization(Session),
}

/// Owns the current screen. Only the visualization screen carries a
/// session.
pub struct Navigator {
    screen: Screen,
    veil: f32,
}

impl Navigator {
    pub fn new(veil: f32) -> Self {
        Self {
            screen: Screen::Dashboard,
            veil,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(self.screen, Screen::Dashboard)
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.screen {
            Screen::Visualization(session) => Some(session),
            Screen::Dashboard => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match &mut self.screen {
            Screen::Visualization(session) => Some(session),
            Screen::Dashboard => None,
        }
    }

    /// Starts a session for `id`. Unknown ids leave the current screen
    /// untouched.
    pub fn select(&mut self, id: &str, clock: Clock) -> Result<(), String> {
        let Some(pattern) = find_pattern(id) else {
            warn!("No pattern named `{}`", id);
            return Err(format!("unknown pattern: {}", id));
        };

        self.back();
        self.screen =
            Screen::Visualization(Session::start(pattern, clock, self.veil));
        Ok(())
    }

    /// Like [`Navigator::back`], for when the current frame could not be
    /// drawn
    pub fn abort(&mut self, reason: &str) -> bool {
        error!("Unable to draw frame: {}", reason);
        let ended = self.back();
        if ended {
            warn!("Session cancelled after a drawing error");
        }
        ended
    }

    /// Ends the active session, if any, and shows the dashboard. Returns
    /// whether a session was ended.
    pub fn back(&mut self) -> bool {
        match std::mem::replace(&mut self.screen, Screen::Dashboard) {
            Screen::Visualization(session) => {
                session.end();
                true
            }
            Screen::Dashboard => false,
        }
    }
}
