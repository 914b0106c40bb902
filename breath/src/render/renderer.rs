use nannou::geom::Rect;
use nannou::rand::SeedableRng;
use nannou::rand::rngs::StdRng;

use super::modulation::Modulation;
use super::motif::drawer;
use super::params::FrameParams;
use super::primitive::Primitive;
use super::surface::Surface;
use super::trail::TrailBuffer;
use crate::catalog::BreathPattern;
use crate::clock::{Phase, PhaseSample};

/// Radius of the focal dot at full scale
pub const CORE_RADIUS: f32 = 10.0;

/// Turns phase samples into painted frames. Owns the randomness used by
/// flickering motifs and the trail history, so one renderer belongs to one
/// session.
pub struct Renderer {
    rng: StdRng,
    trail: TrailBuffer,
}

impl Renderer {
    pub fn new(veil: f32) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            trail: TrailBuffer::new(veil),
        }
    }

    pub fn with_seed(veil: f32, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            trail: TrailBuffer::new(veil),
        }
    }

    /// Primitives for a single frame: the pattern's motif with the core dot
    /// on top
    pub fn scene(
        &mut self,
        sample: PhaseSample,
        pattern: &BreathPattern,
        bounds: Rect,
        time: f32,
    ) -> Vec<Primitive> {
        let modulation = Modulation::from_sample(sample);
        let params = FrameParams::new(bounds, modulation, pattern.rgb(), time);
        let mut scene = drawer(pattern.visual).draw(&params, &mut self.rng);
        scene.push(core_dot(&params));
        scene
    }

    /// Paints the current frame over the faded trail of recent frames
    pub fn render(
        &mut self,
        surface: &mut impl Surface,
        sample: PhaseSample,
        pattern: &BreathPattern,
        bounds: Rect,
        time: f32,
    ) {
        let scene = self.scene(sample, pattern, bounds, time);
        self.trail.push(scene);
        self.trail.paint(surface);
    }

    /// Forgets the trail, e.g. after the window is resized
    pub fn reset(&mut self) {
        self.trail.clear();
    }
}

pub fn core_dot(params: &FrameParams) -> Primitive {
    Primitive::RadialGlow {
        center: params.center,
        radius: CORE_RADIUS * params.scale,
        color: params.stroke_color(),
    }
}

/// Still frame of a pattern at full breath, used as its dashboard icon
pub fn thumbnail(pattern: &BreathPattern, bounds: Rect) -> Vec<Primitive> {
    let sample = PhaseSample {
        phase: Phase::Hold,
        progress: 1.0,
    };
    let mut rng = StdRng::seed_from_u64(pattern.color as u64);
    let params = FrameParams::new(
        bounds,
        Modulation::from_sample(sample),
        pattern.rgb(),
        0.0,
    );
    drawer(pattern.visual).draw(&params, &mut rng)
}
