use crate::clock::{Phase, PhaseSample};
use crate::core::util::lerp;

pub const MIN_SCALE: f32 = 0.3;
pub const MAX_SCALE: f32 = 1.0;
pub const MIN_OPACITY: f32 = 0.4;
pub const MAX_OPACITY: f32 = 0.8;

/// The two values every motif is driven by: size grows while inhaling and
/// shrinks while exhaling, opacity follows along.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Modulation {
    pub scale: f32,
    pub opacity: f32,
}

impl Modulation {
    pub fn from_sample(sample: PhaseSample) -> Self {
        let p = sample.progress;
        match sample.phase {
            Phase::Inhale => Self {
                scale: lerp(MIN_SCALE, MAX_SCALE, p),
                opacity: lerp(MIN_OPACITY, MAX_OPACITY, p),
            },
            Phase::Hold => Self {
                scale: MAX_SCALE,
                opacity: MAX_OPACITY,
            },
            Phase::Exhale => Self {
                scale: lerp(MAX_SCALE, MIN_SCALE, p),
                opacity: lerp(MAX_OPACITY, MIN_OPACITY, p),
            },
            Phase::Hold2 => Self {
                scale: MIN_SCALE,
                opacity: MIN_OPACITY,
            },
        }
    }
}

impl From<PhaseSample> for Modulation {
    fn from(sample: PhaseSample) -> Self {
        Self::from_sample(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    fn modulate(phase: Phase, progress: f32) -> Modulation {
        Modulation::from_sample(PhaseSample { phase, progress })
    }

    #[test]
    fn test_inhale_grows() {
        let start = modulate(Phase::Inhale, 0.0);
        assert_approx_eq!(start.scale, 0.3);
        assert_approx_eq!(start.opacity, 0.4);

        let mid = modulate(Phase::Inhale, 0.5);
        assert_approx_eq!(mid.scale, 0.65);
        assert_approx_eq!(mid.opacity, 0.6);

        let end = modulate(Phase::Inhale, 1.0);
        assert_approx_eq!(end.scale, 1.0);
        assert_approx_eq!(end.opacity, 0.8);
    }

    #[test]
    fn test_exhale_shrinks() {
        let mid = modulate(Phase::Exhale, 0.5);
        assert_approx_eq!(mid.scale, 0.65);
        assert_approx_eq!(mid.opacity, 0.6);

        let end = modulate(Phase::Exhale, 1.0);
        assert_approx_eq!(end.scale, 0.3);
        assert_approx_eq!(end.opacity, 0.4);
    }

    #[test]
    fn test_holds_are_constant() {
        for p in [0.0, 0.3, 1.0] {
            assert_eq!(
                modulate(Phase::Hold, p),
                Modulation {
                    scale: 1.0,
                    opacity: 0.8
                }
            );
            assert_eq!(
                modulate(Phase::Hold2, p),
                Modulation {
                    scale: 0.3,
                    opacity: 0.4
                }
            );
        }
    }
}
