use std::fmt;

use crate::catalog::PhaseTiming;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Phase {
    Inhale,
    Hold,
    Exhale,
    Hold2,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Inhale => "inhale",
            Phase::Hold => "hold",
            Phase::Exhale => "exhale",
            Phase::Hold2 => "hold2",
        }
    }

    /// Text shown over the visualization
    pub fn label(self) -> &'static str {
        match self {
            Phase::Inhale => "Breathe In",
            Phase::Hold | Phase::Hold2 => "Hold",
            Phase::Exhale => "Breathe Out",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseSample {
    pub phase: Phase,
    /// Normalized position within `phase`, 0..=1
    pub progress: f32,
}

/// Full cycle length with the degenerate all-zero case treated as 1 second
pub fn cycle_duration(timing: &PhaseTiming) -> f32 {
    let total = timing.total();
    if total > 0.0 { total } else { 1.0 }
}

/// Locates `elapsed` seconds within the repeating inhale → hold → exhale →
/// hold2 cycle. A zero-length phase occupies no time, so it is never the
/// current phase unless the cycle position lands exactly on its boundary
/// (which only happens for a trailing hold2), and its progress is 1.
pub fn compute_phase(elapsed: f32, timing: &PhaseTiming) -> PhaseSample {
    let cycle = cycle_duration(timing);
    let position = elapsed.max(0.0).rem_euclid(cycle);

    let segments = [
        (Phase::Inhale, timing.inhale),
        (Phase::Hold, timing.hold1),
        (Phase::Exhale, timing.exhale),
    ];

    let mut start = 0.0;
    for (phase, length) in segments {
        let end = start + length;
        if position < end {
            return PhaseSample {
                phase,
                progress: progress_within(position, start, length),
            };
        }
        start = end;
    }

    PhaseSample {
        phase: Phase::Hold2,
        progress: progress_within(position, start, timing.hold2),
    }
}

fn progress_within(position: f32, start: f32, length: f32) -> f32 {
    if length > 0.0 {
        ((position - start) / length).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Number of whole cycles completed after `elapsed` seconds
pub fn cycle_count(elapsed: f32, timing: &PhaseTiming) -> u64 {
    (elapsed.max(0.0) / cycle_duration(timing)).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    const BOX: PhaseTiming = PhaseTiming::new(4.0, 4.0, 4.0, 4.0);
    const CALMING: PhaseTiming = PhaseTiming::new(4.0, 4.0, 6.0, 0.0);
    const POWER: PhaseTiming = PhaseTiming::new(2.0, 0.0, 2.0, 0.0);

    fn sample(t: f32, timing: &PhaseTiming) -> (Phase, f32) {
        let s = compute_phase(t, timing);
        (s.phase, s.progress)
    }

    #[test]
    fn test_box_boundaries() {
        assert_eq!(sample(0.0, &BOX), (Phase::Inhale, 0.0));
        assert_eq!(sample(4.0, &BOX), (Phase::Hold, 0.0));
        assert_eq!(sample(8.0, &BOX), (Phase::Exhale, 0.0));
        assert_eq!(sample(12.0, &BOX), (Phase::Hold2, 0.0));

        let (phase, progress) = sample(15.999, &BOX);
        assert_eq!(phase, Phase::Hold2);
        assert_approx_eq!(progress, 0.99975, 0.0005);
    }

    #[test]
    fn test_midpoints() {
        let (phase, progress) = sample(2.0, &BOX);
        assert_eq!(phase, Phase::Inhale);
        assert_approx_eq!(progress, 0.5);

        let (phase, progress) = sample(11.0, &CALMING);
        assert_eq!(phase, Phase::Exhale);
        assert_approx_eq!(progress, 0.5);
    }

    #[test]
    fn test_zero_hold_goes_straight_to_exhale() {
        assert_eq!(sample(1.999, &POWER).0, Phase::Inhale);
        assert_eq!(sample(2.0, &POWER), (Phase::Exhale, 0.0));
        assert_eq!(sample(3.999, &POWER).0, Phase::Exhale);
        assert_eq!(sample(4.0, &POWER), (Phase::Inhale, 0.0));
    }

    #[test]
    fn test_all_zero_timing_is_guarded() {
        let zero = PhaseTiming::new(0.0, 0.0, 0.0, 0.0);
        assert_approx_eq!(cycle_duration(&zero), 1.0);
        assert_eq!(sample(0.25, &zero), (Phase::Hold2, 1.0));
        assert_eq!(cycle_count(3.5, &zero), 3);
    }

    #[test]
    fn test_negative_elapsed_clamps_to_start() {
        assert_eq!(sample(-3.0, &BOX), (Phase::Inhale, 0.0));
        assert_eq!(cycle_count(-3.0, &BOX), 0);
    }

    #[test]
    fn test_cycle_count() {
        assert_eq!(cycle_count(13.9, &CALMING), 0);
        assert_eq!(cycle_count(14.1, &CALMING), 1);
        assert_eq!(cycle_count(28.0, &CALMING), 2);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Phase::Inhale.label(), "Breathe In");
        assert_eq!(Phase::Hold.label(), "Hold");
        assert_eq!(Phase::Exhale.label(), "Breathe Out");
        assert_eq!(Phase::Hold2.label(), "Hold");
        assert_eq!(Phase::Hold2.to_string(), "hold2");
    }
}
