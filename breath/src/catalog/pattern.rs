use nannou::color::Srgb;
use std::fmt;

use crate::core::util::{hex_string, rgb_from_hex};

/// Visual style a pattern is rendered with
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Motif {
    Spiral,
    Moon,
    Box,
    Lightning,
    Wave,
    Heart,
    Fire,
    Shield,
}

impl Motif {
    pub const ALL: [Motif; 8] = [
        Motif::Spiral,
        Motif::Moon,
        Motif::Box,
        Motif::Lightning,
        Motif::Wave,
        Motif::Heart,
        Motif::Fire,
        Motif::Shield,
    ];

    /// Position within [`Motif::ALL`], used as the drawer table index
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Motif::Spiral => "spiral",
            Motif::Moon => "moon",
            Motif::Box => "box",
            Motif::Lightning => "lightning",
            Motif::Wave => "wave",
            Motif::Heart => "heart",
            Motif::Fire => "fire",
            Motif::Shield => "shield",
        }
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase durations in seconds. Any of them may be zero, in which case that
/// phase is skipped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseTiming {
    pub inhale: f32,
    pub hold1: f32,
    pub exhale: f32,
    pub hold2: f32,
}

impl PhaseTiming {
    pub const fn new(inhale: f32, hold1: f32, exhale: f32, hold2: f32) -> Self {
        Self {
            inhale,
            hold1,
            exhale,
            hold2,
        }
    }

    /// Raw sum of all four phases, possibly zero. See
    /// [`crate::clock::cycle_duration`] for the guarded value.
    pub fn total(&self) -> f32 {
        self.inhale + self.hold1 + self.exhale + self.hold2
    }

    /// Dashboard card form, e.g. `4s in • 4s hold • 6s out`
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{}s in", self.inhale)];
        if self.hold1 > 0.0 {
            parts.push(format!("{}s hold", self.hold1));
        }
        parts.push(format!("{}s out", self.exhale));
        if self.hold2 > 0.0 {
            parts.push(format!("{}s hold", self.hold2));
        }
        parts.join(" • ")
    }

    /// Visualization footer form, e.g. `In: 4s • Hold: 4s • Out: 6s`
    pub fn breakdown(&self) -> String {
        let mut parts = vec![format!("In: {}s", self.inhale)];
        if self.hold1 > 0.0 {
            parts.push(format!("Hold: {}s", self.hold1));
        }
        parts.push(format!("Out: {}s", self.exhale));
        if self.hold2 > 0.0 {
            parts.push(format!("Hold: {}s", self.hold2));
        }
        parts.join(" • ")
    }
}

#[derive(Debug, PartialEq)]
pub struct BreathPattern {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// `0xRRGGBB`
    pub color: u32,
    pub timing: PhaseTiming,
    pub visual: Motif,
}

impl BreathPattern {
    pub fn rgb(&self) -> Srgb<u8> {
        rgb_from_hex(self.color)
    }

    pub fn hex(&self) -> String {
        hex_string(self.rgb())
    }
}

pub static PATTERNS: [BreathPattern; 8] = [
    BreathPattern {
        id: "calming",
        name: "4-4-6 Calming",
        description: "Gentle regulation",
        color: 0x60a5fa,
        timing: PhaseTiming::new(4.0, 4.0, 6.0, 0.0),
        visual: Motif::Spiral,
    },
    BreathPattern {
        id: "tranquilizer",
        name: "4-7-8 Sleep",
        description: "Deep relaxation",
        color: 0xa78bfa,
        timing: PhaseTiming::new(4.0, 7.0, 8.0, 0.0),
        visual: Motif::Moon,
    },
    BreathPattern {
        id: "box",
        name: "4-4-4-4 Box",
        description: "Steady focus",
        color: 0x34d399,
        timing: PhaseTiming::new(4.0, 4.0, 4.0, 4.0),
        visual: Motif::Box,
    },
    BreathPattern {
        id: "energizer",
        name: "Power Breath",
        description: "Quick activation",
        color: 0xfbbf24,
        timing: PhaseTiming::new(2.0, 0.0, 2.0, 0.0),
        visual: Motif::Lightning,
    },
    BreathPattern {
        id: "sigh",
        name: "Quick Reset",
        description: "Instant relief",
        color: 0x38bdf8,
        timing: PhaseTiming::new(2.0, 1.0, 4.0, 0.0),
        visual: Motif::Wave,
    },
    BreathPattern {
        id: "coherent",
        name: "5-5 Coherent",
        description: "Heart-brain sync",
        color: 0xfb923c,
        timing: PhaseTiming::new(5.0, 0.0, 5.0, 0.0),
        visual: Motif::Heart,
    },
    BreathPattern {
        id: "fire",
        name: "Breath of Fire",
        description: "Energizing",
        color: 0xef4444,
        timing: PhaseTiming::new(0.5, 0.0, 0.5, 0.0),
        visual: Motif::Fire,
    },
    BreathPattern {
        id: "anxiety",
        name: "4-2-6-2 Anxiety",
        description: "Panic relief",
        color: 0x8b5cf6,
        timing: PhaseTiming::new(4.0, 2.0, 6.0, 2.0),
        visual: Motif::Shield,
    },
];

pub fn patterns() -> &'static [BreathPattern] {
    &PATTERNS
}

pub fn find_pattern(id: &str) -> Option<&'static BreathPattern> {
    PATTERNS.iter().find(|pattern| pattern.id == id)
}

pub fn pattern_ids() -> Vec<&'static str> {
    PATTERNS.iter().map(|pattern| pattern.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_cycle_has_positive_duration() {
        for pattern in patterns() {
            assert!(pattern.timing.total() > 0.0, "{}", pattern.id);
        }
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = pattern_ids().into_iter().collect();
        assert_eq!(ids.len(), PATTERNS.len());
    }

    #[test]
    fn every_motif_is_used_once() {
        let motifs: HashSet<_> = patterns().iter().map(|p| p.visual).collect();
        assert_eq!(motifs.len(), Motif::ALL.len());
    }

    #[test]
    fn find_pattern_by_id() {
        assert_eq!(find_pattern("fire").map(|p| p.visual), Some(Motif::Fire));
        assert!(find_pattern("nope").is_none());
        assert!(find_pattern("").is_none());
    }

    #[test]
    fn motif_index_matches_all() {
        for (i, motif) in Motif::ALL.iter().enumerate() {
            assert_eq!(motif.index(), i);
        }
    }

    #[test]
    fn summary_omits_zero_holds() {
        let calming = find_pattern("calming").unwrap();
        assert_eq!(calming.timing.summary(), "4s in • 4s hold • 6s out");

        let fire = find_pattern("fire").unwrap();
        assert_eq!(fire.timing.summary(), "0.5s in • 0.5s out");

        let anxiety = find_pattern("anxiety").unwrap();
        assert_eq!(
            anxiety.timing.summary(),
            "4s in • 2s hold • 6s out • 2s hold"
        );
    }

    #[test]
    fn breakdown_omits_zero_holds() {
        let coherent = find_pattern("coherent").unwrap();
        assert_eq!(coherent.timing.breakdown(), "In: 5s • Out: 5s");

        let box_pattern = find_pattern("box").unwrap();
        assert_eq!(
            box_pattern.timing.breakdown(),
            "In: 4s • Hold: 4s • Out: 4s • Hold: 4s"
        );
    }

    #[test]
    fn hex_round_trips_color_literal() {
        assert_eq!(find_pattern("box").unwrap().hex(), "#34d399");
    }
}
