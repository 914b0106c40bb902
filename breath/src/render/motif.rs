use nannou::rand::RngCore;

use super::motifs::{
    BoxOutline, Fire, Heart, Lightning, Moon, Shield, Spiral, Wave,
};
use super::params::FrameParams;
use super::primitive::Primitive;
use crate::catalog::Motif;

/// Procedural generator for one [`Motif`]. Drawers are stateless; anything
/// that changes between frames arrives through [`FrameParams`] or `rng`.
pub trait MotifDrawer: Sync {
    fn motif(&self) -> Motif;

    fn draw(&self, params: &FrameParams, rng: &mut dyn RngCore)
    -> Vec<Primitive>;
}

/// Indexed by [`Motif::index`]
static DRAWERS: [&dyn MotifDrawer; 8] = [
    &Spiral, &Moon, &BoxOutline, &Lightning, &Wave, &Heart, &Fire, &Shield,
];

pub fn drawer(motif: Motif) -> &'static dyn MotifDrawer {
    DRAWERS[motif.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_motif_order() {
        for motif in Motif::ALL {
            assert_eq!(drawer(motif).motif(), motif);
        }
    }
}
