//! Step-wise collision checking of a moving footprint.
//!
//! The checker sweeps a moving footprint along a sequence of incremental
//! displacements and tests every intermediate position against one
//! stationary footprint and the tank limits. All work happens on a private
//! vertex buffer; the canonical footprints are read-only.

use serde::{Deserialize, Serialize};

use crate::core::{Footprint, Point2D};
use crate::path::Step;
use crate::tank::TankBounds;

/// Rim-clearance flags for one gantry over one move.
///
/// The caller tracks z-height and reports whether the gantry is above the
/// tank rim at the start and end of the move. Tank-boundary checking is
/// only meaningful while the whole move keeps the gantry within the tank's
/// z-range, i.e. when both flags are false.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeightFlags {
    /// Gantry above the tank rim at the start of the move
    pub start_above_rim: bool,
    /// Gantry above the tank rim at the end of the move
    pub end_above_rim: bool,
}

impl HeightFlags {
    /// Create a new flag pair
    #[inline]
    pub const fn new(start_above_rim: bool, end_above_rim: bool) -> Self {
        Self {
            start_above_rim,
            end_above_rim,
        }
    }

    /// Both endpoints inside the tank's z-range
    #[inline]
    pub fn within_tank(&self) -> bool {
        !self.start_above_rim && !self.end_above_rim
    }
}

/// Check a step sequence for collisions against one stationary footprint.
///
/// Returns true when every intermediate position is clear. For each step,
/// the displacement is accumulated into a working copy of `moving`'s
/// vertices, then:
///
/// - tank check (only when [`HeightFlags::within_tank`]): any vertex
///   outside [`TankBounds`] fails the step;
/// - obstacle check: the translated outline overlapping `stationary` in
///   any way, boundary touch included, fails the step.
///
/// The first failing step short-circuits the sweep. An empty sequence is
/// trivially clear.
pub fn path_is_clear(
    moving: &Footprint,
    stationary: &Footprint,
    steps: &[Step],
    heights: HeightFlags,
    tank: &TankBounds,
) -> bool {
    let mut working: Vec<Point2D> = moving.vertices().to_vec();
    let check_tank = heights.within_tank();

    for step in steps {
        let mut hits_tank = false;
        for v in working.iter_mut() {
            v.x += step.dx;
            v.y += step.dy;
            if check_tank && tank.violates(*v) {
                hits_tank = true;
            }
        }
        if hits_tank {
            return false;
        }

        let translated = Footprint::from_ring(working.clone());
        if translated.intersects(stationary) {
            return false;
        }
    }
    true
}
