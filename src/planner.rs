//! Collision-free path planning between two gantries.
//!
//! The planner owns an immutable geometric model of both gantries (body
//! outline, optical-box faces, PMT-holder obstacle list) plus the tank
//! limits, and answers move requests with a corner-only waypoint sequence
//! or a failure reason.
//!
//! A move is planned as one of two L-shaped axis orderings (X-then-Y,
//! Y-then-X). Each ordering is validated step-wise at fine granularity
//! against every relevant stationary obstacle; the first ordering that
//! clears is re-emitted as a coarse corner path for the motor layer. No
//! diagonal motion, curved paths, or waypoint insertion is attempted.

use log::{debug, warn};

use crate::collision::{path_is_clear, HeightFlags};
use crate::config::PlannerConfig;
use crate::core::{Footprint, Point2D};
use crate::error::{PlannerError, Result};
use crate::path::{corner_steps, fine_steps, AxisOrder, Step};

/// Identifies which gantry a move request belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GantryId {
    Gantry0,
    Gantry1,
}

impl GantryId {
    /// The other gantry
    #[inline]
    pub fn opposing(self) -> GantryId {
        match self {
            GantryId::Gantry0 => GantryId::Gantry1,
            GantryId::Gantry1 => GantryId::Gantry0,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            GantryId::Gantry0 => 0,
            GantryId::Gantry1 => 1,
        }
    }
}

/// One optical-box face (lower or upper) and its obstacle selector.
///
/// `height_index` picks which entry of the gantry's PMT-holder list is the
/// active obstacle for this face: index 0 is the holder outline at the PMT
/// cover top, 1 is one layer below it, and so on. `None` disables the
/// check entirely, used when the box's z-height puts it clear of the
/// holders.
#[derive(Clone, Debug)]
pub struct OpticalBoxFace {
    /// Face outline in tank-frame coordinates
    pub footprint: Footprint,
    /// Index into the gantry's PMT-holder list, `None` = check disabled
    pub height_index: Option<usize>,
}

impl OpticalBoxFace {
    /// Create a face from its outline and obstacle selector
    pub fn new(footprint: Footprint, height_index: Option<usize>) -> Self {
        Self {
            footprint,
            height_index,
        }
    }
}

/// Per-gantry geometric model.
///
/// Built once at configuration time and treated as read-only for the
/// planner's lifetime; geometry changes go through
/// [`PathPlanner::set_geometry`], never through mutation mid-plan.
#[derive(Clone, Debug)]
pub struct GantryContext {
    /// Body outline in tank-frame coordinates
    pub body: Footprint,
    /// Lower optical-box face, if the gantry carries one
    pub box_lower: Option<OpticalBoxFace>,
    /// Upper optical-box face, if the gantry carries one
    pub box_upper: Option<OpticalBoxFace>,
    /// PMT-holder outlines indexed by height layer (coordinates may differ
    /// between gantries)
    pub pmt_holders: Vec<Footprint>,
}

impl GantryContext {
    /// Create a context with just a body outline
    pub fn new(body: Footprint) -> Self {
        Self {
            body,
            box_lower: None,
            box_upper: None,
            pmt_holders: Vec::new(),
        }
    }

    /// Attach the lower and upper optical-box faces
    pub fn with_optical_boxes(mut self, lower: OpticalBoxFace, upper: OpticalBoxFace) -> Self {
        self.box_lower = Some(lower);
        self.box_upper = Some(upper);
        self
    }

    /// Attach the PMT-holder obstacle list
    pub fn with_pmt_holders(mut self, holders: Vec<Footprint>) -> Self {
        self.pmt_holders = holders;
        self
    }
}

/// Collision-free path planner for the two tank gantries.
///
/// Synchronous and free of shared mutable state: every collision test runs
/// on private translated copies, so concurrent `calculate_path` calls
/// against stable geometry are safe. Callers must serialize
/// [`set_geometry`](PathPlanner::set_geometry) against in-flight
/// calculations.
#[derive(Debug)]
pub struct PathPlanner {
    config: PlannerConfig,
    gantries: [GantryContext; 2],
}

impl PathPlanner {
    /// Create a planner from configuration and both gantry models.
    ///
    /// The configuration is validated up front: a non-finite or
    /// non-positive step size is rejected as [`PlannerError::Config`]
    /// rather than corrupting every later sweep.
    pub fn new(
        config: PlannerConfig,
        gantry0: GantryContext,
        gantry1: GantryContext,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            gantries: [gantry0, gantry1],
        })
    }

    /// Active configuration
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Replace both gantry models after a physical geometry change.
    pub fn set_geometry(&mut self, gantry0: GantryContext, gantry1: GantryContext) {
        self.gantries = [gantry0, gantry1];
    }

    /// Determine which gantry owns a start point.
    ///
    /// Three-way: inside gantry 0's body, inside gantry 1's body, or
    /// neither — the last is a hard error rather than a silent gantry-1
    /// default, since a start point outside both bodies means the caller's
    /// position tracking has diverged from the model.
    pub fn classify(&self, start: Point2D) -> Result<GantryId> {
        if self.gantries[0].body.contains(start) {
            Ok(GantryId::Gantry0)
        } else if self.gantries[1].body.contains(start) {
            Ok(GantryId::Gantry1)
        } else {
            warn!(
                "start ({:.3}, {:.3}) lies inside neither gantry body",
                start.x, start.y
            );
            Err(PlannerError::StartOutsideGantries)
        }
    }

    /// Plan a collision-free move from `start` to `end`.
    ///
    /// `heights0`/`heights1` are the rim-clearance flags for gantry 0 and
    /// gantry 1; only the moving gantry's pair is consulted. On success the
    /// returned waypoints are the coarse corner path (at most one step per
    /// axis), to be applied as sequential relative displacements.
    pub fn calculate_path(
        &self,
        start: Point2D,
        end: Point2D,
        heights0: HeightFlags,
        heights1: HeightFlags,
    ) -> Result<Vec<Step>> {
        debug!(
            "planning path from ({:.3}, {:.3}) to ({:.3}, {:.3})",
            start.x, start.y, end.x, end.y
        );

        let mover = self.classify(start)?;
        let moving = &self.gantries[mover.index()];
        let stationary = &self.gantries[mover.opposing().index()];
        let heights = match mover {
            GantryId::Gantry0 => heights0,
            GantryId::Gantry1 => heights1,
        };

        if stationary.body.contains(end) {
            warn!(
                "destination ({:.3}, {:.3}) lies inside {:?}",
                end.x,
                end.y,
                mover.opposing()
            );
            return Err(PlannerError::InvalidDestination);
        }

        for order in [AxisOrder::XFirst, AxisOrder::YFirst] {
            if self.ordering_is_clear(moving, stationary, start, end, order, heights)? {
                debug!("{:?} move clear via {:?}", mover, order);
                return Ok(corner_steps(start, end, order));
            }
            debug!("{:?} ordering collides for {:?}", order, mover);
        }

        warn!(
            "no collision-free path for {:?} from ({:.3}, {:.3}) to ({:.3}, {:.3})",
            mover, start.x, start.y, end.x, end.y
        );
        Err(PlannerError::NoCollisionFreePath)
    }

    /// Validate a proposed resting configuration without any motion.
    ///
    /// Runs a zero-displacement single-step path through the full collision
    /// checker: useful as a static pre-flight check of a final target (for
    /// example optical box against PMT holder) before committing to it.
    pub fn check_destination(
        &self,
        moving: &Footprint,
        stationary: &Footprint,
        end_above_rim: bool,
    ) -> bool {
        let heights = HeightFlags::new(end_above_rim, end_above_rim);
        path_is_clear(
            moving,
            stationary,
            &[Step::default()],
            heights,
            &self.config.tank,
        )
    }

    /// Validate one axis ordering against every relevant obstacle.
    ///
    /// Three tiers, short-circuiting on the first collision: the opposing
    /// gantry body (always), then the lower and upper optical-box faces
    /// against their selected PMT-holder outline (each only when its
    /// height index is enabled).
    fn ordering_is_clear(
        &self,
        moving: &GantryContext,
        stationary: &GantryContext,
        start: Point2D,
        end: Point2D,
        order: AxisOrder,
        heights: HeightFlags,
    ) -> Result<bool> {
        let steps = fine_steps(start, end, order, self.config.step_size);

        if !path_is_clear(
            &moving.body,
            &stationary.body,
            &steps,
            heights,
            &self.config.tank,
        ) {
            return Ok(false);
        }

        for face in [&moving.box_lower, &moving.box_upper]
            .into_iter()
            .flatten()
        {
            let Some(index) = face.height_index else {
                continue;
            };
            let holder = moving.pmt_holders.get(index).ok_or(
                PlannerError::HeightIndexOutOfRange {
                    index,
                    available: moving.pmt_holders.len(),
                },
            )?;
            if !path_is_clear(&face.footprint, holder, &steps, heights, &self.config.tank) {
                return Ok(false);
            }
        }

        Ok(true)
    }
}
