//! Waypoint sequence generation.
//!
//! Two representations exist for the same start/end pair:
//!
//! - a *fine* sequence of fixed-magnitude steps, one axis fully traversed
//!   before the other, used only for collision validation;
//! - a *coarse* corner-only sequence (at most one step per axis, full
//!   remaining delta each) handed to the motor layer once validation has
//!   passed, so the motors are called no more than needed.
//!
//! Both are lists of incremental displacements, applied cumulatively.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

/// One incremental displacement of a moving footprint.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Step {
    /// X displacement in metres
    pub dx: f64,
    /// Y displacement in metres
    pub dy: f64,
}

impl Step {
    /// Create a new step
    #[inline]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Which axis is traversed first in an L-shaped path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrder {
    /// Full X delta first, then full Y delta
    XFirst,
    /// Full Y delta first, then full X delta
    YFirst,
}

/// Generate the fine validation sequence for one axis ordering.
///
/// Per axis the step magnitude is `step_size` with the delta's sign and the
/// count is `round(delta / step)`; a zero delta contributes no steps. The
/// granularity trades validation fidelity for iteration count — a coarse
/// step can tunnel through an obstacle thinner than the step, so keep it
/// small relative to the thinnest obstacle.
pub fn fine_steps(start: Point2D, end: Point2D, order: AxisOrder, step_size: f64) -> Vec<Step> {
    let (count_x, step_x) = axis_steps(end.x - start.x, step_size);
    let (count_y, step_y) = axis_steps(end.y - start.y, step_size);

    let mut steps = Vec::with_capacity(count_x + count_y);
    match order {
        AxisOrder::XFirst => {
            steps.extend(std::iter::repeat(Step::new(step_x, 0.0)).take(count_x));
            steps.extend(std::iter::repeat(Step::new(0.0, step_y)).take(count_y));
        }
        AxisOrder::YFirst => {
            steps.extend(std::iter::repeat(Step::new(0.0, step_y)).take(count_y));
            steps.extend(std::iter::repeat(Step::new(step_x, 0.0)).take(count_x));
        }
    }
    steps
}

/// Generate the coarse corner-only sequence for one axis ordering.
///
/// At most two waypoints, one per axis; an axis with zero delta is
/// omitted. Safety of the straight segments between corners relies on the
/// fine sequence having been validated along the same trajectory.
pub fn corner_steps(start: Point2D, end: Point2D, order: AxisOrder) -> Vec<Step> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    let mut steps = Vec::with_capacity(2);
    match order {
        AxisOrder::XFirst => {
            if dx != 0.0 {
                steps.push(Step::new(dx, 0.0));
            }
            if dy != 0.0 {
                steps.push(Step::new(0.0, dy));
            }
        }
        AxisOrder::YFirst => {
            if dy != 0.0 {
                steps.push(Step::new(0.0, dy));
            }
            if dx != 0.0 {
                steps.push(Step::new(dx, 0.0));
            }
        }
    }
    steps
}

/// Signed step and step count covering one axis delta.
fn axis_steps(delta: f64, step_size: f64) -> (usize, f64) {
    let step = if delta < 0.0 { -step_size } else { step_size };
    // delta / step is non-negative by construction
    let count = (delta / step).round() as usize;
    (count, step)
}
