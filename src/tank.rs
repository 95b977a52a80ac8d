//! Tank boundary model.
//!
//! The tank is a vertical cylinder; gantries travel in its horizontal
//! plane. Besides the circular wall there is a ring of PMT-holder hardware
//! near the rim that limits how far a vertex may travel laterally (in Y,
//! away from the tank centre) while the gantry is below the rim.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

/// Physical tank limits for the collision checker.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TankBounds {
    /// Tank centre in the gantry coordinate frame (metres)
    #[serde(default = "default_center")]
    pub center: Point2D,

    /// Outer tank radius (metres)
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Max lateral |Y| offset from centre where PMT holders sit (metres)
    #[serde(default = "default_pmt_holder_limit")]
    pub pmt_holder_limit: f64,
}

impl TankBounds {
    /// Create tank bounds from centre, radius, and PMT-holder limit.
    pub fn new(center: Point2D, radius: f64, pmt_holder_limit: f64) -> Self {
        Self {
            center,
            radius,
            pmt_holder_limit,
        }
    }

    /// True when a vertex lies outside the tank limits: radial distance
    /// from centre beyond the wall, or lateral Y offset beyond the
    /// PMT-holder ring.
    #[inline]
    pub fn violates(&self, v: Point2D) -> bool {
        let dx = (v.x - self.center.x).abs();
        let dy = (v.y - self.center.y).abs();
        (dx * dx + dy * dy).sqrt() > self.radius || dy > self.pmt_holder_limit
    }
}

impl Default for TankBounds {
    fn default() -> Self {
        Self {
            center: default_center(),
            radius: default_radius(),
            pmt_holder_limit: default_pmt_holder_limit(),
        }
    }
}

// Defaults are the surveyed installation geometry; real deployments load
// theirs from config.
fn default_center() -> Point2D {
    Point2D::new(0.366, 0.371)
}
fn default_radius() -> f64 {
    0.61
}
fn default_pmt_holder_limit() -> f64 {
    0.53
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_tank() -> TankBounds {
        TankBounds::new(Point2D::ZERO, 1.0, 0.8)
    }

    #[test]
    fn test_inside_is_clear() {
        let tank = open_tank();
        assert!(!tank.violates(Point2D::ZERO));
        assert!(!tank.violates(Point2D::new(0.9, 0.0)));
        assert!(!tank.violates(Point2D::new(0.0, 0.79)));
    }

    #[test]
    fn test_radial_violation() {
        let tank = open_tank();
        assert!(tank.violates(Point2D::new(1.01, 0.0)));
        assert!(tank.violates(Point2D::new(0.8, 0.8))); // sqrt(1.28) > 1.0
    }

    #[test]
    fn test_lateral_pmt_holder_violation() {
        let tank = open_tank();
        // Inside the circle but past the holder ring in |Y|
        assert!(tank.violates(Point2D::new(0.0, 0.85)));
        assert!(tank.violates(Point2D::new(0.0, -0.85)));
        // Same offset in X is fine
        assert!(!tank.violates(Point2D::new(0.85, 0.0)));
    }

    #[test]
    fn test_offset_center() {
        let tank = TankBounds::new(Point2D::new(0.366, 0.371), 0.61, 0.53);
        assert!(!tank.violates(Point2D::new(0.366, 0.371)));
        assert!(tank.violates(Point2D::new(0.366 + 0.62, 0.371)));
        assert!(tank.violates(Point2D::new(0.366, 0.371 + 0.54)));
    }
}
