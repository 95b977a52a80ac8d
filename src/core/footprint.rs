//! Immutable polygon footprints of tracked objects.
//!
//! A [`Footprint`] is the closed-ring outline of a physical object (gantry
//! body, optical-box face, PMT holder) in the tank's horizontal plane.
//! Footprints are snapshots: once built they are never mutated. Candidate
//! displacements are always tested against a translated *copy* — an earlier
//! generation of this planner translated the stored ring in place during
//! collision tests, which permanently shifted the shape and corrupted every
//! later check. [`Footprint::translated`] exists so that mistake cannot
//! recur.

use geo::algorithm::orient::{Direction, Orient};
use geo::{Contains, Coord, Intersects, LineString, Polygon};

use crate::core::point::Point2D;
use crate::error::{PlannerError, Result};

/// Closed-ring polygon footprint in tank-frame coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Footprint {
    /// Exterior ring without the closing vertex, winding-normalized.
    ring: Vec<Point2D>,
    /// Cached geo polygon for intersection/containment queries.
    poly: Polygon<f64>,
}

impl Footprint {
    /// Build a footprint from an ordered vertex list.
    ///
    /// The ring is closed implicitly (first and last vertex connected) and
    /// winding order is normalized so intersection predicates behave
    /// correctly. Fewer than 3 distinct vertices is rejected as
    /// [`PlannerError::DegenerateGeometry`].
    pub fn new(points: &[Point2D]) -> Result<Self> {
        let mut distinct: Vec<Point2D> = Vec::with_capacity(points.len());
        for p in points {
            if !distinct.contains(p) {
                distinct.push(*p);
            }
        }
        if distinct.len() < 3 {
            return Err(PlannerError::DegenerateGeometry {
                points: distinct.len(),
            });
        }

        let coords: Vec<Coord<f64>> = points.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
        let poly = Polygon::new(LineString::new(coords), vec![]).orient(Direction::Default);
        let ring = Self::open_ring(&poly);
        Ok(Self { ring, poly })
    }

    /// Return a new footprint with every vertex shifted by `(dx, dy)`.
    ///
    /// The source footprint is untouched; translation preserves winding so
    /// no re-normalization is needed.
    pub fn translated(&self, dx: f64, dy: f64) -> Footprint {
        let ring: Vec<Point2D> = self
            .ring
            .iter()
            .map(|p| Point2D::new(p.x + dx, p.y + dy))
            .collect();
        Self::from_ring(ring)
    }

    /// Rebuild a footprint from an already-normalized open ring.
    ///
    /// Used by the collision checker for its per-step working copy, where
    /// the ring came from a valid footprint and only differs by a rigid
    /// translation.
    pub(crate) fn from_ring(ring: Vec<Point2D>) -> Footprint {
        let mut coords: Vec<Coord<f64>> =
            ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
        if let Some(&first) = coords.first() {
            coords.push(first);
        }
        let poly = Polygon::new(LineString::new(coords), vec![]);
        Self { ring, poly }
    }

    /// Exterior ring vertices, closing vertex omitted.
    #[inline]
    pub fn vertices(&self) -> &[Point2D] {
        &self.ring
    }

    /// Strict interior containment test for a point (boundary excluded).
    #[inline]
    pub fn contains(&self, p: Point2D) -> bool {
        self.poly.contains(&geo::Point::new(p.x, p.y))
    }

    /// Overlap test against another footprint.
    ///
    /// Any shared point counts, including a boundary touch.
    #[inline]
    pub fn intersects(&self, other: &Footprint) -> bool {
        self.poly.intersects(&other.poly)
    }

    fn open_ring(poly: &Polygon<f64>) -> Vec<Point2D> {
        let coords = &poly.exterior().0;
        let open = if coords.len() > 1 {
            &coords[..coords.len() - 1]
        } else {
            &coords[..]
        };
        open.iter().map(|c| Point2D::new(c.x, c.y)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square(x0: f64, y0: f64) -> Footprint {
        Footprint::new(&[
            Point2D::new(x0, y0),
            Point2D::new(x0 + 1.0, y0),
            Point2D::new(x0 + 1.0, y0 + 1.0),
            Point2D::new(x0, y0 + 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_degenerate() {
        let err = Footprint::new(&[Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)]).unwrap_err();
        assert_eq!(err, PlannerError::DegenerateGeometry { points: 2 });

        // Repeated vertices don't count as distinct
        let err = Footprint::new(&[
            Point2D::new(0.0, 0.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
        ])
        .unwrap_err();
        assert_eq!(err, PlannerError::DegenerateGeometry { points: 2 });
    }

    #[test]
    fn test_winding_normalized() {
        // Same square, opposite input winding: predicates must agree
        let cw = Footprint::new(&[
            Point2D::new(0.0, 0.0),
            Point2D::new(0.0, 1.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(1.0, 0.0),
        ])
        .unwrap();
        let ccw = unit_square(0.0, 0.0);
        assert!(cw.contains(Point2D::new(0.5, 0.5)));
        assert!(ccw.contains(Point2D::new(0.5, 0.5)));
        assert!(cw.intersects(&ccw));
    }

    #[test]
    fn test_translate_leaves_source_unchanged() {
        let square = unit_square(0.0, 0.0);
        let before: Vec<Point2D> = square.vertices().to_vec();

        let moved = square.translated(2.5, -1.25);

        // Source is byte-for-byte unchanged
        assert_eq!(square.vertices(), before.as_slice());

        // Every moved vertex is source vertex plus the displacement
        for (a, b) in square.vertices().iter().zip(moved.vertices()) {
            assert_relative_eq!(b.x, a.x + 2.5);
            assert_relative_eq!(b.y, a.y - 1.25);
        }
    }

    #[test]
    fn test_contains_is_strict_interior() {
        let square = unit_square(0.0, 0.0);
        assert!(square.contains(Point2D::new(0.5, 0.5)));
        assert!(!square.contains(Point2D::new(0.0, 0.5))); // on boundary
        assert!(!square.contains(Point2D::new(1.5, 0.5)));
    }

    #[test]
    fn test_intersects_includes_boundary_touch() {
        let a = unit_square(0.0, 0.0);
        let b = unit_square(2.0, 0.0);
        assert!(!a.intersects(&b));

        // Shared edge at x = 1
        let touching = unit_square(1.0, 0.0);
        assert!(a.intersects(&touching));

        let overlapping = unit_square(0.5, 0.5);
        assert!(a.intersects(&overlapping));
    }
}
