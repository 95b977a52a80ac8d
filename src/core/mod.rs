//! Core geometric types for the path planner.
//!
//! - [`Point2D`]: tank-frame coordinates and displacements
//! - [`Footprint`]: immutable closed-ring polygon outlines

mod footprint;
mod point;

pub use footprint::Footprint;
pub use point::Point2D;
