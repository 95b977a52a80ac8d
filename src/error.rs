//! Error types for the gantry path planner.
//!
//! Planning failures (blocked destination, no clear ordering) are expected,
//! operator-visible outcomes. They are reported as values, never panics, so
//! the motion-control layer can surface the reason and let an operator pick
//! a different target.

use thiserror::Error;

/// Path planner error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// A supplied polygon has fewer than 3 distinct vertices.
    #[error("degenerate polygon: {points} distinct point(s), need at least 3")]
    DegenerateGeometry { points: usize },

    /// The start point lies inside neither gantry body.
    #[error("start point lies inside neither gantry body")]
    StartOutsideGantries,

    /// The destination lies inside the opposing gantry body.
    #[error("destination lies inside the opposing gantry")]
    InvalidDestination,

    /// Both axis orderings collided; no L-shaped path exists.
    #[error("no collision-free path in either axis ordering")]
    NoCollisionFreePath,

    /// An optical-box height index points past the end of the PMT-holder list.
    #[error("height index {index} out of range ({available} PMT-holder polygon(s) loaded)")]
    HeightIndexOutOfRange { index: usize, available: usize },

    /// Configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for PlannerError {
    fn from(e: toml::de::Error) -> Self {
        PlannerError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
