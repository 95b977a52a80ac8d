//! # Yantra-Path: collision-free gantry motion planning
//!
//! Path planning library for two mechanical gantries carrying
//! instrumentation over a cylindrical tank. Each gantry is a rigid 2D
//! footprint translating in the tank's horizontal plane; the planner
//! produces a sequence of incremental displacements that moves one gantry
//! to a destination without intersecting the other gantry, the active
//! optical-box/PMT-holder obstacles, or the tank boundary.
//!
//! ## Quick start
//!
//! ```rust
//! use yantra_path::{
//!     Footprint, GantryContext, HeightFlags, PathPlanner, PlannerConfig, Point2D, TankBounds,
//! };
//!
//! let body = |x0: f64, y0: f64| {
//!     Footprint::new(&[
//!         Point2D::new(x0, y0),
//!         Point2D::new(x0 + 1.0, y0),
//!         Point2D::new(x0 + 1.0, y0 + 1.0),
//!         Point2D::new(x0, y0 + 1.0),
//!     ])
//!     .unwrap()
//! };
//!
//! let config = PlannerConfig {
//!     tank: TankBounds::new(Point2D::ZERO, 100.0, 100.0),
//!     step_size: 0.001,
//! };
//! let planner = PathPlanner::new(
//!     config,
//!     GantryContext::new(body(0.0, 0.0)),
//!     GantryContext::new(body(5.0, 5.0)),
//! )
//! .unwrap();
//!
//! let in_tank = HeightFlags::new(false, false);
//! let path = planner
//!     .calculate_path(Point2D::new(0.5, 0.5), Point2D::new(2.5, 0.5), in_tank, in_tank)
//!     .unwrap();
//! assert_eq!(path.len(), 1); // pure X move: one corner waypoint
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types ([`Point2D`], [`Footprint`])
//! - [`tank`]: tank boundary model
//! - [`path`]: fine/coarse waypoint sequence generation
//! - [`collision`]: step-wise sweep of a moving footprint
//! - [`planner`]: classification, destination validation, axis-ordering
//!   search
//! - [`config`]: TOML-loadable planner configuration
//!
//! Planning is pure synchronous computation over caller-supplied geometry:
//! no I/O, no locks, no state carried between calls. Collision tests
//! always run on translated copies, never on the stored footprints.

pub mod collision;
pub mod config;
pub mod core;
pub mod error;
pub mod path;
pub mod planner;
pub mod tank;

pub use collision::{path_is_clear, HeightFlags};
pub use config::PlannerConfig;
pub use core::{Footprint, Point2D};
pub use error::{PlannerError, Result};
pub use path::{corner_steps, fine_steps, AxisOrder, Step};
pub use planner::{GantryContext, GantryId, OpticalBoxFace, PathPlanner};
pub use tank::TankBounds;
