//! Planar-with-elevation geometry primitives.
//!
//! - `Point3D`, `Ring`: immutable vertex and closed boundary types.
//! - `project_point`: bearing/slope/divergence step from an origin. Every
//!   surface vertex is produced by this function or by `tessellate_arc`.
//! - `tessellate_arc`: flat circular arcs between two bearings around a center.
//!
//! Bearings are compass azimuths in degrees (0 = grid north, clockwise);
//! arc angles are mathematical (`atan2`, counterclockwise from +x).

mod arc;
mod project;
mod types;

pub use arc::{tessellate_arc, ArcDirection, MAX_ARC_VERTICES};
pub use project::project_point;
pub use types::{Point3D, Ring};
