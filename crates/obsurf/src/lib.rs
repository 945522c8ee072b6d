//! Obstacle-limitation surface geometry around a runway.
//!
//! The crate turns a surveyed runway (two thresholds, their departure ends,
//! clearways, strip dimensions) into the 3-D boundary rings of the takeoff
//! flight path areas (Annex 4) and the eTOD Area 2 sub-areas (Annex 15).
//!
//! Layers, leaf first
//! - `geodesy`: packed DMS decoding and UTM (WGS84, north family) projection.
//! - `runway`: runway ends, polarity, the resolved `Centerline`, the `Aerodrome` context.
//! - `geom`: `Point3D`, `Ring`, the point-projection primitive and arc tessellation.
//! - `surfaces`: one builder per regulatory surface.
//! - `export`: KML / GeoJSON documents reprojected to geographic coordinates.
//!
//! Everything is pure and synchronous; builders for one runway share a single
//! immutable `Aerodrome` so paired surfaces stay mirror images of each other.

pub mod error;
pub mod export;
pub mod geodesy;
pub mod geom;
pub mod runway;
pub mod survey;
pub mod surfaces;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::SurfaceError;
pub use surfaces::{etod_surfaces, tfpa_surfaces, SurfaceKind, SurfaceSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::SurfaceError;
    pub use crate::export::{export, export_all, ExportError, ExportFormat, TargetCrs};
    pub use crate::geodesy::{project, unproject, UtmZone};
    pub use crate::geom::{project_point, tessellate_arc, ArcDirection, Point3D, Ring};
    pub use crate::runway::{resolve, Aerodrome, Centerline, Polarity, RunwayEnd, RunwayEndSpec};
    pub use crate::survey::Survey;
    pub use crate::surfaces::{
        area_2a, area_2b, area_2c, area_2d, etod_surfaces, strip, takeoff_climb, tfpa_surfaces,
        EtodParams, SurfaceKind, SurfaceSet, TfpaParams,
    };
    pub use nalgebra::Vector2 as Vec2;
}
