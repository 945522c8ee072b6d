//! Surface builders: strip, takeoff flight path areas and eTOD Area 2.
//!
//! Purpose
//! - Turn one `Aerodrome` plus a parameter block into named sets of closed
//!   3-D rings, one `SurfaceSet` per regulatory surface.
//!
//! Conventions
//! - Every builder starts from the runway end's `departure_end` and walks the
//!   end's outbound azimuth (`Polarity::outbound_azimuth`).
//! - "Left" and "right" are relative to that outbound direction. A rail corner
//!   is projected with divergence `±halfwidth / offset`, which lands it exactly
//!   `offset` ahead and `halfwidth` aside.
//! - Builders are all-or-nothing: any error means no `SurfaceSet` at all.
//! - Rings are closed (`Ring::close`), elevations in meters above the datum
//!   of the survey.

mod area2;
mod params;
mod strip;
mod tfpa;

pub use area2::{area_2b, area_2c, area_2d};
pub use params::{EtodParams, TfpaParams};
pub use strip::{area_2a, strip};
pub use tfpa::takeoff_climb;

use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use crate::error::SurfaceError;
use crate::geom::{project_point, Point3D, Ring};
use crate::runway::{Aerodrome, RunwayEnd};

/// Which regulatory surface a set of rings belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SurfaceKind {
    Strip,
    Tfpa,
    Area2a,
    Area2b,
    Area2c,
    Area2d,
}

impl SurfaceKind {
    /// Name prefix used in exported layer names.
    pub fn prefix(self) -> &'static str {
        match self {
            SurfaceKind::Strip => "Strip",
            SurfaceKind::Tfpa => "TFPA",
            SurfaceKind::Area2a => "Area_2a",
            SurfaceKind::Area2b => "Area_2b",
            SurfaceKind::Area2c => "Area_2c",
            SurfaceKind::Area2d => "Area_2d",
        }
    }

    /// Governing annex of the surface.
    pub fn annex(self) -> &'static str {
        match self {
            SurfaceKind::Tfpa => "Annex4",
            _ => "Annex15",
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A named collection of closed rings for one regulatory surface.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SurfaceSet {
    /// `"Area_2b_RWY09-27"` / `"TFPA_RWY09"` style name.
    pub name: String,
    pub kind: SurfaceKind,
    pub rings: Vec<Ring>,
}

impl SurfaceSet {
    /// Name a set after the runway pair (or a single designator).
    pub(crate) fn new(kind: SurfaceKind, runway_label: &str, rings: Vec<Ring>) -> Self {
        let set = Self {
            name: format!("{}_RWY{}", kind.prefix(), runway_label),
            kind,
            rings,
        };
        debug!(
            surface = %set.name,
            rings = set.rings.len(),
            vertices = set.vertex_count(),
            "built surface"
        );
        set
    }

    /// Total vertex count over all rings (closing repeats included).
    pub fn vertex_count(&self) -> usize {
        self.rings.iter().map(Ring::len).sum()
    }

    /// Highest vertex elevation over all rings.
    pub fn max_elevation(&self) -> f64 {
        self.rings
            .iter()
            .map(Ring::max_elevation)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Lateral side relative to an end's outbound direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of the divergence (and bearing offset) toward this side.
    #[inline]
    pub(crate) fn sign(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    #[inline]
    pub(crate) fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Rail corner `offset` ahead of the departure end and `halfwidth` to `side`,
/// at the departure end's elevation.
pub(crate) fn rail_corner(
    end: &RunwayEnd,
    azimuth: f64,
    offset: f64,
    halfwidth: f64,
    side: Side,
) -> Point3D {
    project_point(
        end.departure_end,
        offset,
        end.outbound_azimuth(azimuth),
        0.0,
        side.sign() * halfwidth / offset,
    )
}

/// Point abeam the departure end, `halfwidth` to `side` (no longitudinal offset).
pub(crate) fn abeam(end: &RunwayEnd, azimuth: f64, halfwidth: f64, side: Side) -> Point3D {
    project_point(
        end.departure_end,
        halfwidth,
        end.outbound_azimuth(azimuth) + side.sign() * 90.0,
        0.0,
        0.0,
    )
}

/// One takeoff flight path area per runway end, low end first.
pub fn tfpa_surfaces(
    ctx: &Aerodrome,
    params: &TfpaParams,
) -> Result<Vec<SurfaceSet>, SurfaceError> {
    params.validate()?;
    ctx.centerline
        .ends()
        .into_iter()
        .map(|end| takeoff_climb(ctx, end, params))
        .collect()
}

/// Areas 2a, 2b, 2c and 2d, in that order.
///
/// Area 2d needs the aerodrome reference point; without it the circle is
/// skipped with a warning and the other three areas are still returned.
pub fn etod_surfaces(
    ctx: &Aerodrome,
    params: &EtodParams,
) -> Result<Vec<SurfaceSet>, SurfaceError> {
    params.validate()?;
    let mut sets = vec![area_2a(ctx)?, area_2b(ctx, params)?, area_2c(ctx, params)?];
    if ctx.arp.is_some() {
        sets.push(area_2d(ctx, params)?);
    } else {
        warn!(aerodrome = %ctx.icao, "no aerodrome reference point, skipping Area 2d");
    }
    Ok(sets)
}
