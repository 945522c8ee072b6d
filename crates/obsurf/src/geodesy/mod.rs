//! Geodetic input decoding and the UTM projection.
//!
//! Purpose
//! - Decode survey angles packed as `DDDMMSS.ss` into decimal degrees.
//! - Project WGS84 geodetic coordinates into the UTM north zone derived from
//!   the longitude, and back again for export.
//!
//! Conventions
//! - Zones are always from the north family (EPSG `326zz`). Southern latitudes
//!   yield negative northings, there is no false northing switch.
//! - Each point is projected in its own zone; callers that mix zones get
//!   inconsistent planar geometry. `Aerodrome::from_survey` logs a warning for that.

mod dms;
mod utm;

pub use dms::Dms;
pub use utm::{UtmZone, K0, WGS84_A, WGS84_F};

use crate::error::SurfaceError;

/// Decode a packed latitude/longitude pair and project it.
///
/// Returns the zone the longitude falls into plus easting/northing in meters.
pub fn project(
    coded_latitude: &str,
    coded_longitude: &str,
) -> Result<(UtmZone, f64, f64), SurfaceError> {
    let lat = Dms::parse_packed(coded_latitude)?;
    let lon = Dms::parse_packed(coded_longitude)?;
    let (lat, lon) = (lat.decimal_degrees(), lon.decimal_degrees());
    if lat.abs() > 90.0 {
        return Err(SurfaceError::malformed(coded_latitude, "latitude beyond ±90°"));
    }
    if lon.abs() > 180.0 {
        return Err(SurfaceError::malformed(coded_longitude, "longitude beyond ±180°"));
    }
    let zone = UtmZone::for_longitude(lon);
    let (x, y) = zone.forward(lat, lon);
    Ok((zone, x, y))
}

/// Inverse of `project` for an already-known zone: planar meters to `(lat, lon)` degrees.
#[inline]
pub fn unproject(zone: UtmZone, x: f64, y: f64) -> (f64, f64) {
    zone.inverse(x, y)
}

#[cfg(test)]
mod tests;
