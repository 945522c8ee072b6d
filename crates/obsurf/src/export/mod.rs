//! Surface export to interchange documents.
//!
//! Purpose
//! - Serialize `SurfaceSet`s as KML or GeoJSON in a target reference system.
//!
//! Conventions
//! - Input rings are planar coordinates in `source_zone`.
//! - Geographic output is written `lon, lat, elevation` (EPSG:4326 axis order
//!   as used by both formats); elevations are absolute.
//! - One polygon per ring: paired surfaces (2b, 2c) stay separate features.
//!   Rings are numbered from 1 in both formats (`ring` property, `_N` suffix).
//! - KML is geographic only; asking for a UTM target is `UnsupportedTarget`.

mod geojson;
mod kml;

use std::fmt;

use crate::geodesy::UtmZone;
use crate::geom::Point3D;
use crate::surfaces::SurfaceSet;

/// Document format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Kml,
    GeoJson,
}

impl ExportFormat {
    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Kml => "kml",
            ExportFormat::GeoJson => "geojson",
        }
    }
}

/// Reference system of the written coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TargetCrs {
    /// Geographic WGS84 (EPSG:4326).
    #[default]
    Wgs84,
    /// Projected UTM north zone.
    Utm(UtmZone),
}

impl TargetCrs {
    pub fn epsg(self) -> u32 {
        match self {
            TargetCrs::Wgs84 => 4326,
            TargetCrs::Utm(zone) => zone.epsg(),
        }
    }

    /// Reproject a planar vertex from `source` into this system.
    pub(crate) fn coordinate(self, source: UtmZone, p: &Point3D) -> [f64; 3] {
        match self {
            TargetCrs::Wgs84 => {
                let (lat, lon) = source.inverse(p.x, p.y);
                [lon, lat, p.elevation]
            }
            TargetCrs::Utm(zone) if zone == source => [p.x, p.y, p.elevation],
            TargetCrs::Utm(zone) => {
                let (lat, lon) = source.inverse(p.x, p.y);
                let (x, y) = zone.forward(lat, lon);
                [x, y, p.elevation]
            }
        }
    }
}

impl fmt::Display for TargetCrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.epsg())
    }
}

/// Errors while writing a document.
#[derive(Debug)]
pub enum ExportError {
    UnsupportedTarget {
        format: ExportFormat,
        target: TargetCrs,
    },
    Json(serde_json::Error),
    Fmt(fmt::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedTarget { format, target } => {
                write!(f, "{format:?} documents cannot be written in {target}")
            }
            Self::Json(e) => write!(f, "GeoJSON serialization failed: {e}"),
            Self::Fmt(e) => write!(f, "KML formatting failed: {e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Fmt(e) => Some(e),
            Self::UnsupportedTarget { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<fmt::Error> for ExportError {
    fn from(e: fmt::Error) -> Self {
        Self::Fmt(e)
    }
}

/// Export a single surface as its own document.
pub fn export(
    set: &SurfaceSet,
    source_zone: UtmZone,
    target: TargetCrs,
    format: ExportFormat,
) -> Result<Vec<u8>, ExportError> {
    export_all(std::slice::from_ref(set), source_zone, target, format)
}

/// Export several surfaces into one document.
pub fn export_all(
    sets: &[SurfaceSet],
    source_zone: UtmZone,
    target: TargetCrs,
    format: ExportFormat,
) -> Result<Vec<u8>, ExportError> {
    match (format, target) {
        (ExportFormat::Kml, TargetCrs::Wgs84) => Ok(kml::document(sets, source_zone)?.into_bytes()),
        (ExportFormat::Kml, TargetCrs::Utm(_)) => {
            Err(ExportError::UnsupportedTarget { format, target })
        }
        (ExportFormat::GeoJson, _) => geojson::document(sets, source_zone, target),
    }
}
