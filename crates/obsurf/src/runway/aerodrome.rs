use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::Centerline;
use crate::error::SurfaceError;
use crate::geodesy::UtmZone;
use crate::geom::Point3D;

/// Paved runway dimensions in meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunwayDims {
    pub length: f64,
    pub width: f64,
}

/// Runway strip dimensions in meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StripDims {
    pub length: f64,
    pub width: f64,
}

/// Immutable per-runway context shared by all surface builders.
///
/// Carries the projection zone, the resolved centerline, the strip geometry
/// and the aerodrome reference point.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Aerodrome {
    pub icao: String,
    pub zone: UtmZone,
    pub centerline: Centerline,
    pub runway: Option<RunwayDims>,
    pub strip: Option<StripDims>,
    /// Aerodrome reference point; its elevation is the aerodrome reference elevation.
    pub arp: Option<Point3D>,
}

impl Aerodrome {
    /// Assemble the context, validating the strip geometry when present.
    pub fn new(
        icao: impl Into<String>,
        zone: UtmZone,
        centerline: Centerline,
        runway: Option<RunwayDims>,
        strip: Option<StripDims>,
        arp: Option<Point3D>,
    ) -> Result<Self, SurfaceError> {
        for end in centerline.ends() {
            SurfaceError::require_non_negative("clearway_length", end.clearway_length)?;
        }
        let centerline = match (runway, strip) {
            (Some(rwy), Some(stp)) => {
                SurfaceError::require_positive("runway.length", rwy.length)?;
                SurfaceError::require_positive("runway.width", rwy.width)?;
                SurfaceError::require_positive("strip.width", stp.width)?;
                let offset = (stp.length - rwy.length) / 2.0;
                if offset.is_nan() || offset <= 0.0 {
                    return Err(SurfaceError::invalid(
                        "strip.length",
                        format!(
                            "strip ({}) must be longer than the runway ({})",
                            stp.length, rwy.length
                        ),
                    ));
                }
                centerline.with_strip_offset(offset)
            }
            _ => centerline,
        };
        Ok(Self {
            icao: icao.into(),
            zone,
            centerline,
            runway,
            strip,
            arp,
        })
    }

    #[inline]
    pub fn azimuth(&self) -> f64 {
        self.centerline.azimuth_degrees
    }

    /// Strip width and base strip offset, required by the strip-relative surfaces.
    pub fn strip_geometry(&self) -> Result<(f64, f64), SurfaceError> {
        match (self.runway, self.strip) {
            (Some(rwy), Some(stp)) => Ok((stp.width, (stp.length - rwy.length) / 2.0)),
            _ => Err(SurfaceError::invalid(
                "strip",
                "runway and strip dimensions are required for this surface",
            )),
        }
    }

    /// ARP in the plane plus the reference elevation.
    pub fn reference_point(&self) -> Result<(Vector2<f64>, f64), SurfaceError> {
        self.arp
            .map(|p| (p.xy(), p.elevation))
            .ok_or_else(|| SurfaceError::invalid("arp", "aerodrome reference point is required"))
    }

    /// `"LWSK_RWY16-34"` style label.
    pub fn label(&self) -> String {
        format!("{}_RWY{}", self.icao, self.centerline.designator_pair())
    }
}
