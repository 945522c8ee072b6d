//! Runway ends, their ordering and the resolved centerline.
//!
//! The two thresholds are ordered by projected easting: the western one is the
//! low end (polarity -1), the eastern one the high end (+1). The centerline
//! azimuth is the compass bearing from low toward high and is computed exactly
//! once; every surface builder reads it from the same `Centerline`.

mod aerodrome;

pub use aerodrome::{Aerodrome, RunwayDims, StripDims};

use serde::Serialize;

use crate::error::SurfaceError;
use crate::geom::Point3D;

/// Which side of the sorted pair an end landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Polarity {
    /// Smaller easting; its surfaces point along the centerline azimuth.
    Low,
    /// Larger easting; its surfaces point along the reciprocal.
    High,
}

impl Polarity {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Polarity::Low => -1.0,
            Polarity::High => 1.0,
        }
    }

    /// Bearing of the departure direction of an end with this polarity.
    ///
    /// The reciprocal is `azimuth - 180` without renormalization; only its
    /// sine and cosine are ever used.
    #[inline]
    pub fn outbound_azimuth(self, centerline_azimuth: f64) -> f64 {
        match self {
            Polarity::Low => centerline_azimuth,
            Polarity::High => centerline_azimuth - 180.0,
        }
    }
}

/// A surveyed runway end before ordering.
#[derive(Clone, Debug, PartialEq)]
pub struct RunwayEndSpec {
    pub designator: String,
    /// Landing threshold of this designator (drives ordering and azimuth).
    pub threshold: Point3D,
    /// Runway end at the far side in the direction of operation; surfaces start here.
    pub departure_end: Point3D,
    pub clearway_length: f64,
}

/// A runway end after ordering.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunwayEnd {
    pub designator: String,
    pub threshold: Point3D,
    pub departure_end: Point3D,
    pub clearway_length: f64,
    /// Base strip extension beyond the runway end, `(strip - runway) / 2`.
    pub strip_offset: f64,
    pub polarity: Polarity,
}

impl RunwayEnd {
    fn from_spec(spec: RunwayEndSpec, polarity: Polarity) -> Self {
        Self {
            designator: spec.designator,
            threshold: spec.threshold,
            departure_end: spec.departure_end,
            clearway_length: spec.clearway_length,
            strip_offset: 0.0,
            polarity,
        }
    }

    /// Longitudinal offset of the surface inner edge: the larger of the
    /// regulatory base offset and this end's clearway.
    #[inline]
    pub fn true_offset(&self, base_offset: f64) -> f64 {
        if self.clearway_length > base_offset {
            self.clearway_length
        } else {
            base_offset
        }
    }

    #[inline]
    pub fn outbound_azimuth(&self, centerline_azimuth: f64) -> f64 {
        self.polarity.outbound_azimuth(centerline_azimuth)
    }
}

/// Ordered runway ends plus the shared azimuth.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Centerline {
    pub low_end: RunwayEnd,
    pub high_end: RunwayEnd,
    /// Compass bearing from `low_end` toward `high_end`, in [0, 360).
    pub azimuth_degrees: f64,
}

impl Centerline {
    /// Both ends, low first.
    #[inline]
    pub fn ends(&self) -> [&RunwayEnd; 2] {
        [&self.low_end, &self.high_end]
    }

    /// `"09-27"` style pair label, low end first.
    pub fn designator_pair(&self) -> String {
        format!("{}-{}", self.low_end.designator, self.high_end.designator)
    }

    /// Planar midpoint of the two departure ends.
    pub fn midpoint(&self) -> nalgebra::Vector2<f64> {
        (self.low_end.departure_end.xy() + self.high_end.departure_end.xy()) / 2.0
    }

    /// Apply a strip extension to both ends.
    pub(crate) fn with_strip_offset(mut self, strip_offset: f64) -> Self {
        self.low_end.strip_offset = strip_offset;
        self.high_end.strip_offset = strip_offset;
        self
    }
}

/// Order two runway ends and derive the centerline azimuth.
///
/// Equal threshold eastings (a grid-north runway, or coincident points) are
/// rejected with `DegenerateCenterline` instead of producing infinities.
pub fn resolve(end_a: RunwayEndSpec, end_b: RunwayEndSpec) -> Result<Centerline, SurfaceError> {
    let (low, high) = if end_a.threshold.x > end_b.threshold.x {
        (end_b, end_a)
    } else {
        (end_a, end_b)
    };
    let dx = high.threshold.x - low.threshold.x;
    if dx == 0.0 || !dx.is_finite() {
        return Err(SurfaceError::DegenerateCenterline {
            low_x: low.threshold.x,
            high_x: high.threshold.x,
        });
    }
    let m = (high.threshold.y - low.threshold.y) / dx;
    let alpha = m.atan();
    let azimuth = (std::f64::consts::FRAC_PI_2 - alpha).to_degrees();
    Ok(Centerline {
        low_end: RunwayEnd::from_spec(low, Polarity::Low),
        high_end: RunwayEnd::from_spec(high, Polarity::High),
        azimuth_degrees: azimuth.rem_euclid(360.0),
    })
}

#[cfg(test)]
mod tests;
