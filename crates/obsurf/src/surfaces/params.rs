//! Regulatory constants for the two surface families.
//!
//! Defaults follow the values the survey tooling has always used: Annex 15
//! Area 2 for eTOD, Annex 4 Type A for the takeoff flight path areas. Both
//! structs deserialize with `#[serde(default)]` so a survey only has to name
//! the values it overrides.

use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;
use crate::geom::MAX_ARC_VERTICES;

/// Takeoff flight path area parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfpaParams {
    /// Overall length along the centerline (m).
    pub length: f64,
    /// Inner edge width (m).
    pub inner_width: f64,
    /// Lateral divergence on each side (ratio).
    pub divergence: f64,
    /// Width once the splay ends (m).
    pub final_width: f64,
    /// Climb gradient (ratio).
    pub slope: f64,
}

impl Default for TfpaParams {
    fn default() -> Self {
        Self {
            length: 10_000.0,
            inner_width: 180.0,
            divergence: 0.125,
            final_width: 1_800.0,
            slope: 0.012,
        }
    }
}

impl TfpaParams {
    pub fn validate(&self) -> Result<(), SurfaceError> {
        SurfaceError::require_positive("tfpa.length", self.length)?;
        SurfaceError::require_positive("tfpa.inner_width", self.inner_width)?;
        SurfaceError::require_positive("tfpa.divergence", self.divergence)?;
        SurfaceError::require_positive("tfpa.final_width", self.final_width)?;
        SurfaceError::require_non_negative("tfpa.slope", self.slope)?;
        if self.final_width < self.inner_width {
            return Err(SurfaceError::invalid(
                "tfpa.final_width",
                format!(
                    "final width {} is below the inner edge width {}",
                    self.final_width, self.inner_width
                ),
            ));
        }
        Ok(())
    }

    /// Length of the diverging section, capped at the area length.
    ///
    /// When the final width cannot be reached within `length` the splay runs
    /// to the far edge and the parallel section vanishes.
    pub fn splay_length(&self) -> f64 {
        ((self.final_width - self.inner_width) / 2.0 / self.divergence).min(self.length)
    }
}

/// eTOD Area 2 parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EtodParams {
    /// Rise gradient of Areas 2b and 2c (ratio).
    pub slope: f64,
    /// Radius of the 2b/2c arcs measured from the rail corners (m).
    pub length: f64,
    /// Radius of Area 2d around the ARP (m).
    pub radius: f64,
    /// Height of Area 2d above the aerodrome reference elevation (m).
    pub height: f64,
    /// Splay of Area 2b (ratio).
    pub divergence: f64,
    /// Angular tessellation step of the arcs (degrees).
    pub arc_step_degrees: f64,
    /// Vertex count of the Area 2d circle.
    pub resolution: usize,
}

impl Default for EtodParams {
    fn default() -> Self {
        Self {
            slope: 0.012,
            length: 10_000.0,
            radius: 45_000.0,
            height: 120.0,
            divergence: 0.15,
            arc_step_degrees: 1.0,
            resolution: 360,
        }
    }
}

impl EtodParams {
    pub fn validate(&self) -> Result<(), SurfaceError> {
        SurfaceError::require_non_negative("etod.slope", self.slope)?;
        SurfaceError::require_positive("etod.length", self.length)?;
        SurfaceError::require_positive("etod.radius", self.radius)?;
        SurfaceError::require_non_negative("etod.height", self.height)?;
        SurfaceError::require_positive("etod.divergence", self.divergence)?;
        SurfaceError::require_positive("etod.arc_step_degrees", self.arc_step_degrees)?;
        if self.resolution < 3 || self.resolution > MAX_ARC_VERTICES {
            return Err(SurfaceError::invalid(
                "etod.resolution",
                format!(
                    "needs 3 to {MAX_ARC_VERTICES} vertices, got {}",
                    self.resolution
                ),
            ));
        }
        if 360.0 / self.arc_step_degrees >= MAX_ARC_VERTICES as f64 {
            return Err(SurfaceError::invalid(
                "etod.arc_step_degrees",
                format!(
                    "{} degrees would exceed {MAX_ARC_VERTICES} vertices per arc",
                    self.arc_step_degrees
                ),
            ));
        }
        Ok(())
    }

    /// Splay angle of Area 2b in degrees.
    #[inline]
    pub fn splay_degrees(&self) -> f64 {
        self.divergence.atan().to_degrees()
    }
}
