//! Error kinds shared by the projector, the centerline resolver, the
//! primitives and the surface builders.
//!
//! Every error is terminal for the computation it belongs to: inputs are
//! deterministic, so nothing here is retried and no partial surface is returned.

use std::fmt;

/// Errors surfaced while constructing surface geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// Unparseable or out-of-range packed sexagesimal input.
    MalformedCoordinate { input: String, reason: String },
    /// Both runway thresholds project to the same `x` (vertical or coincident centerline).
    DegenerateCenterline { low_x: f64, high_x: f64 },
    /// The angular span of an arc is shorter than one tessellation step.
    DegenerateArc { span_degrees: f64, step_degrees: f64 },
    /// A regulatory constant or survey dimension is out of its valid range.
    InvalidSurfaceParameter { name: &'static str, reason: String },
}

impl SurfaceError {
    pub(crate) fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedCoordinate {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSurfaceParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Reject values that are not strictly positive (NaN included).
    pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::invalid(name, format!("must be positive, got {value}")))
        }
    }

    /// Reject negative or non-finite values; zero is allowed.
    pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::invalid(name, format!("must be non-negative, got {value}")))
        }
    }
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedCoordinate { input, reason } => {
                write!(f, "malformed coordinate {input:?}: {reason}")
            }
            Self::DegenerateCenterline { low_x, high_x } => write!(
                f,
                "degenerate centerline: both thresholds project to x = {low_x} / {high_x}"
            ),
            Self::DegenerateArc {
                span_degrees,
                step_degrees,
            } => write!(
                f,
                "degenerate arc: span of {span_degrees}° is shorter than the {step_degrees}° step"
            ),
            Self::InvalidSurfaceParameter { name, reason } => {
                write!(f, "invalid surface parameter `{name}`: {reason}")
            }
        }
    }
}

impl std::error::Error for SurfaceError {}
