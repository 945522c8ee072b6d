//! Packed sexagesimal angles (`DDDMMSS.ss`).

use crate::error::SurfaceError;

/// Degrees/minutes/seconds decoded from a positional packing.
///
/// `415742` means 41°57'42". The sign of the packed value is carried
/// separately so that `-415742` decodes to -41°57'42".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dms {
    pub negative: bool,
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl Dms {
    /// Parse a packed angle from survey text.
    pub fn parse_packed(text: &str) -> Result<Self, SurfaceError> {
        let value: f64 = text
            .trim()
            .parse()
            .map_err(|_| SurfaceError::malformed(text, "not a number"))?;
        Self::unpack(value).map_err(|err| match err {
            SurfaceError::MalformedCoordinate { reason, .. } => {
                SurfaceError::malformed(text, reason)
            }
            other => other,
        })
    }

    /// Split a packed value into its positional fields.
    pub fn unpack(value: f64) -> Result<Self, SurfaceError> {
        if !value.is_finite() {
            return Err(SurfaceError::malformed(value.to_string(), "not finite"));
        }
        let magnitude = value.abs();
        let degrees = (magnitude / 10_000.0).floor();
        let minutes = ((magnitude - degrees * 10_000.0) / 100.0).floor();
        let seconds = magnitude - degrees * 10_000.0 - minutes * 100.0;
        if minutes >= 60.0 {
            return Err(SurfaceError::malformed(
                value.to_string(),
                format!("minutes field {minutes} out of range"),
            ));
        }
        if seconds >= 60.0 {
            return Err(SurfaceError::malformed(
                value.to_string(),
                format!("seconds field {seconds} out of range"),
            ));
        }
        if degrees > 360.0 {
            return Err(SurfaceError::malformed(
                value.to_string(),
                format!("degrees field {degrees} out of range"),
            ));
        }
        Ok(Self {
            negative: value < 0.0,
            degrees: degrees as u32,
            minutes: minutes as u32,
            seconds,
        })
    }

    /// Re-pack into `DDDMMSS.ss` form.
    pub fn pack(&self) -> f64 {
        let magnitude =
            self.degrees as f64 * 10_000.0 + self.minutes as f64 * 100.0 + self.seconds;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    pub fn decimal_degrees(&self) -> f64 {
        let magnitude =
            self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}
