use nalgebra::Vector2;
use std::f64::consts::TAU;

use super::types::Point3D;
use crate::error::SurfaceError;

/// Upper bound on the vertices of one tessellated arc or circle.
pub const MAX_ARC_VERTICES: usize = 100_000;

/// Rotation sense of an arc in the mathematical (counterclockwise-positive) frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArcDirection {
    Clockwise,
    CounterClockwise,
}

impl ArcDirection {
    /// Adjust `end` by one turn so that sweeping from `start` in this sense reaches it.
    ///
    /// Equal angles mean a full revolution.
    #[inline]
    pub fn unwrap_end(self, start: f64, end: f64) -> f64 {
        match self {
            ArcDirection::CounterClockwise if end <= start => end + TAU,
            ArcDirection::Clockwise if end >= start => end - TAU,
            _ => end,
        }
    }
}

/// Points on the circle through `start` around `center`, from `start` to `end`.
///
/// The radius is taken from `start`; `end` is only used for its angle and is
/// expected to lie on the same circle. The vertex count is
/// `floor(|span| / step) + 1`, spaced evenly and inclusive of both endpoints,
/// and every vertex carries `elevation` (the arc is flat). A step so fine that
/// the count would exceed [`MAX_ARC_VERTICES`] is an invalid parameter.
pub fn tessellate_arc(
    center: Vector2<f64>,
    start: Point3D,
    end: Point3D,
    elevation: f64,
    direction: ArcDirection,
    step_degrees: f64,
) -> Result<Vec<Point3D>, SurfaceError> {
    SurfaceError::require_positive("arc_step_degrees", step_degrees)?;
    let rs = start.xy() - center;
    let re = end.xy() - center;
    let radius = rs.norm();
    let start_angle = rs.y.atan2(rs.x);
    let end_angle = direction.unwrap_end(start_angle, re.y.atan2(re.x));
    let span = end_angle - start_angle;

    let steps = span.abs() / step_degrees.to_radians();
    if !steps.is_finite() || steps >= MAX_ARC_VERTICES as f64 {
        return Err(SurfaceError::invalid(
            "arc_step_degrees",
            format!(
                "{step_degrees} degrees over {:.3} degrees exceeds {MAX_ARC_VERTICES} vertices",
                span.abs().to_degrees()
            ),
        ));
    }
    let num_points = steps as usize + 1;
    if num_points < 2 {
        return Err(SurfaceError::DegenerateArc {
            span_degrees: span.abs().to_degrees(),
            step_degrees,
        });
    }
    let increment = span / (num_points - 1) as f64;

    Ok((0..num_points)
        .map(|i| {
            let angle = start_angle + i as f64 * increment;
            let p = center + Vector2::new(angle.cos(), angle.sin()) * radius;
            Point3D::new(p.x, p.y, elevation)
        })
        .collect())
}
