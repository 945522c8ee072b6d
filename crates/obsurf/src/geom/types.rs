use nalgebra::Vector2;
use serde::Serialize;
use std::fmt;

/// A vertex in the projected plane with an elevation in meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub elevation: f64,
}

impl Point3D {
    #[inline]
    pub fn new(x: f64, y: f64, elevation: f64) -> Self {
        Self { x, y, elevation }
    }

    /// Planar part as a vector.
    #[inline]
    pub fn xy(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Shift in the plane by `d` and vertically by `dz`.
    #[inline]
    pub fn offset(&self, d: Vector2<f64>, dz: f64) -> Self {
        Self::new(self.x + d.x, self.y + d.y, self.elevation + dz)
    }

    /// Planar distance, elevation ignored.
    #[inline]
    pub fn planar_distance(&self, other: &Point3D) -> f64 {
        (self.xy() - other.xy()).norm()
    }

    /// Point reflection through `center` (elevation kept).
    #[cfg(test)]
    pub(crate) fn reflect_through(&self, center: Vector2<f64>) -> Self {
        let p = center * 2.0 - self.xy();
        Self::new(p.x, p.y, self.elevation)
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(
            f,
            "({:.*}, {:.*}, {:.*})",
            precision, self.x, precision, self.y, precision, self.elevation
        )
    }
}

/// Closed polygon boundary: the first vertex is repeated at the end.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ring(Vec<Point3D>);

impl Ring {
    /// Close an open vertex sequence by repeating its first vertex.
    ///
    /// Sequences that already end on their first vertex are kept as-is.
    pub fn close(mut points: Vec<Point3D>) -> Self {
        if let Some(first) = points.first().copied() {
            if points.last() != Some(&first) || points.len() == 1 {
                points.push(first);
            }
        }
        Self(points)
    }

    #[inline]
    pub fn points(&self) -> &[Point3D] {
        &self.0
    }

    /// Vertex count including the closing repeat.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.0.len() >= 2 && self.0.first() == self.0.last()
    }

    /// Highest vertex elevation.
    pub fn max_elevation(&self) -> f64 {
        self.0
            .iter()
            .map(|p| p.elevation)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Shoelace area of the planar projection (positive for CCW).
    #[cfg(test)]
    pub(crate) fn signed_area(&self) -> f64 {
        self.0
            .windows(2)
            .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
            .sum::<f64>()
            / 2.0
    }
}
