use nalgebra::Vector2;

use super::types::Point3D;

/// Step from `origin` along a bearing, optionally splayed by a divergence.
///
/// - `azimuth_deg`: compass bearing of the undiverged axis.
/// - `divergence`: lateral slope of the track (`tan` of the splay angle, not an angle).
///   The track is rotated by `atan(divergence)` and lengthened to
///   `distance / cos(atan(divergence))`, so the point still advances `distance`
///   along the undiverged axis and `distance * divergence` sideways.
/// - `slope`: rise per meter of the *undiverged* distance. The rise ignores the
///   lengthening above; surfaces are specified by their longitudinal gradient.
pub fn project_point(
    origin: Point3D,
    distance: f64,
    azimuth_deg: f64,
    slope: f64,
    divergence: f64,
) -> Point3D {
    let splay = divergence.atan();
    let heading = azimuth_deg.to_radians() + splay;
    let inclined = distance / splay.cos();
    let step = Vector2::new(heading.sin(), heading.cos()) * inclined;
    origin.offset(step, distance * slope)
}
