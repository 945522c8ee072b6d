use super::{rail_corner, Side, SurfaceKind, SurfaceSet, TfpaParams};
use crate::error::SurfaceError;
use crate::geom::{project_point, Point3D, Ring};
use crate::runway::{Aerodrome, RunwayEnd};

/// Smallest longitudinal offset of the inner edge; keeps the corner divergence finite.
const MIN_INNER_OFFSET: f64 = 0.001;

/// Takeoff flight path area of one runway end.
///
/// The inner edge sits at the end of the clearway. Each rail splays out at
/// `divergence` until the final width is reached, then runs parallel to the
/// centerline to the far edge, climbing at `slope` the whole way.
pub fn takeoff_climb(
    ctx: &Aerodrome,
    end: &RunwayEnd,
    params: &TfpaParams,
) -> Result<SurfaceSet, SurfaceError> {
    params.validate()?;
    SurfaceError::require_non_negative("clearway_length", end.clearway_length)?;
    let az = ctx.azimuth();
    let outbound = end.outbound_azimuth(az);
    let offset = end.clearway_length.max(MIN_INNER_OFFSET);
    let splay = params.splay_length();
    let parallel = params.length - splay;
    let half = params.inner_width / 2.0;

    let rail = |side: Side| -> [Point3D; 3] {
        let inner = rail_corner(end, az, offset, half, side);
        let knee = project_point(
            inner,
            splay,
            outbound,
            params.slope,
            side.sign() * params.divergence,
        );
        let outer = project_point(knee, parallel, outbound, params.slope, 0.0);
        [inner, knee, outer]
    };
    let [a1, a2, a3] = rail(Side::Left);
    let [a4, a5, a6] = rail(Side::Right);

    Ok(SurfaceSet::new(
        SurfaceKind::Tfpa,
        &end.designator,
        vec![Ring::close(vec![a1, a2, a3, a6, a5, a4])],
    ))
}
