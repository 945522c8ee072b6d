use super::{abeam, rail_corner, Side, SurfaceKind, SurfaceSet};
use crate::error::SurfaceError;
use crate::geom::{Point3D, Ring};
use crate::runway::{Aerodrome, RunwayEnd};

/// Runway strip rectangle at the base strip extension.
pub fn strip(ctx: &Aerodrome) -> Result<SurfaceSet, SurfaceError> {
    let (width, base) = ctx.strip_geometry()?;
    let ring = strip_ring(ctx, width, |_| base);
    Ok(SurfaceSet::new(
        SurfaceKind::Strip,
        &ctx.centerline.designator_pair(),
        vec![ring],
    ))
}

/// Area 2a: the strip rectangle pushed out to each end's clearway when the
/// clearway is longer than the strip extension.
pub fn area_2a(ctx: &Aerodrome) -> Result<SurfaceSet, SurfaceError> {
    let (width, base) = ctx.strip_geometry()?;
    let ring = strip_ring(ctx, width, |end| end.true_offset(base));
    Ok(SurfaceSet::new(
        SurfaceKind::Area2a,
        &ctx.centerline.designator_pair(),
        vec![ring],
    ))
}

/// Per end: abeam left, left corner, right corner, abeam right; low end first.
fn strip_ring(ctx: &Aerodrome, width: f64, offset: impl Fn(&RunwayEnd) -> f64) -> Ring {
    let az = ctx.azimuth();
    let half = width / 2.0;
    let points: Vec<Point3D> = ctx
        .centerline
        .ends()
        .into_iter()
        .flat_map(|end| {
            let d = offset(end);
            [
                abeam(end, az, half, Side::Left),
                rail_corner(end, az, d, half, Side::Left),
                rail_corner(end, az, d, half, Side::Right),
                abeam(end, az, half, Side::Right),
            ]
        })
        .collect();
    Ring::close(points)
}
