//! Areas 2b, 2c and 2d.
//!
//! 2b and 2c are bounded by arcs of radius `length` drawn around the rail
//! corners at the end of Area 2a; the arc vertices rise `length * slope` above
//! the corner. 2d is a flat circle around the ARP.

use std::f64::consts::TAU;

use super::{rail_corner, EtodParams, Side, SurfaceKind, SurfaceSet};
use crate::error::SurfaceError;
use crate::geom::{project_point, tessellate_arc, ArcDirection, Point3D, Ring};
use crate::runway::{Aerodrome, Polarity, RunwayEnd};

/// Area 2b: the splaying takeoff sector of each end, low end first.
///
/// The two rings are point reflections of each other through the midpoint of
/// the departure ends whenever both ends share elevation and offset.
pub fn area_2b(ctx: &Aerodrome, params: &EtodParams) -> Result<SurfaceSet, SurfaceError> {
    params.validate()?;
    let (width, base) = ctx.strip_geometry()?;
    let rings = ctx
        .centerline
        .ends()
        .into_iter()
        .map(|end| splay_ring(ctx, end, end.true_offset(base), width / 2.0, params))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SurfaceSet::new(
        SurfaceKind::Area2b,
        &ctx.centerline.designator_pair(),
        rings,
    ))
}

fn splay_ring(
    ctx: &Aerodrome,
    end: &RunwayEnd,
    offset: f64,
    half: f64,
    params: &EtodParams,
) -> Result<Ring, SurfaceError> {
    // The low end sweeps clockwise starting on its left, the high end mirrors it.
    let (first, second, direction) = match end.polarity {
        Polarity::Low => (Side::Left, Side::Right, ArcDirection::Clockwise),
        Polarity::High => (Side::Right, Side::Left, ArcDirection::CounterClockwise),
    };
    let az = ctx.azimuth();
    let outbound = end.outbound_azimuth(az);
    let theta = params.splay_degrees();

    let c1 = rail_corner(end, az, offset, half, first);
    let c2 = rail_corner(end, az, offset, half, second);

    let mut points = vec![c1];
    points.extend(arc_about(c1, outbound + first.sign() * theta, outbound, direction, params)?);
    points.extend(arc_about(c2, outbound, outbound + second.sign() * theta, direction, params)?);
    points.push(c2);
    Ok(Ring::close(points))
}

/// Area 2c: the lateral areas joining both ends, left side then right side.
pub fn area_2c(ctx: &Aerodrome, params: &EtodParams) -> Result<SurfaceSet, SurfaceError> {
    params.validate()?;
    let (width, base) = ctx.strip_geometry()?;
    let rings = [Side::Left, Side::Right]
        .into_iter()
        .map(|side| lateral_ring(ctx, side, width / 2.0, base, params))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SurfaceSet::new(
        SurfaceKind::Area2c,
        &ctx.centerline.designator_pair(),
        rings,
    ))
}

/// `side` is taken relative to the low end's outbound direction.
fn lateral_ring(
    ctx: &Aerodrome,
    side: Side,
    half: f64,
    base: f64,
    params: &EtodParams,
) -> Result<Ring, SurfaceError> {
    let direction = match side {
        Side::Left => ArcDirection::CounterClockwise,
        Side::Right => ArcDirection::Clockwise,
    };
    let (low, high) = (&ctx.centerline.low_end, &ctx.centerline.high_end);
    let az = ctx.azimuth();
    let az_high = high.outbound_azimuth(az);
    let s = side.sign();
    let theta = params.splay_degrees();

    // Seen from the high end the same geometric side is the opposite one.
    let near = rail_corner(low, az, low.true_offset(base), half, side);
    let far = rail_corner(high, az, high.true_offset(base), half, side.opposite());

    let mut points = vec![near];
    points.extend(arc_about(near, az + s * theta, az + s * 90.0, direction, params)?);
    points.extend(arc_about(
        far,
        az_high - s * 90.0,
        az_high - s * theta,
        direction,
        params,
    )?);
    points.push(far);
    Ok(Ring::close(points))
}

/// Arc of radius `length` around `corner` between two compass bearings.
fn arc_about(
    corner: Point3D,
    from_bearing: f64,
    to_bearing: f64,
    direction: ArcDirection,
    params: &EtodParams,
) -> Result<Vec<Point3D>, SurfaceError> {
    let start = project_point(corner, params.length, from_bearing, params.slope, 0.0);
    let end = project_point(corner, params.length, to_bearing, params.slope, 0.0);
    tessellate_arc(
        corner.xy(),
        start,
        end,
        start.elevation,
        direction,
        params.arc_step_degrees,
    )
}

/// Area 2d: circle of `radius` around the ARP at reference elevation plus `height`.
pub fn area_2d(ctx: &Aerodrome, params: &EtodParams) -> Result<SurfaceSet, SurfaceError> {
    params.validate()?;
    let (center, reference_elevation) = ctx.reference_point()?;
    let elevation = reference_elevation + params.height;
    let n = params.resolution;
    let points = (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            Point3D::new(
                center.x + params.radius * angle.cos(),
                center.y + params.radius * angle.sin(),
                elevation,
            )
        })
        .collect();
    Ok(SurfaceSet::new(
        SurfaceKind::Area2d,
        &ctx.centerline.designator_pair(),
        vec![Ring::close(points)],
    ))
}
