use super::*;
use crate::geodesy::UtmZone;

fn spec(designator: &str, threshold: Point3D, departure_end: Point3D) -> RunwayEndSpec {
    RunwayEndSpec {
        designator: designator.to_string(),
        threshold,
        departure_end,
        clearway_length: 0.0,
    }
}

fn east_west() -> (RunwayEndSpec, RunwayEndSpec) {
    let west = Point3D::new(500_000.0, 4_500_000.0, 100.0);
    let east = Point3D::new(502_500.0, 4_500_000.0, 104.0);
    (spec("09", west, east), spec("27", east, west))
}

#[test]
fn orders_by_easting_regardless_of_argument_order() {
    let (a, b) = east_west();
    let c1 = resolve(a.clone(), b.clone()).unwrap();
    let c2 = resolve(b, a).unwrap();
    assert_eq!(c1, c2);
    assert_eq!(c1.low_end.designator, "09");
    assert_eq!(c1.low_end.polarity, Polarity::Low);
    assert_eq!(c1.high_end.polarity, Polarity::High);
    assert_eq!(c1.designator_pair(), "09-27");
}

#[test]
fn azimuth_is_compass_bearing_low_to_high() {
    let (a, b) = east_west();
    let c = resolve(a, b).unwrap();
    assert!((c.azimuth_degrees - 90.0).abs() < 1e-12);

    // 45° north-east.
    let sw = Point3D::new(0.0, 0.0, 0.0);
    let ne = Point3D::new(1000.0, 1000.0, 0.0);
    let c = resolve(spec("04", sw, ne), spec("22", ne, sw)).unwrap();
    assert!((c.azimuth_degrees - 45.0).abs() < 1e-9);

    // South-east heading from the western end.
    let nw = Point3D::new(0.0, 1000.0, 0.0);
    let se = Point3D::new(1000.0, 0.0, 0.0);
    let c = resolve(spec("13", nw, se), spec("31", se, nw)).unwrap();
    assert!((c.azimuth_degrees - 135.0).abs() < 1e-9);
}

#[test]
fn grid_north_runway_is_degenerate() {
    let s = Point3D::new(500_000.0, 4_500_000.0, 0.0);
    let n = Point3D::new(500_000.0, 4_502_500.0, 0.0);
    let err = resolve(spec("36", s, n), spec("18", n, s)).unwrap_err();
    assert!(matches!(err, SurfaceError::DegenerateCenterline { .. }));
}

#[test]
fn coincident_thresholds_are_degenerate() {
    let p = Point3D::new(1.0, 2.0, 3.0);
    let err = resolve(spec("A", p, p), spec("B", p, p)).unwrap_err();
    assert!(matches!(err, SurfaceError::DegenerateCenterline { .. }));
}

#[test]
fn outbound_azimuth_follows_polarity() {
    assert_eq!(Polarity::Low.outbound_azimuth(70.0), 70.0);
    assert_eq!(Polarity::High.outbound_azimuth(70.0), -110.0);
    assert_eq!(Polarity::Low.sign(), -1.0);
    assert_eq!(Polarity::High.sign(), 1.0);
}

#[test]
fn true_offset_takes_the_longer_of_strip_and_clearway() {
    let (mut a, b) = east_west();
    a.clearway_length = 150.0;
    let c = resolve(a, b).unwrap().with_strip_offset(60.0);
    assert_eq!(c.low_end.true_offset(c.low_end.strip_offset), 150.0);
    assert_eq!(c.high_end.true_offset(c.high_end.strip_offset), 60.0);
}

#[test]
fn aerodrome_validates_strip_geometry() {
    let (a, b) = east_west();
    let c = resolve(a, b).unwrap();
    let zone = UtmZone::new(34).unwrap();
    let rwy = RunwayDims { length: 2450.0, width: 45.0 };

    let ok = Aerodrome::new(
        "LWSK",
        zone,
        c.clone(),
        Some(rwy),
        Some(StripDims { length: 2570.0, width: 300.0 }),
        None,
    )
    .unwrap();
    assert_eq!(ok.centerline.low_end.strip_offset, 60.0);
    assert_eq!(ok.strip_geometry().unwrap(), (300.0, 60.0));
    assert!(ok.reference_point().is_err());
    assert_eq!(ok.label(), "LWSK_RWY09-27");

    let short = Aerodrome::new(
        "LWSK",
        zone,
        c.clone(),
        Some(rwy),
        Some(StripDims { length: 2400.0, width: 300.0 }),
        None,
    );
    assert!(matches!(
        short,
        Err(SurfaceError::InvalidSurfaceParameter { name: "strip.length", .. })
    ));

    let bare = Aerodrome::new("LWSK", zone, c, None, None, None).unwrap();
    assert!(bare.strip_geometry().is_err());
}
