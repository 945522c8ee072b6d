use super::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn unpack_reference_airport_point() {
    let lat = Dms::parse_packed("415742").unwrap();
    assert_eq!((lat.degrees, lat.minutes), (41, 57));
    assert!((lat.seconds - 42.0).abs() < 1e-9);
    let expected = 41.0 + 57.0 / 60.0 + 42.0 / 3600.0;
    assert!((lat.decimal_degrees() - expected).abs() < 1e-12);
}

#[test]
fn unpack_keeps_fractional_seconds_and_sign() {
    let lon = Dms::parse_packed(" -0213717.25 ").unwrap();
    assert!(lon.negative);
    assert_eq!((lon.degrees, lon.minutes), (21, 37));
    assert!((lon.seconds - 17.25).abs() < 1e-6);
    assert!(lon.decimal_degrees() < 0.0);
}

#[test]
fn malformed_inputs_are_rejected() {
    for bad in ["", "abc", "41N57", "NaN", "inf", "417042", "415762"] {
        assert!(
            matches!(
                Dms::parse_packed(bad),
                Err(SurfaceError::MalformedCoordinate { .. })
            ),
            "{bad:?} should be malformed"
        );
    }
    // 95°00'00" latitude decodes but is out of range for projection.
    assert!(matches!(
        project("950000", "213717"),
        Err(SurfaceError::MalformedCoordinate { .. })
    ));
}

#[test]
fn zone_from_longitude() {
    assert_eq!(UtmZone::for_longitude(21.62).number(), 34);
    assert_eq!(UtmZone::for_longitude(-0.5).number(), 30);
    assert_eq!(UtmZone::for_longitude(3.0).number(), 31);
    assert_eq!(UtmZone::for_longitude(-180.0).number(), 1);
    assert_eq!(UtmZone::for_longitude(180.0).number(), 60);
    assert_eq!(UtmZone::for_longitude(21.62).epsg(), 32634);
    assert!(UtmZone::new(0).is_none());
    assert!(UtmZone::new(61).is_none());
}

#[test]
fn central_meridian_maps_to_false_easting() {
    let zone = UtmZone::new(31).unwrap();
    let (x, y) = zone.forward(0.0, 3.0);
    assert!((x - 500_000.0).abs() < 1e-6);
    assert!(y.abs() < 1e-6);
    // Meridian arc to 45° on WGS84 is 4 984 944.378 m, scaled by k0.
    let (x45, y45) = zone.forward(45.0, 3.0);
    assert!((x45 - 500_000.0).abs() < 1e-6);
    assert!((y45 - 0.9996 * 4_984_944.378).abs() < 0.05);
}

#[test]
fn eastings_are_symmetric_about_the_central_meridian() {
    let zone = UtmZone::new(34).unwrap();
    let cm = zone.central_meridian();
    let (xe, ye) = zone.forward(41.96, cm + 1.7);
    let (xw, yw) = zone.forward(41.96, cm - 1.7);
    assert!(((xe - 500_000.0) + (xw - 500_000.0)).abs() < 1e-6);
    assert!((ye - yw).abs() < 1e-6);
}

#[test]
fn project_packed_airport_reference_point() {
    let (zone, x, y) = project("415742", "213717").unwrap();
    assert_eq!(zone.number(), 34);
    // East of the 21° central meridian, roughly 4.65e6 m north.
    assert!(x > 500_000.0 && x < 560_000.0);
    assert!(y > 4_600_000.0 && y < 4_700_000.0);
    let (lat, lon) = unproject(zone, x, y);
    assert!((lat - (41.0 + 57.0 / 60.0 + 42.0 / 3600.0)).abs() < 1e-9);
    assert!((lon - (21.0 + 37.0 / 60.0 + 17.0 / 3600.0)).abs() < 1e-9);
}

#[test]
fn projection_round_trip_randomized_seeded() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..500 {
        let lat: f64 = rng.gen_range(-80.0..84.0);
        let lon: f64 = rng.gen_range(-180.0..180.0);
        let zone = UtmZone::for_longitude(lon);
        let (x, y) = zone.forward(lat, lon);
        let (x_back, y_back) = {
            let (lat2, lon2) = zone.inverse(x, y);
            zone.forward(lat2, lon2)
        };
        // Sub-millimetre in the plane.
        assert!((x - x_back).abs() < 1e-3 && (y - y_back).abs() < 1e-3);
        let (lat2, lon2) = zone.inverse(x, y);
        assert!((lat - lat2).abs() < 1e-8, "lat {lat} -> {lat2}");
        assert!((lon - lon2).abs() < 1e-8, "lon {lon} -> {lon2}");
    }
}

proptest! {
    #[test]
    fn pack_unpack_round_trip(d in 0u32..180, m in 0u32..60, s in 0.0f64..59.999) {
        let packed = Dms { negative: false, degrees: d, minutes: m, seconds: s }.pack();
        let back = Dms::unpack(packed).unwrap();
        prop_assert_eq!(back.degrees, d);
        prop_assert_eq!(back.minutes, m);
        prop_assert!((back.seconds - s).abs() < 1e-6);
    }

    #[test]
    fn negative_packing_mirrors_positive(d in 0u32..90, m in 0u32..60, s in 0.0f64..59.999) {
        let pos = Dms { negative: false, degrees: d, minutes: m, seconds: s };
        let neg = Dms { negative: true, ..pos };
        let back = Dms::unpack(neg.pack()).unwrap();
        prop_assert!((back.decimal_degrees() + pos.decimal_degrees()).abs() < 1e-9);
    }
}
