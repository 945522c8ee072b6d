//! Transverse Mercator on the WGS84 ellipsoid, UTM north parametrization.
//!
//! Uses the Krüger series in the third flattening `n` (4th order), which is
//! accurate to well below a millimetre inside a 6° zone.

use serde::Serialize;
use std::fmt;

/// WGS84 semi-major axis in meters.
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// UTM central-meridian scale factor.
pub const K0: f64 = 0.9996;
const FALSE_EASTING: f64 = 500_000.0;

/// Series coefficients derived once from the ellipsoid.
struct Kruger {
    /// Rectifying radius `A`.
    a_rect: f64,
    /// First eccentricity.
    e: f64,
    alpha: [f64; 4],
    beta: [f64; 4],
    delta: [f64; 4],
}

impl Kruger {
    fn wgs84() -> Self {
        let n = WGS84_F / (2.0 - WGS84_F);
        let (n2, n3, n4) = (n * n, n * n * n, n * n * n * n);
        let a_rect = WGS84_A / (1.0 + n) * (1.0 + n2 / 4.0 + n4 / 64.0);
        let e = 2.0 * n.sqrt() / (1.0 + n);
        Self {
            a_rect,
            e,
            alpha: [
                n / 2.0 - 2.0 * n2 / 3.0 + 5.0 * n3 / 16.0 + 41.0 * n4 / 180.0,
                13.0 * n2 / 48.0 - 3.0 * n3 / 5.0 + 557.0 * n4 / 1440.0,
                61.0 * n3 / 240.0 - 103.0 * n4 / 140.0,
                49561.0 * n4 / 161_280.0,
            ],
            beta: [
                n / 2.0 - 2.0 * n2 / 3.0 + 37.0 * n3 / 96.0 - n4 / 360.0,
                n2 / 48.0 + n3 / 15.0 - 437.0 * n4 / 1440.0,
                17.0 * n3 / 480.0 - 37.0 * n4 / 840.0,
                4397.0 * n4 / 161_280.0,
            ],
            delta: [
                2.0 * n - 2.0 * n2 / 3.0 - 2.0 * n3 + 116.0 * n4 / 45.0,
                7.0 * n2 / 3.0 - 8.0 * n3 / 5.0 - 227.0 * n4 / 45.0,
                56.0 * n3 / 15.0 - 136.0 * n4 / 35.0,
                4279.0 * n4 / 630.0,
            ],
        }
    }
}

/// A UTM north zone (1..=60).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UtmZone(u8);

impl UtmZone {
    /// Zone containing `lon` (degrees). Longitude 180° folds into zone 60.
    pub fn for_longitude(lon: f64) -> Self {
        let zone = ((lon + 180.0) / 6.0).floor() as i64 + 1;
        Self(zone.clamp(1, 60) as u8)
    }

    /// Construct from a zone number; `None` outside 1..=60.
    pub fn new(number: u8) -> Option<Self> {
        (1..=60).contains(&number).then_some(Self(number))
    }

    #[inline]
    pub fn number(&self) -> u8 {
        self.0
    }

    /// EPSG code of the zone (`326zz`).
    #[inline]
    pub fn epsg(&self) -> u32 {
        32_600 + self.0 as u32
    }

    /// Central meridian in degrees.
    #[inline]
    pub fn central_meridian(&self) -> f64 {
        self.0 as f64 * 6.0 - 183.0
    }

    /// Geodetic degrees to easting/northing.
    pub fn forward(&self, lat: f64, lon: f64) -> (f64, f64) {
        let k = Kruger::wgs84();
        let phi = lat.to_radians();
        let dlam = (lon - self.central_meridian()).to_radians();

        let t = (phi.sin().atanh() - k.e * (k.e * phi.sin()).atanh()).sinh();
        let xi_p = t.atan2(dlam.cos());
        let eta_p = (dlam.sin() / (1.0 + t * t).sqrt()).atanh();

        let mut xi = xi_p;
        let mut eta = eta_p;
        for (j, a) in k.alpha.iter().enumerate() {
            let m = 2.0 * (j as f64 + 1.0);
            xi += a * (m * xi_p).sin() * (m * eta_p).cosh();
            eta += a * (m * xi_p).cos() * (m * eta_p).sinh();
        }
        (
            FALSE_EASTING + K0 * k.a_rect * eta,
            K0 * k.a_rect * xi,
        )
    }

    /// Easting/northing back to geodetic `(lat, lon)` degrees.
    pub fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let k = Kruger::wgs84();
        let xi = y / (K0 * k.a_rect);
        let eta = (x - FALSE_EASTING) / (K0 * k.a_rect);

        let mut xi_p = xi;
        let mut eta_p = eta;
        for (j, b) in k.beta.iter().enumerate() {
            let m = 2.0 * (j as f64 + 1.0);
            xi_p -= b * (m * xi).sin() * (m * eta).cosh();
            eta_p -= b * (m * xi).cos() * (m * eta).sinh();
        }
        let chi = (xi_p.sin() / eta_p.cosh()).asin();
        let mut phi = chi;
        for (j, d) in k.delta.iter().enumerate() {
            let m = 2.0 * (j as f64 + 1.0);
            phi += d * (m * chi).sin();
        }
        let dlam = eta_p.sinh().atan2(xi_p.cos());
        (phi.to_degrees(), self.central_meridian() + dlam.to_degrees())
    }
}

impl fmt::Display for UtmZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTM {}N (EPSG:{})", self.0, self.epsg())
    }
}
