//! Survey input: what a user hands the tool for one runway.
//!
//! Angles are packed sexagesimal strings (`DDMMSS.ss`, negative for south and
//! west). The survey is plain serde data; `Aerodrome::from_survey` projects it
//! and resolves the centerline.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SurfaceError;
use crate::geodesy::{project, UtmZone};
use crate::geom::Point3D;
use crate::runway::{resolve, Aerodrome, RunwayDims, RunwayEndSpec, StripDims};
use crate::surfaces::{EtodParams, TfpaParams};

/// A surveyed position with elevation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurveyPoint {
    pub lat: String,
    pub lon: String,
    pub elevation: f64,
}

/// Horizontal position only (the ARP).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurveyPosition {
    pub lat: String,
    pub lon: String,
}

/// One runway direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndSurvey {
    pub designator: String,
    /// Landing threshold of this designator.
    pub threshold: SurveyPoint,
    /// Runway end in the direction of operation; the opposite threshold when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runway_end: Option<SurveyPoint>,
    /// Clearway length in meters.
    #[serde(default)]
    pub clearway: f64,
}

/// Everything needed to build the surfaces of one runway.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    /// ICAO location indicator.
    pub airport: String,
    pub ends: [EndSurvey; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arp: Option<SurveyPosition>,
    /// Aerodrome reference elevation (m); required with `arp`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_elevation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runway: Option<RunwayDims>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip: Option<StripDims>,
    #[serde(default)]
    pub tfpa: TfpaParams,
    #[serde(default)]
    pub etod: EtodParams,
}

impl Survey {
    /// A filled-in survey for Skopje 16/34, used by `obsurf template` and the demos.
    pub fn template() -> Self {
        let point = |lat: &str, lon: &str, elevation: f64| SurveyPoint {
            lat: lat.to_string(),
            lon: lon.to_string(),
            elevation,
        };
        Self {
            airport: "LWSK".to_string(),
            ends: [
                EndSurvey {
                    designator: "16".to_string(),
                    threshold: point("415832.50", "213701.20", 236.0),
                    runway_end: None,
                    clearway: 0.0,
                },
                EndSurvey {
                    designator: "34".to_string(),
                    threshold: point("415706.80", "213744.90", 239.0),
                    runway_end: None,
                    clearway: 150.0,
                },
            ],
            arp: Some(SurveyPosition {
                lat: "415800.00".to_string(),
                lon: "213722.00".to_string(),
            }),
            reference_elevation: Some(238.0),
            runway: Some(RunwayDims {
                length: 2830.0,
                width: 45.0,
            }),
            strip: Some(StripDims {
                length: 2950.0,
                width: 280.0,
            }),
            tfpa: TfpaParams::default(),
            etod: EtodParams::default(),
        }
    }
}

fn project_point3(p: &SurveyPoint) -> Result<(UtmZone, Point3D), SurfaceError> {
    let (zone, x, y) = project(&p.lat, &p.lon)?;
    Ok((zone, Point3D::new(x, y, p.elevation)))
}

impl Aerodrome {
    /// Project a survey and resolve its centerline.
    ///
    /// Each position is projected in the zone of its own longitude. The
    /// aerodrome zone is the ARP's (or the first threshold's without an ARP);
    /// positions falling in another zone are kept but logged, the planar
    /// geometry across a zone boundary is not corrected.
    pub fn from_survey(survey: &Survey) -> Result<Self, SurfaceError> {
        let [a, b] = &survey.ends;
        let (zone_a, thr_a) = project_point3(&a.threshold)?;
        let (zone_b, thr_b) = project_point3(&b.threshold)?;
        let mut zones = vec![zone_a, zone_b];

        let mut departure_end = |end: &EndSurvey, opposite: Point3D| match &end.runway_end {
            Some(p) => project_point3(p).map(|(z, pt)| {
                zones.push(z);
                pt
            }),
            None => Ok(opposite),
        };
        let dep_a = departure_end(a, thr_b)?;
        let dep_b = departure_end(b, thr_a)?;

        let arp = match (&survey.arp, survey.reference_elevation) {
            (Some(pos), Some(elev)) => {
                let (zone, x, y) = project(&pos.lat, &pos.lon)?;
                zones.insert(0, zone);
                Some(Point3D::new(x, y, elev))
            }
            (Some(_), None) => {
                return Err(SurfaceError::invalid(
                    "reference_elevation",
                    "required when an aerodrome reference point is given",
                ))
            }
            (None, Some(_)) => {
                return Err(SurfaceError::invalid(
                    "arp",
                    "required when a reference elevation is given",
                ))
            }
            (None, None) => None,
        };
        let zone = zones[0];
        if zones.iter().any(|z| *z != zone) {
            warn!(
                aerodrome = %survey.airport,
                zone = zone.number(),
                zones = ?zones.iter().map(UtmZone::number).collect::<Vec<_>>(),
                "survey straddles UTM zones; planar geometry uses per-point zones"
            );
        }

        let centerline = resolve(
            RunwayEndSpec {
                designator: a.designator.clone(),
                threshold: thr_a,
                departure_end: dep_a,
                clearway_length: a.clearway,
            },
            RunwayEndSpec {
                designator: b.designator.clone(),
                threshold: thr_b,
                departure_end: dep_b,
                clearway_length: b.clearway,
            },
        )?;
        debug!(
            aerodrome = %survey.airport,
            %zone,
            azimuth = centerline.azimuth_degrees,
            "resolved centerline"
        );
        Aerodrome::new(
            survey.airport.clone(),
            zone,
            centerline,
            survey.runway,
            survey.strip,
            arp,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[test]
    fn template_resolves() {
        let ctx = Aerodrome::from_survey(&Survey::template()).unwrap();
        assert_eq!(ctx.zone.number(), 34);
        assert_eq!(ctx.label(), "LWSK_RWY16-34");
        // 16 is the western threshold and runs south-south-east.
        assert!(ctx.azimuth() > 150.0 && ctx.azimuth() < 170.0);
        assert_eq!(ctx.centerline.low_end.strip_offset, 60.0);
        assert_eq!(ctx.centerline.high_end.clearway_length, 150.0);
        // Without explicit runway ends each end departs toward the other threshold.
        assert_eq!(
            ctx.centerline.low_end.departure_end,
            ctx.centerline.high_end.threshold
        );
        let arp = ctx.arp.unwrap();
        assert_eq!(arp.elevation, 238.0);
    }

    #[test]
    fn parameter_blocks_fall_back_to_defaults() {
        let json = r#"{
            "airport": "TEST",
            "ends": [
                {"designator": "09", "threshold": {"lat": "450000", "lon": "150000", "elevation": 10.0}},
                {"designator": "27", "threshold": {"lat": "450010", "lon": "150200", "elevation": 12.0},
                 "clearway": 200.0}
            ],
            "etod": {"height": 100.0}
        }"#;
        let survey: Survey = serde_json::from_str(json).unwrap();
        assert_eq!(survey.tfpa, TfpaParams::default());
        assert_eq!(survey.etod.height, 100.0);
        assert_eq!(survey.etod.radius, EtodParams::default().radius);
        assert_eq!(survey.ends[0].clearway, 0.0);
        assert!(survey.runway.is_none());

        let ctx = Aerodrome::from_survey(&survey).unwrap();
        assert_eq!(ctx.centerline.low_end.designator, "09");
        assert!(ctx.arp.is_none());
    }

    #[test]
    fn template_round_trips_through_json() {
        let survey = Survey::template();
        let text = serde_json::to_string_pretty(&survey).unwrap();
        let back: Survey = serde_json::from_str(&text).unwrap();
        assert_eq!(back, survey);
    }

    #[test]
    fn arp_without_reference_elevation_is_rejected() {
        let mut survey = Survey::template();
        survey.reference_elevation = None;
        let err = Aerodrome::from_survey(&survey).unwrap_err();
        assert!(matches!(
            err,
            SurfaceError::InvalidSurfaceParameter { name: "reference_elevation", .. }
        ));
    }

    #[test]
    fn reference_elevation_without_arp_is_rejected() {
        let mut survey = Survey::template();
        survey.arp = None;
        let err = Aerodrome::from_survey(&survey).unwrap_err();
        assert!(matches!(
            err,
            SurfaceError::InvalidSurfaceParameter { name: "arp", .. }
        ));
        survey.reference_elevation = None;
        assert!(Aerodrome::from_survey(&survey).unwrap().arp.is_none());
    }

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn zone_straddle_is_logged_and_keeps_the_first_zone() {
        // 17°59'50" E is in zone 33, 18°01'00" E in zone 34.
        let json = r#"{
            "airport": "EDGE",
            "ends": [
                {"designator": "09", "threshold": {"lat": "450000", "lon": "175950", "elevation": 80.0}},
                {"designator": "27", "threshold": {"lat": "450000", "lon": "180100", "elevation": 82.0}}
            ]
        }"#;
        let survey: Survey = serde_json::from_str(json).unwrap();
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer({
                let captured = captured.clone();
                move || captured.clone()
            })
            .with_ansi(false)
            .finish();
        let ctx = tracing::subscriber::with_default(subscriber, || Aerodrome::from_survey(&survey))
            .unwrap();

        assert_eq!(ctx.zone.number(), 33);
        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("survey straddles UTM zones"), "{logs}");
        assert!(logs.contains("aerodrome=EDGE"), "{logs}");
    }

    #[test]
    fn single_zone_survey_logs_no_warning() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer({
                let captured = captured.clone();
                move || captured.clone()
            })
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            Aerodrome::from_survey(&Survey::template()).unwrap()
        });
        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(!logs.contains("straddles"), "{logs}");
    }

    #[test]
    fn malformed_threshold_propagates() {
        let mut survey = Survey::template();
        survey.ends[1].threshold.lat = "41576x".to_string();
        assert!(matches!(
            Aerodrome::from_survey(&survey),
            Err(SurfaceError::MalformedCoordinate { .. })
        ));
    }
}
