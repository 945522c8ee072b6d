use serde::Serialize;

use super::{ExportError, TargetCrs};
use crate::geodesy::UtmZone;
use crate::surfaces::{SurfaceKind, SurfaceSet};

#[derive(Serialize)]
struct FeatureCollection<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    /// Legacy named CRS member, only written for projected output.
    #[serde(skip_serializing_if = "Option::is_none")]
    crs: Option<NamedCrs>,
    features: Vec<Feature<'a>>,
}

#[derive(Serialize)]
struct NamedCrs {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: CrsName,
}

#[derive(Serialize)]
struct CrsName {
    name: String,
}

#[derive(Serialize)]
struct Feature<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: Properties<'a>,
    geometry: Polygon,
}

#[derive(Serialize)]
struct Properties<'a> {
    name: &'a str,
    surface: SurfaceKind,
    annex: &'static str,
    ring: usize,
}

#[derive(Serialize)]
struct Polygon {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: Vec<Vec<[f64; 3]>>,
}

pub(super) fn document(
    sets: &[SurfaceSet],
    source: UtmZone,
    target: TargetCrs,
) -> Result<Vec<u8>, ExportError> {
    let features = sets
        .iter()
        .flat_map(|set| {
            set.rings.iter().enumerate().map(move |(i, ring)| Feature {
                kind: "Feature",
                properties: Properties {
                    name: &set.name,
                    surface: set.kind,
                    annex: set.kind.annex(),
                    ring: i + 1,
                },
                geometry: Polygon {
                    kind: "Polygon",
                    coordinates: vec![ring
                        .points()
                        .iter()
                        .map(|p| target.coordinate(source, p))
                        .collect()],
                },
            })
        })
        .collect();
    let crs = match target {
        TargetCrs::Wgs84 => None,
        TargetCrs::Utm(zone) => Some(NamedCrs {
            kind: "name",
            properties: CrsName {
                name: format!("urn:ogc:def:crs:EPSG::{}", zone.epsg()),
            },
        }),
    };
    let doc = FeatureCollection {
        kind: "FeatureCollection",
        crs,
        features,
    };
    Ok(serde_json::to_vec_pretty(&doc)?)
}
