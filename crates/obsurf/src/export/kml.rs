use std::fmt::Write;

use super::TargetCrs;
use crate::geodesy::UtmZone;
use crate::geom::Ring;
use crate::surfaces::SurfaceSet;

/// One folder per surface, one placemark per ring.
pub(super) fn document(sets: &[SurfaceSet], source: UtmZone) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, r#"<?xml version="1.0" encoding="utf-8" ?>"#)?;
    writeln!(out, r#"<kml xmlns="http://www.opengis.net/kml/2.2">"#)?;
    writeln!(out, "<Document>")?;
    for set in sets {
        writeln!(out, "<Folder><name>{}</name>", escape(&set.name))?;
        for (i, ring) in set.rings.iter().enumerate() {
            placemark(&mut out, &set.name, set.kind.annex(), i, ring, source)?;
        }
        writeln!(out, "</Folder>")?;
    }
    writeln!(out, "</Document>")?;
    writeln!(out, "</kml>")?;
    Ok(out)
}

fn placemark(
    out: &mut String,
    name: &str,
    annex: &str,
    index: usize,
    ring: &Ring,
    source: UtmZone,
) -> std::fmt::Result {
    writeln!(out, "  <Placemark>")?;
    writeln!(out, "    <name>{}_{}</name>", escape(name), index + 1)?;
    writeln!(out, "    <description>{}</description>", escape(annex))?;
    writeln!(out, "    <Polygon>")?;
    writeln!(out, "      <altitudeMode>absolute</altitudeMode>")?;
    writeln!(out, "      <outerBoundaryIs><LinearRing><coordinates>")?;
    for p in ring.points() {
        let [lon, lat, z] = TargetCrs::Wgs84.coordinate(source, p);
        writeln!(out, "        {lon:.9},{lat:.9},{z:.3}")?;
    }
    writeln!(out, "      </coordinates></LinearRing></outerBoundaryIs>")?;
    writeln!(out, "    </Polygon>")?;
    writeln!(out, "  </Placemark>")
}

fn escape(text: &str) -> String {
    let mut s = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&apos;"),
            _ => s.push(c),
        }
    }
    s
}
