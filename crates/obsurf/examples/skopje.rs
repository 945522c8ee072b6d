//! Build every surface for the bundled Skopje survey and print a summary.
//!
//! Purpose
//! - Quick visual check of ring and vertex counts after touching a builder.
//! - Optionally dump the eTOD set as GeoJSON: `cargo run --example skopje -- out.geojson`.

use obsurf::prelude::*;

fn main() {
    let survey = Survey::template();
    let ctx = Aerodrome::from_survey(&survey).expect("template survey resolves");
    println!(
        "{} {} azimuth={:.3}° low={} high={}",
        ctx.label(),
        ctx.zone,
        ctx.azimuth(),
        ctx.centerline.low_end.designator,
        ctx.centerline.high_end.designator
    );

    let mut sets = vec![strip(&ctx).expect("strip")];
    sets.extend(etod_surfaces(&ctx, &survey.etod).expect("etod surfaces"));
    sets.extend(tfpa_surfaces(&ctx, &survey.tfpa).expect("tfpa surfaces"));

    for set in &sets {
        println!(
            "{:<20} {:<8} rings={} vertices={:>4} max_elev={:.2}",
            set.name,
            set.kind.annex(),
            set.rings.len(),
            set.vertex_count(),
            set.max_elevation()
        );
    }

    if let Some(path) = std::env::args().nth(1) {
        let doc = export_all(&sets, ctx.zone, TargetCrs::Wgs84, ExportFormat::GeoJson)
            .expect("geojson export");
        std::fs::write(&path, doc).expect("write output");
        println!("wrote {path}");
    }
}
