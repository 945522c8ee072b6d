//! Flat vertex tables (CSV / Parquet) for surfaces.
//!
//! One row per ring vertex, closing repeat included, with both the projected
//! coordinates and their geographic equivalent.

use obsurf::geodesy::{unproject, UtmZone};
use obsurf::SurfaceSet;
use polars::prelude::*;
use std::io::Write;

/// Columns: `surface, ring, vertex, x, y, elevation, lon, lat`. Rings are
/// numbered from 1 as in the KML and GeoJSON exports; vertices from 0.
pub fn vertex_frame(sets: &[SurfaceSet], zone: UtmZone) -> PolarsResult<DataFrame> {
    let rows: usize = sets.iter().map(SurfaceSet::vertex_count).sum();
    let mut surface = Vec::with_capacity(rows);
    let mut ring_ix = Vec::with_capacity(rows);
    let mut vertex_ix = Vec::with_capacity(rows);
    let (mut x, mut y, mut z) = (
        Vec::with_capacity(rows),
        Vec::with_capacity(rows),
        Vec::with_capacity(rows),
    );
    let (mut lon, mut lat) = (Vec::with_capacity(rows), Vec::with_capacity(rows));

    for set in sets {
        for (r, ring) in set.rings.iter().enumerate() {
            for (v, p) in ring.points().iter().enumerate() {
                let (la, lo) = unproject(zone, p.x, p.y);
                surface.push(set.name.clone());
                ring_ix.push(r as u32 + 1);
                vertex_ix.push(v as u32);
                x.push(p.x);
                y.push(p.y);
                z.push(p.elevation);
                lon.push(lo);
                lat.push(la);
            }
        }
    }
    df!(
        "surface" => surface,
        "ring" => ring_ix,
        "vertex" => vertex_ix,
        "x" => x,
        "y" => y,
        "elevation" => z,
        "lon" => lon,
        "lat" => lat
    )
}

pub fn write_csv<W: Write>(df: &mut DataFrame, sink: W) -> PolarsResult<()> {
    CsvWriter::new(sink).include_header(true).finish(df)
}

pub fn write_parquet<W: Write>(df: &mut DataFrame, sink: W) -> PolarsResult<()> {
    ParquetWriter::new(sink).finish(df).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use obsurf::prelude::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn template_tfpa() -> (Vec<SurfaceSet>, UtmZone) {
        let survey = Survey::template();
        let ctx = Aerodrome::from_survey(&survey).unwrap();
        (tfpa_surfaces(&ctx, &survey.tfpa).unwrap(), ctx.zone)
    }

    #[test]
    fn one_row_per_vertex() {
        let (sets, zone) = template_tfpa();
        let df = vertex_frame(&sets, zone).unwrap();
        assert_eq!(df.shape(), (14, 8));
        let lat = df.column("lat").unwrap().f64().unwrap();
        assert!(lat.into_iter().flatten().all(|v| (41.0..43.0).contains(&v)));
        let ring = df.column("ring").unwrap().u32().unwrap();
        assert!(ring.into_iter().flatten().all(|r| r == 1));
    }

    #[test]
    fn csv_round_trips_through_lazy_reader() {
        let (sets, zone) = template_tfpa();
        let mut df = vertex_frame(&sets, zone).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("tfpa.csv");
        write_csv(&mut df, File::create(&path).unwrap()).unwrap();
        let back = LazyCsvReader::new(&path)
            .with_infer_schema_length(Some(100))
            .finish()
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(back.height(), 14);
        assert!(back.column("surface").is_ok());
    }

    #[test]
    fn parquet_keeps_all_rows() {
        let (sets, zone) = template_tfpa();
        let mut df = vertex_frame(&sets, zone).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("tfpa.parquet");
        write_parquet(&mut df, File::create(&path).unwrap()).unwrap();
        let back = ParquetReader::new(File::open(&path).unwrap()).finish().unwrap();
        assert_eq!(back.shape(), (14, 8));
    }
}
