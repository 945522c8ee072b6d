mod provenance;
mod table;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use obsurf::export::{export_all, ExportFormat, TargetCrs};
use obsurf::runway::Aerodrome;
use obsurf::surfaces::{etod_surfaces, strip, tfpa_surfaces};
use obsurf::survey::Survey;
use obsurf::SurfaceSet;
use provenance::Payload;
use serde_json::{json, Value};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "obsurf")]
#[command(about = "Runway obstacle surfaces: TFPA (Annex 4) and eTOD Area 2 (Annex 15)")]
struct Cmd {
    /// Log at debug level (per-surface events)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the takeoff flight path area of both runway ends
    Tfpa {
        #[command(flatten)]
        io: Io,
    },
    /// Build eTOD Areas 2a-2d
    Etod {
        #[command(flatten)]
        io: Io,
        /// Also emit the runway strip
        #[arg(long)]
        include_strip: bool,
    },
    /// Print a filled-in survey to start from
    Template,
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct Io {
    /// Survey JSON (see `obsurf template`)
    #[arg(long)]
    input: PathBuf,
    /// Output path, `-` for stdout
    #[arg(long, default_value = "-")]
    out: String,
    #[arg(long, value_enum, default_value_t = Format::Kml)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Kml,
    Geojson,
    Csv,
    Parquet,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Tfpa { io } => tfpa(&io),
        Action::Etod { io, include_strip } => etod(&io, include_strip),
        Action::Template => template(),
        Action::Report => report(),
    }
}

fn load_survey(path: &Path) -> Result<Survey> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading survey {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing survey {}", path.display()))
}

fn tfpa(io: &Io) -> Result<()> {
    let survey = load_survey(&io.input)?;
    let ctx = Aerodrome::from_survey(&survey)?;
    info!(aerodrome = %ctx.label(), azimuth = ctx.azimuth(), "tfpa");
    let sets = tfpa_surfaces(&ctx, &survey.tfpa)?;
    let params = json!({
        "action": "tfpa",
        "input": io.input,
        "aerodrome": ctx.label(),
        "zone": ctx.zone.epsg(),
        "tfpa": survey.tfpa,
    });
    emit(&ctx, &sets, io, params)
}

fn etod(io: &Io, include_strip: bool) -> Result<()> {
    let survey = load_survey(&io.input)?;
    let ctx = Aerodrome::from_survey(&survey)?;
    info!(aerodrome = %ctx.label(), azimuth = ctx.azimuth(), include_strip, "etod");
    let mut sets = Vec::new();
    if include_strip {
        sets.push(strip(&ctx)?);
    }
    sets.extend(etod_surfaces(&ctx, &survey.etod)?);
    let params = json!({
        "action": "etod",
        "input": io.input,
        "aerodrome": ctx.label(),
        "zone": ctx.zone.epsg(),
        "etod": survey.etod,
        "include_strip": include_strip,
    });
    emit(&ctx, &sets, io, params)
}

/// Write the surfaces in the requested format; file outputs get a provenance sidecar.
fn emit(ctx: &Aerodrome, sets: &[SurfaceSet], io: &Io, params: Value) -> Result<()> {
    let to_stdout = io.out == "-";
    if to_stdout && io.format == Format::Parquet {
        bail!("parquet output is binary; pass a file path to --out");
    }
    if to_stdout {
        return render(ctx, sets, io.format, std::io::stdout().lock());
    }

    let path = Path::new(&io.out);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = fs::File::create(path).with_context(|| format!("creating {}", io.out))?;
    render(ctx, sets, io.format, BufWriter::new(file))?;

    let sidecar = provenance::write_sidecar(&io.out, &Payload::new(params, sets))?;
    info!(
        out = %io.out,
        provenance = %sidecar.display(),
        surfaces = sets.len(),
        "wrote surfaces"
    );
    Ok(())
}

fn render<W: Write>(
    ctx: &Aerodrome,
    sets: &[SurfaceSet],
    format: Format,
    mut sink: W,
) -> Result<()> {
    match format {
        Format::Kml | Format::Geojson => {
            let format = if format == Format::Kml {
                ExportFormat::Kml
            } else {
                ExportFormat::GeoJson
            };
            let doc = export_all(sets, ctx.zone, TargetCrs::Wgs84, format)?;
            sink.write_all(&doc)?;
        }
        Format::Csv => table::write_csv(&mut table::vertex_frame(sets, ctx.zone)?, &mut sink)?,
        Format::Parquet => {
            table::write_parquet(&mut table::vertex_frame(sets, ctx.zone)?, &mut sink)?
        }
    }
    sink.flush()?;
    Ok(())
}

fn template() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Survey::template())?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": obsurf::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
