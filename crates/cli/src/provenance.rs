use anyhow::{Context, Result};
use obsurf::{SurfaceKind, SurfaceSet};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What was built, as recorded next to each output.
#[derive(Debug, Serialize)]
pub struct SurfaceSummary {
    pub name: String,
    pub kind: SurfaceKind,
    pub rings: usize,
    pub vertices: usize,
    pub max_elevation: f64,
}

impl From<&SurfaceSet> for SurfaceSummary {
    fn from(set: &SurfaceSet) -> Self {
        Self {
            name: set.name.clone(),
            kind: set.kind,
            rings: set.rings.len(),
            vertices: set.vertex_count(),
            max_elevation: set.max_elevation(),
        }
    }
}

/// Metadata used to generate a provenance sidecar.
pub struct Payload {
    pub params: Value,
    pub surfaces: Vec<SurfaceSummary>,
}

impl Payload {
    pub fn new(params: Value, sets: &[SurfaceSet]) -> Self {
        Self {
            params,
            surfaces: sets.iter().map(SurfaceSummary::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    params: &'a Value,
    surfaces: &'a [SurfaceSummary],
    outputs: [String; 1],
}

/// Write `<artifact stem>.provenance.json` with the code revision, callsite,
/// survey parameters, a summary of the surfaces and the artifact path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: &Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    let callsite = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        version: obsurf::VERSION,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        params: &payload.params,
        surfaces: &payload.surfaces,
        outputs: [artifact.to_string_lossy().into_owned()],
    };
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("surfaces"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Build-time `GIT_COMMIT`, then the runtime variable, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use obsurf::prelude::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_replaces_extension() {
        let derived = provenance_path(Path::new("/tmp/out/LWSK_tfpa.kml"));
        assert_eq!(derived, Path::new("/tmp/out/LWSK_tfpa.provenance.json"));
    }

    #[test]
    fn sidecar_lists_surfaces_and_output() {
        let survey = Survey::template();
        let ctx = Aerodrome::from_survey(&survey).unwrap();
        let sets = etod_surfaces(&ctx, &survey.etod).unwrap();

        let dir = tempdir().unwrap();
        let artifact = dir.path().join("LWSK_etod.geojson");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new(json!({"action": "etod"}), &sets);
        let prov_path = write_sidecar(&artifact, &payload).unwrap();
        assert!(prov_path.exists());

        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["action"], "etod");
        assert_eq!(parsed["version"], obsurf::VERSION);
        let surfaces = parsed["surfaces"].as_array().unwrap();
        assert_eq!(surfaces.len(), 4);
        assert_eq!(surfaces[1]["name"], "Area_2b_RWY16-34");
        assert_eq!(surfaces[1]["kind"], "Area2b");
        assert_eq!(surfaces[1]["rings"], 2);
    }
}
