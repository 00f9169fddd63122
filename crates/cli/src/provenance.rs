//! Provenance records: which code, parameters and inputs produced an artifact.
//!
//! `report` prints a bare record; `solve` and `random` write one next to their
//! JSON result as `<stem>.provenance.json`.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub duality_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callsite: Option<Callsite>,
    pub params: Value,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn new(params: Value) -> Self {
        Self {
            code_rev: code_rev(),
            duality_version: duality::VERSION,
            callsite: None,
            params,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: &Path) -> Self {
        self.inputs.push(input.display().to_string());
        self
    }

    /// Record `artifact` as the output and write the sidecar next to it.
    #[track_caller]
    pub fn write_beside(mut self, artifact: &Path) -> Result<PathBuf> {
        let at = Location::caller();
        self.callsite = Some(Callsite {
            file: at.file(),
            line: at.line(),
        });
        self.outputs.push(artifact.display().to_string());
        let path = sidecar_path(artifact);
        std::fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `runs/lens.json` -> `runs/lens.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Commit of the running code: `GIT_COMMIT` at build time, then at run time,
/// then `git rev-parse HEAD`, else "unknown".
pub fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    from_env
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sidecar_swaps_the_extension() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/runs/lens.json")),
            Path::new("/tmp/runs/lens.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("result")),
            Path::new("result.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_inputs_outputs_and_callsite() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("result.json");
        fs::write(&artifact, "{}").unwrap();
        let path = Provenance::new(json!({"extent": "fixed"}))
            .with_input(Path::new("centers.csv"))
            .write_beside(&artifact)
            .unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.display().to_string());
        assert_eq!(parsed["inputs"][0], "centers.csv");
        assert_eq!(parsed["params"]["extent"], "fixed");
        assert_eq!(parsed["duality_version"], duality::VERSION);
        assert!(parsed["callsite"]["line"].as_u64().is_some());
    }

    #[test]
    fn bare_record_has_no_callsite() {
        let v = serde_json::to_value(Provenance::new(json!({}))).unwrap();
        assert!(v.get("callsite").is_none());
        assert!(!v["code_rev"].as_str().unwrap().is_empty());
    }
}
