use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

/// Provenance record written next to every JSON artifact.
#[derive(Debug, Serialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub lib_version: &'static str,
    pub callsite: Option<Callsite>,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Sidecar {
    /// Revision and library version only (the `report` subcommand).
    pub fn bare() -> Self {
        Self {
            code_rev: current_git_rev(),
            lib_version: vankampen::VERSION,
            callsite: None,
            params: Value::Object(Default::default()),
            outputs: Vec::new(),
        }
    }
}

/// Write `<artifact stem>.provenance.json` with revision, callsite, params and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, params: Value) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let caller = Location::caller();
    let doc = Sidecar {
        callsite: Some(Callsite {
            file: caller.file(),
            line: caller.line(),
        }),
        params,
        outputs: vec![artifact.to_string_lossy().into_owned()],
        ..Sidecar::bare()
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
