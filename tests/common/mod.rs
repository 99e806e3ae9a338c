//! Shared test infrastructure for integration tests.

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Catalog fixture plus an isolated state directory for one test.
pub struct TestFixture {
    pub catalog_path: PathBuf,
    pub temp_dir: TempDir,
}

/// Captured result of one `packlist` invocation.
#[derive(Debug)]
pub struct RunResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl RunResult {
    /// Parse stdout as JSON; panics with stderr on failure.
    pub fn json(&self) -> serde_json::Value {
        assert!(self.success, "packlist failed: {}", self.stderr);
        serde_json::from_str(&self.stdout).expect("parse packlist JSON output")
    }
}

impl From<Output> for RunResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

fn manifest_dir() -> PathBuf {
    PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()))
}

impl TestFixture {
    /// Load a catalog fixture by name from tests/fixtures/{name}/catalog.json.
    pub fn load(name: &str) -> Self {
        let catalog_path = manifest_dir()
            .join("tests/fixtures")
            .join(name)
            .join("catalog.json");
        assert!(
            catalog_path.is_file(),
            "missing fixture {}",
            catalog_path.display()
        );
        Self {
            catalog_path,
            temp_dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn state_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn state_file(&self) -> PathBuf {
        self.state_dir().join("packingChecklistStateV1.json")
    }

    /// Run packlist against this fixture's catalog and state directory.
    pub fn run(&self, args: &[&str]) -> RunResult {
        self.run_with_catalog(&self.catalog_path, args)
    }

    pub fn run_with_catalog(&self, catalog: &Path, args: &[&str]) -> RunResult {
        let output = Command::new(env!("CARGO_BIN_EXE_packlist"))
            .arg("--catalog")
            .arg(catalog)
            .arg("--state-dir")
            .arg(self.state_dir())
            .args(args)
            .env_remove("PACKLIST_LOG")
            .env_remove("PACKLIST_STATE_DIR")
            .output()
            .expect("run packlist");
        output.into()
    }
}

/// Item displays of one group in a `--json` checklist, in order.
#[allow(dead_code)]
pub fn group_displays(checklist: &serde_json::Value, group: &str) -> Vec<String> {
    checklist["groups"]
        .as_array()
        .and_then(|groups| groups.iter().find(|entry| entry["name"] == group))
        .and_then(|entry| entry["items"].as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["display"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

/// Group names of a `--json` checklist, in order.
#[allow(dead_code)]
pub fn group_names(checklist: &serde_json::Value) -> Vec<String> {
    checklist["groups"]
        .as_array()
        .map(|groups| {
            groups
                .iter()
                .filter_map(|entry| entry["name"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
