//! File-backed persistence for the selection state.
use crate::catalog::Catalog;
use crate::selection::SelectionState;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Fixed storage key; the state file is `<key>.json` in the state directory.
pub const STORAGE_KEY: &str = "packingChecklistStateV1";
/// Environment override for the state directory.
pub const STATE_DIR_ENV: &str = "PACKLIST_STATE_DIR";

/// Resolve the state directory: explicit flag, then `PACKLIST_STATE_DIR`,
/// then `~/.local/share/packlist` (or the platform equivalent).
pub fn resolve_state_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env::var_os(STATE_DIR_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let data_dir = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| anyhow!("cannot determine home directory"))?;
    Ok(data_dir.join("packlist"))
}

/// Owner of the persisted selection file.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restore the selection, falling back to defaults when the file is
    /// missing, unreadable, or malformed.
    pub fn load(&self, catalog: &Catalog) -> SelectionState {
        match fs::read_to_string(&self.path) {
            Ok(raw) => SelectionState::restore(&raw, catalog),
            Err(err) if err.kind() == ErrorKind::NotFound => SelectionState::default(),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "cannot read persisted selection; using defaults"
                );
                SelectionState::default()
            }
        }
    }

    /// Write the selection atomically as pretty JSON.
    pub fn save(&self, state: &SelectionState) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| anyhow!("state path has no parent"))?;
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        let text = serde_json::to_string_pretty(&state.to_persisted())
            .context("serialize selection state")?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("create temp file in {}", dir.display()))?;
        tmp.write_all(text.as_bytes()).context("write selection state")?;
        tmp.persist(&self.path)
            .with_context(|| format!("persist {}", self.path.display()))?;
        tracing::info!(path = %self.path.display(), "selection saved");
        Ok(())
    }

    /// Remove the persisted selection. A missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("remove {}", self.path.display())),
        }
    }
}
