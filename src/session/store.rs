use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::model::{AdvisorResult, Question};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorSnapshot {
    pub questions: Vec<Question>,
    pub active: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub advisor: AdvisorSnapshot,
    pub result: AdvisorResult,
}

/// Client-side state blob, one JSON file named after the store key.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(dir: &Path, store_name: &str) -> Self {
        Self {
            path: dir.join(format!("{store_name}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<PersistedState>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let state: PersistedState = serde_json::from_str(&raw)?;
        tracing::info!(path = %self.path.display(), "restored persisted state");
        Ok(Some(state))
    }

    pub fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "persisted state");
        Ok(())
    }

    /// Returns whether a blob existed.
    pub fn clear(&self) -> Result<bool, StoreError> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)?;
        tracing::info!(path = %self.path.display(), "cleared persisted state");
        Ok(true)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/session/store.rs"]
mod tests;
