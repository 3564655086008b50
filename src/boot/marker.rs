use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::error::Result;
use crate::core::types::ServerVersion;

pub const MARKER_FILE: &str = "fts_version.bin";

/// Provenance record written into the data directory after a successful
/// first-run initialization. Its presence is what makes later starts
/// skip the bootstrap scripts; its version field is what the fail-closed
/// compatibility check compares against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionMarker {
    pub server_version: ServerVersion,
    pub language: String,
    pub initialized_at: DateTime<Utc>,
}

impl VersionMarker {
    pub fn new(server_version: ServerVersion, language: String) -> Self {
        VersionMarker {
            server_version,
            language,
            initialized_at: Utc::now(),
        }
    }

    /// Load marker from a data directory
    pub fn load(data_dir: &Path) -> Result<Option<Self>> {
        let path = data_dir.join(MARKER_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let data = fs::read(path)?;
        let marker = bincode::deserialize(&data)?;
        Ok(Some(marker))
    }

    /// Save marker into a data directory, synced before returning
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let data = bincode::serialize(self)?;

        let path = data_dir.join(MARKER_FILE);
        let mut file = File::create(path)?;
        file.write_all(&data)?;
        file.sync_all()?;

        Ok(())
    }
}
