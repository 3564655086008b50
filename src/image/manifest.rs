use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::crc32;
use crate::image::layout::ImageLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtifactRole {
    Dictionary,
    Affix,
    StopWords,
    BootstrapScript,
}

/// One artifact the search subsystem or the first-run mechanism will
/// later resolve by exact name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementEntry {
    pub role: ArtifactRole,
    /// Path relative to the image root.
    pub path: String,
    pub bytes: u64,
    pub checksum: u32,
}

/// Build-time record of every placed artifact.
///
/// Dictionary and stop-word lookups resolve by exact filename at query
/// time, long after the build; the manifest pins down what the build
/// actually placed so the whole set can be re-checked before the image
/// is considered done. Entries stay in placement order and carry no
/// timestamps, so two clean builds serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementManifest {
    pub entries: Vec<PlacementEntry>,
}

impl PlacementManifest {
    pub fn new() -> Self {
        PlacementManifest::default()
    }

    /// Record a file that was just placed into the image tree.
    pub fn record(&mut self, role: ArtifactRole, layout: &ImageLayout, path: &Path) -> Result<()> {
        let data = fs::read(path)?;
        let relative = layout.relative(path).ok_or_else(|| {
            Error::new(
                ErrorKind::Internal,
                format!("placed file escapes the image root: {}", path.display()),
            )
        })?;

        self.entries.push(PlacementEntry {
            role,
            path: relative.to_string_lossy().into_owned(),
            bytes: data.len() as u64,
            checksum: crc32(&data),
        });
        Ok(())
    }

    /// Exact filenames the runtime will look up, in placement order.
    pub fn expected_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| Path::new(&e.path).file_name().and_then(|n| n.to_str()))
            .collect()
    }

    /// Re-read every recorded artifact and fail on absence, emptiness, or
    /// content drift.
    pub fn verify(&self, layout: &ImageLayout) -> Result<()> {
        for entry in &self.entries {
            let path = layout.root.join(&entry.path);
            if !path.exists() {
                return Err(Error::new(
                    ErrorKind::MissingAsset,
                    format!("manifest names {} but nothing was placed there", entry.path),
                ));
            }
            let data = fs::read(&path)?;
            if data.is_empty() {
                return Err(Error::new(
                    ErrorKind::MissingAsset,
                    format!("placed artifact is empty: {}", entry.path),
                ));
            }
            if crc32(&data) != entry.checksum || data.len() as u64 != entry.bytes {
                return Err(Error::new(
                    ErrorKind::MissingAsset,
                    format!("placed artifact does not match its manifest entry: {}", entry.path),
                ));
            }
        }
        Ok(())
    }

    /// Save manifest into the image tree
    pub fn save(&self, layout: &ImageLayout) -> Result<()> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(layout.manifest_path(), data)?;
        Ok(())
    }

    /// Load manifest from an image tree
    pub fn load(layout: &ImageLayout) -> Result<Option<Self>> {
        let path = layout.manifest_path();
        if !path.exists() {
            return Ok(None);
        }

        let data = fs::read(path)?;
        let manifest = serde_json::from_slice(&data)?;
        Ok(Some(manifest))
    }
}
