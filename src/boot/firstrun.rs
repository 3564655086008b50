use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use crate::boot::lock::{DataDirLock, LOCK_FILE};
use crate::boot::marker::VersionMarker;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{LanguageTag, ServerVersion};

/// How a data directory relates to the running pipeline version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDirState {
    /// Empty; first start will run every bootstrap script.
    Uninitialized,
    /// Initialized by a compatible version; scripts are skipped.
    Initialized,
    /// Initialized by an incompatible version, or of foreign provenance.
    /// Terminal: requires a manual dump and restore.
    Incompatible,
}

/// Executes one opaque SQL payload. The pipeline never interprets the
/// SQL; whoever owns the server connection implements this.
pub trait ScriptExecutor {
    fn execute(&mut self, script: &str, sql: &str) -> Result<()>;
}

/// First-run side of the bootstrap contract.
///
/// Runs every `*.sql` in the init directory, in byte-lexicographic
/// filename order, exactly once, only against an empty data directory.
/// A data directory initialized under a different server major version
/// is refused outright; in-place upgrade is not a thing this pipeline
/// does.
pub struct FirstBoot {
    pub data_dir: PathBuf,
    pub initdb_dir: PathBuf,
    pub expected_version: ServerVersion,
    pub language: LanguageTag,
}

impl FirstBoot {
    pub fn new(
        data_dir: PathBuf,
        initdb_dir: PathBuf,
        expected_version: ServerVersion,
        language: LanguageTag,
    ) -> Self {
        FirstBoot {
            data_dir,
            initdb_dir,
            expected_version,
            language,
        }
    }

    /// Classify the data directory without taking the lock or mutating
    /// anything.
    pub fn classify(&self) -> Result<DataDirState> {
        if !self.data_dir.exists() {
            return Ok(DataDirState::Uninitialized);
        }

        match VersionMarker::load(&self.data_dir)? {
            Some(marker) if marker.server_version == self.expected_version => {
                Ok(DataDirState::Initialized)
            }
            Some(marker) => {
                warn!(
                    found = %marker.server_version,
                    expected = %self.expected_version,
                    "data directory version mismatch"
                );
                Ok(DataDirState::Incompatible)
            }
            None => {
                if Self::is_empty(&self.data_dir)? {
                    Ok(DataDirState::Uninitialized)
                } else {
                    // Non-empty without a marker: foreign provenance.
                    Ok(DataDirState::Incompatible)
                }
            }
        }
    }

    /// Run the first-start check-and-init under an exclusive lock.
    ///
    /// Returns the resulting state; `Incompatible` is surfaced as a
    /// `VersionIncompatible` error instead of a state so callers cannot
    /// ignore it.
    pub fn start(&self, executor: &mut dyn ScriptExecutor) -> Result<DataDirState> {
        fs::create_dir_all(&self.data_dir)?;
        let _lock = DataDirLock::acquire(&self.data_dir)?;

        match self.classify()? {
            DataDirState::Initialized => {
                debug!(data_dir = %self.data_dir.display(), "already initialized, scripts skipped");
                Ok(DataDirState::Initialized)
            }
            DataDirState::Incompatible => Err(Error::new(
                ErrorKind::VersionIncompatible,
                format!(
                    "data directory {} was not initialized by server {}; \
                     dump and restore manually, in-place upgrade is unsupported",
                    self.data_dir.display(),
                    self.expected_version
                ),
            )),
            DataDirState::Uninitialized => {
                let scripts = self.collect_scripts()?;

                for (name, path) in &scripts {
                    let sql = fs::read_to_string(path)?;
                    info!(script = %name, "running bootstrap script");
                    executor.execute(name, &sql)?;
                }

                let marker =
                    VersionMarker::new(self.expected_version, self.language.search_tag());
                marker.save(&self.data_dir)?;

                info!(
                    scripts = scripts.len(),
                    version = %self.expected_version,
                    "data directory initialized"
                );
                Ok(DataDirState::Initialized)
            }
        }
    }

    /// All `*.sql` files in the init directory, sorted by filename.
    fn collect_scripts(&self) -> Result<Vec<(String, PathBuf)>> {
        let mut scripts = Vec::new();

        if self.initdb_dir.exists() {
            for entry in fs::read_dir(&self.initdb_dir)? {
                let entry = entry?;
                let path = entry.path();

                if path.extension().and_then(|s| s.to_str()) == Some("sql") {
                    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                        scripts.push((name.to_string(), path.clone()));
                    }
                }
            }
        }

        // Lexicographic filename order == execution order
        scripts.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(scripts)
    }

    /// Empty apart from the lock file this process just created.
    fn is_empty(dir: &Path) -> Result<bool> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_name() != LOCK_FILE {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
