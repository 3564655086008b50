use std::fs;
use std::path::{Path, PathBuf};
use crate::core::error::Result;
use crate::core::types::LanguageTag;

/// Directory structure of the staged image tree
#[derive(Debug, Clone)]
pub struct ImageLayout {
    pub root: PathBuf,            // Staged image root
    pub vendor_dict_dir: PathBuf, // Vendor dictionary install target (usr/share/hunspell)
    pub tsearch_dir: PathBuf,     // Search-parsing configuration directory (share/tsearch_data)
    pub initdb_dir: PathBuf,      // First-run script directory (docker-entrypoint-initdb.d)
    pub extension_dir: PathBuf,   // Extension control files (share/extension)
}

impl ImageLayout {
    pub fn new(root: PathBuf) -> Result<Self> {
        let vendor_dict_dir = root.join("usr/share/hunspell");
        let tsearch_dir = root.join("share/tsearch_data");
        let initdb_dir = root.join("docker-entrypoint-initdb.d");
        let extension_dir = root.join("share/extension");

        // Create directories
        fs::create_dir_all(&vendor_dict_dir)?;
        fs::create_dir_all(&tsearch_dir)?;
        fs::create_dir_all(&initdb_dir)?;
        fs::create_dir_all(&extension_dir)?;

        Ok(ImageLayout {
            root,
            vendor_dict_dir,
            tsearch_dir,
            initdb_dir,
            extension_dir,
        })
    }

    /// Server major version the base tree reports.
    pub fn version_path(&self) -> PathBuf {
        self.root.join("version")
    }

    pub fn extension_control_path(&self, extension: &str) -> PathBuf {
        self.extension_dir.join(format!("{}.control", extension))
    }

    pub fn vendor_affix_path(&self, language: &LanguageTag) -> PathBuf {
        self.vendor_dict_dir
            .join(format!("{}.aff", language.vendor_basename()))
    }

    pub fn vendor_dict_path(&self, language: &LanguageTag) -> PathBuf {
        self.vendor_dict_dir
            .join(format!("{}.dic", language.vendor_basename()))
    }

    /// Affix half under the basename the search subsystem resolves.
    pub fn affix_path(&self, language: &LanguageTag) -> PathBuf {
        self.tsearch_dir
            .join(format!("{}.affix", language.search_tag()))
    }

    /// Dictionary half under the basename the search subsystem resolves.
    pub fn dict_path(&self, language: &LanguageTag) -> PathBuf {
        self.tsearch_dir
            .join(format!("{}.dict", language.search_tag()))
    }

    pub fn stopword_path(&self, filename: &str) -> PathBuf {
        self.tsearch_dir.join(filename)
    }

    pub fn script_path(&self, filename: &str) -> PathBuf {
        self.initdb_dir.join(filename)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("fts-manifest.json")
    }

    pub fn relative(&self, path: &Path) -> Option<PathBuf> {
        path.strip_prefix(&self.root).ok().map(Path::to_path_buf)
    }
}
