use std::path::PathBuf;
use crate::core::types::{BaseImage, LanguageTag, ServerVersion};

/// One SQL bootstrap script to register in the first-run directory.
///
/// `depends_on` names scripts that must execute first; the registrar
/// rejects a plan where a dependency is declared after its dependent.
#[derive(Debug, Clone)]
pub struct ScriptSource {
    pub name: String,
    pub source: PathBuf,
    pub depends_on: Vec<String>,
}

impl ScriptSource {
    pub fn new(name: &str, source: PathBuf) -> Self {
        ScriptSource {
            name: name.to_string(),
            source,
            depends_on: Vec::new(),
        }
    }

    pub fn after(mut self, dependency: &str) -> Self {
        self.depends_on.push(dependency.to_string());
        self
    }
}

#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub base_image: BaseImage,
    pub language: LanguageTag,

    /// Vendor package providing both halves of the dictionary pair.
    pub dictionary_package: String,
    /// Root directory the package is resolved from.
    pub package_source: PathBuf,

    pub stopword_source: PathBuf,
    /// Filename the external search configuration references by name.
    pub stopword_filename: String,

    pub scripts: Vec<ScriptSource>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            base_image: BaseImage {
                repository: "fts-server".to_string(),
                tag: "16.4".to_string(),             // exact pin, never a floating tag
                server_version: ServerVersion(16),
                extension: "pgroonga".to_string(),
            },
            language: LanguageTag::new("en_US").expect("default language tag"),
            dictionary_package: "hunspell-en-us".to_string(),
            package_source: PathBuf::from("./packages"),
            stopword_source: PathBuf::from("./fts_english.stop"),
            stopword_filename: "fts_english.stop".to_string(),
            scripts: Vec::new(),
        }
    }
}
