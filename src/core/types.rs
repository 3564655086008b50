use std::fmt;
use serde::{Deserialize, Serialize};
use crate::core::error::{Error, ErrorKind, Result};

/// Language tag of a stemming dictionary, as the vendor package spells it
/// (e.g. `en_US`).
///
/// Vendor packages ship `<tag>.aff` / `<tag>.dic` under the tag as given;
/// the search-parsing subsystem resolves the lowercased form
/// (`en_us.affix` / `en_us.dict`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(tag: &str) -> Result<Self> {
        if tag.is_empty()
            || !tag
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(Error::new(
                ErrorKind::InvalidName,
                format!("invalid language tag: {:?}", tag),
            ));
        }
        Ok(LanguageTag(tag.to_string()))
    }

    /// Basename the vendor package uses (tag as given).
    pub fn vendor_basename(&self) -> &str {
        &self.0
    }

    /// Basename the search-parsing subsystem resolves.
    pub fn search_tag(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Major version of the database server a base tree was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerVersion(pub u32);

impl ServerVersion {
    /// Parse the content of a base tree's `version` file ("16" or "16.4").
    pub fn parse(raw: &str) -> Result<Self> {
        let major = raw.trim().split('.').next().unwrap_or("");
        major
            .parse::<u32>()
            .map(ServerVersion)
            .map_err(|_| Error::new(ErrorKind::Parse, format!("invalid server version: {:?}", raw)))
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pinned base image reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseImage {
    pub repository: String,
    pub tag: String,
    pub server_version: ServerVersion,
    /// Search extension the base image must already bundle.
    pub extension: String,
}

impl BaseImage {
    pub fn reference(&self) -> String {
        format!("{}:{}", self.repository, self.tag)
    }
}

pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
