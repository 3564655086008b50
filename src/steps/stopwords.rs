use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;
use crate::core::error::Result;
use crate::image::manifest::ArtifactRole;
use crate::pipeline::context::BuildContext;
use crate::pipeline::step::{BuildStep, StepId};
use crate::steps::place_file;

pub const INSTALL_STOPWORDS: StepId = StepId("install-stopwords");

/// Copies the stop-word list into the search configuration directory.
///
/// The copy is byte-preserving; the manifest records length and checksum
/// so the placement can be re-checked against the source contract. The
/// target filename must be exactly what the external search
/// configuration references.
pub struct StopWordStep;

impl BuildStep for StopWordStep {
    fn id(&self) -> StepId {
        INSTALL_STOPWORDS
    }

    fn run(&self, ctx: &mut BuildContext) -> Result<()> {
        let dest = ctx.layout.stopword_path(&ctx.config.stopword_filename);

        place_file(&ctx.config.stopword_source, &dest)?;
        ctx.manifest
            .record(ArtifactRole::StopWords, &ctx.layout, &dest)?;

        info!(file = %ctx.config.stopword_filename, "stop-word list installed");
        Ok(())
    }
}

/// One term per line, newline-terminated, UTF-8.
///
/// The parsing subsystem reads the file with exactly these framing rules;
/// writing through this type keeps hand-edited lists in shape.
pub struct StopWordList {
    pub terms: Vec<String>,
}

impl StopWordList {
    pub fn new(terms: Vec<String>) -> Self {
        StopWordList { terms }
    }

    pub fn parse(text: &str) -> Self {
        let terms = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();

        StopWordList { terms }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(StopWordList::parse(&text))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let mut out = String::new();
        for term in &self.terms {
            out.push_str(term);
            out.push('\n');
        }
        fs::write(path, out)?;
        Ok(())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    /// Deduplicated view, for callers that only ever test membership.
    pub fn as_set(&self) -> HashSet<&str> {
        self.terms.iter().map(String::as_str).collect()
    }

    pub fn english() -> Self {
        let terms = vec![
            "a", "an", "and", "are", "as", "at", "be", "by", "for",
            "from", "has", "he", "in", "is", "it", "its", "of", "on",
            "that", "the", "to", "was", "will", "with"
        ].into_iter().map(String::from).collect();

        StopWordList::new(terms)
    }
}
