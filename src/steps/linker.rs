use std::fs;
use std::path::Path;
use tracing::info;
use crate::core::error::{Error, ErrorKind, Result};
use crate::image::manifest::ArtifactRole;
use crate::pipeline::context::BuildContext;
use crate::pipeline::step::{BuildStep, StepId};
use crate::steps::dictionary::INSTALL_DICTIONARY;

pub const LINK_DICTIONARY: StepId = StepId("link-dictionary");

/// Exposes the installed dictionary pair under the basenames the
/// search-parsing subsystem resolves (`<tag>.dict`, `<tag>.affix`).
///
/// Both links must succeed or the dictionary is unavailable: if the
/// second one fails the first is removed before the error propagates.
pub struct DictionaryLinkStep;

impl BuildStep for DictionaryLinkStep {
    fn id(&self) -> StepId {
        LINK_DICTIONARY
    }

    fn requires(&self) -> Vec<StepId> {
        vec![INSTALL_DICTIONARY]
    }

    fn run(&self, ctx: &mut BuildContext) -> Result<()> {
        let language = ctx.config.language.clone();

        let vendor_dict = ctx.layout.vendor_dict_path(&language);
        let vendor_affix = ctx.layout.vendor_affix_path(&language);
        if !vendor_dict.is_file() || !vendor_affix.is_file() {
            return Err(Error::new(
                ErrorKind::MissingAsset,
                format!("dictionary pair for '{}' is not installed", language),
            ));
        }

        let dict_dest = ctx.layout.dict_path(&language);
        let affix_dest = ctx.layout.affix_path(&language);

        link_or_copy(&vendor_dict, &dict_dest)?;
        if let Err(err) = link_or_copy(&vendor_affix, &affix_dest) {
            // Partial pair counts as failure; leave nothing behind.
            let _ = fs::remove_file(&dict_dest);
            return Err(err);
        }

        ctx.manifest
            .record(ArtifactRole::Dictionary, &ctx.layout, &dict_dest)?;
        ctx.manifest
            .record(ArtifactRole::Affix, &ctx.layout, &affix_dest)?;

        info!(
            dict = %dict_dest.display(),
            affix = %affix_dest.display(),
            "dictionary pair linked"
        );
        Ok(())
    }
}

// Platform-specific linking
#[cfg(unix)]
fn link_or_copy(src: &Path, dst: &Path) -> Result<()> {
    // symlink_metadata: a stale dangling link still counts as present
    if fs::symlink_metadata(dst).is_ok() {
        fs::remove_file(dst)?;
    }
    std::os::unix::fs::symlink(src, dst).map_err(|e| {
        Error::new(
            ErrorKind::LinkFailed,
            format!("failed to link {} -> {}: {}", dst.display(), src.display(), e),
        )
    })
}

#[cfg(not(unix))]
fn link_or_copy(src: &Path, dst: &Path) -> Result<()> {
    if fs::symlink_metadata(dst).is_ok() {
        fs::remove_file(dst)?;
    }
    fs::copy(src, dst).map_err(|e| {
        Error::new(
            ErrorKind::LinkFailed,
            format!("failed to copy {} -> {}: {}", src.display(), dst.display(), e),
        )
    })?;
    Ok(())
}
