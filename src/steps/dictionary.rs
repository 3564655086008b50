use tracing::info;
use crate::core::error::{Error, ErrorKind, Result};
use crate::pipeline::context::BuildContext;
use crate::pipeline::step::{BuildStep, StepId};
use crate::steps::place_file;

pub const INSTALL_DICTIONARY: StepId = StepId("install-dictionary");

/// Installs the stemming dictionary package into the vendor directory.
///
/// The package must provide both halves of the pair under the vendor
/// naming convention (`<Tag>.aff`, `<Tag>.dic`). The vendor directory is
/// not the path the search subsystem resolves; linking is a separate
/// stage.
pub struct DictionaryInstallStep;

impl BuildStep for DictionaryInstallStep {
    fn id(&self) -> StepId {
        INSTALL_DICTIONARY
    }

    fn run(&self, ctx: &mut BuildContext) -> Result<()> {
        let package = &ctx.config.dictionary_package;
        let language = &ctx.config.language;

        let package_dir = ctx.config.package_source.join(package);
        if !package_dir.is_dir() {
            return Err(Error::new(
                ErrorKind::MissingAsset,
                format!(
                    "dictionary package '{}' not found under {}",
                    package,
                    ctx.config.package_source.display()
                ),
            ));
        }

        let affix_src = package_dir.join(format!("{}.aff", language.vendor_basename()));
        let dict_src = package_dir.join(format!("{}.dic", language.vendor_basename()));
        if !affix_src.is_file() || !dict_src.is_file() {
            return Err(Error::new(
                ErrorKind::MissingAsset,
                format!(
                    "package '{}' must provide both {}.aff and {}.dic",
                    package,
                    language.vendor_basename(),
                    language.vendor_basename()
                ),
            ));
        }

        place_file(&affix_src, &ctx.layout.vendor_affix_path(language))?;
        place_file(&dict_src, &ctx.layout.vendor_dict_path(language))?;

        info!(package = %package, language = %language, "dictionary package installed");
        Ok(())
    }
}
