use std::fs;
use tracing::info;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::ServerVersion;
use crate::pipeline::context::BuildContext;
use crate::pipeline::step::{BuildStep, StepId};

pub const BASE_IMAGE: StepId = StepId("base-image");

/// Checks the staged base tree against the pinned image reference.
///
/// Every later stage assumes this exact server major version's binary
/// layout, and the search extension must already be bundled. A wrong base
/// is fatal here, before anything is placed.
pub struct BaseImageStep;

impl BuildStep for BaseImageStep {
    fn id(&self) -> StepId {
        BASE_IMAGE
    }

    fn run(&self, ctx: &mut BuildContext) -> Result<()> {
        let pin = &ctx.config.base_image;

        let version_path = ctx.layout.version_path();
        if !version_path.exists() {
            return Err(Error::new(
                ErrorKind::MissingAsset,
                format!("base tree has no version file at {}", version_path.display()),
            ));
        }

        let raw = fs::read_to_string(&version_path)?;
        let found = ServerVersion::parse(&raw)?;
        if found != pin.server_version {
            return Err(Error::new(
                ErrorKind::VersionIncompatible,
                format!(
                    "pinned {} (server {}) but base tree reports server {}",
                    pin.reference(),
                    pin.server_version,
                    found
                ),
            ));
        }

        let control = ctx.layout.extension_control_path(&pin.extension);
        if !control.exists() {
            return Err(Error::new(
                ErrorKind::MissingAsset,
                format!("search extension '{}' is not bundled in the base tree", pin.extension),
            ));
        }

        ctx.pinned_version = Some(found);
        info!(image = %pin.reference(), version = %found, "base image pinned");
        Ok(())
    }
}
