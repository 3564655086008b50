use std::path::PathBuf;
use crate::core::config::BuildConfig;
use crate::core::error::Result;
use crate::core::types::ServerVersion;
use crate::image::layout::ImageLayout;
use crate::image::manifest::PlacementManifest;

/// Mutable state threaded through the build stages.
pub struct BuildContext {
    pub config: BuildConfig,
    pub layout: ImageLayout,
    pub manifest: PlacementManifest,
    /// Set by the base-image stage once the pin has been checked.
    pub pinned_version: Option<ServerVersion>,
}

impl BuildContext {
    pub fn new(config: BuildConfig, image_root: PathBuf) -> Result<Self> {
        let layout = ImageLayout::new(image_root)?;

        Ok(BuildContext {
            config,
            layout,
            manifest: PlacementManifest::new(),
            pinned_version: None,
        })
    }
}
