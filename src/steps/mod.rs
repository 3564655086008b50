pub mod base_image;
pub mod bootstrap;
pub mod dictionary;
pub mod linker;
pub mod stopwords;

use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;
use crate::core::error::{Error, ErrorKind, Result};

/// Copy a build-context file into the image tree.
///
/// Placement goes through a temp file in the destination directory and a
/// rename, so an aborted build never leaves a half-written artifact under
/// a name the runtime resolves.
pub(crate) fn place_file(source: &Path, dest: &Path) -> Result<()> {
    if !source.is_file() {
        return Err(Error::new(
            ErrorKind::MissingAsset,
            format!("missing copy source: {}", source.display()),
        ));
    }

    let dir = dest.parent().ok_or_else(|| {
        Error::new(
            ErrorKind::Internal,
            format!("destination has no parent directory: {}", dest.display()),
        )
    })?;

    let data = fs::read(source)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    std::io::Write::write_all(&mut tmp, &data)?;
    tmp.persist(dest)
        .map_err(|e| Error::new(ErrorKind::Io, format!("failed to place {}: {}", dest.display(), e)))?;

    Ok(())
}
