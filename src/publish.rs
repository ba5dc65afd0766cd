use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::GenerateError;

/// Write bytes and re-stat the file. A missing or zero-size result is an
/// error, never a silent partial success.
pub fn write_verified(path: &Path, bytes: &[u8]) -> Result<(), GenerateError> {
    fs::write(path, bytes)?;
    if !has_content(path) {
        return Err(GenerateError::EmptyWriteResult {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Mirror one canonical file into the published directory, verifying both
/// ends. Safe to repeat for an unchanged file.
pub fn copy_to_public(settings: &Settings, filename: &str) -> Result<PathBuf, GenerateError> {
    let src = settings.source_dir.join(filename);
    let dest = settings.dest_dir.join(filename);

    if !has_content(&src) {
        return Err(GenerateError::SourceMissingOrEmpty { path: src });
    }

    // fs::copy carries permission bits along with the contents.
    fs::copy(&src, &dest)?;

    if !has_content(&dest) {
        return Err(GenerateError::DestMissingOrEmpty { path: dest });
    }
    Ok(dest)
}

fn has_content(path: &Path) -> bool {
    fs::metadata(path).map(|meta| meta.len() > 0).unwrap_or(false)
}
