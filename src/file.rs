// src/file.rs

use std::{
    fs, io,
    path::Path,
};

use crate::error::{Error, Result};

/// Read a whole UTF-8 file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io("could not read", path, e))
}

/// Ensure parent dir exists, then create/truncate and write the whole document.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents).map_err(|e| Error::io("could not write", path, e))?;
    log::info!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let e = io::Error::new(io::ErrorKind::NotADirectory, "path exists but is not a directory");
        return Err(Error::io("could not create", dir, e));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io("could not create", dir, e))?;
    }
    Ok(())
}
