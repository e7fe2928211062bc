use crate::error::{LclipError, Result};
use directories::BaseDirs;
use std::path::PathBuf;

const BACKING_FILENAME: &str = ".lclip.json";

/// Default backing-file location: `~/.lclip.json`.
///
/// Only the CLI resolves this; everything below it takes an explicit
/// path, so tests and embedders never touch the real home directory.
pub fn default_path() -> Result<PathBuf> {
    let base = BaseDirs::new().ok_or(LclipError::HomeDir)?;
    Ok(base.home_dir().join(BACKING_FILENAME))
}
