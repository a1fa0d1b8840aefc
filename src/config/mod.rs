//! JSON configuration of the command-line tools.

pub mod batch;
pub mod directions;

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        reason: format!("failed to read: {e}"),
    })?;
    serde_json::from_str(&data).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        reason: format!("failed to parse: {e}"),
    })
}

pub(crate) fn default_histogram_bins() -> usize {
    10
}
