use super::{default_histogram_bins, load_json};
use crate::error::Result;
use crate::flights::AnomalyPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration of `flight_directions`.
#[derive(Clone, Debug, Deserialize)]
pub struct DirectionConfig {
    pub input_dir: PathBuf,
    #[serde(default)]
    pub anomaly_policy: AnomalyPolicy,
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    #[serde(default)]
    pub plot_path: Option<PathBuf>,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DirectionConfig> {
    load_json(path)
}
