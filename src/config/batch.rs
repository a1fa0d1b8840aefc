use super::{default_histogram_bins, load_json};
use crate::error::Result;
use crate::flights::ExtractionOptions;
use crate::stats::FitOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration of `flight_batch`.
#[derive(Clone, Debug, Deserialize)]
pub struct BatchConfig {
    /// Directory holding the trajectory logs.
    pub input_dir: PathBuf,
    /// Directory segment files are written to and aggregated from.
    pub output_dir: PathBuf,
    #[serde(default)]
    pub extraction: ExtractionOptions,
    #[serde(default)]
    pub fit: FitOptions,
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    #[serde(default)]
    pub output: BatchOutputConfig,
}

impl BatchConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            extraction: ExtractionOptions::default(),
            fit: FitOptions::default(),
            histogram_bins: default_histogram_bins(),
            output: BatchOutputConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BatchOutputConfig {
    /// Segment files are named `<file_prefix><index>.txt`.
    pub file_prefix: String,
    /// Write the header line at the top of each segment file.
    pub segment_header: bool,
    pub report_json: Option<PathBuf>,
    /// Directory for histogram and CDF plots; no plots when unset.
    pub plots_dir: Option<PathBuf>,
}

impl Default for BatchOutputConfig {
    fn default() -> Self {
        Self {
            file_prefix: "Flights_And_Pauses_".to_string(),
            segment_header: false,
            report_json: None,
            plots_dir: None,
        }
    }
}

pub fn load_config(path: &Path) -> Result<BatchConfig> {
    load_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flights::AnomalyPolicy;

    #[test]
    fn minimal_config_uses_defaults() {
        let config: BatchConfig =
            serde_json::from_str(r#"{"input_dir": "logs", "output_dir": "flights"}"#).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("logs"));
        assert_eq!(config.histogram_bins, 10);
        assert_eq!(config.output.file_prefix, "Flights_And_Pauses_");
        assert_eq!(config.extraction.sample_interval, 0.5);
        assert_eq!(config.extraction.anomaly_policy, AnomalyPolicy::Skip);
        assert!(config.fit.initial_lambda.is_none());
        assert!(config.output.plots_dir.is_none());
    }

    #[test]
    fn parses_policies_and_outputs() {
        let json = r#"{
            "input_dir": "logs",
            "output_dir": "flights",
            "extraction": {"anomaly_policy": "pivot", "flush_policy": "emit"},
            "histogram_bins": 20,
            "output": {"report_json": "out/report.json", "plots_dir": "out/plots"}
        }"#;
        let config: BatchConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.extraction.anomaly_policy, AnomalyPolicy::Pivot);
        assert_eq!(config.histogram_bins, 20);
        assert_eq!(config.output.plots_dir, Some(PathBuf::from("out/plots")));
        assert_eq!(config.output.file_prefix, "Flights_And_Pauses_");
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = load_config(Path::new("/nonexistent/batch.json")).unwrap_err();
        assert!(matches!(err, crate::error::Error::Config { .. }));
    }
}
