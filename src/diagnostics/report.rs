use super::timing::TimingBreakdown;
use crate::direction::DirectionCorrelation;
use crate::flights::{FlightExtraction, OpenSegment, TransitionAnomaly, TransitionCounts};
use crate::stats::{CdfPoint, Histogram, PoissonFit, Series, SeriesSummary};
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of processing one trajectory log.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub samples: usize,
    pub records: usize,
    pub counts: TransitionCounts,
    pub anomalies: Vec<TransitionAnomaly>,
    pub trailing: OpenSegment,
    pub directions: usize,
}

impl FileReport {
    pub fn new(
        input: PathBuf,
        output: PathBuf,
        samples: usize,
        extraction: &FlightExtraction,
        directions: &DirectionCorrelation,
    ) -> Self {
        Self {
            input,
            output,
            samples,
            records: extraction.records.len(),
            counts: extraction.counts,
            anomalies: extraction.anomalies.clone(),
            trailing: extraction.trailing,
            directions: directions.samples.len(),
        }
    }
}

/// A file the batch could not process; the batch continued without it.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Summary and histogram of one aggregated column.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesReport {
    pub series: Series,
    pub title: &'static str,
    pub summary: Option<SeriesSummary>,
    pub histogram: Option<Histogram>,
}

/// Absolute differences between flight direction and recorded heading.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionReport {
    pub flights: usize,
    /// Flights that ended where they started and have no direction.
    pub undefined: usize,
    pub differences: Vec<f64>,
    pub summary: Option<SeriesSummary>,
    pub histogram: Option<Histogram>,
}

impl DirectionReport {
    pub fn from_correlations<'a>(
        correlations: impl IntoIterator<Item = &'a DirectionCorrelation>,
        bins: usize,
    ) -> Self {
        let mut report = DirectionReport::default();
        for correlation in correlations {
            report.flights += correlation.samples.len();
            report.undefined += correlation
                .samples
                .iter()
                .filter(|s| s.direction_deg.is_none())
                .count();
            report.differences.extend(correlation.differences());
        }
        report.summary = SeriesSummary::from_values(&report.differences);
        report.histogram = Histogram::from_values(&report.differences, bins);
        report
    }
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
    /// Segment files the aggregate was read from.
    pub segment_files: Vec<PathBuf>,
    pub segment_count: usize,
    pub series: Vec<SeriesReport>,
    pub length_cdf: Vec<CdfPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poisson_fit: Option<PoissonFit>,
    pub directions: DirectionReport,
    pub plots: Vec<PathBuf>,
    pub timing: TimingBreakdown,
}

/// Result of the `flight_directions` tool.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionBatchReport {
    pub files: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
    pub directions: DirectionReport,
    pub timing: TimingBreakdown,
}
