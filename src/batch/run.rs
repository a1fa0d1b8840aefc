use super::scan::{list_input_logs, list_segment_files};
use crate::config::batch::BatchConfig;
use crate::config::directions::DirectionConfig;
use crate::diagnostics::{
    elapsed_ms, BatchReport, DirectionBatchReport, DirectionReport, FileFailure, FileReport,
    SeriesReport, TimingBreakdown,
};
use crate::direction::{correlate_directions, DirectionCorrelation};
use crate::error::{Error, Result};
use crate::flights::extract_flights;
use crate::io::write_json_file;
use crate::plot::{render_cdf, render_histogram, ChartLabels, PlotSize};
use crate::samples::read_samples;
use crate::stats::{empirical_cdf, fit_poisson_lambda, Histogram, SegmentAggregate, Series, SeriesSummary};
use crate::store::{read_segments, SegmentWriter};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// One trajectory log after extraction and direction correlation.
#[derive(Clone, Debug)]
pub struct ProcessedLog {
    pub report: FileReport,
    pub correlation: DirectionCorrelation,
}

/// Reads `input`, writes its flights to `output` and correlates directions.
pub fn process_log(input: &Path, output: &Path, config: &BatchConfig) -> Result<ProcessedLog> {
    let samples = read_samples(input)?;
    let extraction = extract_flights(&samples, &config.extraction)?;
    let correlation = correlate_directions(&samples, config.extraction.anomaly_policy)?;

    let mut writer = SegmentWriter::create(output)?;
    if config.output.segment_header {
        writer.write_header()?;
    }
    for record in &extraction.records {
        writer.write_record(record)?;
    }
    writer.finish()?;

    debug!(
        "{}: {} samples, {} flights, {} anomalies -> {}",
        input.display(),
        samples.len(),
        extraction.records.len(),
        extraction.anomalies.len(),
        output.display()
    );
    let report = FileReport::new(
        input.to_path_buf(),
        output.to_path_buf(),
        samples.len(),
        &extraction,
        &correlation,
    );
    Ok(ProcessedLog {
        report,
        correlation,
    })
}

/// Reads every segment file into one aggregate. Unreadable files are
/// reported and skipped.
pub fn aggregate_segment_files(paths: &[PathBuf]) -> (SegmentAggregate, Vec<FileFailure>) {
    let mut aggregate = SegmentAggregate::default();
    let mut failures = Vec::new();
    for path in paths {
        match read_segments(path) {
            Ok(records) => aggregate.extend(&records),
            Err(err) => {
                warn!("skipping segment file {}: {err}", path.display());
                failures.push(FileFailure {
                    path: path.clone(),
                    error: err.to_string(),
                });
            }
        }
    }
    (aggregate, failures)
}

fn segment_file_name(config: &BatchConfig, index: usize) -> PathBuf {
    config
        .output_dir
        .join(format!("{}{index}.txt", config.output.file_prefix))
}

/// Removes a segment file at the index of a log that failed this run so that
/// aggregation does not pick up an earlier run's output for it.
fn remove_stale_output(path: &Path) {
    if !path.is_file() {
        return;
    }
    match fs::remove_file(path) {
        Ok(()) => warn!("removed stale segment file {}", path.display()),
        Err(err) => warn!(
            "stale segment file {} will be aggregated: {err}",
            path.display()
        ),
    }
}

/// Extracts every log in `config.input_dir`, then aggregates every segment
/// file in `config.output_dir`.
///
/// A log that fails to parse or extract is recorded in
/// [`BatchReport::failures`] and does not stop the batch; any segment file at
/// its index is removed. Other segment files left in the output directory by
/// earlier runs are aggregated as well.
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport> {
    let started = Instant::now();
    let mut report = BatchReport::default();
    let mut timing = TimingBreakdown::default();

    fs::create_dir_all(&config.output_dir).map_err(|e| Error::io(&config.output_dir, e))?;

    let stage = Instant::now();
    let inputs = list_input_logs(&config.input_dir)?;
    info!(
        "extracting flights from {} logs in {}",
        inputs.len(),
        config.input_dir.display()
    );
    let mut correlations = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.iter().enumerate() {
        let output = segment_file_name(config, index);
        match process_log(input, &output, config) {
            Ok(processed) => {
                report.files.push(processed.report);
                correlations.push(processed.correlation);
            }
            Err(err) => {
                warn!("skipping {}: {err}", input.display());
                remove_stale_output(&output);
                report.failures.push(FileFailure {
                    path: input.clone(),
                    error: err.to_string(),
                });
            }
        }
    }
    timing.push("extract", elapsed_ms(stage));

    let stage = Instant::now();
    let segment_files = list_segment_files(&config.output_dir)?;
    let (aggregate, failures) = aggregate_segment_files(&segment_files);
    report.failures.extend(failures);
    report.segment_files = segment_files;
    report.segment_count = aggregate.len();
    timing.push("aggregate", elapsed_ms(stage));

    let bins = config.histogram_bins;
    timing.time("statistics", || {
        report.series = Series::ALL
            .iter()
            .map(|&series| {
                let values = aggregate.series(series);
                SeriesReport {
                    series,
                    title: series.title(),
                    summary: SeriesSummary::from_values(values),
                    histogram: Histogram::from_values(values, bins),
                }
            })
            .collect();
        report.length_cdf = empirical_cdf(&aggregate.lengths);
        report.poisson_fit = fit_poisson_lambda(&report.length_cdf, &config.fit);
        report.directions = DirectionReport::from_correlations(&correlations, bins);
    });
    match &report.poisson_fit {
        Some(fit) if fit.converged => info!(
            "fitted lambda={:.6} over {} flights (sse={:.4})",
            fit.lambda,
            report.length_cdf.len(),
            fit.residual_sum_sq
        ),
        Some(fit) => warn!(
            "poisson fit did not converge after {} iterations: lambda={:.6}, sse={:.4}",
            fit.iterations, fit.lambda, fit.residual_sum_sq
        ),
        None => {}
    }

    if let Some(dir) = &config.output.plots_dir {
        let stage = Instant::now();
        report.plots = render_batch_plots(&report, dir)?;
        timing.push("plots", elapsed_ms(stage));
    }

    timing.total_ms = elapsed_ms(started);
    report.timing = timing;
    info!(
        "batch done: {} logs, {} failures, {} flights aggregated",
        report.files.len(),
        report.failures.len(),
        report.segment_count
    );

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
    }
    Ok(report)
}

const DIRECTION_LABELS: ChartLabels<'static> = ChartLabels {
    title: "Differences between flight directions and headings",
    x_desc: "|direction - heading| (deg)",
    y_desc: "flights",
};

fn render_batch_plots(report: &BatchReport, dir: &Path) -> Result<Vec<PathBuf>> {
    let size = PlotSize::default();
    let mut written = Vec::new();
    for series in &report.series {
        if let Some(hist) = &series.histogram {
            let path = dir.join(format!("{}.png", series.series.slug()));
            let labels = ChartLabels {
                title: series.title,
                x_desc: series.series.axis_label(),
                y_desc: "flights",
            };
            render_histogram(hist, labels, size, &path)?;
            written.push(path);
        }
    }
    if !report.length_cdf.is_empty() {
        let path = dir.join("flight_length_cdf.png");
        let model = report.poisson_fit.map(|fit| fit.model());
        let labels = ChartLabels {
            title: "Flight Length CDF",
            x_desc: Series::Length.axis_label(),
            y_desc: "cumulative probability",
        };
        render_cdf(&report.length_cdf, model.as_ref(), labels, size, &path)?;
        written.push(path);
    }
    if let Some(hist) = &report.directions.histogram {
        let path = dir.join("direction_heading_differences.png");
        render_histogram(hist, DIRECTION_LABELS, size, &path)?;
        written.push(path);
    }
    Ok(written)
}

/// Correlates flight direction and heading over every log in
/// `config.input_dir`. Logs that fail are recorded and skipped.
pub fn run_directions(config: &DirectionConfig) -> Result<DirectionBatchReport> {
    let started = Instant::now();
    let mut report = DirectionBatchReport::default();

    let inputs = list_input_logs(&config.input_dir)?;
    let mut correlations = Vec::with_capacity(inputs.len());
    for input in inputs {
        let outcome = read_samples(&input)
            .and_then(|samples| correlate_directions(&samples, config.anomaly_policy));
        match outcome {
            Ok(correlation) => {
                correlations.push(correlation);
                report.files.push(input);
            }
            Err(err) => {
                warn!("skipping {}: {err}", input.display());
                report.failures.push(FileFailure {
                    path: input,
                    error: err.to_string(),
                });
            }
        }
    }
    report.directions = DirectionReport::from_correlations(&correlations, config.histogram_bins);

    if let (Some(path), Some(hist)) = (&config.plot_path, &report.directions.histogram) {
        render_histogram(hist, DIRECTION_LABELS, PlotSize::default(), path)?;
    }
    report.timing.total_ms = elapsed_ms(started);
    if let Some(path) = &config.report_json {
        write_json_file(path, &report)?;
    }
    Ok(report)
}
