//! PNG charts for the batch tools, drawn with `plotters` on its bitmap
//! backend: bar charts for histograms and line plots for CDF curves.

use crate::error::{Error, Result};
use crate::io::ensure_parent_dir;
use crate::stats::{CdfPoint, Histogram, PoissonCdf};
use plotters::prelude::*;
use std::path::Path;

const BAR: RGBColor = RGBColor(70, 130, 180);
const EMPIRICAL: RGBColor = RGBColor(31, 119, 180);
const FITTED: RGBColor = RGBColor(255, 127, 14);
const CURVE_STEPS: usize = 200;

type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

#[derive(Clone, Copy, Debug)]
pub struct PlotSize {
    pub width: u32,
    pub height: u32,
}

impl Default for PlotSize {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

/// Caption and axis descriptions of a chart.
#[derive(Clone, Copy, Debug)]
pub struct ChartLabels<'a> {
    pub title: &'a str,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
}

/// Renders `hist` as a bar chart of counts per bin.
pub fn render_histogram(
    hist: &Histogram,
    labels: ChartLabels<'_>,
    size: PlotSize,
    path: &Path,
) -> Result<()> {
    if !(hist.max - hist.min).is_finite() || hist.bin_width <= 0.0 {
        return Err(plot_error(path, "histogram range is not finite"));
    }
    ensure_parent_dir(path)?;
    draw_histogram(hist, labels, size, path).map_err(|e| plot_error(path, e))
}

fn draw_histogram(hist: &Histogram, labels: ChartLabels<'_>, size: PlotSize, path: &Path) -> DrawResult {
    let root = BitMapBackend::new(path, (size.width, size.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = (hist.max_count() as f64 * 1.1).max(1.0);
    let mut chart = ChartBuilder::on(&root)
        .caption(labels.title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(hist.min..hist.max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(labels.x_desc)
        .y_desc(labels.y_desc)
        .draw()?;

    chart.draw_series(hist.counts.iter().enumerate().map(|(i, &count)| {
        let x0 = hist.min + i as f64 * hist.bin_width;
        let x1 = x0 + hist.bin_width;
        Rectangle::new([(x0, 0.0), (x1, count as f64)], BAR.filled())
    }))?;

    root.present()?;
    Ok(())
}

/// Renders the empirical CDF and, when given, the fitted model sampled over
/// the same value range.
pub fn render_cdf(
    points: &[CdfPoint],
    fitted: Option<&PoissonCdf>,
    labels: ChartLabels<'_>,
    size: PlotSize,
    path: &Path,
) -> Result<()> {
    let (lo, hi) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first.value.min(0.0), last.value),
        _ => (0.0, 1.0),
    };
    let hi = if hi > lo { hi } else { lo + 1.0 };
    if !(hi - lo).is_finite() {
        return Err(plot_error(path, "value range is not finite"));
    }
    ensure_parent_dir(path)?;
    draw_cdf(points, fitted, labels, (lo, hi), size, path).map_err(|e| plot_error(path, e))
}

fn draw_cdf(
    points: &[CdfPoint],
    fitted: Option<&PoissonCdf>,
    labels: ChartLabels<'_>,
    (lo, hi): (f64, f64),
    size: PlotSize,
    path: &Path,
) -> DrawResult {
    let root = BitMapBackend::new(path, (size.width, size.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(labels.title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(lo..hi, 0.0..1.05)?;

    chart
        .configure_mesh()
        .x_desc(labels.x_desc)
        .y_desc(labels.y_desc)
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.value, p.probability)),
            EMPIRICAL.stroke_width(2),
        ))?
        .label("empirical")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], EMPIRICAL));

    if let Some(model) = fitted {
        let step = (hi - lo) / CURVE_STEPS as f64;
        chart
            .draw_series(LineSeries::new(
                (0..=CURVE_STEPS).map(|i| {
                    let r = lo + i as f64 * step;
                    (r, model.evaluate(r))
                }),
                FITTED.stroke_width(2),
            ))?
            .label(format!("fitted, lambda = {:.5}", model.lambda))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], FITTED));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(&WHITE)
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn plot_error(path: &Path, reason: impl std::fmt::Display) -> Error {
    Error::Plot {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::empirical_cdf;

    const LABELS: ChartLabels<'static> = ChartLabels {
        title: "Flight Lengths",
        x_desc: "length",
        y_desc: "count",
    };

    #[test]
    fn writes_histogram_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist.png");
        let hist = Histogram::from_values(&[1.0, 2.0, 2.0, 3.0], 3).unwrap();
        render_histogram(&hist, LABELS, PlotSize::default(), &path).expect("render");
        let img = image::open(&path).expect("png").to_rgb8();
        assert_eq!(img.dimensions(), (640, 480));
    }

    #[test]
    fn writes_cdf_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plots").join("cdf.png");
        let points = empirical_cdf(&[0.5, 1.0, 1.5, 4.0]);
        let model = PoissonCdf::new(0.1);
        let size = PlotSize {
            width: 320,
            height: 240,
        };
        let labels = ChartLabels {
            title: "Flight Length CDF",
            x_desc: "length",
            y_desc: "probability",
        };
        render_cdf(&points, Some(&model), labels, size, &path).expect("render");
        let img = image::open(&path).expect("png").to_rgb8();
        assert_eq!(img.dimensions(), (320, 240));
    }

    #[test]
    fn unbounded_histogram_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let hist = Histogram {
            min: -f64::MAX,
            max: f64::MAX,
            bin_width: f64::INFINITY,
            counts: vec![1],
        };
        let err = render_histogram(&hist, LABELS, PlotSize::default(), &dir.path().join("h.png"))
            .unwrap_err();
        assert!(matches!(err, Error::Plot { .. }));
    }
}
