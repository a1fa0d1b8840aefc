use flight_pause::batch::run_batch;
use flight_pause::config::batch;
use flight_pause::diagnostics::BatchReport;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = batch::load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    let report = run_batch(&config).map_err(|e| e.to_string())?;
    print_summary(&report);
    if let Some(path) = &config.output.report_json {
        println!("JSON report written to {}", path.display());
    }
    Ok(())
}

fn print_summary(report: &BatchReport) {
    println!(
        "Processed {} logs ({} failed), aggregated {} flights from {} segment files",
        report.files.len(),
        report.failures.len(),
        report.segment_count,
        report.segment_files.len()
    );
    for failure in &report.failures {
        println!("  failed: {} ({})", failure.path.display(), failure.error);
    }
    for series in &report.series {
        if let Some(s) = &series.summary {
            println!(
                "{:<14} n={:<5} min={:>10.3} median={:>10.3} mean={:>10.3} max={:>10.3}",
                series.title, s.count, s.min, s.median, s.mean, s.max
            );
        }
    }
    match &report.poisson_fit {
        Some(fit) => println!(
            "Poisson fit: lambda={:.8} (sse={:.5}, iterations={}, converged={})",
            fit.lambda, fit.residual_sum_sq, fit.iterations, fit.converged
        ),
        None => println!("Poisson fit: no flights to fit"),
    }
    if let Some(s) = &report.directions.summary {
        println!(
            "|direction - heading|: n={} mean={:.3} median={:.3} ({} flights without direction)",
            s.count, s.mean, s.median, report.directions.undefined
        );
    }
    for plot in &report.plots {
        println!("Saved plot {}", plot.display());
    }
}

fn usage() -> String {
    "Usage: flight_batch <config.json>".to_string()
}
