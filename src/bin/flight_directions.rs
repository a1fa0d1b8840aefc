use flight_pause::batch::run_directions;
use flight_pause::config::directions;
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
    let config = directions::load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    let report = run_directions(&config).map_err(|e| e.to_string())?;

    let dirs = &report.directions;
    println!(
        "Correlated {} flights from {} logs ({} failed, {} without direction)",
        dirs.flights,
        report.files.len(),
        report.failures.len(),
        dirs.undefined
    );
    if let Some(s) = &dirs.summary {
        println!(
            "|direction - heading|: min={:.3} median={:.3} mean={:.3} max={:.3}",
            s.min, s.median, s.mean, s.max
        );
    }
    if let Some(hist) = &dirs.histogram {
        for (edge, count) in hist.bin_edges().iter().zip(&hist.counts) {
            println!("  >= {edge:>8.2}: {count}");
        }
    }
    if let (Some(path), Some(_)) = (&config.plot_path, &dirs.histogram) {
        println!("Saved plot {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: flight_directions <config.json>".to_string()
}
