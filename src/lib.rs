#![doc = include_str!("../README.md")]

// Core pipeline.
pub mod direction;
pub mod flights;
pub mod samples;
pub mod store;
pub mod types;

// Statistics and output.
pub mod diagnostics;
pub mod plot;
pub mod stats;

// Tooling surface.
pub mod angle;
pub mod batch;
pub mod config;
pub mod error;
pub mod io;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{Error, Result};
pub use crate::flights::{extract_flights, ExtractionOptions, FlightExtraction};
pub use crate::types::{Sample, SegmentRecord, SAMPLE_INTERVAL};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for scripts and quick experiments.
///
/// ```no_run
/// use flight_pause::prelude::*;
///
/// # fn main() -> flight_pause::Result<()> {
/// let samples = read_samples(std::path::Path::new("CameraPath_0.txt"))?;
/// let extraction = extract_flights(&samples, &ExtractionOptions::default())?;
/// println!("{} flights", extraction.records.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::direction::correlate_directions;
    pub use crate::flights::{
        extract_flights, AnomalyPolicy, ExtractionOptions, FlightExtraction, FlushPolicy,
    };
    pub use crate::samples::{parse_samples, read_samples};
    pub use crate::store::{read_segments, write_segments};
    pub use crate::{Sample, SegmentRecord};
}
