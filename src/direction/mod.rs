//! Flight direction versus recorded heading.
//!
//! Uses the same transition walk as [`crate::flights`], but at each pivot it
//! measures the straight-line displacement from the flight's first sample to
//! the pivot sample and reports its angle from the `+z` axis next to the
//! heading recorded at the flight start. Open flights at the end of the data
//! are not reported.

mod correlator;

pub use correlator::{correlate_directions, heading_differences, DirectionCorrelation, DirectionSample};
