//! Flight/pause segmentation of a recorded trajectory.
//!
//! The extractor walks consecutive sample pairs once and classifies each pair:
//!
//! - *moving*: position changed, heading unchanged. Adds one interval of
//!   flight time and the step distance to the current flight.
//! - *paused*: position and heading unchanged. Adds one interval of pause
//!   time.
//! - *pivoting*: both changed. Emits the current flight as a
//!   [`SegmentRecord`](crate::types::SegmentRecord) and starts the next one at
//!   the later sample, already holding the pivot step's interval and distance.
//! - *turn in place*: position unchanged, heading changed. Never counted as
//!   moving or paused; reported as a [`TransitionAnomaly`] and handled
//!   according to [`AnomalyPolicy`].
//!
//! The heading change of a flight is measured from the sample that started it
//! (index 0 for the first flight) to the closing pivot sample, without
//! wrapping. A flight that is still open at the end of the data is dropped
//! unless [`FlushPolicy::Emit`] is selected; its totals are always reported in
//! [`FlightExtraction::trailing`].
//!
//! Pause time counts every stationary interval between the two pivots that
//! bound the flight.

mod extractor;
mod options;
mod transition;

pub use extractor::{FlightExtraction, OpenSegment};
pub use options::{AnomalyPolicy, ExtractionOptions, FlushPolicy};
pub use transition::{classify, Transition, TransitionAnomaly, TransitionCounts};

pub(crate) use transition::{Step, TransitionWalk};

use crate::error::Result;
use crate::types::Sample;

/// Splits `samples` into flights. Fewer than two samples yield an empty result.
pub fn extract_flights(samples: &[Sample], options: &ExtractionOptions) -> Result<FlightExtraction> {
    extractor::FlightExtractor::new(samples, *options).extract()
}
