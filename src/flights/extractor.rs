use super::options::{ExtractionOptions, FlushPolicy};
use super::transition::{Step, TransitionAnomaly, TransitionCounts, TransitionWalk};
use crate::error::Result;
use crate::types::{Sample, SegmentRecord};
use serde::Serialize;

/// State of the segment that was still open when the samples ran out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSegment {
    pub start_index: usize,
    pub length: f64,
    pub flight_time: f64,
    pub pause_time: f64,
    /// True when the open segment was emitted as the final record.
    pub flushed: bool,
}

/// Output of one extraction pass.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightExtraction {
    pub records: Vec<SegmentRecord>,
    pub anomalies: Vec<TransitionAnomaly>,
    pub trailing: OpenSegment,
    pub counts: TransitionCounts,
}

/// Running totals of the flight being accumulated. Times are kept as
/// interval counts.
struct SegmentAccumulator {
    start: usize,
    flight_intervals: usize,
    pause_intervals: usize,
    length: f64,
}

impl SegmentAccumulator {
    fn new() -> Self {
        Self {
            start: 0,
            flight_intervals: 0,
            pause_intervals: 0,
            length: 0.0,
        }
    }

    /// Starts a new segment at `start`, seeded with the pivot step.
    fn reset(&mut self, start: usize, seed_intervals: usize, seed_length: f64) {
        self.start = start;
        self.flight_intervals = seed_intervals;
        self.pause_intervals = 0;
        self.length = seed_length;
    }

    fn push_move(&mut self, distance: f64) {
        self.flight_intervals += 1;
        self.length += distance;
    }

    fn push_pause(&mut self) {
        self.pause_intervals += 1;
    }

    fn record(&self, samples: &[Sample], end: usize, interval: f64) -> SegmentRecord {
        SegmentRecord::new(
            self.length,
            samples[end].heading - samples[self.start].heading,
            self.flight_intervals as f64 * interval,
            self.pause_intervals as f64 * interval,
        )
    }

    fn open_segment(&self, interval: f64) -> OpenSegment {
        OpenSegment {
            start_index: self.start,
            length: self.length,
            flight_time: self.flight_intervals as f64 * interval,
            pause_time: self.pause_intervals as f64 * interval,
            flushed: false,
        }
    }
}

pub(super) struct FlightExtractor<'a> {
    samples: &'a [Sample],
    options: ExtractionOptions,
    acc: SegmentAccumulator,
    records: Vec<SegmentRecord>,
}

impl<'a> FlightExtractor<'a> {
    pub(super) fn new(samples: &'a [Sample], options: ExtractionOptions) -> Self {
        Self {
            samples,
            options,
            acc: SegmentAccumulator::new(),
            records: Vec::new(),
        }
    }

    pub(super) fn extract(mut self) -> Result<FlightExtraction> {
        if self.samples.len() < 2 {
            return Ok(FlightExtraction::default());
        }

        let mut walk = TransitionWalk::new(self.samples, self.options.anomaly_policy);
        for step in walk.by_ref() {
            let step = step?;
            self.apply(step.prev, step.end, step.step);
        }
        let (anomalies, counts) = walk.finish();

        let interval = self.options.sample_interval;
        let mut trailing = self.acc.open_segment(interval);
        if self.options.flush_policy == FlushPolicy::Emit && self.acc.flight_intervals > 0 {
            let last = self.samples.len() - 1;
            self.records.push(self.acc.record(self.samples, last, interval));
            trailing.flushed = true;
        }

        Ok(FlightExtraction {
            records: self.records,
            anomalies,
            trailing,
            counts,
        })
    }

    fn apply(&mut self, prev: usize, end: usize, step: Step) {
        let (a, b) = (&self.samples[prev], &self.samples[end]);
        match step {
            Step::Move => self.acc.push_move(a.distance_to(b)),
            Step::Pause => self.acc.push_pause(),
            Step::Pivot { moved } => {
                let record = self
                    .acc
                    .record(self.samples, end, self.options.sample_interval);
                self.records.push(record);
                // The pivot step itself is the first moving interval of the next flight.
                if moved {
                    self.acc.reset(end, 1, a.distance_to(b));
                } else {
                    self.acc.reset(end, 0, 0.0);
                }
            }
            Step::Skip => {}
        }
    }
}
