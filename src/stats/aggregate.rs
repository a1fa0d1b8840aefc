use crate::types::SegmentRecord;
use serde::Serialize;

/// Column of a [`SegmentAggregate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Series {
    Length,
    HeadingChange,
    FlightTime,
    PauseTime,
    Speed,
}

impl Series {
    pub const ALL: [Series; 5] = [
        Series::Length,
        Series::HeadingChange,
        Series::FlightTime,
        Series::PauseTime,
        Series::Speed,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Series::Length => "Flight Lengths",
            Series::HeadingChange => "Angle Changes",
            Series::FlightTime => "Flight Times",
            Series::PauseTime => "Pause Times",
            Series::Speed => "Velocities",
        }
    }

    /// Axis description with units.
    pub fn axis_label(self) -> &'static str {
        match self {
            Series::Length => "flight length",
            Series::HeadingChange => "heading change (deg)",
            Series::FlightTime => "flight time (s)",
            Series::PauseTime => "pause time (s)",
            Series::Speed => "speed (length / s)",
        }
    }

    /// File-name friendly identifier.
    pub fn slug(self) -> &'static str {
        match self {
            Series::Length => "flight_lengths",
            Series::HeadingChange => "angle_changes",
            Series::FlightTime => "flight_times",
            Series::PauseTime => "pause_times",
            Series::Speed => "velocities",
        }
    }
}

/// Column-wise collection of segment records from one batch run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentAggregate {
    pub lengths: Vec<f64>,
    pub heading_changes: Vec<f64>,
    pub flight_times: Vec<f64>,
    pub pause_times: Vec<f64>,
    pub speeds: Vec<f64>,
}

impl SegmentAggregate {
    /// Adds a record; zero-length records are ignored.
    pub fn push(&mut self, record: &SegmentRecord) {
        if record.is_degenerate() {
            return;
        }
        self.lengths.push(record.length);
        self.heading_changes.push(record.heading_change);
        self.flight_times.push(record.flight_time);
        self.pause_times.push(record.pause_time);
        self.speeds.push(record.speed);
    }

    pub fn extend<'a>(&mut self, records: impl IntoIterator<Item = &'a SegmentRecord>) {
        for record in records {
            self.push(record);
        }
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    pub fn series(&self, series: Series) -> &[f64] {
        match series {
            Series::Length => &self.lengths,
            Series::HeadingChange => &self.heading_changes,
            Series::FlightTime => &self.flight_times,
            Series::PauseTime => &self.pause_times,
            Series::Speed => &self.speeds,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

impl SeriesSummary {
    /// Summary over the finite values; `None` when there are none.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            0.5 * (sorted[n / 2 - 1] + sorted[n / 2])
        };
        Some(Self {
            count: n,
            min: sorted[0],
            max: sorted[n - 1],
            mean,
            median,
        })
    }
}
