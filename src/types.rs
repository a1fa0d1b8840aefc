use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Seconds between two consecutive samples of a recorded trajectory.
pub const SAMPLE_INTERVAL: f64 = 0.5;

/// One line of a trajectory log: ground-plane position and heading in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// `(x, z)` position.
    pub position: Point2<f64>,
    /// Heading around the vertical axis in degrees, nominally in [0, 360).
    pub heading: f64,
}

impl Sample {
    pub fn new(x: f64, z: f64, heading: f64) -> Self {
        Self {
            position: Point2::new(x, z),
            heading,
        }
    }

    #[inline]
    pub fn same_position(&self, other: &Sample) -> bool {
        self.position == other.position
    }

    #[inline]
    pub fn same_heading(&self, other: &Sample) -> bool {
        self.heading == other.heading
    }

    /// Euclidean distance between the two positions.
    #[inline]
    pub fn distance_to(&self, other: &Sample) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }
}

/// Statistics of one completed flight and the pause that preceded it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRecord {
    /// Path length summed over the flight's moving intervals.
    pub length: f64,
    /// Heading at the closing pivot minus heading at the flight start, unwrapped.
    pub heading_change: f64,
    /// Seconds spent moving.
    pub flight_time: f64,
    /// Seconds spent stationary since the previous pivot.
    pub pause_time: f64,
    /// `length / flight_time`, zero when the flight has no duration.
    pub speed: f64,
}

impl SegmentRecord {
    pub fn new(length: f64, heading_change: f64, flight_time: f64, pause_time: f64) -> Self {
        let speed = if flight_time != 0.0 {
            length / flight_time
        } else {
            0.0
        };
        Self {
            length,
            heading_change,
            flight_time,
            pause_time,
            speed,
        }
    }

    /// Records with zero length carry no flight and are left out of aggregates.
    pub fn is_degenerate(&self) -> bool {
        self.length == 0.0
    }
}
