use crate::angle::direction_from_axis_deg;
use crate::error::Result;
use crate::flights::{AnomalyPolicy, Step, TransitionAnomaly, TransitionCounts, TransitionWalk};
use crate::types::Sample;
use serde::Serialize;

/// Direction of one completed flight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionSample {
    pub start_index: usize,
    pub end_index: usize,
    /// Angle between the displacement and `+z` in degrees, in [0, 180].
    /// `None` when the flight returned to its starting position.
    pub direction_deg: Option<f64>,
    /// Heading recorded at the flight's first sample.
    pub heading_deg: f64,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionCorrelation {
    pub samples: Vec<DirectionSample>,
    pub anomalies: Vec<TransitionAnomaly>,
    pub counts: TransitionCounts,
}

impl DirectionCorrelation {
    pub fn differences(&self) -> Vec<f64> {
        heading_differences(&self.samples)
    }
}

/// Computes one [`DirectionSample`] per completed flight.
pub fn correlate_directions(samples: &[Sample], policy: AnomalyPolicy) -> Result<DirectionCorrelation> {
    if samples.len() < 2 {
        return Ok(DirectionCorrelation::default());
    }

    let mut start = 0usize;
    let mut out = Vec::new();
    let mut walk = TransitionWalk::new(samples, policy);
    for step in walk.by_ref() {
        let step = step?;
        if let Step::Pivot { .. } = step.step {
            let displacement = samples[step.end].position - samples[start].position;
            out.push(DirectionSample {
                start_index: start,
                end_index: step.end,
                direction_deg: direction_from_axis_deg(&displacement),
                heading_deg: samples[start].heading,
            });
            start = step.end;
        }
    }
    let (anomalies, counts) = walk.finish();

    Ok(DirectionCorrelation {
        samples: out,
        anomalies,
        counts,
    })
}

/// `|direction - heading|` for every sample with a defined direction.
pub fn heading_differences(samples: &[DirectionSample]) -> Vec<f64> {
    samples
        .iter()
        .filter_map(|s| s.direction_deg.map(|d| (d - s.heading_deg).abs()))
        .collect()
}
