use super::options::AnomalyPolicy;
use crate::error::{Error, Result};
use crate::types::Sample;
use log::warn;
use serde::{Deserialize, Serialize};

/// Class of the transition between two consecutive samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transition {
    /// Position changed, heading unchanged.
    Moving,
    /// Position unchanged, heading unchanged.
    Paused,
    /// Position and heading changed: the current flight ends here.
    Pivoting,
    /// Position unchanged but heading changed. Outside the flight model;
    /// handled according to [`AnomalyPolicy`].
    TurnInPlace,
}

/// Classifies the step from `prev` to `next`.
///
/// Position and heading are compared exactly, as recorded.
pub fn classify(prev: &Sample, next: &Sample) -> Transition {
    match (prev.same_position(next), prev.same_heading(next)) {
        (false, true) => Transition::Moving,
        (true, true) => Transition::Paused,
        (false, false) => Transition::Pivoting,
        (true, false) => Transition::TurnInPlace,
    }
}

/// A turn-in-place transition observed during a walk.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionAnomaly {
    /// Index of the later sample of the pair.
    pub index: usize,
    pub position: [f64; 2],
    pub previous_heading: f64,
    pub heading: f64,
}

impl TransitionAnomaly {
    fn new(index: usize, prev: &Sample, next: &Sample) -> Self {
        Self {
            index,
            position: [next.position.x, next.position.y],
            previous_heading: prev.heading,
            heading: next.heading,
        }
    }

    fn into_error(self) -> Error {
        Error::AnomalousTransition {
            index: self.index,
            x: self.position[0],
            z: self.position[1],
            previous_heading: self.previous_heading,
            heading: self.heading,
        }
    }
}

/// Per-class tally of the transitions a walk visited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionCounts {
    pub moving: usize,
    pub paused: usize,
    pub pivoting: usize,
    pub anomalous: usize,
}

impl TransitionCounts {
    pub fn total(&self) -> usize {
        self.moving + self.paused + self.pivoting + self.anomalous
    }
}

/// What a consumer of the walk should do with one sample pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Move,
    Pause,
    /// Close the current flight. `moved` is false for a turn in place
    /// promoted to a pivot.
    Pivot { moved: bool },
    /// Ignore the pair and advance.
    Skip,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct WalkStep {
    pub prev: usize,
    pub end: usize,
    pub step: Step,
}

/// Single forward pass over consecutive sample pairs, shared by the flight
/// extractor and the direction correlator.
///
/// The walk always advances by one sample, so it visits exactly
/// `samples.len() - 1` pairs unless the policy aborts.
pub(crate) struct TransitionWalk<'a> {
    samples: &'a [Sample],
    policy: AnomalyPolicy,
    end: usize,
    done: bool,
    anomalies: Vec<TransitionAnomaly>,
    counts: TransitionCounts,
}

impl<'a> TransitionWalk<'a> {
    pub(crate) fn new(samples: &'a [Sample], policy: AnomalyPolicy) -> Self {
        Self {
            samples,
            policy,
            end: 1,
            done: false,
            anomalies: Vec::new(),
            counts: TransitionCounts::default(),
        }
    }

    pub(crate) fn finish(self) -> (Vec<TransitionAnomaly>, TransitionCounts) {
        (self.anomalies, self.counts)
    }

    fn resolve(&mut self, prev: usize, end: usize) -> Result<Step> {
        let (a, b) = (&self.samples[prev], &self.samples[end]);
        let step = match classify(a, b) {
            Transition::Moving => {
                self.counts.moving += 1;
                Step::Move
            }
            Transition::Paused => {
                self.counts.paused += 1;
                Step::Pause
            }
            Transition::Pivoting => {
                self.counts.pivoting += 1;
                Step::Pivot { moved: true }
            }
            Transition::TurnInPlace => {
                let anomaly = TransitionAnomaly::new(end, a, b);
                self.counts.anomalous += 1;
                if self.policy == AnomalyPolicy::Abort {
                    return Err(anomaly.into_error());
                }
                warn!(
                    "turn in place at sample {end}: heading {} -> {} at ({}, {}), policy {:?}",
                    anomaly.previous_heading,
                    anomaly.heading,
                    anomaly.position[0],
                    anomaly.position[1],
                    self.policy
                );
                self.anomalies.push(anomaly);
                match self.policy {
                    AnomalyPolicy::Skip | AnomalyPolicy::Abort => Step::Skip,
                    AnomalyPolicy::Pivot => Step::Pivot { moved: false },
                }
            }
        };
        Ok(step)
    }
}

impl Iterator for TransitionWalk<'_> {
    type Item = Result<WalkStep>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.end >= self.samples.len() {
            return None;
        }
        let prev = self.end - 1;
        let end = self.end;
        self.end += 1;
        match self.resolve(prev, end) {
            Ok(step) => Some(Ok(WalkStep { prev, end, step })),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
