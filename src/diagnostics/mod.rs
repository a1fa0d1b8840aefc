//! Serialisable reports produced by the batch tools.
//!
//! `BatchReport` is the main entry point: one `FileReport` per processed log,
//! the failures that were skipped, aggregate statistics over the segment
//! files, and a `TimingBreakdown` of the stages that ran.

pub mod report;
pub mod timing;

pub use report::{
    BatchReport, DirectionBatchReport, DirectionReport, FileFailure, FileReport, SeriesReport,
};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
