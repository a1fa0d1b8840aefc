//! Batch entry points over directories of trajectory logs.
//!
//! Each log is processed on its own: a failure is recorded in the report and
//! the remaining logs are still processed. All state of a run lives in the
//! returned report.

mod run;
mod scan;

pub use run::{aggregate_segment_files, process_log, run_batch, run_directions, ProcessedLog};
pub use scan::{list_input_logs, list_segment_files, EXCLUDED_MARKERS, SEGMENT_EXTENSION};
