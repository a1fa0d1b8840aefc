//! Segment files: one flight per line as
//! `length,headingChange,flightTime,pauseTime,speed`.
//!
//! Numbers are written in shortest round-trip form so a file read back yields
//! the same values. The reader drops records of zero length.

mod reader;
mod writer;

pub use reader::{parse_segment_line, parse_segments, read_segments};
pub use writer::{format_record, write_segments, SegmentWriter};

/// Optional first line of a segment file.
pub const SEGMENT_HEADER: &str = "length,headingChange,flightTime,pauseTime,speed";

#[cfg(test)]
mod tests;
