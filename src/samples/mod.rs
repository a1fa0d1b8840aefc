//! Trajectory log reader.
//!
//! A log holds one sample per line as `x,z,heading`. Blank lines and the
//! `Camera Path` header written by the recorder are skipped; any other line
//! that is not exactly three finite numbers fails the whole file.

mod reader;

pub use reader::{parse_sample_line, parse_samples, read_samples, LOG_HEADER};

#[cfg(test)]
mod tests;
