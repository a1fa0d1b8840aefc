use super::SEGMENT_HEADER;
use crate::error::{Error, Result};
use crate::samples::LOG_HEADER;
use crate::types::SegmentRecord;
use log::debug;
use std::fs;
use std::path::Path;

pub fn read_segments(path: &Path) -> Result<Vec<SegmentRecord>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let records = parse_segments(&text).map_err(|e| e.in_file(path))?;
    debug!("read {} segment records from {}", records.len(), path.display());
    Ok(records)
}

/// Parses segment text, skipping headers and blank lines and dropping
/// zero-length records.
pub fn parse_segments(text: &str) -> Result<Vec<SegmentRecord>> {
    let mut records = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line == SEGMENT_HEADER || line == LOG_HEADER {
            continue;
        }
        let record = parse_segment_line(line, idx + 1)?;
        if !record.is_degenerate() {
            records.push(record);
        }
    }
    Ok(records)
}

/// Parses one stored record. The stored speed is kept as written.
pub fn parse_segment_line(line: &str, line_no: usize) -> Result<SegmentRecord> {
    let malformed = |reason: String| Error::MalformedSegment {
        line: line_no,
        content: line.to_string(),
        reason,
    };

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 5 {
        return Err(malformed(format!("expected 5 fields, found {}", fields.len())));
    }
    let mut values = [0.0f64; 5];
    for (i, (slot, field)) in values.iter_mut().zip(&fields).enumerate() {
        *slot = field
            .parse()
            .map_err(|_| malformed(format!("field {} is not a number: {field:?}", i + 1)))?;
    }

    Ok(SegmentRecord {
        length: values[0],
        heading_change: values[1],
        flight_time: values[2],
        pause_time: values[3],
        speed: values[4],
    })
}
