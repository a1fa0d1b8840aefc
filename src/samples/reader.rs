use crate::error::{Error, Result};
use crate::types::Sample;
use log::debug;
use std::fs;
use std::path::Path;

/// Header token the recorder writes at the top of each log.
pub const LOG_HEADER: &str = "Camera Path";

/// Reads and parses a trajectory log from disk.
pub fn read_samples(path: &Path) -> Result<Vec<Sample>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let samples = parse_samples(&text).map_err(|e| e.in_file(path))?;
    debug!("read {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Parses log text into samples in recording order.
pub fn parse_samples(text: &str) -> Result<Vec<Sample>> {
    let mut samples = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line == LOG_HEADER {
            continue;
        }
        samples.push(parse_sample_line(line, idx + 1)?);
    }
    Ok(samples)
}

/// Parses a single `x,z,heading` line. `line_no` is 1-based and only used for
/// error reporting.
pub fn parse_sample_line(line: &str, line_no: usize) -> Result<Sample> {
    let malformed = |reason: String| Error::MalformedSample {
        line: line_no,
        content: line.to_string(),
        reason,
    };

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(malformed(format!("expected 3 fields, found {}", fields.len())));
    }

    let mut values = [0.0f64; 3];
    for (slot, (name, field)) in values
        .iter_mut()
        .zip(["x", "z", "heading"].into_iter().zip(fields))
    {
        let value: f64 = field
            .parse()
            .map_err(|_| malformed(format!("{name} is not a number: {field:?}")))?;
        if !value.is_finite() {
            return Err(malformed(format!("{name} is not finite: {field:?}")));
        }
        *slot = value;
    }

    Ok(Sample::new(values[0], values[1], values[2]))
}
