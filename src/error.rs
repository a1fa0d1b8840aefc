use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A trajectory log line is not three finite comma-separated numbers.
    #[error("malformed sample at line {line} ({content:?}): {reason}")]
    MalformedSample {
        line: usize,
        content: String,
        reason: String,
    },

    /// Position unchanged while the heading changed; not a moving, paused or
    /// pivoting transition.
    #[error(
        "anomalous transition at sample {index}: position ({x}, {z}) unchanged, heading {previous_heading} -> {heading}"
    )]
    AnomalousTransition {
        index: usize,
        x: f64,
        z: f64,
        previous_heading: f64,
        heading: f64,
    },

    /// A stored segment line is not five numeric fields.
    #[error("malformed segment record at line {line} ({content:?}): {reason}")]
    MalformedSegment {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to draw chart {}: {reason}", path.display())]
    Plot { path: PathBuf, reason: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Attaches a file path to a parse error raised on in-memory text.
    pub fn in_file(self, path: &std::path::Path) -> Self {
        match self {
            Error::MalformedSample {
                line,
                content,
                reason,
            } => Error::MalformedSample {
                line,
                content,
                reason: format!("{reason} in {}", path.display()),
            },
            Error::MalformedSegment {
                line,
                content,
                reason,
            } => Error::MalformedSegment {
                line,
                content,
                reason: format!("{reason} in {}", path.display()),
            },
            other => other,
        }
    }
}
