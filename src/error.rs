// Error types shared by the planning engine and its collaborators

use thiserror::Error as ThisError;

/// Coarse error category handed to a display sink together with the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InsufficientPoints,
    MissingCoordinate,
    NoValidPath,
    InvalidInput,
    Resolution,
    Config,
}

#[derive(Debug, ThisError)]
pub enum PlannerError {
    #[error("at least a start and an end point are required, got {count}")]
    InsufficientPoints { count: usize },
    #[error("point {0} has no coordinate data")]
    MissingCoordinate(String),
    #[error("no valid path")]
    NoValidPath,
    #[error("waypoint {0} has already been added")]
    DuplicateWaypoint(String),
    #[error("distance matrix is not square: row {row} has {len} entries, expected {size}")]
    RaggedMatrix { row: usize, len: usize, size: usize },
    #[error("point {name} has an invalid coordinate ({longitude}, {latitude})")]
    InvalidCoordinate {
        name: String,
        longitude: f64,
        latitude: f64,
    },
    #[error("could not resolve {name}: {reason}")]
    Resolution { name: String, reason: String },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    pub fn resolution(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Resolution {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Category used when reporting to a display sink
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientPoints { .. } => ErrorKind::InsufficientPoints,
            Self::MissingCoordinate(_) => ErrorKind::MissingCoordinate,
            Self::NoValidPath => ErrorKind::NoValidPath,
            Self::DuplicateWaypoint(_)
            | Self::InvalidCoordinate { .. }
            | Self::RaggedMatrix { .. } => ErrorKind::InvalidInput,
            Self::Resolution { .. } => ErrorKind::Resolution,
            Self::Config(_) | Self::Io(_) | Self::Json(_) => ErrorKind::Config,
        }
    }
}
