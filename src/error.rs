use thiserror::Error;

/// Errors raised by the grid model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A coordinate outside `[0, size)` was used
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: i32, col: i32, size: usize },

    /// A grid dimension outside the supported range was requested
    #[error("grid size {requested} is not within {min}..={max}")]
    InvalidSize {
        requested: usize,
        min: usize,
        max: usize,
    },
}

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Text that could not be read as a color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color value: {0:?}")]
pub struct ColorParseError(pub String);

/// Errors that can occur while loading an editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read configuration file: {0}")]
    Read(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] GridError),
}

/// Errors surfaced by the editor while handling an input event
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
