//! Error types for board analysis

/// Errors raised while preparing or loading board data
///
/// `UndefinedGeometry` and `UnmappedLayer` are per-record and never abort a
/// matching pass; runners log them and drop the record.
#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    #[error("missing input table: {0}")]
    MissingInput(String),
    #[error("undefined geometry for '{id}': {reason}")]
    UndefinedGeometry { id: String, reason: String },
    #[error("layer '{layer}' of '{id}' does not map to TOP or BOTTOM")]
    UnmappedLayer { id: String, layer: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoverageError>;
