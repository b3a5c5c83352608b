//! Error module containing the error type and result alias

mod tendency_error;

pub use tendency_error::TendencyError;

/// Result type for tendency operations
pub type Result<T> = std::result::Result<T, TendencyError>;
