//! Paint error types

use thiserror::Error;

/// Errors raised while decoding paint values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaintError {
    /// A hex color string was not `#RRGGBB` or `#RRGGBBAA`
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

/// Result type for paint operations
pub type Result<T> = std::result::Result<T, PaintError>;
