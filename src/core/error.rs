//! Error types for tessella.
//!
//! Uses thiserror for structured errors with context. Structural problems
//! (bad dimensions, out-of-range coordinates, wrong tile counts) fail fast
//! with a typed error carrying the offending values; per-channel numeric
//! values never fail and are clamped into 0..=255 at write time instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error type for tessella.
///
/// This enum encompasses all error categories and enables automatic
/// conversion from the layer-specific error types.
#[derive(Error, Debug)]
pub enum TessellaError {
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),

    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("Compose error: {0}")]
    Compose(#[from] ComposeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),
}

/// Errors from pixel-buffer construction and coordinate access.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum BufferError {
    #[error("Invalid dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: u32, height: u32 },

    #[error("Coordinate ({x}, {y}) is outside buffer bounds ({width}x{height})")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    #[error("Unsupported color model '{model}': expected 8-bit RGB without alpha")]
    UnsupportedColorModel { model: String },

    #[error("Unknown background color '{name}' (expected white, black, red, green or blue)")]
    UnknownBackground { name: String },

    #[error("Unknown channel '{name}' (expected red, green or blue)")]
    UnknownChannel { name: String },
}

/// Errors from the per-image transforms.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum TransformError {
    #[error("Shrink factor must be positive")]
    InvalidShrinkFactor,

    #[error("Shrinking {width}x{height} by {factor} leaves an empty image")]
    ShrunkToNothing { width: u32, height: u32, factor: u32 },

    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),
}

/// Errors from compositing two images or assembling the mosaic.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ComposeError {
    #[error("Mosaic needs exactly {expected} tiles, got {actual}")]
    WrongTileCount { expected: usize, actual: usize },

    #[error(
        "Tile {index} is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}"
    )]
    TileSizeMismatch {
        index: usize,
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),
}

/// Result type alias for tessella operations.
pub type TessellaResult<T> = Result<T, TessellaError>;

/// Result type alias for buffer operations.
pub type BufferResult<T> = Result<T, BufferError>;

/// Result type alias for transform operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type alias for compositor operations.
pub type ComposeResult<T> = Result<T, ComposeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message_names_coordinate_and_extent() {
        let err = BufferError::OutOfBounds {
            x: 12,
            y: 3,
            width: 10,
            height: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("(12, 3)"));
        assert!(msg.contains("10x10"));
    }

    #[test]
    fn test_layer_errors_fold_into_top_level() {
        let err: TessellaError = ComposeError::WrongTileCount {
            expected: 12,
            actual: 3,
        }
        .into();
        assert!(matches!(err, TessellaError::Compose(_)));
    }

    #[test]
    fn test_buffer_error_propagates_through_transform_layer() {
        let inner = BufferError::InvalidDimension {
            width: 0,
            height: 4,
        };
        let err: TransformError = inner.into();
        assert!(matches!(err, TransformError::Buffer(_)));
    }
}
