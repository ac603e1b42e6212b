//! Error types for the color_sense library

use thiserror::Error;

/// Result type alias for color_sense operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error types for catalog loading, lookup and simulation
///
/// All errors are synchronous and non-retryable: they indicate malformed
/// input data or a caller-side programming error, never a transient
/// condition. Each variant carries the offending field or value.
#[derive(Error, Debug)]
pub enum ColorError {
    /// Catalog row failed validation at load time
    #[error("Malformed catalog row: {field} = {value:?} ({reason})")]
    DataFormat {
        field: String,
        value: String,
        reason: String,
    },

    /// Lookup attempted against a catalog with zero entries
    #[error("Color catalog is empty")]
    EmptyCatalog,

    /// Simulation mode outside the closed enumeration
    #[error("Unknown simulation mode: {0:?}")]
    UnknownMode(String),

    /// Pixel or region coordinates outside image dimensions
    #[error("Coordinates ({x}, {y}) outside image bounds {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ColorError {
    /// Create a data format error with field context
    pub fn data_format(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::DataFormat {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
