//! Error types for pixedit-core
//!
//! Every precondition the engine relies on (rectangular grid, positive
//! dimensions, in-range samples for the histogram) is checked at the API
//! boundary and reported here. A call that returns an error has not
//! touched the image.

use thiserror::Error;

/// pixedit-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Zero width or height, or a sample count that does not match them
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// A row whose length differs from the first row
    #[error("ragged row {row}: expected {expected} samples, got {actual}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Grayscale sample outside [0, 255]
    #[error("sample {value} at ({col}, {row}) is outside [0, 255]")]
    SampleOutOfRange { col: u32, row: u32, value: i32 },

    /// Packed color sample whose alpha channel is not 255
    #[error("packed sample {value:#010x} at ({col}, {row}) is not opaque")]
    OpaqueAlphaRequired { col: u32, row: u32, value: i32 },

    /// Coordinates outside the image
    #[error("index out of bounds: ({col}, {row})")]
    IndexOutOfBounds { col: u32, row: u32 },

    /// Operation only defined for grayscale images
    #[error("operation requires a grayscale image")]
    NotGrayscale,

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for pixedit-core operations
pub type Result<T> = std::result::Result<T, Error>;
