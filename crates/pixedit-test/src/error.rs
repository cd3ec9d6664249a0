//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a fixture image
    #[error("failed to create {width}x{height} fixture: {source}")]
    ImageCreate {
        width: u32,
        height: u32,
        #[source]
        source: pixedit_core::Error,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
