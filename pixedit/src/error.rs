//! Error type for the method-style API

use thiserror::Error;

/// Any error an [`ImageEdit`](crate::ImageEdit) method can return
#[derive(Debug, Error)]
pub enum EditError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixedit_core::Error),

    /// Geometric transform error
    #[error("transform error: {0}")]
    Transform(#[from] pixedit_transform::TransformError),

    /// Filter error
    #[error("filter error: {0}")]
    Filter(#[from] pixedit_filter::FilterError),
}

/// Result type for [`ImageEdit`](crate::ImageEdit) methods
pub type EditResult<T> = Result<T, EditError>;
