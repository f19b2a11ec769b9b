use cspace_image::ImageError;

/// Errors raised while computing a thresholded mask.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ThreshError {
    /// The colorspace label is not one of the recognized names.
    #[error("Invalid colorspace label: {0:?}")]
    InvalidColorspaceLabel(String),

    /// The numeric colorspace key is outside the known range.
    #[error("Invalid colorspace key: {0}")]
    InvalidColorspace(usize),

    /// A slider sequence did not contain exactly six positions.
    #[error("Expected 6 slider positions, got {0}")]
    InvalidSliderCount(usize),

    /// The bounds do not have as many channels as the converted image.
    #[error("Bounds have {actual} channels but the image has {expected}")]
    BoundsMismatch {
        /// Channels of the converted image.
        expected: usize,
        /// Channels of the bounds.
        actual: usize,
    },

    /// Error from the underlying image operations.
    #[error(transparent)]
    Image(#[from] ImageError),
}
