#![deny(missing_docs)]
//! Binary masks from colorspace thresholding.
//!
//! A BGR image is converted into one of eight colorspaces and every pixel is
//! tested against per-channel bounds. The bounds come from six slider
//! positions on a 0-100 scale, one `(low, high)` pair per channel, scaled into
//! the native range of the chosen colorspace.
//!
//! ```
//! use cspace_image::{Image, ImageSize};
//! use cspace_thresh::{threshold, SliderPositions};
//!
//! // a 1x2 BGR image: one red pixel, one blue pixel
//! let image = Image::<u8, 3>::new(
//!     ImageSize { width: 2, height: 1 },
//!     vec![0, 0, 255, 255, 0, 0],
//! )
//! .unwrap();
//!
//! // keep hues up to 10 (red), any saturation and value
//! let sliders = SliderPositions::new([0, 5, 0, 100, 0, 100]);
//! let out = threshold(&image, "HSV", &sliders).unwrap();
//!
//! assert_eq!(out.mask.as_slice(), &[255, 0]);
//! assert_eq!(out.upperb, vec![9.0, 255.0, 255.0]);
//! ```

mod bounds;
mod colorspace;
mod convert;
mod error;
mod pipeline;
mod processor;
mod sliders;

pub use crate::bounds::{compute_bounds, Bounds};
pub use crate::colorspace::Colorspace;
pub use crate::convert::{convert_colorspace, ConvertedImage};
pub use crate::error::ThreshError;
pub use crate::pipeline::{
    threshold, threshold_with, ThresholdOptions, ThresholdOutput, ThresholdRequest,
};
pub use crate::processor::{threshold_mask, Mask, MaskExt};
pub use crate::sliders::SliderPositions;

pub use cspace_imgproc::parallel::ExecutionStrategy;
