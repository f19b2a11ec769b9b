use cspace_image::{Image, ImageError};
use cspace_imgproc::{parallel::ExecutionStrategy, threshold};

use crate::bounds::Bounds;
use crate::colorspace::Colorspace;
use crate::convert::{convert_colorspace, ConvertedImage};
use crate::error::ThreshError;

/// A single channel mask where 255 marks pixels inside the bounds and 0 the rest.
pub type Mask = Image<u8, 1>;

/// Helpers to read a [`Mask`].
pub trait MaskExt {
    /// Number of pixels inside the bounds.
    fn count_nonzero(&self) -> usize;

    /// Whether the pixel at `(x, y)` is inside the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] for coordinates outside the mask.
    fn is_set(&self, x: usize, y: usize) -> Result<bool, ImageError>;
}

impl MaskExt for Mask {
    fn count_nonzero(&self) -> usize {
        self.as_slice().iter().filter(|&&v| v != 0).count()
    }

    fn is_set(&self, x: usize, y: usize) -> Result<bool, ImageError> {
        Ok(*self.get_pixel(x, y, 0)? != 0)
    }
}

/// Round a bound to the nearest integer, ties to even, saturating at the `i32` range.
fn round_bound(x: f64) -> i32 {
    let rounded = x.round();
    let rounded = if (x - x.trunc()).abs() == 0.5 {
        2.0 * (x / 2.0).round()
    } else {
        rounded
    };
    rounded as i32
}

fn integer_bounds<const C: usize>(bounds: &[f64; C]) -> [i32; C] {
    bounds.map(round_bound)
}

/// Threshold a BGR image in `colorspace`.
///
/// The image is converted first, then every pixel is tested against the
/// inclusive `bounds` on all of its channels at once. The 8-bit channels are
/// compared in the integer domain, so each bound is first rounded to the
/// nearest integer with ties to even: an upper bound of 2.55 keeps 3, a lower
/// bound of 2.4 keeps 2 and 127.5 rounds to 128.
///
/// # Errors
///
/// Returns [`ThreshError::BoundsMismatch`] when `bounds` do not have as many
/// channels as `colorspace`.
///
/// # Examples
///
/// ```
/// use cspace_image::{Image, ImageSize};
/// use cspace_thresh::{threshold_mask, Bounds, Colorspace, ExecutionStrategy, MaskExt};
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 4, height: 4 }, 0).unwrap();
/// let bounds = Bounds::Color {
///     lower: [0.0; 3],
///     upper: [0.0; 3],
/// };
///
/// let mask = threshold_mask(&image, Colorspace::Bgr, &bounds, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(mask.count_nonzero(), 16);
/// ```
pub fn threshold_mask(
    src: &Image<u8, 3>,
    colorspace: Colorspace,
    bounds: &Bounds,
    strategy: ExecutionStrategy,
) -> Result<Mask, ThreshError> {
    if bounds.num_channels() != colorspace.num_channels() {
        return Err(ThreshError::BoundsMismatch {
            expected: colorspace.num_channels(),
            actual: bounds.num_channels(),
        });
    }

    let converted = convert_colorspace(src, colorspace, strategy)?;
    let mut mask = Mask::from_size_val(src.size(), 0)?;

    match (&converted, bounds) {
        (ConvertedImage::Color(image), Bounds::Color { lower, upper }) => {
            let image: &Image<u8, 3> = image;
            threshold::in_range(
                image,
                &mut mask,
                &integer_bounds(lower),
                &integer_bounds(upper),
                strategy,
            )?;
        }
        (ConvertedImage::Gray(image), Bounds::Gray { lower, upper }) => {
            threshold::in_range(
                image,
                &mut mask,
                &integer_bounds(&[*lower]),
                &integer_bounds(&[*upper]),
                strategy,
            )?;
        }
        (converted, bounds) => {
            return Err(ThreshError::BoundsMismatch {
                expected: converted.num_channels(),
                actual: bounds.num_channels(),
            })
        }
    }

    Ok(mask)
}
