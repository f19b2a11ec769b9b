use cspace_image::{Image, ImageError};

use crate::parallel::{self, ExecutionStrategy};

/// Apply a range threshold to an image.
///
/// A destination pixel is set to 255 when every channel of the source pixel
/// satisfies `lower_bound[c] <= value <= upper_bound[c]`, and to 0 otherwise.
/// Pixel values are widened into the bound type `B` before comparing, so u8
/// images can be tested against `i32` bounds that fall outside `[0, 255]`.
///
/// # Arguments
///
/// * `src` - The input image of an arbitrary number of channels.
/// * `dst` - The output mask with a single channel.
/// * `lower_bound` - The inclusive lower bound for each channel.
/// * `upper_bound` - The inclusive upper bound for each channel.
/// * `strategy` - How the pixels are scheduled.
///
/// Precondition: the input and output images must have the same size.
///
/// # Examples
///
/// ```
/// use cspace_image::{Image, ImageSize};
/// use cspace_imgproc::parallel::ExecutionStrategy;
/// use cspace_imgproc::threshold::in_range;
///
/// let data = vec![100u8, 200, 50, 150, 200, 250];
///
/// let image = Image::<u8, 3>::new(
///    ImageSize {
///       width: 2,
///       height: 1,
///    },
///    data,
/// )
/// .unwrap();
///
/// let mut thresholded = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// in_range(
///     &image,
///     &mut thresholded,
///     &[100.0, 150.0, 0.0],
///     &[200.0, 200.0, 200.0],
///     ExecutionStrategy::Serial,
/// )
/// .unwrap();
///
/// assert_eq!(thresholded.get_pixel(0, 0, 0).unwrap(), &255);
/// assert_eq!(thresholded.get_pixel(1, 0, 0).unwrap(), &0);
/// ```
pub fn in_range<T, B, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<u8, 1>,
    lower_bound: &[B; C],
    upper_bound: &[B; C],
    strategy: ExecutionStrategy,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + Into<B>,
    B: Copy + Send + Sync + PartialOrd,
{
    parallel::iter_rows(src, dst, strategy, |src_pixel, dst_pixel| {
        let is_in_range = src_pixel
            .iter()
            .zip(lower_bound.iter().zip(upper_bound.iter()))
            .all(|(&val, (lower, upper))| {
                let val: B = val.into();
                *lower <= val && val <= *upper
            });
        dst_pixel[0] = if is_in_range { 255 } else { 0 };
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cspace_image::ImageSize;

    #[test]
    fn test_in_range() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![100, 200, 50, 150, 200, 250, 0, 0, 0, 255, 255, 255],
        )?;

        let mut thresholded = Image::<u8, 1>::from_size_val(image.size(), 0)?;

        in_range(
            &image,
            &mut thresholded,
            &[100u8, 150, 0],
            &[200, 200, 200],
            ExecutionStrategy::Serial,
        )?;
        assert_eq!(thresholded.as_slice(), &[255, 0, 0, 0]);

        Ok(())
    }

    #[test]
    fn test_in_range_widened_bounds() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 4,
                height: 1,
            },
            vec![0, 127, 128, 255],
        )?;

        let mut thresholded = Image::<u8, 1>::from_size_val(image.size(), 0)?;

        in_range(
            &image,
            &mut thresholded,
            &[-5i32],
            &[128],
            ExecutionStrategy::ParallelRows,
        )?;
        assert_eq!(thresholded.as_slice(), &[255, 255, 255, 0]);

        Ok(())
    }

    #[test]
    fn test_in_range_empty_interval() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([3, 1].into(), vec![0, 10, 255])?;
        let mut thresholded = Image::<u8, 1>::from_size_val(image.size(), 7)?;

        // lower above upper never matches
        in_range(
            &image,
            &mut thresholded,
            &[200.0f64],
            &[100.0],
            ExecutionStrategy::Serial,
        )?;
        assert_eq!(thresholded.as_slice(), &[0, 0, 0]);

        Ok(())
    }
}
