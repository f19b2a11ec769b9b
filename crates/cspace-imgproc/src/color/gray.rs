use crate::parallel::{self, ExecutionStrategy};
use cspace_image::{Image, ImageError};

/// Fixed point RGB weights for the grayscale conversion, scaled by 2^14.
const RW: u32 = 4899;
const GW: u32 = 9617;
const BW: u32 = 1868;
const SHIFT: u32 = 14;

/// Convert a BGR8 image to grayscale using the formula:
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
///
/// evaluated in 14-bit fixed point and rounded to nearest.
///
/// # Arguments
///
/// * `src` - The input BGR image.
/// * `dst` - The output grayscale image.
/// * `strategy` - How the pixels are scheduled.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use cspace_image::{Image, ImageSize};
/// use cspace_imgproc::color::gray_from_bgr;
/// use cspace_imgproc::parallel::ExecutionStrategy;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![255u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut gray = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// gray_from_bgr(&image, &mut gray, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(gray.num_channels(), 1);
/// assert!(gray.as_slice().iter().all(|&v| v == 255));
/// ```
pub fn gray_from_bgr(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 1>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    parallel::iter_rows(src, dst, strategy, |src_pixel, dst_pixel| {
        let b = src_pixel[0] as u32;
        let g = src_pixel[1] as u32;
        let r = src_pixel[2] as u32;
        dst_pixel[0] = ((r * RW + g * GW + b * BW + (1 << (SHIFT - 1))) >> SHIFT) as u8;
    })
}

/// Swap the first and last channel of a three channel image.
///
/// The same operation turns RGB into BGR and BGR into RGB.
///
/// Precondition: the input and output images must have the same size.
pub fn bgr_from_rgb<T>(
    src: &Image<T, 3>,
    dst: &mut Image<T, 3>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    parallel::iter_rows(src, dst, strategy, |src_pixel, dst_pixel| {
        dst_pixel[0] = src_pixel[2];
        dst_pixel[1] = src_pixel[1];
        dst_pixel[2] = src_pixel[0];
    })
}

#[cfg(test)]
mod tests {
    use crate::parallel::ExecutionStrategy;
    use cspace_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_gray_from_bgr() -> Result<(), ImageError> {
        // blue, green, red, white, black, mid gray
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![
                255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255, 0, 0, 0, 128, 128, 128,
            ],
        )?;

        let mut gray = Image::<u8, 1>::from_size_val(image.size(), 0)?;
        super::gray_from_bgr(&image, &mut gray, ExecutionStrategy::Serial)?;

        assert_eq!(gray.as_slice(), &[29, 150, 76, 255, 0, 128]);

        Ok(())
    }

    #[test]
    fn test_bgr_from_rgb() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 1,
                height: 2,
            },
            vec![1, 2, 3, 4, 5, 6],
        )?;

        let mut bgr = Image::<u8, 3>::from_size_val(image.size(), 0)?;
        super::bgr_from_rgb(&image, &mut bgr, ExecutionStrategy::ParallelRows)?;

        assert_eq!(bgr.as_slice(), &[3, 2, 1, 6, 5, 4]);

        Ok(())
    }
}
