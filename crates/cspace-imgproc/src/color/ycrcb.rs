use super::saturate_u8;
use crate::parallel::{self, ExecutionStrategy};
use cspace_image::{Image, ImageError};

const YR: f64 = 0.299;
const YG: f64 = 0.587;
const YB: f64 = 0.114;
const CR_SCALE: f64 = 0.713;
const CB_SCALE: f64 = 0.564;
const DELTA: f64 = 128.0;

/// Convert a BGR8 image to a YCrCb image.
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
/// Cr = (R - Y) * 0.713 + 128
/// Cb = (B - Y) * 0.564 + 128
///
/// Note the channel order of the output is Y, Cr, Cb.
///
/// Precondition: the input and output images must have the same size.
pub fn ycrcb_from_bgr(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    parallel::iter_rows(src, dst, strategy, |src_pixel, dst_pixel| {
        let b = src_pixel[0] as f64;
        let g = src_pixel[1] as f64;
        let r = src_pixel[2] as f64;

        let y = YR * r + YG * g + YB * b;

        dst_pixel[0] = saturate_u8(y);
        dst_pixel[1] = saturate_u8((r - y) * CR_SCALE + DELTA);
        dst_pixel[2] = saturate_u8((b - y) * CB_SCALE + DELTA);
    })
}

#[cfg(test)]
mod tests {
    use crate::parallel::ExecutionStrategy;
    use cspace_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_ycrcb_from_bgr() -> Result<(), ImageError> {
        // red, green, blue, white, black, pink
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 6,
                height: 1,
            },
            vec![
                0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 0, 0, 0, 128, 0, 255,
            ],
        )?;
        let mut ycrcb = Image::<u8, 3>::from_size_val(image.size(), 0)?;

        super::ycrcb_from_bgr(&image, &mut ycrcb, ExecutionStrategy::Serial)?;

        #[rustfmt::skip]
        let expected = [
            76, 255, 85,
            150, 21, 44,
            29, 107, 255,
            255, 128, 128,
            0, 128, 128,
            91, 245, 149,
        ];
        assert_eq!(ycrcb.as_slice(), &expected);

        Ok(())
    }
}
