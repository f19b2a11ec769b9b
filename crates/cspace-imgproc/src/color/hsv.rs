use super::saturate_u8;
use crate::parallel::{self, ExecutionStrategy};
use cspace_image::{Image, ImageError};

/// Convert a BGR8 image to an HSV image.
///
/// The input image is assumed to have 3 channels in the order B, G, R.
///
/// # Arguments
///
/// * `src` - The input BGR image.
/// * `dst` - The output HSV image.
/// * `strategy` - How the pixels are scheduled.
///
/// # Returns
///
/// The HSV image with the following channels:
///
/// * H: The hue channel in the range [0, 180) (degrees / 2).
/// * S: The saturation channel in the range [0, 255].
/// * V: The value channel in the range [0, 255].
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use cspace_image::{Image, ImageSize};
/// use cspace_imgproc::color::hsv_from_bgr;
/// use cspace_imgproc::parallel::ExecutionStrategy;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///        width: 4,
///        height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut hsv = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// hsv_from_bgr(&image, &mut hsv, ExecutionStrategy::Serial).unwrap();
///
/// assert_eq!(hsv.num_channels(), 3);
/// assert_eq!(hsv.size().width, 4);
/// assert_eq!(hsv.size().height, 5);
/// ```
pub fn hsv_from_bgr(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    parallel::iter_rows(src, dst, strategy, |src_pixel, dst_pixel| {
        let b = src_pixel[0] as f64;
        let g = src_pixel[1] as f64;
        let r = src_pixel[2] as f64;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        // half-degree hue, relative to the dominant channel's sector
        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            30.0 * (g - b) / delta
        } else if max == g {
            30.0 * (b - r) / delta + 60.0
        } else {
            30.0 * (r - g) / delta + 120.0
        };

        let h = h.round();
        let h = if h < 0.0 { h + 180.0 } else { h };

        let s = if max == 0.0 {
            0.0
        } else {
            255.0 * delta / max
        };

        dst_pixel[0] = saturate_u8(h);
        dst_pixel[1] = saturate_u8(s);
        dst_pixel[2] = saturate_u8(max);
    })
}

/// Convert a BGR8 image to an HLS image.
///
/// # Returns
///
/// The HLS image with the following channels:
///
/// * H: The hue channel in the range [0, 180] (degrees / 2).
/// * L: The lightness channel in the range [0, 255].
/// * S: The saturation channel in the range [0, 255].
///
/// Precondition: the input and output images must have the same size.
pub fn hls_from_bgr(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    parallel::iter_rows(src, dst, strategy, |src_pixel, dst_pixel| {
        let b = src_pixel[0] as f64 / 255.0;
        let g = src_pixel[1] as f64 / 255.0;
        let r = src_pixel[2] as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) * 0.5;

        let (h, s) = if delta > f64::EPSILON {
            let s = if l < 0.5 {
                delta / (max + min)
            } else {
                delta / (2.0 - max - min)
            };
            let h = if max == r {
                60.0 * (g - b) / delta
            } else if max == g {
                60.0 * (b - r) / delta + 120.0
            } else {
                60.0 * (r - g) / delta + 240.0
            };
            (if h < 0.0 { h + 360.0 } else { h }, s)
        } else {
            (0.0, 0.0)
        };

        dst_pixel[0] = saturate_u8(h * 0.5);
        dst_pixel[1] = saturate_u8(l * 255.0);
        dst_pixel[2] = saturate_u8(s * 255.0);
    })
}
