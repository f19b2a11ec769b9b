use super::saturate_u8;
use crate::parallel::{self, ExecutionStrategy};
use cspace_image::{Image, ImageError};

/// Linear sRGB to CIE XYZ, D65 white point.
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412453, 0.357580, 0.180423],
    [0.212671, 0.715160, 0.072169],
    [0.019334, 0.119193, 0.950227],
];

/// D65 reference white, Y normalized to 1.
const WHITE_X: f64 = 0.950456;
const WHITE_Z: f64 = 1.088754;

/// D65 reference chromaticity for CIE Luv.
const WHITE_U: f64 = 0.19793943;
const WHITE_V: f64 = 0.46831096;

const CIE_EPSILON: f64 = 0.008856;

#[inline]
fn rgb_to_xyz(r: f64, g: f64, b: f64) -> [f64; 3] {
    let m = &RGB_TO_XYZ;
    [
        m[0][0] * r + m[0][1] * g + m[0][2] * b,
        m[1][0] * r + m[1][1] * g + m[1][2] * b,
        m[2][0] * r + m[2][1] * g + m[2][2] * b,
    ]
}

/// Undo the sRGB transfer curve of an 8-bit channel, giving a value in [0, 1].
#[inline]
fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn linear_xyz_from_bgr(pixel: &[u8]) -> [f64; 3] {
    rgb_to_xyz(
        srgb_to_linear(pixel[2]),
        srgb_to_linear(pixel[1]),
        srgb_to_linear(pixel[0]),
    )
}

/// CIE lightness in [0, 100] from relative luminance.
#[inline]
fn lightness(y: f64) -> f64 {
    if y > CIE_EPSILON {
        116.0 * y.cbrt() - 16.0
    } else {
        903.3 * y
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > CIE_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// Convert a BGR8 image to a CIE L*a*b* image.
///
/// The input is treated as sRGB and the D65 white point is used.
///
/// # Returns
///
/// The Lab image packed into 8 bits:
///
/// * L: `L * 255 / 100`, range [0, 255].
/// * a: `a + 128`.
/// * b: `b + 128`.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use cspace_image::{Image, ImageSize};
/// use cspace_imgproc::color::lab_from_bgr;
/// use cspace_imgproc::parallel::ExecutionStrategy;
///
/// let image = Image::<u8, 3>::new(ImageSize { width: 1, height: 1 }, vec![255, 255, 255]).unwrap();
/// let mut lab = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// lab_from_bgr(&image, &mut lab, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(lab.as_slice(), &[255, 128, 128]);
/// ```
pub fn lab_from_bgr(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    parallel::iter_rows(src, dst, strategy, |src_pixel, dst_pixel| {
        let [x, y, z] = linear_xyz_from_bgr(src_pixel);

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y);
        let fz = lab_f(z / WHITE_Z);

        let l = lightness(y);
        let a = 500.0 * (fx - fy);
        let b = 200.0 * (fy - fz);

        dst_pixel[0] = saturate_u8(l * 255.0 / 100.0);
        dst_pixel[1] = saturate_u8(a + 128.0);
        dst_pixel[2] = saturate_u8(b + 128.0);
    })
}

/// Convert a BGR8 image to a CIE L*u*v* image.
///
/// # Returns
///
/// The Luv image packed into 8 bits:
///
/// * L: `L * 255 / 100`.
/// * u: `255 * (u + 134) / 354`.
/// * v: `255 * (v + 140) / 262`.
///
/// Precondition: the input and output images must have the same size.
pub fn luv_from_bgr(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    parallel::iter_rows(src, dst, strategy, |src_pixel, dst_pixel| {
        let [x, y, z] = linear_xyz_from_bgr(src_pixel);

        let l = lightness(y);

        // black has no chromaticity, keep the denominator away from zero
        let d = 1.0 / (x + 15.0 * y + 3.0 * z).max(f32::EPSILON as f64);
        let u = 13.0 * l * (4.0 * x * d - WHITE_U);
        let v = 13.0 * l * (9.0 * y * d - WHITE_V);

        dst_pixel[0] = saturate_u8(l * 255.0 / 100.0);
        dst_pixel[1] = saturate_u8((u + 134.0) * 255.0 / 354.0);
        dst_pixel[2] = saturate_u8((v + 140.0) * 255.0 / 262.0);
    })
}

/// Convert a BGR8 image to a CIE XYZ image.
///
/// The D65 matrix is applied directly to the 8-bit values, without undoing the
/// sRGB curve, and each channel saturates at 255.
///
/// Precondition: the input and output images must have the same size.
pub fn xyz_from_bgr(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    parallel::iter_rows(src, dst, strategy, |src_pixel, dst_pixel| {
        let xyz = rgb_to_xyz(
            src_pixel[2] as f64,
            src_pixel[1] as f64,
            src_pixel[0] as f64,
        );
        dst_pixel
            .iter_mut()
            .zip(xyz.iter())
            .for_each(|(d, &v)| *d = saturate_u8(v));
    })
}

#[cfg(test)]
mod tests {
    use crate::parallel::ExecutionStrategy;
    use cspace_image::{Image, ImageError, ImageSize};

    // red, green, blue, white, black, pink
    fn samples() -> Result<Image<u8, 3>, ImageError> {
        Image::<u8, 3>::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![
                0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 0, 0, 0, 128, 0, 255,
            ],
        )
    }

    #[test]
    fn test_lab_from_bgr() -> Result<(), ImageError> {
        let image = samples()?;
        let mut lab = Image::<u8, 3>::from_size_val(image.size(), 0)?;

        super::lab_from_bgr(&image, &mut lab, ExecutionStrategy::Serial)?;

        #[rustfmt::skip]
        let expected = [
            136, 208, 195,
            224, 42, 211,
            82, 207, 20,
            255, 128, 128,
            0, 128, 128,
            140, 213, 132,
        ];
        assert_eq!(lab.as_slice(), &expected);

        Ok(())
    }

    #[test]
    fn test_luv_from_bgr() -> Result<(), ImageError> {
        let image = samples()?;
        let mut luv = Image::<u8, 3>::from_size_val(image.size(), 0)?;

        super::luv_from_bgr(&image, &mut luv, ExecutionStrategy::Serial)?;

        #[rustfmt::skip]
        let expected = [
            136, 223, 173,
            224, 37, 241,
            82, 90, 9,
            255, 96, 136,
            0, 97, 136,
            140, 199, 125,
        ];
        assert_eq!(luv.as_slice(), &expected);

        Ok(())
    }

    #[test]
    fn test_xyz_from_bgr() -> Result<(), ImageError> {
        let image = samples()?;
        let mut xyz = Image::<u8, 3>::from_size_val(image.size(), 0)?;

        super::xyz_from_bgr(&image, &mut xyz, ExecutionStrategy::ParallelRows)?;

        #[rustfmt::skip]
        let expected = [
            105, 54, 5,
            91, 182, 30,
            46, 18, 242,
            242, 255, 255,
            0, 0, 0,
            128, 63, 127,
        ];
        assert_eq!(xyz.as_slice(), &expected);

        Ok(())
    }

    #[test]
    fn test_srgb_to_linear() {
        approx::assert_relative_eq!(super::srgb_to_linear(0), 0.0);
        approx::assert_relative_eq!(super::srgb_to_linear(255), 1.0);
        approx::assert_relative_eq!(super::srgb_to_linear(10), 10.0 / 255.0 / 12.92);
    }
}
