use std::borrow::Cow;

use cspace_image::{Image, ImageError};
use cspace_imgproc::{color, parallel::ExecutionStrategy};

use crate::colorspace::Colorspace;
use crate::error::ThreshError;

/// A BGR image expressed in another colorspace.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertedImage<'a> {
    /// A three channel image. Borrows the input when no conversion was needed.
    Color(Cow<'a, Image<u8, 3>>),
    /// A single channel grayscale image.
    Gray(Image<u8, 1>),
}

impl ConvertedImage<'_> {
    /// Number of channels of the converted image.
    pub fn num_channels(&self) -> usize {
        match self {
            ConvertedImage::Color(_) => 3,
            ConvertedImage::Gray(_) => 1,
        }
    }
}

type ColorConversion =
    fn(&Image<u8, 3>, &mut Image<u8, 3>, ExecutionStrategy) -> Result<(), ImageError>;

/// Convert a BGR image into `colorspace`.
///
/// Converting to [`Colorspace::Bgr`] is a no-op that borrows `src`.
///
/// # Examples
///
/// ```
/// use cspace_image::{Image, ImageSize};
/// use cspace_thresh::{convert_colorspace, Colorspace, ConvertedImage, ExecutionStrategy};
///
/// let image = Image::<u8, 3>::new(ImageSize { width: 1, height: 1 }, vec![0, 0, 255]).unwrap();
///
/// let hsv = convert_colorspace(&image, Colorspace::Hsv, ExecutionStrategy::Serial).unwrap();
/// match hsv {
///     ConvertedImage::Color(hsv) => assert_eq!(hsv.as_slice(), &[0, 255, 255]),
///     ConvertedImage::Gray(_) => unreachable!(),
/// }
/// ```
pub fn convert_colorspace(
    src: &Image<u8, 3>,
    colorspace: Colorspace,
    strategy: ExecutionStrategy,
) -> Result<ConvertedImage<'_>, ThreshError> {
    log::debug!("converting {} image to {colorspace}", src.size());

    let conversion: ColorConversion = match colorspace {
        Colorspace::Bgr => return Ok(ConvertedImage::Color(Cow::Borrowed(src))),
        Colorspace::Grayscale => {
            let mut gray = Image::<u8, 1>::from_size_val(src.size(), 0)?;
            color::gray_from_bgr(src, &mut gray, strategy)?;
            return Ok(ConvertedImage::Gray(gray));
        }
        Colorspace::Hsv => color::hsv_from_bgr,
        Colorspace::Hls => color::hls_from_bgr,
        Colorspace::Lab => color::lab_from_bgr,
        Colorspace::Luv => color::luv_from_bgr,
        Colorspace::YCrCb => color::ycrcb_from_bgr,
        Colorspace::Xyz => color::xyz_from_bgr,
    };

    let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0)?;
    conversion(src, &mut dst, strategy)?;

    Ok(ConvertedImage::Color(Cow::Owned(dst)))
}
