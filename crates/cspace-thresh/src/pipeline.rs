use serde::{Deserialize, Serialize};

use cspace_image::Image;
use cspace_imgproc::parallel::ExecutionStrategy;

use crate::bounds::compute_bounds;
use crate::colorspace::Colorspace;
use crate::error::ThreshError;
use crate::processor::{threshold_mask, Mask};
use crate::sliders::SliderPositions;

/// Options for [`threshold_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThresholdOptions {
    /// How the per-pixel kernels are scheduled.
    pub strategy: ExecutionStrategy,
}

/// The result of thresholding an image, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdOutput {
    /// 255 where the pixel is inside the bounds, 0 elsewhere.
    pub mask: Mask,
    /// Label of the colorspace the image was thresholded in.
    pub label: String,
    /// Lower bound of each channel, one value for grayscale.
    pub lowerb: Vec<f64>,
    /// Upper bound of each channel, one value for grayscale.
    pub upperb: Vec<f64>,
}

/// A colorspace label and slider positions, as stored in a settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdRequest {
    /// One of `BGR`, `HSV`, `HLS`, `Lab`, `Luv`, `YCrCb`, `XYZ`, `Gray`.
    pub colorspace: String,
    /// The six slider positions.
    #[serde(default)]
    pub sliders: SliderPositions,
}

impl ThresholdRequest {
    /// Threshold `image` with the settings of this request.
    pub fn run(
        &self,
        image: &Image<u8, 3>,
        options: &ThresholdOptions,
    ) -> Result<ThresholdOutput, ThreshError> {
        let colorspace = self.colorspace.parse()?;
        threshold_with(image, colorspace, &self.sliders, options)
    }
}

/// Threshold a BGR image in the colorspace named by `label`.
///
/// Resolves the label, turns the slider positions into bounds, builds the mask
/// and returns it together with the label and the bounds as plain lists.
///
/// # Errors
///
/// Returns [`ThreshError::InvalidColorspaceLabel`] if `label` is not one of
/// `BGR`, `HSV`, `HLS`, `Lab`, `Luv`, `YCrCb`, `XYZ` or `Gray`.
///
/// # Examples
///
/// ```
/// use cspace_image::{Image, ImageSize};
/// use cspace_thresh::{threshold, SliderPositions};
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 2, height: 2 }, 0).unwrap();
/// let out = threshold(&image, "HSV", &SliderPositions::full_range()).unwrap();
///
/// assert_eq!(out.label, "HSV");
/// assert_eq!(out.lowerb, vec![0.0, 0.0, 0.0]);
/// assert_eq!(out.upperb, vec![180.0, 255.0, 255.0]);
/// assert!(out.mask.as_slice().iter().all(|&v| v == 255));
/// ```
pub fn threshold(
    image: &Image<u8, 3>,
    label: &str,
    sliders: &SliderPositions,
) -> Result<ThresholdOutput, ThreshError> {
    let colorspace = label.parse()?;
    threshold_with(image, colorspace, sliders, &ThresholdOptions::default())
}

/// Threshold a BGR image in an already resolved colorspace.
pub fn threshold_with(
    image: &Image<u8, 3>,
    colorspace: Colorspace,
    sliders: &SliderPositions,
    options: &ThresholdOptions,
) -> Result<ThresholdOutput, ThreshError> {
    let bounds = compute_bounds(colorspace, sliders);
    log::debug!(
        "thresholding {} in {colorspace} with sliders {:?} -> lower {:?} upper {:?}",
        image.size(),
        sliders.as_array(),
        bounds.lower(),
        bounds.upper(),
    );

    let mask = threshold_mask(image, colorspace, &bounds, options.strategy)?;
    let (lowerb, upperb) = bounds.to_lists();

    Ok(ThresholdOutput {
        mask,
        label: colorspace.label().to_string(),
        lowerb,
        upperb,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cspace_image::ImageSize;

    #[test]
    fn request_from_json() -> Result<(), Box<dyn std::error::Error>> {
        let request: ThresholdRequest =
            serde_json::from_str(r#"{"colorspace": "Gray", "sliders": [0, 50, 0, 0, 0, 0]}"#)?;
        assert_eq!(request.colorspace, "Gray");

        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0, 0, 0, 255, 255, 255],
        )?;
        let out = request.run(&image, &ThresholdOptions::default())?;
        assert_eq!(out.lowerb, vec![0.0]);
        assert_eq!(out.upperb, vec![127.5]);
        assert_eq!(out.mask.as_slice(), &[255, 0]);
        Ok(())
    }

    #[test]
    fn request_defaults_to_full_range() -> Result<(), serde_json::Error> {
        let request: ThresholdRequest = serde_json::from_str(r#"{"colorspace": "Lab"}"#)?;
        assert_eq!(request.sliders, SliderPositions::full_range());
        Ok(())
    }

    #[test]
    fn request_with_bad_label() -> Result<(), Box<dyn std::error::Error>> {
        let request = ThresholdRequest {
            colorspace: "RGB".to_string(),
            sliders: SliderPositions::full_range(),
        };
        let image = Image::<u8, 3>::from_size_val([1, 1].into(), 0)?;
        assert_eq!(
            request.run(&image, &ThresholdOptions::default()),
            Err(ThreshError::InvalidColorspaceLabel("RGB".to_string()))
        );
        Ok(())
    }
}
