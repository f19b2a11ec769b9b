use std::fmt;
use std::str::FromStr;

use crate::error::ThreshError;

/// The colorspaces an image can be thresholded in.
///
/// Input images are always BGR; every other variant is reached through a fixed
/// conversion from BGR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colorspace {
    /// Blue, green, red. No conversion.
    Bgr,
    /// Hue, saturation, value. Hue is stored as degrees / 2.
    Hsv,
    /// Hue, lightness, saturation. Hue is stored as degrees / 2.
    Hls,
    /// CIE L*a*b*.
    Lab,
    /// CIE L*u*v*.
    Luv,
    /// Luma and the red / blue chroma differences.
    YCrCb,
    /// CIE XYZ.
    Xyz,
    /// Single channel luma.
    Grayscale,
}

impl Colorspace {
    /// All colorspaces, in the order of their numeric keys.
    pub const ALL: [Colorspace; 8] = [
        Colorspace::Bgr,
        Colorspace::Hsv,
        Colorspace::Hls,
        Colorspace::Lab,
        Colorspace::Luv,
        Colorspace::YCrCb,
        Colorspace::Xyz,
        Colorspace::Grayscale,
    ];

    /// Look up a colorspace by its numeric key, 0 (BGR) to 7 (Grayscale).
    ///
    /// # Errors
    ///
    /// Returns [`ThreshError::InvalidColorspace`] for any other key.
    pub fn from_index(index: usize) -> Result<Self, ThreshError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ThreshError::InvalidColorspace(index))
    }

    /// The numeric key of the colorspace.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The display label, which is also the name accepted by [`FromStr`].
    pub fn label(&self) -> &'static str {
        match self {
            Colorspace::Bgr => "BGR",
            Colorspace::Hsv => "HSV",
            Colorspace::Hls => "HLS",
            Colorspace::Lab => "Lab",
            Colorspace::Luv => "Luv",
            Colorspace::YCrCb => "YCrCb",
            Colorspace::Xyz => "XYZ",
            Colorspace::Grayscale => "Gray",
        }
    }

    /// Short names of the channels, in storage order.
    pub fn channel_names(&self) -> &'static [&'static str] {
        match self {
            Colorspace::Bgr => &["B", "G", "R"],
            Colorspace::Hsv => &["H", "S", "V"],
            Colorspace::Hls => &["H", "L", "S"],
            Colorspace::Lab => &["L", "a", "b"],
            Colorspace::Luv => &["L", "u", "v"],
            Colorspace::YCrCb => &["Y", "Cr", "Cb"],
            Colorspace::Xyz => &["X", "Y", "Z"],
            Colorspace::Grayscale => &["Gray"],
        }
    }

    /// Number of channels of an image in this colorspace.
    pub fn num_channels(&self) -> usize {
        self.channel_names().len()
    }

    /// Native per-channel `(minimum, maximum)` of the 8-bit representation.
    ///
    /// Grayscale only uses the first component.
    pub fn native_range(&self) -> ([f64; 3], [f64; 3]) {
        let min = match self {
            Colorspace::Lab => [0.0, 1.0, 1.0],
            _ => [0.0; 3],
        };
        let max = match self {
            Colorspace::Hsv | Colorspace::Hls => [180.0, 255.0, 255.0],
            _ => [255.0; 3],
        };
        (min, max)
    }
}

impl FromStr for Colorspace {
    type Err = ThreshError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cs| cs.label() == label)
            .ok_or_else(|| ThreshError::InvalidColorspaceLabel(label.to_string()))
    }
}

impl fmt::Display for Colorspace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() -> Result<(), ThreshError> {
        for cs in Colorspace::ALL {
            assert_eq!(cs.label().parse::<Colorspace>()?, cs);
            assert_eq!(cs.to_string(), cs.label());
        }
        Ok(())
    }

    #[test]
    fn unknown_label() {
        assert_eq!(
            "CMYK".parse::<Colorspace>(),
            Err(ThreshError::InvalidColorspaceLabel("CMYK".to_string()))
        );
        // labels are case sensitive
        assert!("hsv".parse::<Colorspace>().is_err());
        assert!("Grayscale".parse::<Colorspace>().is_err());
    }

    #[test]
    fn numeric_keys() -> Result<(), ThreshError> {
        assert_eq!(Colorspace::from_index(0)?, Colorspace::Bgr);
        assert_eq!(Colorspace::from_index(3)?, Colorspace::Lab);
        assert_eq!(Colorspace::from_index(7)?, Colorspace::Grayscale);
        assert_eq!(
            Colorspace::from_index(8),
            Err(ThreshError::InvalidColorspace(8))
        );
        for (i, cs) in Colorspace::ALL.iter().enumerate() {
            assert_eq!(cs.index(), i);
        }
        Ok(())
    }

    #[test]
    fn native_ranges() {
        assert_eq!(
            Colorspace::Hsv.native_range(),
            ([0.0, 0.0, 0.0], [180.0, 255.0, 255.0])
        );
        assert_eq!(
            Colorspace::Hls.native_range(),
            ([0.0, 0.0, 0.0], [180.0, 255.0, 255.0])
        );
        assert_eq!(
            Colorspace::Lab.native_range(),
            ([0.0, 1.0, 1.0], [255.0, 255.0, 255.0])
        );
        for cs in [
            Colorspace::Bgr,
            Colorspace::Luv,
            Colorspace::YCrCb,
            Colorspace::Xyz,
            Colorspace::Grayscale,
        ] {
            assert_eq!(cs.native_range(), ([0.0; 3], [255.0; 3]));
        }
    }

    #[test]
    fn channel_counts() {
        assert_eq!(Colorspace::Grayscale.num_channels(), 1);
        assert_eq!(Colorspace::YCrCb.channel_names(), &["Y", "Cr", "Cb"]);
        assert!(Colorspace::ALL
            .iter()
            .filter(|cs| **cs != Colorspace::Grayscale)
            .all(|cs| cs.num_channels() == 3));
    }
}
