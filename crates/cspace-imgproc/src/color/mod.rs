//! Conversions from 8-bit BGR images into other colorspaces.
//!
//! Every conversion writes 8-bit channels using the usual OpenCV packing, so
//! hue is stored as degrees / 2 and signed or fractional channels are offset
//! and rescaled into `[0, 255]`.

mod gray;
mod hsv;
mod lab;
mod ycrcb;

pub use gray::{bgr_from_rgb, gray_from_bgr};
pub use hsv::{hls_from_bgr, hsv_from_bgr};
pub use lab::{lab_from_bgr, luv_from_bgr, xyz_from_bgr};
pub use ycrcb::ycrcb_from_bgr;

/// Round to the nearest integer and saturate into the u8 range.
#[inline]
pub(crate) fn saturate_u8(x: f64) -> u8 {
    x.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_saturate_u8() {
        assert_eq!(super::saturate_u8(-3.0), 0);
        assert_eq!(super::saturate_u8(12.4), 12);
        assert_eq!(super::saturate_u8(12.6), 13);
        assert_eq!(super::saturate_u8(277.6), 255);
    }
}
