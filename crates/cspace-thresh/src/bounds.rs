use crate::colorspace::Colorspace;
use crate::sliders::SliderPositions;

/// Per-channel inclusive bounds in a colorspace's native range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds {
    /// Bounds for a three channel colorspace.
    Color {
        /// Lower bound of each channel.
        lower: [f64; 3],
        /// Upper bound of each channel.
        upper: [f64; 3],
    },
    /// Bounds for the single grayscale channel.
    Gray {
        /// Lower bound.
        lower: f64,
        /// Upper bound.
        upper: f64,
    },
}

impl Bounds {
    /// Number of channels the bounds apply to.
    pub fn num_channels(&self) -> usize {
        self.lower().len()
    }

    /// The lower bounds, one per channel.
    pub fn lower(&self) -> &[f64] {
        match self {
            Bounds::Color { lower, .. } => lower.as_slice(),
            Bounds::Gray { lower, .. } => std::slice::from_ref(lower),
        }
    }

    /// The upper bounds, one per channel.
    pub fn upper(&self) -> &[f64] {
        match self {
            Bounds::Color { upper, .. } => upper.as_slice(),
            Bounds::Gray { upper, .. } => std::slice::from_ref(upper),
        }
    }

    /// Copy the bounds out as plain `(lower, upper)` lists.
    pub fn to_lists(&self) -> (Vec<f64>, Vec<f64>) {
        (self.lower().to_vec(), self.upper().to_vec())
    }
}

/// Map slider positions onto the native channel range of `colorspace`.
///
/// Each position `p` on the 0-100 scale becomes
/// `p * (max - min) / 100 + min` for its channel. Nothing is clamped, so
/// positions outside `[0, 100]` extrapolate past the native range.
///
/// # Examples
///
/// ```
/// use cspace_thresh::{compute_bounds, Bounds, Colorspace, SliderPositions};
///
/// let bounds = compute_bounds(Colorspace::Hsv, &SliderPositions::full_range());
/// assert_eq!(
///     bounds,
///     Bounds::Color {
///         lower: [0.0, 0.0, 0.0],
///         upper: [180.0, 255.0, 255.0],
///     }
/// );
/// ```
pub fn compute_bounds(colorspace: Colorspace, sliders: &SliderPositions) -> Bounds {
    let (min, max) = colorspace.native_range();

    let scale = |raw: [i32; 3]| -> [f64; 3] {
        std::array::from_fn(|c| raw[c] as f64 * (max[c] - min[c]) / 100.0 + min[c])
    };

    let lower = scale(sliders.lows());
    let upper = scale(sliders.highs());

    match colorspace {
        Colorspace::Grayscale => Bounds::Gray {
            lower: lower[0],
            upper: upper[0],
        },
        _ => Bounds::Color { lower, upper },
    }
}
