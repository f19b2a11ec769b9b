use serde::{Deserialize, Serialize};

use crate::error::ThreshError;

/// Six slider positions, read as one `(low, high)` pair per channel.
///
/// The layout is `[low0, high0, low1, high1, low2, high2]`. Positions are
/// expected in `[0, 100]` but are not validated: values outside that range
/// simply produce bounds outside the colorspace's native range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SliderPositions([i32; 6]);

impl SliderPositions {
    /// Create slider positions from the six raw values.
    pub fn new(positions: [i32; 6]) -> Self {
        Self(positions)
    }

    /// Sliders covering the whole range of every channel.
    pub fn full_range() -> Self {
        Self([0, 100, 0, 100, 0, 100])
    }

    /// The raw positions.
    pub fn as_array(&self) -> &[i32; 6] {
        &self.0
    }

    /// The low position of each channel, i.e. the even indices.
    pub fn lows(&self) -> [i32; 3] {
        [self.0[0], self.0[2], self.0[4]]
    }

    /// The high position of each channel, i.e. the odd indices.
    pub fn highs(&self) -> [i32; 3] {
        [self.0[1], self.0[3], self.0[5]]
    }
}

impl Default for SliderPositions {
    fn default() -> Self {
        Self::full_range()
    }
}

impl From<[i32; 6]> for SliderPositions {
    fn from(positions: [i32; 6]) -> Self {
        Self(positions)
    }
}

impl TryFrom<&[i32]> for SliderPositions {
    type Error = ThreshError;

    fn try_from(positions: &[i32]) -> Result<Self, Self::Error> {
        let positions: [i32; 6] = positions
            .try_into()
            .map_err(|_| ThreshError::InvalidSliderCount(positions.len()))?;
        Ok(Self(positions))
    }
}
