use serde::{Deserialize, Serialize};

use crate::error::{DesignError, Result};

/// Validated pool size in feet.
///
/// Construction is the validation boundary: every value is finite and
/// strictly positive, so the geometry builder never sees bad input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions")]
pub struct Dimensions {
    length: f64,
    width: f64,
    depth: f64,
}

#[derive(Deserialize)]
struct RawDimensions {
    length: f64,
    width: f64,
    depth: f64,
}

impl TryFrom<RawDimensions> for Dimensions {
    type Error = DesignError;

    fn try_from(raw: RawDimensions) -> std::result::Result<Self, Self::Error> {
        Self::checked(raw.length, raw.width, raw.depth)
    }
}

impl Dimensions {
    /// Creates validated dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::InvalidDimension`] naming the first value that
    /// is not finite or not positive.
    pub fn new(length: f64, width: f64, depth: f64) -> Result<Self> {
        Ok(Self::checked(length, width, depth)?)
    }

    fn checked(length: f64, width: f64, depth: f64) -> std::result::Result<Self, DesignError> {
        for (name, value) in [("length", length), ("width", width), ("depth", depth)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DesignError::InvalidDimension { name, value });
            }
        }
        Ok(Self {
            length,
            width,
            depth,
        })
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Exact bit patterns, for use as a cache key.
    #[must_use]
    pub fn key_bits(&self) -> [u64; 3] {
        [self.length.to_bits(), self.width.to_bits(), self.depth.to_bits()]
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            length: 32.0,
            width: 16.0,
            depth: 6.0,
        }
    }
}
