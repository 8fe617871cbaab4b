//! Build options shared by the geometry builder and the scene composer.
//!
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! curve_tolerance = 0.02
//! bevel_radius = 0.3
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::geometry::FlattenParams;

/// Tunables for geometry generation and scene layout. Lengths are in feet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Maximum chord deviation when flattening curved outlines.
    pub curve_tolerance: f64,
    /// Minimum chords per curved outline segment.
    pub min_curve_segments: u32,
    /// Maximum chords per curved outline segment.
    pub max_curve_segments: u32,
    /// Nominal radius of the rounded rim on curved pools.
    pub bevel_radius: f64,
    /// Quarter-round steps in the rim bevel.
    pub bevel_segments: u32,
    /// Width of the coping ring around the rim.
    pub coping_width: f64,
    /// Height of the coping ring above grade.
    pub coping_height: f64,
    /// Distance from the rim down to the still water surface.
    pub water_line: f64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            curve_tolerance: 0.05,
            min_curve_segments: 4,
            max_curve_segments: 48,
            bevel_radius: 0.25,
            bevel_segments: 3,
            coping_width: 1.0,
            coping_height: 0.25,
            water_line: 0.3,
        }
    }
}

impl BuildOptions {
    /// Parses options from TOML, filling omitted keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::OutOfRange`] for values that fail [`BuildOptions::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: Self = toml::from_str(content).map_err(ConfigError::from)?;
        options.validate()?;
        Ok(options)
    }

    /// Checks that every length is finite and in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("curve_tolerance", self.curve_tolerance),
            ("coping_width", self.coping_width),
            ("coping_height", self.coping_height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::OutOfRange { name, value }.into());
            }
        }
        let non_negative = [
            ("bevel_radius", self.bevel_radius),
            ("water_line", self.water_line),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { name, value }.into());
            }
        }
        if self.min_curve_segments == 0 || self.min_curve_segments > self.max_curve_segments {
            return Err(ConfigError::OutOfRange {
                name: "min_curve_segments",
                value: f64::from(self.min_curve_segments),
            }
            .into());
        }
        Ok(())
    }

    /// Flattening parameters for curved outlines.
    #[must_use]
    pub fn flatten_params(&self) -> FlattenParams {
        FlattenParams {
            tolerance: self.curve_tolerance,
            min_segments: self.min_curve_segments,
            max_segments: self.max_curve_segments,
        }
    }
}
