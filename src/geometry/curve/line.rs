use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A bounded straight segment, parameterized by arc length.
///
/// The parametric form is: `P(t) = origin + t * direction`, `t ∈ [0, length]`.
#[derive(Debug, Clone)]
pub struct Line {
    origin: Point3,
    direction: Vector3,
    length: f64,
}

impl Line {
    /// Creates the segment running from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the two points coincide.
    pub fn between(start: Point3, end: Point3) -> Result<Self> {
        let delta = end - start;
        let length = delta.norm();
        if length < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin: start,
            direction: delta / length,
            length,
        })
    }

    /// Returns the start point of the segment.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction vector of the segment.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }
}

impl Curve for Line {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        Ok(self.origin + self.direction * t)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, self.length)
    }
}
