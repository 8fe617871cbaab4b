mod bezier;
mod line;

pub use bezier::CubicBezier;
pub use line::Line;

use crate::error::Result;
use crate::math::Point3;

/// Closed parameter interval `[t_min, t_max]` of a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    pub t_min: f64,
    pub t_max: f64,
}

impl CurveDomain {
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        (self.t_min..=self.t_max).contains(&t)
    }
}

/// A parametric curve carried by a topological edge.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point3>;

    fn domain(&self) -> CurveDomain;
}
