mod plane;

pub use plane::{newell_normal, unit_newell_normal, Plane};

use crate::error::Result;
use crate::math::{Point3, Vector3};

/// A parametric surface carried by a topological face.
pub trait Surface {
    /// Evaluates the surface at `(u, v)`.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn evaluate(&self, u: f64, v: f64) -> Result<Point3>;

    /// Unit normal at `(u, v)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is degenerate.
    fn normal(&self, u: f64, v: f64) -> Result<Vector3>;
}
