use crate::error::{GeometryError, Result};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};

use super::Surface;

/// An unbounded plane carrying a right-handed `(u, v, normal)` frame.
///
/// `P(u, v) = origin + u * u_dir + v * v_dir`, with `u_dir × v_dir = normal`,
/// so counter-clockwise loops in `(u, v)` wind around the normal.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    normal: Vector3,
}

impl Plane {
    /// Creates a plane from an origin and a normal vector.
    ///
    /// The U and V directions are derived from the normal.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;

        let reference = if normal.x.abs() < 0.9 {
            Vector3::x()
        } else {
            Vector3::y()
        };
        let v_dir = normal.cross(&reference).normalize();
        let u_dir = v_dir.cross(&normal);

        Ok(Self {
            origin,
            u_dir,
            v_dir,
            normal,
        })
    }

    /// Creates the plane of a closed polygon, oriented by its winding.
    ///
    /// The normal follows Newell's method, so it points to the side from which
    /// the loop appears counter-clockwise. The first point becomes the origin.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for fewer than three points or a
    /// loop that encloses no area.
    pub fn through_polygon(points: &[Point3]) -> Result<Self> {
        let Some(&origin) = points.first() else {
            return Err(GeometryError::Degenerate("empty polygon".into()).into());
        };
        if points.len() < 3 {
            return Err(GeometryError::Degenerate("polygon needs at least 3 points".into()).into());
        }
        let normal = unit_newell_normal(points)
            .ok_or_else(|| GeometryError::Degenerate("polygon encloses no area".into()))?;
        Self::from_normal(origin, normal)
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the U direction vector.
    #[must_use]
    pub fn u_dir(&self) -> &Vector3 {
        &self.u_dir
    }

    /// Returns the V direction vector.
    #[must_use]
    pub fn v_dir(&self) -> &Vector3 {
        &self.v_dir
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn plane_normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Projects a point into the plane's `(u, v)` coordinates.
    #[must_use]
    pub fn project(&self, point: &Point3) -> Point2 {
        let d = point - self.origin;
        Point2::new(d.dot(&self.u_dir), d.dot(&self.v_dir))
    }
}

impl Surface for Plane {
    fn evaluate(&self, u: f64, v: f64) -> Result<Point3> {
        Ok(self.origin + self.u_dir * u + self.v_dir * v)
    }

    fn normal(&self, _u: f64, _v: f64) -> Result<Vector3> {
        Ok(self.normal)
    }
}

/// Area-weighted normal of a closed polygon (Newell's method), unnormalized.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    normal
}

/// Unit polygon normal, or `None` when the enclosed area is negligible
/// against the square of the polygon's extent.
///
/// The threshold scales with the polygon, so a tiny but well-formed loop
/// still has a normal.
#[must_use]
pub fn unit_newell_normal(points: &[Point3]) -> Option<Vector3> {
    let first = points.first()?;
    let extent = points
        .iter()
        .map(|p| (p - first).norm())
        .fold(0.0, f64::max);
    let normal = newell_normal(points);
    let len = normal.norm();
    if extent <= 0.0 || len <= TOLERANCE * extent * extent {
        return None;
    }
    Some(normal / len)
}
