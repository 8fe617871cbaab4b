use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};
use crate::tessellation::TriangleMesh;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Returns the extent along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }
}

/// Computes the axis-aligned bounding box of a tessellated mesh.
pub struct BoundingBox<'a> {
    mesh: &'a TriangleMesh,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        Self { mesh }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the mesh has no vertices.
    pub fn execute(&self) -> Result<Aabb> {
        let Some(first) = self.mesh.vertices.first() else {
            return Err(GeometryError::Degenerate("bounding box of an empty mesh".into()).into());
        };
        let (min, max) = self
            .mesh
            .vertices
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        Ok(Aabb { min, max })
    }
}
