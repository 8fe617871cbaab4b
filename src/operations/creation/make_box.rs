use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::operations::shaping::Extrude;
use crate::topology::{SolidId, TopologyStore};

use super::{MakeFace, MakeWire};

/// Creates an axis-aligned box solid from two corner points.
pub struct MakeBox {
    min_corner: Point3,
    max_corner: Point3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// Creates a box of `size` centered on `center`.
    #[must_use]
    pub fn centered(center: Point3, size: Vector3) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    /// Executes the operation by extruding the bottom rectangle upward.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the box has no extent
    /// along any axis.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let (lo, hi) = (self.min_corner, self.max_corner);
        let extent = hi - lo;
        if extent.iter().any(|&e| e < TOLERANCE) {
            return Err(OperationError::InvalidInput(format!(
                "box extent must be positive on every axis, got ({}, {}, {})",
                extent.x, extent.y, extent.z
            ))
            .into());
        }

        let bottom = vec![
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
        ];
        let wire = MakeWire::new(bottom, true).execute(store)?;
        let face = MakeFace::new(wire, vec![]).execute(store)?;
        Extrude::new(face, Vector3::new(0.0, 0.0, extent.z)).execute(store)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn box_has_six_faces() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 3.0, 4.0))
            .execute(&mut store)
            .unwrap();
        assert_eq!(store.solid_faces(solid).unwrap().len(), 6);
    }

    #[test]
    fn flat_box_rejected() {
        let mut store = TopologyStore::new();
        let result = MakeBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 4.0))
            .execute(&mut store);
        assert!(result.is_err());
    }
}
