use crate::error::{Result, TopologyError};
use crate::geometry::surface::Plane;
use crate::topology::{FaceData, FaceId, FaceSurface, TopologyStore, WireId};

/// Creates a planar face bounded by a closed wire.
///
/// The plane is fitted to the outer wire so that the wire runs
/// counter-clockwise around the face normal.
pub struct MakeFace {
    outer_wire: WireId,
    inner_wires: Vec<WireId>,
}

impl MakeFace {
    /// Creates a new `MakeFace` operation.
    #[must_use]
    pub fn new(outer_wire: WireId, inner_wires: Vec<WireId>) -> Self {
        Self {
            outer_wire,
            inner_wires,
        }
    }

    /// Executes the operation, creating the face in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::WireNotClosed`] if any boundary wire is open,
    /// or a geometry error if the outer wire encloses no area.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        for &wire in std::iter::once(&self.outer_wire).chain(&self.inner_wires) {
            if !store.wire(wire)?.is_closed {
                return Err(TopologyError::WireNotClosed.into());
            }
        }

        let points = store.wire_points(self.outer_wire)?;
        let plane = Plane::through_polygon(&points)?;

        Ok(store.add_face(FaceData {
            surface: FaceSurface::Plane(plane),
            outer_wire: self.outer_wire,
            inner_wires: self.inner_wires.clone(),
            same_sense: true,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::MakeWire;
    use approx::assert_relative_eq;

    #[test]
    fn face_normal_follows_winding() {
        let mut store = TopologyStore::new();
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ];
        let wire = MakeWire::new(pts, true).execute(&mut store).unwrap();
        let face = MakeFace::new(wire, vec![]).execute(&mut store).unwrap();
        let FaceSurface::Plane(plane) = &store.face(face).unwrap().surface;
        assert_relative_eq!(*plane.plane_normal(), -Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn open_wire_rejected() {
        let mut store = TopologyStore::new();
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        let wire = MakeWire::new(pts, false).execute(&mut store).unwrap();
        assert!(MakeFace::new(wire, vec![]).execute(&mut store).is_err());
    }
}
