use crate::geometry::curve::Curve;
use crate::math::TOLERANCE;
use crate::tessellation::{TessellateSolid, TriangleMesh};
use crate::topology::{EdgeCurve, SolidId, TopologyStore};

/// Validates the topological and geometric consistency of a solid.
///
/// A solid is valid when its shells are flagged closed, every wire is closed,
/// every edge curve starts and ends on its vertices, and the tessellated
/// boundary is watertight.
pub struct IsValid {
    solid: SolidId,
}

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the validation, returning `true` if the solid is valid.
    #[must_use]
    pub fn execute(&self, store: &TopologyStore) -> bool {
        TessellateSolid::new(self.solid)
            .execute(store)
            .is_ok_and(|mesh| self.execute_with_mesh(store, &mesh))
    }

    /// Validates against a mesh already tessellated from this solid.
    #[must_use]
    pub fn execute_with_mesh(&self, store: &TopologyStore, mesh: &TriangleMesh) -> bool {
        self.topology_is_consistent(store) && mesh.is_watertight()
    }

    fn topology_is_consistent(&self, store: &TopologyStore) -> bool {
        let Ok(solid) = store.solid(self.solid) else {
            return false;
        };
        let Ok(shell) = store.shell(solid.outer_shell) else {
            return false;
        };
        if !shell.is_closed || shell.faces.is_empty() {
            return false;
        }

        shell.faces.iter().all(|&face_id| {
            store.face(face_id).is_ok_and(|face| {
                std::iter::once(&face.outer_wire)
                    .chain(&face.inner_wires)
                    .all(|&wire_id| wire_is_consistent(store, wire_id))
            })
        })
    }
}

fn wire_is_consistent(store: &TopologyStore, wire_id: crate::topology::WireId) -> bool {
    let Ok(wire) = store.wire(wire_id) else {
        return false;
    };
    if !wire.is_closed {
        return false;
    }
    // (start, end) weld keys of each edge in traversal order.
    let mut links = Vec::with_capacity(wire.edges.len());
    for oe in &wire.edges {
        let Ok(edge) = store.edge(oe.edge) else {
            return false;
        };
        let (Ok(start), Ok(end)) = (store.vertex(edge.start), store.vertex(edge.end)) else {
            return false;
        };
        let EdgeCurve::Line(line) = &edge.curve;
        let domain = line.domain();
        if !domain.contains(edge.t_start) || !domain.contains(edge.t_end) {
            return false;
        }
        let (Ok(a), Ok(b)) = (line.evaluate(edge.t_start), line.evaluate(edge.t_end)) else {
            return false;
        };
        if (a - start.point).norm() > 1e3 * TOLERANCE || (b - end.point).norm() > 1e3 * TOLERANCE {
            return false;
        }
        links.push(if oe.forward {
            (start.weld_key(), end.weld_key())
        } else {
            (end.weld_key(), start.weld_key())
        });
    }

    // Each edge must end where the next one starts.
    let n = links.len();
    (0..n).all(|i| links[i].1 == links[(i + 1) % n].0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;
    use crate::topology::ShellData;

    #[test]
    fn box_is_valid() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 2.0, 3.0))
            .execute(&mut store)
            .unwrap();
        assert!(IsValid::new(solid).execute(&store));
    }

    #[test]
    fn solid_missing_a_face_is_invalid() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let mut faces = store.solid_faces(solid).unwrap().to_vec();
        faces.pop();
        let shell = store.add_shell(ShellData {
            faces,
            is_closed: true,
        });
        let holed = store.add_solid(crate::topology::SolidData {
            outer_shell: shell,
            inner_shells: vec![],
        });
        assert!(!IsValid::new(holed).execute(&store));
    }

    #[test]
    fn open_mesh_fails_a_consistent_solid() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let mut mesh = TessellateSolid::new(solid).execute(&store).unwrap();
        assert!(IsValid::new(solid).execute_with_mesh(&store, &mesh));
        mesh.indices.pop();
        assert!(!IsValid::new(solid).execute_with_mesh(&store, &mesh));
    }
}
