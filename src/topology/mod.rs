pub mod edge;
pub mod face;
pub mod shell;
pub mod solid;
pub mod vertex;
pub mod wire;

pub use edge::{EdgeCurve, EdgeData, EdgeId};
pub use face::{FaceData, FaceId, FaceSurface};
pub use shell::{ShellData, ShellId};
pub use solid::{SolidData, SolidId};
pub use vertex::{weld_key, VertexData, VertexId};
pub use wire::{OrientedEdge, WireData, WireId};

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Arena owning every topological entity of one build.
///
/// Entities reference each other through typed generational keys. A store
/// lives only as long as a single solid is being built and tessellated.
#[derive(Debug, Default)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    wires: SlotMap<WireId, WireData>,
    faces: SlotMap<FaceId, FaceData>,
    shells: SlotMap<ShellId, ShellData>,
    solids: SlotMap<SolidId, SolidData>,
}

macro_rules! entity_access {
    ($add:ident, $get:ident, $field:ident, $id:ty, $data:ty, $label:literal) => {
        #[doc = concat!("Inserts a ", $label, " and returns its ID.")]
        pub fn $add(&mut self, data: $data) -> $id {
            self.$field.insert(data)
        }

        #[doc = concat!("Returns the ", $label, " data for `id`.")]
        ///
        /// # Errors
        ///
        /// Returns [`TopologyError::EntityNotFound`] if the ID is stale.
        pub fn $get(&self, id: $id) -> Result<&$data, TopologyError> {
            self.$field
                .get(id)
                .ok_or_else(|| TopologyError::EntityNotFound($label.into()))
        }
    };
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    entity_access!(add_vertex, vertex, vertices, VertexId, VertexData, "vertex");
    entity_access!(add_edge, edge, edges, EdgeId, EdgeData, "edge");
    entity_access!(add_wire, wire, wires, WireId, WireData, "wire");
    entity_access!(add_face, face, faces, FaceId, FaceData, "face");
    entity_access!(add_shell, shell, shells, ShellId, ShellData, "shell");
    entity_access!(add_solid, solid, solids, SolidId, SolidData, "solid");

    /// Returns the faces of a solid's outer shell.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid or its shell is missing.
    pub fn solid_faces(&self, id: SolidId) -> Result<&[FaceId], TopologyError> {
        let solid = self.solid(id)?;
        Ok(&self.shell(solid.outer_shell)?.faces)
    }

    /// Returns the vertex positions of a wire in traversal order.
    ///
    /// # Errors
    ///
    /// Returns an error if any referenced entity is missing.
    pub fn wire_points(&self, id: WireId) -> Result<Vec<crate::math::Point3>, TopologyError> {
        let wire = self.wire(id)?;
        let mut points = Vec::with_capacity(wire.edges.len());
        for oe in &wire.edges {
            let edge = self.edge(oe.edge)?;
            let vertex = if oe.forward { edge.start } else { edge.end };
            points.push(self.vertex(vertex)?.point);
        }
        Ok(points)
    }
}
