use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, FixedVertexHandle, InnerTag};
use spade::{ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};

use crate::error::{Result, TessellationError};
use crate::geometry::surface::{Plane, Surface};
use crate::math::{Point2, Point3};
use crate::topology::{FaceId, FaceSurface, TopologyStore, WireId};

use super::TriangleMesh;

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Tessellates a planar face into a triangle mesh.
///
/// Boundary loops become constraint edges of a constrained Delaunay
/// triangulation; no Steiner points are added, so the mesh boundary is exactly
/// the face's wire points.
pub struct TessellateFace {
    face: FaceId,
}

impl TessellateFace {
    /// Creates a new `TessellateFace` operation.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the tessellation, returning a triangle mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or its boundary cannot be
    /// triangulated (fewer than three points, self-intersecting loop).
    pub fn execute(&self, store: &TopologyStore) -> Result<TriangleMesh> {
        let face = store.face(self.face)?;
        match &face.surface {
            FaceSurface::Plane(plane) => tessellate_plane(
                store,
                plane,
                face.same_sense,
                face.outer_wire,
                &face.inner_wires,
            ),
        }
    }
}

/// Tessellates a planar face using CDT, keeping the original 3D corners.
#[allow(clippy::cast_possible_truncation)]
fn tessellate_plane(
    store: &TopologyStore,
    plane: &Plane,
    same_sense: bool,
    outer_wire_id: WireId,
    inner_wire_ids: &[WireId],
) -> Result<TriangleMesh> {
    let mut cdt = Cdt::new();
    let mut originals: HashMap<FixedVertexHandle, Point3> = HashMap::new();

    insert_constraint_loop(&mut cdt, &mut originals, plane, &store.wire_points(outer_wire_id)?)?;
    for &wire_id in inner_wire_ids {
        insert_constraint_loop(&mut cdt, &mut originals, plane, &store.wire_points(wire_id)?)?;
    }

    let interior_faces = classify_interior_faces(&cdt);
    let surface_normal = plane.normal(0.0, 0.0)?;
    let normal = if same_sense {
        surface_normal
    } else {
        -surface_normal
    };

    let mut mesh = TriangleMesh::default();
    let mut vertex_map: HashMap<FixedVertexHandle, u32> = HashMap::new();

    for face_handle in cdt.inner_faces() {
        if !interior_faces.contains(&face_handle.fix().index()) {
            continue;
        }

        let mut tri = [0u32; 3];
        for (slot, vh) in face_handle.vertices().iter().enumerate() {
            let fix = vh.fix();
            if let Some(&index) = vertex_map.get(&fix) {
                tri[slot] = index;
                continue;
            }
            let pos = vh.position();
            let p3 = match originals.get(&fix) {
                Some(&p) => p,
                None => plane.evaluate(pos.x, pos.y)?,
            };
            mesh.vertices.push(p3);
            mesh.normals.push(normal);
            mesh.uvs.push(Point2::new(pos.x, pos.y));
            let index = (mesh.vertices.len() - 1) as u32;
            vertex_map.insert(fix, index);
            tri[slot] = index;
        }

        // Spade reports counter-clockwise triangles in (u, v); flip when the
        // face looks along the opposite side of its plane.
        if !same_sense {
            tri.swap(1, 2);
        }
        mesh.indices.push(tri);
    }

    tracing::trace!(triangles = mesh.indices.len(), "tessellated planar face");
    Ok(mesh)
}

/// Inserts a closed loop of points as constraint edges.
fn insert_constraint_loop(
    cdt: &mut Cdt,
    originals: &mut HashMap<FixedVertexHandle, Point3>,
    plane: &Plane,
    points: &[Point3],
) -> Result<()> {
    if points.len() < 3 {
        return Err(
            TessellationError::Failed("constraint loop needs at least 3 points".into()).into(),
        );
    }

    let mut handles = Vec::with_capacity(points.len());
    for p in points {
        let uv = plane.project(p);
        let h = cdt
            .insert(SpadePoint2::new(uv.x, uv.y))
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        originals.entry(h).or_insert(*p);
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from == to {
            continue;
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(TessellationError::Failed(
                "boundary loop intersects itself".into(),
            )
            .into());
        }
        cdt.add_constraint(from, to);
    }

    Ok(())
}

/// Classifies which inner faces of the CDT are inside the boundary using flood-fill.
///
/// Starts from faces adjacent to the outer (infinite) face at depth 0. Each time
/// a constraint edge is crossed, depth increments. Odd depth = interior.
fn classify_interior_faces(cdt: &Cdt) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer_fix {
            continue;
        }
        if let Some(inner) = edge.rev().face().as_inner() {
            let idx = inner.fix().index();
            if depth_map.contains_key(&idx) {
                continue;
            }
            let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(idx, depth);
            if depth % 2 == 1 {
                interior.insert(idx);
            }
            queue.push_back((inner.fix(), depth));
        }
    }

    while let Some((face_fix, depth)) = queue.pop_front() {
        for edge in cdt.face(face_fix).adjacent_edges() {
            let Some(neighbor) = edge.rev().face().as_inner() else {
                continue;
            };
            let n_idx = neighbor.fix().index();
            if depth_map.contains_key(&n_idx) {
                continue;
            }
            let new_depth = depth + u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(n_idx, new_depth);
            if new_depth % 2 == 1 {
                interior.insert(n_idx);
            }
            queue.push_back((neighbor.fix(), new_depth));
        }
    }

    interior
}
