mod tessellate_face;
mod tessellate_solid;

pub use tessellate_face::TessellateFace;
pub use tessellate_solid::TessellateSolid;

use std::collections::HashMap;

use crate::math::{Point2, Point3, Vector3};
use crate::topology::weld_key;

/// A triangle mesh with flat per-face normals.
///
/// Faces do not share vertex slots, but corner positions of adjacent faces
/// are bit-identical, so [`TriangleMesh::is_watertight`] can weld them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Planar UV coordinates in the owning face's frame.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle, counter-clockwise
    /// seen from the normal side).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Appends another mesh, re-basing its indices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices
            .extend(other.indices.iter().map(|t| [t[0] + offset, t[1] + offset, t[2] + offset]));
    }

    /// Returns `true` if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns a copy with every position and normal passed through the given
    /// maps. The maps must preserve handedness so windings stay outward.
    #[must_use]
    pub fn mapped(
        &self,
        point_map: impl Fn(&Point3) -> Point3,
        normal_map: impl Fn(&Vector3) -> Vector3,
    ) -> Self {
        Self {
            vertices: self.vertices.iter().map(point_map).collect(),
            normals: self.normals.iter().map(normal_map).collect(),
            uvs: self.uvs.clone(),
            indices: self.indices.clone(),
        }
    }

    /// Checks that the welded mesh is a closed, consistently wound surface.
    ///
    /// Positions are welded by exact bit pattern. The mesh is watertight when
    /// every undirected edge is used by exactly two triangles, once in each
    /// direction.
    #[must_use]
    pub fn is_watertight(&self) -> bool {
        if self.indices.is_empty() {
            return false;
        }

        let mut welded: HashMap<[u64; 3], u32> = HashMap::new();
        let mut remap = Vec::with_capacity(self.vertices.len());
        for p in &self.vertices {
            let key = weld_key(p);
            let next = u32::try_from(welded.len()).unwrap_or(u32::MAX);
            remap.push(*welded.entry(key).or_insert(next));
        }

        let mut directed: HashMap<(u32, u32), u32> = HashMap::new();
        for tri in &self.indices {
            let [a, b, c] = tri.map(|i| remap[i as usize]);
            if a == b || b == c || c == a {
                continue;
            }
            for (from, to) in [(a, b), (b, c), (c, a)] {
                *directed.entry((from, to)).or_insert(0) += 1;
            }
        }

        directed.iter().all(|(&(from, to), &count)| {
            count == 1 && directed.get(&(to, from)).copied() == Some(1)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tetrahedron() -> TriangleMesh {
        TriangleMesh {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            normals: vec![Vector3::z(); 4],
            uvs: vec![Point2::origin(); 4],
            indices: vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]],
        }
    }

    #[test]
    fn tetrahedron_is_watertight() {
        assert!(tetrahedron().is_watertight());
    }

    #[test]
    fn missing_face_is_not_watertight() {
        let mut mesh = tetrahedron();
        mesh.indices.pop();
        assert!(!mesh.is_watertight());
    }

    #[test]
    fn flipped_face_is_not_watertight() {
        let mut mesh = tetrahedron();
        mesh.indices[0] = [0, 1, 2];
        assert!(!mesh.is_watertight());
    }

    #[test]
    fn merge_rebases_indices() {
        let mut a = tetrahedron();
        let b = tetrahedron();
        a.merge(&b);
        assert_eq!(a.vertices.len(), 8);
        assert_eq!(a.indices[4], [4, 6, 5]);
    }

    #[test]
    fn empty_mesh_is_not_watertight() {
        assert!(!TriangleMesh::default().is_watertight());
    }
}
