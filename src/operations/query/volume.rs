use crate::tessellation::TriangleMesh;

/// Computes the enclosed volume of a closed, outward-wound mesh.
///
/// Sums the signed tetrahedra `(1/6) * v0 · (v1 × v2)` of every triangle
/// against the origin. Mesh normals are used to correct triangles whose
/// winding disagrees with their stored normal.
pub struct Volume<'a> {
    mesh: &'a TriangleMesh,
}

impl<'a> Volume<'a> {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        Self { mesh }
    }

    /// Executes the query, returning the volume (absolute value).
    #[must_use]
    pub fn execute(&self) -> f64 {
        let mesh = self.mesh;
        let mut signed_volume = 0.0;
        for tri in &mesh.indices {
            let [v0, v1, v2] = tri.map(|i| mesh.vertices[i as usize]);
            let cross = (v1 - v0).cross(&(v2 - v0));
            let det = v0.coords.dot(&v1.coords.cross(&v2.coords));

            let avg_normal: crate::math::Vector3 =
                tri.iter().map(|&i| mesh.normals[i as usize]).sum();
            if avg_normal.dot(&cross) >= 0.0 {
                signed_volume += det;
            } else {
                signed_volume -= det;
            }
        }
        signed_volume.abs() / 6.0
    }
}
