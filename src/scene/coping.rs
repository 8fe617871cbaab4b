use crate::error::Result;
use crate::geometry::surface::newell_normal;
use crate::math::polygon_2d::miter_offset;
use crate::math::{Point2, Point3, Vector3};
use crate::tessellation::TriangleMesh;

/// Sweeps a rectangular band of `width × height` around a closed rim.
///
/// `rim` is in scene `(x, z)` and may wind either way. The band sits on the
/// rim plane `y = 0`, hugging the rim on its inner side. Each quad carries its
/// own flat normal; corner positions are shared bit for bit, so the ring is
/// watertight once welded.
///
/// # Errors
///
/// Returns an error if the rim has fewer than three points or a zero-length
/// edge.
pub fn coping_ring(rim: &[Point2], width: f64, height: f64) -> Result<TriangleMesh> {
    let lift = |p: &Point2, y: f64| Point3::new(p.x, y, p.y);

    // Wind the rim counter-clockwise seen from above (normal +Y).
    let flat: Vec<Point3> = rim.iter().map(|p| lift(p, 0.0)).collect();
    let inner: Vec<Point2> = if newell_normal(&flat).y >= 0.0 {
        rim.to_vec()
    } else {
        rim.iter().rev().copied().collect()
    };
    let outer = miter_offset(&inner, width)?;

    let inner_lo: Vec<Point3> = inner.iter().map(|p| lift(p, 0.0)).collect();
    let inner_hi: Vec<Point3> = inner.iter().map(|p| lift(p, height)).collect();
    let outer_lo: Vec<Point3> = outer.iter().map(|p| lift(p, 0.0)).collect();
    let outer_hi: Vec<Point3> = outer.iter().map(|p| lift(p, height)).collect();

    let mut mesh = TriangleMesh::default();
    let n = inner.len();
    for i in 0..n {
        let j = (i + 1) % n;
        push_quad(&mut mesh, [outer_hi[i], outer_hi[j], inner_hi[j], inner_hi[i]]);
        push_quad(&mut mesh, [inner_lo[i], inner_lo[j], outer_lo[j], outer_lo[i]]);
        push_quad(&mut mesh, [outer_lo[i], outer_lo[j], outer_hi[j], outer_hi[i]]);
        push_quad(&mut mesh, [inner_lo[j], inner_lo[i], inner_hi[i], inner_hi[j]]);
    }
    Ok(mesh)
}

/// Appends a planar quad as two triangles sharing its flat normal.
#[allow(clippy::cast_possible_truncation)]
fn push_quad(mesh: &mut TriangleMesh, corners: [Point3; 4]) {
    let normal = newell_normal(&corners)
        .try_normalize(f64::EPSILON)
        .unwrap_or_else(Vector3::y);
    let base = mesh.vertices.len() as u32;
    for p in corners {
        mesh.vertices.push(p);
        mesh.normals.push(normal);
        mesh.uvs.push(Point2::new(p.x, p.z));
    }
    mesh.indices.push([base, base + 1, base + 2]);
    mesh.indices.push([base, base + 2, base + 3]);
}
