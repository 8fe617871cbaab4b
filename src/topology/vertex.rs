use crate::math::Point3;

slotmap::new_key_type! {
    /// Key of a vertex in the topology store.
    pub struct VertexId;
}

/// A corner shared by the edges that meet at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexData {
    pub point: Point3,
}

impl VertexData {
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }

    /// Exact identity of this vertex's position; see [`weld_key`].
    #[must_use]
    pub fn weld_key(&self) -> [u64; 3] {
        weld_key(&self.point)
    }
}

/// Bit pattern of a position, with `-0.0` folded into `+0.0`.
///
/// Builders copy corner points rather than recomputing them, so two corners
/// are the same vertex exactly when their keys are equal.
#[must_use]
pub fn weld_key(p: &Point3) -> [u64; 3] {
    [(p.x + 0.0).to_bits(), (p.y + 0.0).to_bits(), (p.z + 0.0).to_bits()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_zero_welds() {
        assert_eq!(weld_key(&Point3::new(-0.0, 1.0, 0.0)), weld_key(&Point3::new(0.0, 1.0, -0.0)));
    }

    #[test]
    fn nearby_points_stay_distinct() {
        let a = VertexData::new(Point3::new(1.0, 2.0, 3.0));
        let b = VertexData::new(Point3::new(1.0 + f64::EPSILON, 2.0, 3.0));
        assert_ne!(a.weld_key(), b.weld_key());
    }
}
