use crate::error::{OperationError, Result};
use crate::geometry::curve::Line;
use crate::math::Point3;
use crate::topology::{EdgeCurve, EdgeData, OrientedEdge, TopologyStore, VertexData, WireData, WireId};

/// Creates a wire of straight edges through a sequence of 3D points.
pub struct MakeWire {
    points: Vec<Point3>,
    close: bool,
}

impl MakeWire {
    /// Creates a new `MakeWire` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>, close: bool) -> Self {
        Self { points, close }
    }

    /// Executes the operation, creating vertices, edges and the wire.
    ///
    /// Consecutive points share one vertex; a closed wire links the last
    /// point back to the first.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] for fewer than two points
    /// (three for a closed wire) or when two consecutive points coincide.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<WireId> {
        let min_points = if self.close { 3 } else { 2 };
        if self.points.len() < min_points {
            return Err(OperationError::InvalidInput(format!(
                "wire needs at least {min_points} points, got {}",
                self.points.len()
            ))
            .into());
        }

        let vertices: Vec<_> = self
            .points
            .iter()
            .map(|&p| store.add_vertex(VertexData::new(p)))
            .collect();

        let n = self.points.len();
        let edge_count = if self.close { n } else { n - 1 };
        let mut edges = Vec::with_capacity(edge_count);
        for i in 0..edge_count {
            let j = (i + 1) % n;
            let line = Line::between(self.points[i], self.points[j]).map_err(|_| {
                OperationError::InvalidInput(format!("wire points {i} and {j} coincide"))
            })?;
            let t_end = line.length();
            let edge = store.add_edge(EdgeData {
                start: vertices[i],
                end: vertices[j],
                curve: EdgeCurve::Line(line),
                t_start: 0.0,
                t_end,
            });
            edges.push(OrientedEdge::new(edge, true));
        }

        Ok(store.add_wire(WireData {
            edges,
            is_closed: self.close,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn closed_triangle_has_three_edges() {
        let mut store = TopologyStore::new();
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let wire = MakeWire::new(pts.clone(), true).execute(&mut store).unwrap();
        let data = store.wire(wire).unwrap();
        assert_eq!(data.edges.len(), 3);
        assert!(data.is_closed);
        assert_eq!(store.wire_points(wire).unwrap(), pts);
    }

    #[test]
    fn open_polyline_has_n_minus_one_edges() {
        let mut store = TopologyStore::new();
        let pts = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)];
        let wire = MakeWire::new(pts, false).execute(&mut store).unwrap();
        assert_eq!(store.wire(wire).unwrap().edges.len(), 1);
    }

    #[test]
    fn duplicate_consecutive_points_rejected() {
        let mut store = TopologyStore::new();
        let p = Point3::new(1.0, 1.0, 0.0);
        let pts = vec![p, p, Point3::new(2.0, 0.0, 0.0)];
        assert!(MakeWire::new(pts, true).execute(&mut store).is_err());
    }

    #[test]
    fn too_few_points_rejected() {
        let mut store = TopologyStore::new();
        let pts = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        assert!(MakeWire::new(pts, true).execute(&mut store).is_err());
    }
}
