use crate::geometry::curve::Line;

use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// The geometric curve carried by an edge.
///
/// Curved outlines are flattened before they reach the topology, so every
/// edge is a straight segment.
#[derive(Debug, Clone)]
pub enum EdgeCurve {
    /// A straight segment.
    Line(Line),
}

/// Data associated with a topological edge.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
    /// The geometric curve defining this edge's shape.
    pub curve: EdgeCurve,
    /// Parameter on the curve corresponding to the start vertex.
    pub t_start: f64,
    /// Parameter on the curve corresponding to the end vertex.
    pub t_end: f64,
}
