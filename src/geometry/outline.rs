use crate::math::polygon_2d::bounds;
use crate::math::{Point2, TOLERANCE};

use super::CubicBezier;

/// One piece of a closed outline, ending at `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlineSegment {
    /// Straight edge to `to`.
    Line { to: Point2 },
    /// Cubic Bézier edge to `to` with handles `c1`, `c2`.
    Cubic { c1: Point2, c2: Point2, to: Point2 },
}

impl OutlineSegment {
    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> Point2 {
        match *self {
            Self::Line { to } | Self::Cubic { to, .. } => to,
        }
    }
}

/// Controls how curved segments are turned into chords.
#[derive(Debug, Clone, Copy)]
pub struct FlattenParams {
    /// Maximum chord deviation from the true curve.
    pub tolerance: f64,
    /// Minimum number of chords per curved segment.
    pub min_segments: u32,
    /// Maximum number of chords per curved segment.
    pub max_segments: u32,
}

impl Default for FlattenParams {
    fn default() -> Self {
        Self {
            tolerance: 0.05,
            min_segments: 4,
            max_segments: 48,
        }
    }
}

/// A closed planar outline made of straight and cubic segments.
///
/// The loop implicitly closes from the last segment's end back to `start`;
/// if the last segment already ends on `start` no extra edge is added.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    start: Point2,
    segments: Vec<OutlineSegment>,
}

impl Outline {
    /// Starts an outline at `start`.
    #[must_use]
    pub fn starting_at(start: Point2) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    /// Builds an axis-aligned rectangle outline, counter-clockwise.
    #[must_use]
    pub fn rectangle(min: Point2, max: Point2) -> Self {
        Self::starting_at(min)
            .line_to(Point2::new(max.x, min.y))
            .line_to(max)
            .line_to(Point2::new(min.x, max.y))
    }

    /// Appends a straight edge.
    #[must_use]
    pub fn line_to(mut self, to: Point2) -> Self {
        self.segments.push(OutlineSegment::Line { to });
        self
    }

    /// Appends a cubic Bézier edge.
    #[must_use]
    pub fn cubic_to(mut self, c1: Point2, c2: Point2, to: Point2) -> Self {
        self.segments.push(OutlineSegment::Cubic { c1, c2, to });
        self
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[OutlineSegment] {
        &self.segments
    }

    /// Returns a copy with every coordinate multiplied by `(sx, sy)`.
    #[must_use]
    pub fn scaled(&self, sx: f64, sy: f64) -> Self {
        let s = |p: Point2| Point2::new(p.x * sx, p.y * sy);
        Self {
            start: s(self.start),
            segments: self
                .segments
                .iter()
                .map(|seg| match *seg {
                    OutlineSegment::Line { to } => OutlineSegment::Line { to: s(to) },
                    OutlineSegment::Cubic { c1, c2, to } => OutlineSegment::Cubic {
                        c1: s(c1),
                        c2: s(c2),
                        to: s(to),
                    },
                })
                .collect(),
        }
    }

    /// Bounds of all points and handles. The flattened outline always lies
    /// inside this box.
    #[must_use]
    pub fn control_bounds(&self) -> Option<(Point2, Point2)> {
        let mut pts = vec![self.start];
        for seg in &self.segments {
            match *seg {
                OutlineSegment::Line { to } => pts.push(to),
                OutlineSegment::Cubic { c1, c2, to } => pts.extend([c1, c2, to]),
            }
        }
        bounds(&pts)
    }

    /// Converts the outline into a closed polygon (no repeated closing point).
    #[must_use]
    pub fn flatten(&self, params: &FlattenParams) -> Vec<Point2> {
        let mut points = vec![self.start];
        let mut cursor = self.start;
        for seg in &self.segments {
            match *seg {
                OutlineSegment::Line { to } => points.push(to),
                OutlineSegment::Cubic { c1, c2, to } => {
                    let curve = CubicBezier::new(cursor, c1, c2, to);
                    let n = curve.subdivisions(
                        params.tolerance,
                        params.min_segments,
                        params.max_segments,
                    );
                    curve.flatten_into(n, &mut points);
                }
            }
            cursor = seg.end();
        }

        if points.len() > 1 {
            if let Some(last) = points.last() {
                if (last - self.start).norm() < TOLERANCE {
                    points.pop();
                }
            }
        }
        points
    }
}
