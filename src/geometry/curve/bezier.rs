use crate::math::{Point2, Vector2};

/// A planar cubic Bézier segment.
///
/// `B(t) = (1-t)³·p0 + 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³·p3`, `t ∈ [0, 1]`.
/// The curve stays inside the convex hull of its four control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
}

impl CubicBezier {
    /// Creates a segment from its four control points.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluates the curve at `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let s = 1.0 - t;
        let b0 = s * s * s;
        let b1 = 3.0 * s * s * t;
        let b2 = 3.0 * s * t * t;
        let b3 = t * t * t;
        Point2::from(
            self.p0.coords * b0 + self.p1.coords * b1 + self.p2.coords * b2 + self.p3.coords * b3,
        )
    }

    /// First derivative at `t`.
    #[must_use]
    pub fn derivative_at(&self, t: f64) -> Vector2 {
        let s = 1.0 - t;
        (self.p1 - self.p0) * (3.0 * s * s)
            + (self.p2 - self.p1) * (6.0 * s * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }

    /// Number of chords needed so no chord deviates from the curve by more
    /// than `tolerance`, clamped to `[min_segments, max_segments]`. Inverted
    /// bounds are swapped.
    ///
    /// Uses the second-difference bound: a uniform `n`-chord approximation
    /// deviates by at most `3/4 · max(|p0 - 2p1 + p2|, |p1 - 2p2 + p3|) / n²`.
    #[must_use]
    pub fn subdivisions(&self, tolerance: f64, min_segments: u32, max_segments: u32) -> u32 {
        let d1 = (self.p0.coords - self.p1.coords * 2.0 + self.p2.coords).norm();
        let d2 = (self.p1.coords - self.p2.coords * 2.0 + self.p3.coords).norm();
        let spread = d1.max(d2);
        let (lo, hi) = (min_segments.max(1), max_segments.max(1));
        let (lo, hi) = (lo.min(hi), lo.max(hi));
        if tolerance <= 0.0 || spread < 1e-12 {
            return lo;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = (0.75 * spread / tolerance).sqrt().ceil() as u32;
        n.clamp(lo, hi)
    }

    /// Appends `segments` chord endpoints to `out`, excluding `p0`.
    pub fn flatten_into(&self, segments: u32, out: &mut Vec<Point2>) {
        let segments = segments.max(1);
        for i in 1..segments {
            out.push(self.point_at(f64::from(i) / f64::from(segments)));
        }
        out.push(self.p3);
    }
}
