use super::{Point2, Vector2, TOLERANCE};
use crate::error::{OperationError, Result};

/// Longest allowed miter, as a multiple of the offset distance.
const MITER_LIMIT: f64 = 4.0;

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Err(OperationError::InvalidInput(format!(
            "zero-length segment between ({}, {}) and ({}, {})",
            a.x, a.y, b.x, b.y
        ))
        .into());
    }
    Ok(d / len)
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Offsets every vertex of a closed polygon outward by `distance`.
///
/// Edges move parallel to themselves; vertices follow the miter of their two
/// adjacent edges, clamped at [`MITER_LIMIT`] times the distance. Works for
/// either orientation. A negative distance insets the polygon.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if the polygon has fewer than three
/// vertices or contains a zero-length edge.
pub fn miter_offset(points: &[Point2], distance: f64) -> Result<Vec<Point2>> {
    let n = points.len();
    if n < 3 {
        return Err(
            OperationError::InvalidInput("offset polygon needs at least 3 points".into()).into(),
        );
    }

    // Outward is the right-hand side of a counter-clockwise loop.
    let outward_sign = if signed_area(points) >= 0.0 { -1.0 } else { 1.0 };

    let mut outward = Vec::with_capacity(n);
    for i in 0..n {
        let dir = segment_direction(&points[i], &points[(i + 1) % n])?;
        outward.push(left_normal(dir) * outward_sign);
    }

    let mut result = Vec::with_capacity(n);
    for i in 0..n {
        let prev = outward[(i + n - 1) % n];
        let next = outward[i];
        let denom = 1.0 + prev.dot(&next);
        let mut offset = if denom < 1e-6 {
            next * distance
        } else {
            (prev + next) * (distance / denom)
        };
        let max_len = MITER_LIMIT * distance.abs();
        let len = offset.norm();
        if len > max_len {
            offset *= max_len / len;
        }
        result.push(points[i] + offset);
    }

    Ok(result)
}

/// Returns the minimum and maximum corners of a point set.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn bounds(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        assert!((signed_area(&square()) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts: Vec<_> = square().into_iter().rev().collect();
        assert!((signed_area(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area(&[Point2::new(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn segment_direction_basic() {
        let dir = segment_direction(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0)).unwrap();
        assert!((dir.x - 0.6).abs() < TOLERANCE);
        assert!((dir.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn segment_direction_zero_length() {
        let a = Point2::new(1.0, 1.0);
        assert!(segment_direction(&a, &a).is_err());
    }

    #[test]
    fn outward_offset_grows_square_either_orientation() {
        for pts in [square(), square().into_iter().rev().collect()] {
            let grown = miter_offset(&pts, 0.5).unwrap();
            let (min, max) = bounds(&grown).unwrap();
            assert!((min.x + 0.5).abs() < 1e-9);
            assert!((min.y + 0.5).abs() < 1e-9);
            assert!((max.x - 1.5).abs() < 1e-9);
            assert!((max.y - 1.5).abs() < 1e-9);
        }
    }

    #[test]
    fn negative_offset_insets() {
        let shrunk = miter_offset(&square(), -0.25).unwrap();
        assert!((signed_area(&shrunk) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn offset_keeps_edges_parallel_at_concave_corner() {
        let l_shape = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let grown = miter_offset(&l_shape, 0.1).unwrap();
        // The concave corner moves into the notch along the miter.
        assert!((grown[3].x - 1.1).abs() < 1e-9);
        assert!((grown[3].y - 1.1).abs() < 1e-9);
    }

    #[test]
    fn bounds_of_empty_is_none() {
        assert!(bounds(&[]).is_none());
    }
}
