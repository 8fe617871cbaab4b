use serde::Serialize;

use crate::config::BuildOptions;
use crate::error::{OperationError, Result};
use crate::math::polygon_2d::signed_area;
use crate::math::{Point2, Point3, Vector2, Vector3};
use crate::operations::creation::{MakeFace, MakeWire};
use crate::operations::query::{BoundingBox, IsValid, Volume};
use crate::operations::shaping::{Bevel, Extrude};
use crate::tessellation::{TessellateSolid, TriangleMesh};
use crate::topology::TopologyStore;

use super::{Construction, Dimensions, ShapeKind};

/// US gallons per cubic foot.
pub const GALLONS_PER_CUBIC_FOOT: f64 = 7.480_52;

/// Share of the smaller plan dimension used as the upper bound of the rim
/// bevel radius.
const BEVEL_PLAN_FRACTION: f64 = 0.03;

/// Axis-aligned plan rectangle in scene `(x, z)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Footprint {
    pub min: Point2,
    pub max: Point2,
}

impl Footprint {
    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.max - self.min
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    #[must_use]
    pub fn union(&self, other: &Footprint) -> Footprint {
        Footprint {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Returns the point at fractional offsets `(fx, fz)` from the center,
    /// where `±0.5` lands on the edges.
    #[must_use]
    pub fn at_fraction(&self, fx: f64, fz: f64) -> Point2 {
        let size = self.size();
        self.center() + Vector2::new(size.x * fx, size.y * fz)
    }
}

/// One closed shell of a pool.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidPart {
    /// Outward-wound mesh in the scene frame.
    pub mesh: TriangleMesh,
    pub footprint: Footprint,
}

/// Pool shell geometry in the scene frame: Y up, rim at `y = 0`, floor at
/// `y = -depth`, centered on the origin in plan.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSolid {
    pub shape: ShapeKind,
    pub dimensions: Dimensions,
    /// One part per prism; only the L-shape has two.
    pub parts: Vec<SolidPart>,
    /// Envelope of every part.
    pub footprint: Footprint,
    /// Closed rim outline in scene `(x, z)`.
    pub rim: Vec<Point2>,
}

impl GeneratedSolid {
    /// Enclosed water volume in cubic feet.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.parts.iter().map(|p| Volume::new(&p.mesh).execute()).sum()
    }

    #[must_use]
    pub fn gallons(&self) -> f64 {
        self.volume() * GALLONS_PER_CUBIC_FOOT
    }

    /// Plan area enclosed by the rim, in square feet.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        signed_area(&self.rim).abs()
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.vertices.len()).sum()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.indices.len()).sum()
    }
}

/// Builds the pool shell for a shape and size.
///
/// The outline is laid out in a local frame (x along the length, y along the
/// width), extruded along +Z by the depth, tessellated, then mapped into the
/// scene frame by `(x, y, z) → (x, z − depth, −y)`.
pub struct BuildPoolSolid {
    shape: ShapeKind,
    dimensions: Dimensions,
}

impl BuildPoolSolid {
    /// Creates a new `BuildPoolSolid` operation.
    #[must_use]
    pub fn new(shape: ShapeKind, dimensions: &Dimensions) -> Self {
        Self {
            shape,
            dimensions: *dimensions,
        }
    }

    /// Executes the build.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`](crate::error::ConfigError) for
    /// options that fail [`BuildOptions::validate`], or an error if any part
    /// fails to extrude, tessellate or close. Validated dimensions and the
    /// static outlines keep the latter from happening for any supported input.
    pub fn execute(&self, options: &BuildOptions) -> Result<GeneratedSolid> {
        options.validate()?;
        let profile = self.shape.profile();
        let (length, width, depth) = (
            self.dimensions.length(),
            self.dimensions.width(),
            self.dimensions.depth(),
        );

        let (outlines, rim): (Vec<Vec<Point2>>, Vec<Point2>) = match profile.construction {
            Construction::LShaped { short_leg_fraction } => {
                let (x0, x1) = (-length / 2.0, length / 2.0);
                let xs = x0 + short_leg_fraction * length;
                let (y0, y1) = (-width / 2.0, width / 2.0);
                let long_leg = rectangle(Point2::new(x0, y0), Point2::new(x1, 0.0));
                let short_leg = rectangle(Point2::new(x0, 0.0), Point2::new(xs, y1));
                let rim = vec![
                    Point2::new(x0, y0),
                    Point2::new(x1, y0),
                    Point2::new(x1, 0.0),
                    Point2::new(xs, 0.0),
                    Point2::new(xs, y1),
                    Point2::new(x0, y1),
                ];
                (vec![long_leg, short_leg], rim)
            }
            _ => {
                let outline = profile.outline(length, width).ok_or_else(|| {
                    OperationError::Failed(format!("{} has no single outline", self.shape))
                })?;
                let points = outline.flatten(&options.flatten_params());
                (vec![points.clone()], points)
            }
        };

        let bevel = profile.bevel.then(|| {
            let radius = options
                .bevel_radius
                .min(BEVEL_PLAN_FRACTION * length.min(width))
                .min(depth / 4.0);
            Bevel {
                inset: radius,
                height: radius,
                segments: options.bevel_segments,
            }
        });

        let parts = outlines
            .iter()
            .map(|points| extrude_part(points, depth, bevel))
            .collect::<Result<Vec<_>>>()?;

        let footprint = parts
            .iter()
            .map(|p| p.footprint)
            .reduce(|a, b| a.union(&b))
            .ok_or_else(|| OperationError::Failed("pool has no parts".into()))?;

        let solid = GeneratedSolid {
            shape: self.shape,
            dimensions: self.dimensions,
            parts,
            footprint,
            rim: rim.iter().map(|p| Point2::new(p.x, -p.y)).collect(),
        };

        tracing::debug!(
            shape = %self.shape,
            length,
            width,
            depth,
            parts = solid.parts.len(),
            vertices = solid.vertex_count(),
            triangles = solid.triangle_count(),
            "built pool solid"
        );
        Ok(solid)
    }
}

fn rectangle(min: Point2, max: Point2) -> Vec<Point2> {
    vec![min, Point2::new(max.x, min.y), max, Point2::new(min.x, max.y)]
}

/// Extrudes one closed outline into a validated, scene-frame part.
fn extrude_part(points: &[Point2], depth: f64, bevel: Option<Bevel>) -> Result<SolidPart> {
    let mut store = TopologyStore::new();
    let base: Vec<Point3> = points.iter().map(|p| Point3::new(p.x, p.y, 0.0)).collect();
    let wire = MakeWire::new(base, true).execute(&mut store)?;
    let face = MakeFace::new(wire, vec![]).execute(&mut store)?;

    let mut extrude = Extrude::new(face, Vector3::new(0.0, 0.0, depth));
    if let Some(bevel) = bevel {
        extrude = extrude.with_bevel(bevel);
    }
    let solid = extrude.execute(&mut store)?;
    let mesh = TessellateSolid::new(solid).execute(&store)?;
    if !IsValid::new(solid).execute_with_mesh(&store, &mesh) {
        return Err(OperationError::Failed("extruded pool part is not closed".into()).into());
    }

    let mesh = mesh.mapped(
        |p| Point3::new(p.x, p.z - depth, -p.y),
        |n| Vector3::new(n.x, n.z, -n.y),
    );
    let aabb = BoundingBox::new(&mesh).execute()?;
    Ok(SolidPart {
        footprint: Footprint {
            min: Point2::new(aabb.min.x, aabb.min.z),
            max: Point2::new(aabb.max.x, aabb.max.z),
        },
        mesh,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn build(shape: ShapeKind, l: f64, w: f64, d: f64) -> GeneratedSolid {
        let dims = Dimensions::new(l, w, d).unwrap();
        BuildPoolSolid::new(shape, &dims)
            .execute(&BuildOptions::default())
            .unwrap()
    }

    #[test]
    fn rectangle_is_an_axis_aligned_box() {
        let solid = build(ShapeKind::Rectangle, 16.0, 8.0, 6.0);
        assert_eq!(solid.parts.len(), 1);
        let aabb = BoundingBox::new(&solid.parts[0].mesh).execute().unwrap();
        assert_relative_eq!(aabb.size(), Vector3::new(16.0, 6.0, 8.0), epsilon = 1e-12);
        assert_relative_eq!(aabb.max.y, 0.0);
        assert_relative_eq!(aabb.min.y, -6.0);
        assert_relative_eq!(solid.volume(), 16.0 * 8.0 * 6.0, epsilon = 1e-9);
        assert_relative_eq!(solid.surface_area(), 128.0, epsilon = 1e-9);
        assert_relative_eq!(solid.gallons(), 768.0 * GALLONS_PER_CUBIC_FOOT, epsilon = 1e-6);
    }

    #[test]
    fn every_shape_is_closed_and_within_its_footprint_scale() {
        for &shape in ShapeKind::ALL {
            let solid = build(shape, 24.0, 12.0, 6.0);
            assert!(solid.vertex_count() > 0, "{shape}");
            for part in &solid.parts {
                assert!(part.mesh.is_watertight(), "{shape}");
            }
            let [sx, sy] = shape.profile().footprint_scale;
            let size = solid.footprint.size();
            assert!(size.x <= 24.0 * sx + 1e-9, "{shape}: {size:?}");
            assert!(size.y <= 12.0 * sy + 1e-9, "{shape}: {size:?}");
        }
    }

    #[test]
    fn lagoon_footprint_matches_anchor_extremes() {
        let solid = build(ShapeKind::Lagoon, 24.0, 12.0, 6.0);
        let size = solid.footprint.size();
        assert_relative_eq!(size.x, 24.0 * 1.18, epsilon = 1e-9);
        assert_relative_eq!(size.y, 12.0 * 1.17, epsilon = 1e-9);
    }

    #[test]
    fn bevel_keeps_rim_inside_base() {
        let solid = build(ShapeKind::Kidney, 20.0, 10.0, 5.0);
        let aabb = BoundingBox::new(&solid.parts[0].mesh).execute().unwrap();
        assert_relative_eq!(aabb.max.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(solid.footprint.size().x, 20.0, epsilon = 1e-9);
        // The rounded rim removes a little volume from the straight prism.
        assert!(solid.volume() < solid.surface_area() * 5.0);
        assert!(solid.volume() > solid.surface_area() * 4.9);
    }

    #[test]
    fn l_shape_legs_share_a_flush_edge() {
        let solid = build(ShapeKind::LShaped, 20.0, 10.0, 5.0);
        assert_eq!(solid.parts.len(), 2);
        let (long_leg, short_leg) = (&solid.parts[0].footprint, &solid.parts[1].footprint);
        assert!((long_leg.min.y - short_leg.max.y).abs() <= crate::math::TOLERANCE);
        assert_relative_eq!(short_leg.size().x, 9.0, epsilon = 1e-12);
        assert_relative_eq!(long_leg.size().x, 20.0, epsilon = 1e-12);
        assert_relative_eq!(short_leg.size().y, 5.0, epsilon = 1e-12);
        assert_eq!(solid.rim.len(), 6);
        assert_relative_eq!(solid.surface_area(), 20.0 * 5.0 + 9.0 * 5.0, epsilon = 1e-9);
        assert_relative_eq!(solid.volume(), (100.0 + 45.0) * 5.0, epsilon = 1e-9);
    }

    #[test]
    fn builds_are_deterministic() {
        for &shape in ShapeKind::ALL {
            assert_eq!(build(shape, 18.0, 9.0, 4.5), build(shape, 18.0, 9.0, 4.5));
        }
    }

    #[test]
    fn tiny_pools_still_close() {
        for &shape in ShapeKind::ALL {
            let solid = build(shape, 0.5, 0.25, 0.1);
            assert!(solid.parts.iter().all(|p| p.mesh.is_watertight()), "{shape}");
        }
    }

    #[test]
    fn stretched_curved_pools_still_close() {
        for shape in [ShapeKind::Lagoon, ShapeKind::Kidney] {
            for (l, w, d) in [
                (2.0, 100.0, 6.0),
                (2.0, 100.0, 2.0),
                (6.0, 100.0, 6.0),
                (100.0, 2.0, 6.0),
            ] {
                let solid = build(shape, l, w, d);
                let closed = solid.parts.iter().all(|p| p.mesh.is_watertight());
                assert!(closed, "{shape} {l}x{w}");
                let [sx, sy] = shape.profile().footprint_scale;
                let size = solid.footprint.size();
                assert!(size.x <= l * sx + 1e-9 && size.y <= w * sy + 1e-9, "{shape} {l}x{w}");
                assert!(solid.volume() > 0.0);
            }
        }
    }

    #[test]
    fn microscopic_pools_still_close() {
        for &shape in ShapeKind::ALL {
            let solid = build(shape, 1e-4, 1e-4, 1e-4);
            assert!(solid.parts.iter().all(|p| p.mesh.is_watertight()), "{shape}");
            assert!(solid.volume() > 0.0, "{shape}");
        }
    }

    #[test]
    fn inverted_segment_bounds_are_rejected_before_building() {
        let options = BuildOptions {
            min_curve_segments: 10,
            max_curve_segments: 2,
            ..BuildOptions::default()
        };
        let err = BuildPoolSolid::new(ShapeKind::Lagoon, &Dimensions::default())
            .execute(&options)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::PoolscapeError::Config(crate::error::ConfigError::OutOfRange {
                name: "min_curve_segments",
                ..
            })
        ));
    }

    #[test]
    fn footprint_fraction_lands_on_edges() {
        let fp = Footprint {
            min: Point2::new(-4.0, -2.0),
            max: Point2::new(4.0, 2.0),
        };
        assert_relative_eq!(fp.at_fraction(0.5, -0.5), Point2::new(4.0, -2.0));
        assert_relative_eq!(fp.at_fraction(0.0, 0.0), Point2::origin());
    }
}
