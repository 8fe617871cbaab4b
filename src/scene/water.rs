use crate::math::{Point2, Vector2};
use crate::pool::{GeneratedSolid, WaterSizing};

/// Vertical bob amplitude of the water surface, in feet.
const BOB_AMPLITUDE: f64 = 0.03;
/// Angular frequency of the bob, in radians per second.
const BOB_FREQUENCY: f64 = 0.8;
const BASE_OPACITY: f64 = 0.82;
const SHIMMER_AMPLITUDE: f64 = 0.06;
const SHIMMER_FREQUENCY: f64 = 1.6;

/// A rectangular water plane in scene `(x, z)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterPlane {
    pub center: Point2,
    pub size: Vector2,
}

/// Sizes the water planes for a built solid using its shape's rule.
///
/// Inset rules shrink every part's footprint by the per-side margin, clamped
/// to a quarter of the part so tiny pools keep a positive plane. Scale rules
/// give one plane of the nominal size times the factors, centered on the
/// solid's footprint.
#[must_use]
pub fn water_planes(solid: &GeneratedSolid) -> Vec<WaterPlane> {
    match solid.shape.profile().water {
        WaterSizing::Inset {
            length_margin,
            width_margin,
        } => solid
            .parts
            .iter()
            .map(|part| {
                let size = part.footprint.size();
                let margin = Vector2::new(
                    length_margin.min(size.x / 4.0),
                    width_margin.min(size.y / 4.0),
                );
                WaterPlane {
                    center: part.footprint.center(),
                    size: size - margin * 2.0,
                }
            })
            .collect(),
        WaterSizing::Scale { length, width } => vec![WaterPlane {
            center: solid.footprint.center(),
            size: Vector2::new(
                solid.dimensions.length() * length,
                solid.dimensions.width() * width,
            ),
        }],
    }
}

/// Water animation state at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterFrame {
    /// Offset added to the still water height.
    pub y_offset: f64,
    pub opacity: f64,
}

impl WaterFrame {
    /// Evaluates the animation at `elapsed` seconds.
    #[must_use]
    pub fn at(elapsed: f64) -> Self {
        Self {
            y_offset: BOB_AMPLITUDE * (BOB_FREQUENCY * elapsed).sin(),
            opacity: BASE_OPACITY + SHIMMER_AMPLITUDE * (SHIMMER_FREQUENCY * elapsed).sin(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::config::BuildOptions;
    use crate::pool::{BuildPoolSolid, Dimensions, ShapeKind};

    fn solid(shape: ShapeKind, l: f64, w: f64) -> GeneratedSolid {
        BuildPoolSolid::new(shape, &Dimensions::new(l, w, 6.0).unwrap())
            .execute(&BuildOptions::default())
            .unwrap()
    }

    #[test]
    fn rectangle_water_is_size_minus_point_eight() {
        let planes = water_planes(&solid(ShapeKind::Rectangle, 16.0, 8.0));
        assert_eq!(planes.len(), 1);
        assert_relative_eq!(planes[0].size, Vector2::new(15.2, 7.2), epsilon = 1e-12);
        assert_relative_eq!(planes[0].center, Point2::origin(), epsilon = 1e-12);
    }

    #[test]
    fn lagoon_water_scales_nominal_size() {
        let planes = water_planes(&solid(ShapeKind::Lagoon, 24.0, 12.0));
        assert_relative_eq!(planes[0].size, Vector2::new(26.4, 13.2), epsilon = 1e-12);
    }

    #[test]
    fn l_shape_has_a_plane_per_leg() {
        assert_eq!(water_planes(&solid(ShapeKind::LShaped, 20.0, 10.0)).len(), 2);
    }

    #[test]
    fn water_is_strictly_inside_every_footprint() {
        for &shape in ShapeKind::ALL {
            for (l, w) in [(24.0, 12.0), (1.0, 0.5), (60.0, 8.0)] {
                let built = solid(shape, l, w);
                let footprint = built.footprint.size();
                for plane in water_planes(&built) {
                    assert!(plane.size.x > 0.0 && plane.size.y > 0.0, "{shape}");
                    assert!(plane.size.x < footprint.x, "{shape} {l}x{w}");
                    assert!(plane.size.y < footprint.y, "{shape} {l}x{w}");
                }
            }
        }
    }

    #[test]
    fn animation_is_periodic_and_bounded() {
        let still = WaterFrame::at(0.0);
        assert_relative_eq!(still.y_offset, 0.0);
        assert_relative_eq!(still.opacity, 0.82);
        let period = std::f64::consts::TAU / 0.8;
        assert_relative_eq!(
            WaterFrame::at(1.3).y_offset,
            WaterFrame::at(1.3 + period).y_offset,
            epsilon = 1e-12
        );
        for step in 0..100 {
            let frame = WaterFrame::at(f64::from(step) * 0.37);
            assert!(frame.y_offset.abs() <= 0.03 + 1e-12);
            assert!(frame.opacity >= 0.76 - 1e-12 && frame.opacity <= 0.88 + 1e-12);
        }
    }
}
