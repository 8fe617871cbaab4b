use crate::geometry::Outline;
use crate::math::Point2;

keyed_enum! {
    /// Pool silhouette.
    pub enum ShapeKind (fallback = Rectangle) {
        /// Axis-aligned rectangle.
        Rectangle => "rectangle",
        /// Free-form lagoon with two lobes.
        Lagoon => "lagoon",
        /// Kidney bean with a notch on one long side.
        Kidney => "kidney",
        /// Rectangle with a vanishing edge and catch basin.
        Infinity => "infinity",
        /// Two flush rectangular legs.
        LShaped => "lShaped",
        /// Long narrow lap lane.
        Lap => "lap",
    }
}

impl ShapeKind {
    /// Returns the static profile for this shape.
    #[must_use]
    pub fn profile(self) -> &'static ShapeProfile {
        match self {
            Self::Rectangle => &RECTANGLE,
            Self::Lagoon => &LAGOON,
            Self::Kidney => &KIDNEY,
            Self::Infinity => &INFINITY,
            Self::LShaped => &L_SHAPED,
            Self::Lap => &LAP,
        }
    }
}

/// How a shape's outline is built from length and width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Construction {
    /// A rectangle of `length · length_scale` by `width · width_scale`.
    Prism { length_scale: f64, width_scale: f64 },
    /// A closed chain of cubic segments. Each segment is `[c1, c2, to]`; all
    /// points are fractions of `(length, width)` around the center.
    Bezier {
        start: [f64; 2],
        segments: &'static [[[f64; 2]; 3]],
    },
    /// A long leg spanning the full length and a short leg of
    /// `short_leg_fraction · length`, each half the width, sharing one side.
    LShaped { short_leg_fraction: f64 },
}

/// Rule for sizing the water plane inside the shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaterSizing {
    /// Shrink each part's footprint by a margin on every side.
    Inset { length_margin: f64, width_margin: f64 },
    /// Scale the nominal `(length, width)`.
    Scale { length: f64, width: f64 },
}

/// Static description of a pool shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeProfile {
    pub kind: ShapeKind,
    pub name: &'static str,
    pub construction: Construction,
    /// Upper bound of the built footprint relative to `(length, width)`.
    pub footprint_scale: [f64; 2],
    pub water: WaterSizing,
    /// Fixed cost added on top of the shell estimate.
    pub surcharge: f64,
    /// Whether the rim is rounded.
    pub bevel: bool,
}

impl ShapeProfile {
    /// Builds the outline of a single-part shape at the given size, centered
    /// on the origin. Returns `None` for the L-shape, which is built from
    /// two rectangles.
    #[must_use]
    pub fn outline(&self, length: f64, width: f64) -> Option<Outline> {
        match self.construction {
            Construction::Prism {
                length_scale,
                width_scale,
            } => {
                let half = Point2::new(length * length_scale / 2.0, width * width_scale / 2.0);
                Some(Outline::rectangle(Point2::new(-half.x, -half.y), half))
            }
            Construction::Bezier { start, segments } => {
                let p = |[x, y]: [f64; 2]| Point2::new(x, y);
                let unit = segments
                    .iter()
                    .fold(Outline::starting_at(p(start)), |outline, &[c1, c2, to]| {
                        outline.cubic_to(p(c1), p(c2), p(to))
                    });
                Some(unit.scaled(length, width))
            }
            Construction::LShaped { .. } => None,
        }
    }
}

const LAGOON_SEGMENTS: &[[[f64; 2]; 3]] = &[
    [[0.60, 0.33], [0.45, 0.50], [0.25, 0.50]],
    [[0.12, 0.50], [0.05, 0.35], [-0.05, 0.35]],
    [[-0.15, 0.35], [-0.22, 0.60], [-0.40, 0.60]],
    [[-0.55, 0.60], [-0.58, 0.30], [-0.58, 0.05]],
    [[-0.58, -0.25], [-0.50, -0.57], [-0.30, -0.57]],
    [[-0.10, -0.57], [0.10, -0.50], [0.30, -0.50]],
    [[0.50, -0.50], [0.60, -0.30], [0.60, 0.00]],
];

const KIDNEY_SEGMENTS: &[[[f64; 2]; 3]] = &[
    [[0.50, 0.35], [0.38, 0.50], [0.20, 0.50]],
    [[0.05, 0.50], [0.08, 0.22], [0.00, 0.22]],
    [[-0.08, 0.22], [-0.10, 0.50], [-0.25, 0.50]],
    [[-0.42, 0.50], [-0.50, 0.32], [-0.50, 0.10]],
    [[-0.50, -0.25], [-0.38, -0.50], [-0.15, -0.50]],
    [[0.02, -0.50], [0.10, -0.45], [0.25, -0.45]],
    [[0.42, -0.45], [0.50, -0.22], [0.50, 0.05]],
];

static RECTANGLE: ShapeProfile = ShapeProfile {
    kind: ShapeKind::Rectangle,
    name: "Rectangle",
    construction: Construction::Prism {
        length_scale: 1.0,
        width_scale: 1.0,
    },
    footprint_scale: [1.0, 1.0],
    water: WaterSizing::Inset {
        length_margin: 0.4,
        width_margin: 0.4,
    },
    surcharge: 0.0,
    bevel: false,
};

static LAGOON: ShapeProfile = ShapeProfile {
    kind: ShapeKind::Lagoon,
    name: "Lagoon",
    construction: Construction::Bezier {
        start: [0.60, 0.00],
        segments: LAGOON_SEGMENTS,
    },
    footprint_scale: [1.2, 1.2],
    water: WaterSizing::Scale {
        length: 1.1,
        width: 1.1,
    },
    surcharge: 8_500.0,
    bevel: true,
};

static KIDNEY: ShapeProfile = ShapeProfile {
    kind: ShapeKind::Kidney,
    name: "Kidney",
    construction: Construction::Bezier {
        start: [0.50, 0.05],
        segments: KIDNEY_SEGMENTS,
    },
    footprint_scale: [1.0, 1.0],
    water: WaterSizing::Scale {
        length: 0.8,
        width: 0.8,
    },
    surcharge: 4_500.0,
    bevel: true,
};

static INFINITY: ShapeProfile = ShapeProfile {
    kind: ShapeKind::Infinity,
    name: "Infinity Edge",
    construction: Construction::Prism {
        length_scale: 1.0,
        width_scale: 1.0,
    },
    footprint_scale: [1.0, 1.0],
    water: WaterSizing::Inset {
        length_margin: 0.1,
        width_margin: 0.4,
    },
    surcharge: 15_000.0,
    bevel: false,
};

static L_SHAPED: ShapeProfile = ShapeProfile {
    kind: ShapeKind::LShaped,
    name: "L-Shaped",
    construction: Construction::LShaped {
        short_leg_fraction: 0.45,
    },
    footprint_scale: [1.0, 1.0],
    water: WaterSizing::Inset {
        length_margin: 0.4,
        width_margin: 0.4,
    },
    surcharge: 6_000.0,
    bevel: false,
};

static LAP: ShapeProfile = ShapeProfile {
    kind: ShapeKind::Lap,
    name: "Lap Pool",
    construction: Construction::Prism {
        length_scale: 1.7,
        width_scale: 0.55,
    },
    footprint_scale: [1.7, 0.55],
    water: WaterSizing::Scale {
        length: 1.6,
        width: 0.5,
    },
    surcharge: 3_500.0,
    bevel: false,
};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::FlattenParams;
    use crate::math::polygon_2d::{bounds, signed_area};

    #[test]
    fn keys_round_trip() {
        for &kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_key(kind.key()), kind);
            assert_eq!(kind.profile().kind, kind);
        }
    }

    #[test]
    fn unknown_key_falls_back_to_rectangle() {
        assert_eq!(ShapeKind::from_key("unknownXYZ"), ShapeKind::Rectangle);
        assert_eq!(ShapeKind::parse("unknownXYZ"), None);
        let kind: ShapeKind = serde_json::from_str("\"hexagon\"").unwrap();
        assert_eq!(kind, ShapeKind::Rectangle);
    }

    #[test]
    fn serializes_as_camel_case_key() {
        assert_eq!(serde_json::to_string(&ShapeKind::LShaped).unwrap(), "\"lShaped\"");
    }

    #[test]
    fn bezier_outlines_close_on_their_start() {
        for kind in [ShapeKind::Lagoon, ShapeKind::Kidney] {
            let outline = kind.profile().outline(1.0, 1.0).unwrap();
            let last = outline.segments().last().unwrap().end();
            assert!((last - outline.start()).norm() < 1e-12, "{kind}");
        }
    }

    #[test]
    fn bezier_outlines_wind_counter_clockwise() {
        for kind in [ShapeKind::Lagoon, ShapeKind::Kidney] {
            let points = kind.profile().outline(24.0, 12.0).unwrap().flatten(&FlattenParams::default());
            assert!(signed_area(&points) > 0.0, "{kind}");
        }
    }

    #[test]
    fn outline_controls_respect_footprint_scale() {
        for &kind in ShapeKind::ALL {
            let profile = kind.profile();
            let Some(outline) = profile.outline(10.0, 10.0) else {
                continue;
            };
            let (min, max) = outline.control_bounds().unwrap();
            let [sx, sy] = profile.footprint_scale;
            assert!(max.x - min.x <= 10.0 * sx + 1e-9, "{kind}");
            assert!(max.y - min.y <= 10.0 * sy + 1e-9, "{kind}");
        }
    }

    #[test]
    fn kidney_anchors_touch_every_side() {
        let points = ShapeKind::Kidney
            .profile()
            .outline(1.0, 1.0)
            .unwrap()
            .flatten(&FlattenParams::default());
        let (min, max) = bounds(&points).unwrap();
        assert!((min.x + 0.5).abs() < 1e-12);
        assert!((max.x - 0.5).abs() < 1e-12);
        assert!((min.y + 0.5).abs() < 1e-12);
        assert!((max.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn lap_prism_is_long_and_narrow() {
        let outline = ShapeKind::Lap.profile().outline(20.0, 10.0).unwrap();
        let (min, max) = outline.control_bounds().unwrap();
        assert!((max.x - min.x - 34.0).abs() < 1e-9);
        assert!((max.y - min.y - 5.5).abs() < 1e-9);
    }
}
