use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::math::{Point3, Vector3};
use crate::pool::Footprint;

/// Golden angle in radians; consecutive elements never line up.
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;
/// Gap between the pool envelope and the first placement ring.
const RING_CLEARANCE: f64 = 6.0;
/// Elements per ring before the radius grows.
const RING_CAPACITY: usize = 8;
const RING_SPACING: f64 = 4.0;

/// Hardscape or landscape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementCategory {
    Hardscape,
    Landscape,
}

/// Catalog of decorative and structural props.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    Patio,
    Deck,
    FirePit,
    OutdoorKitchen,
    Pergola,
    Walkway,
    PalmTree,
    Shrub,
    FlowerBed,
    Lawn,
    Hedge,
    Boulder,
}

/// Catalog entry for an element kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementProfile {
    pub kind: ElementKind,
    pub name: &'static str,
    pub category: ElementCategory,
    /// Width, height and depth in feet.
    pub size: [f64; 3],
    pub color: Color,
    pub unit_cost: f64,
}

impl ElementProfile {
    #[must_use]
    pub fn size(&self) -> Vector3 {
        Vector3::from(self.size)
    }
}

macro_rules! element {
    ($kind:ident, $name:literal, $category:ident, $size:expr, $color:literal, $cost:literal) => {
        ElementProfile {
            kind: ElementKind::$kind,
            name: $name,
            category: ElementCategory::$category,
            size: $size,
            color: Color::from_hex($color),
            unit_cost: $cost,
        }
    };
}

static CATALOG: [ElementProfile; 12] = [
    element!(Patio, "Stone Patio", Hardscape, [12.0, 0.2, 10.0], 0xc2b280, 8_500.0),
    element!(Deck, "Wood Deck", Hardscape, [14.0, 0.4, 10.0], 0x8b5a2b, 12_000.0),
    element!(FirePit, "Fire Pit", Hardscape, [4.0, 1.5, 4.0], 0x5d4037, 3_500.0),
    element!(OutdoorKitchen, "Outdoor Kitchen", Hardscape, [10.0, 3.5, 3.0], 0x9e9e9e, 25_000.0),
    element!(Pergola, "Pergola", Hardscape, [12.0, 9.0, 12.0], 0xa1887f, 9_500.0),
    element!(Walkway, "Walkway", Hardscape, [3.0, 0.1, 16.0], 0xbdb5a6, 2_500.0),
    element!(PalmTree, "Palm Tree", Landscape, [3.0, 18.0, 3.0], 0x2e7d32, 1_800.0),
    element!(Shrub, "Shrub", Landscape, [3.0, 3.0, 3.0], 0x558b2f, 250.0),
    element!(FlowerBed, "Flower Bed", Landscape, [6.0, 1.0, 3.0], 0xec407a, 600.0),
    element!(Lawn, "Lawn", Landscape, [20.0, 0.05, 20.0], 0x7cb342, 3_000.0),
    element!(Hedge, "Hedge", Landscape, [10.0, 5.0, 2.0], 0x33691e, 1_200.0),
    element!(Boulder, "Boulder", Landscape, [3.0, 2.5, 3.0], 0x78909c, 800.0),
];

impl ElementKind {
    #[must_use]
    pub fn profile(self) -> &'static ElementProfile {
        // The catalog is declared in variant order.
        &CATALOG[self as usize]
    }

    /// Every kind in a category, in catalog order.
    pub fn in_category(category: ElementCategory) -> impl Iterator<Item = ElementKind> {
        CATALOG
            .iter()
            .filter(move |p| p.category == category)
            .map(|p| p.kind)
    }
}

/// A placed prop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneElement {
    pub id: u32,
    pub kind: ElementKind,
    pub position: Point3,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub dragging: bool,
}

impl SceneElement {
    #[must_use]
    pub fn new(id: u32, kind: ElementKind, position: Point3) -> Self {
        Self {
            id,
            kind,
            position,
            selected: false,
            dragging: false,
        }
    }

    #[must_use]
    pub fn profile(&self) -> &'static ElementProfile {
        self.kind.profile()
    }

    /// Whether the renderer should draw the element highlighted.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.selected || self.dragging
    }

    #[must_use]
    pub fn with_position(self, position: Point3) -> Self {
        Self { position, ..self }
    }
}

/// Default ground position of the `index`-th element around a pool.
///
/// Elements spiral around the footprint center at golden-angle steps, on rings
/// just outside the footprint's half diagonal.
#[must_use]
pub fn ring_position(index: usize, footprint: &Footprint) -> Point3 {
    #[allow(clippy::cast_precision_loss)]
    let (step, ring) = (index as f64, (index / RING_CAPACITY) as f64);
    let radius = footprint.size().norm() / 2.0 + RING_CLEARANCE + RING_SPACING * ring;
    let angle = step * GOLDEN_ANGLE;
    let center = footprint.center();
    Point3::new(
        center.x + radius * angle.cos(),
        0.0,
        center.y + radius * angle.sin(),
    )
}
