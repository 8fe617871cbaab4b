use crate::color::Color;

keyed_enum! {
    /// Interior surface finish of the pool shell.
    pub enum FinishKind (fallback = Plaster) {
        Plaster => "plaster",
        PebbleTec => "pebbleTec",
        GlassTile => "glassTile",
        Quartzite => "quartzite",
        Fiberglass => "fiberglass",
    }
}

impl FinishKind {
    /// Returns the static profile for this finish.
    #[must_use]
    pub fn profile(self) -> &'static FinishProfile {
        match self {
            Self::Plaster => &FINISHES[0],
            Self::PebbleTec => &FINISHES[1],
            Self::GlassTile => &FINISHES[2],
            Self::Quartzite => &FINISHES[3],
            Self::Fiberglass => &FINISHES[4],
        }
    }
}

/// Display and cost attributes of a finish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinishProfile {
    pub kind: FinishKind,
    pub name: &'static str,
    pub color: Color,
    pub roughness: f64,
    pub metalness: f64,
    pub reflectivity: f64,
    pub cost_per_sq_ft: f64,
    pub description: &'static str,
}

static FINISHES: [FinishProfile; 5] = [
    FinishProfile {
        kind: FinishKind::Plaster,
        name: "White Plaster",
        color: Color::from_hex(0xf5f5f0),
        roughness: 0.9,
        metalness: 0.0,
        reflectivity: 0.1,
        cost_per_sq_ft: 45.0,
        description: "Classic smooth finish, bright aqua water",
    },
    FinishProfile {
        kind: FinishKind::PebbleTec,
        name: "PebbleTec",
        color: Color::from_hex(0x7a8b99),
        roughness: 0.8,
        metalness: 0.0,
        reflectivity: 0.2,
        cost_per_sq_ft: 85.0,
        description: "Natural pebble aggregate, durable and slip resistant",
    },
    FinishProfile {
        kind: FinishKind::GlassTile,
        name: "Glass Tile",
        color: Color::from_hex(0x3fa9d6),
        roughness: 0.1,
        metalness: 0.3,
        reflectivity: 0.9,
        cost_per_sq_ft: 150.0,
        description: "Iridescent full-tile interior",
    },
    FinishProfile {
        kind: FinishKind::Quartzite,
        name: "Quartzite",
        color: Color::from_hex(0xb8c4cc),
        roughness: 0.6,
        metalness: 0.1,
        reflectivity: 0.4,
        cost_per_sq_ft: 70.0,
        description: "Crushed quartz blend with a subtle sparkle",
    },
    FinishProfile {
        kind: FinishKind::Fiberglass,
        name: "Fiberglass",
        color: Color::from_hex(0xe6f2fa),
        roughness: 0.3,
        metalness: 0.0,
        reflectivity: 0.6,
        cost_per_sq_ft: 60.0,
        description: "Smooth gelcoat shell, low maintenance",
    },
];
