use crate::color::Color;
use crate::config::BuildOptions;
use crate::error::Result;
use crate::math::{Point2, Point3, Vector3};
use crate::operations::creation::MakeBox;
use crate::pool::{GeneratedSolid, ShapeKind};
use crate::tessellation::{TessellateSolid, TriangleMesh};
use crate::topology::TopologyStore;

use super::description::{LightSource, Material, SceneMesh};
use super::LightingProfile;

const STEP_COUNT: u32 = 3;
/// Tread depth as a share of the pool length.
const STEP_TREAD_FRACTION: f64 = 0.05;
/// Step width as a share of the pool width.
const STEP_WIDTH_FRACTION: f64 = 0.35;
/// Where the steps start along the length; curved shells start further in.
const STEP_START_FRACTION: f64 = -0.5;
const CURVED_STEP_START_FRACTION: f64 = -0.4;

/// Equipment pad size; it sits off the `(+x, -z)` corner beyond the coping.
const PAD_SIZE: [f64; 3] = [6.0, 0.5, 4.0];
/// Gap between the outer edge of the coping and the pad.
const PAD_CLEARANCE: f64 = 1.0;

const BASIN_DEPTH: f64 = 1.5;
const BASIN_WIDTH: f64 = 2.0;
/// Top of the catch basin below the rim.
const BASIN_DROP: f64 = 0.5;

/// Underwater lights along each part's long axis, at mid depth.
const POOL_LIGHT_FRACTIONS: [f64; 2] = [-0.25, 0.25];
const POOL_LIGHT_COLOR: Color = Color::from_hex(0xbde7ff);
const POOL_LIGHT_RANGE: f64 = 12.0;

const CONCRETE: Material = Material::opaque(Color::from_hex(0x9e9e9e), 0.95, 0.0, 0.05);

/// Entry steps, equipment pad and, for infinity pools, the catch basin.
///
/// Steps are placed at fractions of the pool footprint and the pad at a fixed
/// offset from it, so fixtures follow the pool as it is resized.
///
/// # Errors
///
/// Returns an error if a fixture box is degenerate, which only happens for
/// invalid dimensions.
pub fn fixture_meshes(
    solid: &GeneratedSolid,
    finish: Material,
    options: &BuildOptions,
) -> Result<Vec<SceneMesh>> {
    let mut meshes = Vec::new();

    let Some(first) = solid.parts.first() else {
        return Ok(meshes);
    };
    let fp = first.footprint;
    let size = fp.size();
    let depth = solid.dimensions.depth();

    let start_fraction = if solid.shape.profile().bevel {
        CURVED_STEP_START_FRACTION
    } else {
        STEP_START_FRACTION
    };
    let start = fp.at_fraction(start_fraction, 0.0);
    let tread = size.x * STEP_TREAD_FRACTION;
    let half_width = size.y * STEP_WIDTH_FRACTION / 2.0;
    let riser = depth / f64::from(STEP_COUNT + 1);
    for k in 1..=STEP_COUNT {
        let step = box_mesh(&MakeBox::new(
            Point3::new(start.x, -depth, start.y - half_width),
            Point3::new(
                start.x + tread * f64::from(k),
                -riser * f64::from(k),
                start.y + half_width,
            ),
        ))?;
        meshes.push(SceneMesh::new(format!("step-{k}"), &step, finish));
    }

    let pad_offset = options.coping_width + PAD_CLEARANCE;
    let pad = box_mesh(&MakeBox::centered(
        Point3::new(
            solid.footprint.max.x + pad_offset + PAD_SIZE[0] / 2.0,
            PAD_SIZE[1] / 2.0,
            solid.footprint.min.y - pad_offset - PAD_SIZE[2] / 2.0,
        ),
        Vector3::from(PAD_SIZE),
    ))?;
    meshes.push(SceneMesh::new("equipment-pad", &pad, CONCRETE));

    if solid.shape == ShapeKind::Infinity {
        let z0 = solid.footprint.max.y + options.coping_width;
        let basin = box_mesh(&MakeBox::new(
            Point3::new(solid.footprint.min.x, -BASIN_DROP - BASIN_DEPTH, z0),
            Point3::new(solid.footprint.max.x, -BASIN_DROP, z0 + BASIN_WIDTH),
        ))?;
        meshes.push(SceneMesh::new("catch-basin", &basin, finish));
    }

    Ok(meshes)
}

/// Underwater point lights for every part. Daylight profiles switch them
/// off, in which case none are emitted.
#[must_use]
pub fn pool_lights(solid: &GeneratedSolid, lighting: &LightingProfile) -> Vec<LightSource> {
    if lighting.pool_light_intensity <= 0.0 {
        return Vec::new();
    }
    let y = -solid.dimensions.depth() / 2.0;
    solid
        .parts
        .iter()
        .flat_map(|part| {
            POOL_LIGHT_FRACTIONS
                .iter()
                .map(move |&fx| part.footprint.at_fraction(fx, 0.0))
        })
        .map(|p: Point2| LightSource::Point {
            color: POOL_LIGHT_COLOR,
            intensity: lighting.pool_light_intensity,
            position: Point3::new(p.x, y, p.y),
            distance: POOL_LIGHT_RANGE,
        })
        .collect()
}

fn box_mesh(op: &MakeBox) -> Result<TriangleMesh> {
    let mut store = TopologyStore::new();
    let solid = op.execute(&mut store)?;
    TessellateSolid::new(solid).execute(&store)
}
