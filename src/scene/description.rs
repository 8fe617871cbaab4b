use serde::Serialize;

use crate::color::Color;
use crate::error::Result;
use crate::math::{Point3, Vector2, Vector3};
use crate::pool::FinishProfile;
use crate::tessellation::TriangleMesh;

use super::{ElementCategory, ElementKind, EnvironmentPreset, TimeOfDay};

/// Renderer-ready mesh buffers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<[u32; 3]>,
}

#[allow(clippy::cast_possible_truncation)]
fn to_f32(v: &Vector3) -> [f32; 3] {
    [v.x as f32, v.y as f32, v.z as f32]
}

impl From<&TriangleMesh> for MeshData {
    fn from(mesh: &TriangleMesh) -> Self {
        Self {
            positions: mesh.vertices.iter().map(|p| to_f32(&p.coords)).collect(),
            normals: mesh.normals.iter().map(to_f32).collect(),
            indices: mesh.indices.clone(),
        }
    }
}

/// Physically based surface parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    pub color: Color,
    pub roughness: f64,
    pub metalness: f64,
    pub reflectivity: f64,
    pub opacity: f64,
}

impl Material {
    #[must_use]
    pub const fn opaque(color: Color, roughness: f64, metalness: f64, reflectivity: f64) -> Self {
        Self {
            color,
            roughness,
            metalness,
            reflectivity,
            opacity: 1.0,
        }
    }
}

impl From<&FinishProfile> for Material {
    fn from(finish: &FinishProfile) -> Self {
        Self::opaque(finish.color, finish.roughness, finish.metalness, finish.reflectivity)
    }
}

/// A named mesh with its material.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneMesh {
    pub name: String,
    pub material: Material,
    pub mesh: MeshData,
}

impl SceneMesh {
    #[must_use]
    pub fn new(name: impl Into<String>, mesh: &TriangleMesh, material: Material) -> Self {
        Self {
            name: name.into(),
            material,
            mesh: MeshData::from(mesh),
        }
    }
}

/// A light in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LightSource {
    Ambient {
        color: Color,
        intensity: f64,
    },
    Directional {
        color: Color,
        intensity: f64,
        position: Point3,
    },
    Point {
        color: Color,
        intensity: f64,
        position: Point3,
        /// Distance at which the light falls off to zero.
        distance: f64,
    },
}

/// A semi-transparent water plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaterSurface {
    pub center: Point3,
    /// Extent along scene x and z.
    pub size: Vector2,
    pub color: Color,
    pub opacity: f64,
}

/// A placed prop for the renderer to instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropInstance {
    pub id: u32,
    pub kind: ElementKind,
    pub category: ElementCategory,
    pub position: Point3,
    pub size: Vector3,
    pub color: Color,
    pub highlighted: bool,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDescription {
    pub time_of_day: TimeOfDay,
    pub environment: EnvironmentPreset,
    pub pool: Vec<SceneMesh>,
    pub coping: SceneMesh,
    pub water: Vec<WaterSurface>,
    pub fixtures: Vec<SceneMesh>,
    pub props: Vec<PropInstance>,
    pub lights: Vec<LightSource>,
}

impl SceneDescription {
    /// Serializes the scene as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PoolscapeError::Export`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
