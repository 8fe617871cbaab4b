//! Backyard scene: lighting, water, fixtures, props and the composer that
//! turns a pool design into renderer-ready data.

mod composer;
mod coping;
mod description;
mod elements;
mod fixtures;
mod lighting;
mod water;

pub use composer::ComposeScene;
pub use coping::coping_ring;
pub use description::{
    LightSource, Material, MeshData, PropInstance, SceneDescription, SceneMesh, WaterSurface,
};
pub use elements::{ring_position, ElementCategory, ElementKind, ElementProfile, SceneElement};
pub use fixtures::{fixture_meshes, pool_lights};
pub use lighting::{EnvironmentPreset, LightingProfile, TimeOfDay};
pub use water::{water_planes, WaterFrame, WaterPlane};
