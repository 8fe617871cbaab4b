use crate::color::Color;
use crate::config::BuildOptions;
use crate::error::Result;
use crate::math::Point3;
use crate::pool::{BuildPoolSolid, GeneratedSolid, PoolSpec};

use super::coping::coping_ring;
use super::description::{
    LightSource, Material, PropInstance, SceneDescription, SceneMesh, WaterSurface,
};
use super::fixtures::{fixture_meshes, pool_lights};
use super::water::{water_planes, WaterFrame};
use super::{LightingProfile, SceneElement};

/// Deepest the still water sits below the rim, as a share of the pool depth.
const MAX_WATER_LINE_FRACTION: f64 = 0.25;

const TRAVERTINE: Material = Material::opaque(Color::from_hex(0xe8dcc4), 0.85, 0.0, 0.15);

/// Composes one frame of the backyard scene.
///
/// The output is a pure function of the pool spec, the elements, the lighting
/// profile, the build options and the elapsed time.
pub struct ComposeScene<'a> {
    spec: &'a PoolSpec,
    elements: &'a [SceneElement],
    lighting: &'a LightingProfile,
    elapsed: f64,
}

impl<'a> ComposeScene<'a> {
    /// Creates a new `ComposeScene` operation at time zero.
    #[must_use]
    pub fn new(
        spec: &'a PoolSpec,
        elements: &'a [SceneElement],
        lighting: &'a LightingProfile,
    ) -> Self {
        Self {
            spec,
            elements,
            lighting,
            elapsed: 0.0,
        }
    }

    /// Evaluates the water animation at `elapsed` seconds.
    #[must_use]
    pub fn at_time(mut self, elapsed: f64) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Builds the pool solid and composes the scene around it.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid or any fixture fails to build.
    pub fn execute(&self, options: &BuildOptions) -> Result<SceneDescription> {
        let solid = BuildPoolSolid::new(self.spec.shape, &self.spec.dimensions).execute(options)?;
        self.execute_with_solid(&solid, options)
    }

    /// Composes the scene around an already built solid.
    ///
    /// The solid must have been built for this spec's shape and dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`](crate::error::ConfigError) for
    /// invalid options, or an error if the coping or any fixture fails to
    /// build.
    pub fn execute_with_solid(
        &self,
        solid: &GeneratedSolid,
        options: &BuildOptions,
    ) -> Result<SceneDescription> {
        options.validate()?;
        let finish = Material::from(self.spec.finish_profile());

        let pool = solid
            .parts
            .iter()
            .enumerate()
            .map(|(i, part)| SceneMesh::new(format!("pool-shell-{i}"), &part.mesh, finish))
            .collect();

        let coping = SceneMesh::new(
            "coping",
            &coping_ring(&solid.rim, options.coping_width, options.coping_height)?,
            TRAVERTINE,
        );

        let frame = WaterFrame::at(self.elapsed);
        let water_line = options
            .water_line
            .min(solid.dimensions.depth() * MAX_WATER_LINE_FRACTION);
        let water_y = -water_line + frame.y_offset;
        let water = water_planes(solid)
            .into_iter()
            .map(|plane| WaterSurface {
                center: Point3::new(plane.center.x, water_y, plane.center.y),
                size: plane.size,
                color: self.lighting.water_color,
                opacity: frame.opacity,
            })
            .collect();

        let fixtures = fixture_meshes(solid, finish, options)?;

        let props = self
            .elements
            .iter()
            .map(|element| {
                let profile = element.profile();
                PropInstance {
                    id: element.id,
                    kind: element.kind,
                    category: profile.category,
                    position: element.position,
                    size: profile.size(),
                    color: profile.color,
                    highlighted: element.is_highlighted(),
                }
            })
            .collect();

        let mut lights = vec![
            LightSource::Ambient {
                color: self.lighting.ambient_color,
                intensity: self.lighting.ambient_intensity,
            },
            LightSource::Directional {
                color: self.lighting.sun_color,
                intensity: self.lighting.sun_intensity,
                position: self.lighting.sun_position(),
            },
        ];
        lights.extend(pool_lights(solid, self.lighting));

        let scene = SceneDescription {
            time_of_day: self.lighting.time_of_day,
            environment: self.lighting.environment,
            pool,
            coping,
            water,
            fixtures,
            props,
            lights,
        };
        tracing::debug!(
            shape = %self.spec.shape,
            time = %self.lighting.time_of_day,
            meshes = scene.pool.len() + scene.fixtures.len() + 1,
            props = scene.props.len(),
            lights = scene.lights.len(),
            "composed scene"
        );
        Ok(scene)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Vector2;
    use crate::pool::{Dimensions, FinishKind, ShapeKind};
    use crate::scene::{ElementKind, EnvironmentPreset, TimeOfDay};

    fn spec(shape: ShapeKind) -> PoolSpec {
        PoolSpec::new(shape, FinishKind::PebbleTec, Dimensions::new(16.0, 8.0, 6.0).unwrap())
    }

    #[test]
    fn still_water_sits_below_the_rim() {
        let spec = spec(ShapeKind::Rectangle);
        let scene = ComposeScene::new(&spec, &[], TimeOfDay::Afternoon.profile())
            .execute(&BuildOptions::default())
            .unwrap();
        assert_eq!(scene.water.len(), 1);
        assert_relative_eq!(scene.water[0].center.y, -0.3);
        assert_relative_eq!(scene.water[0].size, Vector2::new(15.2, 7.2), epsilon = 1e-12);
        assert_relative_eq!(scene.water[0].opacity, 0.82);
        assert_eq!(scene.water[0].color, Color::from_hex(0x29b6f6));
        assert_eq!(scene.environment, EnvironmentPreset::Park);
    }

    #[test]
    fn shallow_pool_keeps_water_above_the_floor() {
        let spec = PoolSpec::new(
            ShapeKind::Rectangle,
            FinishKind::Plaster,
            Dimensions::new(16.0, 8.0, 0.2).unwrap(),
        );
        let options = BuildOptions::default();
        for t in [0.0, 0.5, 1.2, 4.0] {
            let scene = ComposeScene::new(&spec, &[], TimeOfDay::Afternoon.profile())
                .at_time(t)
                .execute(&options)
                .unwrap();
            let y = scene.water[0].center.y;
            assert!(y > -0.2 && y < 0.0, "water y {y}");
        }
        let still = ComposeScene::new(&spec, &[], TimeOfDay::Afternoon.profile())
            .execute(&options)
            .unwrap();
        assert_relative_eq!(still.water[0].center.y, -0.05, epsilon = 1e-12);
    }

    #[test]
    fn microscopic_curved_pools_compose() {
        let options = BuildOptions::default();
        for shape in [ShapeKind::Lagoon, ShapeKind::Kidney] {
            let spec = PoolSpec::new(
                shape,
                FinishKind::Plaster,
                Dimensions::new(1e-4, 1e-4, 1e-4).unwrap(),
            );
            let scene = ComposeScene::new(&spec, &[], TimeOfDay::Sunset.profile())
                .execute(&options)
                .unwrap();
            assert_eq!(scene.pool.len(), 1, "{shape}");
        }
    }

    #[test]
    fn invalid_options_are_an_error() {
        let spec = spec(ShapeKind::Lagoon);
        let solid = BuildPoolSolid::new(spec.shape, &spec.dimensions)
            .execute(&BuildOptions::default())
            .unwrap();
        let options = BuildOptions {
            coping_width: -1.0,
            ..BuildOptions::default()
        };
        let result = ComposeScene::new(&spec, &[], TimeOfDay::Sunset.profile())
            .execute_with_solid(&solid, &options);
        assert!(result.is_err());
    }

    #[test]
    fn finish_material_applies_to_the_shell() {
        let spec = spec(ShapeKind::Rectangle);
        let scene = ComposeScene::new(&spec, &[], TimeOfDay::Sunset.profile())
            .execute(&BuildOptions::default())
            .unwrap();
        let material = scene.pool[0].material;
        assert_relative_eq!(material.roughness, 0.8);
        assert_relative_eq!(material.metalness, 0.0);
        assert_eq!(material.color.to_string(), "#7a8b99");
        assert_eq!(scene.coping.material, TRAVERTINE);
    }

    #[test]
    fn lights_follow_the_profile() {
        let spec = spec(ShapeKind::Rectangle);
        let day = ComposeScene::new(&spec, &[], TimeOfDay::Morning.profile())
            .execute(&BuildOptions::default())
            .unwrap();
        assert_eq!(day.lights.len(), 2);
        let night = ComposeScene::new(&spec, &[], TimeOfDay::Night.profile())
            .execute(&BuildOptions::default())
            .unwrap();
        assert_eq!(night.lights.len(), 4);
        assert!(matches!(
            night.lights[0],
            LightSource::Ambient { intensity, .. } if (intensity - 0.15).abs() < 1e-12
        ));
    }

    #[test]
    fn water_animates_with_time_only() {
        let spec = spec(ShapeKind::Kidney);
        let options = BuildOptions::default();
        let lighting = TimeOfDay::Sunset.profile();
        let a = ComposeScene::new(&spec, &[], lighting).at_time(2.0).execute(&options).unwrap();
        let b = ComposeScene::new(&spec, &[], lighting).at_time(2.0).execute(&options).unwrap();
        let c = ComposeScene::new(&spec, &[], lighting).at_time(3.0).execute(&options).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.water, c.water);
        assert_eq!(a.pool, c.pool);
        assert_relative_eq!(a.water[0].center.y, -0.3 + 0.03 * (1.6_f64).sin(), epsilon = 1e-12);
    }

    #[test]
    fn props_mirror_elements() {
        let spec = spec(ShapeKind::Rectangle);
        let mut palm = SceneElement::new(7, ElementKind::PalmTree, Point3::new(12.0, 0.0, 3.0));
        palm.selected = true;
        let elements = [palm, SceneElement::new(8, ElementKind::Deck, Point3::origin())];
        let scene = ComposeScene::new(&spec, &elements, TimeOfDay::Sunset.profile())
            .execute(&BuildOptions::default())
            .unwrap();
        assert_eq!(scene.props.len(), 2);
        assert!(scene.props[0].highlighted);
        assert!(!scene.props[1].highlighted);
        assert_eq!(scene.props[0].position, Point3::new(12.0, 0.0, 3.0));
    }

    #[test]
    fn coping_is_watertight_for_every_shape() {
        let options = BuildOptions::default();
        for &shape in ShapeKind::ALL {
            let solid = BuildPoolSolid::new(shape, &Dimensions::new(24.0, 12.0, 6.0).unwrap())
                .execute(&options)
                .unwrap();
            let ring = coping_ring(&solid.rim, options.coping_width, options.coping_height).unwrap();
            assert!(ring.is_watertight(), "{shape}");
        }
    }

    #[test]
    fn exports_json() {
        let spec = spec(ShapeKind::LShaped);
        let scene = ComposeScene::new(&spec, &[], TimeOfDay::Night.profile())
            .execute(&BuildOptions::default())
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&scene.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["timeOfDay"], "night");
        assert_eq!(json["pool"].as_array().unwrap().len(), 2);
        assert_eq!(json["lights"][1]["type"], "directional");
    }
}
