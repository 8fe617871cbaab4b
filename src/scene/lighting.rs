use serde::Serialize;

use crate::color::Color;
use crate::math::Point3;

keyed_enum! {
    /// Time of day driving the scene lighting.
    pub enum TimeOfDay (fallback = Sunset) {
        Morning => "morning",
        Afternoon => "afternoon",
        Sunset => "sunset",
        Night => "night",
    }
}

impl TimeOfDay {
    /// Returns the static lighting profile for this time of day.
    #[must_use]
    pub fn profile(self) -> &'static LightingProfile {
        match self {
            Self::Morning => &MORNING,
            Self::Afternoon => &AFTERNOON,
            Self::Sunset => &SUNSET,
            Self::Night => &NIGHT,
        }
    }
}

keyed_enum! {
    /// Image-based environment the renderer should load.
    pub enum EnvironmentPreset (fallback = Sunset) {
        Dawn => "dawn",
        Park => "park",
        Sunset => "sunset",
        Night => "night",
    }
}

/// Scene lighting for one time of day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LightingProfile {
    pub time_of_day: TimeOfDay,
    pub ambient_color: Color,
    pub ambient_intensity: f64,
    pub sun_color: Color,
    pub sun_intensity: f64,
    pub sun_position: [f64; 3],
    pub environment: EnvironmentPreset,
    /// Base color of the water surface.
    pub water_color: Color,
    /// Intensity of each underwater pool light; zero in daylight.
    pub pool_light_intensity: f64,
}

impl LightingProfile {
    #[must_use]
    pub fn sun_position(&self) -> Point3 {
        Point3::from(self.sun_position)
    }
}

static MORNING: LightingProfile = LightingProfile {
    time_of_day: TimeOfDay::Morning,
    ambient_color: Color::from_hex(0xfff4e0),
    ambient_intensity: 0.5,
    sun_color: Color::from_hex(0xffe0b2),
    sun_intensity: 0.9,
    sun_position: [-20.0, 15.0, 10.0],
    environment: EnvironmentPreset::Dawn,
    water_color: Color::from_hex(0x4fc3f7),
    pool_light_intensity: 0.0,
};

static AFTERNOON: LightingProfile = LightingProfile {
    time_of_day: TimeOfDay::Afternoon,
    ambient_color: Color::from_hex(0xffffff),
    ambient_intensity: 0.7,
    sun_color: Color::from_hex(0xffffff),
    sun_intensity: 1.2,
    sun_position: [0.0, 30.0, 5.0],
    environment: EnvironmentPreset::Park,
    water_color: Color::from_hex(0x29b6f6),
    pool_light_intensity: 0.0,
};

static SUNSET: LightingProfile = LightingProfile {
    time_of_day: TimeOfDay::Sunset,
    ambient_color: Color::from_hex(0xffcc80),
    ambient_intensity: 0.4,
    sun_color: Color::from_hex(0xff8a65),
    sun_intensity: 0.8,
    sun_position: [25.0, 8.0, -10.0],
    environment: EnvironmentPreset::Sunset,
    water_color: Color::from_hex(0x1e88e5),
    pool_light_intensity: 0.5,
};

static NIGHT: LightingProfile = LightingProfile {
    time_of_day: TimeOfDay::Night,
    ambient_color: Color::from_hex(0x3949ab),
    ambient_intensity: 0.15,
    sun_color: Color::from_hex(0x9fa8da),
    sun_intensity: 0.1,
    sun_position: [-10.0, 25.0, -15.0],
    environment: EnvironmentPreset::Night,
    water_color: Color::from_hex(0x0d47a1),
    pool_light_intensity: 2.5,
};
