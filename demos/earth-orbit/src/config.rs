use serde::Deserialize;
use orrery_engine::{ConfigError, ControlsConfig};

/// Inward-facing sky sphere.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    pub radius: f32,
    pub width_segments: u32,
    /// Zero clamps up to the minimum tessellation.
    pub height_segments: u32,
    pub texture: String,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            width_segments: 500,
            height_segments: 0,
            texture: "textures/bg.jpg".into(),
        }
    }
}

/// The emissive body at the center.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StarConfig {
    pub radius: f32,
    /// Distance from the origin along +X.
    pub offset: f32,
    pub texture: String,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            radius: 3.0,
            offset: 1.0,
            texture: "textures/sun.jpg".into(),
        }
    }
}

/// The lit body riding the orbit pivot.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlanetConfig {
    pub name: String,
    pub radius: f32,
    pub base_radius: f32,
    pub offset: f32,
    pub texture: String,
    /// Radians per tick.
    pub orbital_rate: f32,
    /// Radians per tick.
    pub spin_rate: f32,
    /// Half the width of the orbit marker.
    pub ring_half_width: f32,
}

impl PlanetConfig {
    pub fn orbital_radius(&self) -> f32 {
        self.base_radius + self.offset
    }
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            name: "earth".into(),
            radius: 1.0,
            base_radius: 8.0,
            offset: 0.5,
            texture: "textures/earth.jpg".into(),
            orbital_rate: 0.01,
            spin_rate: 0.03,
            ring_half_width: 0.05,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub point_color: u32,
    pub point_intensity: f32,
    pub point_range: f32,
    pub ambient_color: u32,
    pub ambient_intensity: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            point_color: 0xffffff,
            point_intensity: 2.0,
            point_range: 100.0,
            ambient_color: 0x404040,
            ambient_intensity: 1.0,
        }
    }
}

/// Every tunable of the earth-orbit scene. Missing JSON fields keep defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrbitSceneConfig {
    pub backdrop: BackdropConfig,
    pub star: StarConfig,
    pub planet: PlanetConfig,
    pub lights: LightConfig,
    pub controls: ControlsConfig,
}

impl OrbitSceneConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("backdrop.radius", self.backdrop.radius)?;
        positive("star.radius", self.star.radius)?;
        positive("planet.radius", self.planet.radius)?;
        positive("planet.ring_half_width", self.planet.ring_half_width)?;

        let radius = self.planet.orbital_radius();
        positive("planet orbital radius", radius)?;
        if self.planet.ring_half_width >= radius {
            return Err(ConfigError::invalid(format!(
                "ring half width {} must be smaller than the orbital radius {}",
                self.planet.ring_half_width, radius
            )));
        }

        for (name, value) in [
            ("star.offset", self.star.offset),
            ("planet.orbital_rate", self.planet.orbital_rate),
            ("planet.spin_rate", self.planet.spin_rate),
            ("lights.point_intensity", self.lights.point_intensity),
            ("lights.ambient_intensity", self.lights.ambient_intensity),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid(format!("{name} must be finite")));
            }
        }

        let controls = &self.controls;
        if !(0.0..=1.0).contains(&controls.damping_factor) {
            return Err(ConfigError::invalid("controls.damping_factor must be within [0, 1]"));
        }
        if !(controls.min_distance >= 0.0 && controls.min_distance <= controls.max_distance) {
            return Err(ConfigError::invalid(
                "controls distances must satisfy 0 <= min_distance <= max_distance",
            ));
        }
        Ok(())
    }
}

fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(format!("{name} must be positive, got {value}")))
    }
}
