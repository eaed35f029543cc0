// config.rs - Scene configuration, loadable from JSON
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// Full scene configuration. Missing fields in a config file take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SceneConfig {
    pub fog: FogConfig,
    pub camera: CameraConfig,
    pub hemisphere_light: HemisphereLightConfig,
    pub directional_light: DirectionalLightConfig,
    pub water: WaterConfig,
    pub sky: SkyConfig,
    pub movement: MovementConfig,
    pub frame: FrameConfig,
    pub headset: HeadsetConfig,
}

impl SceneConfig {
    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let text = std::fs::read_to_string(path).map_err(|source| SceneError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse from a JSON string
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Exponential-squared fog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FogConfig {
    pub enabled: bool,
    pub color: u32,
    pub density: f32,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: 0x000010,
            density: 0.002,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 5000.0,
            position: [0.0, 2.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HemisphereLightConfig {
    pub sky_color: u32,
    pub ground_color: u32,
    pub intensity: f32,
}

impl Default for HemisphereLightConfig {
    fn default() -> Self {
        Self {
            sky_color: 0x111122,
            ground_color: 0x000011,
            intensity: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionalLightConfig {
    pub color: u32,
    pub intensity: f32,
    pub position: [f32; 3],
}

impl Default for DirectionalLightConfig {
    fn default() -> Self {
        Self {
            color: 0xffffff,
            intensity: 0.2,
            position: [10.0, 10.0, 10.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterConfig {
    /// Side length of the square water plane
    pub size: f32,
    /// Grid subdivisions per side of the plane mesh
    pub segments: u32,
    pub texture_width: u32,
    pub texture_height: u32,
    pub alpha: f32,
    pub sun_direction: [f32; 3],
    pub sun_color: u32,
    pub water_color: u32,
    pub distortion_scale: f32,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            size: 10_000.0,
            segments: 1,
            texture_width: 512,
            texture_height: 512,
            alpha: 1.0,
            sun_direction: [0.0, 0.0, 0.0],
            sun_color: 0xffffff,
            water_color: 0x001020,
            distortion_scale: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    pub scale: f32,
    pub turbidity: f32,
    pub rayleigh: f32,
    pub mie_coefficient: f32,
    pub mie_directional_g: f32,
    /// Sun elevation above the horizon in degrees; negative is night
    pub sun_elevation_degrees: f32,
    pub sun_azimuth_degrees: f32,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            scale: 10_000.0,
            turbidity: 20.0,
            rayleigh: 0.1,
            mie_coefficient: 0.005,
            mie_directional_g: 0.7,
            sun_elevation_degrees: -4.0,
            sun_azimuth_degrees: 180.0,
        }
    }
}

/// Key codes driving the first-person camera
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: String,
    pub backward: String,
    pub left: String,
    pub right: String,
    pub speed_modifier: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "KeyW".to_string(),
            backward: "KeyS".to_string(),
            left: "KeyA".to_string(),
            right: "KeyD".to_string(),
            speed_modifier: "ShiftLeft".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Units per tick
    pub base_speed: f32,
    pub modifier_multiplier: f32,
    pub bindings: KeyBindings,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            base_speed: 0.1,
            modifier_multiplier: 3.0,
            bindings: KeyBindings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Wave time added per tick, independent of wall-clock time
    pub wave_time_step: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            wave_time_step: 1.0 / 60.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadsetConfig {
    /// Eye separation in world units
    pub ipd: f32,
}

impl Default for HeadsetConfig {
    fn default() -> Self {
        Self { ipd: 0.064 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_scene() {
        let config = SceneConfig::default();
        assert_eq!(config.fog.color, 0x000010);
        assert_eq!(config.fog.density, 0.002);
        assert_eq!(config.camera.fov_y_degrees, 75.0);
        assert_eq!(config.camera.position, [0.0, 2.0, 0.0]);
        assert_eq!(config.water.water_color, 0x001020);
        assert_eq!(config.sky.turbidity, 20.0);
        assert_eq!(config.movement.base_speed, 0.1);
        assert_eq!(config.movement.bindings.speed_modifier, "ShiftLeft");
        assert!((config.frame.wave_time_step - 1.0 / 60.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = SceneConfig::from_json("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = SceneConfig::from_json(
            r#"{ "movement": { "base_speed": 0.5 }, "sky": { "turbidity": 2.0 } }"#,
        )
        .unwrap();

        assert_eq!(config.movement.base_speed, 0.5);
        assert_eq!(config.movement.modifier_multiplier, 3.0);
        assert_eq!(config.movement.bindings.forward, "KeyW");
        assert_eq!(config.sky.turbidity, 2.0);
        assert_eq!(config.sky.rayleigh, 0.1);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let result = SceneConfig::from_json("{ not json");
        assert!(matches!(result, Err(SceneError::ConfigParse(_))));
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = SceneConfig::load(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(SceneError::ConfigRead { .. })));
    }

    #[test]
    fn test_serialized_config_parses_back() {
        let mut config = SceneConfig::default();
        config.movement.bindings.forward = "ArrowUp".to_string();
        let text = serde_json::to_string_pretty(&config).unwrap();
        assert_eq!(SceneConfig::from_json(&text).unwrap(), config);
    }
}
