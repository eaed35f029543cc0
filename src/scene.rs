use glam::Vec3;

use crate::config::{DirectionalLightConfig, FogConfig, HemisphereLightConfig, SceneConfig};
use crate::math::rgb_from_hex;
use crate::sky::Sky;
use crate::types::EnvironmentUniform;
use crate::water::Water;

/// Exponential-squared fog: `factor = 1 - exp(-(density * depth)^2)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogExp2 {
    pub color: [f32; 3],
    pub density: f32,
}

impl FogExp2 {
    pub fn from_config(config: &FogConfig) -> Option<Self> {
        config.enabled.then(|| Self {
            color: rgb_from_hex(config.color),
            density: config.density,
        })
    }

    /// Blend factor toward the fog color at the given view depth
    pub fn factor(&self, depth: f32) -> f32 {
        let d = self.density * depth;
        (1.0 - (-d * d).exp()).clamp(0.0, 1.0)
    }
}

/// Sky/ground gradient ambient light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemisphereLight {
    pub sky_color: [f32; 3],
    pub ground_color: [f32; 3],
    pub intensity: f32,
}

impl HemisphereLight {
    pub fn from_config(config: &HemisphereLightConfig) -> Self {
        Self {
            sky_color: rgb_from_hex(config.sky_color),
            ground_color: rgb_from_hex(config.ground_color),
            intensity: config.intensity,
        }
    }
}

/// Directional light shining from `position` toward the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    pub fn from_config(config: &DirectionalLightConfig) -> Self {
        Self {
            color: rgb_from_hex(config.color),
            intensity: config.intensity,
            position: Vec3::from_array(config.position),
        }
    }

    /// Unit vector pointing from the surface toward the light
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

/// Everything drawn in a render pass
#[derive(Debug, Clone)]
pub struct Scene {
    pub fog: Option<FogExp2>,
    pub hemisphere: HemisphereLight,
    pub directional: DirectionalLight,
    pub water: Water,
    pub sky: Sky,
}

impl Scene {
    pub fn from_config(config: &SceneConfig) -> Self {
        let fog = FogExp2::from_config(&config.fog);
        let scene = Self {
            hemisphere: HemisphereLight::from_config(&config.hemisphere_light),
            directional: DirectionalLight::from_config(&config.directional_light),
            water: Water::new(&config.water, fog.is_some()),
            sky: Sky::new(&config.sky),
            fog,
        };
        log::debug!(
            "Scene built: fog={}, water {}x{}, sky scale {}",
            scene.fog.is_some(),
            config.water.size,
            config.water.size,
            config.sky.scale
        );
        scene
    }

    /// Clear color behind everything; the fog color when fog is enabled
    pub fn background(&self) -> [f32; 3] {
        self.fog.map(|fog| fog.color).unwrap_or([0.0; 3])
    }

    pub fn environment_uniform(&self) -> EnvironmentUniform {
        let (fog_color, fog_density, fog_enabled) = match self.fog {
            Some(fog) => (fog.color, fog.density, 1.0),
            None => ([0.0; 3], 0.0, 0.0),
        };

        EnvironmentUniform {
            hemi_sky_color: self.hemisphere.sky_color,
            hemi_intensity: self.hemisphere.intensity,
            hemi_ground_color: self.hemisphere.ground_color,
            _pad0: 0.0,
            dir_color: self.directional.color,
            dir_intensity: self.directional.intensity,
            dir_direction: self.directional.direction().to_array(),
            fog_density,
            fog_color,
            fog_enabled,
        }
    }
}
