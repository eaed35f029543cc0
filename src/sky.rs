use glam::Vec3;

use crate::config::SkyConfig;
use crate::types::SkyUniform;

/// Distance of the sun from the dome center used by the scattering model
const SUN_DISTANCE: f32 = 1.0;

/// Atmospheric-scattering sky dome
#[derive(Debug, Clone)]
pub struct Sky {
    config: SkyConfig,
}

impl Sky {
    pub fn new(config: &SkyConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &SkyConfig {
        &self.config
    }

    /// Sun position from elevation/azimuth, azimuth measured from +Z toward +X
    pub fn sun_position(&self) -> Vec3 {
        let phi = (90.0 - self.config.sun_elevation_degrees).to_radians();
        let theta = self.config.sun_azimuth_degrees.to_radians();
        Vec3::new(
            phi.sin() * theta.sin(),
            phi.cos(),
            phi.sin() * theta.cos(),
        ) * SUN_DISTANCE
    }

    pub fn to_uniform(&self) -> SkyUniform {
        SkyUniform {
            sun_position: self.sun_position().to_array(),
            turbidity: self.config.turbidity,
            rayleigh: self.config.rayleigh,
            mie_coefficient: self.config.mie_coefficient,
            mie_directional_g: self.config.mie_directional_g,
            scale: self.config.scale,
        }
    }
}
