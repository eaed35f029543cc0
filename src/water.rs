use glam::{Mat4, Vec3};

use crate::config::WaterConfig;
use crate::math::rgb_from_hex;
use crate::types::{WaterUniform, WaterVertex};

/// Animated water plane.
///
/// The plane is authored in XY and rotated -90 degrees about X so it lies flat
/// in XZ at y = 0. `time` drives the wave pattern and only ever increases.
#[derive(Debug, Clone)]
pub struct Water {
    config: WaterConfig,
    rotation_x: f32,
    time: f32,
    fog: bool,
}

impl Water {
    pub fn new(config: &WaterConfig, fog: bool) -> Self {
        Self {
            config: config.clone(),
            rotation_x: -std::f32::consts::FRAC_PI_2,
            time: 0.0,
            fog,
        }
    }

    /// Advance the wave-time uniform
    pub fn advance(&mut self, step: f32) {
        self.time += step;
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn config(&self) -> &WaterConfig {
        &self.config
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation_x)
    }

    pub fn to_uniform(&self) -> WaterUniform {
        WaterUniform {
            model: self.model_matrix().to_cols_array_2d(),
            sun_direction: Vec3::from_array(self.config.sun_direction)
                .normalize_or_zero()
                .to_array(),
            alpha: self.config.alpha,
            sun_color: rgb_from_hex(self.config.sun_color),
            distortion_scale: self.config.distortion_scale,
            water_color: rgb_from_hex(self.config.water_color),
            time: self.time,
            normal_tiling: normal_tiling(self.config.texture_width, self.config.texture_height),
            fog: if self.fog { 1.0 } else { 0.0 },
            _pad0: 0.0,
            _pad1: 0.0,
        }
    }

    /// Plane mesh in local XY, centered on the origin
    pub fn plane_mesh(&self) -> (Vec<WaterVertex>, Vec<u32>) {
        plane_mesh(self.config.size, self.config.segments.max(1))
    }
}

/// Wave-pattern repeats per world unit; higher-resolution maps tile more finely
fn normal_tiling(width: u32, height: u32) -> f32 {
    let texels = width.max(height).max(1) as f32;
    texels / 512.0
}

/// Square plane of side `size` split into `segments` x `segments` quads
pub fn plane_mesh(size: f32, segments: u32) -> (Vec<WaterVertex>, Vec<u32>) {
    let half = size * 0.5;
    let step = size / segments as f32;
    let row = segments + 1;

    let vertices = (0..row)
        .flat_map(|iy| {
            (0..row).map(move |ix| WaterVertex {
                position: [-half + ix as f32 * step, half - iy as f32 * step, 0.0],
                uv: [ix as f32 / segments as f32, 1.0 - iy as f32 / segments as f32],
            })
        })
        .collect();

    let indices = (0..segments)
        .flat_map(|iy| {
            (0..segments).flat_map(move |ix| {
                let a = iy * row + ix;
                let b = a + row;
                let c = b + 1;
                let d = a + 1;
                [a, b, d, b, c, d]
            })
        })
        .collect();

    (vertices, indices)
}
