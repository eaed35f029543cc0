//! GPU-side uniform layouts. Field order and padding match the WGSL structs.

/// Per-view camera data
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub inv_view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub time: f32,
}

/// Lights and fog shared by every scene object
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct EnvironmentUniform {
    pub hemi_sky_color: [f32; 3],
    pub hemi_intensity: f32,
    pub hemi_ground_color: [f32; 3],
    pub _pad0: f32,
    pub dir_color: [f32; 3],
    pub dir_intensity: f32,
    pub dir_direction: [f32; 3],
    pub fog_density: f32,
    pub fog_color: [f32; 3],
    pub fog_enabled: f32,
}

/// Water surface material parameters
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WaterUniform {
    pub model: [[f32; 4]; 4],
    pub sun_direction: [f32; 3],
    pub alpha: f32,
    pub sun_color: [f32; 3],
    pub distortion_scale: f32,
    pub water_color: [f32; 3],
    pub time: f32,
    /// Normal-map tiling derived from the reflection texture size
    pub normal_tiling: f32,
    pub fog: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

/// Sky dome scattering parameters
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SkyUniform {
    pub sun_position: [f32; 3],
    pub turbidity: f32,
    pub rayleigh: f32,
    pub mie_coefficient: f32,
    pub mie_directional_g: f32,
    pub scale: f32,
}

/// Water plane vertex
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WaterVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sizes_are_16_byte_multiples() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 144);
        assert_eq!(std::mem::size_of::<EnvironmentUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<WaterUniform>(), 128);
        assert_eq!(std::mem::size_of::<SkyUniform>(), 32);
    }
}
