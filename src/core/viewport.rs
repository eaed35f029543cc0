use crate::camera::PerspectiveCamera;

/// Viewport dimensions in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Drawable surface that can be resized
pub trait ViewportSurface {
    /// Resize the drawable area to the given physical size
    fn resize_surface(&mut self, size: ViewportSize);

    /// Current drawable size
    fn surface_size(&self) -> ViewportSize;
}

/// Apply a viewport dimension change to the camera and surface.
///
/// Returns false when the size has zero area (e.g. a minimized window); such
/// sizes leave camera and surface untouched.
pub fn resize_viewport(
    size: ViewportSize,
    camera: &mut PerspectiveCamera,
    surface: &mut dyn ViewportSurface,
) -> bool {
    if size.is_empty() {
        log::debug!("Ignoring empty viewport {}x{}", size.width, size.height);
        return false;
    }

    camera.set_aspect(size.aspect_ratio());
    camera.update_projection_matrix();
    surface.resize_surface(size);
    true
}
