use crate::camera::PerspectiveCamera;
use crate::config::{FrameConfig, MovementConfig};
use crate::scene::Scene;

use super::controller::Controller;
use super::movement::MovementIntegrator;

/// Something that can draw the scene from the camera
pub trait FrameRenderer {
    type Error;

    /// Render one frame of the current scene and camera state
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), Self::Error>;
}

/// Per-refresh update and render cycle.
///
/// The wave clock advances by a fixed step per tick regardless of wall time,
/// so a slow display slows the waves instead of making them jump.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    movement: MovementIntegrator,
    wave_time_step: f32,
    ticks: u64,
}

impl FrameDriver {
    pub fn new(movement: &MovementConfig, frame: &FrameConfig) -> Self {
        Self {
            movement: MovementIntegrator::new(movement),
            wave_time_step: frame.wave_time_step,
            ticks: 0,
        }
    }

    /// Move the camera, advance the waves, then render. Render errors are returned unhandled.
    pub fn tick<R: FrameRenderer>(
        &mut self,
        input: &impl Controller,
        camera: &mut PerspectiveCamera,
        scene: &mut Scene,
        renderer: &mut R,
    ) -> Result<(), R::Error> {
        self.movement.apply(input, camera);
        scene.water.advance(self.wave_time_step);
        self.ticks += 1;
        renderer.render(scene, camera)
    }

    /// Ticks started so far, including ones whose render failed
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn wave_time_step(&self) -> f32 {
        self.wave_time_step
    }

    pub fn movement(&self) -> &MovementIntegrator {
        &self.movement
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(&MovementConfig::default(), &FrameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use crate::core::controller::InputState;
    use glam::Vec3;

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<(Vec3, f32)>,
    }

    impl FrameRenderer for RecordingRenderer {
        type Error = ();

        fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), ()> {
            self.frames.push((camera.position, scene.water.time()));
            Ok(())
        }
    }

    struct LostContext;

    impl FrameRenderer for LostContext {
        type Error = &'static str;

        fn render(&mut self, _: &Scene, _: &PerspectiveCamera) -> Result<(), Self::Error> {
            Err("context lost")
        }
    }

    fn setup() -> (PerspectiveCamera, Scene) {
        let config = SceneConfig::default();
        (
            PerspectiveCamera::from_config(&config.camera, 1.0),
            Scene::from_config(&config),
        )
    }

    #[test]
    fn test_render_sees_updated_state() {
        let (mut camera, mut scene) = setup();
        let mut input = InputState::new();
        input.on_key_down("KeyW");
        let mut renderer = RecordingRenderer::default();

        FrameDriver::default()
            .tick(&input, &mut camera, &mut scene, &mut renderer)
            .unwrap();

        let (position, time) = renderer.frames[0];
        assert!((position - Vec3::new(0.0, 2.0, -0.1)).length() < 1e-6);
        assert!((time - 1.0 / 60.0).abs() < 1e-7);
    }

    #[test]
    fn test_wave_time_step_is_fixed() {
        let (mut camera, mut scene) = setup();
        let mut driver = FrameDriver::default();
        let mut renderer = RecordingRenderer::default();
        let input = InputState::new();

        for _ in 0..3 {
            driver.tick(&input, &mut camera, &mut scene, &mut renderer).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        assert_eq!(driver.ticks(), 3);
        let times: Vec<f32> = renderer.frames.iter().map(|(_, t)| *t).collect();
        assert!((times[1] - times[0] - 1.0 / 60.0).abs() < 1e-6);
        assert!((times[2] - times[1] - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_render_error_propagates() {
        let (mut camera, mut scene) = setup();
        let mut driver = FrameDriver::default();

        let result = driver.tick(&InputState::new(), &mut camera, &mut scene, &mut LostContext);
        assert_eq!(result, Err("context lost"));
        // State was already advanced before the render failed
        assert!(scene.water.time() > 0.0);
        assert_eq!(driver.ticks(), 1);
    }
}
