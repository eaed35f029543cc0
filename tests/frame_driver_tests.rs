use ocean_scene::camera::PerspectiveCamera;
use ocean_scene::config::SceneConfig;
use ocean_scene::core::{FrameDriver, FrameRenderer, InputState};
use ocean_scene::scene::Scene;

/// Records what each render call saw
#[derive(Default)]
struct RecordingRenderer {
    water_times: Vec<f32>,
    camera_z: Vec<f32>,
}

impl FrameRenderer for RecordingRenderer {
    type Error = String;

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), String> {
        self.water_times.push(scene.water.time());
        self.camera_z.push(camera.position.z);
        Ok(())
    }
}

struct FailingRenderer;

impl FrameRenderer for FailingRenderer {
    type Error = &'static str;

    fn render(&mut self, _scene: &Scene, _camera: &PerspectiveCamera) -> Result<(), &'static str> {
        Err("surface lost")
    }
}

fn setup() -> (FrameDriver, PerspectiveCamera, Scene) {
    let config = SceneConfig::default();
    (
        FrameDriver::new(&config.movement, &config.frame),
        PerspectiveCamera::from_config(&config.camera, 4.0 / 3.0),
        Scene::from_config(&config),
    )
}

#[cfg(test)]
mod frame_driver_tests {
    use super::*;

    #[test]
    fn test_each_tick_adds_one_sixtieth() {
        let (mut driver, mut camera, mut scene) = setup();
        let mut renderer = RecordingRenderer::default();
        let input = InputState::new();

        let mut expected = scene.water.time();
        for _ in 0..120 {
            driver
                .tick(&input, &mut camera, &mut scene, &mut renderer)
                .expect("recording renderer never fails");
            expected += 1.0 / 60.0;
            assert_eq!(scene.water.time(), expected);
        }
        assert_eq!(driver.ticks(), 120);
    }

    #[test]
    fn test_wave_step_ignores_wall_time() {
        let (mut driver, mut camera, mut scene) = setup();
        let mut renderer = RecordingRenderer::default();
        let input = InputState::new();

        driver.tick(&input, &mut camera, &mut scene, &mut renderer).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(50));
        driver.tick(&input, &mut camera, &mut scene, &mut renderer).unwrap();

        let step = renderer.water_times[1] - renderer.water_times[0];
        assert!((step - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_render_sees_updated_state() {
        let (mut driver, mut camera, mut scene) = setup();
        let mut renderer = RecordingRenderer::default();
        let mut input = InputState::new();
        input.on_key_down("KeyW");

        let start_z = camera.position.z;
        driver.tick(&input, &mut camera, &mut scene, &mut renderer).unwrap();

        assert_eq!(renderer.water_times, vec![1.0 / 60.0]);
        assert!((renderer.camera_z[0] - (start_z - 0.1)).abs() < 1e-5);
    }

    #[test]
    fn test_render_error_is_returned() {
        let (mut driver, mut camera, mut scene) = setup();
        let input = InputState::new();

        let result = driver.tick(&input, &mut camera, &mut scene, &mut FailingRenderer);

        assert_eq!(result, Err("surface lost"));
        // Update still happened before the failed render
        assert_eq!(scene.water.time(), 1.0 / 60.0);
        assert_eq!(driver.ticks(), 1);
    }
}
