use crate::camera::PerspectiveCamera;
use crate::config::{KeyBindings, MovementConfig};

use super::controller::Controller;

/// First-person translation driven by held keys.
///
/// Each tick applies forward/back along local Z, then left/right along local X.
/// Both axes apply in full when held together, so diagonals are faster than
/// straight lines.
#[derive(Debug, Clone)]
pub struct MovementIntegrator {
    bindings: KeyBindings,
    base_speed: f32,
    modifier_multiplier: f32,
}

impl MovementIntegrator {
    pub fn new(config: &MovementConfig) -> Self {
        Self {
            bindings: config.bindings.clone(),
            base_speed: config.base_speed,
            modifier_multiplier: config.modifier_multiplier,
        }
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    /// Distance moved per held direction this tick
    pub fn move_speed(&self, input: &impl Controller) -> f32 {
        if input.is_held(&self.bindings.speed_modifier) {
            self.base_speed * self.modifier_multiplier
        } else {
            self.base_speed
        }
    }

    pub fn apply(&self, input: &impl Controller, camera: &mut PerspectiveCamera) {
        let speed = self.move_speed(input);

        if input.is_held(&self.bindings.forward) {
            camera.translate_z(-speed);
        }
        if input.is_held(&self.bindings.backward) {
            camera.translate_z(speed);
        }
        if input.is_held(&self.bindings.left) {
            camera.translate_x(-speed);
        }
        if input.is_held(&self.bindings.right) {
            camera.translate_x(speed);
        }
    }
}

impl Default for MovementIntegrator {
    fn default() -> Self {
        Self::new(&MovementConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controller::InputState;
    use glam::{Quat, Vec3};

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(75.0, 1.0, 0.1, 5000.0)
    }

    fn held(codes: &[&str]) -> InputState {
        let mut input = InputState::new();
        for code in codes {
            input.on_key_down(code);
        }
        input
    }

    #[test]
    fn test_no_keys_no_movement() {
        let mut cam = camera();
        MovementIntegrator::default().apply(&InputState::new(), &mut cam);
        assert_eq!(cam.position, Vec3::ZERO);
    }

    #[test]
    fn test_each_direction() {
        let integrator = MovementIntegrator::default();
        let cases = [
            ("KeyW", Vec3::new(0.0, 0.0, -0.1)),
            ("KeyS", Vec3::new(0.0, 0.0, 0.1)),
            ("KeyA", Vec3::new(-0.1, 0.0, 0.0)),
            ("KeyD", Vec3::new(0.1, 0.0, 0.0)),
        ];

        for (code, expected) in cases {
            let mut cam = camera();
            integrator.apply(&held(&[code]), &mut cam);
            assert!((cam.position - expected).length() < 1e-6, "{code}");
        }
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut cam = camera();
        MovementIntegrator::default().apply(&held(&["KeyW", "KeyS", "KeyA", "KeyD"]), &mut cam);
        assert!(cam.position.length() < 1e-6);
    }

    #[test]
    fn test_modifier_triples_speed() {
        let integrator = MovementIntegrator::default();
        assert!((integrator.move_speed(&held(&["ShiftLeft"])) - 0.3).abs() < 1e-6);
        assert!((integrator.move_speed(&InputState::new()) - 0.1).abs() < 1e-6);
        // The right shift is not bound
        assert!((integrator.move_speed(&held(&["ShiftRight"])) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_diagonal_is_unnormalized() {
        let mut cam = camera();
        MovementIntegrator::default().apply(&held(&["KeyW", "KeyA"]), &mut cam);
        assert!((cam.position.length() - (0.02f32).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_moves_along_local_axes() {
        let mut cam = camera();
        cam.orientation = Quat::from_rotation_y(std::f32::consts::PI);
        MovementIntegrator::default().apply(&held(&["KeyW"]), &mut cam);
        assert!((cam.position - Vec3::new(0.0, 0.0, 0.1)).length() < 1e-6);
    }

    #[test]
    fn test_custom_bindings() {
        let config = MovementConfig {
            base_speed: 1.0,
            modifier_multiplier: 2.0,
            bindings: KeyBindings {
                forward: "ArrowUp".to_string(),
                speed_modifier: "ControlLeft".to_string(),
                ..KeyBindings::default()
            },
        };
        let mut cam = camera();
        MovementIntegrator::new(&config).apply(&held(&["ArrowUp", "ControlLeft", "KeyW"]), &mut cam);
        assert!((cam.position - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-6);
    }
}
