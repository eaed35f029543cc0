use glam::Vec3;
use ocean_scene::camera::PerspectiveCamera;
use ocean_scene::config::MovementConfig;
use ocean_scene::core::{Controller, InputState, MovementIntegrator};

const EPSILON: f32 = 1e-4;

fn camera() -> PerspectiveCamera {
    PerspectiveCamera::new(75.0, 4.0 / 3.0, 0.1, 5000.0)
}

fn displacement_after(keys: &[&str], ticks: usize) -> Vec3 {
    let mut input = InputState::new();
    for key in keys {
        input.on_key_down(key);
    }
    let movement = MovementIntegrator::default();
    let mut camera = camera();
    for _ in 0..ticks {
        movement.apply(&input, &mut camera);
    }
    camera.position
}

#[cfg(test)]
mod input_state_tests {
    use super::*;

    #[test]
    fn test_never_pressed_keys_read_released() {
        let input = InputState::new();
        for code in ["KeyW", "KeyQ", "ShiftLeft", "Space", "", "NotAKey"] {
            assert!(!input.is_held(code), "{} should read as released", code);
        }
    }

    #[test]
    fn test_press_then_release_returns_to_released() {
        let mut input = InputState::new();
        input.on_key_down("KeyW");
        assert!(input.is_held("KeyW"));
        input.on_key_up("KeyW");
        assert!(!input.is_held("KeyW"));
    }

    #[test]
    fn test_release_without_press() {
        let mut input = InputState::new();
        input.on_key_up("KeyD");
        assert!(!input.is_held("KeyD"));
        assert_eq!(input.tracked_len(), 1);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut input = InputState::new();
        input.on_key_down("KeyW");
        input.on_key_down("KeyA");
        input.on_key_up("KeyW");
        assert!(!input.is_held("KeyW"));
        assert!(input.is_held("KeyA"));
    }
}

#[cfg(test)]
mod movement_tests {
    use super::*;

    #[test]
    fn test_forward_for_n_ticks() {
        let ticks = 25;
        let pos = displacement_after(&["KeyW"], ticks);
        let expected = camera().forward() * 0.1 * ticks as f32;
        assert!((pos - expected).length() < EPSILON, "got {:?}", pos);
    }

    #[test]
    fn test_backward_and_strafe_directions() {
        assert!(displacement_after(&["KeyS"], 1).z > 0.0);
        assert!(displacement_after(&["KeyA"], 1).x < 0.0);
        assert!(displacement_after(&["KeyD"], 1).x > 0.0);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let pos = displacement_after(&["KeyW", "KeyS"], 10);
        assert!(pos.length() < EPSILON);
    }

    #[test]
    fn test_modifier_triples_displacement() {
        let plain = displacement_after(&["KeyW"], 10).length();
        let fast = displacement_after(&["KeyW", "ShiftLeft"], 10).length();
        assert!((fast - 3.0 * plain).abs() < EPSILON);
    }

    #[test]
    fn test_diagonal_is_unnormalized() {
        let forward = displacement_after(&["KeyW"], 1).length();
        let left = displacement_after(&["KeyA"], 1).length();
        let diagonal = displacement_after(&["KeyW", "KeyA"], 1).length();

        assert!(diagonal > forward);
        assert!(diagonal > left);
        assert!((diagonal - (2.0f32).sqrt() * 0.1).abs() < EPSILON);
    }

    #[test]
    fn test_movement_follows_orientation() {
        let mut input = InputState::new();
        input.on_key_down("KeyW");
        let mut camera = camera();
        camera.orientation = glam::Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);

        MovementIntegrator::default().apply(&input, &mut camera);

        // Yawed 90 degrees left, forward is -X
        assert!((camera.position - Vec3::new(-0.1, 0.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_custom_base_speed() {
        let config = MovementConfig {
            base_speed: 0.5,
            ..Default::default()
        };
        let movement = MovementIntegrator::new(&config);
        let mut input = InputState::new();
        input.on_key_down("ShiftLeft");
        assert!((movement.move_speed(&input) - 1.5).abs() < EPSILON);
    }
}
