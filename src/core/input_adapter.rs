use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, NativeKeyCode, PhysicalKey};

use super::controller::{Controller, InputState};

/// Adapter that bridges Winit keyboard events to an owned `InputState`
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    state: InputState,
}

impl WinitController {
    /// Create a new WinitController with no held keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent. Returns true if it was a keyboard event.
    pub fn process_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key(event.physical_key, event.state);
                true
            }
            _ => false,
        }
    }

    /// Apply one physical key transition. Repeats arrive as `Pressed` and are idempotent.
    pub fn handle_key(&mut self, key: PhysicalKey, state: ElementState) {
        let code = physical_key_code(key);
        self.state.on_key_change(&code, state.is_pressed());
    }

    /// Underlying input state
    pub fn state(&self) -> &InputState {
        &self.state
    }
}

impl Controller for WinitController {
    fn is_held(&self, code: &str) -> bool {
        self.state.is_held(code)
    }
}

/// Code identifier for a physical key, e.g. `KeyW` or `ShiftLeft`
pub fn key_code_name(keycode: KeyCode) -> String {
    format!("{:?}", keycode)
}

fn physical_key_code(key: PhysicalKey) -> String {
    match key {
        PhysicalKey::Code(keycode) => key_code_name(keycode),
        PhysicalKey::Unidentified(native) => native_code_name(native),
    }
}

fn native_code_name(native: NativeKeyCode) -> String {
    match native {
        NativeKeyCode::Unidentified => "Unidentified".to_string(),
        NativeKeyCode::Android(code) => format!("Android({})", code),
        NativeKeyCode::MacOS(code) => format!("MacOS({})", code),
        NativeKeyCode::Windows(code) => format!("Windows({})", code),
        NativeKeyCode::Xkb(code) => format!("Xkb({})", code),
    }
}
