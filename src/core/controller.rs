use std::collections::HashMap;

/// Controller - answers whether a key is currently held
pub trait Controller {
    /// Check if the key with the given code is held. Unknown codes are not held.
    fn is_held(&self, code: &str) -> bool;
}

/// Held state for physical keys, keyed by code identifier ("KeyW", "ShiftLeft", ...)
///
/// Codes are stored without validation. A code that was never seen reads as
/// released, the same as one that was explicitly released.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    /// Create an empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark key as held
    pub fn on_key_down(&mut self, code: &str) {
        self.on_key_change(code, true);
    }

    /// Mark key as released
    pub fn on_key_up(&mut self, code: &str) {
        self.on_key_change(code, false);
    }

    /// Set the held flag directly
    pub fn on_key_change(&mut self, code: &str, held: bool) {
        match self.keys.get_mut(code) {
            Some(state) => *state = held,
            None => {
                self.keys.insert(code.to_owned(), held);
            }
        }
    }

    /// Codes currently held, in no particular order
    pub fn held_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys
            .iter()
            .filter(|(_, held)| **held)
            .map(|(code, _)| code.as_str())
    }

    /// Number of distinct codes ever reported
    pub fn tracked_len(&self) -> usize {
        self.keys.len()
    }
}

impl Controller for InputState {
    fn is_held(&self, code: &str) -> bool {
        self.keys.get(code).copied().unwrap_or(false)
    }
}
