//! Input collection and movement intent resolution
//!
//! Two kinds of input reach the player paddle:
//! - discrete key state (held arrow keys), turned into a direction
//! - an absolute pointer/touch target, which places the paddle directly
//!
//! A third producer, the on-screen direction buttons, writes
//! `GameState::pending_move_intent` through the game loop.

use std::collections::HashSet;

use super::state::MoveIntent;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Space,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` / `.code` value
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            " " | "Space" | "Spacebar" => Some(Key::Space),
            _ => None,
        }
    }
}

/// Input for a single step, captured atomically at the start of the step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Direction from held keys
    pub key_intent: MoveIntent,
    /// Absolute paddle-center target in court space (from pointer/touch)
    pub pointer_y: Option<f32>,
}

/// Accumulates raw input between frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    pointer_y: Option<f32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns true if the key was not already held.
    pub fn press(&mut self, key: Key) -> bool {
        self.held.insert(key)
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Direction from the arrow keys; up wins when both are held
    pub fn key_intent(&self) -> MoveIntent {
        if self.is_held(Key::ArrowUp) {
            MoveIntent::Up
        } else if self.is_held(Key::ArrowDown) {
            MoveIntent::Down
        } else {
            MoveIntent::Neutral
        }
    }

    /// Set the absolute pointer target; the latest one before a step wins
    pub fn set_pointer_target(&mut self, court_y: f32) {
        if court_y.is_finite() {
            self.pointer_y = Some(court_y);
        }
    }

    /// Capture input for one step. The pointer target is consumed.
    pub fn snapshot(&mut self) -> TickInput {
        TickInput {
            key_intent: self.key_intent(),
            pointer_y: self.pointer_y.take(),
        }
    }

    /// Forget a pointer target that no step has consumed yet. Held keys
    /// are kept since they are still physically down.
    pub fn discard_pointer_target(&mut self) {
        self.pointer_y = None;
    }

    /// Drop everything (e.g. on window blur)
    pub fn clear(&mut self) {
        self.held.clear();
        self.pointer_y = None;
    }
}

/// Continuous input (buttons) overrides key state whenever it is active
pub fn resolve_intent(pending: MoveIntent, key_intent: MoveIntent) -> MoveIntent {
    if pending.is_neutral() {
        key_intent
    } else {
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowUp"), Some(Key::ArrowUp));
        assert_eq!(Key::from_name(" "), Some(Key::Space));
        assert_eq!(Key::from_name("Space"), Some(Key::Space));
        assert_eq!(Key::from_name("w"), None);
    }

    #[test]
    fn test_key_intent_follows_held_keys() {
        let mut input = InputState::new();
        assert_eq!(input.key_intent(), MoveIntent::Neutral);

        input.press(Key::ArrowDown);
        assert_eq!(input.key_intent(), MoveIntent::Down);

        input.press(Key::ArrowUp);
        assert_eq!(input.key_intent(), MoveIntent::Up);

        input.release(Key::ArrowUp);
        assert_eq!(input.key_intent(), MoveIntent::Down);

        input.release(Key::ArrowDown);
        assert_eq!(input.key_intent(), MoveIntent::Neutral);
    }

    #[test]
    fn test_press_reports_repeat() {
        let mut input = InputState::new();
        assert!(input.press(Key::Space));
        assert!(!input.press(Key::Space));
    }

    #[test]
    fn test_continuous_intent_overrides_keys() {
        assert_eq!(
            resolve_intent(MoveIntent::Down, MoveIntent::Up),
            MoveIntent::Down
        );
        assert_eq!(
            resolve_intent(MoveIntent::Neutral, MoveIntent::Up),
            MoveIntent::Up
        );
        assert_eq!(
            resolve_intent(MoveIntent::Neutral, MoveIntent::Neutral),
            MoveIntent::Neutral
        );
    }

    #[test]
    fn test_snapshot_consumes_pointer() {
        let mut input = InputState::new();
        input.set_pointer_target(120.0);
        input.set_pointer_target(140.0);

        let first = input.snapshot();
        assert_eq!(first.pointer_y, Some(140.0));

        let second = input.snapshot();
        assert_eq!(second.pointer_y, None);
    }

    #[test]
    fn test_discard_pointer_keeps_keys() {
        let mut input = InputState::new();
        input.press(Key::ArrowDown);
        input.set_pointer_target(30.0);
        input.discard_pointer_target();

        let tick = input.snapshot();
        assert_eq!(tick.pointer_y, None);
        assert_eq!(tick.key_intent, MoveIntent::Down);
    }

    #[test]
    fn test_non_finite_pointer_ignored() {
        let mut input = InputState::new();
        input.set_pointer_target(f32::NAN);
        assert_eq!(input.snapshot().pointer_y, None);
    }
}
