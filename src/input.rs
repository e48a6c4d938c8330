//! Keyboard tracking. Browser key codes are kept at this layer; the physics
//! step only ever sees the closed [`Action`] set through [`InputState`].

use std::collections::HashSet;

/// Logical actions the player can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
}

/// `KeyboardEvent.code` values bound to each action.
pub const BINDINGS: &[(&str, Action)] = &[
    ("ArrowLeft", Action::MoveLeft),
    ("KeyA", Action::MoveLeft),
    ("ArrowRight", Action::MoveRight),
    ("KeyD", Action::MoveRight),
    ("ArrowUp", Action::Jump),
    ("KeyW", Action::Jump),
    ("Space", Action::Jump),
];

pub fn action_for_code(code: &str) -> Option<Action> {
    BINDINGS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|&(_, action)| action)
}

/// Snapshot of held actions for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    pub fn holding(actions: &[Action]) -> Self {
        let mut input = Self::default();
        for &a in actions {
            input.set(a, true);
        }
        input
    }

    pub fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::MoveLeft => self.left = held,
            Action::MoveRight => self.right = held,
            Action::Jump => self.jump = held,
        }
    }

    pub fn is_held(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.left,
            Action::MoveRight => self.right,
            Action::Jump => self.jump,
        }
    }
}

/// Level-triggered set of held key codes, fed by keydown / keyup.
#[derive(Clone, Debug, Default)]
pub struct KeyState {
    held: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, code: &str) {
        if !self.held.contains(code) {
            self.held.insert(code.to_owned());
        }
    }

    pub fn release(&mut self, code: &str) {
        self.held.remove(code);
    }

    pub fn is_down(&self, code: &str) -> bool {
        self.held.contains(code)
    }

    /// Drop every held key. Called on window blur and on level start.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// An action is held while any of its bound codes is held.
    pub fn actions(&self) -> InputState {
        let mut input = InputState::default();
        for code in &self.held {
            if let Some(action) = action_for_code(code) {
                input.set(action, true);
            }
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings_cover_arrows_wasd_and_space() {
        assert_eq!(action_for_code("ArrowLeft"), Some(Action::MoveLeft));
        assert_eq!(action_for_code("KeyD"), Some(Action::MoveRight));
        assert_eq!(action_for_code("Space"), Some(Action::Jump));
        assert_eq!(action_for_code("KeyW"), Some(Action::Jump));
        assert_eq!(action_for_code("KeyS"), None);
    }

    #[test]
    fn action_stays_held_while_any_bound_key_is_down() {
        let mut keys = KeyState::new();
        keys.press("ArrowLeft");
        keys.press("KeyA");
        keys.release("ArrowLeft");
        assert!(keys.actions().left);
        keys.release("KeyA");
        assert!(!keys.actions().left);
    }

    #[test]
    fn repeated_keydown_is_idempotent() {
        let mut keys = KeyState::new();
        keys.press("Space");
        keys.press("Space");
        keys.release("Space");
        assert!(!keys.is_down("Space"));
        assert_eq!(keys.actions(), InputState::default());
    }

    #[test]
    fn unknown_codes_are_tracked_but_ignored() {
        let mut keys = KeyState::new();
        keys.press("KeyQ");
        assert!(keys.is_down("KeyQ"));
        assert_eq!(keys.actions(), InputState::default());
    }

    #[test]
    fn clear_releases_every_held_action() {
        let mut keys = KeyState::new();
        keys.press("KeyA");
        keys.press("ArrowRight");
        keys.press("Space");
        keys.clear();
        assert!(!keys.is_down("KeyA"));
        assert_eq!(keys.actions(), InputState::default());
        keys.press("KeyW");
        assert!(keys.actions().jump);
    }

    #[test]
    fn holding_builds_snapshot() {
        let input = InputState::holding(&[Action::MoveRight, Action::Jump]);
        assert!(input.is_held(Action::MoveRight));
        assert!(input.is_held(Action::Jump));
        assert!(!input.is_held(Action::MoveLeft));
    }
}
