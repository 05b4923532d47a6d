// Game action definitions and default bindings

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (held)
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Animation hotkeys
    PlayIdle,
    PlayDead,
    PlayAttack,
    PlayRun,

    // Dice
    SpawnDice,
    RerollDice,

    // Meta actions
    ToggleDebug,
    Quit,
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputSource {
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default keyboard/mouse bindings
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Movement (WASD)
        (InputSource::key(KeyCode::KeyW), Action::MoveUp),
        (InputSource::key(KeyCode::KeyS), Action::MoveDown),
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        // Animation hotkeys
        (InputSource::key(KeyCode::KeyB), Action::PlayIdle),
        (InputSource::key(KeyCode::KeyV), Action::PlayDead),
        (InputSource::key(KeyCode::KeyM), Action::PlayAttack),
        (InputSource::key(KeyCode::KeyP), Action::PlayRun),
        // Dice
        (InputSource::mouse(MouseButton::Left), Action::SpawnDice),
        (InputSource::key(KeyCode::KeyR), Action::RerollDice),
        // Meta
        (InputSource::key(KeyCode::F1), Action::ToggleDebug),
        (InputSource::key(KeyCode::Escape), Action::Quit),
    ]
}

/// Arrow keys as additional movement sources
pub fn arrow_key_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::ArrowUp), Action::MoveUp),
        (InputSource::key(KeyCode::ArrowDown), Action::MoveDown),
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_uses_wasd() {
        let bindings = default_bindings();
        let find = |action| {
            bindings
                .iter()
                .find(|(_, a)| *a == action)
                .map(|(source, _)| *source)
        };

        assert_eq!(find(Action::MoveUp), Some(InputSource::key(KeyCode::KeyW)));
        assert_eq!(find(Action::MoveLeft), Some(InputSource::key(KeyCode::KeyA)));
        assert_eq!(find(Action::MoveDown), Some(InputSource::key(KeyCode::KeyS)));
        assert_eq!(find(Action::MoveRight), Some(InputSource::key(KeyCode::KeyD)));
    }

    #[test]
    fn test_dice_on_left_click() {
        let bindings = default_bindings();
        assert!(bindings.contains(&(InputSource::mouse(MouseButton::Left), Action::SpawnDice)));
    }

    #[test]
    fn test_no_duplicate_inputs() {
        let bindings = default_bindings();
        let mut seen_sources = std::collections::HashSet::new();
        for (source, _) in bindings {
            assert!(seen_sources.insert(source), "Duplicate input source {source:?}");
        }
    }

    #[test]
    fn test_arrow_keys_do_not_clash_with_defaults() {
        let defaults = default_bindings();
        for (source, _) in arrow_key_bindings() {
            assert!(defaults.iter().all(|(s, _)| *s != source));
        }
    }
}
