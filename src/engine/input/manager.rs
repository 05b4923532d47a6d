// Input manager: turns winit events into an InputState

use super::action::InputSource;
use super::config::InputConfig;
use super::state::InputState;
use glam::Vec2;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Routes window events through the bindings into the tick's input state
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,
    state: InputState,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            state: InputState::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            if event.repeat {
                return;
            }
            self.apply(InputSource::key(key_code), event.state);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.apply(InputSource::mouse(button), state);
    }

    /// Track the cursor in window pixels
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        self.state.set_cursor(Vec2::new(x as f32, y as f32));
    }

    /// Apply a press/release of a source through the bindings
    pub fn apply(&mut self, source: InputSource, state: ElementState) {
        let Some(action) = self.config.get_action(source) else {
            return;
        };

        match state {
            ElementState::Pressed => self.state.press(action),
            ElementState::Released => self.state.release(action),
        }
    }

    /// Input state for the current tick
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Clear per-tick edges; call once per tick after the game update
    pub fn end_frame(&mut self) {
        self.state.end_frame();
    }

    /// Drop all held input, e.g. on focus loss
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::Action;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_bound_key_presses_action() {
        let mut manager = InputManager::default();
        manager.apply(InputSource::key(KeyCode::KeyD), ElementState::Pressed);

        assert!(manager.state().is_pressed(Action::MoveRight));
        assert_eq!(manager.state().direction(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut manager = InputManager::default();
        manager.apply(InputSource::key(KeyCode::KeyZ), ElementState::Pressed);
        assert_eq!(manager.state().direction(), Vec2::ZERO);
    }

    #[test]
    fn test_mouse_click_spawns_dice() {
        let mut manager = InputManager::default();
        manager.process_cursor_moved(12.5, 40.0);
        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);

        assert!(manager.state().just_pressed(Action::SpawnDice));
        assert_eq!(manager.state().cursor(), Vec2::new(12.5, 40.0));
    }

    #[test]
    fn test_end_frame_clears_edges() {
        let mut manager = InputManager::default();
        manager.apply(InputSource::key(KeyCode::Escape), ElementState::Pressed);
        assert!(manager.state().just_pressed(Action::Quit));

        manager.end_frame();
        assert!(!manager.state().just_pressed(Action::Quit));
        assert!(manager.state().is_pressed(Action::Quit));
    }

    #[test]
    fn test_custom_config() {
        let mut config = InputConfig::empty();
        config.bind(InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft);
        let mut manager = InputManager::new(config);

        manager.apply(InputSource::key(KeyCode::ArrowLeft), ElementState::Pressed);
        manager.apply(InputSource::key(KeyCode::KeyA), ElementState::Pressed);
        assert!(manager.state().is_pressed(Action::MoveLeft));

        manager.apply(InputSource::key(KeyCode::ArrowLeft), ElementState::Released);
        assert!(!manager.state().is_pressed(Action::MoveLeft));
    }

    #[test]
    fn test_reset_drops_held_keys() {
        let mut manager = InputManager::default();
        manager.apply(InputSource::key(KeyCode::KeyW), ElementState::Pressed);
        manager.reset();
        assert!(!manager.state().is_pressed(Action::MoveUp));
    }
}
