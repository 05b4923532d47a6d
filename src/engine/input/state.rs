// Snapshot of held and edge-triggered actions for the current tick

use super::action::Action;
use glam::Vec2;
use std::collections::HashSet;

/// Input state queried by the game during a tick
#[derive(Debug, Default, Clone)]
pub struct InputState {
    /// Actions currently held
    pressed: HashSet<Action>,
    /// Actions pressed since the last `end_frame`
    just_pressed: HashSet<Action>,
    /// Actions released since the last `end_frame`
    just_released: HashSet<Action>,
    /// Cursor position in window pixels
    cursor: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Register an action press (key repeats are ignored)
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    pub fn set_cursor(&mut self, cursor: Vec2) {
        self.cursor = cursor;
    }

    /// Clear edge-triggered state; call once per tick after the game has read it
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Release everything, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Held movement as a screen-space direction (x right, y down)
    ///
    /// Each component is -1, 0 or 1; opposite keys cancel out.
    pub fn direction(&self) -> Vec2 {
        let mut direction = Vec2::ZERO;

        if self.is_pressed(Action::MoveLeft) {
            direction.x -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            direction.x += 1.0;
        }
        if self.is_pressed(Action::MoveUp) {
            direction.y -= 1.0;
        }
        if self.is_pressed(Action::MoveDown) {
            direction.y += 1.0;
        }

        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_action() {
        let mut input = InputState::new();
        input.press(Action::MoveUp);
        assert!(input.is_pressed(Action::MoveUp));
        assert!(input.just_pressed(Action::MoveUp));
    }

    #[test]
    fn test_repeat_press_is_not_new() {
        let mut input = InputState::new();
        input.press(Action::PlayRun);
        input.end_frame();
        input.press(Action::PlayRun);
        assert!(!input.just_pressed(Action::PlayRun));
    }

    #[test]
    fn test_release_action() {
        let mut input = InputState::new();
        input.press(Action::MoveUp);
        input.end_frame();
        input.release(Action::MoveUp);
        assert!(!input.is_pressed(Action::MoveUp));
        assert!(input.just_released(Action::MoveUp));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = InputState::new();
        input.release(Action::MoveUp);
        assert!(!input.just_released(Action::MoveUp));
    }

    #[test]
    fn test_end_frame_keeps_held() {
        let mut input = InputState::new();
        input.press(Action::MoveLeft);
        input.end_frame();
        assert!(input.is_pressed(Action::MoveLeft));
        assert!(!input.just_pressed(Action::MoveLeft));
    }

    #[test]
    fn test_direction_neutral() {
        assert_eq!(InputState::new().direction(), Vec2::ZERO);
    }

    #[test]
    fn test_direction_diagonal() {
        let mut input = InputState::new();
        input.press(Action::MoveUp);
        input.press(Action::MoveLeft);
        assert_eq!(input.direction(), Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut input = InputState::new();
        input.press(Action::MoveLeft);
        input.press(Action::MoveRight);
        input.press(Action::MoveDown);
        assert_eq!(input.direction(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_reset() {
        let mut input = InputState::new();
        input.press(Action::MoveDown);
        input.reset();
        assert!(!input.is_pressed(Action::MoveDown));
        assert_eq!(input.direction(), Vec2::ZERO);
    }
}
