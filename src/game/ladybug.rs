// The player-controlled ladybug

use super::animation::{AnimationError, AnimationPlayer};
use crate::core::Rect;
use crate::engine::assets::SpriteSheet;
use crate::engine::input::{Action, InputState};
use crate::engine::physics::{resolve_move, CollisionResponse, Obstacle, Resolution};
use crate::engine::renderer::DrawList;
use glam::Vec2;
use log::{debug, warn};

/// Size of one cell on the ladybug sheet
pub const CELL_WIDTH: f32 = 32.0;
pub const CELL_HEIGHT: f32 = 27.0;

pub const ATTACK: &str = "Attack";
pub const IDLE: &str = "Idle";
pub const DEAD: &str = "Dead";
pub const RUN: &str = "Run";

/// Clip to play for an animation hotkey: (action, clip, looping, ms per frame)
const HOTKEYS: [(Action, &str, bool, f32); 4] = [
    (Action::PlayIdle, IDLE, true, 200.0),
    (Action::PlayDead, DEAD, false, 0.0),
    (Action::PlayAttack, ATTACK, true, 100.0),
    (Action::PlayRun, RUN, true, 150.0),
];

/// Build the ladybug's clips from its sprite sheet
pub fn ladybug_animations(sheet: SpriteSheet, scale: f32) -> AnimationPlayer {
    let mut animation = AnimationPlayer::new();
    animation.add_animation(ATTACK, sheet, 7, 0.0, 0.0, CELL_WIDTH, CELL_HEIGHT);
    animation.add_animation(IDLE, sheet, 2, 0.0, 27.0, CELL_WIDTH, CELL_HEIGHT);
    animation.add_animation(DEAD, sheet, 1, 64.0, 27.0, CELL_WIDTH, CELL_HEIGHT);
    animation.add_animation(RUN, sheet, 2, 96.0, 27.0, CELL_WIDTH, CELL_HEIGHT);
    animation.set_scale(scale);
    animation
}

#[derive(Debug, Clone)]
pub struct Ladybug {
    position: Vec2,
    move_speed: f32,
    animation: AnimationPlayer,
    last_resolution: Option<Resolution>,
}

impl Ladybug {
    pub fn new(sheet: SpriteSheet, position: Vec2, move_speed: f32, scale: f32) -> Self {
        let mut animation = ladybug_animations(sheet, scale);
        if let Err(e) = animation.play_animation(ATTACK, true) {
            warn!("Ladybug has no starting animation: {}", e);
        }

        Self {
            position,
            move_speed,
            animation,
            last_resolution: None,
        }
    }

    /// Read input, advance the animation and move, reverting on contact
    pub fn update(
        &mut self,
        dt_ms: f32,
        input: &InputState,
        obstacles: &[Obstacle],
        response: CollisionResponse,
    ) -> &Resolution {
        self.apply_hotkeys(input);

        let direction = input.direction();
        if direction.x != 0.0 {
            self.animation.set_flip_horizontal(direction.x < 0.0);
        }
        let tentative = self.position + direction * self.move_speed * dt_ms;

        if let Err(e) = self.animation.update(dt_ms) {
            debug!("Ladybug animation not advanced: {}", e);
        }

        let resolution = resolve_move(self.position, tentative, self.size(), obstacles, response);
        if resolution.was_reverted() {
            debug!(
                "Ladybug blocked ({:?}), staying at {:?}",
                resolution.outcome, resolution.position
            );
        }

        self.position = resolution.position;
        self.last_resolution.insert(resolution)
    }

    fn apply_hotkeys(&mut self, input: &InputState) {
        for (action, clip, looping, speed) in HOTKEYS {
            if input.just_pressed(action) {
                self.play(clip, looping, speed);
            }
        }
    }

    /// Switch clips and frame speed together
    pub fn play(&mut self, clip: &str, looping: bool, frame_ms: f32) {
        if let Err(e) = self.animation.play_animation(clip, looping) {
            warn!("Ladybug: {}", e);
        }
        self.animation.set_frame_speed(frame_ms);
    }

    pub fn draw(&self, list: &mut DrawList) -> Result<(), AnimationError> {
        self.animation.draw(self.position.x, self.position.y, list)
    }

    /// Box at the current position, one cell scaled by the sprite scale
    pub fn bounding_box(&self) -> Rect {
        Rect::from_position_size(self.position, self.size())
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(CELL_WIDTH, CELL_HEIGHT) * self.animation.scale()
    }

    /// Position and playback state in one line
    pub fn status(&self) -> String {
        let animation = &self.animation;
        let frames = animation
            .clip(animation.current_name())
            .map_or(0, |clip| clip.frame_count());
        let source = animation.current_frame_rect().map_or_else(
            || "none".to_string(),
            |rect| format!("{}x{} at ({}, {})", rect.w, rect.h, rect.x, rect.y),
        );

        format!(
            "ladybug at ({:.0}, {:.0}) {} {}/{} ({:.0}/{:.0} ms{}), facing {}, source {}",
            self.position.x,
            self.position.y,
            animation.current_name(),
            animation.current_frame(),
            frames,
            animation.elapsed_ms(),
            animation.frame_duration_ms(),
            if animation.is_looping() { ", looping" } else { "" },
            if animation.is_flipped_horizontal() { "left" } else { "right" },
            source
        )
    }

    pub fn last_resolution(&self) -> Option<&Resolution> {
        self.last_resolution.as_ref()
    }
}
