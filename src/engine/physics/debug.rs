use super::collision::{Obstacle, Resolution};
use crate::core::Rect;
use crate::engine::renderer::{Color, DrawList};

const OUTLINE_THICKNESS: f32 = 1.0;

/// Debug visualization for collision tests
///
/// Obstacles touched by the tracked actor this tick are outlined green, the rest red.
#[derive(Debug, Clone, Copy)]
pub struct DebugOverlay {
    enabled: bool,
    contact_color: Color,
    clear_color: Color,
    actor_color: Color,
}

impl DebugOverlay {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            contact_color: Color::GREEN,
            clear_color: Color::RED,
            actor_color: Color::rgba(1.0, 0.0, 0.0, 0.5),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        log::info!(
            "Collision overlay {}",
            if self.enabled { "enabled" } else { "disabled" }
        );
    }

    /// Outline every obstacle, colored by the actor's last resolution
    pub fn draw_obstacles(
        &self,
        obstacles: &[Obstacle],
        resolution: Option<&Resolution>,
        list: &mut DrawList,
    ) {
        if !self.enabled {
            return;
        }

        for (index, obstacle) in obstacles.iter().enumerate() {
            let touched = resolution.is_some_and(|r| r.touched(index));
            let color = if touched {
                self.contact_color
            } else {
                self.clear_color
            };
            list.stroke_rect(obstacle.bounds, color, OUTLINE_THICKNESS);
        }
    }

    /// Fill the actor's bounding box
    pub fn draw_actor(&self, bounds: Rect, list: &mut DrawList) {
        if self.enabled {
            list.fill_rect(bounds, self.actor_color);
        }
    }
}

impl Default for DebugOverlay {
    fn default() -> Self {
        Self::new(cfg!(debug_assertions))
    }
}
