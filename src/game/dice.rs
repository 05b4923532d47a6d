// Dice spawned by the player

use crate::core::Rect;
use crate::engine::assets::SpriteSheet;
use crate::engine::renderer::DrawList;
use fastrand::Rng;
use glam::Vec2;

/// Each face occupies one square cell on the dice sheet, left to right from face 1
pub const FACE_SIZE: f32 = 32.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Dice {
    position: Vec2,
    min: i32,
    max: i32,
    value: i32,
    sheet: SpriteSheet,
}

impl Dice {
    /// Spawn a die at `position` and roll it once
    ///
    /// A reversed range is swapped rather than rejected.
    pub fn new(position: Vec2, min: i32, max: i32, sheet: SpriteSheet, rng: &mut Rng) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let mut dice = Self {
            position,
            min,
            max,
            value: min,
            sheet,
        };
        dice.roll(rng);
        dice
    }

    /// Roll a new value, uniform over the inclusive range
    pub fn roll(&mut self, rng: &mut Rng) -> i32 {
        self.value = rng.i32(self.min..=self.max);
        log::debug!("Rolled {} ({}..={})", self.value, self.min, self.max);
        self.value
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::from_position_size(self.position, Vec2::splat(FACE_SIZE))
    }

    /// Sheet cell showing the current value, if the sheet has one
    pub fn face_rect(&self) -> Option<Rect> {
        if self.value < 1 {
            return None;
        }
        let x = (self.value - 1) as f32 * FACE_SIZE;
        if x + FACE_SIZE > self.sheet.width() as f32 || FACE_SIZE > self.sheet.height() as f32 {
            return None;
        }
        Some(Rect::new(x, 0.0, FACE_SIZE, FACE_SIZE))
    }

    pub fn draw(&self, list: &mut DrawList) {
        let (Some(texture), Some(src)) = (self.sheet.texture(), self.face_rect()) else {
            return;
        };
        list.sprite(texture, src, self.bounding_box());
    }
}
