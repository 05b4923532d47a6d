// Everything that lives in the world and is updated each tick

use super::animation::AnimationError;
use super::dice::Dice;
use super::ladybug::Ladybug;
use super::world::GameContext;
use crate::core::Rect;
use crate::engine::input::{Action, InputState};
use crate::engine::physics::Obstacle;
use crate::engine::renderer::DrawList;

#[derive(Debug, Clone)]
pub enum Entity {
    Ladybug(Ladybug),
    Dice(Dice),
}

impl Entity {
    pub fn update(
        &mut self,
        dt_ms: f32,
        input: &InputState,
        obstacles: &[Obstacle],
        ctx: &mut GameContext,
    ) {
        match self {
            Entity::Ladybug(ladybug) => {
                ladybug.update(dt_ms, input, obstacles, ctx.collision);
            }
            Entity::Dice(dice) => {
                if input.just_pressed(Action::RerollDice) {
                    dice.roll(&mut ctx.rng);
                }
            }
        }
    }

    pub fn draw(&self, list: &mut DrawList) -> Result<(), AnimationError> {
        match self {
            Entity::Ladybug(ladybug) => ladybug.draw(list),
            Entity::Dice(dice) => {
                dice.draw(list);
                Ok(())
            }
        }
    }

    pub fn bounding_box(&self) -> Rect {
        match self {
            Entity::Ladybug(ladybug) => ladybug.bounding_box(),
            Entity::Dice(dice) => dice.bounding_box(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Entity::Ladybug(_) => "ladybug",
            Entity::Dice(_) => "dice",
        }
    }
}

impl From<Ladybug> for Entity {
    fn from(ladybug: Ladybug) -> Self {
        Entity::Ladybug(ladybug)
    }
}

impl From<Dice> for Entity {
    fn from(dice: Dice) -> Self {
        Entity::Dice(dice)
    }
}
