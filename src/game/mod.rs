// Game layer: the ladybug, dice, level and the world that ties them together

pub mod animation;
pub mod dice;
pub mod entity;
pub mod ladybug;
pub mod level;
pub mod world;

pub use world::{Flow, GameContext, Sprites, World};
