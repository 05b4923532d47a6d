// Game state and the per-tick update

use super::dice::Dice;
use super::entity::Entity;
use super::ladybug::Ladybug;
use super::level::Level;
use crate::config::GameConfig;
use crate::engine::assets::SpriteSheet;
use crate::engine::input::{Action, InputState};
use crate::engine::physics::{CollisionResponse, DebugOverlay};
use crate::engine::renderer::DrawList;
use fastrand::Rng;
use glam::Vec2;
use log::{debug, info};

/// Shared state handed to entities during updates
#[derive(Debug)]
pub struct GameContext {
    pub rng: Rng,
    pub screen: Vec2,
    pub collision: CollisionResponse,
}

impl GameContext {
    pub fn new(screen: Vec2, collision: CollisionResponse) -> Self {
        Self {
            rng: Rng::new(),
            screen,
            collision,
        }
    }

    /// Deterministic context for replays and tests
    pub fn with_seed(seed: u64, screen: Vec2, collision: CollisionResponse) -> Self {
        Self {
            rng: Rng::with_seed(seed),
            screen,
            collision,
        }
    }
}

/// Sprite sheets the world draws with; any of them may be missing
#[derive(Debug, Clone, Copy)]
pub struct Sprites {
    pub ladybug: SpriteSheet,
    pub dice: SpriteSheet,
    pub wall: SpriteSheet,
    pub background: SpriteSheet,
}

impl Default for Sprites {
    fn default() -> Self {
        Self {
            ladybug: SpriteSheet::missing(),
            dice: SpriteSheet::missing(),
            wall: SpriteSheet::missing(),
            background: SpriteSheet::missing(),
        }
    }
}

/// Whether the loop should keep going after this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct World {
    entities: Vec<Entity>,
    level: Level,
    overlay: DebugOverlay,
    dice_sheet: SpriteSheet,
    dice_range: (i32, i32),
    ctx: GameContext,
}

impl World {
    pub fn new(config: &GameConfig, sprites: Sprites, ctx: GameContext) -> Self {
        let level = Level::arena(ctx.screen, config.tile_size, sprites.wall, sprites.background);
        let ladybug = Ladybug::new(
            sprites.ladybug,
            config.spawn,
            config.move_speed,
            config.sprite_scale,
        );

        info!(
            "World ready: {} obstacles, collision response {:?}",
            level.obstacles().len(),
            ctx.collision
        );

        Self {
            entities: vec![ladybug.into()],
            level,
            overlay: DebugOverlay::new(config.debug_overlay),
            dice_sheet: sprites.dice,
            dice_range: (config.dice_min, config.dice_max),
            ctx,
        }
    }

    /// Advance everything by `dt_ms`
    ///
    /// A quit request still runs the full tick so the in-flight frame completes.
    pub fn tick(&mut self, dt_ms: f32, input: &InputState) -> Flow {
        if input.just_pressed(Action::ToggleDebug) {
            self.overlay.toggle();
        }
        if input.just_pressed(Action::SpawnDice) {
            self.spawn_dice(input.cursor());
        }

        for entity in &mut self.entities {
            entity.update(dt_ms, input, self.level.obstacles(), &mut self.ctx);
        }

        if input.just_pressed(Action::Quit) {
            info!("Quit requested");
            Flow::Quit
        } else {
            Flow::Continue
        }
    }

    pub fn spawn_dice(&mut self, position: Vec2) {
        let (min, max) = self.dice_range;
        let dice = Dice::new(position, min, max, self.dice_sheet, &mut self.ctx.rng);
        debug!("Spawned dice at {:?} showing {}", position, dice.value());
        self.entities.push(dice.into());
    }

    /// Queue the level, then entities in spawn order, then the debug overlay
    pub fn draw(&self, list: &mut DrawList) {
        self.level.draw(list);

        for entity in &self.entities {
            if let Err(e) = entity.draw(list) {
                debug!("Skipped drawing {}: {}", entity.name(), e);
            }
        }

        if !self.overlay.is_enabled() {
            return;
        }
        let resolution = self.ladybug().and_then(|ladybug| ladybug.last_resolution());
        self.overlay.draw_obstacles(self.level.obstacles(), resolution, list);
        for entity in &self.entities {
            self.overlay.draw_actor(entity.bounding_box(), list);
        }
    }

    /// One-line summary for the periodic status log
    pub fn status(&self) -> String {
        let ladybug = self
            .ladybug()
            .map_or_else(|| "no ladybug".to_string(), Ladybug::status);
        format!("{}; {} dice", ladybug, self.dice().count())
    }

    pub fn ladybug(&self) -> Option<&Ladybug> {
        self.entities.iter().find_map(|entity| match entity {
            Entity::Ladybug(ladybug) => Some(ladybug),
            _ => None,
        })
    }

    pub fn dice(&self) -> impl Iterator<Item = &Dice> {
        self.entities.iter().filter_map(|entity| match entity {
            Entity::Dice(dice) => Some(dice),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::renderer::{DrawCommand, TextureHandle};

    fn config() -> GameConfig {
        GameConfig {
            debug_overlay: false,
            ..GameConfig::default()
        }
    }

    fn sprites() -> Sprites {
        Sprites {
            ladybug: SpriteSheet::new(TextureHandle::new(1), 256, 54),
            dice: SpriteSheet::new(TextureHandle::new(2), 192, 32),
            wall: SpriteSheet::new(TextureHandle::new(3), 32, 32),
            background: SpriteSheet::missing(),
        }
    }

    fn world() -> World {
        let config = config();
        let ctx = GameContext::with_seed(42, config.screen_size(), config.collision);
        World::new(&config, sprites(), ctx)
    }

    fn ladybug_position(world: &World) -> Vec2 {
        world.ladybug().unwrap().bounding_box().position()
    }

    fn pressing(actions: &[Action]) -> InputState {
        let mut input = InputState::new();
        for action in actions {
            input.press(*action);
        }
        input
    }

    #[test]
    fn test_starts_with_ladybug_in_arena() {
        let world = world();
        assert_eq!(world.entities.len(), 1);
        assert_eq!(world.level.obstacles().len(), 120);
        let ladybug = world.ladybug().unwrap();
        assert_eq!(ladybug.bounding_box().position(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_ladybug_moves_inside_arena() {
        let mut world = world();
        let flow = world.tick(10.0, &pressing(&[Action::MoveRight]));
        assert_eq!(flow, Flow::Continue);
        assert_eq!(ladybug_position(&world), Vec2::new(110.0, 100.0));
    }

    #[test]
    fn test_wall_blocks_ladybug() {
        let mut world = world();
        // 100 - 80 = 20 puts the box inside the left wall column
        world.tick(80.0, &pressing(&[Action::MoveLeft]));
        let ladybug = world.ladybug().unwrap();
        assert_eq!(ladybug.bounding_box().position(), Vec2::new(100.0, 100.0));
        assert!(ladybug.last_resolution().unwrap().was_reverted());
    }

    #[test]
    fn test_click_spawns_dice_at_cursor() {
        let mut world = world();
        let mut input = pressing(&[Action::SpawnDice]);
        input.set_cursor(Vec2::new(400.0, 300.0));

        world.tick(16.0, &input);

        let dice: Vec<_> = world.dice().collect();
        assert_eq!(dice.len(), 1);
        assert_eq!(dice[0].bounding_box().position(), Vec2::new(400.0, 300.0));
        assert!((1..=6).contains(&dice[0].value()));
    }

    #[test]
    fn test_reroll_keeps_dice_in_range() {
        let mut world = world();
        world.spawn_dice(Vec2::new(200.0, 200.0));
        world.spawn_dice(Vec2::new(260.0, 200.0));

        for _ in 0..20 {
            world.tick(16.0, &pressing(&[Action::RerollDice]));
            assert!(world.dice().all(|d| (1..=6).contains(&d.value())));
        }
    }

    #[test]
    fn test_quit_is_reported_after_update() {
        let mut world = world();
        let flow = world.tick(10.0, &pressing(&[Action::Quit, Action::MoveDown]));
        assert_eq!(flow, Flow::Quit);
        assert_eq!(ladybug_position(&world), Vec2::new(100.0, 110.0));
    }

    #[test]
    fn test_toggle_debug_overlay() {
        let mut world = world();
        let drawn = |world: &World| {
            let mut list = DrawList::new();
            world.draw(&mut list);
            list.len()
        };
        let plain = drawn(&world);

        world.tick(0.0, &pressing(&[Action::ToggleDebug]));
        assert!(drawn(&world) > plain);

        world.tick(0.0, &pressing(&[Action::ToggleDebug]));
        assert_eq!(drawn(&world), plain);
    }

    #[test]
    fn test_draw_order_and_overlay() {
        let mut world = world();
        world.spawn_dice(Vec2::new(300.0, 300.0));

        let mut list = DrawList::new();
        world.draw(&mut list);
        // 120 walls + ladybug + dice
        assert_eq!(list.len(), 122);

        world.tick(0.0, &pressing(&[Action::ToggleDebug]));
        let mut list = DrawList::new();
        world.draw(&mut list);
        // plus one outline per wall and a fill per entity
        assert_eq!(list.len(), 122 + 120 + 2);
        assert!(matches!(list.commands().last(), Some(DrawCommand::Fill { .. })));
    }

    #[test]
    fn test_missing_sprites_still_tick() {
        let config = config();
        let ctx = GameContext::with_seed(1, config.screen_size(), config.collision);
        let mut world = World::new(&config, Sprites::default(), ctx);

        world.tick(5.0, &pressing(&[Action::MoveDown]));
        assert_eq!(ladybug_position(&world), Vec2::new(100.0, 105.0));

        let mut list = DrawList::new();
        world.draw(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_status_line() {
        let mut world = world();
        world.spawn_dice(Vec2::new(300.0, 300.0));
        let status = world.status();
        assert!(status.starts_with("ladybug at (100, 100) Attack 0/7"), "{status}");
        assert!(status.ends_with("; 1 dice"), "{status}");
    }
}
