// Static level geometry: the wall ring around the screen

use crate::core::Rect;
use crate::engine::assets::SpriteSheet;
use crate::engine::physics::Obstacle;
use crate::engine::renderer::DrawList;
use glam::Vec2;

/// Build a ring of square tiles along the edges of a `screen`-sized area
///
/// Top and bottom rows span the full width; the side columns fill only the rows in between,
/// so corners appear once and no two tiles overlap. Tiles are returned in row-then-column
/// order: top, bottom, left, right.
pub fn wall_ring(screen: Vec2, tile_size: f32) -> Vec<Obstacle> {
    if tile_size <= 0.0 || screen.x < tile_size || screen.y < tile_size {
        return Vec::new();
    }

    let columns = (screen.x / tile_size).floor() as usize;
    let bottom_y = screen.y - tile_size;
    let right_x = screen.x - tile_size;
    let has_bottom = bottom_y >= tile_size;
    let has_right = right_x >= tile_size;

    let mut tiles = Vec::new();

    for i in 0..columns {
        tiles.push(Obstacle::tile(Vec2::new(i as f32 * tile_size, 0.0), tile_size));
    }
    if has_bottom {
        for i in 0..columns {
            tiles.push(Obstacle::tile(Vec2::new(i as f32 * tile_size, bottom_y), tile_size));
        }
    }

    // Side rows start below the top row and stop before reaching the bottom row
    let side_rows = if has_bottom {
        (bottom_y / tile_size).floor() as usize
    } else {
        (screen.y / tile_size).floor() as usize
    };

    for j in 1..side_rows {
        tiles.push(Obstacle::tile(Vec2::new(0.0, j as f32 * tile_size), tile_size));
    }
    if has_right {
        for j in 1..side_rows {
            tiles.push(Obstacle::tile(Vec2::new(right_x, j as f32 * tile_size), tile_size));
        }
    }

    tiles
}

/// Obstacles plus the images they and the backdrop are drawn with
#[derive(Debug, Clone)]
pub struct Level {
    obstacles: Vec<Obstacle>,
    screen: Vec2,
    wall_sheet: SpriteSheet,
    background: SpriteSheet,
}

impl Level {
    /// The walled arena used by the game
    pub fn arena(
        screen: Vec2,
        tile_size: f32,
        wall_sheet: SpriteSheet,
        background: SpriteSheet,
    ) -> Self {
        let obstacles = wall_ring(screen, tile_size);
        log::info!("Built wall ring with {} tiles", obstacles.len());
        Self {
            obstacles,
            screen,
            wall_sheet,
            background,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Queue the backdrop, stretched over the screen, and one wall image per tile
    pub fn draw(&self, list: &mut DrawList) {
        if let Some(texture) = self.background.texture() {
            let dst = Rect::new(0.0, 0.0, self.screen.x, self.screen.y);
            list.sprite(texture, sheet_rect(&self.background), dst);
        }

        let Some(texture) = self.wall_sheet.texture() else {
            return;
        };
        let src = sheet_rect(&self.wall_sheet);
        for obstacle in &self.obstacles {
            list.sprite(texture, src, obstacle.bounds);
        }
    }
}

fn sheet_rect(sheet: &SpriteSheet) -> Rect {
    Rect::new(0.0, 0.0, sheet.width() as f32, sheet.height() as f32)
}
