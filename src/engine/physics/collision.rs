// Axis-aligned collision detection and move resolution

use crate::core::Rect;
use glam::Vec2;

/// Check whether two axis-aligned rectangles overlap with non-zero area
///
/// Rectangles that only share an edge are not considered intersecting.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// A static collidable tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub bounds: Rect,
}

impl Obstacle {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }

    /// Square tile with its top-left corner at `position`
    pub fn tile(position: Vec2, tile_size: f32) -> Self {
        Self::new(Rect::from_position_size(position, Vec2::splat(tile_size)))
    }
}

/// How a blocked move is corrected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionResponse {
    /// Any contact reverts the whole move
    #[default]
    FullRevert,
    /// Horizontal and vertical components are tested and reverted separately
    PerAxis,
}

/// What happened to a tentative move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No obstacle was touched; the tentative position was committed
    Committed,
    /// At least one obstacle was touched and the move was (partly) undone
    Reverted { contacts: usize },
    /// There were no obstacles to test against
    Unobstructed,
}

/// Result of resolving one actor's move against the obstacle set
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Position the actor ends the tick at
    pub position: Vec2,
    pub outcome: MoveOutcome,
    /// Per-obstacle contact flags for the tentative box, in registration order
    pub contacts: Vec<bool>,
}

impl Resolution {
    pub fn was_reverted(&self) -> bool {
        matches!(self.outcome, MoveOutcome::Reverted { .. })
    }

    /// Whether the obstacle at `index` touched the tentative box
    pub fn touched(&self, index: usize) -> bool {
        self.contacts.get(index).copied().unwrap_or(false)
    }
}

/// Test `bounds` against every obstacle, without stopping at the first hit
pub fn sweep(bounds: &Rect, obstacles: &[Obstacle]) -> Vec<bool> {
    obstacles
        .iter()
        .map(|obstacle| intersects(bounds, &obstacle.bounds))
        .collect()
}

/// Validate a tentative move against all obstacles
///
/// `previous` is the last committed position and `size` the actor's box size. The box is
/// rebuilt at `tentative` before testing.
pub fn resolve_move(
    previous: Vec2,
    tentative: Vec2,
    size: Vec2,
    obstacles: &[Obstacle],
    response: CollisionResponse,
) -> Resolution {
    if obstacles.is_empty() {
        return Resolution {
            position: tentative,
            outcome: MoveOutcome::Unobstructed,
            contacts: Vec::new(),
        };
    }

    let contacts = sweep(&Rect::from_position_size(tentative, size), obstacles);
    let hits = contacts.iter().filter(|hit| **hit).count();

    if hits == 0 {
        return Resolution {
            position: tentative,
            outcome: MoveOutcome::Committed,
            contacts,
        };
    }

    let position = match response {
        CollisionResponse::FullRevert => previous,
        CollisionResponse::PerAxis => resolve_per_axis(previous, tentative, size, obstacles),
    };

    Resolution {
        position,
        outcome: MoveOutcome::Reverted { contacts: hits },
        contacts,
    }
}

fn blocked(position: Vec2, size: Vec2, obstacles: &[Obstacle]) -> bool {
    let bounds = Rect::from_position_size(position, size);
    obstacles
        .iter()
        .any(|obstacle| intersects(&bounds, &obstacle.bounds))
}

fn resolve_per_axis(previous: Vec2, tentative: Vec2, size: Vec2, obstacles: &[Obstacle]) -> Vec2 {
    let mut position = previous;

    let horizontal = Vec2::new(tentative.x, previous.y);
    if !blocked(horizontal, size, obstacles) {
        position.x = tentative.x;
    }

    let vertical = Vec2::new(position.x, tentative.y);
    if !blocked(vertical, size, obstacles) {
        position.y = tentative.y;
    }

    position
}
