// Collision detection and resolution for axis-aligned tiles

mod collision;
mod debug;

pub use collision::{resolve_move, CollisionResponse, Obstacle, Resolution};
pub use debug::DebugOverlay;

// Re-export for callers that inspect contacts directly
#[allow(unused_imports)]
pub use collision::{intersects, MoveOutcome};
