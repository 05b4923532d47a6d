// Asset management system
//
// Resolves asset paths, decodes images and turns them into sprite sheets.

mod loader;
mod manager;
mod sheet;

pub use loader::AssetLoader;
pub use manager::AssetManager;
pub use sheet::SpriteSheet;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode {name}: {reason}")]
    Decode { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
