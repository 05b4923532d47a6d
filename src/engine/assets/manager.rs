// Loads sprite sheets from disk into GPU textures

use super::{AssetLoader, SpriteSheet};
use crate::engine::renderer::TextureManager;
use log::{info, warn};
use std::path::Path;

/// Central asset manager for the game
///
/// Load failures never abort the game: they are logged and produce a missing sheet.
pub struct AssetManager {
    loader: AssetLoader,
    loaded: usize,
    failed: usize,
}

impl AssetManager {
    pub fn new<P: AsRef<Path>>(asset_path: P) -> Self {
        Self {
            loader: AssetLoader::new(asset_path),
            loaded: 0,
            failed: 0,
        }
    }

    /// Load an image as a sprite sheet, or a missing sheet if anything goes wrong
    pub fn load_sheet(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        textures: &mut TextureManager,
        name: &str,
    ) -> SpriteSheet {
        if let Some(handle) = textures.handle(name) {
            if let Some(texture) = textures.get(handle) {
                return SpriteSheet::new(handle, texture.width, texture.height);
            }
        }

        let image = match self.loader.load_image(name) {
            Ok(image) => image,
            Err(e) => {
                warn!("Failed to load texture {}: {}", name, e);
                self.failed += 1;
                return SpriteSheet::missing();
            }
        };

        match textures.insert_rgba(device, queue, name, &image.rgba, image.width, image.height) {
            Ok(handle) => {
                info!("Loaded {} ({}x{})", name, image.width, image.height);
                self.loaded += 1;
                SpriteSheet::new(handle, image.width, image.height)
            }
            Err(e) => {
                warn!("Failed to create texture for {}: {}", name, e);
                self.failed += 1;
                SpriteSheet::missing()
            }
        }
    }

    /// Get statistics about loaded assets
    pub fn stats(&self) -> AssetStats {
        AssetStats {
            loaded: self.loaded,
            failed: self.failed,
        }
    }

    pub fn loader(&self) -> &AssetLoader {
        &self.loader
    }
}

/// Statistics about asset loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetStats {
    pub loaded: usize,
    pub failed: usize,
}
