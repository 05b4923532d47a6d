use crate::engine::renderer::TextureHandle;

/// An immutable image that animation clips and tiles are cut from
///
/// A sheet whose image failed to load is "missing": it keeps the entity alive but every
/// draw from it is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheet {
    texture: Option<TextureHandle>,
    width: u32,
    height: u32,
}

impl SpriteSheet {
    pub fn new(texture: TextureHandle, width: u32, height: u32) -> Self {
        Self {
            texture: Some(texture),
            width,
            height,
        }
    }

    pub fn missing() -> Self {
        Self {
            texture: None,
            width: 0,
            height: 0,
        }
    }

    pub fn texture(&self) -> Option<TextureHandle> {
        self.texture
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
