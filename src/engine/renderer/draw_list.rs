// Backend-free list of draw commands recorded by game code each frame

use super::TextureHandle;
use crate::core::Rect;

/// RGBA color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A single queued draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Copy `src` (in texture pixels) of a texture to `dst` (in screen pixels)
    Sprite {
        texture: TextureHandle,
        src: Rect,
        dst: Rect,
        flip_horizontal: bool,
    },
    /// Solid rectangle
    Fill { rect: Rect, color: Color },
    /// Rectangle outline of the given thickness, drawn inside `rect`
    Stroke {
        rect: Rect,
        color: Color,
        thickness: f32,
    },
}

/// Ordered draw commands for one frame; later commands are drawn on top
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
        }
    }

    /// Draw a sub-rectangle of a texture
    pub fn sprite(&mut self, texture: TextureHandle, src: Rect, dst: Rect) {
        self.sprite_ex(texture, src, dst, false);
    }

    /// Draw a sub-rectangle of a texture, optionally mirrored horizontally
    pub fn sprite_ex(
        &mut self,
        texture: TextureHandle,
        src: Rect,
        dst: Rect,
        flip_horizontal: bool,
    ) {
        self.commands.push(DrawCommand::Sprite {
            texture,
            src,
            dst,
            flip_horizontal,
        });
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Fill { rect, color });
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color, thickness: f32) {
        self.commands.push(DrawCommand::Stroke {
            rect,
            color,
            thickness,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all commands (call at the start of every frame)
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

/// Split a rectangle outline into four solid edge rectangles
pub fn stroke_edges(rect: Rect, thickness: f32) -> [Rect; 4] {
    let t = thickness.min(rect.w / 2.0).min(rect.h / 2.0).max(0.0);
    [
        Rect::new(rect.x, rect.y, rect.w, t),
        Rect::new(rect.x, rect.bottom() - t, rect.w, t),
        Rect::new(rect.x, rect.y + t, t, rect.h - 2.0 * t),
        Rect::new(rect.right() - t, rect.y + t, t, rect.h - 2.0 * t),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_keep_order() {
        let mut list = DrawList::new();
        let texture = TextureHandle::new(0);
        list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED);
        list.sprite(texture, Rect::new(0.0, 0.0, 8.0, 8.0), Rect::new(10.0, 10.0, 24.0, 24.0));

        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::Fill { .. }));
        assert!(matches!(
            list.commands()[1],
            DrawCommand::Sprite {
                flip_horizontal: false,
                ..
            }
        ));
    }

    #[test]
    fn test_clear() {
        let mut list = DrawList::new();
        list.stroke_rect(Rect::new(0.0, 0.0, 32.0, 32.0), Color::GREEN, 1.0);
        assert!(!list.is_empty());

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_stroke_edges_cover_outline() {
        let edges = stroke_edges(Rect::new(0.0, 0.0, 32.0, 32.0), 2.0);
        assert_eq!(edges[0], Rect::new(0.0, 0.0, 32.0, 2.0));
        assert_eq!(edges[1], Rect::new(0.0, 30.0, 32.0, 2.0));
        assert_eq!(edges[2], Rect::new(0.0, 2.0, 2.0, 28.0));
        assert_eq!(edges[3], Rect::new(30.0, 2.0, 2.0, 28.0));
    }

    #[test]
    fn test_stroke_thickness_clamped_to_rect() {
        let edges = stroke_edges(Rect::new(0.0, 0.0, 4.0, 4.0), 10.0);
        assert_eq!(edges[0].h, 2.0);
        assert_eq!(edges[2].h, 0.0);
    }
}
