// Sprite-sheet animation playback

use crate::core::Rect;
use crate::engine::assets::SpriteSheet;
use crate::engine::renderer::DrawList;
use std::collections::HashMap;

/// Milliseconds each frame stays on screen until `set_frame_speed` says otherwise
pub const DEFAULT_FRAME_DURATION_MS: f32 = 100.0;

/// Uniform scale applied when drawing frames
pub const DEFAULT_SCALE: f32 = 3.0;

/// Why an animation operation had nothing to do
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimationError {
    #[error("no animation has been played yet")]
    NoClipSelected,

    #[error("animation not found: {0}")]
    ClipNotFound(String),

    #[error("animation has no frames: {0}")]
    EmptyClip(String),

    #[error("sprite sheet for animation {0} is missing")]
    MissingSheet(String),
}

/// A named run of equally sized frames cut from one row of a sprite sheet
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    name: String,
    sheet: SpriteSheet,
    frames: Vec<Rect>,
}

impl AnimationClip {
    /// Cut `frame_count` cells of `cell_w x cell_h`, starting at the origin and
    /// stepping right by `cell_w`
    ///
    /// Frames are not checked against the sheet bounds.
    pub fn new(
        name: &str,
        sheet: SpriteSheet,
        frame_count: u32,
        origin_x: f32,
        origin_y: f32,
        cell_w: f32,
        cell_h: f32,
    ) -> Self {
        let frames = (0..frame_count)
            .map(|i| Rect::new(origin_x + i as f32 * cell_w, origin_y, cell_w, cell_h))
            .collect();

        Self {
            name: name.to_string(),
            sheet,
            frames,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sheet(&self) -> SpriteSheet {
        self.sheet
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> Option<Rect> {
        self.frames.get(index).copied()
    }
}

/// Result of `play_animation` for a clip that exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Playback moved to a different clip, starting at frame 0
    Switched,
    /// The clip was already playing; frame and timer were left alone
    AlreadyPlaying,
}

/// What one `update` did to the frame index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    /// Enough time passed; moved to this frame
    Advanced(usize),
    /// Still waiting for the frame duration to elapse
    Held,
    /// Non-looping clips stay on their first frame
    Frozen,
}

/// Plays named clips for one entity
///
/// Frame timing is a single accumulator: once it reaches the frame duration the frame index
/// advances by one and the accumulator resets to zero.
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    clips: HashMap<String, AnimationClip>,
    current: Option<String>,
    frame: usize,
    elapsed_ms: f32,
    frame_duration_ms: f32,
    looping: bool,
    scale: f32,
    flip_horizontal: bool,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            clips: HashMap::new(),
            current: None,
            frame: 0,
            elapsed_ms: 0.0,
            frame_duration_ms: DEFAULT_FRAME_DURATION_MS,
            looping: false,
            scale: DEFAULT_SCALE,
            flip_horizontal: false,
        }
    }

    /// Register a clip, replacing any clip with the same name
    ///
    /// A `frame_count` of zero registers an empty clip that never draws.
    #[allow(clippy::too_many_arguments)]
    pub fn add_animation(
        &mut self,
        name: &str,
        sheet: SpriteSheet,
        frame_count: u32,
        origin_x: f32,
        origin_y: f32,
        cell_w: f32,
        cell_h: f32,
    ) {
        if frame_count == 0 {
            log::debug!("Animation {} registered without frames", name);
        }

        let clip = AnimationClip::new(name, sheet, frame_count, origin_x, origin_y, cell_w, cell_h);

        // Keep the cursor valid if the playing clip just shrank
        if self.current.as_deref() == Some(name) && self.frame >= clip.frame_count() {
            self.frame = 0;
        }

        self.clips.insert(name.to_string(), clip);
    }

    /// Play `name`, looping if `repeat` is set
    ///
    /// Asking for the clip that is already playing keeps its frame and timer. Any other
    /// name restarts from frame 0. An unknown name is still selected, so nothing draws
    /// until a known clip is played.
    pub fn play_animation(
        &mut self,
        name: &str,
        repeat: bool,
    ) -> Result<PlayOutcome, AnimationError> {
        self.looping = repeat;

        let outcome = if self.current.as_deref() == Some(name) {
            PlayOutcome::AlreadyPlaying
        } else {
            self.current = Some(name.to_string());
            self.frame = 0;
            self.elapsed_ms = 0.0;
            PlayOutcome::Switched
        };

        if !self.clips.contains_key(name) {
            return Err(AnimationError::ClipNotFound(name.to_string()));
        }

        Ok(outcome)
    }

    /// Set milliseconds per frame; applies from the next `update`
    pub fn set_frame_speed(&mut self, duration_ms: f32) {
        self.frame_duration_ms = duration_ms.max(0.0);
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    /// Advance playback by `dt_ms` milliseconds
    pub fn update(&mut self, dt_ms: f32) -> Result<FrameStep, AnimationError> {
        let frame_count = self.current_clip()?.frame_count();
        if frame_count == 0 {
            return Err(AnimationError::EmptyClip(self.current_name().to_string()));
        }

        self.elapsed_ms += dt_ms;

        if !self.looping {
            self.frame = 0;
            return Ok(FrameStep::Frozen);
        }

        if self.elapsed_ms >= self.frame_duration_ms {
            self.elapsed_ms = 0.0;
            self.frame = (self.frame + 1) % frame_count;
            return Ok(FrameStep::Advanced(self.frame));
        }

        Ok(FrameStep::Held)
    }

    /// Queue the current frame with its top-left corner at `(x, y)`
    pub fn draw(&self, x: f32, y: f32, list: &mut DrawList) -> Result<(), AnimationError> {
        let clip = self.current_clip()?;
        let src = clip
            .frame(self.frame)
            .ok_or_else(|| AnimationError::EmptyClip(clip.name().to_string()))?;
        let texture = clip
            .sheet()
            .texture()
            .ok_or_else(|| AnimationError::MissingSheet(clip.name().to_string()))?;

        let dst = Rect::new(x, y, src.w * self.scale, src.h * self.scale);
        list.sprite_ex(texture, src, dst, self.flip_horizontal);

        Ok(())
    }

    /// The clip currently selected for playback
    pub fn current_clip(&self) -> Result<&AnimationClip, AnimationError> {
        let name = self
            .current
            .as_deref()
            .ok_or(AnimationError::NoClipSelected)?;
        self.clips
            .get(name)
            .ok_or_else(|| AnimationError::ClipNotFound(name.to_string()))
    }

    /// Source rectangle of the frame that would be drawn now
    pub fn current_frame_rect(&self) -> Option<Rect> {
        self.current_clip().ok()?.frame(self.frame)
    }

    /// Name of the selected clip, empty before anything was played
    pub fn current_name(&self) -> &str {
        self.current.as_deref().unwrap_or("")
    }

    pub fn clip(&self, name: &str) -> Option<&AnimationClip> {
        self.clips.get(name)
    }

    pub fn current_frame(&self) -> usize {
        self.frame
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    pub fn frame_duration_ms(&self) -> f32 {
        self.frame_duration_ms
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }
}
