// Sprite-sheet animation: clips, clip tables and the frame-stepping sprite

use super::state::ClipKind;
use crate::core::math::Rect;
use crate::engine::assets::TextureHandle;
use crate::engine::renderer::{Sprite, SpriteBatch};
use glam::Vec2;

/// Ticks each frame stays on screen
pub const DEFAULT_FRAME_HOLD: u32 = 5;

/// A horizontal strip of equal-width frames in one image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip {
    /// Image holding the frames
    pub image: TextureHandle,
    /// Number of frames the image is sliced into
    pub frame_count: usize,
    /// Pixel size of the whole image; zero if it failed to load
    pub image_size: Vec2,
}

impl AnimationClip {
    pub fn new(image: TextureHandle, frame_count: usize, image_size: Vec2) -> Self {
        Self {
            image,
            frame_count,
            image_size,
        }
    }

    /// Index of the final frame
    pub fn last_frame(&self) -> usize {
        self.frame_count.saturating_sub(1)
    }

    /// Whether the image is available for drawing
    pub fn is_loaded(&self) -> bool {
        self.image_size.x > 0.0 && self.image_size.y > 0.0
    }

    /// Width of a single frame in pixels
    pub fn frame_width(&self) -> f32 {
        self.image_size.x / self.frame_count.max(1) as f32
    }

    /// Texture coordinates of `frame` within the strip
    pub fn frame_uvs(&self, frame: usize) -> (Vec2, Vec2) {
        let count = self.frame_count.max(1) as f32;
        (
            Vec2::new(frame as f32 / count, 0.0),
            Vec2::new((frame + 1) as f32 / count, 1.0),
        )
    }
}

/// Problems with a fighter's clip table
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClipError {
    #[error("no clip provided for {}", .0.name())]
    Missing(ClipKind),

    #[error("clip {} listed twice", .0.name())]
    Duplicate(ClipKind),

    #[error("clip {} has no frames", .0.name())]
    Empty(ClipKind),
}

/// One clip for every `ClipKind`
#[derive(Debug, Clone)]
pub struct ClipSet {
    /// Indexed by `ClipKind::index`
    clips: Vec<AnimationClip>,
}

impl ClipSet {
    /// Build a complete clip table; every kind must appear exactly once with
    /// at least one frame.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (ClipKind, AnimationClip)>,
    ) -> Result<Self, ClipError> {
        let mut slots: [Option<AnimationClip>; ClipKind::COUNT] = [None; ClipKind::COUNT];

        for (kind, clip) in entries {
            if clip.frame_count == 0 {
                return Err(ClipError::Empty(kind));
            }
            let slot = &mut slots[kind.index()];
            if slot.is_some() {
                return Err(ClipError::Duplicate(kind));
            }
            *slot = Some(clip);
        }

        let clips = ClipKind::ALL
            .iter()
            .map(|&kind| slots[kind.index()].ok_or(ClipError::Missing(kind)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { clips })
    }

    pub fn get(&self, kind: ClipKind) -> &AnimationClip {
        &self.clips[kind.index()]
    }
}

/// Frame-stepping sprite drawn from an animation clip
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    /// Anchor position on the canvas
    pub position: Vec2,
    clip: AnimationClip,
    current_frame: usize,
    frames_elapsed: u32,
    frame_hold: u32,
    /// Draw scale applied to the frame size
    scale: f32,
    /// Subtracted from `position` to get the draw origin
    offset: Vec2,
}

impl AnimatedSprite {
    pub fn new(position: Vec2, clip: AnimationClip, scale: f32, offset: Vec2) -> Self {
        Self {
            position,
            clip,
            current_frame: 0,
            frames_elapsed: 0,
            frame_hold: DEFAULT_FRAME_HOLD,
            scale,
            offset,
        }
    }

    /// Override how many ticks each frame is held (minimum 1)
    #[allow(dead_code)]
    pub fn with_frame_hold(mut self, frame_hold: u32) -> Self {
        self.frame_hold = frame_hold.max(1);
        self
    }

    /// Count one tick and step to the next frame every `frame_hold` ticks,
    /// looping back to the first frame after the last.
    pub fn advance(&mut self) {
        self.frames_elapsed = self.frames_elapsed.wrapping_add(1);
        if self.frames_elapsed % self.frame_hold == 0 {
            if self.current_frame < self.clip.last_frame() {
                self.current_frame += 1;
            } else {
                self.current_frame = 0;
            }
        }
    }

    /// Queue the current frame for drawing. Unloaded images draw nothing.
    pub fn render(&self, batch: &mut SpriteBatch) {
        if !self.clip.is_loaded() {
            return;
        }

        let size = Vec2::new(
            self.clip.frame_width() * self.scale,
            self.clip.image_size.y * self.scale,
        );
        let (uv_min, uv_max) = self.clip.frame_uvs(self.current_frame);
        batch.push(Sprite::textured(
            Rect::from_min_size(self.position - self.offset, size),
            self.clip.image,
            uv_min,
            uv_max,
        ));
    }

    /// Render then advance
    pub fn update(&mut self, batch: &mut SpriteBatch) {
        self.render(batch);
        self.advance();
    }

    /// Show a different clip from its first frame.
    ///
    /// The hold counter keeps running, so the first frame of the new clip may
    /// be shown for fewer than `frame_hold` ticks.
    pub fn set_clip(&mut self, clip: AnimationClip) {
        self.clip = clip;
        self.current_frame = 0;
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    #[allow(dead_code)]
    pub fn frames_elapsed(&self) -> u32 {
        self.frames_elapsed
    }

    /// Whether the final frame of the clip is showing
    pub fn is_on_last_frame(&self) -> bool {
        self.current_frame == self.clip.last_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn clip(name: &str, frames: usize) -> AnimationClip {
        AnimationClip::new(
            TextureHandle::for_path(name),
            frames,
            Vec2::new(200.0 * frames as f32, 200.0),
        )
    }

    fn full_table() -> Vec<(ClipKind, AnimationClip)> {
        ClipKind::ALL
            .iter()
            .map(|&kind| (kind, clip(kind.name(), 4)))
            .collect()
    }

    #[test]
    fn test_frame_index_follows_hold() {
        for hold in 1..=6u32 {
            for frames in 1..=5usize {
                let mut sprite = AnimatedSprite::new(Vec2::ZERO, clip("a", frames), 1.0, Vec2::ZERO)
                    .with_frame_hold(hold);
                for t in 1..=40u32 {
                    sprite.advance();
                    let expected = (t / hold) as usize % frames;
                    assert_eq!(
                        sprite.current_frame(),
                        expected,
                        "hold {hold}, frames {frames}, tick {t}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_default_hold_is_five() {
        let mut sprite = AnimatedSprite::new(Vec2::ZERO, clip("a", 3), 1.0, Vec2::ZERO);
        for _ in 0..4 {
            sprite.advance();
        }
        assert_eq!(sprite.current_frame(), 0);
        sprite.advance();
        assert_eq!(sprite.current_frame(), 1);
    }

    #[test]
    fn test_set_clip_resets_frame_but_not_hold_counter() {
        let mut sprite = AnimatedSprite::new(Vec2::ZERO, clip("a", 8), 1.0, Vec2::ZERO);
        for _ in 0..13 {
            sprite.advance();
        }
        assert_eq!(sprite.current_frame(), 2);

        sprite.set_clip(clip("b", 4));
        assert_eq!(sprite.current_frame(), 0);
        assert_eq!(sprite.frames_elapsed(), 13);

        // Two more ticks reach the next multiple of the hold
        sprite.advance();
        sprite.advance();
        assert_eq!(sprite.current_frame(), 1);
    }

    #[test]
    fn test_single_frame_clip_stays_on_zero() {
        let mut sprite = AnimatedSprite::new(Vec2::ZERO, clip("bg", 1), 1.0, Vec2::ZERO);
        for _ in 0..20 {
            sprite.advance();
            assert_eq!(sprite.current_frame(), 0);
        }
        assert!(sprite.is_on_last_frame());
    }

    #[test]
    fn test_render_draws_current_frame_region() {
        // 4 frames of 50x40
        let strip = AnimationClip::new(TextureHandle::for_path("run"), 4, Vec2::new(200.0, 40.0));
        let mut sprite =
            AnimatedSprite::new(Vec2::new(300.0, 330.0), strip, 3.0, Vec2::new(210.0, 200.0))
                .with_frame_hold(1);
        sprite.advance();
        sprite.advance();

        let mut batch = SpriteBatch::new();
        sprite.render(&mut batch);

        let drawn = &batch.sprites()[0];
        assert_eq!(drawn.dest.min, Vec2::new(90.0, 130.0));
        assert_eq!(drawn.dest.size, Vec2::new(150.0, 120.0));
        assert_relative_eq!(drawn.uv_min.x, 0.5);
        assert_relative_eq!(drawn.uv_max.x, 0.75);
        assert_eq!(drawn.texture, Some(TextureHandle::for_path("run")));
    }

    #[test]
    fn test_update_renders_before_advancing() {
        let mut sprite =
            AnimatedSprite::new(Vec2::ZERO, clip("a", 2), 1.0, Vec2::ZERO).with_frame_hold(1);
        let mut batch = SpriteBatch::new();
        sprite.update(&mut batch);

        assert_eq!(batch.sprites()[0].uv_min.x, 0.0);
        assert_eq!(sprite.current_frame(), 1);
    }

    #[test]
    fn test_unloaded_clip_draws_nothing() {
        let missing = AnimationClip::new(TextureHandle::for_path("gone.png"), 4, Vec2::ZERO);
        let sprite = AnimatedSprite::new(Vec2::ZERO, missing, 1.0, Vec2::ZERO);
        let mut batch = SpriteBatch::new();
        sprite.render(&mut batch);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_clip_set_complete() {
        let set = ClipSet::from_entries(full_table()).unwrap();
        assert_eq!(set.get(ClipKind::Death).image, TextureHandle::for_path("death"));
    }

    #[test]
    fn test_clip_set_missing_kind() {
        let mut table = full_table();
        table.retain(|(kind, _)| *kind != ClipKind::TakeHit);
        assert_eq!(
            ClipSet::from_entries(table).unwrap_err(),
            ClipError::Missing(ClipKind::TakeHit)
        );
    }

    #[test]
    fn test_clip_set_rejects_empty_and_duplicate() {
        let mut table = full_table();
        table[2].1.frame_count = 0;
        assert_eq!(
            ClipSet::from_entries(table).unwrap_err(),
            ClipError::Empty(ClipKind::Jump)
        );

        let mut table = full_table();
        table.push((ClipKind::Run, clip("run-again", 2)));
        assert_eq!(
            ClipSet::from_entries(table).unwrap_err(),
            ClipError::Duplicate(ClipKind::Run)
        );
    }

    #[test]
    fn test_clip_error_message() {
        assert_eq!(
            ClipError::Missing(ClipKind::Attack2).to_string(),
            "no clip provided for attack2"
        );
    }
}
