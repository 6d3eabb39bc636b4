//! Frame timing for the idle-screen sprites.
//!
//! Only indices and timestamps live here; the renderer maps a
//! [`SpriteSheet`] and frame index to actual pixels.

use heapless::Vec;

use crate::time::has_elapsed;

pub const MAX_SPRITES: usize = 16;

/// Frame set a sprite cycles through.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpriteSheet {
    Fan,
}

impl SpriteSheet {
    pub const fn frame_count(self) -> u8 {
        match self {
            Self::Fan => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SpriteId(u8);

impl SpriteId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Sprite {
    pub x: i16,
    pub y: i16,
    pub width: u8,
    pub height: u8,
    pub sheet: SpriteSheet,
    interval_ms: u32,
    frame: u8,
    last_advance_ms: u32,
    visible: bool,
}

impl Sprite {
    pub const fn frame(&self) -> u8 {
        self.frame
    }

    pub const fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

#[derive(Debug, Default)]
pub struct SpriteAnimator {
    sprites: Vec<Sprite, MAX_SPRITES>,
}

impl SpriteAnimator {
    pub const fn new() -> Self {
        Self { sprites: Vec::new() }
    }

    /// Register a visible sprite at frame 0. Returns `None` once full.
    pub fn add_sprite(
        &mut self,
        x: i16,
        y: i16,
        width: u8,
        height: u8,
        sheet: SpriteSheet,
        interval_ms: u32,
    ) -> Option<SpriteId> {
        let id = SpriteId(self.sprites.len() as u8);
        self.sprites
            .push(Sprite {
                x,
                y,
                width,
                height,
                sheet,
                interval_ms,
                frame: 0,
                last_advance_ms: 0,
                visible: true,
            })
            .ok()?;
        Some(id)
    }

    /// Change the frame interval; the current frame is kept.
    pub fn set_interval(&mut self, id: SpriteId, interval_ms: u32) {
        if let Some(sprite) = self.sprites.get_mut(id.index()) {
            sprite.interval_ms = interval_ms;
        }
    }

    pub fn set_visible(&mut self, id: SpriteId, visible: bool) {
        if let Some(sprite) = self.sprites.get_mut(id.index()) {
            sprite.visible = visible;
        }
    }

    /// Step every visible sprite whose interval has elapsed. Returns whether
    /// any frame changed.
    pub fn advance(&mut self, now_ms: u32) -> bool {
        let mut changed = false;
        for sprite in self.sprites.iter_mut() {
            let frames = sprite.sheet.frame_count();
            if !sprite.visible || frames == 0 {
                continue;
            }
            if has_elapsed(now_ms, sprite.last_advance_ms, sprite.interval_ms) {
                sprite.frame = (sprite.frame + 1) % frames;
                sprite.last_advance_ms = now_ms;
                changed = true;
            }
        }
        changed
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

/// Alternate between two intervals, switching every `period_ms`.
pub fn duty_cycle_interval(now_ms: u32, period_ms: u32, fast_ms: u32, slow_ms: u32) -> u32 {
    if (now_ms / period_ms.max(1)) % 2 == 0 {
        fast_ms
    } else {
        slow_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_wrap_at_interval() {
        let mut animator = SpriteAnimator::new();
        let id = animator
            .add_sprite(0, 0, 16, 16, SpriteSheet::Fan, 50)
            .expect("slot");

        assert!(!animator.advance(49));
        for (now, expected) in [(50, 1), (100, 2), (150, 3), (200, 0)] {
            assert!(animator.advance(now));
            assert_eq!(animator.sprites()[id.index()].frame(), expected);
        }
    }

    #[test]
    fn hidden_sprites_hold_their_frame() {
        let mut animator = SpriteAnimator::new();
        let id = animator
            .add_sprite(0, 0, 16, 16, SpriteSheet::Fan, 10)
            .expect("slot");
        animator.set_visible(id, false);
        assert!(!animator.advance(1_000));
        assert_eq!(animator.sprites()[0].frame(), 0);
    }

    #[test]
    fn interval_change_keeps_frame_index() {
        let mut animator = SpriteAnimator::new();
        let id = animator
            .add_sprite(0, 0, 16, 16, SpriteSheet::Fan, 10)
            .expect("slot");
        animator.advance(10);
        animator.advance(20);
        animator.set_interval(id, 800);
        assert_eq!(animator.sprites()[0].frame(), 2);
        assert!(!animator.advance(500));
        assert!(animator.advance(820));
        assert_eq!(animator.sprites()[0].frame(), 3);
    }

    #[test]
    fn capacity_is_bounded() {
        let mut animator = SpriteAnimator::new();
        for _ in 0..MAX_SPRITES {
            assert!(animator.add_sprite(0, 0, 8, 8, SpriteSheet::Fan, 100).is_some());
        }
        assert!(animator.add_sprite(0, 0, 8, 8, SpriteSheet::Fan, 100).is_none());
    }

    #[test]
    fn duty_cycle_alternates_per_period() {
        assert_eq!(duty_cycle_interval(0, 5_000, 50, 800), 50);
        assert_eq!(duty_cycle_interval(5_000, 5_000, 50, 800), 800);
        assert_eq!(duty_cycle_interval(10_001, 5_000, 50, 800), 50);
    }
}
