//! Draw-call recorder
//!
//! Stands in for a real canvas when running headless. Sprites count as
//! loaded only after `mark_loaded`, mirroring images that arrive late.

use std::collections::HashSet;

use crate::sim::{Color, SpriteId, Surface};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Sprite {
        sprite: SpriteId,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    loaded: HashSet<SpriteId>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend the bitmap for `sprite` has finished loading
    pub fn mark_loaded(&mut self, sprite: SpriteId) {
        self.loaded.insert(sprite);
    }

    /// Number of draw calls since the last `Clear`
    pub fn commands_since_clear(&self) -> usize {
        self.commands
            .iter()
            .rev()
            .take_while(|c| **c != DrawCommand::Clear)
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn draw_sprite(&mut self, sprite: SpriteId, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Sprite { sprite, x, y, w, h });
    }

    fn sprite_ready(&self, sprite: SpriteId) -> bool {
        self.loaded.contains(&sprite)
    }
}
