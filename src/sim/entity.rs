//! Renderable rectangles and the concrete game entities built on them

use glam::Vec2;

use super::surface::{Color, SpriteId, Surface};

/// How an entity is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub color: Color,
    /// Bitmap to draw instead of the color, once loaded
    pub sprite: Option<SpriteId>,
}

impl Visual {
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            sprite: None,
        }
    }

    pub fn sprite(sprite: SpriteId, fallback: Color) -> Self {
        Self {
            color: fallback,
            sprite: Some(sprite),
        }
    }
}

/// Axis-aligned rectangle with a visual
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Top-left corner (may be fractional while tweening)
    pub pos: Vec2,
    size: Vec2,
    pub visual: Visual,
}

impl Entity {
    pub fn new(pos: Vec2, size: Vec2, visual: Visual) -> Self {
        debug_assert!(
            size.x >= 0.0 && size.y >= 0.0,
            "entity size must be non-negative, got {size}"
        );
        Self { pos, size, visual }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Strict overlap test; touching edges do not count
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }

    /// Paint at the current position, falling back to a color fill while
    /// the sprite is unavailable
    pub fn draw(&self, surface: &mut dyn Surface) {
        let Vec2 { x, y } = self.pos;
        match self.visual.sprite {
            Some(sprite) if surface.sprite_ready(sprite) => {
                surface.draw_sprite(sprite, x, y, self.size.x, self.size.y);
            }
            _ => surface.fill_rect(x, y, self.size.x, self.size.y, self.visual.color),
        }
    }
}

/// The player's ship. Only moved by input.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Entity,
    /// Pixels per frame while a direction is held
    pub speed: f32,
}

impl Player {
    /// Move horizontally by `dx`, keeping the ship inside `[0, field_width - width]`
    pub fn nudge(&mut self, dx: f32, field_width: f32) {
        let max_x = (field_width - self.body.width()).max(0.0);
        self.body.pos.x = (self.body.pos.x + dx).clamp(0.0, max_x);
    }
}

/// A shot travelling straight up
#[derive(Debug, Clone)]
pub struct Projectile {
    pub body: Entity,
    /// Pixels per frame, upward
    pub speed: f32,
}

impl Projectile {
    pub fn advance(&mut self) {
        self.body.pos.y -= self.speed;
    }

    /// Fully above the top of the field
    pub fn is_off_screen(&self) -> bool {
        self.body.bottom() < 0.0
    }
}
