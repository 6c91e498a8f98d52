//! Drawing interface the simulation renders through
//!
//! The simulation never touches a platform API directly. Hosts provide a
//! `Surface` (an HTML canvas in the browser, a recorder in tests).

/// Named fill colors used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Black,
    Red,
    White,
    Green,
}

impl Color {
    /// CSS color string for canvas fill styles
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::White => "white",
            Color::Green => "green",
        }
    }
}

/// Bitmap handles the host loads on the game's behalf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Enemy,
    Projectile,
}

/// Render target for a single frame
pub trait Surface {
    /// Clear the whole field
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// Draw a bitmap scaled to the given rectangle
    fn draw_sprite(&mut self, sprite: SpriteId, x: f32, y: f32, w: f32, h: f32);

    /// Whether a bitmap has finished loading and can be drawn
    fn sprite_ready(&self, sprite: SpriteId) -> bool;
}
