//! Egg Invaders - A sweep-and-descend invaders arcade game
//!
//! Core modules:
//! - `sim`: Simulation core (entities, tweening, formation, collisions, frame loop)
//! - `renderer`: Render surfaces (HTML canvas, draw-call recorder)
//! - `settings`: Tunable game constants loaded from JSON

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Time units are milliseconds (matches `requestAnimationFrame` timestamps)
    pub const TWEEN_DURATION_MS: f64 = 1000.0;
    /// Period of the formation movement timer
    pub const MOVEMENT_TICK_MS: f64 = 1000.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Pixels per frame while a direction key is held
    pub const PLAYER_SPEED: f32 = 3.0;
    /// Distance of the player's top edge from the bottom of the field
    pub const PLAYER_BOTTOM_OFFSET: f32 = 45.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 30.0;
    pub const PROJECTILE_HEIGHT: f32 = 30.0;
    /// Pixels per frame, upward
    pub const PROJECTILE_SPEED: f32 = 5.0;
    /// Maximum live projectiles
    pub const PROJECTILE_LIMIT: usize = 5;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 50.0;
    pub const ENEMY_HEIGHT: f32 = 74.0;
    /// Horizontal distance covered by one movement tick
    pub const ENEMY_STEP: f32 = 50.0;
    /// Extra gap added below the enemy's height when the formation drops
    pub const ENEMY_DROP_MARGIN: f32 = 50.0;
    pub const ENEMY_COLUMNS: u32 = 7;
    pub const ENEMY_ROWS: u32 = 1;
    pub const FORMATION_ORIGIN_X: f32 = 150.0;
    pub const FORMATION_ORIGIN_Y: f32 = 150.0;
    pub const FORMATION_SPACING_X: f32 = 150.0;
    pub const FORMATION_SPACING_Y: f32 = 100.0;
}
