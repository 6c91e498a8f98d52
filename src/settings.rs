//! Game settings and tuning
//!
//! Loaded from JSON supplied by the host page (or a file on native).
//! Every field is optional in the JSON; missing fields take the defaults
//! in `crate::consts`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// JSON could not be parsed.
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// Settings file could not be read.
    #[error("Failed to read settings file '{path}': {details}")]
    Io { path: String, details: String },

    /// A value is outside its allowed range.
    #[error("Invalid setting '{field}': {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Formation layout and enemy parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormationSettings {
    pub columns: u32,
    pub rows: u32,
    /// Top-left of the first enemy
    pub origin: Vec2,
    /// Distance between neighbouring enemies
    pub spacing: Vec2,
    pub enemy_size: Vec2,
    /// Horizontal distance per movement tick
    pub step: f32,
    /// Gap added below an enemy when it drops a row
    pub drop_margin: f32,
    /// Duration of one move (ms)
    pub tween_duration_ms: f64,
    /// Period of the movement timer (ms)
    pub tick_period_ms: f64,
}

impl Default for FormationSettings {
    fn default() -> Self {
        Self {
            columns: ENEMY_COLUMNS,
            rows: ENEMY_ROWS,
            origin: Vec2::new(FORMATION_ORIGIN_X, FORMATION_ORIGIN_Y),
            spacing: Vec2::new(FORMATION_SPACING_X, FORMATION_SPACING_Y),
            enemy_size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            step: ENEMY_STEP,
            drop_margin: ENEMY_DROP_MARGIN,
            tween_duration_ms: TWEEN_DURATION_MS,
            tick_period_ms: MOVEMENT_TICK_MS,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Player ===
    pub player_size: Vec2,
    /// Pixels per frame
    pub player_speed: f32,
    /// Distance of the player's top edge from the bottom of the field
    pub player_bottom_offset: f32,

    // === Projectiles ===
    pub projectile_size: Vec2,
    /// Pixels per frame, upward
    pub projectile_speed: f32,
    /// Maximum live projectiles
    pub projectile_limit: usize,

    // === Enemies ===
    pub formation: FormationSettings,

    // === Assets ===
    pub enemy_sprite: String,
    pub projectile_sprite: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            player_speed: PLAYER_SPEED,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,

            projectile_size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            projectile_speed: PROJECTILE_SPEED,
            projectile_limit: PROJECTILE_LIMIT,

            formation: FormationSettings::default(),

            enemy_sprite: "./images/terzic.png".to_string(),
            projectile_sprite: "./images/egg-splash.png".to_string(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// Parse settings, falling back to defaults (with a warning) on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings from JSON");
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(size: Vec2) -> bool {
            size.x > 0.0 && size.y > 0.0
        }
        fn non_negative(v: Vec2) -> bool {
            v.x >= 0.0 && v.y >= 0.0
        }

        let f = &self.formation;
        let checks: [(bool, &'static str, &'static str); 14] = [
            (positive(self.player_size), "player_size", "must be positive"),
            (self.player_speed >= 0.0, "player_speed", "must not be negative"),
            (
                self.player_bottom_offset >= 0.0,
                "player_bottom_offset",
                "must not be negative",
            ),
            (
                positive(self.projectile_size),
                "projectile_size",
                "must be positive",
            ),
            (
                self.projectile_speed > 0.0,
                "projectile_speed",
                "must be positive",
            ),
            (
                self.projectile_limit > 0,
                "projectile_limit",
                "must be at least 1",
            ),
            (
                positive(f.enemy_size),
                "formation.enemy_size",
                "must be positive",
            ),
            (f.columns >= 1, "formation.columns", "must be at least 1"),
            (f.rows >= 1, "formation.rows", "must be at least 1"),
            (
                non_negative(f.spacing),
                "formation.spacing",
                "must not be negative",
            ),
            (f.step >= 0.0, "formation.step", "must not be negative"),
            (
                f.drop_margin >= 0.0,
                "formation.drop_margin",
                "must not be negative",
            ),
            (
                f.tween_duration_ms > 0.0,
                "formation.tween_duration_ms",
                "must be positive",
            ),
            (
                f.tick_period_ms > 0.0,
                "formation.tick_period_ms",
                "must be positive",
            ),
        ];

        match checks.iter().find(|(ok, _, _)| !ok) {
            Some(&(_, field, reason)) => Err(SettingsError::Invalid { field, reason }),
            None => Ok(()),
        }
    }
}
