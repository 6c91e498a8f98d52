//! Game state and core simulation types
//!
//! One `GameState` owns every collection the frame loop and the movement
//! timer touch.

use glam::Vec2;

use super::entity::{Entity, Player, Projectile, Visual};
use super::formation::{Formation, FormationLayout};
use super::surface::{Color, SpriteId};
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Enemies remain
    Playing,
    /// Every enemy destroyed; terminal
    Victory,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Field width and height, fixed at startup
    pub field: Vec2,
    pub phase: GamePhase,
    pub player: Player,
    /// Live projectiles, oldest first
    pub projectiles: Vec<Projectile>,
    pub formation: Formation,
    /// Frames simulated so far
    pub frame_count: u64,
    /// Enemies destroyed
    pub kills: u32,
    pub settings: Settings,
}

impl GameState {
    /// Create a new game for a field of the given size and spawn the formation
    pub fn new(field: Vec2, settings: Settings) -> Self {
        let player = Player {
            body: Entity::new(
                Vec2::new(field.x / 2.0, field.y - settings.player_bottom_offset),
                settings.player_size,
                Visual::solid(Color::Red),
            ),
            speed: settings.player_speed,
        };

        let mut state = Self {
            field,
            phase: GamePhase::Playing,
            player,
            projectiles: Vec::with_capacity(settings.projectile_limit),
            formation: Formation::new(),
            frame_count: 0,
            kills: 0,
            settings,
        };
        state.formation.populate(&state.formation_layout());
        state
    }

    /// Enemy grid described by the current settings
    pub fn formation_layout(&self) -> FormationLayout {
        let f = &self.settings.formation;
        FormationLayout {
            columns: f.columns,
            rows: f.rows,
            origin: f.origin,
            spacing: f.spacing,
            enemy_size: f.enemy_size,
            step: f.step,
            visual: Visual::sprite(SpriteId::Enemy, Color::Green),
        }
    }

    /// Fire a projectile from the player's horizontal center.
    ///
    /// Ignored once `projectile_limit` projectiles are live or after victory.
    /// Returns whether a projectile was spawned.
    pub fn fire(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        if self.projectiles.len() >= self.settings.projectile_limit {
            log::trace!(
                "fire ignored: {} projectiles live",
                self.projectiles.len()
            );
            return false;
        }

        let size = self.settings.projectile_size;
        let pos = Vec2::new(
            self.player.body.center_x() - size.x / 2.0,
            self.player.body.pos.y,
        );
        self.projectiles.push(Projectile {
            body: Entity::new(pos, size, Visual::sprite(SpriteId::Projectile, Color::White)),
            speed: self.settings.projectile_speed,
        });
        true
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Victory
    }
}
