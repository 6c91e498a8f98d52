//! Enemy formation: population, boundary reversal and movement ticks

use glam::Vec2;

use super::entity::{Entity, Visual};
use super::tween::{Tween, TweenStatus, Tweenable, start_tween, step_tween};

/// Direction and in-flight motion of one enemy
#[derive(Debug, Clone, Default)]
pub struct MovementState {
    pub heading_right: bool,
    /// Present while a move is animating
    pub tween: Option<Tween>,
}

/// A single invader
#[derive(Debug, Clone)]
pub struct Enemy {
    pub body: Entity,
    /// Where the current (or last) move is headed
    pub target: Vec2,
    /// Horizontal distance per tick
    pub step: f32,
    pub movement: MovementState,
}

impl Enemy {
    pub fn new(body: Entity, step: f32) -> Self {
        Self {
            target: body.pos,
            body,
            step,
            movement: MovementState {
                heading_right: true,
                tween: None,
            },
        }
    }

    /// Decide the next move and start tweening toward it.
    ///
    /// Does nothing while a previous move is still animating.
    pub fn tick(&mut self, field_width: f32, drop_margin: f32, duration: f64, now: f64) {
        if self.is_animating() {
            return;
        }

        if self.body.pos.x <= 0.0 || self.body.right() >= field_width {
            self.movement.heading_right = !self.movement.heading_right;
            self.target.y = self.body.pos.y + self.body.height() + drop_margin;
            log::debug!(
                "enemy at x={:.1} reversed (heading_right={}), dropping to y={:.1}",
                self.body.pos.x,
                self.movement.heading_right,
                self.target.y
            );
        }

        self.target.x = if self.movement.heading_right {
            self.body.pos.x + self.step
        } else {
            self.body.pos.x - self.step
        };

        let target = self.target;
        start_tween(self, target, duration, now);
    }
}

impl Tweenable for Enemy {
    fn position(&self) -> Vec2 {
        self.body.pos
    }

    fn set_position(&mut self, pos: Vec2) {
        self.body.pos = pos;
    }

    fn tween(&self) -> Option<&Tween> {
        self.movement.tween.as_ref()
    }

    fn tween_slot(&mut self) -> &mut Option<Tween> {
        &mut self.movement.tween
    }
}

/// Grid layout and per-enemy parameters used by `Formation::populate`
#[derive(Debug, Clone, Copy)]
pub struct FormationLayout {
    pub columns: u32,
    pub rows: u32,
    /// Top-left of the first enemy
    pub origin: Vec2,
    /// Distance between neighbouring enemies' top-left corners
    pub spacing: Vec2,
    pub enemy_size: Vec2,
    pub step: f32,
    pub visual: Visual,
}

/// All live enemies, in spawn order
#[derive(Debug, Clone, Default)]
pub struct Formation {
    pub enemies: Vec<Enemy>,
}

impl Formation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a grid of enemies, left to right then row by row
    pub fn populate(&mut self, layout: &FormationLayout) {
        for row in 0..layout.rows {
            for col in 0..layout.columns {
                let pos = layout.origin
                    + Vec2::new(
                        col as f32 * layout.spacing.x,
                        row as f32 * layout.spacing.y,
                    );
                let body = Entity::new(pos, layout.enemy_size, layout.visual);
                self.enemies.push(Enemy::new(body, layout.step));
            }
        }
        log::info!(
            "Populated formation: {}x{} ({} enemies)",
            layout.columns,
            layout.rows,
            self.enemies.len()
        );
    }

    /// One movement tick for every enemy
    pub fn tick(&mut self, field_width: f32, drop_margin: f32, duration: f64, now: f64) {
        for enemy in &mut self.enemies {
            enemy.tick(field_width, drop_margin, duration, now);
        }
    }

    /// Advance every in-flight move to `now`. Returns how many finished.
    pub fn step(&mut self, now: f64) -> usize {
        self.enemies
            .iter_mut()
            .map(|enemy| step_tween(enemy, now))
            .filter(|status| *status == TweenStatus::Finished)
            .count()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }
}
