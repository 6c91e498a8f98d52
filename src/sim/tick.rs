//! Frame loop and movement timer
//!
//! Two clocks drive the game:
//! - `frame` runs once per display refresh: advances tweens and projectiles,
//!   resolves collisions, applies input and checks for victory.
//! - `movement_tick` runs on a coarse fixed period and starts the next move
//!   of every idle enemy.
//!
//! Both take the host timestamp in milliseconds.

use super::collision;
use super::state::{GamePhase, GameState};
use super::surface::{Color, Surface};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Fire pressed since the last frame (one-shot)
    pub fire: bool,
}

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Schedule another frame
    Continue,
    /// The last enemy fell this frame; show the victory banner and stop
    Victory,
    /// Game already over; nothing was simulated or drawn
    Halted,
}

/// Simulate and draw one frame
pub fn frame(
    state: &mut GameState,
    input: &FrameInput,
    now: f64,
    surface: &mut dyn Surface,
) -> FrameOutcome {
    if state.phase == GamePhase::Victory {
        return FrameOutcome::Halted;
    }
    state.frame_count += 1;

    // In-flight enemy moves
    let finished = state.formation.step(now);
    if finished > 0 {
        log::trace!("{finished} enemy moves finished at {now:.1}");
    }

    // Background
    surface.clear();
    surface.fill_rect(0.0, 0.0, state.field.x, state.field.y, Color::Black);

    state.player.body.draw(surface);
    for enemy in &state.formation.enemies {
        enemy.body.draw(surface);
    }

    // Reverse order so removal never skips the next projectile
    for i in (0..state.projectiles.len()).rev() {
        let projectile = &mut state.projectiles[i];
        projectile.advance();
        projectile.body.draw(surface);
        if projectile.is_off_screen() {
            state.projectiles.remove(i);
        }
    }

    if let Some(hit) = collision::resolve(&mut state.projectiles, &mut state.formation.enemies) {
        state.kills += 1;
        log::debug!(
            "projectile {} destroyed enemy {} ({} left)",
            hit.projectile,
            hit.enemy,
            state.formation.len()
        );
    }

    let field_width = state.field.x;
    if input.left {
        let speed = state.player.speed;
        state.player.nudge(-speed, field_width);
    }
    if input.right {
        let speed = state.player.speed;
        state.player.nudge(speed, field_width);
    }
    if input.fire {
        state.fire();
    }

    if state.formation.is_empty() {
        state.phase = GamePhase::Victory;
        log::info!(
            "Victory after {} frames ({} kills)",
            state.frame_count,
            state.kills
        );
        return FrameOutcome::Victory;
    }

    FrameOutcome::Continue
}

/// Start the next move of every enemy that is not already moving
pub fn movement_tick(state: &mut GameState, now: f64) {
    if state.phase == GamePhase::Victory {
        return;
    }
    let f = &state.settings.formation;
    state
        .formation
        .tick(state.field.x, f.drop_margin, f.tween_duration_ms, now);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::settings::Settings;
    use crate::sim::entity::{Entity, Projectile, Visual};
    use crate::sim::surface::SpriteId;
    use crate::sim::tween::Tweenable;
    use glam::Vec2;

    const FIELD: Vec2 = Vec2::new(1280.0, 720.0);

    fn game() -> GameState {
        GameState::new(FIELD, Settings::default())
    }

    fn single_enemy_game() -> GameState {
        let mut settings = Settings::default();
        settings.formation.columns = 1;
        GameState::new(FIELD, settings)
    }

    fn projectile_at(x: f32, y: f32, h: f32) -> Projectile {
        Projectile {
            body: Entity::new(Vec2::new(x, y), Vec2::new(5.0, h), Visual::solid(Color::White)),
            speed: 5.0,
        }
    }

    #[test]
    fn test_draw_order() {
        let mut state = single_enemy_game();
        state.fire();
        let mut surface = RecordingSurface::new();
        surface.mark_loaded(SpriteId::Enemy);

        let outcome = frame(&mut state, &FrameInput::default(), 0.0, &mut surface);
        assert_eq!(outcome, FrameOutcome::Continue);

        let cmds = &surface.commands;
        assert_eq!(cmds.len(), 5);
        assert_eq!(cmds[0], DrawCommand::Clear);
        assert_eq!(
            cmds[1],
            DrawCommand::FillRect {
                x: 0.0,
                y: 0.0,
                w: FIELD.x,
                h: FIELD.y,
                color: Color::Black
            }
        );
        // Player
        assert!(matches!(
            cmds[2],
            DrawCommand::FillRect {
                color: Color::Red,
                ..
            }
        ));
        assert!(matches!(
            cmds[3],
            DrawCommand::Sprite {
                sprite: SpriteId::Enemy,
                ..
            }
        ));
        // Projectile sprite not loaded: white fill at its advanced position
        assert_eq!(
            cmds[4],
            DrawCommand::FillRect {
                x: 645.0,
                y: 670.0,
                w: 30.0,
                h: 30.0,
                color: Color::White
            }
        );
    }

    #[test]
    fn test_projectiles_advance_and_cull() {
        let mut state = game();
        state.projectiles = vec![
            projectile_at(10.0, 4.0, 10.0),   // bottom 14 -> 9 after advance: kept
            projectile_at(20.0, -1.0, 10.0),  // bottom 9 -> 4: kept
            projectile_at(30.0, -6.0, 10.0),  // bottom 4 -> -1: culled
            projectile_at(40.0, 100.0, 10.0), // kept
        ];
        let mut surface = RecordingSurface::new();
        frame(&mut state, &FrameInput::default(), 0.0, &mut surface);

        let ys: Vec<f32> = state.projectiles.iter().map(|p| p.body.pos.y).collect();
        assert_eq!(ys, vec![-1.0, -6.0, 95.0]);

        // The culled projectile was still drawn before removal
        assert!(surface.commands.contains(&DrawCommand::FillRect {
            x: 30.0,
            y: -11.0,
            w: 5.0,
            h: 10.0,
            color: Color::White
        }));

        // Next pass: -6 -> -11, bottom -1: culled
        frame(&mut state, &FrameInput::default(), 16.0, &mut surface);
        let ys: Vec<f32> = state.projectiles.iter().map(|p| p.body.pos.y).collect();
        assert_eq!(ys, vec![-6.0, 90.0]);
    }

    #[test]
    fn test_player_clamped_to_field() {
        let mut state = game();
        let mut surface = RecordingSurface::new();
        let left = FrameInput {
            left: true,
            ..Default::default()
        };
        let right = FrameInput {
            right: true,
            ..Default::default()
        };

        state.player.body.pos.x = 0.0;
        frame(&mut state, &left, 0.0, &mut surface);
        assert_eq!(state.player.body.pos.x, 0.0);

        let max_x = FIELD.x - state.player.body.width();
        state.player.body.pos.x = max_x;
        frame(&mut state, &right, 16.0, &mut surface);
        assert_eq!(state.player.body.pos.x, max_x);

        state.player.body.pos.x = 100.0;
        frame(&mut state, &left, 32.0, &mut surface);
        assert_eq!(state.player.body.pos.x, 97.0);
    }

    #[test]
    fn test_buffered_fire_respects_limit() {
        let mut state = game();
        let mut surface = RecordingSurface::new();
        let fire = FrameInput {
            fire: true,
            ..Default::default()
        };
        for i in 0..8 {
            frame(&mut state, &fire, i as f64 * 16.0, &mut surface);
        }
        assert_eq!(state.projectiles.len(), 5);
    }

    #[test]
    fn test_victory_fires_once_and_halts() {
        let mut state = single_enemy_game();
        let enemy = &state.formation.enemies[0].body;
        let pos = Vec2::new(enemy.pos.x + 10.0, enemy.pos.y + 20.0);
        state.projectiles.push(projectile_at(pos.x, pos.y, 10.0));

        let mut surface = RecordingSurface::new();
        let outcome = frame(&mut state, &FrameInput::default(), 0.0, &mut surface);
        assert_eq!(outcome, FrameOutcome::Victory);
        assert_eq!(state.phase, GamePhase::Victory);
        assert_eq!(state.kills, 1);
        assert!(state.projectiles.is_empty());

        surface.commands.clear();
        let frames = state.frame_count;
        assert_eq!(
            frame(&mut state, &FrameInput::default(), 16.0, &mut surface),
            FrameOutcome::Halted
        );
        assert!(surface.commands.is_empty());
        assert_eq!(state.frame_count, frames);
    }

    #[test]
    fn test_one_kill_per_frame() {
        let mut state = game();
        for enemy in state.formation.enemies.iter().take(2) {
            let p = enemy.body.pos + Vec2::new(10.0, 20.0);
            state.projectiles.push(projectile_at(p.x, p.y, 10.0));
        }
        let mut surface = RecordingSurface::new();
        frame(&mut state, &FrameInput::default(), 0.0, &mut surface);
        assert_eq!(state.formation.len(), 6);
        frame(&mut state, &FrameInput::default(), 16.0, &mut surface);
        assert_eq!(state.formation.len(), 5);
        assert_eq!(state.kills, 2);
    }

    #[test]
    fn test_movement_tick_then_frames_animate_enemies() {
        let mut state = single_enemy_game();
        let mut surface = RecordingSurface::new();
        let start = state.formation.enemies[0].body.pos;

        movement_tick(&mut state, 0.0);
        assert!(state.formation.enemies[0].is_animating());

        frame(&mut state, &FrameInput::default(), 500.0, &mut surface);
        let mid = state.formation.enemies[0].body.pos;
        assert!(mid.x > start.x && mid.x < start.x + 50.0);

        frame(&mut state, &FrameInput::default(), 1000.0, &mut surface);
        assert_eq!(state.formation.enemies[0].body.pos, start + Vec2::new(50.0, 0.0));
        assert!(!state.formation.enemies[0].is_animating());
    }

    #[test]
    fn test_movement_tick_ignored_after_victory() {
        let mut state = single_enemy_game();
        state.phase = GamePhase::Victory;
        movement_tick(&mut state, 0.0);
        assert!(!state.formation.enemies[0].is_animating());
    }
}
