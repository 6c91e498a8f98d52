//! Simulation module
//!
//! All gameplay logic lives here. This module has no platform dependencies:
//! - Time comes in as host timestamps (ms), never read from a clock
//! - Drawing goes through the `Surface` trait
//! - Stable iteration order (spawn order) for projectiles and enemies

pub mod collision;
pub mod entity;
pub mod formation;
pub mod state;
pub mod surface;
pub mod tick;
pub mod tween;

pub use collision::{Hit, first_hit, resolve};
pub use entity::{Entity, Player, Projectile, Visual};
pub use formation::{Enemy, Formation, FormationLayout, MovementState};
pub use state::{GamePhase, GameState};
pub use surface::{Color, SpriteId, Surface};
pub use tick::{FrameInput, FrameOutcome, frame, movement_tick};
pub use tween::{Tween, TweenStatus, Tweenable, ease_in_out_cubic, start_tween, step_tween};
