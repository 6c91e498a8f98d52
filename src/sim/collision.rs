//! Projectile/enemy collision detection and resolution
//!
//! At most one hit is resolved per call. The first overlapping pair found
//! (lowest projectile index, then lowest enemy index) is removed and the
//! scan stops, so a single pass never invalidates the indices it is using.

use super::entity::Projectile;
use super::formation::Enemy;

/// The pair removed by `resolve`, as indices before removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub projectile: usize,
    pub enemy: usize,
}

/// Find the first overlapping projectile/enemy pair without mutating anything
pub fn first_hit(projectiles: &[Projectile], enemies: &[Enemy]) -> Option<Hit> {
    projectiles.iter().enumerate().find_map(|(p, shot)| {
        enemies
            .iter()
            .position(|enemy| shot.body.overlaps(&enemy.body))
            .map(|e| Hit {
                projectile: p,
                enemy: e,
            })
    })
}

/// Remove the first overlapping projectile/enemy pair, if any
pub fn resolve(projectiles: &mut Vec<Projectile>, enemies: &mut Vec<Enemy>) -> Option<Hit> {
    let hit = first_hit(projectiles, enemies)?;
    projectiles.remove(hit.projectile);
    enemies.remove(hit.enemy);
    Some(hit)
}
