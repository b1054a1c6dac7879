//! Projectile/drone collision resolution
//!
//! Only player-owned projectiles are tested, and only against drones.
//! Drone-owned projectiles pass through everything - the player is
//! never damaged by the current rules.

use super::state::{Drone, Projectile, ProjectileOwner};

/// What a resolution pass produced
#[derive(Debug, Clone)]
pub struct CollisionOutcome {
    /// Projectiles that were not consumed by a hit
    pub projectiles: Vec<Projectile>,
    /// Drones still alive after damage
    pub drones: Vec<Drone>,
    /// Drones whose health dropped to zero this tick, for scoring
    pub destroyed: Vec<Drone>,
}

/// Resolve projectile hits against drones.
///
/// Drones are processed in array order; each scans the projectile list
/// in array order and takes damage from the first unconsumed
/// player-owned projectile overlapping its AABB. A projectile is
/// consumed by its first hit, so one shot kills at most one drone.
pub fn resolve_collisions(projectiles: Vec<Projectile>, drones: Vec<Drone>) -> CollisionOutcome {
    let mut consumed = vec![false; projectiles.len()];
    let mut survivors = Vec::with_capacity(drones.len());
    let mut destroyed = Vec::new();

    for mut drone in drones {
        let drone_box = drone.aabb();
        let hit = projectiles.iter().enumerate().find(|(i, p)| {
            !consumed[*i] && p.owner == ProjectileOwner::Player && p.aabb().overlaps(&drone_box)
        });
        if let Some((i, projectile)) = hit {
            consumed[i] = true;
            drone.health -= projectile.damage;
        }

        if drone.health <= 0 {
            destroyed.push(drone);
        } else {
            survivors.push(drone);
        }
    }

    let projectiles = projectiles
        .into_iter()
        .zip(consumed)
        .filter_map(|(p, used)| (!used).then_some(p))
        .collect();

    CollisionOutcome {
        projectiles,
        drones: survivors,
        destroyed,
    }
}
