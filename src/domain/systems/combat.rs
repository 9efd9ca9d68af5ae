// Hero attack vs enemies, and enemy body contact.

use crate::domain::enemy::Enemy;
use crate::domain::hazard::Hazard;
use crate::domain::hero::Hero;
use tracing::{debug, info};

/// Applies one damage event to every live enemy inside the attack box.
///
/// Runs on every attacking frame. There is no per-swing registry; repeated
/// frames of the same swing are absorbed by the enemy's own hit cooldown.
/// Returns how many hits landed.
pub fn apply_attack_hits(hero: &Hero, enemies: &mut [Enemy], damage: i32) -> usize {
    if !hero.is_attacking() {
        return 0;
    }
    let Some(attack) = hero.attack_bounds() else {
        return 0;
    };

    let mut landed = 0;
    for (idx, enemy) in enemies.iter_mut().enumerate() {
        if enemy.is_dead() || !attack.intersects(&enemy.bounds()) {
            continue;
        }
        if !enemy.take_damage(damage) {
            continue;
        }

        landed += 1;
        if enemy.is_dead() {
            info!(enemy = idx, "enemy killed");
        } else {
            debug!(enemy = idx, hp = enemy.health(), "enemy hit");
        }
    }
    landed
}

/// Notifies the first live enemy touching the hero. Lethality is decided by
/// the death check, not here.
pub fn enemy_contact(hero: &Hero, enemies: &mut [Enemy]) -> Option<usize> {
    let bounds = hero.bounds();
    let idx = enemies
        .iter()
        .position(|enemy| enemy.is_active() && bounds.intersects(&enemy.bounds()))?;
    enemies[idx].on_hit();
    Some(idx)
}
