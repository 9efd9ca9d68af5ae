// Frame-ending conditions: hero death and level completion.

use crate::domain::enemy::Enemy;
use crate::domain::geometry::Rect;
use crate::domain::hazard::Hazard;
use crate::domain::hero::Hero;
use crate::domain::props::Spikes;

/// What killed the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Spikes or a live enemy body.
    Hazard,
    Projectile,
    Fall,
}

/// Produced at most once per frame for the flow controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    HeroDied(DeathCause),
    LevelCompleted { has_next_level: bool },
}

/// Checks, in order: static hazards, live enemies, live projectiles, then
/// the fall threshold. A projectile that kills the hero is marked hit.
pub fn evaluate_death(
    hero: &Hero,
    spikes: &[Spikes],
    enemies: &mut [Enemy],
    fall_death_y: f32,
) -> Option<DeathCause> {
    let bounds = hero.bounds();

    if spikes.iter().any(|s| touches(bounds, s)) || enemies.iter().any(|e| touches(bounds, e)) {
        return Some(DeathCause::Hazard);
    }

    for enemy in enemies.iter_mut() {
        if let Some(projectile) = enemy
            .projectiles_mut()
            .iter_mut()
            .find(|p| p.is_active() && bounds.intersects(&p.bounds()))
        {
            projectile.on_hit();
            return Some(DeathCause::Projectile);
        }
    }

    if hero.position.y > fall_death_y {
        return Some(DeathCause::Fall);
    }

    None
}

fn touches(bounds: Rect, hazard: &dyn Hazard) -> bool {
    hazard.is_active() && bounds.intersects(&hazard.bounds())
}
