// Anything that can kill the hero on contact.

use super::geometry::Rect;

pub trait Hazard {
    fn bounds(&self) -> Rect;

    /// Inactive hazards (dead enemies, spent projectiles) are ignored by
    /// contact and death checks.
    fn is_active(&self) -> bool {
        true
    }

    /// Reaction to touching the hero.
    fn on_hit(&mut self) {}
}

impl Hazard for super::props::Spikes {
    fn bounds(&self) -> Rect {
        self.bounds()
    }
}

impl Hazard for super::projectile::Projectile {
    fn bounds(&self) -> Rect {
        self.bounds()
    }

    fn is_active(&self) -> bool {
        !self.is_expired()
    }

    fn on_hit(&mut self) {
        self.mark_hit();
    }
}
