// Hero attack window and attack box geometry.

use super::Facing;
use crate::domain::geometry::Rect;
use glam::Vec2;

#[derive(Debug, Clone)]
pub struct HeroCombat {
    attacking: bool,
    range: i32,
    hitbox_width: i32,
    hitbox_height: i32,
}

impl HeroCombat {
    pub fn new(range: i32, hitbox_width: i32, hitbox_height: i32) -> Self {
        Self {
            attacking: false,
            range,
            hitbox_width,
            hitbox_height,
        }
    }

    pub fn is_attacking(&self) -> bool {
        self.attacking
    }

    /// Opens the attack window. Re-triggering is gated upstream by the
    /// input edge, so this simply ignores calls while already attacking.
    pub fn start_attack(&mut self) {
        self.attacking = true;
    }

    pub fn end_attack(&mut self) {
        self.attacking = false;
    }

    /// Box in front of the hero while attacking, `None` otherwise.
    pub fn attack_bounds(&self, position: Vec2, facing: Facing) -> Option<Rect> {
        if !self.attacking {
            return None;
        }

        let x = match facing {
            Facing::Left => position.x as i32 - self.range,
            Facing::Right => position.x as i32 + self.hitbox_width,
        };
        Some(Rect::new(x, position.y as i32, self.range, self.hitbox_height))
    }

    pub fn reset(&mut self) {
        self.attacking = false;
    }
}
