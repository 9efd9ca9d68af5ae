// Hero velocity, gravity and jump rules.

use crate::domain::tuning::HeroTuning;
use glam::Vec2;

#[derive(Debug, Clone)]
pub struct HeroPhysics {
    pub velocity: Vec2,
    pub grounded: bool,

    gravity: f32,
    max_fall: f32,
    move_speed: f32,
    jump_impulse: f32,
}

impl HeroPhysics {
    pub fn new(tuning: &HeroTuning) -> Self {
        Self {
            velocity: Vec2::ZERO,
            grounded: false,
            gravity: tuning.gravity,
            max_fall: tuning.max_fall,
            move_speed: tuning.move_speed,
            jump_impulse: tuning.jump_impulse,
        }
    }

    pub fn apply_gravity(&mut self) {
        self.velocity.y = (self.velocity.y + self.gravity).min(self.max_fall);
    }

    /// Overwrites horizontal velocity; there is no acceleration model.
    pub fn set_horizontal_velocity(&mut self, horizontal: f32) {
        self.velocity.x = horizontal * self.move_speed;
    }

    /// Jumps only from the ground, so air jumps are impossible.
    pub fn jump(&mut self) {
        if self.grounded {
            self.velocity.y = self.jump_impulse;
            self.grounded = false;
        }
    }

    /// Any vertical motion means the hero left the ground. Collision
    /// resolution re-asserts `grounded` on landing later in the frame.
    pub fn update_grounded_state(&mut self) {
        if self.velocity.y != 0.0 {
            self.grounded = false;
        }
    }

    pub fn reset(&mut self) {
        self.velocity = Vec2::ZERO;
        self.grounded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physics() -> HeroPhysics {
        HeroPhysics::new(&HeroTuning::default())
    }

    #[test]
    fn when_not_grounded_then_jump_leaves_vertical_velocity_unchanged() {
        let mut p = physics();
        p.velocity.y = 3.5;

        p.jump();

        assert_eq!(p.velocity.y, 3.5);
        assert!(!p.grounded);
    }

    #[test]
    fn when_grounded_then_jump_applies_impulse_and_clears_grounded() {
        let mut p = physics();
        p.grounded = true;

        p.jump();

        assert_eq!(p.velocity.y, -16.0);
        assert!(!p.grounded);

        // Second press mid-air does nothing.
        p.velocity.y = -10.0;
        p.jump();
        assert_eq!(p.velocity.y, -10.0);
    }

    #[test]
    fn when_gravity_accumulates_then_fall_speed_is_clamped() {
        let mut p = physics();

        for _ in 0..100 {
            p.apply_gravity();
        }

        assert_eq!(p.velocity.y, 12.0);
    }

    #[test]
    fn when_horizontal_intent_changes_then_velocity_is_overwritten() {
        let mut p = physics();

        p.set_horizontal_velocity(1.0);
        assert_eq!(p.velocity.x, 4.0);

        p.set_horizontal_velocity(-1.0);
        assert_eq!(p.velocity.x, -4.0);

        p.set_horizontal_velocity(0.0);
        assert_eq!(p.velocity.x, 0.0);
    }

    #[test]
    fn when_vertical_velocity_is_zero_then_grounded_is_kept() {
        let mut p = physics();
        p.grounded = true;

        p.update_grounded_state();
        assert!(p.grounded);

        p.velocity.y = 0.6;
        p.update_grounded_state();
        assert!(!p.grounded);
    }
}
