// The player-controlled hero: a coordinator over owned physics, combat and
// animation parts. The parts never see the hero; they get plain values.

mod animator;
mod combat;
mod physics;

pub use animator::HeroAnimator;
pub use combat::HeroCombat;
pub use physics::HeroPhysics;

use crate::domain::animation::AnimationState;
use crate::domain::geometry::Rect;
use crate::domain::input::InputIntent;
use crate::domain::render::{DebugShape, RenderSink};
use crate::domain::resources::SpriteSheets;
use crate::domain::tuning::HeroTuning;
use glam::Vec2;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Hero {
    pub position: Vec2,

    physics: HeroPhysics,
    animator: HeroAnimator,
    combat: HeroCombat,

    dropping: bool,
    god_mode: bool,

    hitbox_width: i32,
    hitbox_height: i32,
    sprite_offset_y: f32,
}

impl Hero {
    pub fn new(sheets: &SpriteSheets, tuning: &HeroTuning) -> Self {
        Self {
            position: Vec2::ZERO,
            physics: HeroPhysics::new(tuning),
            animator: HeroAnimator::new(sheets, tuning),
            combat: HeroCombat::new(
                tuning.attack_range,
                tuning.hitbox_width,
                tuning.hitbox_height,
            ),
            dropping: false,
            god_mode: false,
            hitbox_width: tuning.hitbox_width,
            hitbox_height: tuning.hitbox_height,
            sprite_offset_y: tuning.sprite_offset_y,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.physics.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.physics.velocity = velocity;
    }

    pub fn is_grounded(&self) -> bool {
        self.physics.grounded
    }

    pub fn set_grounded(&mut self, grounded: bool) {
        self.physics.grounded = grounded;
    }

    /// Whether the hero asked to fall through one-way platforms this frame.
    pub fn is_dropping(&self) -> bool {
        self.dropping
    }

    pub fn is_attacking(&self) -> bool {
        self.combat.is_attacking()
    }

    pub fn is_god_mode(&self) -> bool {
        self.god_mode
    }

    pub fn set_god_mode(&mut self, enabled: bool) {
        self.god_mode = enabled;
    }

    pub fn facing(&self) -> Facing {
        self.animator.facing()
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animator.state()
    }

    pub fn bounds(&self) -> Rect {
        Rect::at(self.position, self.hitbox_width, self.hitbox_height)
    }

    pub fn attack_bounds(&self) -> Option<Rect> {
        self.combat.attack_bounds(self.position, self.animator.facing())
    }

    /// Applies this frame's intent and advances animation. Does not move.
    pub fn update(&mut self, input: &InputIntent, dt: Duration) {
        self.handle_input(input);

        if self.combat.is_attacking() {
            self.animator.update(dt);
            if self.animator.is_finished() {
                self.combat.end_attack();
            }
            return;
        }

        self.physics.update_grounded_state();
        self.animator
            .select_state(self.physics.velocity, input.horizontal, false);
        self.animator.update(dt);
    }

    fn handle_input(&mut self, input: &InputIntent) {
        if input.attack_triggered && !self.combat.is_attacking() {
            self.combat.start_attack();
            self.animator.start_attack();
        }

        if input.jump_held {
            self.physics.jump();
        }

        self.dropping = input.drop_held;
        self.physics.set_horizontal_velocity(input.horizontal);
        self.animator.update_direction(input.horizontal);
    }

    /// Gravity, then one explicit position integration step.
    pub fn apply_physics(&mut self) {
        self.physics.apply_gravity();
        self.position += self.physics.velocity;
    }

    /// Moves the hero and clears motion and attack state.
    pub fn respawn(&mut self, position: Vec2) {
        self.position = position;
        self.physics.reset();
        self.combat.reset();
        self.animator.reset();
        self.dropping = false;
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        let sprite_position = Vec2::new(self.position.x, self.position.y + self.sprite_offset_y);
        self.animator.draw(sink, sprite_position);
    }

    pub fn draw_debug(&self, sink: &mut dyn RenderSink) {
        sink.fill_debug(self.bounds(), DebugShape::Hitbox);
        if let Some(attack) = self.attack_bounds() {
            sink.fill_debug(attack, DebugShape::AttackBox);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resources::TextureTable;

    fn hero() -> Hero {
        let sheets = SpriteSheets::register(&mut TextureTable::new());
        Hero::new(&sheets, &HeroTuning::default())
    }

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn when_attack_is_triggered_then_attack_runs_until_animation_finishes() {
        let mut hero = hero();
        let trigger = InputIntent {
            attack_triggered: true,
            ..InputIntent::default()
        };

        hero.update(&trigger, FRAME);
        assert!(hero.is_attacking());
        assert_eq!(hero.animation_state(), AnimationState::Attack);
        assert!(hero.attack_bounds().is_some());

        // Four 80 ms frames: the sequence finishes on the 4th boundary.
        let idle = InputIntent::default();
        for _ in 0..4 {
            hero.update(&idle, Duration::from_millis(80));
        }
        assert!(!hero.is_attacking());
        assert_eq!(hero.attack_bounds(), None);
    }

    #[test]
    fn when_moving_left_then_facing_flips_and_run_animation_plays() {
        let mut hero = hero();
        hero.set_grounded(true);
        let left = InputIntent {
            horizontal: -1.0,
            ..InputIntent::default()
        };

        hero.update(&left, FRAME);

        assert_eq!(hero.facing(), Facing::Left);
        assert_eq!(hero.velocity().x, -4.0);
        assert_eq!(hero.animation_state(), AnimationState::Run);
    }

    #[test]
    fn when_jump_is_held_on_ground_then_jump_animation_is_selected() {
        let mut hero = hero();
        hero.set_grounded(true);
        let jump = InputIntent {
            jump_held: true,
            ..InputIntent::default()
        };

        hero.update(&jump, FRAME);

        assert_eq!(hero.velocity().y, -16.0);
        assert!(!hero.is_grounded());
        assert_eq!(hero.animation_state(), AnimationState::Jump);
    }

    #[test]
    fn when_physics_is_applied_then_position_moves_by_velocity_after_gravity() {
        let mut hero = hero();
        hero.position = Vec2::new(0.0, 500.0);
        hero.set_velocity(Vec2::new(4.0, 0.0));

        hero.apply_physics();

        assert_eq!(hero.velocity(), Vec2::new(4.0, 0.6));
        assert_eq!(hero.position, Vec2::new(4.0, 500.6));
    }

    #[test]
    fn when_respawned_then_motion_and_attack_are_cleared() {
        let mut hero = hero();
        hero.update(
            &InputIntent {
                attack_triggered: true,
                ..InputIntent::default()
            },
            FRAME,
        );
        hero.set_velocity(Vec2::new(4.0, 9.0));

        hero.respawn(Vec2::new(0.0, 500.0));

        assert_eq!(hero.position, Vec2::new(0.0, 500.0));
        assert_eq!(hero.velocity(), Vec2::ZERO);
        assert!(!hero.is_attacking());
        assert_eq!(hero.animation_state(), AnimationState::Idle);
    }
}
