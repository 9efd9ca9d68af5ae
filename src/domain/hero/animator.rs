// Picks the hero's animation from movement and keeps track of facing.

use super::Facing;
use crate::domain::animation::{AnimationSequence, AnimationSet, AnimationState, frame_row};
use crate::domain::render::RenderSink;
use crate::domain::resources::SpriteSheets;
use crate::domain::tuning::HeroTuning;
use glam::Vec2;
use std::time::Duration;

// Hero sheets place one frame every 120 px, starting 43 px in.
const SHEET_START_X: i32 = 43;
const SHEET_STRIDE: i32 = 120;
const FRAME_HEIGHT: i32 = 80;
const ATTACK_FRAME_WIDTH: i32 = 120;

#[derive(Debug, Clone)]
pub struct HeroAnimator {
    set: AnimationSet,
    facing: Facing,
    base_frame_width: i32,
    scale: f32,
}

impl HeroAnimator {
    pub fn new(sheets: &SpriteSheets, tuning: &HeroTuning) -> Self {
        let looping = |texture, count| {
            AnimationSequence::new(
                texture,
                frame_row(
                    count,
                    SHEET_START_X,
                    SHEET_STRIDE,
                    tuning.base_frame_width,
                    FRAME_HEIGHT,
                ),
                tuning.frame_time,
                true,
            )
        };

        let mut set = AnimationSet::new(AnimationState::Idle, looping(sheets.hero_idle, 10));
        set.add_sequence(AnimationState::Run, looping(sheets.hero_run, 10));
        set.add_sequence(AnimationState::Jump, looping(sheets.hero_jump, 3));
        set.add_sequence(AnimationState::Fall, looping(sheets.hero_fall, 3));
        set.add_sequence(
            AnimationState::Attack,
            AnimationSequence::new(
                sheets.hero_attack,
                frame_row(
                    4,
                    SHEET_START_X,
                    SHEET_STRIDE,
                    ATTACK_FRAME_WIDTH,
                    FRAME_HEIGHT,
                ),
                tuning.attack_frame_time,
                false,
            ),
        );

        Self {
            set,
            facing: Facing::Right,
            base_frame_width: tuning.base_frame_width,
            scale: tuning.sprite_scale,
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn state(&self) -> AnimationState {
        self.set.state()
    }

    pub fn is_finished(&self) -> bool {
        self.set.is_finished()
    }

    /// Chooses a state from the current motion. Attack takes priority, then
    /// vertical motion, then horizontal input.
    pub fn select_state(&mut self, velocity: Vec2, horizontal: f32, attacking: bool) {
        let state = if attacking {
            AnimationState::Attack
        } else if velocity.y < 0.0 {
            AnimationState::Jump
        } else if velocity.y > 0.0 {
            AnimationState::Fall
        } else if horizontal != 0.0 {
            AnimationState::Run
        } else {
            AnimationState::Idle
        };
        self.set.set_state(state, false);
    }

    /// Faces the held direction; no input keeps the last facing.
    pub fn update_direction(&mut self, horizontal: f32) {
        if horizontal < 0.0 {
            self.facing = Facing::Left;
        } else if horizontal > 0.0 {
            self.facing = Facing::Right;
        }
    }

    /// Always rewinds, so a swing started right after another plays in full.
    pub fn start_attack(&mut self) {
        self.set.set_state(AnimationState::Attack, true);
    }

    pub fn reset(&mut self) {
        self.set.set_state(AnimationState::Idle, true);
    }

    pub fn update(&mut self, dt: Duration) {
        self.set.update(dt);
    }

    pub fn draw(&self, sink: &mut dyn RenderSink, position: Vec2) {
        self.set.draw(
            sink,
            position,
            self.facing == Facing::Left,
            self.base_frame_width,
            self.scale,
        );
    }
}
