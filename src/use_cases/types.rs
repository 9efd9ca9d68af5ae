// Use-case level inputs/outputs for the frame loop.

use crate::domain::animation::AnimationState;
use crate::domain::enemy::{Enemy, EnemyKind};
use crate::domain::hero::{Facing, Hero};
use crate::domain::input::ButtonState;
use crate::domain::projectile::Projectile;
use crate::domain::systems::TerminalEvent;

#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Latest held-button snapshot from the host.
    Buttons(ButtonState),
    SetGodMode(bool),
    /// Reload the current level and respawn; also leaves the game-over state.
    Restart,
}

/// High-level flow the host screen reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Playing,
    GameOver,
    Finished,
}

#[derive(Debug, Clone)]
pub struct HeroSnapshot {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub grounded: bool,
    pub attacking: bool,
    pub facing: Facing,
    pub animation: AnimationState,
}

impl From<&Hero> for HeroSnapshot {
    fn from(hero: &Hero) -> Self {
        Self {
            x: hero.position.x,
            y: hero.position.y,
            vx: hero.velocity().x,
            vy: hero.velocity().y,
            grounded: hero.is_grounded(),
            attacking: hero.is_attacking(),
            facing: hero.facing(),
            animation: hero.animation_state(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKindTag {
    Patrol,
    Turret,
}

#[derive(Debug, Clone)]
pub struct EnemySnapshot {
    pub id: usize,
    pub kind: EnemyKindTag,
    pub x: f32,
    pub y: f32,
    pub hp: i32,
    pub dead: bool,
}

impl EnemySnapshot {
    pub fn new(id: usize, enemy: &Enemy) -> Self {
        let kind = match enemy.kind() {
            EnemyKind::Patrol => EnemyKindTag::Patrol,
            EnemyKind::Turret(_) => EnemyKindTag::Turret,
        };
        Self {
            id,
            kind,
            x: enemy.position.x,
            y: enemy.position.y,
            hp: enemy.health(),
            dead: enemy.is_dead(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectileSnapshot {
    /// Index of the enemy that fired it.
    pub owner_id: usize,
    pub x: f32,
    pub y: f32,
    pub rot: f32,
}

impl ProjectileSnapshot {
    pub fn new(owner_id: usize, projectile: &Projectile) -> Self {
        Self {
            owner_id,
            x: projectile.position().x,
            y: projectile.position().y,
            rot: projectile.rotation(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FrameUpdate {
    pub tick: u64,
    pub level: String,
    pub level_index: usize,
    pub flow: FlowState,
    pub god_mode: bool,
    pub hero: HeroSnapshot,
    pub enemies: Vec<EnemySnapshot>,
    pub projectiles: Vec<ProjectileSnapshot>,
    /// Terminal event raised on this tick, if any.
    pub event: Option<TerminalEvent>,
}

/// What a finished frame loop reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub frames: u64,
    pub deaths: u32,
    pub levels_completed: u32,
    pub flow: FlowState,
}
