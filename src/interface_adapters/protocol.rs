// JSON DTOs for frame snapshots published to whatever hosts the simulation.

use crate::domain::animation::AnimationState;
use crate::domain::hero::Facing;
use crate::domain::systems::{DeathCause, TerminalEvent};
use crate::use_cases::{
    EnemyKindTag, EnemySnapshot, FlowState, FrameUpdate, HeroSnapshot, ProjectileSnapshot,
};
use serde::Serialize;

/// Messages published by the frame serializer.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum HostMessage {
    Frame(FrameUpdateDto),
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameUpdateDto {
    pub tick: u64,
    pub level: String,
    pub level_index: usize,
    pub flow: FlowStateDto,
    pub god_mode: bool,
    pub hero: HeroStateDto,
    pub enemies: Vec<EnemyStateDto>,
    pub projectiles: Vec<ProjectileStateDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<TerminalEventDto>,
}

impl From<FrameUpdate> for FrameUpdateDto {
    fn from(update: FrameUpdate) -> Self {
        Self {
            tick: update.tick,
            level: update.level,
            level_index: update.level_index,
            flow: update.flow.into(),
            god_mode: update.god_mode,
            hero: HeroStateDto::from(&update.hero),
            enemies: update.enemies.iter().map(EnemyStateDto::from).collect(),
            projectiles: update
                .projectiles
                .iter()
                .map(ProjectileStateDto::from)
                .collect(),
            event: update.event.map(TerminalEventDto::from),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroStateDto {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub grounded: bool,
    pub attacking: bool,
    pub facing: &'static str,
    pub animation: &'static str,
}

impl From<&HeroSnapshot> for HeroStateDto {
    fn from(hero: &HeroSnapshot) -> Self {
        Self {
            x: hero.x,
            y: hero.y,
            vx: hero.vx,
            vy: hero.vy,
            grounded: hero.grounded,
            attacking: hero.attacking,
            facing: match hero.facing {
                Facing::Left => "left",
                Facing::Right => "right",
            },
            animation: animation_name(hero.animation),
        }
    }
}

fn animation_name(state: AnimationState) -> &'static str {
    match state {
        AnimationState::Idle => "idle",
        AnimationState::Run => "run",
        AnimationState::Jump => "jump",
        AnimationState::Fall => "fall",
        AnimationState::Attack => "attack",
        AnimationState::Death => "death",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyStateDto {
    pub id: usize,
    pub kind: &'static str,
    pub x: f32,
    pub y: f32,
    pub hp: i32,
    pub dead: bool,
}

impl From<&EnemySnapshot> for EnemyStateDto {
    fn from(enemy: &EnemySnapshot) -> Self {
        Self {
            id: enemy.id,
            kind: match enemy.kind {
                EnemyKindTag::Patrol => "patrol",
                EnemyKindTag::Turret => "turret",
            },
            x: enemy.x,
            y: enemy.y,
            hp: enemy.hp,
            dead: enemy.dead,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileStateDto {
    pub owner_id: usize,
    pub x: f32,
    pub y: f32,
    pub rot: f32,
}

impl From<&ProjectileSnapshot> for ProjectileStateDto {
    fn from(projectile: &ProjectileSnapshot) -> Self {
        Self {
            owner_id: projectile.owner_id,
            x: projectile.x,
            y: projectile.y,
            rot: projectile.rot,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlowStateDto {
    Playing,
    GameOver,
    Finished,
}

impl From<FlowState> for FlowStateDto {
    fn from(flow: FlowState) -> Self {
        match flow {
            FlowState::Playing => FlowStateDto::Playing,
            FlowState::GameOver => FlowStateDto::GameOver,
            FlowState::Finished => FlowStateDto::Finished,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TerminalEventDto {
    HeroDied { cause: &'static str },
    LevelCompleted { has_next_level: bool },
}

impl From<TerminalEvent> for TerminalEventDto {
    fn from(event: TerminalEvent) -> Self {
        match event {
            TerminalEvent::HeroDied(cause) => TerminalEventDto::HeroDied {
                cause: match cause {
                    DeathCause::Hazard => "hazard",
                    DeathCause::Projectile => "projectile",
                    DeathCause::Fall => "fall",
                },
            },
            TerminalEvent::LevelCompleted { has_next_level } => {
                TerminalEventDto::LevelCompleted { has_next_level }
            }
        }
    }
}
