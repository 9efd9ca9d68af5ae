// Use cases layer: the frame orchestrator, session flow and the async frame loop.

pub mod game;
pub mod session;
pub mod simulation;
pub mod types;

pub use game::{WorldSettings, world_task};
pub use session::GameSession;
pub use simulation::Simulation;
pub use types::{
    EnemyKindTag, EnemySnapshot, FlowState, FrameUpdate, GameEvent, HeroSnapshot,
    ProjectileSnapshot, SessionSummary,
};
