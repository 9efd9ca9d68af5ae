// Gameplay tuning, kept apart from runtime configuration (tick rate, paths, etc.).

pub mod enemy;
pub mod hero;
pub mod projectile;
pub mod world;

pub use enemy::{EnemyTuning, PatrolTuning, TurretTuning};
pub use hero::HeroTuning;
pub use projectile::ProjectileTuning;
pub use world::WorldTuning;

/// Every tuning table, handed to level and actor constructors as one value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tuning {
    pub hero: HeroTuning,
    pub enemy: EnemyTuning,
    pub patrol: PatrolTuning,
    pub turret: TurretTuning,
    pub projectile: ProjectileTuning,
    pub world: WorldTuning,
}
