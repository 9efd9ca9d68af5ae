// Level layer: static layouts, the live level they load into, and level order.

pub mod builtin;
pub mod data;
pub mod manager;
pub mod runtime;

pub use builtin::{LevelBuilder, builtin_levels};
pub use data::{EnemySpawn, LevelData, LevelError, PlatformDescriptor, SpikeDescriptor};
pub use manager::LevelManager;
pub use runtime::Level;
