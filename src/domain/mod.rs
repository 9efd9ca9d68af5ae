// Domain layer: simulation types and rules. No I/O, no async.

pub mod animation;
pub mod enemy;
pub mod geometry;
pub mod hazard;
pub mod hero;
pub mod input;
pub mod projectile;
pub mod props;
pub mod render;
pub mod resources;
pub mod systems;
pub mod tuning;

pub use enemy::{Enemy, EnemyKind};
pub use geometry::Rect;
pub use hero::{Facing, Hero};
pub use input::{ButtonState, InputIntent, InputSource, InputTracker};
pub use render::{RenderSink, SpriteDraw, SpriteOrigin};
pub use resources::{SpriteSheets, TextureId, TextureTable};
pub use systems::{DeathCause, TerminalEvent};
pub use tuning::Tuning;
