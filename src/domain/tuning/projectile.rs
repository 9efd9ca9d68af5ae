use std::time::Duration;

/// Gameplay tuning for turret projectiles.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileTuning {
    /// Speed in pixels per 60 Hz frame; scaled by the real frame delta.
    pub speed: f32,

    /// Time before the projectile expires on its own.
    pub lifetime: Duration,

    /// Render scale of the arrow sprite.
    pub scale: f32,

    /// Side of the square hitbox centred on the projectile position.
    pub hitbox_size: i32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: 6.0,
            lifetime: Duration::from_secs(20),
            scale: 0.2,
            hitbox_size: 8,
        }
    }
}
