use std::time::Duration;

/// Gameplay tuning for the player-controlled hero.
///
/// Velocities are in pixels per simulation frame; the hero is integrated once
/// per frame without scaling by the frame delta.
#[derive(Debug, Clone, Copy)]
pub struct HeroTuning {
    /// Downward acceleration added each frame.
    pub gravity: f32,

    /// Terminal fall speed.
    pub max_fall: f32,

    /// Horizontal speed while a direction is held.
    pub move_speed: f32,

    /// Vertical velocity assigned on jump (negative is up).
    pub jump_impulse: f32,

    /// Collision box size in world pixels.
    pub hitbox_width: i32,
    pub hitbox_height: i32,

    /// Width of the attack box placed beside the hitbox.
    pub attack_range: i32,

    /// Width of an idle frame on the sheet, used to anchor wider frames.
    pub base_frame_width: i32,

    /// Vertical offset from the hitbox to where the sprite is drawn.
    pub sprite_offset_y: f32,

    pub sprite_scale: f32,

    pub frame_time: Duration,
    pub attack_frame_time: Duration,
}

impl Default for HeroTuning {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            max_fall: 12.0,
            move_speed: 4.0,
            jump_impulse: -16.0,
            hitbox_width: 28 * 2,
            hitbox_height: 40 * 2,
            attack_range: 100,
            base_frame_width: 28,
            sprite_offset_y: -80.0,
            sprite_scale: 2.0,
            frame_time: Duration::from_millis(100),
            attack_frame_time: Duration::from_millis(80),
        }
    }
}
