use std::time::Duration;

/// Tuning shared by every enemy kind.
#[derive(Debug, Clone, Copy)]
pub struct EnemyTuning {
    /// Minimum time between two accepted hits on the same enemy.
    pub hit_cooldown: Duration,

    /// How far ahead of the leading edge the ledge probe sits.
    pub edge_look_ahead: i32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            hit_cooldown: Duration::from_millis(500),
            edge_look_ahead: 10,
        }
    }
}

/// Walking enemy that patrols between ledges and walls.
#[derive(Debug, Clone, Copy)]
pub struct PatrolTuning {
    pub frame_width: i32,
    pub frame_height: i32,
    pub scale: f32,

    /// Horizontal speed in pixels per frame.
    pub speed: f32,
    pub gravity: f32,
    pub max_fall: f32,
    pub max_health: i32,

    pub frame_time: Duration,
    pub walk_frames: usize,
    pub death_frames: usize,
}

impl Default for PatrolTuning {
    fn default() -> Self {
        Self {
            frame_width: 22,
            frame_height: 33,
            scale: 2.5,
            speed: 1.5,
            gravity: 0.6,
            max_fall: 12.0,
            max_health: 1,
            frame_time: Duration::from_millis(120),
            walk_frames: 13,
            death_frames: 15,
        }
    }
}

/// Stationary enemy that fires projectiles on a timer.
#[derive(Debug, Clone, Copy)]
pub struct TurretTuning {
    pub frame_width: i32,
    pub frame_height: i32,
    pub scale: f32,
    pub max_health: i32,

    /// Delay before the first shot after spawning.
    pub first_shot_delay: Duration,

    /// Delay between shots after the first.
    pub shoot_interval: Duration,

    pub shoot_frame_time: Duration,
    pub shoot_frames: usize,
    pub death_frame_time: Duration,
}

impl Default for TurretTuning {
    fn default() -> Self {
        Self {
            frame_width: 128,
            frame_height: 128,
            scale: 2.0,
            max_health: 1,
            first_shot_delay: Duration::from_millis(2400),
            shoot_interval: Duration::from_millis(3000),
            shoot_frame_time: Duration::from_millis(495),
            shoot_frames: 6,
            death_frame_time: Duration::from_millis(100),
        }
    }
}
