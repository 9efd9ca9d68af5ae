// Stationary turret: fires on a timer and owns the projectiles it fired.

use crate::domain::geometry::{Rect, swaps_axes};
use crate::domain::projectile::Projectile;
use crate::domain::resources::TextureId;
use crate::domain::tuning::{ProjectileTuning, TurretTuning};
use glam::Vec2;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Turret {
    direction: Vec2,
    rotation_degrees: f32,
    /// Rotation pivot in sheet pixels; zero when unrotated.
    origin: Vec2,

    shoot_timer: Duration,
    fired_once: bool,
    first_shot_delay: Duration,
    shoot_interval: Duration,

    projectiles: Vec<Projectile>,
    projectile_texture: TextureId,
    projectile_tuning: ProjectileTuning,
}

impl Turret {
    pub fn new(
        direction: Vec2,
        rotation_degrees: f32,
        arrow: TextureId,
        tuning: &TurretTuning,
        projectile_tuning: &ProjectileTuning,
    ) -> Self {
        let origin = if rotation_degrees != 0.0 {
            Vec2::new(tuning.frame_width as f32, tuning.frame_height as f32) / 2.0
        } else {
            Vec2::ZERO
        };

        Self {
            direction: direction.normalize_or_zero(),
            rotation_degrees,
            origin,
            shoot_timer: Duration::ZERO,
            fired_once: false,
            first_shot_delay: tuning.first_shot_delay,
            shoot_interval: tuning.shoot_interval,
            projectiles: Vec::new(),
            projectile_texture: arrow,
            projectile_tuning: *projectile_tuning,
        }
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Unrotated turrets mirror their sprite to face a leftward shot.
    pub fn faces_left(&self) -> bool {
        self.rotation_degrees == 0.0 && self.direction.x < 0.0
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn projectiles_mut(&mut self) -> &mut [Projectile] {
        &mut self.projectiles
    }

    /// Footprint around `position`, which is the pivot when rotated.
    ///
    /// Quarter turns swap width and height; other angles keep the unrotated
    /// footprint.
    pub fn bounds(&self, position: Vec2, frame_width: i32, frame_height: i32, scale: f32) -> Rect {
        let width = (frame_width as f32 * scale) as i32;
        let height = (frame_height as f32 * scale) as i32;
        let corner = position - self.origin * scale;
        if swaps_axes(self.rotation_degrees) {
            Rect::at(corner, height, width)
        } else {
            Rect::at(corner, width, height)
        }
    }

    /// Alive-frame behaviour: advance shots, then fire if the timer is due.
    pub fn update(&mut self, dt: Duration, position: Vec2) {
        self.advance_projectiles(dt);

        self.shoot_timer += dt;
        let due = if self.fired_once {
            self.shoot_interval
        } else {
            self.first_shot_delay
        };
        if self.shoot_timer >= due {
            self.fire(position);
            self.shoot_timer = Duration::ZERO;
            self.fired_once = true;
        }
    }

    /// Moves every live projectile and drops the expired ones.
    pub fn advance_projectiles(&mut self, dt: Duration) {
        for projectile in self.projectiles.iter_mut() {
            projectile.update(dt);
        }
        self.projectiles.retain(|p| !p.is_expired());
    }

    /// Flags every projectile touching an obstacle; pruned next frame.
    pub fn collide_projectiles(&mut self, obstacles: &[Rect]) {
        for projectile in self.projectiles.iter_mut() {
            let bounds = projectile.bounds();
            if obstacles.iter().any(|o| bounds.intersects(o)) {
                projectile.mark_hit();
            }
        }
    }

    fn fire(&mut self, position: Vec2) {
        self.projectiles.push(Projectile::new(
            self.projectile_texture,
            position,
            self.direction,
            &self.projectile_tuning,
        ));
        debug!(
            x = position.x,
            y = position.y,
            in_flight = self.projectiles.len(),
            "turret fired"
        );
    }
}
