// Straight-line projectile fired by turrets.

use super::geometry::Rect;
use super::render::{RenderSink, SpriteDraw, SpriteOrigin};
use super::resources::TextureId;
use super::tuning::ProjectileTuning;
use glam::Vec2;
use std::time::Duration;

// Projectile speeds are authored per 60 Hz frame.
const FRAMES_PER_SECOND: f32 = 60.0;

#[derive(Debug, Clone)]
pub struct Projectile {
    position: Vec2,
    velocity: Vec2,
    rotation: f32,
    elapsed: Duration,
    lifetime: Duration,
    hit: bool,

    texture: TextureId,
    scale: f32,
    hitbox_size: i32,
}

impl Projectile {
    /// Spawns a projectile moving along `direction` (expected unit length).
    pub fn new(
        texture: TextureId,
        position: Vec2,
        direction: Vec2,
        tuning: &ProjectileTuning,
    ) -> Self {
        Self {
            position,
            velocity: direction * tuning.speed,
            rotation: direction.y.atan2(direction.x),
            elapsed: Duration::ZERO,
            lifetime: tuning.lifetime,
            hit: false,
            texture,
            scale: tuning.scale,
            hitbox_size: tuning.hitbox_size,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Render rotation in radians, fixed at spawn.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Expired projectiles are inert and removed by their owner.
    pub fn is_expired(&self) -> bool {
        self.hit || self.elapsed >= self.lifetime
    }

    pub fn mark_hit(&mut self) {
        self.hit = true;
    }

    /// Square hitbox centred on the position.
    pub fn bounds(&self) -> Rect {
        let half = self.hitbox_size / 2;
        Rect::new(
            self.position.x as i32 - half,
            self.position.y as i32 - half,
            self.hitbox_size,
            self.hitbox_size,
        )
    }

    pub fn update(&mut self, dt: Duration) {
        self.elapsed += dt;
        self.position += self.velocity * dt.as_secs_f32() * FRAMES_PER_SECOND;
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        sink.draw(SpriteDraw {
            texture: self.texture,
            position: self.position,
            source: None,
            rotation: self.rotation,
            origin: SpriteOrigin::TextureCenter,
            scale: Vec2::splat(self.scale),
            flip_horizontal: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projectile(direction: Vec2) -> Projectile {
        Projectile::new(
            TextureId(0),
            Vec2::new(100.0, 100.0),
            direction,
            &ProjectileTuning::default(),
        )
    }

    #[test]
    fn when_one_second_passes_then_projectile_travels_sixty_frames_of_speed() {
        let mut p = projectile(Vec2::new(-1.0, 0.0));

        for _ in 0..10 {
            p.update(Duration::from_millis(100));
        }

        assert!((p.position().x - (100.0 - 360.0)).abs() < 0.01);
        assert_eq!(p.position().y, 100.0);
        assert!(!p.is_expired());
    }

    #[test]
    fn when_lifetime_elapses_then_projectile_expires() {
        let mut p = projectile(Vec2::new(0.0, 1.0));

        p.update(Duration::from_secs(19));
        assert!(!p.is_expired());

        p.update(Duration::from_secs(1));
        assert!(p.is_expired());
    }

    #[test]
    fn when_marked_hit_then_projectile_expires_immediately() {
        let mut p = projectile(Vec2::new(1.0, 0.0));

        p.mark_hit();

        assert!(p.is_expired());
    }

    #[test]
    fn when_fired_downward_then_rotation_points_down() {
        let p = projectile(Vec2::new(0.0, 1.0));

        assert!((p.rotation() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(p.bounds(), Rect::new(96, 96, 8, 8));
    }
}
