// Enemies: one shared record plus a closed set of behaviour kinds.

mod turret;

pub use turret::Turret;

use crate::domain::animation::{AnimationSequence, AnimationSet, AnimationState, frame_row};
use crate::domain::geometry::Rect;
use crate::domain::hazard::Hazard;
use crate::domain::projectile::Projectile;
use crate::domain::render::{RenderSink, SpriteDraw, SpriteOrigin};
use crate::domain::resources::SpriteSheets;
use crate::domain::tuning::Tuning;
use glam::Vec2;
use std::time::Duration;

/// Per-kind behaviour. Patrol has no extra state; turrets own their shots.
#[derive(Debug, Clone)]
pub enum EnemyKind {
    Patrol,
    Turret(Turret),
}

/// Body dimensions and motion constants, fixed at spawn.
#[derive(Debug, Clone, Copy)]
struct Body {
    frame_width: i32,
    frame_height: i32,
    scale: f32,
    speed: f32,
    gravity: f32,
    max_fall: f32,
    stationary: bool,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub position: Vec2,
    pub velocity: Vec2,

    health: i32,
    max_health: i32,
    hit_cooldown: Duration,
    hit_cooldown_time: Duration,

    grounded: bool,
    /// +1 walks right, -1 walks left. Also decides the sprite flip.
    direction: f32,
    flip: bool,
    edge_look_ahead: i32,

    body: Body,
    animations: AnimationSet,
    kind: EnemyKind,
}

impl Enemy {
    /// Walking enemy that turns around at ledges and walls.
    pub fn patrol(position: Vec2, sheets: &SpriteSheets, tuning: &Tuning) -> Self {
        let patrol = &tuning.patrol;

        let walk = AnimationSequence::new(
            sheets.skeleton_walk,
            frame_row(patrol.walk_frames, 0, 22, 22, 33),
            patrol.frame_time,
            true,
        );
        let death = AnimationSequence::new(
            sheets.skeleton_death,
            frame_row(patrol.death_frames, 0, 33, 33, 32),
            patrol.frame_time,
            false,
        );
        let mut animations = AnimationSet::new(AnimationState::Run, walk);
        animations.add_sequence(AnimationState::Death, death);

        let body = Body {
            frame_width: patrol.frame_width,
            frame_height: patrol.frame_height,
            scale: patrol.scale,
            speed: patrol.speed,
            gravity: patrol.gravity,
            max_fall: patrol.max_fall,
            stationary: false,
        };

        Self::with_body(position, patrol.max_health, body, animations, EnemyKind::Patrol, tuning)
    }

    /// Stationary turret firing along `direction`. A non-zero rotation pivots
    /// the sprite about its centre; `position` is the unrotated top-left.
    pub fn turret(
        position: Vec2,
        direction: Vec2,
        rotation_degrees: f32,
        sheets: &SpriteSheets,
        tuning: &Tuning,
    ) -> Self {
        let config = &tuning.turret;

        // Shoot sheet is two frames wide, three rows deep.
        let shoot_frames = (0..config.shoot_frames as i32).map(|i| {
            Rect::new(
                (i % 2) * config.frame_width,
                (i / 2) * config.frame_height,
                config.frame_width,
                config.frame_height,
            )
        });
        let shoot = AnimationSequence::new(
            sheets.ballista_shoot,
            shoot_frames,
            config.shoot_frame_time,
            true,
        );
        let destroyed = AnimationSequence::new(
            sheets.ballista_destroyed,
            [Rect::new(0, 0, config.frame_width, config.frame_height)],
            config.death_frame_time,
            false,
        );
        let mut animations = AnimationSet::new(AnimationState::Run, shoot);
        animations.add_sequence(AnimationState::Death, destroyed);

        let turret = Turret::new(
            direction,
            rotation_degrees,
            sheets.arrow,
            config,
            &tuning.projectile,
        );
        let body = Body {
            frame_width: config.frame_width,
            frame_height: config.frame_height,
            scale: config.scale,
            speed: 0.0,
            gravity: 0.0,
            max_fall: 0.0,
            stationary: true,
        };

        let pivot_position = position + turret.origin() * config.scale;
        let faces_left = turret.faces_left();
        let mut enemy = Self::with_body(
            pivot_position,
            config.max_health,
            body,
            animations,
            EnemyKind::Turret(turret),
            tuning,
        );
        enemy.flip = faces_left;
        enemy
    }

    fn with_body(
        position: Vec2,
        max_health: i32,
        body: Body,
        animations: AnimationSet,
        kind: EnemyKind,
        tuning: &Tuning,
    ) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            health: max_health,
            max_health,
            hit_cooldown: Duration::ZERO,
            hit_cooldown_time: tuning.enemy.hit_cooldown,
            grounded: false,
            direction: 1.0,
            flip: false,
            edge_look_ahead: tuning.enemy.edge_look_ahead,
            body,
            animations,
            kind,
        }
    }

    pub fn kind(&self) -> &EnemyKind {
        &self.kind
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_stationary(&self) -> bool {
        self.body.stationary
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn is_flipped(&self) -> bool {
        self.flip
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animations.state()
    }

    /// Live projectiles fired by this enemy; empty for non-shooting kinds.
    pub fn projectiles(&self) -> &[Projectile] {
        match &self.kind {
            EnemyKind::Turret(turret) => turret.projectiles(),
            EnemyKind::Patrol => &[],
        }
    }

    pub fn projectiles_mut(&mut self) -> &mut [Projectile] {
        match &mut self.kind {
            EnemyKind::Turret(turret) => turret.projectiles_mut(),
            EnemyKind::Patrol => &mut [],
        }
    }

    pub fn bounds(&self) -> Rect {
        let body = &self.body;
        match &self.kind {
            EnemyKind::Turret(turret) => turret.bounds(
                self.position,
                body.frame_width,
                body.frame_height,
                body.scale,
            ),
            EnemyKind::Patrol => Rect::at(
                self.position,
                (body.frame_width as f32 * body.scale) as i32,
                (body.frame_height as f32 * body.scale) as i32,
            ),
        }
    }

    pub fn update(&mut self, dt: Duration) {
        self.hit_cooldown = self.hit_cooldown.saturating_sub(dt);

        if self.is_dead() {
            self.animations.update(dt);
            // In-flight shots keep flying while the turret breaks apart.
            if let EnemyKind::Turret(turret) = &mut self.kind {
                turret.advance_projectiles(dt);
            }
            return;
        }

        if let EnemyKind::Turret(turret) = &mut self.kind {
            turret.update(dt, self.position);
        }

        if !self.body.stationary {
            self.patrol_movement();
        }

        self.animations.update(dt);
    }

    fn patrol_movement(&mut self) {
        self.velocity.x = self.body.speed * self.direction;
        self.velocity.y = (self.velocity.y + self.body.gravity).min(self.body.max_fall);
        self.position += self.velocity;
        self.flip = self.direction < 0.0;
    }

    /// Returns true when the hit landed. Dead or cooling-down enemies ignore it.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.hit_cooldown > Duration::ZERO || self.is_dead() {
            return false;
        }

        self.health -= amount;
        self.hit_cooldown = self.hit_cooldown_time;
        if self.health <= 0 {
            self.health = 0;
            self.velocity = Vec2::ZERO;
            self.on_death();
        }
        true
    }

    fn on_death(&mut self) {
        self.animations.set_state(AnimationState::Death, true);
    }

    /// Floors, ledges and walls for walkers; obstacle hits for turret shots.
    pub fn environment_collide(&mut self, floors: &[Rect], platforms: &[Rect]) {
        self.apply_floor_collision(floors);
        self.check_edges(floors);
        self.check_walls(platforms);

        if let EnemyKind::Turret(turret) = &mut self.kind {
            let obstacles: Vec<Rect> = floors.iter().chain(platforms).copied().collect();
            turret.collide_projectiles(&obstacles);
        }
    }

    /// Lands the enemy on any floor its next vertical step would enter.
    pub fn apply_floor_collision(&mut self, floors: &[Rect]) {
        if self.body.stationary {
            return;
        }

        self.grounded = false;
        let next = self.bounds().offset(0, self.velocity.y as i32);
        for floor in floors {
            if self.velocity.y > 0.0 && next.intersects(floor) {
                let height = self.bounds().height;
                self.position.y = (floor.top() - height) as f32;
                self.velocity.y = 0.0;
                self.grounded = true;
            }
        }
    }

    /// Turns around when there is no floor just past the leading foot.
    pub fn check_edges(&mut self, floors: &[Rect]) {
        if self.body.stationary || !self.grounded {
            return;
        }

        let bounds = self.bounds();
        let probe_x = if self.direction > 0.0 {
            bounds.x + bounds.width + self.edge_look_ahead
        } else {
            bounds.x - self.edge_look_ahead
        };
        let probe = Rect::new(probe_x, bounds.bottom() + 5, 5, 10);

        if !floors.iter().any(|floor| probe.intersects(floor)) {
            self.reverse_direction();
        }
    }

    /// Turns around when two steps ahead would run into a platform.
    pub fn check_walls(&mut self, platforms: &[Rect]) {
        if self.body.stationary {
            return;
        }

        let next = self.bounds().offset((self.velocity.x * 2.0) as i32, 0);
        if platforms.iter().any(|platform| next.intersects(platform)) {
            self.reverse_direction();
        }
    }

    fn reverse_direction(&mut self) {
        self.direction = -self.direction;
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        match &self.kind {
            EnemyKind::Patrol => self.animations.draw(
                sink,
                self.position,
                self.flip,
                self.body.frame_width,
                self.body.scale,
            ),
            EnemyKind::Turret(turret) => {
                if self.is_dead() && self.animations.is_finished() {
                    return;
                }
                let sequence = self.animations.current();
                if let Some(frame) = sequence.current_frame() {
                    sink.draw(SpriteDraw {
                        texture: sequence.texture(),
                        position: self.position,
                        source: Some(frame),
                        rotation: turret.rotation_degrees().to_radians(),
                        origin: SpriteOrigin::Pixels(turret.origin()),
                        scale: Vec2::splat(self.body.scale),
                        flip_horizontal: self.flip,
                    });
                }
                for projectile in turret.projectiles() {
                    projectile.draw(sink);
                }
            }
        }
    }
}

impl Hazard for Enemy {
    fn bounds(&self) -> Rect {
        self.bounds()
    }

    fn is_active(&self) -> bool {
        !self.is_dead()
    }

    // Contact damage is decided by the death check, not here.
    fn on_hit(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resources::TextureTable;

    const FRAME: Duration = Duration::from_millis(16);

    fn sheets() -> SpriteSheets {
        SpriteSheets::register(&mut TextureTable::new())
    }

    fn skeleton(x: f32, y: f32) -> Enemy {
        Enemy::patrol(Vec2::new(x, y), &sheets(), &Tuning::default())
    }

    #[test]
    fn when_one_hp_enemy_takes_damage_then_it_dies_and_further_hits_are_ignored() {
        let mut enemy = skeleton(900.0, 500.0);
        enemy.velocity = Vec2::new(1.5, 3.0);

        assert!(enemy.take_damage(1));
        assert!(enemy.is_dead());
        assert_eq!(enemy.health(), 0);
        assert_eq!(enemy.velocity, Vec2::ZERO);
        assert_eq!(enemy.animation_state(), AnimationState::Death);

        assert!(!enemy.take_damage(1));
        assert_eq!(enemy.health(), 0);
    }

    #[test]
    fn when_hit_twice_within_cooldown_then_second_hit_is_rejected() {
        let mut tuning = Tuning::default();
        tuning.patrol.max_health = 3;
        let mut enemy = Enemy::patrol(Vec2::ZERO, &sheets(), &tuning);

        assert!(enemy.take_damage(1));
        assert!(!enemy.take_damage(1));
        assert_eq!(enemy.health(), 2);

        // 500 ms cooldown elapses over the next frames.
        for _ in 0..32 {
            enemy.update(FRAME);
        }
        assert!(enemy.take_damage(1));
        assert_eq!(enemy.health(), 1);
    }

    #[test]
    fn when_dead_then_enemy_no_longer_moves() {
        let mut enemy = skeleton(900.0, 500.0);
        enemy.take_damage(1);

        for _ in 0..10 {
            enemy.update(FRAME);
        }

        assert_eq!(enemy.position, Vec2::new(900.0, 500.0));
    }

    #[test]
    fn when_patrolling_then_enemy_walks_and_falls_under_gravity() {
        let mut enemy = skeleton(900.0, 500.0);

        enemy.update(FRAME);

        assert_eq!(enemy.velocity, Vec2::new(1.5, 0.6));
        assert_eq!(enemy.position, Vec2::new(901.5, 500.6));
        assert_eq!(enemy.bounds(), Rect::new(901, 500, 55, 82));
    }

    #[test]
    fn when_falling_onto_floor_then_enemy_lands_on_top_and_is_grounded() {
        let mut enemy = skeleton(900.0, 550.0);
        enemy.velocity.y = 12.0;

        enemy.apply_floor_collision(&[Rect::new(880, 640, 80, 80)]);

        assert_eq!(enemy.position.y, 558.0);
        assert_eq!(enemy.velocity.y, 0.0);
        assert!(enemy.is_grounded());
    }

    #[test]
    fn when_no_floor_ahead_then_enemy_reverses_at_the_ledge() {
        let mut enemy = skeleton(900.0, 558.0);
        enemy.velocity.y = 3.0;
        let floors = [Rect::new(880, 640, 80, 80)];

        enemy.apply_floor_collision(&floors);
        assert!(enemy.is_grounded());

        // Leading foot probe at x = 900 + 55 + 10 = 965, past the floor's right edge.
        enemy.check_edges(&floors);
        assert_eq!(enemy.direction(), -1.0);

        enemy.update(FRAME);
        assert!(enemy.is_flipped());
        assert_eq!(enemy.velocity.x, -1.5);
    }

    #[test]
    fn when_floor_continues_ahead_then_enemy_keeps_walking() {
        let mut enemy = skeleton(900.0, 558.0);
        enemy.velocity.y = 3.0;
        let floors = [Rect::new(880, 640, 80, 80), Rect::new(960, 640, 80, 80)];

        enemy.apply_floor_collision(&floors);
        enemy.check_edges(&floors);

        assert_eq!(enemy.direction(), 1.0);
    }

    #[test]
    fn when_platform_is_two_steps_ahead_then_enemy_reverses() {
        let mut enemy = skeleton(900.0, 558.0);
        enemy.velocity.x = 1.5;

        // Right edge is 955; two steps of 1.5 reach 958.
        enemy.check_walls(&[Rect::new(957, 500, 100, 60)]);
        assert_eq!(enemy.direction(), -1.0);

        enemy.check_walls(&[Rect::new(2000, 500, 100, 60)]);
        assert_eq!(enemy.direction(), -1.0);
    }

    #[test]
    fn when_turret_is_rotated_then_position_moves_to_pivot_and_bounds_stay_put() {
        let turret = Enemy::turret(
            Vec2::new(3300.0, 480.0),
            Vec2::new(-1.0, 0.0),
            270.0,
            &sheets(),
            &Tuning::default(),
        );

        assert_eq!(turret.position, Vec2::new(3428.0, 608.0));
        assert_eq!(turret.bounds(), Rect::new(3300, 480, 256, 256));
        assert!(turret.is_stationary());
        assert!(!turret.is_flipped());
    }

    #[test]
    fn when_unrotated_turret_fires_left_then_sprite_is_flipped() {
        let turret = Enemy::turret(
            Vec2::new(100.0, 100.0),
            Vec2::new(-1.0, 0.0),
            0.0,
            &sheets(),
            &Tuning::default(),
        );

        assert!(turret.is_flipped());
        assert_eq!(turret.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn when_turret_dies_then_in_flight_projectiles_keep_flying_and_expire() {
        let mut turret = Enemy::turret(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            0.0,
            &sheets(),
            &Tuning::default(),
        );
        for _ in 0..24 {
            turret.update(Duration::from_millis(100));
        }
        assert_eq!(turret.projectiles().len(), 1);
        let fired_at = turret.projectiles()[0].position();

        turret.take_damage(1);
        turret.update(Duration::from_millis(100));
        assert_eq!(turret.projectiles().len(), 1);
        assert!(turret.projectiles()[0].position().x > fired_at.x);

        // No new shots while dead; the old one runs out its lifetime.
        turret.update(Duration::from_secs(20));
        assert!(turret.projectiles().is_empty());
    }

    #[test]
    fn when_turret_is_stationary_then_environment_does_not_move_it() {
        let mut turret = Enemy::turret(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            0.0,
            &sheets(),
            &Tuning::default(),
        );

        turret.update(FRAME);
        turret.environment_collide(&[Rect::new(0, 200, 800, 80)], &[]);

        assert_eq!(turret.position, Vec2::ZERO);
        assert_eq!(turret.direction(), 1.0);
    }
}
