// A loaded level: live props and enemies rebuilt from static data on every load.

use super::data::{EnemySpawn, LevelData};
use crate::domain::enemy::Enemy;
use crate::domain::geometry::Rect;
use crate::domain::props::{Floor, LevelEnd, Platform, Spikes};
use crate::domain::render::RenderSink;
use crate::domain::resources::SpriteSheets;
use crate::domain::tuning::Tuning;
use glam::Vec2;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Level {
    data: LevelData,
    sheets: SpriteSheets,
    tuning: Tuning,

    floors: Vec<Floor>,
    platforms: Vec<Platform>,
    spikes: Vec<Spikes>,
    enemies: Vec<Enemy>,
    level_ends: Vec<LevelEnd>,

    // Collision rectangles, cached at load since geometry never moves.
    floor_bounds: Vec<Rect>,
    platform_bounds: Vec<Rect>,
    level_end_bounds: Vec<Rect>,

    complete: bool,
}

impl Level {
    /// Builds the level and loads it once.
    pub fn new(data: LevelData, sheets: SpriteSheets, tuning: Tuning) -> Self {
        let mut level = Self {
            data,
            sheets,
            tuning,
            floors: Vec::new(),
            platforms: Vec::new(),
            spikes: Vec::new(),
            enemies: Vec::new(),
            level_ends: Vec::new(),
            floor_bounds: Vec::new(),
            platform_bounds: Vec::new(),
            level_end_bounds: Vec::new(),
            complete: false,
        };
        level.load();
        level
    }

    /// Clears every list and rebuilds it from the level data.
    ///
    /// Idempotent: enemies come back at full health, in-flight projectiles
    /// are gone and the complete flag is cleared.
    pub fn load(&mut self) {
        let sheets = self.sheets;
        let data = &self.data;

        self.floors = data
            .floors
            .iter()
            .map(|bounds| Floor::new(sheets.floor, *bounds))
            .collect();
        self.platforms = data
            .platforms
            .iter()
            .map(|p| Platform::new(sheets.platform, p.position, p.source, p.scale))
            .collect();
        self.spikes = data
            .spikes
            .iter()
            .map(|s| Spikes::new(sheets.spikes, s.position, s.rotation_degrees))
            .collect();
        self.enemies = data
            .enemies
            .iter()
            .map(|spawn| spawn_enemy(spawn, &sheets, &self.tuning))
            .collect();
        self.level_ends = data
            .level_ends
            .iter()
            .map(|bounds| LevelEnd::new(sheets.statue, *bounds))
            .collect();

        self.floor_bounds = self.floors.iter().map(Floor::bounds).collect();
        self.platform_bounds = self.platforms.iter().map(Platform::bounds).collect();
        self.level_end_bounds = self.level_ends.iter().map(LevelEnd::bounds).collect();
        self.complete = false;

        info!(
            level = %self.data.name,
            floors = self.floors.len(),
            platforms = self.platforms.len(),
            spikes = self.spikes.len(),
            enemies = self.enemies.len(),
            "level loaded"
        );
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn data(&self) -> &LevelData {
        &self.data
    }

    pub fn spawn_point(&self) -> Vec2 {
        self.data.spawn
    }

    pub fn floor_bounds(&self) -> &[Rect] {
        &self.floor_bounds
    }

    pub fn platform_bounds(&self) -> &[Rect] {
        &self.platform_bounds
    }

    pub fn level_end_bounds(&self) -> &[Rect] {
        &self.level_end_bounds
    }

    pub fn spikes(&self) -> &[Spikes] {
        &self.spikes
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    /// Static hazards alongside the enemies, borrowed together for the death check.
    pub fn hazards_mut(&mut self) -> (&[Spikes], &mut [Enemy]) {
        (&self.spikes, &mut self.enemies)
    }

    /// Live projectiles across every enemy.
    pub fn projectile_count(&self) -> usize {
        self.enemies.iter().map(|e| e.projectiles().len()).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Set once per load; later calls are no-ops.
    pub fn mark_complete(&mut self) {
        if !self.complete {
            self.complete = true;
            info!(level = %self.data.name, "level complete");
        }
    }

    pub fn update_enemies(&mut self, dt: Duration) {
        for enemy in &mut self.enemies {
            enemy.update(dt);
        }
    }

    /// Floors, ledges and walls for every enemy, then turret shots vs obstacles.
    pub fn collide_enemies(&mut self) {
        for enemy in &mut self.enemies {
            enemy.environment_collide(&self.floor_bounds, &self.platform_bounds);
        }
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        for floor in &self.floors {
            floor.draw(sink);
        }
        for platform in &self.platforms {
            platform.draw(sink);
        }
        for spikes in &self.spikes {
            spikes.draw(sink);
        }
        for level_end in &self.level_ends {
            level_end.draw(sink);
        }
        for enemy in &self.enemies {
            enemy.draw(sink);
        }
    }
}

fn spawn_enemy(spawn: &EnemySpawn, sheets: &SpriteSheets, tuning: &Tuning) -> Enemy {
    match *spawn {
        EnemySpawn::Patrol { position } => Enemy::patrol(position, sheets, tuning),
        EnemySpawn::Turret {
            position,
            direction,
            rotation_degrees,
        } => Enemy::turret(position, direction, rotation_degrees, sheets, tuning),
    }
}
