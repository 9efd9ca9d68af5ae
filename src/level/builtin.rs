// The three levels that ship with the game, written with a small builder.

use super::data::{EnemySpawn, LevelData, PlatformDescriptor, SpikeDescriptor};
use crate::domain::geometry::Rect;
use glam::Vec2;

const TILE: i32 = 80;
const STATUE: i32 = 128;
const PLATFORM_SOURCE: Rect = Rect::new(0, 13, 150, 30);

/// Accumulates geometry and spawns for one level.
#[derive(Debug, Clone)]
pub struct LevelBuilder {
    data: LevelData,
}

impl LevelBuilder {
    pub fn new(name: &str, spawn: Vec2) -> Self {
        Self {
            data: LevelData {
                name: name.to_string(),
                spawn,
                floors: Vec::new(),
                platforms: Vec::new(),
                spikes: Vec::new(),
                enemies: Vec::new(),
                level_ends: Vec::new(),
            },
        }
    }

    /// One standard floor tile.
    pub fn floor(&mut self, x: i32, y: i32) -> &mut Self {
        self.floor_sized(x, y, TILE, TILE)
    }

    pub fn floor_sized(&mut self, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        self.data.floors.push(Rect::new(x, y, width, height));
        self
    }

    pub fn platform(&mut self, position: Vec2, scale: Vec2) -> &mut Self {
        self.data.platforms.push(PlatformDescriptor {
            position,
            source: PLATFORM_SOURCE,
            scale,
        });
        self
    }

    pub fn spike(&mut self, position: Vec2, rotation_degrees: f32) -> &mut Self {
        self.data.spikes.push(SpikeDescriptor {
            position,
            rotation_degrees,
        });
        self
    }

    pub fn patrol(&mut self, position: Vec2) -> &mut Self {
        self.data.enemies.push(EnemySpawn::Patrol { position });
        self
    }

    pub fn turret(&mut self, position: Vec2, direction: Vec2, rotation_degrees: f32) -> &mut Self {
        self.data.enemies.push(EnemySpawn::Turret {
            position,
            direction,
            rotation_degrees,
        });
        self
    }

    /// Level-end statue with the standard footprint.
    pub fn level_end(&mut self, x: i32, y: i32) -> &mut Self {
        self.level_end_sized(x, y, STATUE, STATUE)
    }

    pub fn level_end_sized(&mut self, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        self.data.level_ends.push(Rect::new(x, y, width, height));
        self
    }

    pub fn build(&self) -> LevelData {
        self.data.clone()
    }
}

/// All built-in levels in play order.
pub fn builtin_levels() -> Vec<LevelData> {
    vec![corridor(), spike_field(), gauntlet()]
}

/// Long corridor with a skeleton, a climb over a spiked wall, and a drop to
/// the statue.
pub fn corridor() -> LevelData {
    let mut b = LevelBuilder::new("corridor", Vec2::new(0.0, 500.0));

    for i in 0..16 {
        b.floor(i * TILE, 640);
    }
    b.floor(1280, 480).floor(1600, 480);
    for i in 1..5 {
        b.floor(i * TILE + 1600, 560);
    }
    // Wall the hero climbs over.
    for i in 1..6 {
        b.floor(1760, i * TILE);
    }
    b.floor(1920, 354);
    // Tall wall in front of the final drop.
    for i in -4..8 {
        b.floor(3000, i * TILE);
    }
    for i in 0..10 {
        b.floor(i * TILE + 3008, 804);
    }

    b.platform(Vec2::new(500.0, 450.0), Vec2::splat(2.0))
        .platform(Vec2::new(2100.0, 160.0), Vec2::new(6.0, 2.0));

    // Spikes on the far face of the climbing wall.
    for i in 1..7 {
        b.spike(Vec2::new(1840.0, (i * 64 + 20) as f32), 90.0);
    }

    b.patrol(Vec2::new(900.0, 500.0));
    b.level_end(3600, 680);
    b.build()
}

/// Flat run over a field of spike pits, guarded by a ballista at the far end.
pub fn spike_field() -> LevelData {
    let mut b = LevelBuilder::new("spike_field", Vec2::new(0.0, 500.0));

    for i in -2..0 {
        b.floor(i * TILE, 640);
    }
    for i in 0..50 {
        b.floor(i * TILE, 720);
    }
    // Stepping stones every four tiles.
    for i in 0..10 {
        b.floor(i * 320, 640);
    }
    b.floor(2080, 480);

    for i in 0..10 {
        let x = (i * 320) as f32;
        b.spike(Vec2::new(84.0 + x, 656.0), 0.0)
            .spike(Vec2::new(164.0 + x, 656.0), 0.0);
    }
    for i in 0..9 {
        b.spike(Vec2::new(244.0 + (i * 320) as f32, 656.0), 0.0);
    }

    b.turret(Vec2::new(3300.0, 480.0), Vec2::new(-1.0, 0.0), 270.0);
    b.level_end(3800, 596);
    b.build()
}

/// Ballistas raining arrows on a floor full of skeletons.
pub fn gauntlet() -> LevelData {
    let mut b = LevelBuilder::new("gauntlet", Vec2::new(0.0, 500.0));

    // Gap of two tiles after the start.
    for i in -2..2 {
        b.floor(i * TILE, 640);
    }
    for i in 4..25 {
        b.floor(i * TILE, 640);
    }

    for i in 1..8 {
        b.turret(
            Vec2::new((80 + i * 240) as f32, 0.0),
            Vec2::new(0.0, 1.0),
            180.0,
        );
    }
    for i in 3..10 {
        b.patrol(Vec2::new((i * 160) as f32, 500.0));
    }

    b.platform(Vec2::new(2000.0, 480.0), Vec2::new(6.0, 2.0));
    b.patrol(Vec2::new(2300.0, 380.0));
    b.platform(Vec2::new(3000.0, 702.0), Vec2::new(6.0, 2.0));

    b.level_end(3700, 580);
    b.build()
}
