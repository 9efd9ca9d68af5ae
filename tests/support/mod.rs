// Shared builders for integration tests: sheets, small levels and a ready simulation.
#![allow(dead_code)]

use glam::Vec2;
use platformer_sim::domain::{SpriteSheets, TextureTable, Tuning};
use platformer_sim::level::{LevelBuilder, LevelData, LevelManager};
use platformer_sim::use_cases::Simulation;
use std::time::Duration;
use tempfile::TempDir;

// One 60 Hz frame.
pub const FRAME: Duration = Duration::from_millis(16);

pub fn sheets() -> SpriteSheets {
    SpriteSheets::register(&mut TextureTable::new())
}

// Build a simulation over `levels` with default tuning.
pub fn simulation(levels: Vec<LevelData>) -> Simulation {
    let sheets = sheets();
    let manager =
        LevelManager::new(levels, sheets, Tuning::default()).expect("test levels are valid");
    Simulation::new(manager, &sheets, Tuning::default())
}

// A floor strip of `tiles` 80px blocks at y = 640, hero spawned on top of it.
pub fn strip(name: &str, tiles: i32) -> LevelBuilder {
    let mut builder = LevelBuilder::new(name, Vec2::new(0.0, 560.0));
    for i in 0..tiles {
        builder.floor(i * 80, 640);
    }
    builder
}

// Long strip with the statue well to the right of the spawn point.
pub fn long_walk() -> LevelData {
    let mut builder = strip("long_walk", 20);
    builder.level_end(1200, 512);
    builder.build()
}

// Level whose statue overlaps the spawn point, so it completes on the first frame.
pub fn instant_finish(name: &str) -> LevelData {
    let mut builder = strip(name, 4);
    builder.level_end(0, 512);
    builder.build()
}

// Scratch directory removed when the guard drops, pass or fail.
pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("create scratch dir")
}
