// Ordered level list with a current index.

use super::data::{LevelData, LevelError};
use super::runtime::Level;
use crate::domain::resources::SpriteSheets;
use crate::domain::tuning::Tuning;
use glam::Vec2;
use tracing::info;

#[derive(Debug)]
pub struct LevelManager {
    levels: Vec<LevelData>,
    current_index: usize,
    current: Level,
    sheets: SpriteSheets,
    tuning: Tuning,
}

impl LevelManager {
    /// Starts on the first level. Fails when the list is empty or a level is invalid.
    pub fn new(
        levels: Vec<LevelData>,
        sheets: SpriteSheets,
        tuning: Tuning,
    ) -> Result<Self, LevelError> {
        for level in &levels {
            level.validate()?;
        }
        let first = levels.first().cloned().ok_or_else(|| LevelError::NoLevels {
            dir: "<in-memory>".into(),
        })?;

        Ok(Self {
            current: Level::new(first, sheets, tuning),
            levels,
            current_index: 0,
            sheets,
            tuning,
        })
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> &Level {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Level {
        &mut self.current
    }

    pub fn has_next_level(&self) -> bool {
        self.current_index + 1 < self.levels.len()
    }

    pub fn spawn_point(&self) -> Vec2 {
        self.current.spawn_point()
    }

    /// Switches to `index` and loads it fresh. Out-of-range indices are ignored.
    pub fn load_level(&mut self, index: usize) -> bool {
        let Some(data) = self.levels.get(index) else {
            return false;
        };

        self.current_index = index;
        if self.current.data() == data {
            self.current.load();
        } else {
            self.current = Level::new(data.clone(), self.sheets, self.tuning);
        }
        info!(index, level = %self.current.name(), "switched level");
        true
    }

    pub fn load_first_level(&mut self) {
        self.load_level(0);
    }

    pub fn reload_current_level(&mut self) {
        self.current.load();
    }

    /// Advances to the next level. Returns false when this was the last one.
    pub fn load_next_level(&mut self) -> bool {
        if !self.has_next_level() {
            return false;
        }
        self.load_level(self.current_index + 1)
    }
}
