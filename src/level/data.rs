// Static level layout: what a level is built from, independent of runtime state.

use crate::domain::geometry::Rect;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse level file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("level {level:?} has no level end")]
    MissingLevelEnd { level: String },

    #[error("level {level:?} has invalid geometry: {what}")]
    InvalidGeometry { level: String, what: String },

    #[error("level {level:?} has a turret with a zero or non-finite direction")]
    InvalidDirection { level: String },

    #[error("no level files found in {dir}")]
    NoLevels { dir: PathBuf },
}

/// One-way platform: a sheet region scaled onto the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformDescriptor {
    pub position: Vec2,
    pub source: Rect,
    #[serde(default = "default_platform_scale")]
    pub scale: Vec2,
}

fn default_platform_scale() -> Vec2 {
    Vec2::splat(2.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpikeDescriptor {
    pub position: Vec2,
    #[serde(default)]
    pub rotation_degrees: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnemySpawn {
    Patrol {
        position: Vec2,
    },
    Turret {
        position: Vec2,
        direction: Vec2,
        #[serde(default)]
        rotation_degrees: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    pub name: String,
    pub spawn: Vec2,
    #[serde(default)]
    pub floors: Vec<Rect>,
    #[serde(default)]
    pub platforms: Vec<PlatformDescriptor>,
    #[serde(default)]
    pub spikes: Vec<SpikeDescriptor>,
    #[serde(default)]
    pub enemies: Vec<EnemySpawn>,
    pub level_ends: Vec<Rect>,
}

impl LevelData {
    /// Checks the invariants the runtime relies on.
    pub fn validate(&self) -> Result<(), LevelError> {
        let invalid = |what: String| LevelError::InvalidGeometry {
            level: self.name.clone(),
            what,
        };

        if self.level_ends.is_empty() {
            return Err(LevelError::MissingLevelEnd {
                level: self.name.clone(),
            });
        }
        if !self.spawn.is_finite() {
            return Err(invalid("spawn point is not finite".to_string()));
        }
        if let Some(idx) = self.floors.iter().position(Rect::is_empty) {
            return Err(invalid(format!("floor {idx} has no area")));
        }
        if let Some(idx) = self.floors.iter().position(|r| !r.edges_in_range()) {
            return Err(invalid(format!("floor {idx} extends past the world limits")));
        }
        if let Some(idx) = self.level_ends.iter().position(Rect::is_empty) {
            return Err(invalid(format!("level end {idx} has no area")));
        }
        if let Some(idx) = self.level_ends.iter().position(|r| !r.edges_in_range()) {
            return Err(invalid(format!("level end {idx} extends past the world limits")));
        }
        for (idx, platform) in self.platforms.iter().enumerate() {
            if platform.source.is_empty() || platform.scale.cmple(Vec2::ZERO).any() {
                return Err(invalid(format!("platform {idx} has no area")));
            }
        }
        for spawn in &self.enemies {
            if let EnemySpawn::Turret { direction, .. } = spawn {
                if !direction.is_finite() || *direction == Vec2::ZERO {
                    return Err(LevelError::InvalidDirection {
                        level: self.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Parses and validates one level. `path` is only used for error reports.
    pub fn from_json(path: &Path, json: &str) -> Result<Self, LevelError> {
        let data: LevelData = serde_json::from_str(json).map_err(|source| LevelError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        data.validate()?;
        Ok(data)
    }

    pub fn load_file(path: &Path) -> Result<Self, LevelError> {
        let json = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &json)
    }

    /// Loads every `*.json` file in `dir`, ordered by file name.
    pub fn load_dir(dir: &Path) -> Result<Vec<Self>, LevelError> {
        let io_err = |source| LevelError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        if paths.is_empty() {
            return Err(LevelError::NoLevels {
                dir: dir.to_path_buf(),
            });
        }

        paths.sort();
        paths.iter().map(|path| Self::load_file(path)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> serde_json::Value {
        json!({
            "name": "test",
            "spawn": [0.0, 500.0],
            "floors": [{ "x": 0, "y": 640, "width": 80, "height": 80 }],
            "level_ends": [{ "x": 400, "y": 512, "width": 128, "height": 128 }]
        })
    }

    fn parse(value: serde_json::Value) -> Result<LevelData, LevelError> {
        LevelData::from_json(Path::new("test.json"), &value.to_string())
    }

    #[test]
    fn when_optional_lists_are_omitted_then_they_default_to_empty() {
        let data = parse(minimal()).expect("minimal level parses");

        assert_eq!(data.spawn, Vec2::new(0.0, 500.0));
        assert_eq!(data.floors, vec![Rect::new(0, 640, 80, 80)]);
        assert!(data.platforms.is_empty());
        assert!(data.spikes.is_empty());
        assert!(data.enemies.is_empty());
    }

    #[test]
    fn when_enemies_are_tagged_by_kind_then_each_variant_parses() {
        let mut value = minimal();
        value["enemies"] = json!([
            { "kind": "patrol", "position": [900.0, 500.0] },
            { "kind": "turret", "position": [3300.0, 480.0], "direction": [-1.0, 0.0], "rotation_degrees": 270.0 }
        ]);
        value["platforms"] = json!([
            { "position": [500.0, 450.0], "source": { "x": 0, "y": 13, "width": 150, "height": 30 } }
        ]);

        let data = parse(value).expect("level parses");

        assert_eq!(
            data.enemies,
            vec![
                EnemySpawn::Patrol {
                    position: Vec2::new(900.0, 500.0)
                },
                EnemySpawn::Turret {
                    position: Vec2::new(3300.0, 480.0),
                    direction: Vec2::new(-1.0, 0.0),
                    rotation_degrees: 270.0,
                },
            ]
        );
        assert_eq!(data.platforms[0].scale, Vec2::splat(2.0));
    }

    #[test]
    fn when_level_end_is_missing_then_validation_fails() {
        let mut value = minimal();
        value["level_ends"] = json!([]);

        assert!(matches!(
            parse(value),
            Err(LevelError::MissingLevelEnd { level }) if level == "test"
        ));
    }

    #[test]
    fn when_turret_direction_is_zero_then_validation_fails() {
        let mut value = minimal();
        value["enemies"] = json!([
            { "kind": "turret", "position": [0.0, 0.0], "direction": [0.0, 0.0] }
        ]);

        assert!(matches!(parse(value), Err(LevelError::InvalidDirection { .. })));
    }

    #[test]
    fn when_floor_has_no_area_then_validation_names_it() {
        let mut value = minimal();
        value["floors"] = json!([
            { "x": 0, "y": 640, "width": 80, "height": 80 },
            { "x": 80, "y": 640, "width": 0, "height": 80 }
        ]);

        let err = parse(value).expect_err("zero-width floor is rejected");
        assert_eq!(
            err.to_string(),
            "level \"test\" has invalid geometry: floor 1 has no area"
        );
    }

    #[test]
    fn when_floor_edge_overflows_then_validation_rejects_it() {
        let mut value = minimal();
        value["floors"] = json!([
            { "x": 10, "y": 0, "width": i32::MAX, "height": 10 }
        ]);

        let err = parse(value).expect_err("overflowing floor is rejected");
        assert_eq!(
            err.to_string(),
            "level \"test\" has invalid geometry: floor 0 extends past the world limits"
        );
    }

    #[test]
    fn when_level_end_bottom_overflows_then_validation_rejects_it() {
        let mut value = minimal();
        value["level_ends"] = json!([
            { "x": 0, "y": i32::MAX - 5, "width": 128, "height": 128 }
        ]);

        assert!(matches!(parse(value), Err(LevelError::InvalidGeometry { .. })));
    }

    #[test]
    fn when_json_is_malformed_then_parse_error_carries_the_path() {
        let err = LevelData::from_json(Path::new("levels/broken.json"), "{ not json")
            .expect_err("malformed json is rejected");

        assert!(matches!(&err, LevelError::Parse { path, .. } if path == Path::new("levels/broken.json")));
    }

    #[test]
    fn when_directory_is_missing_then_io_error_is_returned() {
        let err = LevelData::load_dir(Path::new("/definitely/not/a/levels/dir"))
            .expect_err("missing dir is an error");

        assert!(matches!(err, LevelError::Io { .. }));
    }
}
