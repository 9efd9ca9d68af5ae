// Scripted input: a JSON list of button segments replayed one frame at a time.

use crate::domain::input::{ButtonState, InputIntent, InputSource, InputTracker};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read input script {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse input script {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Buttons held for `frames` consecutive frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScriptSegment {
    pub frames: u32,
    #[serde(flatten)]
    pub buttons: ButtonState,
}

/// Replays segments in order, then reports idle input forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    segments: Vec<ScriptSegment>,
    segment: usize,
    frame_in_segment: u32,
    tracker: InputTracker,
}

impl ScriptedInput {
    pub fn new(segments: Vec<ScriptSegment>) -> Self {
        Self {
            segments,
            ..Self::default()
        }
    }

    /// Idle input only.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn from_json(path: &Path, json: &str) -> Result<Self, ScriptError> {
        let segments = serde_json::from_str(json).map_err(|source| ScriptError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(segments))
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let json = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &json)
    }

    /// Total scripted frames, not counting the idle tail.
    pub fn len_frames(&self) -> u64 {
        self.segments.iter().map(|s| u64::from(s.frames)).sum()
    }

    pub fn is_finished(&self) -> bool {
        self.segment >= self.segments.len()
    }

    /// Held buttons for the next frame.
    pub fn next_buttons(&mut self) -> ButtonState {
        // Skip empty segments.
        while let Some(segment) = self.segments.get(self.segment) {
            if self.frame_in_segment < segment.frames {
                self.frame_in_segment += 1;
                return segment.buttons;
            }
            self.segment += 1;
            self.frame_in_segment = 0;
        }
        ButtonState::default()
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self) -> InputIntent {
        let buttons = self.next_buttons();
        self.tracker.push(buttons);
        self.tracker.intent()
    }
}
