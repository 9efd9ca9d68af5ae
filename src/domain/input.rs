// Input intent consumed once per frame, plus the edge detection that derives it
// from raw held-button state.

use serde::{Deserialize, Serialize};

/// What the player wants to do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputIntent {
    /// -1.0 (left), 0.0 or 1.0 (right).
    pub horizontal: f32,
    pub jump_held: bool,
    pub drop_held: bool,
    /// True only on the frame the attack button goes down.
    pub attack_triggered: bool,
}

/// Raw held state of the gameplay buttons, as polled by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonState {
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub jump: bool,
    #[serde(default)]
    pub drop: bool,
    #[serde(default)]
    pub attack: bool,
}

/// Anything that can hand the simulation one intent per frame.
pub trait InputSource {
    fn sample(&mut self) -> InputIntent;
}

/// Turns consecutive button snapshots into intents.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    previous: ButtonState,
    current: ButtonState,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the latest snapshot; call once per frame before `intent`.
    pub fn push(&mut self, buttons: ButtonState) {
        self.previous = self.current;
        self.current = buttons;
    }

    pub fn buttons(&self) -> ButtonState {
        self.current
    }

    pub fn intent(&self) -> InputIntent {
        // Right wins when both directions are held.
        let horizontal = if self.current.right {
            1.0
        } else if self.current.left {
            -1.0
        } else {
            0.0
        };

        InputIntent {
            horizontal,
            jump_held: self.current.jump,
            drop_held: self.current.drop,
            attack_triggered: self.current.attack && !self.previous.attack,
        }
    }
}
