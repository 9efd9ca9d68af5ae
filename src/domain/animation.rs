// Frame-sequence playback and the per-actor state machine that selects a sequence.

use super::geometry::Rect;
use super::render::{RenderSink, SpriteDraw, SpriteOrigin};
use super::resources::TextureId;
use glam::Vec2;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationState {
    Idle,
    Run,
    Jump,
    Fall,
    Attack,
    Death,
}

/// Fixed list of sheet regions played back on a timer.
#[derive(Debug, Clone)]
pub struct AnimationSequence {
    texture: TextureId,
    frames: Vec<Rect>,
    frame_duration: Duration,
    looping: bool,

    // Playback cursor.
    index: usize,
    elapsed: Duration,
    finished: bool,
}

impl AnimationSequence {
    pub fn new(
        texture: TextureId,
        frames: impl IntoIterator<Item = Rect>,
        frame_duration: Duration,
        looping: bool,
    ) -> Self {
        Self {
            texture,
            frames: frames.into_iter().collect(),
            frame_duration,
            looping,
            index: 0,
            elapsed: Duration::ZERO,
            finished: false,
        }
    }

    pub fn texture(&self) -> TextureId {
        self.texture
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Sheet region for the current frame, if the sequence has any frames.
    pub fn current_frame(&self) -> Option<Rect> {
        self.frames.get(self.index).copied()
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.elapsed = Duration::ZERO;
        self.finished = false;
    }

    pub fn update(&mut self, dt: Duration) {
        if self.frames.len() <= 1 {
            return;
        }
        if self.finished && !self.looping {
            return;
        }

        self.elapsed += dt;
        if self.elapsed < self.frame_duration {
            return;
        }

        // At most one frame per update; surplus time is dropped.
        self.elapsed = Duration::ZERO;
        self.index += 1;
        if self.index >= self.frames.len() {
            if self.looping {
                self.index = 0;
            } else {
                self.index = self.frames.len() - 1;
                self.finished = true;
            }
        }
    }
}

/// State-keyed collection of sequences with exactly one current state.
#[derive(Debug, Clone)]
pub struct AnimationSet {
    sequences: HashMap<AnimationState, AnimationSequence>,
    current: AnimationState,
    previous: AnimationState,
}

impl AnimationSet {
    /// Builds a set whose current state is `initial`, playing `sequence`.
    pub fn new(initial: AnimationState, sequence: AnimationSequence) -> Self {
        let mut sequences = HashMap::new();
        sequences.insert(initial, sequence);
        Self {
            sequences,
            current: initial,
            previous: initial,
        }
    }

    /// Registers `sequence` under `state`, replacing any earlier one.
    pub fn add_sequence(&mut self, state: AnimationState, sequence: AnimationSequence) {
        self.sequences.insert(state, sequence);
    }

    pub fn state(&self) -> AnimationState {
        self.current
    }

    pub fn previous_state(&self) -> AnimationState {
        self.previous
    }

    /// Switches to `state` and rewinds its sequence.
    ///
    /// Re-entering the current state is a no-op unless `force` is set.
    ///
    /// # Panics
    /// When no sequence is registered for `state`. Actors register every
    /// state they can enter at construction, so this is a programming error.
    pub fn set_state(&mut self, state: AnimationState, force: bool) {
        if state == self.current && !force {
            return;
        }
        let sequence = self
            .sequences
            .get_mut(&state)
            .unwrap_or_else(|| panic!("no animation registered for {state:?}"));
        sequence.reset();
        self.previous = self.current;
        self.current = state;
    }

    pub fn current(&self) -> &AnimationSequence {
        // `current` is only ever assigned a registered key.
        &self.sequences[&self.current]
    }

    pub fn is_finished(&self) -> bool {
        self.current().is_finished()
    }

    pub fn update(&mut self, dt: Duration) {
        if let Some(sequence) = self.sequences.get_mut(&self.current) {
            sequence.update(dt);
        }
    }

    /// Draws the current frame at `position`.
    ///
    /// `base_width` is the width of the narrowest (idle) frame in sheet pixels.
    /// When flipped, frames are pivoted on their right edge and shifted by the
    /// scaled base width, so wide frames grow away from the facing side.
    pub fn draw(
        &self,
        sink: &mut dyn RenderSink,
        position: Vec2,
        flip_horizontal: bool,
        base_width: i32,
        scale: f32,
    ) {
        let sequence = self.current();
        let Some(frame) = sequence.current_frame() else {
            return;
        };

        let mut draw_position = position;
        let mut origin = Vec2::ZERO;
        if flip_horizontal {
            origin = Vec2::new(frame.width as f32, 0.0);
            draw_position.x += base_width as f32 * scale;
        }

        sink.draw(SpriteDraw {
            texture: sequence.texture(),
            position: draw_position,
            source: Some(frame),
            rotation: 0.0,
            origin: SpriteOrigin::Pixels(origin),
            scale: Vec2::splat(scale),
            flip_horizontal,
        });
    }
}

/// `count` equally sized frames laid out left to right.
pub fn frame_row(count: usize, start_x: i32, stride: i32, width: i32, height: i32) -> Vec<Rect> {
    (0..count as i32)
        .map(|i| Rect::new(start_x + i * stride, 0, width, height))
        .collect()
}
