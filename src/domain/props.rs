// Static level pieces: floors, one-way platforms, spikes and level-end statues.

use super::geometry::{Rect, swaps_axes};
use super::render::{RenderSink, SpriteDraw, SpriteOrigin};
use super::resources::TextureId;
use glam::Vec2;

/// Solid block. Blocks from every side.
#[derive(Debug, Clone)]
pub struct Floor {
    bounds: Rect,
    texture: TextureId,
}

impl Floor {
    pub fn new(texture: TextureId, bounds: Rect) -> Self {
        Self { bounds, texture }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        sink.fill(self.texture, self.bounds);
    }
}

/// One-way platform: only lands a hero falling onto it from above.
#[derive(Debug, Clone)]
pub struct Platform {
    position: Vec2,
    source: Rect,
    scale: Vec2,
    texture: TextureId,
}

impl Platform {
    pub fn new(texture: TextureId, position: Vec2, source: Rect, scale: Vec2) -> Self {
        Self {
            position,
            source,
            scale,
            texture,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::at(
            self.position,
            (self.source.width as f32 * self.scale.x) as i32,
            (self.source.height as f32 * self.scale.y) as i32,
        )
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        sink.draw(SpriteDraw {
            texture: self.texture,
            position: self.position,
            source: Some(self.source),
            rotation: 0.0,
            origin: SpriteOrigin::Pixels(Vec2::ZERO),
            scale: self.scale,
            flip_horizontal: false,
        });
    }
}

const SPIKE_SOURCE: Rect = Rect::new(0, 0, 16, 16);
const SPIKE_SCALE: f32 = 4.0;

/// Lethal spike tile, optionally rotated about its centre.
#[derive(Debug, Clone)]
pub struct Spikes {
    /// Draw position; shifted onto the pivot when rotated.
    position: Vec2,
    origin: Vec2,
    rotation_degrees: f32,
    texture: TextureId,
}

impl Spikes {
    /// `position` is the top-left of the unrotated tile.
    pub fn new(texture: TextureId, position: Vec2, rotation_degrees: f32) -> Self {
        let mut origin = Vec2::ZERO;
        let mut position = position;
        if rotation_degrees != 0.0 {
            origin = Vec2::new(SPIKE_SOURCE.width as f32, SPIKE_SOURCE.height as f32) / 2.0;
            position += origin * SPIKE_SCALE;
        }
        Self {
            position,
            origin,
            rotation_degrees,
            texture,
        }
    }

    pub fn bounds(&self) -> Rect {
        let width = (SPIKE_SOURCE.width as f32 * SPIKE_SCALE) as i32;
        let height = (SPIKE_SOURCE.height as f32 * SPIKE_SCALE) as i32;
        let corner = self.position - self.origin * SPIKE_SCALE;
        if swaps_axes(self.rotation_degrees) {
            Rect::at(corner, height, width)
        } else {
            Rect::at(corner, width, height)
        }
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        sink.draw(SpriteDraw {
            texture: self.texture,
            position: self.position,
            source: Some(SPIKE_SOURCE),
            rotation: self.rotation_degrees.to_radians(),
            origin: SpriteOrigin::Pixels(self.origin),
            scale: Vec2::splat(SPIKE_SCALE),
            flip_horizontal: false,
        });
    }
}

/// Statue that completes the level when the hero touches it.
#[derive(Debug, Clone)]
pub struct LevelEnd {
    bounds: Rect,
    texture: TextureId,
}

impl LevelEnd {
    pub fn new(texture: TextureId, bounds: Rect) -> Self {
        Self { bounds, texture }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        sink.fill(self.texture, self.bounds);
    }
}
