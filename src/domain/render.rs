// Render sink port: the simulation pushes draw calls, it never reads them back.

use super::geometry::Rect;
use super::resources::TextureId;
use glam::Vec2;

/// Pivot a sprite rotates and scales around, relative to its source region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpriteOrigin {
    /// Offset in source pixels from the top-left of the region.
    Pixels(Vec2),
    /// Centre of the whole texture; resolved by the sink, which knows its size.
    TextureCenter,
}

/// One sprite draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub texture: TextureId,
    pub position: Vec2,
    /// Sub-region of the sheet; `None` draws the whole texture.
    pub source: Option<Rect>,
    /// Radians, clockwise in screen space.
    pub rotation: f32,
    pub origin: SpriteOrigin,
    pub scale: Vec2,
    pub flip_horizontal: bool,
}

pub trait RenderSink {
    fn draw(&mut self, sprite: SpriteDraw);

    /// Stretches a whole texture over a destination rectangle.
    fn fill(&mut self, texture: TextureId, destination: Rect);

    /// Translucent overlay used for hitbox debugging. Ignored by default.
    fn fill_debug(&mut self, _destination: Rect, _kind: DebugShape) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugShape {
    Hitbox,
    AttackBox,
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    // Records every call so tests can assert on what would have been drawn.
    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub sprites: Vec<SpriteDraw>,
        pub fills: Vec<(TextureId, Rect)>,
        pub debug: Vec<(Rect, DebugShape)>,
    }

    impl RenderSink for RecordingSink {
        fn draw(&mut self, sprite: SpriteDraw) {
            self.sprites.push(sprite);
        }

        fn fill(&mut self, texture: TextureId, destination: Rect) {
            self.fills.push((texture, destination));
        }

        fn fill_debug(&mut self, destination: Rect, kind: DebugShape) {
            self.debug.push((destination, kind));
        }
    }
}
