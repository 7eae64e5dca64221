// Layer compositing: one resolved frame -> draw descriptors + chained offset

use super::action::{Frame, Layer};
use super::animation::FrameSelection;
use super::config::CompositorConfig;
use crate::engine::assets::{SpriteFrame, SpriteSource};
use crate::engine::renderer::DrawDescriptor;
use glam::{Vec2, Vec3};
use log::debug;

/// How an element positions itself relative to the offset chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetMode {
    /// Sits at the incoming offset, ignoring its own position deltas
    Anchor,
    /// Shifts by its own position delta so it tracks the previous element
    Chained,
}

/// Base position (in source pixels) for every layer of `frame`
pub fn layer_base_position(
    frame: &Frame,
    frame_index: usize,
    mode: OffsetMode,
    chained_offset: Vec2,
) -> Vec2 {
    match (mode, frame.position_delta(frame_index)) {
        (OffsetMode::Chained, Some(delta)) => chained_offset - delta,
        _ => chained_offset,
    }
}

/// Offset handed to the next element in the stack
///
/// A frame without layers leaves the chain untouched.
pub fn next_offset(frame: &Frame, frame_index: usize, chained_offset: Vec2) -> Vec2 {
    if frame.layers.is_empty() {
        return chained_offset;
    }
    frame.position_delta(frame_index).unwrap_or(chained_offset)
}

/// Turns resolved frames into world-space draw descriptors
#[derive(Debug, Clone, Copy, Default)]
pub struct LayerCompositor {
    config: CompositorConfig,
}

impl LayerCompositor {
    pub fn new(config: CompositorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompositorConfig {
        &self.config
    }

    /// Emit descriptors for every drawable layer of `selection` into `out`
    ///
    /// Layers are emitted in authored order. Returns the offset for the next
    /// element in the stack.
    pub fn compose(
        &self,
        selection: &FrameSelection<'_>,
        mode: OffsetMode,
        chained_offset: Vec2,
        anchor: Vec3,
        sprites: &dyn SpriteSource,
        out: &mut Vec<DrawDescriptor>,
    ) -> Vec2 {
        let frame = selection.frame;
        let base = layer_base_position(frame, selection.frame_index, mode, chained_offset);

        for layer in &frame.layers {
            let Some(sprite_index) = layer.sprite_index() else {
                continue;
            };
            let Some(sprite) = sprites.frame(sprite_index) else {
                debug!("Layer references missing sprite frame {}", sprite_index);
                continue;
            };
            out.push(self.layer_descriptor(layer, &sprite, base, anchor));
        }

        next_offset(frame, selection.frame_index, chained_offset)
    }

    /// World-space descriptor for a single layer
    pub fn layer_descriptor(
        &self,
        layer: &Layer,
        sprite: &SpriteFrame,
        base: Vec2,
        anchor: Vec3,
    ) -> DrawDescriptor {
        let mut size = sprite.size() * layer.scale * self.config.pixel_scale();
        if layer.mirrored {
            size.x = -size.x;
        }

        let offset = (layer.position + base) * self.config.pixel_to_world_unit;

        DrawDescriptor::new(sprite.texture, size, offset, anchor)
    }
}
