// Per-instance record for batched sprite rendering

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Sprite instance laid out for a GPU instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// World position (anchor plus offset)
    pub position: [f32; 3],
    /// Size in world units, width signed for mirroring
    pub size: [f32; 2],
    /// Offset relative to the anchor
    pub offset: [f32; 2],
    /// Texture asset id, low and high words
    pub texture: [u32; 2],
}

impl SpriteInstance {
    /// Create a new instance record
    pub fn new(position: Vec3, size: Vec2, offset: Vec2, texture_id: u64) -> Self {
        Self {
            position: position.to_array(),
            size: size.to_array(),
            offset: offset.to_array(),
            texture: [texture_id as u32, (texture_id >> 32) as u32],
        }
    }

    /// Reassemble the texture asset id
    pub fn texture_id(&self) -> u64 {
        u64::from(self.texture[0]) | (u64::from(self.texture[1]) << 32)
    }
}
