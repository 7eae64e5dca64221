// Draw descriptors handed to the rendering collaborator

use super::SpriteInstance;
use crate::engine::assets::TextureHandle;
use glam::{Mat4, Vec2, Vec3};

/// One positioned, scaled, optionally mirrored sprite image to draw
///
/// All values are in world units. A mirrored layer has a negative `size.x`;
/// the magnitude is the same as the unmirrored case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawDescriptor {
    /// Texture to sample
    pub texture: TextureHandle,
    /// Width and height, width signed for mirroring
    pub size: Vec2,
    /// Layer offset relative to the owning character's anchor
    pub offset: Vec2,
    /// Anchor plus offset, in world space
    pub world_position: Vec3,
}

impl DrawDescriptor {
    /// Create a descriptor anchored at `anchor` and shifted by `offset`
    pub fn new(texture: TextureHandle, size: Vec2, offset: Vec2, anchor: Vec3) -> Self {
        Self {
            texture,
            size,
            offset,
            world_position: anchor + offset.extend(0.0),
        }
    }

    /// Whether the image is drawn flipped horizontally
    pub fn is_mirrored(&self) -> bool {
        self.size.x.is_sign_negative()
    }

    /// Get the model matrix for this descriptor
    pub fn transform_matrix(&self) -> Mat4 {
        let translation = Mat4::from_translation(self.world_position);
        let scale = Mat4::from_scale(Vec3::new(self.size.x, self.size.y, 1.0));

        translation * scale
    }

    /// Pack into a GPU instance record
    pub fn to_instance(&self) -> SpriteInstance {
        SpriteInstance::new(
            self.world_position,
            self.size,
            self.offset,
            self.texture.id().as_u64(),
        )
    }
}
