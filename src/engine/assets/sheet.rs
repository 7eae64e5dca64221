// Sprite sheet lookup: sprite-frame index -> source size and texture

use super::TextureHandle;
use glam::Vec2;

/// One decoded sprite image as seen by the compositor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteFrame {
    /// Source width in pixels
    pub width: u32,
    /// Source height in pixels
    pub height: u32,
    /// Texture uploaded for this image
    pub texture: TextureHandle,
}

impl SpriteFrame {
    pub fn new(width: u32, height: u32, texture: TextureHandle) -> Self {
        Self {
            width,
            height,
            texture,
        }
    }

    /// Source dimensions as a vector, in pixels
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Lookup from sprite-frame index to decoded image
///
/// Implemented by whatever owns the decoded sprite container. Returning
/// `None` means the index has no image; the layer referencing it is skipped.
pub trait SpriteSource {
    fn frame(&self, index: usize) -> Option<SpriteFrame>;
}

/// In-memory sprite container for one sprite element
#[derive(Debug, Clone, Default)]
pub struct SpriteSheet {
    frames: Vec<SpriteFrame>,
}

impl SpriteSheet {
    /// Create an empty sprite sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sprite sheet from already decoded frames
    pub fn from_frames(frames: Vec<SpriteFrame>) -> Self {
        Self { frames }
    }

    /// Append a frame, returning its sprite-frame index
    pub fn push(&mut self, frame: SpriteFrame) -> usize {
        self.frames.push(frame);
        self.frames.len() - 1
    }

    /// Get the number of frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl SpriteSource for SpriteSheet {
    fn frame(&self, index: usize) -> Option<SpriteFrame> {
        self.frames.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::AssetId;

    fn texture(id: u64) -> TextureHandle {
        TextureHandle::new(AssetId::from_u64(id))
    }

    #[test]
    fn test_sheet_push_returns_index() {
        let mut sheet = SpriteSheet::new();
        assert!(sheet.is_empty());

        let first = sheet.push(SpriteFrame::new(32, 48, texture(1)));
        let second = sheet.push(SpriteFrame::new(16, 16, texture(2)));

        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(sheet.frame_count(), 2);
    }

    #[test]
    fn test_sheet_lookup() {
        let sheet = SpriteSheet::from_frames(vec![SpriteFrame::new(32, 48, texture(7))]);

        let frame = sheet.frame(0).unwrap();
        assert_eq!(frame.size(), Vec2::new(32.0, 48.0));
        assert_eq!(frame.texture, texture(7));
        assert!(sheet.frame(1).is_none());
    }
}
