// Asset-facing types
//
// The compositor never loads or owns image data. These types describe the
// decoded sprite images it reads sizes from and the texture handles it copies
// into draw descriptors.

mod handle;
mod sheet;

pub use handle::{AssetHandle, AssetId, TextureAsset, TextureHandle};
pub use sheet::{SpriteFrame, SpriteSheet, SpriteSource};
