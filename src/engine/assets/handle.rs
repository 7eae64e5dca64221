// Type-safe texture handle system

use std::marker::PhantomData;

/// Unique identifier for an asset owned by the rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(pub(crate) u64);

impl AssetId {
    /// Create a new asset ID from a string path
    pub fn from_path(path: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        path.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Create an asset ID from a raw u64
    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Type-safe handle to an asset
///
/// The compositor never dereferences handles; it only copies them into draw
/// descriptors. The `T` parameter keeps texture handles from being mixed up
/// with other asset kinds on the renderer side.
#[derive(Debug)]
pub struct AssetHandle<T> {
    id: AssetId,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> AssetHandle<T> {
    /// Create a new asset handle
    pub fn new(id: AssetId) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Get the underlying asset ID
    pub fn id(&self) -> AssetId {
        self.id
    }
}

// Manual impls so handles stay `Copy`/`Eq` regardless of the marker type.
impl<T> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AssetHandle<T> {}

impl<T> PartialEq for AssetHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for AssetHandle<T> {}

impl<T> std::hash::Hash for AssetHandle<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Marker type for texture assets
#[derive(Debug)]
pub struct TextureAsset;

/// Handle to a texture uploaded by the renderer
pub type TextureHandle = AssetHandle<TextureAsset>;
