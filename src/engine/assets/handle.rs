// Type-safe asset handle system

use std::marker::PhantomData;

/// Unique identifier for an asset
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
}

/// Type-safe handle to an asset
///
/// The `T` parameter ensures handles can only be used with the correct asset type.
/// A handle names an asset by path; it does not guarantee the asset loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetHandle<T> {
    pub(crate) id: AssetId,
    _phantom: PhantomData<T>,
}

impl<T> AssetHandle<T> {
    /// Create a new asset handle
    pub(crate) fn new(id: AssetId) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Handle for the asset stored under `path`, whether or not it is loaded
    pub fn for_path(path: &str) -> Self {
        Self::new(AssetId::from_path(path))
    }

    /// Get the underlying asset ID
    pub fn id(&self) -> AssetId {
        self.id
    }
}

/// Marker type for image assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureAsset;

pub type TextureHandle = AssetHandle<TextureAsset>;
