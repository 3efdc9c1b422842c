// Asset management system
//
// Loads images by path, caches them by id and reports failures without
// aborting the game.

mod handle;
mod loader;
mod manager;

pub use handle::{AssetHandle, AssetId, TextureAsset, TextureHandle};
pub use loader::AssetLoader;
pub use manager::AssetManager;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset: {0}")]
    LoadError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
