// Central asset management system

use super::{AssetError, AssetHandle, AssetId, AssetLoader, TextureAsset, TextureHandle};
use crate::engine::renderer::texture::Texture;
use log::debug;
use std::collections::HashMap;

/// Central asset manager for the game
///
/// Textures are uploaded once and cached by path id. Callers decide whether a
/// failed load is fatal; the fighters treat it as "draw nothing".
pub struct AssetManager {
    /// Asset loader
    loader: AssetLoader,

    /// Loaded textures
    textures: HashMap<AssetId, Texture>,

    /// Path to ID mapping for textures
    texture_paths: HashMap<String, AssetId>,
}

impl AssetManager {
    /// Create a new asset manager
    pub fn new(loader: AssetLoader) -> Self {
        Self {
            loader,
            textures: HashMap::new(),
            texture_paths: HashMap::new(),
        }
    }

    /// Load a texture from disk, returning the cached handle if already loaded
    pub fn load_texture(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        name: &str,
    ) -> Result<TextureHandle, AssetError> {
        if let Some(&id) = self.texture_paths.get(name) {
            return Ok(AssetHandle::new(id));
        }

        let bytes = self.loader.load_bytes(name)?;
        let texture = Texture::from_bytes(device, queue, &bytes, name)
            .map_err(|e| AssetError::LoadError(format!("{name}: {e}")))?;

        debug!(
            "Loaded texture {} ({}x{})",
            name, texture.width, texture.height
        );

        let id = AssetId::from_path(name);
        self.textures.insert(id, texture);
        self.texture_paths.insert(name.to_string(), id);

        Ok(AssetHandle::new(id))
    }

    /// Get a texture by handle
    pub fn get_texture(&self, handle: AssetHandle<TextureAsset>) -> Option<&Texture> {
        self.textures.get(&handle.id())
    }

    /// Pixel size of a loaded texture
    pub fn texture_size(&self, handle: TextureHandle) -> Option<(u32, u32)> {
        self.get_texture(handle).map(|t| (t.width, t.height))
    }

    /// Get statistics about loaded assets
    pub fn stats(&self) -> AssetStats {
        AssetStats {
            texture_count: self.textures.len(),
        }
    }

    /// Get the asset loader
    pub fn loader(&self) -> &AssetLoader {
        &self.loader
    }
}

/// Statistics about loaded assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetStats {
    pub texture_count: usize,
}
