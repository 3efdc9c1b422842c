// Asset loading functionality

use super::AssetError;
use std::path::{Path, PathBuf};

/// Directory used when `DUEL_ASSET_DIR` is not set
pub const DEFAULT_ASSET_DIR: &str = "assets";

/// Image file extensions the loader accepts
const TEXTURE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Asset loader responsible for finding and reading asset files
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Loader rooted at `DUEL_ASSET_DIR`, or `assets/` when unset
    pub fn from_env() -> Self {
        match std::env::var("DUEL_ASSET_DIR") {
            Ok(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new(DEFAULT_ASSET_DIR),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Load texture bytes from disk
    pub fn load_bytes(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        if !is_texture_name(name) {
            return Err(AssetError::LoadError(format!(
                "{name} is not a supported image file"
            )));
        }

        let path = self.resolve_path(name);
        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        Ok(std::fs::read(&path)?)
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

fn is_texture_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_ascii_lowercase();
            TEXTURE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
