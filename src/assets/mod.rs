//! Card textures loaded from disk
//!
//! Each image in an asset directory becomes one GPU texture named after its
//! file stem. Loading fails soft: a missing directory gives an empty set and
//! undecodable files are skipped.

mod loader;

pub use loader::*;

use macroquad::prelude::*;
use crate::config::AssetSource;

/// Anything with a pixel size that can be placed on the card grid
pub trait Sprite {
    fn size(&self) -> Vec2;
}

impl Sprite for Texture2D {
    fn size(&self) -> Vec2 {
        Texture2D::size(self)
    }
}

/// A named texture. Released when dropped.
#[derive(Debug, Clone)]
pub struct TextureAsset<T = Texture2D> {
    pub name: String,
    pub texture: T,
}

impl<T> TextureAsset<T> {
    pub fn new(name: impl Into<String>, texture: T) -> Self {
        Self { name: name.into(), texture }
    }
}

/// Load every matching image in `source.dir` as a GPU texture
pub fn load_textures(source: &AssetSource) -> Vec<TextureAsset> {
    let paths = match scan_directory(&source.dir, &source.extension) {
        Ok(paths) => paths,
        Err(e) => {
            log::warn!("No textures from {}: {}", source.dir.display(), e);
            return Vec::new();
        }
    };

    let mut textures = Vec::with_capacity(paths.len());
    for path in paths {
        match upload(&path) {
            Ok(texture) => {
                let name = texture_name(&path);
                log::debug!("Loaded texture: {} ({}x{})", name, texture.width(), texture.height());
                textures.push(TextureAsset::new(name, texture));
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    log::info!("Loaded {} textures from {}", textures.len(), source.dir.display());
    textures
}

/// Decode then upload; the decoded buffer is dropped on return either way
fn upload(path: &std::path::Path) -> Result<Texture2D, AssetError> {
    let rgba = decode_rgba(path)?;
    let texture = Texture2D::from_rgba8(rgba.width() as u16, rgba.height() as u16, rgba.as_raw());
    texture.set_filter(FilterMode::Linear);
    Ok(texture)
}
