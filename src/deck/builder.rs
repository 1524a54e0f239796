//! Random deck construction

use super::{card_value, Card};
use crate::assets::TextureAsset;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("cannot deal {count} cards from an empty texture set")]
    NoTextures { count: usize },
}

/// Deal `count` cards, each showing a texture chosen by `pick`.
///
/// `pick(len)` must return an index in `0..len`; anything larger wraps.
/// Sampling is with replacement, so the same face can appear many times.
pub fn build_deck<T>(
    textures: &[TextureAsset<T>],
    count: usize,
    mut pick: impl FnMut(usize) -> usize,
) -> Result<Vec<Card>, DeckError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if textures.is_empty() {
        return Err(DeckError::NoTextures { count });
    }

    let deck = (0..count)
        .map(|id| {
            let index = pick(textures.len()) % textures.len();
            let name = textures[index].name.clone();
            Card {
                id,
                value: card_value(&name),
                name,
                texture: index,
            }
        })
        .collect();
    Ok(deck)
}

/// Uniform picker backed by macroquad's global generator
pub fn random_index(len: usize) -> usize {
    macroquad::rand::gen_range(0, len as u32) as usize
}
