//! Card grid layout on the virtual canvas
//!
//! Pure geometry: where each card goes, and which card the pointer is over.
//! Drawing lives in `render`.

mod anchors;

pub use anchors::*;

use macroquad::prelude::{vec2, Rect, Vec2};
use crate::assets::{Sprite, TextureAsset};
use crate::config::GridConfig;
use crate::deck::Card;

/// A card placed on the canvas for this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSlot {
    /// Index into the card collection
    pub card: usize,
    /// Texture bounds in canvas space
    pub rect: Rect,
    /// Top-left of the label drawn above the card
    pub label: Vec2,
    pub hovered: bool,
}

/// Half-open containment: the top-left edge is inside, the bottom-right is not
pub fn contains(rect: &Rect, point: Vec2) -> bool {
    point.x >= rect.x && point.x < rect.x + rect.w && point.y >= rect.y && point.y < rect.y + rect.h
}

/// Grid placement for a card collection
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub grid: GridConfig,
    pub anchors: Anchors,
}

impl GridLayout {
    pub fn new(grid: GridConfig, canvas: Vec2) -> Self {
        Self { grid, anchors: Anchors::new(canvas) }
    }

    /// Top-left of grid cell `i`
    pub fn cell_origin(&self, i: usize) -> Vec2 {
        let columns = self.grid.columns.max(1);
        let col = (i % columns) as f32;
        let row = (i / columns) as f32;
        vec2(
            self.anchors.left + col * self.anchors.column_width,
            self.anchors.top + self.grid.label_gap * 2.5 + row * self.grid.row_height,
        )
    }

    /// Whether a row starting at `y` would run into the footer
    fn overflows(&self, y: f32) -> bool {
        self.grid.clip_to_footer && y + self.grid.row_height > self.anchors.bottom
    }

    /// Place `cards` on the grid and mark the ones under `pointer`.
    ///
    /// Stops at the first card that would overflow the footer when clipping
    /// is enabled. Cards whose texture index is out of range are skipped.
    pub fn arrange<T: Sprite>(
        &self,
        cards: &[Card],
        textures: &[TextureAsset<T>],
        pointer: Option<Vec2>,
    ) -> Vec<CardSlot> {
        let mut slots = Vec::with_capacity(cards.len());

        for (i, card) in cards.iter().enumerate() {
            let origin = self.cell_origin(i);
            if self.overflows(origin.y) {
                break;
            }
            let Some(asset) = textures.get(card.texture) else {
                continue;
            };

            let size = asset.texture.size();
            let rect = Rect::new(origin.x, origin.y, size.x, size.y);
            slots.push(CardSlot {
                card: i,
                rect,
                label: vec2(origin.x, origin.y - self.grid.label_gap),
                hovered: pointer.map(|p| contains(&rect, p)).unwrap_or(false),
            });
        }

        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::build_deck;

    /// Stand-in for a GPU texture
    struct Size(f32, f32);

    impl Sprite for Size {
        fn size(&self) -> Vec2 {
            vec2(self.0, self.1)
        }
    }

    fn canvas() -> Vec2 {
        vec2(1920.0, 1056.0)
    }

    fn table(count: usize) -> (Vec<TextureAsset<Size>>, Vec<Card>) {
        let textures = vec![TextureAsset::new("cardSpades2", Size(140.0, 190.0))];
        let cards = build_deck(&textures, count, |_| 0).unwrap();
        (textures, cards)
    }

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(100.0, 200.0, 140.0, 190.0);
        assert!(contains(&rect, vec2(100.0, 200.0)));
        assert!(contains(&rect, vec2(239.0, 389.0)));

        assert!(!contains(&rect, vec2(99.0, 250.0)));
        assert!(!contains(&rect, vec2(150.0, 199.0)));
        assert!(!contains(&rect, vec2(241.0, 250.0)));
        assert!(!contains(&rect, vec2(150.0, 391.0)));
    }

    #[test]
    fn test_first_cell_position() {
        let layout = GridLayout::new(GridConfig::default(), canvas());
        let origin = layout.cell_origin(0);
        assert!((origin.x - 160.0).abs() < 0.001);
        assert!((origin.y - (44.0 + 125.0)).abs() < 0.001);
    }

    #[test]
    fn test_grid_wraps_after_ten_columns() {
        let layout = GridLayout::new(GridConfig::default(), canvas());
        let a = layout.cell_origin(9);
        let b = layout.cell_origin(10);
        assert!((a.x - (160.0 + 9.0 * 160.0)).abs() < 0.001);
        assert!((b.x - 160.0).abs() < 0.001);
        assert!((b.y - a.y - 250.0).abs() < 0.001);
    }

    #[test]
    fn test_clipping_stops_above_footer() {
        // Rows start at 169, 419, 669, 919; footer bound is 1012
        let (textures, cards) = table(48);
        let layout = GridLayout::new(GridConfig::default(), canvas());
        let slots = layout.arrange(&cards, &textures, None);
        assert_eq!(slots.len(), 30);
        assert!(slots.iter().all(|s| s.rect.y + 250.0 <= layout.anchors.bottom));
    }

    #[test]
    fn test_unclipped_grid_places_everything() {
        let (textures, cards) = table(48);
        let grid = GridConfig { clip_to_footer: false, ..GridConfig::default() };
        let layout = GridLayout::new(grid, vec2(1980.0, 1080.0));
        let slots = layout.arrange(&cards, &textures, None);
        assert_eq!(slots.len(), 48);
        assert!(slots.last().unwrap().rect.bottom() > layout.anchors.bottom);
    }

    #[test]
    fn test_hover_marks_only_the_card_under_pointer() {
        let (textures, cards) = table(24);
        let layout = GridLayout::new(GridConfig::default(), canvas());
        let target = layout.cell_origin(12);

        let slots = layout.arrange(&cards, &textures, Some(target));
        let hovered: Vec<usize> = slots.iter().filter(|s| s.hovered).map(|s| s.card).collect();
        assert_eq!(hovered, vec![12]);

        let slots = layout.arrange(&cards, &textures, Some(target - vec2(1.0, 0.0)));
        assert!(slots.iter().all(|s| !s.hovered));

        let slots = layout.arrange(&cards, &textures, None);
        assert!(slots.iter().all(|s| !s.hovered));
    }

    #[test]
    fn test_label_sits_above_card() {
        let (textures, cards) = table(1);
        let layout = GridLayout::new(GridConfig::default(), canvas());
        let slot = layout.arrange(&cards, &textures, None)[0];
        assert_eq!(slot.label.x, slot.rect.x);
        assert!((slot.rect.y - slot.label.y - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_dangling_texture_index_is_skipped() {
        let (textures, mut cards) = table(3);
        cards[1].texture = 7;
        let layout = GridLayout::new(GridConfig::default(), canvas());
        let slots = layout.arrange(&cards, &textures, None);
        assert_eq!(slots.iter().map(|s| s.card).collect::<Vec<_>>(), vec![0, 2]);
    }
}
