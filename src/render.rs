//! Drawing the card table onto the virtual canvas

use macroquad::prelude::*;
use crate::assets::TextureAsset;
use crate::deck::Card;
use crate::layout::{Anchors, CardSlot};

pub const BACKGROUND: Color = SKYBLUE;
const TEXT_COLOR: Color = DARKBLUE;
const LABEL_COLOR: Color = BLACK;
const HOVER_COLOR: Color = RED;
const MARKER_COLOR: Color = RED;
const HOVER_THICKNESS: f32 = 2.0;

/// Draw text with its top-left corner at `pos`.
/// macroquad positions text by baseline, so shift down by the font size.
pub fn draw_label(text: &str, pos: Vec2, size: u16, color: Color, font: Option<&Font>) {
    draw_text_ex(
        text,
        pos.x.round(),
        (pos.y + size as f32).round(),
        TextParams {
            font,
            font_size: size,
            color,
            ..Default::default()
        },
    );
}

/// Red dots on the anchor grid, for checking the layout by eye
pub fn draw_debug_markers(anchors: &Anchors, radius: f32) {
    if radius <= 0.0 {
        return;
    }
    for p in anchors.points() {
        draw_circle(p.x, p.y, radius, MARKER_COLOR);
    }
}

/// Frame statistics along the top of the canvas
pub fn header_text(fps: i32, screen: Vec2, canvas: Vec2, scale: f32) -> String {
    format!(
        "{} fps, Screen: {:.0}x{:.0}, Viewport: {:.0}x{:.0}, Scale: {:.2}",
        fps, screen.x, screen.y, canvas.x, canvas.y, scale
    )
}

/// Collection sizes along the bottom of the canvas
pub fn footer_text(table: usize, player: usize) -> String {
    format!("Table Cards: {}, Player Cards: {}", table, player)
}

pub fn card_label(slot: &CardSlot) -> String {
    format!("Card {}", slot.card + 1)
}

/// Draw the placed cards, outlining whichever ones are hovered
pub fn draw_cards(
    slots: &[CardSlot],
    cards: &[Card],
    textures: &[TextureAsset],
    label_size: u16,
    font: Option<&Font>,
) {
    for slot in slots {
        let Some(asset) = cards.get(slot.card).and_then(|c| textures.get(c.texture)) else {
            continue;
        };

        draw_texture(&asset.texture, slot.rect.x, slot.rect.y, WHITE);

        let label = card_label(slot);
        if slot.hovered {
            draw_rectangle_lines(slot.rect.x, slot.rect.y, slot.rect.w, slot.rect.h, HOVER_THICKNESS, HOVER_COLOR);
            draw_label(&label, slot.label, label_size, HOVER_COLOR, font);
        } else {
            draw_label(&label, slot.label, label_size, LABEL_COLOR, font);
        }
    }
}

/// Draw header and footer text
pub fn draw_diagnostics(anchors: &Anchors, header: &str, footer: &str, size: u16, font: Option<&Font>) {
    draw_label(header, vec2(anchors.left, anchors.top), size, TEXT_COLOR, font);
    draw_label(footer, vec2(anchors.left, anchors.bottom - size as f32), size, TEXT_COLOR, font);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_format() {
        let text = header_text(60, vec2(1280.0, 780.0), vec2(1920.0, 1056.0), 0.6666667);
        assert_eq!(text, "60 fps, Screen: 1280x780, Viewport: 1920x1056, Scale: 0.67");
    }

    #[test]
    fn test_footer_format() {
        assert_eq!(footer_text(24, 48), "Table Cards: 24, Player Cards: 48");
    }

    #[test]
    fn test_labels_are_one_based() {
        let slot = CardSlot {
            card: 0,
            rect: Rect::new(0.0, 0.0, 1.0, 1.0),
            label: Vec2::ZERO,
            hovered: false,
        };
        assert_eq!(card_label(&slot), "Card 1");
    }
}
