//! Game state
//!
//! Everything the frame loop touches lives in one `Game`, created once after
//! the window opens. Textures, the font and the canvas are released when the
//! `Game` is dropped, on every exit path.

use macroquad::prelude::*;
use crate::assets::{load_textures, TextureAsset};
use crate::config::GameConfig;
use crate::deck::{build_deck, random_index, Card};
use crate::layout::{CardSlot, GridLayout};
use crate::render::{self, BACKGROUND};
use crate::viewport::Viewport;

pub struct Game {
    config: GameConfig,

    /// Off-screen canvas the scene is drawn to before scaling
    canvas: RenderTarget,
    camera: Camera2D,
    /// `None` falls back to macroquad's built-in font
    font: Option<Font>,

    pub player_textures: Vec<TextureAsset>,
    pub table_textures: Vec<TextureAsset>,
    pub back_textures: Vec<TextureAsset>,

    pub table_cards: Vec<Card>,
    pub player_cards: Vec<Card>,

    layout: GridLayout,

    // Recomputed every frame in `update`
    viewport: Option<Viewport>,
    slots: Vec<CardSlot>,
}

impl Game {
    /// Acquire all resources and deal the card collections
    pub async fn new(config: GameConfig) -> Self {
        let canvas_size = vec2(config.canvas.width as f32, config.canvas.height as f32);

        let canvas = render_target(config.canvas.width, config.canvas.height);
        canvas.texture.set_filter(FilterMode::Linear);
        let mut camera = Camera2D::from_display_rect(Rect::new(0.0, 0.0, canvas_size.x, canvas_size.y));
        camera.render_target = Some(canvas.clone());

        let font = match load_ttf_font(&config.font.path.to_string_lossy()).await {
            Ok(mut font) => {
                font.set_filter(FilterMode::Linear);
                log::info!("Loaded font {}", config.font.path.display());
                Some(font)
            }
            Err(e) => {
                log::warn!("Failed to load font {}: {}, using default font", config.font.path.display(), e);
                None
            }
        };

        let player_textures = load_textures(&config.assets.player);
        let table_textures = load_textures(&config.assets.table);
        let back_textures = load_textures(&config.assets.back);

        let table_cards = deal("table", &table_textures, config.decks.table);
        let player_cards = deal("player", &player_textures, config.decks.player);

        let layout = GridLayout::new(config.grid, canvas_size);

        Self {
            config,
            canvas,
            camera,
            font,
            player_textures,
            table_textures,
            back_textures,
            table_cards,
            player_cards,
            layout,
            viewport: None,
            slots: Vec::new(),
        }
    }

    pub fn canvas_size(&self) -> Vec2 {
        vec2(self.config.canvas.width as f32, self.config.canvas.height as f32)
    }

    /// Refit the canvas to the window and recompute which card is hovered
    pub fn update(&mut self) {
        self.viewport = Viewport::fit(vec2(screen_width(), screen_height()), self.canvas_size());

        let (mx, my) = mouse_position();
        let pointer = self.viewport.and_then(|vp| vp.to_virtual(vec2(mx, my)));
        self.slots = self.layout.arrange(&self.table_cards, &self.table_textures, pointer);
    }

    /// Render the scene to the canvas, then blit the canvas to the window
    pub fn draw(&self) {
        set_camera(&self.camera);
        clear_background(BACKGROUND);
        self.draw_table();

        set_default_camera();
        clear_background(BACKGROUND);

        if let Some(vp) = self.viewport {
            draw_texture_ex(
                &self.canvas.texture,
                vp.dest.x,
                vp.dest.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vp.dest.size()),
                    // Render targets come out upside down
                    flip_y: true,
                    ..Default::default()
                },
            );
        }
    }

    fn draw_table(&self) {
        let anchors = &self.layout.anchors;
        let font = self.font.as_ref();

        render::draw_debug_markers(anchors, self.config.debug_marker_radius);

        let header = render::header_text(
            get_fps(),
            vec2(screen_width(), screen_height()),
            self.canvas_size(),
            self.viewport.map(|vp| vp.scale).unwrap_or(0.0),
        );
        let footer = render::footer_text(self.table_cards.len(), self.player_cards.len());
        render::draw_diagnostics(anchors, &header, &footer, self.config.font.size, font);

        render::draw_cards(
            &self.slots,
            &self.table_cards,
            &self.table_textures,
            self.config.grid.label_size,
            font,
        );
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        let textures = self.player_textures.len() + self.table_textures.len() + self.back_textures.len();
        log::info!("Releasing {} textures, font and canvas", textures);
    }
}

/// Build one collection, or an empty one when there is nothing to deal from
fn deal(label: &str, textures: &[TextureAsset], count: usize) -> Vec<Card> {
    match build_deck(textures, count, random_index) {
        Ok(cards) => {
            log::info!("Dealt {} {} cards", cards.len(), label);
            cards
        }
        Err(e) => {
            log::warn!("No {} cards: {}", label, e);
            Vec::new()
        }
    }
}
