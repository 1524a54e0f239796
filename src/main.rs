//! Card Table: a card-game rendering prototype
//!
//! Loads card images from disk, deals them onto a fixed-size virtual canvas,
//! scales the canvas to fit the window with letterboxing, and highlights the
//! card under the mouse.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod config;
mod deck;
mod game;
mod layout;
mod logging;
mod render;
mod viewport;

use std::sync::OnceLock;
use macroquad::prelude::*;
use config::{GameConfig, CONFIG_PATH};
use game::Game;

static CONFIG: OnceLock<GameConfig> = OnceLock::new();

/// Settings are needed before the window opens, so they are read once here
fn config() -> &'static GameConfig {
    CONFIG.get_or_init(|| {
        logging::init_logging();
        GameConfig::load_or_default(CONFIG_PATH)
    })
}

fn window_conf() -> Conf {
    let window = &config().window;
    Conf {
        window_title: window.title.clone(),
        window_width: window.width,
        window_height: window.height,
        window_resizable: window.resizable,
        sample_count: window.msaa_samples,
        platform: macroquad::miniquad::conf::Platform {
            swap_interval: if window.vsync { Some(1) } else { None },
            ..Default::default()
        },
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    log::info!("=== Card Table v{} ===", VERSION);

    macroquad::rand::srand(macroquad::miniquad::date::now() as u64);

    // Close requests end the loop instead of the process, so `game` drops
    prevent_quit();

    let mut game = Game::new(config().clone()).await;

    loop {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            break;
        }

        game.update();
        game.draw();

        next_frame().await;
    }

    drop(game);
    log::info!("Goodbye");
}
