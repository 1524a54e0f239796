//! Game configuration
//!
//! Uses RON (Rusty Object Notation) for a human-readable settings file.
//! Every section has defaults, so a missing file or a partial one still
//! produces a playable setup.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

/// Where the game looks for its settings
pub const CONFIG_PATH: &str = "res/config.ron";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("canvas must have a non-zero size, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("grid must have at least one column")]
    ZeroColumns,
}

/// Physical window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub resizable: bool,
    pub msaa_samples: i32,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "GB Game".to_string(),
            width: 1280,
            height: 780,
            resizable: true,
            msaa_samples: 4,
            vsync: true,
        }
    }
}

/// Fixed resolution of the off-screen canvas everything is drawn to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: 1920, height: 1056 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub path: PathBuf,
    /// Size of the header and footer text, in canvas units
    pub size: u16,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("res/fonts/Roboto-Regular.ttf"),
            size: 40,
        }
    }
}

/// A directory of card images, matched by file extension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSource {
    pub dir: PathBuf,
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_extension() -> String {
    "png".to_string()
}

impl AssetSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), extension: default_extension() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub player: AssetSource,
    pub table: AssetSource,
    pub back: AssetSource,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            player: AssetSource::new("res/cards/player"),
            table: AssetSource::new("res/cards/table"),
            back: AssetSource::new("res/cards/back"),
        }
    }
}

/// How many cards each collection holds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub table: usize,
    pub player: usize,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self { table: 24, player: 48 }
    }
}

/// Card grid geometry, in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub columns: usize,
    pub row_height: f32,
    /// Vertical space reserved for the label above each card
    pub label_gap: f32,
    pub label_size: u16,
    /// Stop placing rows once they would run into the footer text
    pub clip_to_footer: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 10,
            row_height: 250.0,
            label_gap: 50.0,
            label_size: 30,
            clip_to_footer: true,
        }
    }
}

/// Top-level settings file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub canvas: CanvasConfig,
    pub font: FontConfig,
    pub assets: AssetsConfig,
    pub decks: DeckConfig,
    pub grid: GridConfig,
    /// Radius of the anchor markers; 0 disables them
    pub debug_marker_radius: f32,
}

impl GameConfig {
    /// Load and validate settings from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate settings from a RON string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings, falling back to defaults when the file is absent or invalid
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }
        if self.grid.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        Ok(())
    }
}
