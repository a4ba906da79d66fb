use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Grid width and height in cells.
pub const DEFAULT_CELL_COUNT: u16 = 25;

/// Smallest grid that still contains the fixed starting body.
pub const MIN_CELL_COUNT: u16 = 10;

pub const MAX_CELL_COUNT: u16 = 200;

/// Terminal columns drawn per grid cell, keeping cells roughly square.
pub const DEFAULT_CELL_WIDTH: u16 = 2;

/// Logic tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Render frame interval in milliseconds (~60 fps).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

pub const DEFAULT_BACKGROUND: &str = "#ADCC60";
pub const DEFAULT_FOREGROUND: &str = "#2B3318";
pub const DEFAULT_FOOD: &str = "#B8322A";

const APP_DIR_NAME: &str = "classic-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// User-tunable settings, read from JSON. Missing keys keep their defaults.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub cell_count: u16,
    pub cell_width: u16,
    pub tick_interval_ms: u64,
    pub frame_interval_ms: u64,
    pub sound: bool,
    pub colors: ColorSettings,
}

/// Hex colour strings (`#RRGGBB`) for the board.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    pub background: String,
    pub foreground: String,
    pub food: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_count: DEFAULT_CELL_COUNT,
            cell_width: DEFAULT_CELL_WIDTH,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            sound: true,
            colors: ColorSettings::default(),
        }
    }
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND.to_owned(),
            foreground: DEFAULT_FOREGROUND.to_owned(),
            food: DEFAULT_FOOD.to_owned(),
        }
    }
}

/// Resolved colours used by the renderer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub food: Color,
}

impl Settings {
    /// Loads settings from `path`, or from the default location when `None`.
    ///
    /// A missing file at the default location yields defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => match settings_path() {
                Some(path) if path.exists() => Self::load_from_path(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks ranges the game relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_CELL_COUNT..=MAX_CELL_COUNT).contains(&self.cell_count) {
            return Err(ConfigError::CellCountOutOfRange {
                value: self.cell_count,
                min: MIN_CELL_COUNT,
                max: MAX_CELL_COUNT,
            });
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }

        if self.cell_width == 0 {
            return Err(ConfigError::ZeroCellWidth);
        }

        self.palette().map(|_| ())
    }

    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            background: parse_color_field("background", &self.colors.background)?,
            foreground: parse_color_field("foreground", &self.colors.foreground)?,
            food: parse_color_field("food", &self.colors.food)?,
        })
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

/// Returns the platform settings file path, if a config dir exists.
#[must_use]
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

fn parse_color_field(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    parse_hex_color(value).ok_or_else(|| ConfigError::InvalidColor {
        field,
        value: value.to_owned(),
    })
}

fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(red, green, blue))
}
