//! Configuration loader plus strongly typed settings structures.
//!
//! Settings live in a single TOML file under the data directory. The embedded
//! default file is written there on first run, and every field falls back to
//! its default when missing.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::keyboard::Mode;

// Embed default configuration at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Top-level configuration object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keyboard: KeyboardConfig,
    #[serde(default)]
    pub sound: SoundConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardConfig {
    #[serde(default = "default_mode")]
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_mode: Option<Mode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done_text: Option<String>,
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

fn default_mode() -> Mode {
    Mode::Letter
}

fn default_max_chars() -> usize {
    12
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            next_mode: None,
            done_text: None,
            max_chars: default_max_chars(),
        }
    }
}

impl KeyboardConfig {
    /// Page the page key flips to, falling back to the mode's partner
    pub fn resolved_next_mode(&self) -> Mode {
        self.next_mode.unwrap_or_else(|| self.mode.partner())
    }

    /// Confirm key text, falling back to the label the mode's engine uses
    pub fn resolved_done_text(&self) -> String {
        self.done_text
            .clone()
            .unwrap_or_else(|| self.mode.confirm_text().as_str().to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundConfig {
    #[serde(default = "default_sound_enabled")]
    pub enabled: bool,
    #[serde(default = "default_sound_volume")]
    pub volume: f32, // Master volume (0.0 to 1.0)
    #[serde(default = "default_cursor_sound")]
    pub cursor_sound: String,
    #[serde(default)]
    pub cooldown_ms: u64, // Minimum gap between two cursor sounds
}

fn default_sound_enabled() -> bool {
    true
}

fn default_sound_volume() -> f32 {
    0.7
}

fn default_cursor_sound() -> String {
    "cursor".to_string()
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: default_sound_enabled(),
            volume: default_sound_volume(),
            cursor_sound: default_cursor_sound(),
            cooldown_ms: 0,
        }
    }
}

/// Keyboard window size in terminal cells and the frame period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_width")]
    pub width: u16,
    #[serde(default = "default_height")]
    pub height: u16,
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

fn default_width() -> u16 {
    64
}

fn default_height() -> u16 {
    11
}

fn default_frame_ms() -> u64 {
    16 // ~60 FPS
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            frame_ms: default_frame_ms(),
        }
    }
}

impl Config {
    /// Load the configuration
    ///
    /// An explicit path must exist. Without one, the profile config is used,
    /// created from the embedded defaults if missing.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                Self::extract_defaults()?;
                Self::config_path()?
            }
        };

        let contents = fs::read_to_string(&config_path)
            .context(format!("Failed to read config file: {:?}", config_path))?;
        Self::from_toml(&contents)
            .context(format!("Failed to parse config file: {:?}", config_path))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }

    /// Configuration from the embedded defaults only
    pub fn embedded() -> Result<Self> {
        Self::from_toml(DEFAULT_CONFIG).context("Failed to parse embedded config.toml")
    }

    /// Write the embedded default config if the profile has none
    fn extract_defaults() -> Result<()> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            return Ok(());
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, DEFAULT_CONFIG)
            .context(format!("Failed to write default config: {:?}", config_path))?;
        tracing::info!("Created default config at {:?}", config_path);
        Ok(())
    }

    /// Get the base padboard directory (~/.padboard/)
    /// Can be overridden with PADBOARD_DIR environment variable
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var("PADBOARD_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".padboard"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    pub fn sounds_dir() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("sounds"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_parse() {
        let config = Config::embedded().expect("embedded config parses");
        assert_eq!(config.keyboard.mode, Mode::Letter);
        assert_eq!(config.keyboard.next_mode, None);
        assert_eq!(config.keyboard.max_chars, 12);
        assert!(config.sound.enabled);
        assert_eq!(config.sound.cursor_sound, "cursor");
        assert_eq!(config.ui.width, 64);
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.keyboard.mode, Mode::Letter);
        assert_eq!(config.sound.volume, 0.7);
        assert_eq!(config.ui.frame_ms, 16);
    }

    #[test]
    fn test_partial_keyboard_section() {
        let config = Config::from_toml("[keyboard]\nmode = \"hangul1\"\n").unwrap();
        assert_eq!(config.keyboard.mode, Mode::Hangul1);
        assert_eq!(config.keyboard.resolved_next_mode(), Mode::Hangul2);
        assert_eq!(config.keyboard.resolved_done_text(), "<결정>");
        assert_eq!(config.keyboard.max_chars, 12);
    }

    #[test]
    fn test_explicit_next_mode_and_done_text_win() {
        let toml = "[keyboard]\nmode = \"letter2ke\"\nnext_mode = \"symbol_en\"\ndone_text = \"[OK]\"\n";
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.keyboard.resolved_next_mode(), Mode::SymbolEn);
        assert_eq!(config.keyboard.resolved_done_text(), "[OK]");
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Config::from_toml("[keyboard]\nmode = \"klingon\"\n").is_err());
    }

    #[test]
    fn test_load_reads_explicit_path() {
        let path = std::env::temp_dir().join(format!("padboard-config-{}.toml", std::process::id()));
        fs::write(&path, "[ui]\nwidth = 80\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.ui.width, 80);
        assert_eq!(config.ui.height, 11);

        fs::remove_file(&path).unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }
}
