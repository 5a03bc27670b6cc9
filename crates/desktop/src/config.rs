//! Configuration management using config.toml

use faps_core::{CardPreset, ShareNetwork, ShareSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name shown in the heading (empty = leaderboard username)
    #[serde(default)]
    pub display_name: String,

    /// Font size in points (default: 14.0)
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Window position X (None = system default)
    #[serde(default)]
    pub window_x: Option<f32>,

    /// Window position Y (None = system default)
    #[serde(default)]
    pub window_y: Option<f32>,

    /// Window width (None = default 1280)
    #[serde(default)]
    pub window_width: Option<f32>,

    /// Window height (None = default 900)
    #[serde(default)]
    pub window_height: Option<f32>,

    /// Window maximized state
    #[serde(default)]
    pub window_maximized: bool,

    /// Compose window target
    #[serde(default)]
    pub share_network: ShareNetwork,

    /// Achievement card size
    #[serde(default)]
    pub card_preset: CardPreset,

    /// Try the image clipboard before falling back to text
    #[serde(default = "default_true")]
    pub copy_image: bool,

    /// Open the compose window after copying
    #[serde(default = "default_true")]
    pub open_share_intent: bool,

    /// How long share notifications stay on screen
    #[serde(default = "default_notification_secs")]
    pub notification_secs: f32,

    /// tracing filter used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_font_size() -> f32 {
    14.0
}

fn default_true() -> bool {
    true
}

pub fn default_notification_secs() -> f32 {
    4.0
}

pub fn default_log_filter() -> String {
    "faps_desktop=info,faps_core=info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            font_size: default_font_size(),
            window_x: None,
            window_y: None,
            window_width: None,
            window_height: None,
            window_maximized: false,
            share_network: ShareNetwork::default(),
            card_preset: CardPreset::default(),
            copy_image: true,
            open_share_intent: true,
            notification_secs: default_notification_secs(),
            log_filter: default_log_filter(),
        }
    }
}

/// Platform config directory, or the working directory when there is none
pub fn config_path() -> PathBuf {
    directories::ProjectDirs::from("xyz", "Fraction AI", "FAPS Dashboard")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

impl Config {
    /// Load config from the default location, creating it if it doesn't exist.
    /// Also returns the problem that forced defaults, if any, so it can be
    /// logged once tracing is up.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(&config_path())
    }

    /// Load config from `path`; unreadable or invalid files give defaults
    pub fn load_from(path: &Path) -> (Self, Option<String>) {
        let problem = if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return (config, None),
                    Err(e) => Some(format!("Error parsing {}: {}", path.display(), e)),
                },
                Err(e) => Some(format!("Error reading {}: {}", path.display(), e)),
            }
        } else {
            None
        };

        // Only write defaults when there was no file, never over a broken one
        let config = Config::default();
        if problem.is_none() {
            if let Err(e) = config.save_to(path) {
                return (config, Some(format!("Could not write default config: {}", e)));
            }
        }
        (config, problem)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Configured display name, or `fallback` when blank
    pub fn display_name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        let name = self.display_name.trim();
        if name.is_empty() {
            fallback
        } else {
            name
        }
    }

    pub fn share_settings(&self) -> ShareSettings {
        ShareSettings {
            network: self.share_network,
            card_preset: self.card_preset,
            copy_image: self.copy_image,
            open_intent: self.open_share_intent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("faps-config-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir.join(CONFIG_FILE)
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = toml::from_str("font_size = 16.0\nshare_network = \"facebook\"").unwrap();
        assert_eq!(config.font_size, 16.0);
        assert_eq!(config.share_network, ShareNetwork::Facebook);
        assert_eq!(config.card_preset, CardPreset::OpenGraph);
        assert!(config.copy_image);
        assert!(config.open_share_intent);
        assert_eq!(config.log_filter, "faps_desktop=info,faps_core=info");
    }

    #[test]
    fn preset_names_are_snake_case() {
        let config: Config = toml::from_str("card_preset = \"open_graph\"").unwrap();
        assert_eq!(config.card_preset, CardPreset::OpenGraph);
        let config: Config = toml::from_str("card_preset = \"twitter\"").unwrap();
        assert_eq!(config.card_preset, CardPreset::Twitter);
    }

    #[test]
    fn save_then_load_keeps_values() {
        let path = temp_path("roundtrip");
        let config = Config {
            display_name: "Orangutan".to_string(),
            card_preset: CardPreset::Compact,
            copy_image: false,
            window_width: Some(1400.0),
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), (config, None));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let path = temp_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "font_size = \"huge\"").unwrap();
        let (config, problem) = Config::load_from(&path);
        assert_eq!(config, Config::default());
        assert!(problem.unwrap().contains("Error parsing"));
        // the broken file is left for the user to fix
        assert_eq!(fs::read_to_string(&path).unwrap(), "font_size = \"huge\"");
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = temp_path("missing");
        let (config, problem) = Config::load_from(&path);
        assert_eq!(config, Config::default());
        assert!(problem.is_none());
        assert!(path.exists());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn blank_display_name_falls_back() {
        let mut config = Config::default();
        assert_eq!(config.display_name_or("FirmOrangutan3828"), "FirmOrangutan3828");
        config.display_name = "   ".to_string();
        assert_eq!(config.display_name_or("FirmOrangutan3828"), "FirmOrangutan3828");
        config.display_name = " Ape ".to_string();
        assert_eq!(config.display_name_or("FirmOrangutan3828"), "Ape");
    }

    #[test]
    fn share_settings_follow_config() {
        let config = Config {
            share_network: ShareNetwork::Facebook,
            open_share_intent: false,
            ..Config::default()
        };
        let settings = config.share_settings();
        assert_eq!(settings.network, ShareNetwork::Facebook);
        assert!(!settings.open_intent);
        assert!(settings.copy_image);
    }
}
