use crate::picker::{ColorPair, DEFAULT_LINE_WIDTH, PickerMode};
use derive_more::{Deref, From, Into};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::{Srgb, Srgba, WithAlpha};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An opaque color written as `#rrggbb` (the `#` is optional).
#[derive(
    Debug, Clone, Copy, PartialEq, Deref, From, Into, DeserializeFromStr, SerializeDisplay,
)]
pub struct HexColor(Srgb<u8>);

impl HexColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    pub fn to_srgba(self) -> Srgba<f64> {
        self.0.into_format::<f64>().with_alpha(1.0)
    }
}

impl FromStr for HexColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::<u8>::from_str(s.trim())
            .map(Self)
            .map_err(|e| ConfigError::InvalidColor {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub mode: PickerMode,
    #[serde(default = "default_start_color")]
    pub start_color: HexColor,
    #[serde(default = "default_end_color")]
    pub end_color: HexColor,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
}

fn default_start_color() -> HexColor {
    HexColor::new(0x00, 0x80, 0xff)
}

fn default_end_color() -> HexColor {
    HexColor::new(0x53, 0xff, 0xff)
}

fn default_line_width() -> f64 {
    DEFAULT_LINE_WIDTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: PickerMode::default(),
            start_color: default_start_color(),
            end_color: default_end_color(),
            line_width: default_line_width(),
        }
    }
}

impl Config {
    pub fn colors(&self) -> ColorPair {
        ColorPair::new(self.start_color.to_srgba(), self.end_color.to_srgba())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "timedial", "timedial").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("TIMEDIAL"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    load_config().unwrap_or_else(|e| {
        log::warn!("Using default configuration: {}", e);
        Config::default()
    })
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                if touches_config(&event, &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

fn touches_config(event: &notify::Event, config_path: &std::path::Path) -> bool {
    let meaningful_event = matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    );
    meaningful_event && event.paths.iter().any(|p| p == config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(s: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(s, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_hex_color_parsing() {
        let cases = vec![
            ("#0080ff", HexColor::new(0x00, 0x80, 0xff)),
            ("53FFFF", HexColor::new(0x53, 0xff, 0xff)),
            (" #102030 ", HexColor::new(0x10, 0x20, 0x30)),
        ];

        for (s, expected) in cases {
            assert_eq!(s.parse::<HexColor>().unwrap(), expected);
        }
        assert!(matches!(
            "#zzzzzz".parse::<HexColor>(),
            Err(ConfigError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_hex_color_display() {
        assert_eq!(HexColor::new(0x53, 0xff, 0x0a).to_string(), "#53ff0a");
    }

    #[test]
    fn test_default_config_matches_bundled_file() {
        assert_eq!(from_toml(DEFAULT_CONFIG), Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = from_toml("mode = \"hour24\"\nend_color = \"#ff0000\"");
        assert_eq!(config.mode, PickerMode::Hour24);
        assert_eq!(config.start_color, default_start_color());
        assert_eq!(config.end_color, HexColor::new(0xff, 0, 0));
        assert_eq!(config.line_width, DEFAULT_LINE_WIDTH);
    }

    #[test]
    fn test_config_serializes_colors_as_hex() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(json["start_color"], "#0080ff");
        assert_eq!(json["mode"], "minute");
    }

    #[test]
    fn test_colors_are_opaque() {
        let colors = Config::default().colors();
        assert_eq!(colors.start.alpha, 1.0);
        assert_eq!(colors, ColorPair::default());
    }

    #[test]
    fn test_touches_config_filters_kind_and_path() {
        let path = std::path::PathBuf::from("/tmp/timedial/config.toml");
        let modify = notify::Event::new(EventKind::Modify(notify::event::ModifyKind::Any))
            .add_path(path.clone());
        let access = notify::Event::new(EventKind::Access(notify::event::AccessKind::Any))
            .add_path(path.clone());
        let other = notify::Event::new(EventKind::Create(notify::event::CreateKind::File))
            .add_path("/tmp/timedial/other.toml".into());

        assert!(touches_config(&modify, &path));
        assert!(!touches_config(&access, &path));
        assert!(!touches_config(&other, &path));
    }
}
