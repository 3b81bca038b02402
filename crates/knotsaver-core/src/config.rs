use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::geometry::{Canvas, Vec2d, MAX_STEPS};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Size of the area control points bounce around in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_canvas_width")]
    pub width: f64,
    #[serde(default = "default_canvas_height")]
    pub height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Initial number of samples per curve segment
    #[serde(default = "default_steps")]
    pub steps: usize,
    /// Start with point motion paused
    #[serde(default = "default_true")]
    pub start_paused: bool,
    /// Upper bound of each random velocity component
    #[serde(default = "default_max_velocity")]
    pub max_velocity: f64,
    /// Velocity used when randomness is not wanted (headless runs)
    #[serde(default = "default_velocity")]
    pub default_velocity: [f64; 2],
    /// Radius of control point markers
    #[serde(default = "default_width")]
    pub point_width: u16,
    /// Stroke width of the smoothed curve
    #[serde(default = "default_width")]
    pub line_width: u16,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            start_paused: default_true(),
            max_velocity: default_max_velocity(),
            default_velocity: default_velocity(),
            point_width: default_width(),
            line_width: default_width(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the status bar below the canvas
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_status_bar: default_true(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "midnight", "nord")
    pub name: String,
    /// Optional color overrides
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "midnight".to_string()
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Canvas background
    pub background: Option<String>,
    /// Text and control point color
    pub foreground: Option<String>,
    /// Muted text
    pub muted: Option<String>,
    /// Help overlay border
    pub accent: Option<String>,
    /// Status bar background
    pub status_bg: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "p", "<C-c>" (Ctrl+c), "<F1>", "<Esc>", "<Space>", "+", "-"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Pause or resume point motion
    #[serde(default = "default_key_toggle_pause")]
    pub toggle_pause: String,
    /// Remove all control points
    #[serde(default = "default_key_reset")]
    pub reset: String,
    /// More samples per curve segment
    #[serde(default = "default_key_increase_steps")]
    pub increase_steps: String,
    /// Fewer samples per curve segment
    #[serde(default = "default_key_decrease_steps")]
    pub decrease_steps: String,
    /// Show or hide the help overlay
    #[serde(default = "default_key_toggle_help")]
    pub toggle_help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            toggle_pause: default_key_toggle_pause(),
            reset: default_key_reset(),
            increase_steps: default_key_increase_steps(),
            decrease_steps: default_key_decrease_steps(),
            toggle_help: default_key_toggle_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_toggle_pause() -> String { "p".to_string() }
fn default_key_reset() -> String { "r".to_string() }
fn default_key_increase_steps() -> String { "+".to_string() }
fn default_key_decrease_steps() -> String { "-".to_string() }
fn default_key_toggle_help() -> String { "<F1>".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("knotsaver")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_canvas_width() -> f64 {
    800.0
}

fn default_canvas_height() -> f64 {
    600.0
}

fn default_steps() -> usize {
    35
}

fn default_max_velocity() -> f64 {
    2.0
}

fn default_velocity() -> [f64; 2] {
    [0.5, 0.5]
}

fn default_width() -> u16 {
    3
}

fn default_tick_rate() -> u64 {
    33 // ~30fps
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults if it is missing
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to the default file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;

        Ok(())
    }

    /// Reject values the animation cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        if self.animation.steps == 0 || self.animation.steps > MAX_STEPS {
            return Err(crate::Error::Config(format!(
                "animation.steps must be between 1 and {}",
                MAX_STEPS
            )));
        }
        if !(self.animation.max_velocity >= 0.0) {
            return Err(crate::Error::Config(
                "animation.max_velocity must not be negative".to_string(),
            ));
        }
        self.canvas()
            .map(|_| ())
            .map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/knotsaver/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("knotsaver")
            .join("config.toml")
    }

    /// Get the log file path used while the terminal UI owns the screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("knotsaver.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    pub fn canvas(&self) -> crate::Result<Canvas> {
        Canvas::new(self.canvas.width, self.canvas.height)
    }

    pub fn default_velocity(&self) -> Vec2d {
        Vec2d::from(self.animation.default_velocity)
    }
}
