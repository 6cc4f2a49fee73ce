use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use ratatui::style::Color;

use crate::error::ConfigError;
use crate::game::{Player, WIDTH};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub shell: ShellConfig,
    pub logging: LoggingConfig,
}

/// How a player is shown on screen.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PlayerStyle {
    pub name: String,
    /// Any color name or `#rrggbb` value the terminal backend understands.
    pub color: String,
}

impl PlayerStyle {
    fn new(name: &str, color: &str) -> Self {
        PlayerStyle {
            name: name.to_string(),
            color: color.to_string(),
        }
    }

    /// Parsed terminal color; falls back to white for unparseable values.
    pub fn terminal_color(&self) -> Color {
        Color::from_str(&self.color).unwrap_or(Color::White)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PlayerStyle,
    pub two: PlayerStyle,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: PlayerStyle::new("Red", "red"),
            two: PlayerStyle::new("Blue", "blue"),
        }
    }
}

impl PlayersConfig {
    pub fn style(&self, player: Player) -> &PlayerStyle {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Pause after a win or tie before the board is cleared.
    pub end_game_delay_ms: u64,
    /// Start a new game automatically once a game ends.
    pub auto_restart: bool,
    /// Column the selector starts on (0-based).
    pub start_column: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            end_game_delay_ms: 500,
            auto_restart: true,
            start_column: 3,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log filter; `RUST_LOG` takes precedence.
    pub level: String,
    /// Write log output here instead of stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter; `validate` guarantees this parses.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.level).unwrap_or(LevelFilter::Warn)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let styles = [
            ("players.one", &self.players.one),
            ("players.two", &self.players.two),
        ];
        for (key, style) in styles {
            if style.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key}.name must not be empty")));
            }
            if Color::from_str(&style.color).is_err() {
                return Err(ConfigError::Validation(format!(
                    "{key}.color '{}' is not a known color",
                    style.color
                )));
            }
        }
        if self.players.one.name == self.players.two.name {
            return Err(ConfigError::Validation(
                "players.one.name and players.two.name must differ".into(),
            ));
        }

        if self.shell.start_column >= WIDTH {
            return Err(ConfigError::Validation(format!(
                "shell.start_column must be < {WIDTH}"
            )));
        }
        if self.shell.end_game_delay_ms > 60_000 {
            return Err(ConfigError::Validation(
                "shell.end_game_delay_ms must be <= 60000".into(),
            ));
        }

        if LevelFilter::from_str(&self.logging.level).is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not a log level",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
