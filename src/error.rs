use std::path::PathBuf;

/// Caller contract violations raised by the rules engine.
///
/// A full column is not an error; see [`crate::game::Placement::ColumnFull`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("column {column} is outside the board (width {width})")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("cell ({row}, {column}) is outside the {width}x{height} board")]
    CellOutOfRange {
        row: usize,
        column: usize,
        width: usize,
        height: usize,
    },

    #[error("game is over; start a new game to keep playing")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
