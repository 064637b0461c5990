// error.rs - Error types shared by the simulation engine

use thiserror::Error;

/// Errors surfaced by grid access, user input validation and config loading.
#[derive(Error, Debug)]
pub enum LifeError {
    /// Coordinates outside the declared grid dimensions
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// User supplied values that cannot be accepted (size text, density, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed config file
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),
}

impl LifeError {
    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// True for errors the user caused and can correct.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, LifeError>;
