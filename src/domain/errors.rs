// Domain-level errors for level loading and validation.

use std::fmt;

#[derive(Debug)]
pub enum LevelError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    InvalidScreen,
    InvalidTuning(&'static str),
    InvalidPlatform { index: usize },
    InvalidEnemy { index: usize },
    InvalidPlayerStart,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Io(e) => write!(f, "failed to read level file: {e}"),
            LevelError::Parse(e) => write!(f, "failed to parse level file: {e}"),
            LevelError::InvalidScreen => write!(f, "screen dimensions must be positive"),
            LevelError::InvalidTuning(field) => write!(f, "invalid tuning value: {field}"),
            LevelError::InvalidPlatform { index } => {
                write!(f, "platform {index} must have finite position and positive size")
            }
            LevelError::InvalidEnemy { index } => {
                write!(f, "enemy {index} must have a finite spawn and positive patrol distance")
            }
            LevelError::InvalidPlayerStart => write!(f, "player start must be finite"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Io(e) => Some(e),
            LevelError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::Io(e)
    }
}

impl From<toml::de::Error> for LevelError {
    fn from(e: toml::de::Error) -> Self {
        LevelError::Parse(e)
    }
}
