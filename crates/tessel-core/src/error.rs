/// Core error types for Tessel.
use std::path::PathBuf;

use crate::color::ColorError;
use crate::value::Value;

/// A specialized Result type for Tessel operations.
pub type TesselResult<T> = Result<T, TesselError>;

/// Top-level error type for the value library and its configuration layer.
#[derive(Debug, thiserror::Error)]
pub enum TesselError {
    #[error(
        "cannot interpolate {from_kind} {from:?} toward {to_kind} {to:?}",
        from_kind = .from.kind(),
        to_kind = .to.kind()
    )]
    InvalidInterpolatableDestination { from: Box<Value>, to: Box<Value> },

    #[error("color error: {0}")]
    Color(#[from] ColorError),

    #[error("palette entry '{name}': {source}")]
    Palette {
        name: String,
        #[source]
        source: ColorError,
    },

    #[error("config error: {message} ({path:?})")]
    Config { message: String, path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}

impl TesselError {
    /// Create an interpolation type-mismatch error carrying both operands.
    pub fn invalid_destination(from: Value, to: Value) -> Self {
        TesselError::InvalidInterpolatableDestination {
            from: Box::new(from),
            to: Box::new(to),
        }
    }

    /// Create a config error tied to a file path.
    pub fn config(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        TesselError::Config {
            message: message.into(),
            path: path.into(),
        }
    }
}
