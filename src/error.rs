use std::path::PathBuf;

use crate::types::Flavour;

/// Errors raised while building or writing a document.
///
/// Construction problems are reported when the offending element is built,
/// never deferred to rendering. Rendering itself is infallible.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("{what} level must be between {min} and {max}, not {level}")]
    LevelOutOfRange {
        what: &'static str,
        level: u8,
        min: u8,
        max: u8,
    },

    #[error("Unrecognised {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Flavour {flavour} is not supported by {element}")]
    UnsupportedFlavour {
        flavour: Flavour,
        element: &'static str,
    },

    #[error("Cannot append {kind} to a paragraph")]
    UnsupportedAppend { kind: &'static str },

    #[error("Failed to serialise YAML header: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to serialise JSON header: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
