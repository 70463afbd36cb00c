//! Error types for menu construction and rendering

use std::path::PathBuf;

/// Errors raised at the boundaries of the menu model.
///
/// Rendering itself never fails; everything here is detected while a menu is
/// being declared, parsed or configured.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// An options block had the wrong shape or named an unknown option.
    #[error("Invalid options for {context}: {reason}")]
    InvalidOptions { context: String, reason: String },

    /// An item definition did not describe usable content.
    #[error("Invalid item {path}: {reason}")]
    InvalidItem { path: String, reason: String },

    /// A request URL could not be parsed.
    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A menu definition was not valid JSON or did not match the expected layout.
    #[error("Menu definition parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A menu or config file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No list with the requested name exists in the menu.
    #[error("Unknown list: {0}")]
    UnknownList(String),

    /// The config file was present but unusable.
    #[error("Invalid config {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl MenuError {
    /// Creates an invalid-options error.
    pub fn invalid_options(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOptions {
            context: context.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
