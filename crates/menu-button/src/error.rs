//! Error types for the menu button widget.

use std::path::PathBuf;

/// Result type alias for widget construction and queries.
pub type Result<T> = std::result::Result<T, MenuError>;

/// Errors that can occur when building or driving a menu button.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// A menu was built with no items.
    #[error("A menu requires at least one item")]
    EmptyMenu,

    /// An element id was empty.
    #[error("The {element} id must not be empty")]
    EmptyId { element: &'static str },

    /// Two elements share an id.
    #[error("Duplicate element id '{0}'")]
    DuplicateId(String),

    /// An item index outside the menu.
    #[error("Item index {index} is out of range for a menu of {len} items")]
    InvalidIndex { index: usize, len: usize },

    /// An operation that requires the menu to be open.
    #[error("The menu is not open")]
    NotOpen,

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML could not be parsed.
    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML could not be generated.
    #[error("Failed to serialize configuration to TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON could not be parsed or generated.
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension does not name a supported format.
    #[error("Unsupported configuration format for '{path}' (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },
}

impl MenuError {
    /// Create an index error.
    pub fn invalid_index(index: usize, len: usize) -> Self {
        Self::InvalidIndex { index, len }
    }
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
