//! Declarative menu button configuration.
//!
//! A [`MenuButtonConfig`] describes one widget instance: the element ids, the
//! button label, the menu items and a few behavior switches. It can be built
//! in code or loaded from TOML or JSON.
//!
//! # Example
//!
//! ```
//! use menu_button::config::MenuButtonConfig;
//!
//! let config = MenuButtonConfig::from_toml_str(r#"
//! button_id = "menubutton1"
//! menu_id = "menu1"
//! label = "Actions"
//!
//! [[items]]
//! label = "Action 1"
//!
//! [[items]]
//! label = "Action 2"
//! action = "second"
//! "#)?;
//!
//! assert_eq!(config.items.len(), 2);
//! assert_eq!(config.typeahead_timeout_ms, 500);
//! # Ok::<(), menu_button::ConfigError>(())
//! ```

use std::path::Path;
use std::time::Duration;

use menu_button_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::widget::widgets::{MenuItem, ReopenPolicy};

/// Result type for configuration loading.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// One menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemConfig {
    /// Visible label, also used for typeahead.
    pub label: String,
    /// Action id; defaults to the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl ItemConfig {
    /// An item whose action id is its label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: None,
        }
    }

    /// Set an explicit action id.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Build the runtime item.
    pub fn to_item(&self) -> MenuItem {
        match &self.action {
            Some(action) => MenuItem::new(self.label.clone(), action.as_str()),
            None => MenuItem::with_label(self.label.clone()),
        }
    }
}

/// Configuration of a single menu button instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuButtonConfig {
    /// Id of the button element.
    pub button_id: String,
    /// Id of the menu element.
    pub menu_id: String,
    /// Button text.
    #[serde(default)]
    pub label: String,
    /// Menu items, in order.
    pub items: Vec<ItemConfig>,
    /// Typeahead inactivity window in milliseconds.
    #[serde(default = "default_typeahead_timeout_ms")]
    pub typeahead_timeout_ms: u64,
    /// What an open trigger does while the menu is already open.
    #[serde(default)]
    pub reopen_policy: ReopenPolicy,
    /// Close the menu when focus leaves the widget.
    #[serde(default = "default_close_on_blur")]
    pub close_on_blur: bool,
}

fn default_typeahead_timeout_ms() -> u64 {
    500
}

fn default_close_on_blur() -> bool {
    true
}

impl MenuButtonConfig {
    /// Create a configuration with default behavior and no items.
    pub fn new(button_id: impl Into<String>, menu_id: impl Into<String>) -> Self {
        Self {
            button_id: button_id.into(),
            menu_id: menu_id.into(),
            label: String::new(),
            items: Vec::new(),
            typeahead_timeout_ms: default_typeahead_timeout_ms(),
            reopen_policy: ReopenPolicy::default(),
            close_on_blur: default_close_on_blur(),
        }
    }

    /// Set the button label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Append an item.
    pub fn with_item(mut self, item: ItemConfig) -> Self {
        self.items.push(item);
        self
    }

    /// Append items whose action ids are their labels.
    pub fn with_items<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(labels.into_iter().map(ItemConfig::new));
        self
    }

    /// Set the typeahead timeout.
    pub fn with_typeahead_timeout(mut self, timeout: Duration) -> Self {
        self.typeahead_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the reopen policy.
    pub fn with_reopen_policy(mut self, policy: ReopenPolicy) -> Self {
        self.reopen_policy = policy;
        self
    }

    /// Set whether blur closes the menu.
    pub fn with_close_on_blur(mut self, close_on_blur: bool) -> Self {
        self.close_on_blur = close_on_blur;
        self
    }

    /// The typeahead timeout as a duration.
    pub fn typeahead_timeout(&self) -> Duration {
        Duration::from_millis(self.typeahead_timeout_ms)
    }

    /// The runtime menu items.
    pub fn menu_items(&self) -> Vec<MenuItem> {
        self.items.iter().map(ItemConfig::to_item).collect()
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a configuration file, choosing the format by extension
    /// (`.toml` or `.json`).
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> ConfigResult<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = parse(&content)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            items = config.items.len(),
            "loaded menu button configuration"
        );
        Ok(config)
    }

    // =========================================================================
    // Generation
    // =========================================================================

    /// Serialize to a TOML string.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
