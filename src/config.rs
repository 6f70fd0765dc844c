//! Widget construction parameters.

use crate::constants::{COMPACT_BREAKPOINT, DEFAULT_MOUNT_SELECTOR, RESIZE_DEBOUNCE_MS};
use crate::dom::Selector;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Data URL is required")]
    MissingUrl,

    #[error("Invalid data URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported mount selector: {0}")]
    InvalidSelector(String),

    #[error("Breakpoint must be greater than zero")]
    InvalidBreakpoint,

    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration of one widget instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Source of the CSV rows
    pub url: String,
    /// Locates the element this instance renders into
    pub mount_selector: String,
    /// Heading above the data; omitted when empty
    pub title: String,
    /// Shown when the data set is empty or the load failed
    pub no_data_message: String,
    /// Widths at or below this render the card list
    pub breakpoint: u32,
    /// Resize quiescence window
    pub debounce_ms: u64,
    /// Carry the active query across resize re-renders
    pub retain_query_on_resize: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            mount_selector: DEFAULT_MOUNT_SELECTOR.to_string(),
            title: String::new(),
            no_data_message: String::new(),
            breakpoint: COMPACT_BREAKPOINT,
            debounce_ms: RESIZE_DEBOUNCE_MS,
            retain_query_on_resize: false,
        }
    }
}

impl WidgetConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_mount_selector(mut self, selector: impl Into<String>) -> Self {
        self.mount_selector = selector.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_no_data_message(mut self, message: impl Into<String>) -> Self {
        self.no_data_message = message.into();
        self
    }

    pub fn with_breakpoint(mut self, breakpoint: u32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn with_retain_query_on_resize(mut self, retain: bool) -> Self {
        self.retain_query_on_resize = retain;
        self
    }

    /// Parse and validate a JSON configuration object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        url::Url::parse(&self.url).map_err(|source| ConfigError::InvalidUrl {
            url: self.url.clone(),
            source,
        })?;
        if Selector::parse(&self.mount_selector).is_none() {
            return Err(ConfigError::InvalidSelector(self.mount_selector.clone()));
        }
        if self.breakpoint == 0 {
            return Err(ConfigError::InvalidBreakpoint);
        }
        Ok(())
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
