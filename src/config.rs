#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::errors::WidgetError;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(800);

pub const CATALOG_ENV: &str = "WIDGET_CATALOG";
pub const REPLY_DELAY_ENV: &str = "WIDGET_REPLY_DELAY_MS";

/// Immutable configuration a widget is mounted with.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub catalog: Arc<Catalog>,
    pub reply_delay: Duration,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            catalog: Arc::new(Catalog::default()),
            reply_delay: DEFAULT_REPLY_DELAY,
        }
    }
}

impl WidgetConfig {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog: Arc::new(catalog), ..Self::default() }
    }

    pub fn with_reply_delay(mut self, reply_delay: Duration) -> Self {
        self.reply_delay = reply_delay;
        self
    }

    /// Builds a configuration from `WIDGET_CATALOG` and `WIDGET_REPLY_DELAY_MS`.
    /// Unset variables keep the built-in defaults.
    pub fn from_env() -> Result<Self, WidgetError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, WidgetError> {
        let mut config = match lookup(CATALOG_ENV) {
            Some(path) => {
                tracing::info!(%path, "loading widget catalog");
                Self::new(Catalog::from_path(&path)?)
            }
            None => Self::default(),
        };

        if let Some(raw) = lookup(REPLY_DELAY_ENV) {
            let ms: u64 = raw
                .trim()
                .parse()
                .map_err(|_| WidgetError::InvalidDelay { value: raw.clone() })?;
            config.reply_delay = Duration::from_millis(ms);
        }

        Ok(config)
    }
}
