use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while assembling a widget configuration.
/// The widget itself never fails at runtime: empty input is a silent no-op.
#[derive(Debug, Error)]
pub enum WidgetError {
    // ── Catalog errors ───────────────────────────────────────────────────────
    #[error("Failed to read catalog at '{}': {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    CatalogParse(#[source] serde_json::Error),

    #[error("Prompt id {id} appears more than once")]
    DuplicatePromptId { id: u32 },

    // ── Validation errors ────────────────────────────────────────────────────
    #[error("Field '{field_name}' cannot be empty")]
    EmptyField { field_name: String },

    #[error("Invalid reply delay '{value}': expected milliseconds as an unsigned integer")]
    InvalidDelay { value: String },
}

impl WidgetError {
    pub fn empty_field(field_name: impl Into<String>) -> Self {
        WidgetError::EmptyField { field_name: field_name.into() }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            WidgetError::DuplicatePromptId { .. }
                | WidgetError::EmptyField { .. }
                | WidgetError::InvalidDelay { .. }
        )
    }
}
