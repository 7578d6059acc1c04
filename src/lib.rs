//! # helpdesk_widget
//!
//! State and behavior of the university help-desk chat widget: static
//! catalogs, the canned-answer demo agent and the widget controller.
//! With the default `runtime` feature it also provides a tokio-driven
//! [`WidgetSession`] that owns the deferred bot replies.

pub mod agent;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use agent::DemoAgent;
pub use catalog::{Catalog, FaqEntry, KeywordReply, PredefinedPrompt};
pub use config::WidgetConfig;
pub use errors::WidgetError;
pub use models::{Message, MessageRole, View};
pub use service::widget_controller::{PendingReply, WidgetController, WidgetState};
#[cfg(feature = "runtime")]
pub use service::widget_session::{WidgetEvent, WidgetSession};
