#[cfg(test)]
#[path = "widget_controller_test.rs"]
mod widget_controller_test;

use std::time::Duration;

use tracing::{debug, info};

use crate::agent::DemoAgent;
use crate::catalog::Catalog;
use crate::config::WidgetConfig;
use crate::models::{Message, View};

/// Transient view-state of one mounted widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub is_open: bool,
    pub view: View,
    pub transcript: Vec<Message>,
    pub draft: String,
}

/// A bot reply owed for an accepted user message.
///
/// The host waits `delay` and then hands it back through
/// [`WidgetController::deliver_reply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    query: String,
    delay: Duration,
}

impl PendingReply {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Synchronous state machine behind the chat widget. Owns no timers;
/// scheduling the deferred reply is left to the host.
#[derive(Debug, Clone)]
pub struct WidgetController {
    state: WidgetState,
    agent: DemoAgent,
    reply_delay: Duration,
}

impl WidgetController {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            state: WidgetState::default(),
            agent: DemoAgent::new(config.catalog),
            reply_delay: config.reply_delay,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        self.agent.catalog()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    pub fn transcript(&self) -> &[Message] {
        &self.state.transcript
    }

    pub fn draft(&self) -> &str {
        &self.state.draft
    }

    /// Whether the send control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.state.draft.trim().is_empty()
    }

    pub fn toggle_open(&mut self) -> bool {
        self.state.is_open = !self.state.is_open;
        debug!(is_open = self.state.is_open, "widget toggled");
        self.state.is_open
    }

    pub fn close(&mut self) {
        self.state.is_open = false;
    }

    /// Back to the suggestions screen. The transcript is kept.
    pub fn go_home(&mut self) {
        self.state.view = View::Home;
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.draft = text.into();
    }

    pub fn submit_draft(&mut self) -> Option<PendingReply> {
        let text = self.state.draft.clone();
        self.submit_input(&text)
    }

    pub fn select_prompt(&mut self, text: &str) -> Option<PendingReply> {
        self.submit_input(text)
    }

    pub fn select_recent_question(&mut self, text: &str) -> Option<PendingReply> {
        self.submit_input(text)
    }

    /// Appends `text` as a user message and switches to the chat view.
    /// Blank input is ignored and yields `None`.
    pub fn submit_input(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }

        self.state.transcript.push(Message::user(text));
        self.state.view = View::Chat;
        self.state.draft.clear();
        info!(len = self.state.transcript.len(), "user message appended");

        Some(PendingReply { query: text.to_string(), delay: self.reply_delay })
    }

    /// Resolves a pending reply and appends the bot message.
    pub fn deliver_reply(&mut self, pending: PendingReply) -> &Message {
        let reply = self.agent.reply(&pending.query).to_string();
        self.state.transcript.push(Message::bot(reply));
        info!(len = self.state.transcript.len(), "bot reply appended");
        &self.state.transcript[self.state.transcript.len() - 1]
    }
}
