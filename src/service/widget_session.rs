#[cfg(test)]
#[path = "widget_session_test.rs"]
mod widget_session_test;

use std::sync::{Arc, Weak};

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::config::WidgetConfig;
use crate::models::{Message, View};
use crate::service::widget_controller::{PendingReply, WidgetController, WidgetState};

/// State changes a host renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    VisibilityChanged { is_open: bool },
    ViewChanged { view: View },
    MessageAppended { message: Message },
}

/// A mounted widget driven by the tokio runtime.
///
/// Deferred replies run as tasks owned by the session; dropping the session
/// aborts them, and a task that outlives the controller finds only a dead
/// `Weak` and discards its reply.
pub struct WidgetSession {
    widget: Arc<Mutex<WidgetController>>,
    events: mpsc::UnboundedSender<WidgetEvent>,
    pending: JoinSet<()>,
}

impl WidgetSession {
    pub fn mount(config: WidgetConfig) -> (Self, mpsc::UnboundedReceiver<WidgetEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = Self {
            widget: Arc::new(Mutex::new(WidgetController::new(config))),
            events: tx,
            pending: JoinSet::new(),
        };
        info!("widget mounted");
        (session, rx)
    }

    pub async fn snapshot(&self) -> WidgetState {
        self.widget.lock().await.state().clone()
    }

    /// Borrows the controller for read-only access (catalog, draft, ...).
    pub async fn with_widget<R>(&self, f: impl FnOnce(&WidgetController) -> R) -> R {
        f(&*self.widget.lock().await)
    }

    /// Replies scheduled but not yet delivered or cancelled.
    pub fn pending_replies(&mut self) -> usize {
        self.reap();
        self.pending.len()
    }

    pub async fn toggle_open(&self) {
        let is_open = self.widget.lock().await.toggle_open();
        self.emit(WidgetEvent::VisibilityChanged { is_open });
    }

    pub async fn open(&self) {
        let mut widget = self.widget.lock().await;
        if !widget.is_open() {
            widget.toggle_open();
            self.emit(WidgetEvent::VisibilityChanged { is_open: true });
        }
    }

    pub async fn close(&self) {
        let mut widget = self.widget.lock().await;
        if widget.is_open() {
            widget.close();
            self.emit(WidgetEvent::VisibilityChanged { is_open: false });
        }
    }

    pub async fn go_home(&self) {
        let mut widget = self.widget.lock().await;
        if widget.view() != View::Home {
            widget.go_home();
            self.emit(WidgetEvent::ViewChanged { view: View::Home });
        }
    }

    pub async fn set_draft(&self, text: impl Into<String>) {
        self.widget.lock().await.set_draft(text);
    }

    /// Submits the draft. Returns whether a message was sent.
    pub async fn submit_draft(&mut self) -> bool {
        self.submit_with(|w| w.submit_draft()).await
    }

    pub async fn submit_input(&mut self, text: &str) -> bool {
        self.submit_with(|w| w.submit_input(text)).await
    }

    pub async fn select_prompt(&mut self, text: &str) -> bool {
        self.submit_with(|w| w.select_prompt(text)).await
    }

    pub async fn select_recent_question(&mut self, text: &str) -> bool {
        self.submit_with(|w| w.select_recent_question(text)).await
    }

    /// Aborts every pending reply and unmounts the widget.
    pub fn dispose(mut self) {
        self.pending.abort_all();
        info!("widget disposed");
    }

    async fn submit_with(
        &mut self,
        submit: impl FnOnce(&mut WidgetController) -> Option<PendingReply>,
    ) -> bool {
        let pending = {
            let mut widget = self.widget.lock().await;
            let previous_view = widget.view();
            let Some(pending) = submit(&mut *widget) else {
                return false;
            };
            if let Some(message) = widget.transcript().last() {
                self.emit(WidgetEvent::MessageAppended { message: message.clone() });
            }
            if previous_view != widget.view() {
                self.emit(WidgetEvent::ViewChanged { view: widget.view() });
            }
            pending
        };

        self.reap();
        self.schedule(pending);
        true
    }

    fn schedule(&mut self, pending: PendingReply) {
        let widget = Arc::downgrade(&self.widget);
        let events = self.events.clone();
        let due = Instant::now() + pending.delay();
        debug!(delay_ms = pending.delay().as_millis() as u64, "scheduling bot reply");
        self.pending.spawn(deliver_later(widget, events, pending, due));
    }

    fn reap(&mut self) {
        while self.pending.try_join_next().is_some() {}
    }

    fn emit(&self, event: WidgetEvent) {
        // A host that stopped listening is not an error for the widget.
        let _ = self.events.send(event);
    }
}

async fn deliver_later(
    widget: Weak<Mutex<WidgetController>>,
    events: mpsc::UnboundedSender<WidgetEvent>,
    pending: PendingReply,
    due: Instant,
) {
    tokio::time::sleep_until(due).await;

    let Some(widget) = widget.upgrade() else {
        debug!("widget gone, dropping bot reply");
        return;
    };
    let message = widget.lock().await.deliver_reply(pending).clone();
    let _ = events.send(WidgetEvent::MessageAppended { message });
}
