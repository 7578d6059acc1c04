use gloo_timers::callback::Timeout;
use helpdesk_widget::{Catalog, PendingReply, WidgetConfig, WidgetController};
use leptos::prelude::*;

/// Widget state, provided via Leptos context to the widget's components.
///
/// Pending reply timers live in the providing component's owner: when the
/// widget unmounts they are dropped, which cancels them.
#[derive(Clone, Copy)]
pub struct AppState {
    // --- Read signal (for components to subscribe to) ---
    pub widget: ReadSignal<WidgetController>,

    // --- Write signal (for mutating state) ---
    set_widget: WriteSignal<WidgetController>,

    timers: StoredValue<Vec<Timeout>, LocalStorage>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide(config: WidgetConfig) -> Self {
        let (widget, set_widget) = signal(WidgetController::new(config));
        let timers = StoredValue::new_local(Vec::<Timeout>::new());

        on_cleanup(move || {
            let dropped = timers.try_update_value(|t| std::mem::take(t)).map_or(0, |t| t.len());
            log::debug!("widget unmounted, dropped {dropped} reply timer(s)");
        });

        let state = Self { widget, set_widget, timers };
        provide_context(state);
        state
    }

    pub fn catalog(&self) -> Catalog {
        self.widget.with_untracked(|w| w.catalog().clone())
    }

    pub fn toggle_open(&self) {
        self.set_widget.update(|w| {
            w.toggle_open();
        });
    }

    pub fn close(&self) {
        self.set_widget.update(WidgetController::close);
    }

    pub fn go_home(&self) {
        self.set_widget.update(WidgetController::go_home);
    }

    pub fn set_draft(&self, text: String) {
        self.set_widget.update(|w| w.set_draft(text));
    }

    pub fn submit_draft(&self) {
        self.submit_with(WidgetController::submit_draft);
    }

    pub fn select_prompt(&self, text: &str) {
        self.submit_with(|w| w.select_prompt(text));
    }

    pub fn select_recent_question(&self, text: &str) {
        self.submit_with(|w| w.select_recent_question(text));
    }

    fn submit_with(&self, submit: impl FnOnce(&mut WidgetController) -> Option<PendingReply>) {
        if let Some(pending) = self.set_widget.try_update(submit).flatten() {
            self.schedule(pending);
        }
    }

    /// Arms a timer that appends the bot reply once the delay elapses.
    fn schedule(&self, pending: PendingReply) {
        let set_widget = self.set_widget;
        let millis = u32::try_from(pending.delay().as_millis()).unwrap_or(u32::MAX);

        let timeout = Timeout::new(millis, move || {
            let delivered = set_widget.try_update(|w| {
                w.deliver_reply(pending);
            });
            if delivered.is_none() {
                log::warn!("widget disposed before bot reply; reply dropped");
            }
        });

        self.timers.update_value(|t| t.push(timeout));
    }
}
