use helpdesk_widget::{Message, View, WidgetConfig};
use leptos::ev;
use leptos::prelude::*;

use crate::components::home::HomeScreen;
use crate::state::AppState;

/// Floating help-desk widget: toggle button plus the chat window.
#[component]
pub fn ChatWidget(#[prop(optional)] config: Option<WidgetConfig>) -> impl IntoView {
    let state = AppState::provide(config.unwrap_or_default());
    let is_open = move || state.widget.with(|w| w.is_open());

    view! {
        <div class="chat-widget-container">
            <Show when=is_open>
                <div class="chat-window">
                    <WidgetHeader />
                    <div class="chat-content">
                        {move || match state.widget.with(|w| w.view()) {
                            View::Home => view! { <HomeScreen /> }.into_any(),
                            View::Chat => view! { <MessageList /> }.into_any(),
                        }}
                    </div>
                    <ChatInput />
                </div>
            </Show>
            <button class="chat-toggle-btn" on:click=move |_| state.toggle_open()>
                {move || if is_open() { "✕" } else { "💬" }}
            </button>
        </div>
    }
}

/// Title bar; the back button only shows on the chat screen.
#[component]
fn WidgetHeader() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="chat-header">
            <div class="header-left">
                <Show when=move || state.widget.with(|w| w.view() == View::Chat)>
                    <button class="back-btn" on:click=move |_| state.go_home()>
                        "←"
                    </button>
                </Show>
                <div class="header-title">
                    <span class="status-dot"></span>
                    "Wikamp AI"
                </div>
            </div>
            <button class="close-btn" on:click=move |_| state.close()>
                "×"
            </button>
        </div>
    }
}

/// Transcript, kept scrolled to the newest message.
#[component]
fn MessageList() -> impl IntoView {
    let state = expect_context::<AppState>();
    let list_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = state.widget.with(|w| (w.transcript().len(), w.is_open(), w.view()));
        if let Some(el) = list_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    view! {
        <div class="messages-list" node_ref=list_ref>
            // Transcript is append-only, so the position is a stable key.
            <For
                each=move || {
                    state.widget.with(|w| w.transcript().iter().cloned().enumerate().collect::<Vec<_>>())
                }
                key=|entry: &(usize, Message)| entry.0
                children=move |(_, message)| view! { <MessageBubble message=message /> }
            />
        </div>
    }
}

#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let css_class = format!("message {}", message.role);

    view! {
        <div class=css_class>
            <div class="message-bubble">{message.text}</div>
        </div>
    }
}

/// Input form; the send button stays disabled while the draft is blank.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.submit_draft();
    };

    view! {
        <form class="chat-input-area" on:submit=on_submit>
            <input
                type="text"
                placeholder="Type a message..."
                prop:value=move || state.widget.with(|w| w.draft().to_string())
                on:input=move |ev| state.set_draft(event_target_value(&ev))
            />
            <button type="submit" disabled=move || !state.widget.with(|w| w.can_submit())>
                <svg
                    width="20"
                    height="20"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <line x1="22" y1="2" x2="11" y2="13"></line>
                    <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                </svg>
            </button>
        </form>
    }
}
