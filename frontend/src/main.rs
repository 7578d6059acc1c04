mod components;
mod state;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::widget::ChatWidget;

/// Host page the widget floats over.
#[component]
fn App() -> impl IntoView {
    view! {
        <div class="app-container">
            <div class="background-image"></div>
            <ChatWidget />
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
