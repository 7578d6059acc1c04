use leptos::prelude::*;

use crate::state::AppState;

/// Welcome screen with suggested prompts, FAQs and recent questions.
#[component]
pub fn HomeScreen() -> impl IntoView {
    let state = expect_context::<AppState>();
    let catalog = state.catalog();

    let prompts = catalog
        .prompts
        .into_iter()
        .map(|prompt| {
            let text = prompt.text.clone();
            view! {
                <button class="prompt-chip" on:click=move |_| state.select_prompt(&text)>
                    {prompt.text}
                </button>
            }
        })
        .collect_view();

    let faqs = catalog
        .faqs
        .into_iter()
        .map(|faq| {
            view! {
                <details class="faq-item">
                    <summary>{faq.question}</summary>
                    <p>{faq.answer}</p>
                </details>
            }
        })
        .collect_view();

    let recent = catalog
        .recent_questions
        .into_iter()
        .map(|question| {
            let text = question.clone();
            view! {
                <div class="recent-item" on:click=move |_| state.select_recent_question(&text)>
                    <span class="icon">"🕒"</span>
                    " "
                    {question}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="welcome-screen">
            <div class="welcome-header">
                <h3>"Hello, Student! 👋"</h3>
                <p>"How can I help you today?"</p>
            </div>

            <div class="section-title">"Suggested Topics"</div>
            <div class="prompts-grid">{prompts}</div>

            <div class="section-title">"Frequently Asked"</div>
            <div class="faq-list">{faqs}</div>

            <div class="section-title">"Recently Asked"</div>
            <div class="recent-list">{recent}</div>
        </div>
    }
}
