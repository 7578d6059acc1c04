use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};

use helpdesk_widget::{Catalog, MessageRole, View, WidgetConfig, WidgetEvent, WidgetSession};

const HELP: &str = "commands: /toggle /open /close /home /prompt <id> /recent <n> /quit; \
                    anything else is sent as a message";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "helpdesk_widget=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── Mount ─────────────────────────────────────────────────────────────────
    let config = WidgetConfig::from_env()?;
    info!(reply_delay_ms = config.reply_delay.as_millis() as u64, "configuration loaded");
    let catalog = config.catalog.clone();

    let (mut session, events) = WidgetSession::mount(config);
    let renderer = tokio::spawn(render_events(events, catalog.clone()));

    println!("💬 {HELP}");

    // ── Input loop ────────────────────────────────────────────────────────────
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, arg) = match line.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        match command {
            "/quit" => break,
            "/toggle" => session.toggle_open().await,
            "/open" => session.open().await,
            "/close" => session.close().await,
            "/home" => session.go_home().await,
            "/prompt" => match arg.parse().ok().and_then(|id| catalog.prompt_by_id(id)) {
                Some(prompt) => {
                    session.select_prompt(&prompt.text).await;
                }
                None => warn!(arg, "no such prompt"),
            },
            "/recent" => match pick(arg, catalog.recent_questions.len()) {
                Some(i) => {
                    session.select_recent_question(&catalog.recent_questions[i]).await;
                }
                None => warn!(arg, "no such recent question"),
            },
            _ if command.starts_with('/') => println!("{HELP}"),
            _ => {
                session.set_draft(line).await;
                session.submit_draft().await;
            }
        }
    }

    session.dispose();
    renderer.await?;
    Ok(())
}

/// Parses a 1-based list position.
fn pick(arg: &str, len: usize) -> Option<usize> {
    match arg.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}

async fn render_events(mut events: mpsc::UnboundedReceiver<WidgetEvent>, catalog: Arc<Catalog>) {
    while let Some(event) = events.recv().await {
        match event {
            WidgetEvent::VisibilityChanged { is_open: true } => {
                println!("── Wikamp AI ──");
                render_home(&catalog);
            }
            WidgetEvent::VisibilityChanged { is_open: false } => println!("(widget closed)"),
            WidgetEvent::ViewChanged { view: View::Home } => render_home(&catalog),
            WidgetEvent::ViewChanged { view: View::Chat } => println!("── chat ──"),
            WidgetEvent::MessageAppended { message } => match message.role {
                MessageRole::User => println!("you > {}", message.text),
                MessageRole::Bot => println!("bot > {}", message.text),
            },
        }
    }
}

fn render_home(catalog: &Catalog) {
    println!("Hello, Student! 👋");
    println!("How can I help you today?");

    println!("\nSuggested Topics");
    for prompt in &catalog.prompts {
        println!("  [{}] {}", prompt.id, prompt.text);
    }

    println!("\nFrequently Asked");
    for faq in &catalog.faqs {
        println!("  ▸ {}", faq.question);
        println!("      {}", faq.answer);
    }

    println!("\nRecently Asked");
    for (i, question) in catalog.recent_questions.iter().enumerate() {
        println!("  🕒 [{}] {}", i + 1, question);
    }
    println!();
}
