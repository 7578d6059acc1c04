use std::time::Duration;

use super::*;

async fn settle() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

fn drain(rx: &mut mpsc::UnboundedReceiver<WidgetEvent>) -> Vec<WidgetEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

// =============================================================
// Visibility and navigation events
// =============================================================

#[tokio::test]
async fn toggle_and_close_publish_visibility() {
    let (session, mut rx) = WidgetSession::mount(WidgetConfig::default());

    session.toggle_open().await;
    session.close().await;
    session.close().await;
    session.open().await;

    assert_eq!(
        drain(&mut rx),
        [
            WidgetEvent::VisibilityChanged { is_open: true },
            WidgetEvent::VisibilityChanged { is_open: false },
            WidgetEvent::VisibilityChanged { is_open: true },
        ]
    );
}

#[tokio::test]
async fn blank_submit_publishes_nothing() {
    let (mut session, mut rx) = WidgetSession::mount(WidgetConfig::default());
    session.set_draft("   ").await;

    assert!(!session.submit_draft().await);
    assert!(!session.submit_input("").await);
    assert_eq!(session.pending_replies(), 0);
    assert!(drain(&mut rx).is_empty());
    assert_eq!(session.snapshot().await.view, View::Home);
}

// =============================================================
// Deferred replies
// =============================================================

#[tokio::test(start_paused = true)]
async fn reply_arrives_only_after_delay() {
    let (mut session, mut rx) = WidgetSession::mount(WidgetConfig::default());

    assert!(session.select_prompt("Contact support").await);
    assert_eq!(
        drain(&mut rx),
        [
            WidgetEvent::MessageAppended { message: Message::user("Contact support") },
            WidgetEvent::ViewChanged { view: View::Chat },
        ]
    );

    tokio::time::advance(Duration::from_millis(799)).await;
    settle().await;
    assert_eq!(session.snapshot().await.transcript.len(), 1);
    assert_eq!(session.pending_replies(), 1);

    let event = rx.recv().await.expect("bot reply");
    assert_eq!(
        event,
        WidgetEvent::MessageAppended {
            message: Message::bot("You can contact support at support@wikamp.edu.pl."),
        }
    );
    settle().await;
    assert_eq!(session.pending_replies(), 0);
    assert_eq!(session.snapshot().await.transcript.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn draft_submit_clears_draft_and_replies() {
    let (mut session, mut rx) = WidgetSession::mount(WidgetConfig::default());
    session.set_draft("I need parking info").await;

    assert!(session.submit_draft().await);
    assert_eq!(session.with_widget(|w| w.draft().to_string()).await, "");
    drain(&mut rx);

    let event = rx.recv().await.expect("bot reply");
    assert_eq!(
        event,
        WidgetEvent::MessageAppended {
            message: Message::bot("Student parking is available behind Building C."),
        }
    );
}

#[tokio::test(start_paused = true)]
async fn closing_does_not_cancel_reply() {
    let (mut session, mut rx) = WidgetSession::mount(WidgetConfig::default());
    session.open().await;
    session.select_recent_question("Scholarship requirements").await;
    session.close().await;
    drain(&mut rx);

    tokio::time::sleep(Duration::from_secs(1)).await;
    settle().await;

    let state = session.snapshot().await;
    assert!(!state.is_open);
    assert_eq!(
        state.transcript.last().map(|m| m.text.as_str()),
        Some("Scholarship requirements can be found in the 'Student Welfare' section.")
    );
}

#[tokio::test(start_paused = true)]
async fn dispose_cancels_pending_replies() {
    let (mut session, mut rx) = WidgetSession::mount(WidgetConfig::default());
    session.submit_input("hello").await;
    session.submit_input("canteen?").await;
    assert_eq!(session.pending_replies(), 2);
    drain(&mut rx);

    session.dispose();
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(rx.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn dropping_session_cancels_pending_replies() {
    let (mut session, mut rx) = WidgetSession::mount(WidgetConfig::default());
    session.submit_input("Where is the library?").await;
    drain(&mut rx);

    drop(session);
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(rx.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn go_home_keeps_transcript_while_reply_lands() {
    let (mut session, mut rx) = WidgetSession::mount(WidgetConfig::default());
    session.submit_input("Where is the library?").await;
    session.go_home().await;
    drain(&mut rx);

    rx.recv().await.expect("bot reply");
    let state = session.snapshot().await;
    assert_eq!(state.view, View::Home);
    assert_eq!(
        state.transcript,
        [
            Message::user("Where is the library?"),
            Message::bot("The library is located in Building B, 2nd floor."),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn replies_follow_submission_order() {
    let config = WidgetConfig::default().with_reply_delay(Duration::from_millis(10));
    let (mut session, mut rx) = WidgetSession::mount(config);
    session.submit_input("parking").await;
    tokio::time::advance(Duration::from_millis(1)).await;
    session.submit_input("canteen").await;
    drain(&mut rx);

    let first = rx.recv().await.expect("first reply");
    let second = rx.recv().await.expect("second reply");
    assert_eq!(
        first,
        WidgetEvent::MessageAppended {
            message: Message::bot("Student parking is available behind Building C."),
        }
    );
    assert_eq!(
        second,
        WidgetEvent::MessageAppended {
            message: Message::bot("The canteen is open from 8:00 AM to 4:00 PM."),
        }
    );
}
