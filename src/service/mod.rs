pub mod widget_controller;
#[cfg(feature = "runtime")]
pub mod widget_session;
