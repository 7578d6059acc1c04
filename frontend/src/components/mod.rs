pub mod home;
pub mod widget;
