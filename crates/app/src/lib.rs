#![warn(clippy::pedantic)]

pub mod log;
pub mod notification;
pub mod service;
pub mod settings;

pub use notification::{Notification, Severity};
pub use service::Service;
pub use settings::{Settings, SettingsRepository, SettingsService};

pub const WINDOW_TITLE: &str = "Customer Information Management System";
