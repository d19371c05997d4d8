#![warn(clippy::pedantic)]

use std::sync::{Arc, Mutex, OnceLock};

use dioxus::{
    desktop::{Config, LogicalSize, WindowBuilder},
    prelude::*,
};
use log::{error, info};

use customer_info_app as app;
use customer_info_domain::{self as domain, CustomerService};
use customer_info_storage as storage;

use component::element::{Color, Dialog};
use page::customer::CustomerEntry;

mod component;
mod page;

const MAIN_CSS: &str = include_str!("../assets/main.css");

static SETTINGS: OnceLock<app::Settings> = OnceLock::new();
static STARTUP_ERROR: OnceLock<app::Notification> = OnceLock::new();

static DOMAIN_SERVICE: GlobalSignal<domain::Service<storage::sqlite::SQLite>> =
    Signal::global(|| {
        domain::Service::new(storage::sqlite::SQLite::new(settings().database.clone()))
    });
static NOTIFICATIONS: GlobalSignal<Vec<app::Notification>> =
    Signal::global(|| STARTUP_ERROR.get().cloned().into_iter().collect());

fn settings() -> &'static app::Settings {
    SETTINGS.get_or_init(app::Settings::default)
}

fn main() {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
    }));

    let local_file = storage::local_file::LocalFile::new(".");
    init_logging(local_file.clone());

    let settings = SETTINGS.get_or_init(|| app::Service::new(local_file).settings_or_default());
    log::set_max_level(settings.log_level);
    info!("using database {}", settings.database.display());

    if let Err(err) =
        domain::Service::new(storage::sqlite::SQLite::new(settings.database.clone())).initialize()
    {
        let _ = STARTUP_ERROR.set(app::Notification::database_error(&err));
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(app::WINDOW_TITLE)
                    .with_inner_size(LogicalSize::new(
                        f64::from(settings.window_width),
                        f64::from(settings.window_height),
                    )),
            ),
        )
        .launch(App);
}

fn init_logging(local_file: storage::local_file::LocalFile) {
    if let Err(err) = app::log::init(
        Arc::new(Mutex::new(local_file)),
        app::Settings::default().log_level,
    ) {
        eprintln!("failed to initialize logging: {err}");
    }
}

#[component]
fn App() -> Element {
    rsx! {
        style { "{MAIN_CSS}" }

        div {
            class: "container",
            CustomerEntry {}
            Notification {}
        }
    }
}

#[component]
fn Notification() -> Element {
    let notification = NOTIFICATIONS
        .read()
        .last()
        .cloned()
        .map(|notification| (Color::from(notification.severity), notification));

    rsx! {
        if let Some((color, notification)) = notification {
            Dialog {
                color,
                title: rsx! { "{notification.title}" },
                close_event: move |_| { let _ = NOTIFICATIONS.write().pop(); },
                div {
                    class: "block",
                    "{notification.message}"
                }
                div {
                    class: "field is-grouped is-grouped-centered",
                    div {
                        class: "control",
                        button {
                            class: "button is-{color}",
                            onclick: move |_| { let _ = NOTIFICATIONS.write().pop(); },
                            "OK"
                        }
                    }
                }
            }
        }
    }
}
