//! Customer Desk - a small customer-management panel
//! Built with iced over a REST backend

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod app;
mod cache;
mod features;
mod i18n;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging (honours RUST_LOG)
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(1200.0, 800.0))
        .antialiasing(true)
        .run()
}
