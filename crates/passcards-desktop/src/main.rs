//! Password Cards desktop application
//!
//! A single window for browsing, searching and editing password cards kept
//! on the card service.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod state;
mod theme;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("passcards_desktop=debug,passcards_core=info")
            }),
        )
        .init();

    tracing::info!("Starting Password Cards...");

    let window = WindowBuilder::new()
        .with_title("Password Cards")
        .with_inner_size(LogicalSize::new(760.0, 860.0));
    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
