//! Taskboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod icon;
mod models;
mod routes;
mod store;
mod time;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(log::LevelFilter::Info) {
        web_sys::console::error_1(&format!("logger already set: {}", err).into());
    }
    mount_to_body(App);
}
