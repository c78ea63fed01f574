#![allow(warnings)]
//! Menu Browser Frontend Entry Point

mod models;
mod api;
mod format;
mod theme;
mod context;
mod store;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;
use tracing::Level;

/// Log lines kept for the in-app buffer
const LOG_CAPACITY: usize = 500;

fn main() {
    console_error_panic_hook::set_once();
    match rolling_logger::init_logger(Level::INFO, LOG_CAPACITY) {
        Ok(_) => rolling_logger::info("menu browser starting"),
        Err(e) => web_sys::console::warn_1(&format!("logger already initialised: {e}").into()),
    }
    mount_to_body(App);
}
