//! UpNext Frontend Entry Point

mod app;
mod components;
mod context;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("[APP] Logger already set: {}", e).into());
    }

    mount_to_body(App);
}
