//! Onboarding Workflow Editor Entry Point

mod app;
mod components;
mod config;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
