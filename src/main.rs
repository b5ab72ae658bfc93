#![allow(warnings)]
//! Storefront Frontend Entry Point

mod models;
mod config;
mod storage;
mod catalog;
mod routes;
mod context;
mod store;
mod header;
mod portfolio;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    // Initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
