//! Fundus AI Clinical Dashboard (Leptos + WASM)

pub mod api;
pub mod app;
pub mod components;
pub mod download;
pub mod pages;
pub mod storage;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
