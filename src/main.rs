#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod app_builder;
mod app_runtime;
mod bindings;
mod contact_view;
mod extras_view;
mod filter_view;
mod modal_view;
mod nav_view;
mod persisted_store;
mod reveal_view;
mod scroll_view;
mod theme_view;
mod tilt_view;
mod typing_view;

fn main() {
    app_builder::run();
}
