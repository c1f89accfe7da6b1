mod app;
mod components;
mod config;
mod utils;

use app::App;
use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    utils::logger::init(config::LOG_LEVEL);

    let Some(root) = document().get_element_by_id("app") else {
        error!("missing #app element, nothing to mount");
        return;
    };

    info!("mounting terminal");
    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
