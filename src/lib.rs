#![cfg(target_arch = "wasm32")]
use parallax_core::ParallaxController;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("parallax-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // All layers resolve up front; a missing one leaves the page static.
    let controller = ParallaxController::resolve(&dom::DocumentLookup {
        document: &document,
    })?;
    log::info!("[init] {} parallax layers registered", controller.len());

    events::wire_scroll(&window, &document, controller)
}
