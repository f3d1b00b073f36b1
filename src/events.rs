use crate::constants::SCROLL_EVENT;
use crate::dom::StyledElement;
use parallax_core::ParallaxController;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drive `controller` from the document's scroll notifications. The handler
/// stays registered for the lifetime of the page.
pub fn wire_scroll(
    window: &web::Window,
    document: &web::Document,
    controller: ParallaxController<StyledElement>,
) -> anyhow::Result<()> {
    let window_scroll = window.clone();
    let closure = Closure::wrap(Box::new(move || match window_scroll.scroll_y() {
        Ok(y) => controller.on_scroll(y),
        Err(e) => log::warn!("[scroll] scrollY error: {:?}", e),
    }) as Box<dyn FnMut()>);
    document
        .add_event_listener_with_callback(SCROLL_EVENT, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    Ok(())
}
