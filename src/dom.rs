use parallax_core::{ElementLookup, ParallaxError, StyleTarget};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `document.querySelector` as the controller's element lookup.
pub struct DocumentLookup<'a> {
    pub document: &'a web::Document,
}

impl ElementLookup for DocumentLookup<'_> {
    type Element = StyledElement;

    fn query(&self, selector: &str) -> Result<Option<StyledElement>, ParallaxError> {
        let el = match self.document.query_selector(selector) {
            Ok(el) => el,
            Err(e) => {
                log::error!("querySelector({}) error: {:?}", selector, e);
                None
            }
        };
        match el {
            Some(el) => el
                .dyn_into::<web::HtmlElement>()
                .map(|html| Some(StyledElement(html)))
                .map_err(|_| ParallaxError::NotStylable {
                    selector: selector.to_string(),
                }),
            None => Ok(None),
        }
    }
}

/// An `HtmlElement` written through its inline `style` declaration.
pub struct StyledElement(pub web::HtmlElement);

impl StyleTarget for StyledElement {
    #[inline]
    fn set_style_property(&self, property: &str, value: &str) {
        _ = self.0.style().set_property(property, value);
    }
}
