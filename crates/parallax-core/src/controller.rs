use crate::layers::{Layer, Role, DEFAULT_LAYERS};
use crate::style::{format_px, ElementLookup, StyleTarget};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParallaxError {
    #[error("missing element for {role} layer ({selector})")]
    MissingElement { role: Role, selector: &'static str },
    #[error("element matched by {selector} cannot be styled")]
    NotStylable { selector: String },
}

/// A layer together with the element it was resolved to.
#[derive(Debug)]
pub struct RegisteredLayer<E> {
    pub layer: Layer,
    pub element: E,
}

/// Translates the page scroll offset into per-layer margins.
///
/// Elements are resolved once in [`ParallaxController::resolve`] and held for
/// the lifetime of the controller. [`ParallaxController::on_scroll`] is the
/// notification entry point; it writes every layer on every call.
#[derive(Debug)]
pub struct ParallaxController<E> {
    layers: Vec<RegisteredLayer<E>>,
}

impl<E: StyleTarget> ParallaxController<E> {
    /// Resolve the default scene against `lookup`.
    pub fn resolve<L>(lookup: &L) -> Result<Self, ParallaxError>
    where
        L: ElementLookup<Element = E>,
    {
        Self::resolve_layers(lookup, &DEFAULT_LAYERS)
    }

    /// Resolve an explicit layer table, one lookup per layer in table order.
    /// Stops at the first selector that matches nothing.
    pub fn resolve_layers<L>(lookup: &L, table: &[Layer]) -> Result<Self, ParallaxError>
    where
        L: ElementLookup<Element = E>,
    {
        let mut layers = Vec::with_capacity(table.len());
        for layer in table {
            let element = lookup
                .query(layer.selector)?
                .ok_or(ParallaxError::MissingElement {
                    role: layer.role,
                    selector: layer.selector,
                })?;
            log::debug!("[init] {} -> {}", layer.role, layer.selector);
            layers.push(RegisteredLayer {
                layer: *layer,
                element,
            });
        }
        Ok(Self { layers })
    }

    /// Apply the margins for scroll offset `scroll_y` to every layer.
    pub fn on_scroll(&self, scroll_y: f64) {
        log::trace!("[scroll] y={}", scroll_y);
        for registered in &self.layers {
            let layer = &registered.layer;
            let value = format_px(layer.offset_px(scroll_y));
            registered
                .element
                .set_style_property(layer.edge.css_property(), &value);
        }
    }
}

impl<E> ParallaxController<E> {
    /// Margins that [`ParallaxController::on_scroll`] would write, without
    /// touching any element.
    pub fn offsets(&self, scroll_y: f64) -> impl Iterator<Item = (&Layer, f64)> + '_ {
        self.layers
            .iter()
            .map(move |r| (&r.layer, r.layer.offset_px(scroll_y)))
    }

    pub fn layers(&self) -> &[RegisteredLayer<E>] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
