// Recording fakes for the host seams, shared by the integration tests.

use parallax_core::{ElementLookup, ParallaxError, StyleTarget};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub type WriteLog = Rc<RefCell<Vec<(String, String, String)>>>;

/// Element fake: every write lands in the shared log as (selector, property, value).
#[derive(Debug)]
pub struct RecordingElement {
    pub selector: String,
    pub writes: WriteLog,
}

impl StyleTarget for RecordingElement {
    fn set_style_property(&self, property: &str, value: &str) {
        self.writes.borrow_mut().push((
            self.selector.clone(),
            property.to_string(),
            value.to_string(),
        ));
    }
}

/// Document fake holding a fixed set of selectors.
pub struct FakeDocument {
    present: Vec<String>,
    pub queries: RefCell<Vec<String>>,
    pub writes: WriteLog,
}

impl FakeDocument {
    pub fn with(selectors: &[&str]) -> Self {
        Self {
            present: selectors.iter().map(|s| s.to_string()).collect(),
            queries: RefCell::new(Vec::new()),
            writes: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn landing_page() -> Self {
        Self::with(&[".title", ".bush2", ".mountain1", ".mountain2", ".main_logo"])
    }

    /// Current inline style, last write wins per (selector, property).
    pub fn style_state(&self) -> HashMap<(String, String), String> {
        let mut state = HashMap::new();
        for (sel, prop, value) in self.writes.borrow().iter() {
            state.insert((sel.clone(), prop.clone()), value.clone());
        }
        state
    }

    pub fn style(&self, selector: &str, property: &str) -> Option<String> {
        self.style_state()
            .get(&(selector.to_string(), property.to_string()))
            .cloned()
    }
}

impl ElementLookup for FakeDocument {
    type Element = RecordingElement;

    fn query(&self, selector: &str) -> Result<Option<RecordingElement>, ParallaxError> {
        self.queries.borrow_mut().push(selector.to_string());
        Ok(self
            .present
            .iter()
            .any(|s| s == selector)
            .then(|| RecordingElement {
                selector: selector.to_string(),
                writes: self.writes.clone(),
            }))
    }
}
