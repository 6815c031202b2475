use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

pub const READING_GUIDE_ID: &str = "reading-guide";

// Holds the element's own inline `display` while it is hidden.
const HIDDEN_MARKER: &str = "data-a11y-display";
// Holds the element's own text while a frozen value is shown instead.
const FROZEN_MARKER: &str = "data-a11y-text";

const READING_GUIDE_CSS: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 3px; \
    background-color: #38bdf8; z-index: 9999; pointer-events: none; \
    box-shadow: 0 0 8px rgba(56, 189, 248, 0.6);";

/// Everything the accessibility engine is allowed to do to the page.
///
/// Lookups of elements that are not on the page are silent no-ops.
pub trait PresentationTarget {
    /// Handle for a mounted reading guide (overlay plus its listener).
    type Guide;

    fn set_root_font_size(&mut self, value: Option<&str>);
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    /// Creates the `<style>` element with this id, or replaces its content.
    fn upsert_style(&mut self, id: &str, css: &str);
    fn remove_style(&mut self, id: &str);
    /// Hides every element matching `selector`, or restores the ones this
    /// target hid earlier.
    fn set_hidden(&mut self, selector: &str, hidden: bool);
    /// Shows `text` in place of the element's own text, or puts the
    /// element's own text back when `text` is `None`.
    fn set_frozen_text(&mut self, element_id: &str, text: Option<&str>);
    fn mount_guide(&mut self) -> Option<Self::Guide>;
    fn unmount_guide(&mut self, guide: Self::Guide);
}

pub struct BrowserGuide {
    element: HtmlElement,
    listener: Closure<dyn FnMut(MouseEvent)>,
}

pub struct BrowserDocument {
    document: Document,
    root: HtmlElement,
    body: HtmlElement,
}

impl BrowserDocument {
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let root = document.document_element()?.dyn_into::<HtmlElement>().ok()?;
        let body = document.body()?;
        Some(Self { document, root, body })
    }

    fn matching(&self, selector: &str) -> Vec<HtmlElement> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            debug!("invalid selector {}", selector);
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }
}

impl PresentationTarget for BrowserDocument {
    type Guide = BrowserGuide;

    fn set_root_font_size(&mut self, value: Option<&str>) {
        let style = self.root.style();
        let _ = match value {
            Some(size) => style.set_property("font-size", size),
            None => style.remove_property("font-size").map(|_| ()),
        };
    }

    fn add_class(&mut self, class: &str) {
        let _ = self.body.class_list().add_1(class);
    }

    fn remove_class(&mut self, class: &str) {
        let _ = self.body.class_list().remove_1(class);
    }

    fn upsert_style(&mut self, id: &str, css: &str) {
        if let Some(existing) = self.document.get_element_by_id(id) {
            existing.set_text_content(Some(css));
            return;
        }
        let Some(head) = self.document.head() else {
            return;
        };
        if let Ok(style) = self.document.create_element("style") {
            style.set_id(id);
            style.set_text_content(Some(css));
            if head.append_child(&style).is_err() {
                warn!("could not inject style {}", id);
            }
        }
    }

    fn remove_style(&mut self, id: &str) {
        if let Some(existing) = self.document.get_element_by_id(id) {
            existing.remove();
        }
    }

    fn set_hidden(&mut self, selector: &str, hidden: bool) {
        for element in self.matching(selector) {
            let marked = element.has_attribute(HIDDEN_MARKER);
            let style = element.style();
            if hidden && !marked {
                let previous = style.get_property_value("display").unwrap_or_default();
                let _ = element.set_attribute(HIDDEN_MARKER, &previous);
                let _ = style.set_property("display", "none");
            } else if !hidden && marked {
                let previous = element.get_attribute(HIDDEN_MARKER).unwrap_or_default();
                let _ = if previous.is_empty() {
                    style.remove_property("display").map(|_| ())
                } else {
                    style.set_property("display", &previous)
                };
                let _ = element.remove_attribute(HIDDEN_MARKER);
            }
        }
    }

    fn set_frozen_text(&mut self, element_id: &str, text: Option<&str>) {
        let Some(element) = self.document.get_element_by_id(element_id) else {
            return;
        };
        let marked = element.has_attribute(FROZEN_MARKER);
        match text {
            Some(text) => {
                if !marked {
                    let own = element.text_content().unwrap_or_default();
                    let _ = element.set_attribute(FROZEN_MARKER, &own);
                }
                element.set_text_content(Some(text));
            }
            None if marked => {
                let own = element.get_attribute(FROZEN_MARKER).unwrap_or_default();
                element.set_text_content(Some(&own));
                let _ = element.remove_attribute(FROZEN_MARKER);
            }
            None => {}
        }
    }

    fn mount_guide(&mut self) -> Option<BrowserGuide> {
        if let Some(stale) = self.document.get_element_by_id(READING_GUIDE_ID) {
            stale.remove();
        }

        let element = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        element.set_id(READING_GUIDE_ID);
        element.style().set_css_text(READING_GUIDE_CSS);
        self.body.append_child(&element).ok()?;

        let moved = element.clone();
        let listener = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            let style = moved.style();
            let _ = style.set_property("transition", "none");
            let _ = style.set_property("top", &format!("{}px", e.client_y()));
        });

        if self
            .document
            .add_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref())
            .is_err()
        {
            element.remove();
            return None;
        }

        Some(BrowserGuide { element, listener })
    }

    fn unmount_guide(&mut self, guide: BrowserGuide) {
        let _ = self
            .document
            .remove_event_listener_with_callback("mousemove", guide.listener.as_ref().unchecked_ref());
        guide.element.remove();
    }
}
