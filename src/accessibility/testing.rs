use std::collections::{BTreeMap, BTreeSet};

use super::document::PresentationTarget;
use super::effects::{CURSOR_CLASSES, VISUAL_MODE_CLASSES};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryElement {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub display: Option<String>,
    pub text: String,
    saved_display: Option<Option<String>>,
    saved_text: Option<String>,
}

impl MemoryElement {
    pub fn with_class(class: &str) -> Self {
        Self {
            classes: vec![class.to_string()],
            ..Default::default()
        }
    }

    pub fn with_id(id: &str, text: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn displayed_as(mut self, display: &str) -> Self {
        self.display = Some(display.to_string());
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.display.as_deref() == Some("none")
    }

    fn matches(&self, selector: &str) -> bool {
        match selector.strip_prefix('.') {
            Some(class) => self.classes.iter().any(|c| c == class),
            None => false,
        }
    }
}

/// In-memory page used by the engine tests.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    pub root_font_size: Option<String>,
    pub body_classes: BTreeSet<String>,
    pub styles: BTreeMap<String, String>,
    pub elements: Vec<MemoryElement>,
    pub guide_elements: usize,
    pub pointer_listeners: usize,
    /// Highest number of visual-mode markers seen on the body at once.
    pub peak_mode_markers: usize,
    /// Highest number of cursor markers seen on the body at once.
    pub peak_cursor_markers: usize,
    next_guide: u32,
}

impl MemoryDocument {
    pub fn with_elements(elements: Vec<MemoryElement>) -> Self {
        Self {
            elements,
            ..Default::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    pub fn mode_markers(&self) -> Vec<&str> {
        VISUAL_MODE_CLASSES
            .iter()
            .copied()
            .filter(|class| self.has_class(class))
            .collect()
    }

    pub fn elements_with_class(&self, class: &str) -> Vec<&MemoryElement> {
        let selector = format!(".{}", class);
        self.elements.iter().filter(|e| e.matches(&selector)).collect()
    }

    pub fn text_of(&self, id: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|e| e.id.as_deref() == Some(id))
            .map(|e| e.text.as_str())
    }

    fn record_peaks(&mut self) {
        let modes = self.mode_markers().len();
        let cursors = CURSOR_CLASSES
            .iter()
            .filter(|class| self.has_class(class))
            .count();
        self.peak_mode_markers = self.peak_mode_markers.max(modes);
        self.peak_cursor_markers = self.peak_cursor_markers.max(cursors);
    }
}

impl PresentationTarget for MemoryDocument {
    type Guide = u32;

    fn set_root_font_size(&mut self, value: Option<&str>) {
        self.root_font_size = value.map(str::to_string);
    }

    fn add_class(&mut self, class: &str) {
        self.body_classes.insert(class.to_string());
        self.record_peaks();
    }

    fn remove_class(&mut self, class: &str) {
        self.body_classes.remove(class);
    }

    fn upsert_style(&mut self, id: &str, css: &str) {
        self.styles.insert(id.to_string(), css.to_string());
    }

    fn remove_style(&mut self, id: &str) {
        self.styles.remove(id);
    }

    fn set_hidden(&mut self, selector: &str, hidden: bool) {
        for element in self.elements.iter_mut().filter(|e| e.matches(selector)) {
            match (hidden, element.saved_display.is_some()) {
                (true, false) => {
                    element.saved_display = Some(element.display.take());
                    element.display = Some("none".to_string());
                }
                (false, true) => {
                    element.display = element.saved_display.take().flatten();
                }
                _ => {}
            }
        }
    }

    fn set_frozen_text(&mut self, element_id: &str, text: Option<&str>) {
        let Some(element) = self
            .elements
            .iter_mut()
            .find(|e| e.id.as_deref() == Some(element_id))
        else {
            return;
        };
        match text {
            Some(text) => {
                if element.saved_text.is_none() {
                    element.saved_text = Some(std::mem::take(&mut element.text));
                }
                element.text = text.to_string();
            }
            None => {
                if let Some(own) = element.saved_text.take() {
                    element.text = own;
                }
            }
        }
    }

    fn mount_guide(&mut self) -> Option<u32> {
        self.guide_elements += 1;
        self.pointer_listeners += 1;
        self.next_guide += 1;
        Some(self.next_guide)
    }

    fn unmount_guide(&mut self, _guide: u32) {
        self.guide_elements -= 1;
        self.pointer_listeners -= 1;
    }
}
