use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use super::document::PresentationTarget;
use super::reading_guide::ReadingGuide;
use super::settings::{AccessibilitySettings, BigCursor, VisualMode};

pub const VISUAL_MODE_CLASSES: [&str; 4] =
    ["dark-mode", "high-contrast", "inverted-contrast", "black-white"];
pub const CURSOR_CLASSES: [&str; 2] = ["big-cursor", "dark-big-cursor"];
pub const ANIMATIONS_STOPPED_CLASS: &str = "animations-stopped";
pub const PANEL_OPEN_CLASS: &str = "accessibility-drawer-open";

const TOGGLE_CLASSES: [&str; 6] = [
    "underline-links",
    "highlight-headers",
    "readable-font",
    "hide-images",
    ANIMATIONS_STOPPED_CLASS,
    PANEL_OPEN_CLASS,
];

/// Every body marker the applier owns.
fn managed_classes() -> impl Iterator<Item = &'static str> {
    VISUAL_MODE_CLASSES
        .into_iter()
        .chain(CURSOR_CLASSES)
        .chain(TOGGLE_CLASSES)
}

pub const WORD_SPACING_STYLE_ID: &str = "accessibility-word-spacing";
pub const LETTER_SPACING_STYLE_ID: &str = "accessibility-letter-spacing";
pub const STOP_ANIMATIONS_STYLE_ID: &str = "stop-animations-style";

const MANAGED_STYLES: [&str; 3] = [
    WORD_SPACING_STYLE_ID,
    LETTER_SPACING_STYLE_ID,
    STOP_ANIMATIONS_STYLE_ID,
];

/// Background elements that only exist to move.
pub const ANIMATED_DECORATIONS: [&str; 7] = [
    ".dynamic-light",
    ".water-particle",
    ".water-shimmer",
    ".floating-element",
    ".dust-particles",
    ".rising-droplet",
    ".rising-droplet-simple",
];

/// Overlays that wash out text under high contrast.
pub const CONTRAST_DECORATIONS: [&str; 3] =
    [".floating-element", ".gradient-overlay", ".water-shimmer"];

const WORD_SPACING_UNIT_EM: f64 = 0.2;
const LETTER_SPACING_UNIT_EM: f64 = 0.05;

const STOP_ANIMATIONS_CSS: &str = r#"
*:not(.accessibility-drawer):not(.accessibility-drawer *) {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
    scroll-behavior: auto !important;
}

.dynamic-light,
.water-particle,
.water-shimmer,
.floating-element,
.dust-particles,
.rising-droplet,
.rising-droplet-simple,
.dynamic-light::before,
.dynamic-light::after {
    display: none !important;
    animation: none !important;
    transition: none !important;
}

.identify-graphic,
.educate-graphic,
.develop-graphic {
    animation: none !important;
    transition: none !important;
    transform: none !important;
    opacity: 0.3 !important;
    visibility: visible !important;
}

.background-gradient {
    background: #000000 !important;
    animation: none !important;
    transition: none !important;
}

.accessibility-drawer {
    transition: left 0.3s ease-in-out !important;
}

.accessibility-drawer .setting-option,
.accessibility-drawer button {
    transition: all 0.3s ease !important;
}
"#;

/// Counter whose animation can be cut short. `value` is the number it
/// counts up to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterTarget {
    pub element_id: &'static str,
    pub value: u32,
    pub suffix: &'static str,
}

impl CounterTarget {
    pub fn final_text(&self) -> String {
        format!("{}{}", self.value, self.suffix)
    }
}

fn mode_class(mode: VisualMode) -> Option<&'static str> {
    match mode {
        VisualMode::Normal => None,
        VisualMode::Dark => Some("dark-mode"),
        VisualMode::HighContrast => Some("high-contrast"),
        VisualMode::Inverted => Some("inverted-contrast"),
        VisualMode::BlackWhite => Some("black-white"),
    }
}

fn cursor_class(cursor: BigCursor) -> Option<&'static str> {
    match cursor {
        BigCursor::None => None,
        BigCursor::Light => Some("big-cursor"),
        BigCursor::Dark => Some("dark-big-cursor"),
    }
}

fn spacing_rule(property: &str, level: u8, unit: f64) -> Option<String> {
    (level > 0).then(|| {
        format!(
            "* {{ {}: {:.2}em !important; }}",
            property,
            level as f64 * unit
        )
    })
}

/// Full description of what the page should look like for one snapshot.
/// The default value is the untouched page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Presentation {
    pub font_size: Option<String>,
    pub classes: BTreeSet<&'static str>,
    pub styles: BTreeMap<&'static str, String>,
    pub hidden: BTreeSet<&'static str>,
    pub counters: Vec<(&'static str, String)>,
    pub reading_guide: bool,
}

impl Presentation {
    pub fn plan(
        settings: &AccessibilitySettings,
        counters: &[CounterTarget],
        panel_open: bool,
    ) -> Self {
        let mut plan = Presentation {
            font_size: Some(format!("{}%", settings.font_size_percent)),
            reading_guide: settings.reading_guide_enabled,
            ..Default::default()
        };

        if let Some(css) = spacing_rule("word-spacing", settings.word_spacing_level, WORD_SPACING_UNIT_EM) {
            plan.styles.insert(WORD_SPACING_STYLE_ID, css);
        }
        if let Some(css) = spacing_rule(
            "letter-spacing",
            settings.letter_spacing_level,
            LETTER_SPACING_UNIT_EM,
        ) {
            plan.styles.insert(LETTER_SPACING_STYLE_ID, css);
        }

        plan.classes.extend(mode_class(settings.visual_mode));
        plan.classes.extend(cursor_class(settings.big_cursor));

        for (on, class) in [
            (settings.underline_links, "underline-links"),
            (settings.highlight_headers, "highlight-headers"),
            (settings.readable_font, "readable-font"),
            (settings.hide_images, "hide-images"),
            (panel_open, PANEL_OPEN_CLASS),
        ] {
            if on {
                plan.classes.insert(class);
            }
        }

        if settings.animations_stopped {
            plan.classes.insert(ANIMATIONS_STOPPED_CLASS);
            plan.styles
                .insert(STOP_ANIMATIONS_STYLE_ID, STOP_ANIMATIONS_CSS.to_string());
            plan.hidden.extend(ANIMATED_DECORATIONS);
            plan.counters = counters
                .iter()
                .map(|c| (c.element_id, c.final_text()))
                .collect();
        }

        if settings.visual_mode == VisualMode::HighContrast {
            plan.hidden.extend(CONTRAST_DECORATIONS);
        }

        plan
    }
}

/// Sole writer of the page-wide accessibility state.
pub struct EffectApplier<D: PresentationTarget> {
    target: D,
    guide: ReadingGuide<D::Guide>,
    counters: Vec<CounterTarget>,
    panel_open: bool,
    last: Option<AccessibilitySettings>,
}

impl<D: PresentationTarget> EffectApplier<D> {
    pub fn new(target: D, counters: Vec<CounterTarget>) -> Self {
        Self {
            target,
            guide: ReadingGuide::default(),
            counters,
            panel_open: false,
            last: None,
        }
    }

    pub fn apply(&mut self, settings: &AccessibilitySettings) {
        let plan = Presentation::plan(settings, &self.counters, self.panel_open);
        debug!(
            "applying accessibility settings: {} markers, {} styles, {} hidden groups",
            plan.classes.len(),
            plan.styles.len(),
            plan.hidden.len()
        );
        self.commit(&plan);
        self.last = Some(settings.clone());
    }

    pub fn set_panel_open(&mut self, open: bool) {
        if self.panel_open == open {
            return;
        }
        self.panel_open = open;
        match self.last.clone() {
            Some(settings) => self.apply(&settings),
            None if open => self.target.add_class(PANEL_OPEN_CLASS),
            None => self.target.remove_class(PANEL_OPEN_CLASS),
        }
    }

    /// Undoes everything `apply` ever did.
    pub fn revert(&mut self) {
        debug!("reverting accessibility settings");
        self.panel_open = false;
        self.commit(&Presentation::default());
        self.last = None;
    }

    fn commit(&mut self, plan: &Presentation) {
        self.target.set_root_font_size(plan.font_size.as_deref());

        // Removals go first so two exclusive markers never coexist.
        for class in managed_classes() {
            if !plan.classes.contains(class) {
                self.target.remove_class(class);
            }
        }
        for class in &plan.classes {
            self.target.add_class(class);
        }

        for id in MANAGED_STYLES {
            match plan.styles.get(id) {
                Some(css) => self.target.upsert_style(id, css),
                None => self.target.remove_style(id),
            }
        }

        for selector in ANIMATED_DECORATIONS.iter().chain(CONTRAST_DECORATIONS.iter()) {
            if !plan.hidden.contains(selector) {
                self.target.set_hidden(selector, false);
            }
        }
        for selector in &plan.hidden {
            self.target.set_hidden(selector, true);
        }

        for counter in &self.counters {
            let frozen = plan
                .counters
                .iter()
                .find(|(element_id, _)| *element_id == counter.element_id)
                .map(|(_, text)| text.as_str());
            self.target.set_frozen_text(counter.element_id, frozen);
        }

        if plan.reading_guide {
            self.guide.enable(&mut self.target);
        } else {
            self.guide.disable(&mut self.target);
        }
    }

    #[cfg(test)]
    pub fn target(&self) -> &D {
        &self.target
    }
}
