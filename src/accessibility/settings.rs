use std::rc::Rc;
use yew::prelude::*;

pub const FONT_SIZE_MIN: u16 = 50;
pub const FONT_SIZE_MAX: u16 = 200;
pub const FONT_SIZE_DEFAULT: u16 = 100;
pub const SPACING_MAX: u8 = 5;

/// Document-wide color treatment. Only one can be active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisualMode {
    #[default]
    Normal,
    Dark,
    HighContrast,
    Inverted,
    BlackWhite,
}

impl VisualMode {
    #[cfg(test)]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(VisualMode::Normal),
            "dark" => Some(VisualMode::Dark),
            "high-contrast" => Some(VisualMode::HighContrast),
            "inverted" => Some(VisualMode::Inverted),
            "black-white" => Some(VisualMode::BlackWhite),
            _ => None,
        }
    }

    /// Pressing an active mode button goes back to normal.
    pub fn toggled(self, target: VisualMode) -> VisualMode {
        if self == target {
            VisualMode::Normal
        } else {
            target
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BigCursor {
    #[default]
    None,
    Light,
    Dark,
}

impl BigCursor {
    #[cfg(test)]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(BigCursor::None),
            "light" => Some(BigCursor::Light),
            "dark" => Some(BigCursor::Dark),
            _ => None,
        }
    }

    pub fn toggled(self, target: BigCursor) -> BigCursor {
        if self == target {
            BigCursor::None
        } else {
            target
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AccessibilitySettings {
    pub font_size_percent: u16,
    pub word_spacing_level: u8,
    pub letter_spacing_level: u8,
    pub visual_mode: VisualMode,
    pub big_cursor: BigCursor,
    pub reading_guide_enabled: bool,
    pub animations_stopped: bool,
    pub underline_links: bool,
    pub highlight_headers: bool,
    pub readable_font: bool,
    pub hide_images: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            font_size_percent: FONT_SIZE_DEFAULT,
            word_spacing_level: 0,
            letter_spacing_level: 0,
            visual_mode: VisualMode::Normal,
            big_cursor: BigCursor::None,
            reading_guide_enabled: false,
            animations_stopped: false,
            underline_links: false,
            highlight_headers: false,
            readable_font: false,
            hide_images: false,
        }
    }
}

/// Partial update. Numeric fields take any `i32` and get clamped on merge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsPatch {
    pub font_size_percent: Option<i32>,
    pub word_spacing_level: Option<i32>,
    pub letter_spacing_level: Option<i32>,
    pub visual_mode: Option<VisualMode>,
    pub big_cursor: Option<BigCursor>,
    pub reading_guide_enabled: Option<bool>,
    pub animations_stopped: Option<bool>,
    pub underline_links: Option<bool>,
    pub highlight_headers: Option<bool>,
    pub readable_font: Option<bool>,
    pub hide_images: Option<bool>,
}

#[cfg(test)]
impl SettingsPatch {
    /// Unknown names leave the field untouched.
    pub fn visual_mode_named(mut self, name: &str) -> Self {
        if let Some(mode) = VisualMode::from_name(name) {
            self.visual_mode = Some(mode);
        }
        self
    }

    pub fn big_cursor_named(mut self, name: &str) -> Self {
        if let Some(cursor) = BigCursor::from_name(name) {
            self.big_cursor = Some(cursor);
        }
        self
    }
}

fn clamp_font_size(value: i32) -> u16 {
    value.clamp(FONT_SIZE_MIN as i32, FONT_SIZE_MAX as i32) as u16
}

fn clamp_spacing(value: i32) -> u8 {
    value.clamp(0, SPACING_MAX as i32) as u8
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsStore {
    current: AccessibilitySettings,
}

impl SettingsStore {
    pub fn get(&self) -> AccessibilitySettings {
        self.current.clone()
    }

    pub fn update(&mut self, patch: SettingsPatch) -> AccessibilitySettings {
        let s = &mut self.current;
        if let Some(v) = patch.font_size_percent {
            s.font_size_percent = clamp_font_size(v);
        }
        if let Some(v) = patch.word_spacing_level {
            s.word_spacing_level = clamp_spacing(v);
        }
        if let Some(v) = patch.letter_spacing_level {
            s.letter_spacing_level = clamp_spacing(v);
        }
        if let Some(v) = patch.visual_mode {
            s.visual_mode = v;
        }
        if let Some(v) = patch.big_cursor {
            s.big_cursor = v;
        }
        if let Some(v) = patch.reading_guide_enabled {
            s.reading_guide_enabled = v;
        }
        if let Some(v) = patch.animations_stopped {
            s.animations_stopped = v;
        }
        if let Some(v) = patch.underline_links {
            s.underline_links = v;
        }
        if let Some(v) = patch.highlight_headers {
            s.highlight_headers = v;
        }
        if let Some(v) = patch.readable_font {
            s.readable_font = v;
        }
        if let Some(v) = patch.hide_images {
            s.hide_images = v;
        }
        self.get()
    }

    pub fn reset(&mut self) -> AccessibilitySettings {
        self.current = AccessibilitySettings::default();
        self.get()
    }
}

pub enum StoreAction {
    Update(SettingsPatch),
    Reset,
}

impl Reducible for SettingsStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            StoreAction::Update(patch) => {
                next.update(patch);
            }
            StoreAction::Reset => {
                next.reset();
            }
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn font_size_is_clamped_not_rejected() {
        let mut store = SettingsStore::default();
        for (input, expected) in [(10, 50), (-400, 50), (75, 75), (201, 200), (i32::MAX, 200)] {
            let snapshot = store.update(SettingsPatch {
                font_size_percent: Some(input),
                ..Default::default()
            });
            assert_eq!(snapshot.font_size_percent, expected, "input {}", input);
        }
    }

    #[test]
    fn unaligned_font_size_is_kept() {
        let mut store = SettingsStore::default();
        let snapshot = store.update(SettingsPatch {
            font_size_percent: Some(137),
            ..Default::default()
        });
        assert_eq!(snapshot.font_size_percent, 137);
    }

    #[test]
    fn spacing_levels_are_clamped() {
        let mut store = SettingsStore::default();
        let snapshot = store.update(SettingsPatch {
            word_spacing_level: Some(9),
            letter_spacing_level: Some(-2),
            ..Default::default()
        });
        assert_eq!(snapshot.word_spacing_level, 5);
        assert_eq!(snapshot.letter_spacing_level, 0);
    }

    #[test]
    fn update_merges_only_given_fields() {
        let mut store = SettingsStore::default();
        store.update(SettingsPatch {
            underline_links: Some(true),
            font_size_percent: Some(120),
            ..Default::default()
        });
        let snapshot = store.update(SettingsPatch {
            hide_images: Some(true),
            ..Default::default()
        });
        assert!(snapshot.underline_links);
        assert!(snapshot.hide_images);
        assert_eq!(snapshot.font_size_percent, 120);
    }

    #[test]
    fn cursor_choices_replace_each_other() {
        let mut store = SettingsStore::default();
        let current = store.get().big_cursor;
        store.update(SettingsPatch {
            big_cursor: Some(current.toggled(BigCursor::Light)),
            ..Default::default()
        });
        let current = store.get().big_cursor;
        let snapshot = store.update(SettingsPatch {
            big_cursor: Some(current.toggled(BigCursor::Dark)),
            ..Default::default()
        });
        assert_eq!(snapshot.big_cursor, BigCursor::Dark);
    }

    #[test]
    fn pressing_active_mode_returns_to_normal() {
        assert_eq!(VisualMode::Dark.toggled(VisualMode::Dark), VisualMode::Normal);
        assert_eq!(VisualMode::Dark.toggled(VisualMode::Inverted), VisualMode::Inverted);
        assert_eq!(BigCursor::Light.toggled(BigCursor::Light), BigCursor::None);
    }

    #[test]
    fn unknown_names_keep_previous_values() {
        let mut store = SettingsStore::default();
        store.update(SettingsPatch::default().visual_mode_named("dark").big_cursor_named("light"));
        let snapshot = store.update(
            SettingsPatch::default()
                .visual_mode_named("sepia")
                .big_cursor_named("huge"),
        );
        assert_eq!(snapshot.visual_mode, VisualMode::Dark);
        assert_eq!(snapshot.big_cursor, BigCursor::Light);
    }

    #[test]
    fn reset_matches_a_fresh_store() {
        let mut store = SettingsStore::default();
        store.update(SettingsPatch {
            font_size_percent: Some(180),
            word_spacing_level: Some(3),
            letter_spacing_level: Some(2),
            visual_mode: Some(VisualMode::HighContrast),
            big_cursor: Some(BigCursor::Dark),
            reading_guide_enabled: Some(true),
            animations_stopped: Some(true),
            underline_links: Some(true),
            highlight_headers: Some(true),
            readable_font: Some(true),
            hide_images: Some(true),
        });
        assert_eq!(store.reset(), SettingsStore::default().get());
    }

    #[test]
    fn reducer_applies_actions() {
        let store = Rc::new(SettingsStore::default());
        let store = store.reduce(StoreAction::Update(SettingsPatch {
            readable_font: Some(true),
            ..Default::default()
        }));
        assert!(store.get().readable_font);
        let store = store.reduce(StoreAction::Reset);
        assert_eq!(store.get(), AccessibilitySettings::default());
    }
}
