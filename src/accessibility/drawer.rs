use yew::prelude::*;
use web_sys::HtmlInputElement;
use gloo_timers::callback::Timeout;

use crate::accessibility::settings::{
    AccessibilitySettings, BigCursor, SettingsPatch, VisualMode, FONT_SIZE_MAX, FONT_SIZE_MIN,
    SPACING_MAX,
};

// Rules behind the body markers the effect applier toggles.
const ACCESSIBILITY_CSS: &str = r#"
    body.dark-mode { filter: grayscale(100%); }
    body.high-contrast { filter: contrast(160%); }
    body.high-contrast a { color: #ffff00 !important; }
    body.inverted-contrast { filter: invert(100%) hue-rotate(180deg); }
    body.inverted-contrast img { filter: invert(100%) hue-rotate(180deg); }
    body.black-white { filter: grayscale(100%) contrast(200%); }
    body.big-cursor, body.big-cursor * {
        cursor: url("data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='48' height='48'><path d='M4 4 L4 40 L14 30 L22 46 L28 43 L20 28 L34 28 Z' fill='white' stroke='black' stroke-width='2'/></svg>") 4 4, auto !important;
    }
    body.dark-big-cursor, body.dark-big-cursor * {
        cursor: url("data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='48' height='48'><path d='M4 4 L4 40 L14 30 L22 46 L28 43 L20 28 L34 28 Z' fill='black' stroke='white' stroke-width='2'/></svg>") 4 4, auto !important;
    }
    body.underline-links a { text-decoration: underline !important; }
    body.highlight-headers h1, body.highlight-headers h2, body.highlight-headers h3 {
        background: #1e293b !important;
        color: #ffffff !important;
        outline: 2px solid #38bdf8;
    }
    body.readable-font * { font-family: Arial, Helvetica, sans-serif !important; font-weight: 700 !important; }
    body.hide-images img, body.hide-images svg:not(.accessibility-drawer svg) { visibility: hidden !important; }
    .accessibility-drawer {
        position: fixed;
        top: 0;
        left: -420px;
        width: 380px;
        height: 100%;
        overflow-y: auto;
        background: #0f172a;
        color: #f8fafc;
        z-index: 10000;
        transition: left 0.3s ease-in-out;
    }
    .accessibility-drawer.open { left: 0; }
    .accessibility-drawer .setting-option.active { border-color: #38bdf8; background: #1e3a5f; }
    .sr-only {
        position: absolute;
        width: 1px;
        height: 1px;
        overflow: hidden;
        clip: rect(0 0 0 0);
        white-space: nowrap;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct AccessibilityDrawerProps {
    pub open: bool,
    pub settings: AccessibilitySettings,
    pub on_update: Callback<SettingsPatch>,
    pub on_reset: Callback<()>,
    pub on_close: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct OptionButtonProps {
    label: AttrValue,
    description: AttrValue,
    icon: AttrValue,
    active: bool,
    onclick: Callback<MouseEvent>,
}

#[function_component(OptionButton)]
fn option_button(props: &OptionButtonProps) -> Html {
    html! {
        <button
            class={classes!("setting-option", props.active.then(|| "active"))}
            onclick={props.onclick.clone()}
            aria-pressed={props.active.to_string()}
            aria-label={format!("{} - {}", props.label, props.description)}
        >
            <div class="option-icon" aria-hidden="true">{props.icon.to_string()}</div>
            <span>{props.label.to_string()}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct SliderControlProps {
    id: AttrValue,
    label: AttrValue,
    min: i32,
    max: i32,
    step: i32,
    value: i32,
    #[prop_or_default]
    unit: AttrValue,
    on_change: Callback<i32>,
}

#[function_component(SliderControl)]
fn slider_control(props: &SliderControlProps) -> Html {
    let value = props.value;
    let step = props.step;

    let decrease = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(value - step))
    };
    let increase = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(value + step))
    };
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(parsed) = input.value().parse::<i32>() {
                on_change.emit(parsed);
            }
        })
    };

    html! {
        <div class="control-section">
            <label for={props.id.clone()}>{props.label.to_string()}</label>
            <div class="slider-control">
                <button onclick={decrease} aria-label={format!("Decrease {}", props.label)}>{"−"}</button>
                <input
                    id={props.id.clone()}
                    type="range"
                    min={props.min.to_string()}
                    max={props.max.to_string()}
                    step={props.step.to_string()}
                    value={value.to_string()}
                    oninput={oninput}
                    aria-label={format!("{}: {}{}", props.label, value, props.unit)}
                />
                <span class="value" aria-live="polite">{format!("{}{}", value, props.unit)}</span>
                <button onclick={increase} aria-label={format!("Increase {}", props.label)}>{"+"}</button>
            </div>
        </div>
    }
}

/// Posts a polite live-region message and takes it down a second later.
pub(crate) fn announce(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Some(body), Ok(node)) = (document.body(), document.create_element("div")) else {
        return;
    };
    let _ = node.set_attribute("aria-live", "polite");
    let _ = node.set_attribute("aria-atomic", "true");
    node.set_class_name("sr-only");
    node.set_text_content(Some(message));
    if body.append_child(&node).is_ok() {
        Timeout::new(1_000, move || node.remove()).forget();
    }
}

#[function_component(AccessibilityDrawer)]
pub fn accessibility_drawer(props: &AccessibilityDrawerProps) -> Html {
    let settings = &props.settings;

    let send = |patch: SettingsPatch| {
        let on_update = props.on_update.clone();
        Callback::from(move |_: MouseEvent| on_update.emit(patch.clone()))
    };

    let mode_button = |mode: VisualMode, label: &'static str, description: &'static str, icon: &'static str| {
        html! {
            <OptionButton
                label={label}
                description={description}
                icon={icon}
                active={settings.visual_mode == mode}
                onclick={send(SettingsPatch {
                    visual_mode: Some(settings.visual_mode.toggled(mode)),
                    ..Default::default()
                })}
            />
        }
    };

    let cursor_button = |cursor: BigCursor, label: &'static str, description: &'static str, icon: &'static str| {
        html! {
            <OptionButton
                label={label}
                description={description}
                icon={icon}
                active={settings.big_cursor == cursor}
                onclick={send(SettingsPatch {
                    big_cursor: Some(settings.big_cursor.toggled(cursor)),
                    ..Default::default()
                })}
            />
        }
    };

    let numeric = |field: fn(i32) -> SettingsPatch| {
        let on_update = props.on_update.clone();
        Callback::from(move |value: i32| on_update.emit(field(value)))
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| {
            on_reset.emit(());
            announce("Accessibility settings were reset");
        })
    };

    html! {
        <div
            id="accessibility-drawer"
            class={classes!("accessibility-drawer", props.open.then(|| "open"))}
            role="dialog"
            aria-modal="true"
            aria-hidden={(!props.open).to_string()}
            aria-labelledby="accessibility-drawer-title"
        >
            <style>{ACCESSIBILITY_CSS}</style>
            <div class="drawer-header">
                <button class="close-btn" onclick={on_close} aria-label="Close accessibility menu">{"✕"}</button>
                <h2 id="accessibility-drawer-title">{"Accessibility"}</h2>
            </div>

            <div class="drawer-content">
                <div class="settings-row" role="group" aria-label="Display modes">
                    { mode_button(VisualMode::Dark, "Grayscale", "render the site in shades of gray", "🌫️") }
                    { mode_button(VisualMode::HighContrast, "High contrast", "increase contrast for easier reading", "⚡") }
                    { mode_button(VisualMode::Inverted, "Inverted contrast", "invert the site colors", "🔄") }
                </div>

                <div class="settings-row" role="group" aria-label="More display modes">
                    { mode_button(VisualMode::BlackWhite, "Black and white", "use only black and white", "◐") }
                    <OptionButton
                        label="Stop animations"
                        description="stop all motion including the background"
                        icon="⏸️"
                        active={settings.animations_stopped}
                        onclick={send(SettingsPatch {
                            animations_stopped: Some(!settings.animations_stopped),
                            ..Default::default()
                        })}
                    />
                    <OptionButton
                        label="Readable font"
                        description="make all text bold and plain"
                        icon="𝐀"
                        active={settings.readable_font}
                        onclick={send(SettingsPatch {
                            readable_font: Some(!settings.readable_font),
                            ..Default::default()
                        })}
                    />
                </div>

                <SliderControl
                    id="font-size-slider"
                    label="Font size"
                    min={FONT_SIZE_MIN as i32}
                    max={FONT_SIZE_MAX as i32}
                    step={10}
                    value={settings.font_size_percent as i32}
                    unit="%"
                    on_change={numeric(|v| SettingsPatch { font_size_percent: Some(v), ..Default::default() })}
                />
                <SliderControl
                    id="word-spacing-slider"
                    label="Word spacing"
                    min={0}
                    max={SPACING_MAX as i32}
                    step={1}
                    value={settings.word_spacing_level as i32}
                    on_change={numeric(|v| SettingsPatch { word_spacing_level: Some(v), ..Default::default() })}
                />
                <SliderControl
                    id="letter-spacing-slider"
                    label="Letter spacing"
                    min={0}
                    max={SPACING_MAX as i32}
                    step={1}
                    value={settings.letter_spacing_level as i32}
                    on_change={numeric(|v| SettingsPatch { letter_spacing_level: Some(v), ..Default::default() })}
                />

                <div class="settings-grid" role="group" aria-label="More options">
                    <OptionButton
                        label="Highlight headers"
                        description="put headings on a dark background"
                        icon="🏷️"
                        active={settings.highlight_headers}
                        onclick={send(SettingsPatch {
                            highlight_headers: Some(!settings.highlight_headers),
                            ..Default::default()
                        })}
                    />
                    <OptionButton
                        label="Underline links"
                        description="underline every link"
                        icon="🔗"
                        active={settings.underline_links}
                        onclick={send(SettingsPatch {
                            underline_links: Some(!settings.underline_links),
                            ..Default::default()
                        })}
                    />
                    { cursor_button(BigCursor::Light, "Big cursor", "use a large white cursor", "⚪") }
                    <OptionButton
                        label="Reading guide"
                        description="show a line that follows the pointer"
                        icon="📏"
                        active={settings.reading_guide_enabled}
                        onclick={send(SettingsPatch {
                            reading_guide_enabled: Some(!settings.reading_guide_enabled),
                            ..Default::default()
                        })}
                    />
                    <OptionButton
                        label="Hide images"
                        description="hide every image on the page"
                        icon="🚫"
                        active={settings.hide_images}
                        onclick={send(SettingsPatch {
                            hide_images: Some(!settings.hide_images),
                            ..Default::default()
                        })}
                    />
                    { cursor_button(BigCursor::Dark, "Big dark cursor", "use a large black cursor", "⚫") }
                </div>

                <div class="control-section">
                    <button onclick={on_reset} class="reset-button" aria-label="Reset all accessibility settings">
                        {"Reset settings"}
                    </button>
                </div>

                <div class="drawer-footer">
                    <div class="footer-links">
                        <a href="/accessibility.html" target="_blank" rel="noopener noreferrer">{"Accessibility statement"}</a>
                        <span>{" | "}</span>
                        <a href="/terms.html" target="_blank" rel="noopener noreferrer">{"Terms"}</a>
                    </div>
                </div>
            </div>
        </div>
    }
}
