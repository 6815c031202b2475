use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::accessibility::document::BrowserDocument;
use crate::accessibility::drawer::{announce, AccessibilityDrawer};
use crate::accessibility::effects::{CounterTarget, EffectApplier};
use crate::accessibility::settings::{AccessibilitySettings, SettingsPatch, SettingsStore, StoreAction};
use crate::chat::widget::Chatbot;
use crate::pages::contact::ContactDrawer;
use crate::pages::stats::StatCounter;

pub const STAT_COUNTERS: [(CounterTarget, &str); 3] = [
    (
        CounterTarget {
            element_id: "stat-businesses",
            value: 934,
            suffix: "",
        },
        "businesses moved forward with AI",
    ),
    (
        CounterTarget {
            element_id: "stat-agents",
            value: 35,
            suffix: "",
        },
        "AI workers in the field",
    ),
    (
        CounterTarget {
            element_id: "stat-solutions",
            value: 284,
            suffix: "+",
        },
        "solutions delivered with Upper Floor",
    ),
];

const PARTICLE_COUNT: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Overlay {
    Contact,
    Settings,
}

/// The contact form sits on top, so Escape closes it before the settings panel.
fn closed_by_escape(contact_open: bool, settings_open: bool) -> Option<Overlay> {
    if contact_open {
        Some(Overlay::Contact)
    } else if settings_open {
        Some(Overlay::Settings)
    } else {
        None
    }
}

fn counters() -> Vec<CounterTarget> {
    STAT_COUNTERS.iter().map(|(counter, _)| *counter).collect()
}

#[function_component(UpperFloor)]
pub fn upper_floor() -> Html {
    let store = use_reducer(SettingsStore::default);
    let drawer_open = use_state(|| false);
    let contact_open = use_state(|| false);
    let applier = use_mut_ref(|| {
        BrowserDocument::from_window().map(|document| EffectApplier::new(document, counters()))
    });

    // Whatever the settings did to the page goes away with the page.
    {
        let applier = applier.clone();
        use_effect_with_deps(
            move |_| {
                if applier.borrow().is_none() {
                    warn!("no document available, accessibility settings are inactive");
                }
                move || {
                    if let Some(applier) = applier.borrow_mut().as_mut() {
                        applier.revert();
                    }
                }
            },
            (),
        );
    }

    {
        let applier = applier.clone();
        use_effect_with_deps(
            move |settings: &AccessibilitySettings| {
                if let Some(applier) = applier.borrow_mut().as_mut() {
                    applier.apply(settings);
                }
                || ()
            },
            store.get(),
        );
    }

    {
        let applier = applier.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if let Some(applier) = applier.borrow_mut().as_mut() {
                    applier.set_panel_open(*open);
                }
                || ()
            },
            *drawer_open,
        );
    }

    {
        let deps = (*contact_open, *drawer_open);
        let drawer_open = drawer_open.clone();
        let contact_open = contact_open.clone();
        use_effect_with_deps(
            move |(contact, drawer): &(bool, bool)| {
                let (contact, drawer) = (*contact, *drawer);
                let window = web_sys::window();
                let keydown = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                    if e.key() != "Escape" {
                        return;
                    }
                    match closed_by_escape(contact, drawer) {
                        Some(Overlay::Contact) => contact_open.set(false),
                        Some(Overlay::Settings) => drawer_open.set(false),
                        None => {}
                    }
                });
                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            deps,
        );
    }

    let on_update = {
        let store = store.clone();
        Callback::from(move |patch: SettingsPatch| store.dispatch(StoreAction::Update(patch)))
    };
    let on_reset = {
        let store = store.clone();
        Callback::from(move |_: ()| store.dispatch(StoreAction::Reset))
    };
    let toggle_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            drawer_open.set(!*drawer_open);
        })
    };
    let close_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: ()| drawer_open.set(false))
    };

    let open_contact = {
        let contact_open = contact_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            contact_open.set(true);
            announce("Contact form opened");
        })
    };
    let close_contact = {
        let contact_open = contact_open.clone();
        Callback::from(move |_: ()| contact_open.set(false))
    };

    let settings = store.get();
    let frozen = settings.animations_stopped;

    html! {
        <div class="upperfloor-container">
            <div class="background-gradient"></div>
            <div class="gradient-overlay"></div>
            <div class="dynamic-light"></div>
            <div class="floating-element floating-1"></div>
            <div class="floating-element floating-2"></div>
            <div class="water-shimmer"></div>
            {
                for (0..PARTICLE_COUNT).map(|i| html! {
                    <div
                        class="water-particle"
                        style={format!("left: {}%; animation-delay: {}s;", (i * 37) % 100, i % 7)}
                    ></div>
                })
            }

            <main>
                <section class="section hero-section" id="hero">
                    <h1 class="hero-title">{"Upper Floor"}</h1>
                    <p class="hero-subtitle">
                        {"We take businesses up a floor with AI: identify, educate, develop."}
                    </p>
                </section>

                <section class="results-section" id="results">
                    <h2 class="results-title">{"Our numbers tell the story"}</h2>
                    <div class="stats-container">
                        {
                            for STAT_COUNTERS.iter().map(|(counter, label)| html! {
                                <StatCounter counter={*counter} label={*label} frozen={frozen} />
                            })
                        }
                    </div>
                </section>

                <section class="contact-section" id="contact">
                    <h2 class="contact-title">
                        {"We look forward to helping "}<span class="highlight">{"your business"}</span>
                    </h2>
                    <div class="contact-info">
                        <a class="contact-email" href="mailto:info@upperfloor.ai">{"info@upperfloor.ai"}</a>
                    </div>
                    <div class="contact-buttons">
                        <button class="contact-btn" onclick={open_contact} aria-label="Open contact form">
                            {"Contact us "}<span class="arrow" aria-hidden="true">{"→"}</span>
                        </button>
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <a href="/terms.html" target="_blank" rel="noopener noreferrer">{"Terms"}</a>
                <a href="/privacy.html" target="_blank" rel="noopener noreferrer">{"Privacy"}</a>
                <a href="/accessibility.html" target="_blank" rel="noopener noreferrer">{"Accessibility statement"}</a>
            </footer>

            <button
                class={classes!("accessibility-btn", "visible", (*drawer_open).then(|| "drawer-open"))}
                onclick={toggle_drawer}
                aria-expanded={(*drawer_open).to_string()}
                aria-controls="accessibility-drawer"
                aria-label="Accessibility settings"
            >
                {"♿"}
            </button>
            <AccessibilityDrawer
                open={*drawer_open}
                settings={settings}
                on_update={on_update}
                on_reset={on_reset}
                on_close={close_drawer}
            />
            <ContactDrawer open={*contact_open} on_close={close_contact} />
            <Chatbot />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn counter_ids_are_unique() {
        let ids: HashSet<_> = counters().iter().map(|c| c.element_id).collect();
        assert_eq!(ids.len(), STAT_COUNTERS.len());
    }

    #[test]
    fn escape_closes_the_topmost_overlay() {
        assert_eq!(closed_by_escape(true, true), Some(Overlay::Contact));
        assert_eq!(closed_by_escape(true, false), Some(Overlay::Contact));
        assert_eq!(closed_by_escape(false, true), Some(Overlay::Settings));
        assert_eq!(closed_by_escape(false, false), None);
    }
}
