use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::accessibility::drawer::announce;

// Matches the drawer's slide-out transition.
const RESET_DELAY_MS: u32 = 300;

pub const COMPANY_SIZES: [(&str, &str); 5] = [
    ("1-10", "1-10 employees"),
    ("11-50", "11-50 employees"),
    ("51-200", "51-200 employees"),
    ("201-500", "201-500 employees"),
    ("501+", "501+ employees"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    CompanySize,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub company_size: String,
    pub message: String,
    pub sent: bool,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::CompanySize => &self.company_size,
            ContactField::Message => &self.message,
        }
    }

    pub fn edit(&mut self, field: ContactField, value: String) {
        if self.sent {
            return;
        }
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::CompanySize => &mut self.company_size,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Switches to the thank-you state. Returns false if it was already sent.
    pub fn submit(&mut self) -> bool {
        if self.sent {
            return false;
        }
        self.sent = true;
        true
    }

    fn filled(&self) -> usize {
        [
            ContactField::Name,
            ContactField::Email,
            ContactField::Company,
            ContactField::CompanySize,
            ContactField::Message,
        ]
        .into_iter()
        .filter(|field| !self.value(*field).trim().is_empty())
        .count()
    }
}

pub enum ContactAction {
    Edit(ContactField, String),
    Submit,
    Reset,
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.edit(field, value),
            ContactAction::Submit => {
                if next.submit() {
                    debug!("contact form sent with {} fields filled", next.filled());
                }
            }
            ContactAction::Reset => next = ContactForm::default(),
        }
        next.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactDrawerProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ContactDrawer)]
pub fn contact_drawer(props: &ContactDrawerProps) -> Html {
    let form = use_reducer(ContactForm::default);

    // The form is cleared a moment after the drawer closes, however it was closed.
    {
        let form = form.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let reset = (!*open).then(|| {
                    Timeout::new(RESET_DELAY_MS, move || form.dispatch(ContactAction::Reset))
                });
                move || drop(reset)
            },
            props.open,
        );
    }

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let edit = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Edit(field, input.value()));
        })
    };

    let on_size_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Edit(ContactField::CompanySize, select.value()));
        })
    };

    let on_message_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Edit(ContactField::Message, area.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(ContactAction::Submit);
            announce("The form was sent successfully");
        })
    };

    html! {
        <>
            <style>
                {r#"
                .contact-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.7);
                    z-index: 999;
                    opacity: 0;
                    visibility: hidden;
                    transition: opacity 0.3s ease, visibility 0.3s ease;
                }
                .contact-overlay.open { opacity: 1; visibility: visible; }
                .contact-drawer {
                    position: fixed;
                    top: 50%;
                    left: -100%;
                    transform: translateY(-50%);
                    width: 90%;
                    max-width: 570px;
                    height: 65%;
                    max-height: 825px;
                    background: #f2f2ea;
                    color: #000;
                    z-index: 1000;
                    transition: left 0.3s ease;
                    border-radius: 20px;
                    display: flex;
                    flex-direction: column;
                    overflow: hidden;
                    box-shadow: 0 0 30px rgba(0, 0, 0, 0.2);
                }
                .contact-drawer.open { left: 20px; }
                .contact-drawer .close-btn {
                    position: absolute;
                    top: 15px;
                    right: 15px;
                    min-width: 32px;
                    min-height: 32px;
                    background: transparent;
                    border: none;
                    font-size: 22px;
                    cursor: pointer;
                }
                .contact-content { flex: 1; padding: 40px; overflow-y: auto; }
                .contact-form { display: flex; flex-direction: column; gap: 28px; }
                .contact-form .form-row { display: flex; gap: 30px; }
                .contact-form .form-group { display: flex; flex-direction: column; flex: 1; }
                .contact-form input,
                .contact-form select,
                .contact-form textarea {
                    background: transparent;
                    border: none;
                    border-bottom: 2px solid rgba(0, 0, 0, 0.2);
                    padding: 8px 0;
                    font-size: 15px;
                    font-family: inherit;
                }
                .contact-form textarea { min-height: 80px; resize: none; }
                .contact-form .required { color: #dc3545; margin-left: 4px; }
                .contact-form .submit-btn {
                    align-self: flex-start;
                    min-height: 44px;
                    padding: 12px 30px;
                    border: 2px solid rgba(0, 0, 0, 0.3);
                    border-radius: 25px;
                    background: transparent;
                    cursor: pointer;
                }
                .thank-you {
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    text-align: center;
                    font-size: 20px;
                }
                .thank-you .highlight { color: #38bdf8; }
                "#}
            </style>
            <div
                class={classes!("contact-overlay", props.open.then(|| "open"))}
                onclick={on_close.clone()}
                aria-hidden="true"
            ></div>
            <div
                class={classes!("contact-drawer", props.open.then(|| "open"))}
                role="dialog"
                aria-modal="true"
                aria-hidden={(!props.open).to_string()}
                aria-labelledby="contact-form-title"
            >
                <button class="close-btn" onclick={on_close} aria-label="Close contact form">{"×"}</button>
                <div class="contact-content">
                    if form.sent {
                        <div class="thank-you">
                            <p>
                                <span class="highlight">{"Thank you for your message!"}</span>
                                {" We will get back to you soon."}
                            </p>
                        </div>
                    } else {
                        <>
                        <h1 id="contact-form-title">{"Tell us what you need"}</h1>
                        <form class="contact-form" onsubmit={onsubmit}>
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="contact-name">
                                        {"What is your name?"}
                                        <span class="required" aria-label="required field">{"*"}</span>
                                    </label>
                                    <input
                                        id="contact-name"
                                        type="text"
                                        placeholder="Full name"
                                        value={form.name.clone()}
                                        oninput={edit(ContactField::Name)}
                                        required={true}
                                        aria-required="true"
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="contact-email">
                                        {"What is your email?"}
                                        <span class="required" aria-label="required field">{"*"}</span>
                                    </label>
                                    <input
                                        id="contact-email"
                                        type="email"
                                        placeholder="Email address"
                                        value={form.email.clone()}
                                        oninput={edit(ContactField::Email)}
                                        required={true}
                                        aria-required="true"
                                    />
                                </div>
                            </div>
                            <div class="form-group">
                                <label for="contact-company">{"Company name"}</label>
                                <input
                                    id="contact-company"
                                    type="text"
                                    placeholder="Company name"
                                    value={form.company.clone()}
                                    oninput={edit(ContactField::Company)}
                                />
                            </div>
                            <div class="form-group">
                                <label for="contact-size">{"Company size"}</label>
                                <select id="contact-size" onchange={on_size_change} aria-label="Choose company size">
                                    <option value="" selected={form.company_size.is_empty()}>{"Choose company size"}</option>
                                    {
                                        for COMPANY_SIZES.iter().map(|(value, label)| html! {
                                            <option value={*value} selected={form.company_size == *value}>{*label}</option>
                                        })
                                    }
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="contact-message">{"Message"}</label>
                                <textarea
                                    id="contact-message"
                                    placeholder="Tell us more about the project"
                                    value={form.message.clone()}
                                    oninput={on_message_input}
                                />
                            </div>
                            <button type="submit" class="submit-btn">{"Send"}</button>
                        </form>
                        </>
                    }
                </div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_in() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(ContactField::Name, "Dana Levi".to_string());
        form.edit(ContactField::Email, "dana@example.com".to_string());
        form.edit(ContactField::CompanySize, "11-50".to_string());
        form
    }

    #[test]
    fn edits_land_in_their_own_field() {
        let form = filled_in();
        assert_eq!(form.value(ContactField::Name), "Dana Levi");
        assert_eq!(form.value(ContactField::Email), "dana@example.com");
        assert_eq!(form.value(ContactField::CompanySize), "11-50");
        assert_eq!(form.value(ContactField::Company), "");
        assert_eq!(form.filled(), 3);
    }

    #[test]
    fn submit_shows_thank_you_once() {
        let mut form = filled_in();
        assert!(form.submit());
        assert!(form.sent);
        assert!(!form.submit());
    }

    #[test]
    fn sent_form_ignores_edits() {
        let mut form = filled_in();
        form.submit();
        form.edit(ContactField::Name, "Someone else".to_string());
        assert_eq!(form.name, "Dana Levi");
    }

    #[test]
    fn reset_clears_fields_and_thank_you() {
        let form = Rc::new(filled_in());
        let form = form.reduce(ContactAction::Submit);
        assert!(form.sent);
        let form = form.reduce(ContactAction::Reset);
        assert_eq!(*form, ContactForm::default());
    }

    #[test]
    fn reducer_routes_edits() {
        let form = Rc::new(ContactForm::default());
        let form = form.reduce(ContactAction::Edit(ContactField::Message, "Hi".to_string()));
        assert_eq!(form.message, "Hi");
    }
}
