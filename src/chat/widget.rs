use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::chat::client::{self, ChatError};
use crate::chat::history::{ChatHistory, ChatMessage, Role};
use crate::config;

pub enum ChatbotMsg {
    Toggle,
    Close,
    SetInput(String),
    Submit,
    Replied(Result<String, ChatError>),
}

pub struct Chatbot {
    open: bool,
    input: String,
    history: ChatHistory,
    body_ref: NodeRef,
}

fn message_view(message: &ChatMessage) -> Html {
    let role_class = match message.role {
        Role::User => "user-message",
        Role::Model => "bot-message",
    };
    html! {
        <div class={classes!("message", role_class, message.is_error.then(|| "error"), message.pending.then(|| "pending"))}>
            <p class="message-text">{message.text.clone()}</p>
        </div>
    }
}

impl Component for Chatbot {
    type Message = ChatbotMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            input: String::new(),
            history: ChatHistory::seeded(config::COMPANY_CONTEXT),
            body_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatbotMsg::Toggle => {
                self.open = !self.open;
                true
            }
            ChatbotMsg::Close => {
                self.open = false;
                true
            }
            ChatbotMsg::SetInput(text) => {
                self.input = text;
                true
            }
            ChatbotMsg::Submit => {
                let Some(messages) = self.history.submit(&self.input) else {
                    return false;
                };
                self.input.clear();
                ctx.link().send_future(async move {
                    ChatbotMsg::Replied(client::complete(messages).await)
                });
                true
            }
            ChatbotMsg::Replied(reply) => {
                self.history.resolve(reply);
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(body) = self.body_ref.cast::<web_sys::Element>() {
            body.set_scroll_top(body.scroll_height());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            ChatbotMsg::Toggle
        });
        let close = ctx.link().callback(|_| ChatbotMsg::Close);
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatbotMsg::SetInput(input.value())
        });
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ChatbotMsg::Submit
        });
        let waiting = self.history.is_waiting();

        html! {
            <div class={classes!("container", self.open.then(|| "show-chatbot"))}>
                <button onclick={toggle} id="chatbot-toggler" type="button" aria-expanded={self.open.to_string()} aria-label="Chat with us">
                    <span class="material-symbols-rounded">{"mode_comment"}</span>
                    <span class="material-symbols-rounded">{"close"}</span>
                </button>

                if self.open {
                    <div class="chatbot-popup">
                        <div class="chat-header">
                            <div class="header-info">
                                <h2 class="logo-text">{"Upper Floor AI Agent"}</h2>
                            </div>
                            <button onclick={close} class="material-symbols-rounded" type="button" aria-label="Minimize chat">
                                {"keyboard_arrow_down"}
                            </button>
                        </div>

                        <div ref={self.body_ref.clone()} class="chat-body">
                            <div class="message bot-message">
                                <p class="message-text">{"How can I help you?"}</p>
                            </div>
                            { for self.history.visible().map(message_view) }
                        </div>

                        <div class="chat-footer">
                            <form onsubmit={onsubmit} class="chat-form">
                                <input
                                    value={self.input.clone()}
                                    oninput={oninput}
                                    placeholder="Message..."
                                    class="message-input"
                                    disabled={waiting}
                                    required={true}
                                />
                                <button type="submit" id="send-message" class="material-symbols-rounded" disabled={waiting}>
                                    {"arrow_upward"}
                                </button>
                            </form>
                        </div>
                    </div>
                }
            </div>
        }
    }
}
