use log::Level;

pub const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const CHAT_MODEL: &str = "gpt-4o";
pub const CHAT_TEMPERATURE: f32 = 0.7;

/// Baked in at build time: `UPPERFLOOR_OPENAI_KEY=... trunk build`.
pub fn chat_api_key() -> Option<&'static str> {
    option_env!("UPPERFLOOR_OPENAI_KEY").filter(|key| !key.is_empty())
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const COMPANY_CONTEXT: &str = "You are the assistant on the Upper Floor website. \
Upper Floor is an AI consulting company that helps businesses adopt AI in three stages: \
identify where AI fits in the business, educate the team to work with it, and develop \
custom AI agents and automations that run in production. \
Answer questions about Upper Floor's services, process and results briefly and politely, \
in the language the visitor writes in. If a question is not about Upper Floor or AI \
adoption, say so and steer back. If the visitor wants a quote or a meeting, ask them to \
leave their details in the contact form.";
