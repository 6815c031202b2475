use serde::{Deserialize, Serialize};

use crate::chat::client::ChatError;

pub const PENDING_TEXT: &str = "Thinking...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub hidden: bool,
    pub is_error: bool,
    pub pending: bool,
}

impl ChatMessage {
    fn user(text: String) -> Self {
        Self {
            role: Role::User,
            text,
            hidden: false,
            is_error: false,
            pending: false,
        }
    }

    fn model(text: String, is_error: bool) -> Self {
        Self {
            role: Role::Model,
            text,
            hidden: false,
            is_error,
            pending: false,
        }
    }
}

/// One message in the completion API's wire format.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CompletionMessage {
    pub role: String,
    pub content: String,
}

impl CompletionMessage {
    fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatHistory {
    context: String,
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    /// Starts a conversation primed with the company context, which is
    /// sent to the model but never shown.
    pub fn seeded(context: &str) -> Self {
        Self {
            context: context.to_string(),
            messages: vec![ChatMessage {
                role: Role::Model,
                text: context.to_string(),
                hidden: true,
                is_error: false,
                pending: false,
            }],
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.messages.iter().any(|m| m.pending)
    }

    pub fn visible(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(|m| !m.hidden)
    }

    /// Records the user's message and a placeholder for the reply.
    /// Returns the request to send, or `None` for blank input or while a
    /// reply is still outstanding.
    pub fn submit(&mut self, raw: &str) -> Option<Vec<CompletionMessage>> {
        let text = raw.trim();
        if text.is_empty() || self.is_waiting() {
            return None;
        }
        self.messages.push(ChatMessage::user(text.to_string()));
        let request = self.request();
        self.messages.push(ChatMessage {
            pending: true,
            ..ChatMessage::model(PENDING_TEXT.to_string(), false)
        });
        Some(request)
    }

    pub fn resolve(&mut self, reply: Result<String, ChatError>) {
        self.messages.retain(|m| !m.pending);
        let message = match reply {
            Ok(text) => ChatMessage::model(text, false),
            Err(e) => ChatMessage::model(e.to_string(), true),
        };
        self.messages.push(message);
    }

    fn request(&self) -> Vec<CompletionMessage> {
        let turns = self
            .messages
            .iter()
            .filter(|m| !m.hidden && !m.pending && !m.is_error)
            .map(|m| match m.role {
                Role::User => CompletionMessage::new("user", &m.text),
                Role::Model => CompletionMessage::new("assistant", &m.text),
            });
        std::iter::once(CompletionMessage::new("system", &self.context))
            .chain(turns)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_input_is_not_sent() {
        let mut history = ChatHistory::seeded("context");
        assert_eq!(history.submit("   \n"), None);
        assert_eq!(history.visible().count(), 0);
    }

    #[test]
    fn submit_adds_message_and_placeholder() {
        let mut history = ChatHistory::seeded("context");
        let request = history.submit("  What do you build?  ").unwrap();
        assert_eq!(
            request,
            vec![
                CompletionMessage::new("system", "context"),
                CompletionMessage::new("user", "What do you build?"),
            ]
        );
        let visible: Vec<_> = history.visible().collect();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].text, "What do you build?");
        assert!(visible[1].pending);
        assert!(history.is_waiting());
    }

    #[test]
    fn second_message_waits_for_the_first_reply() {
        let mut history = ChatHistory::seeded("context");
        history.submit("one").unwrap();
        assert_eq!(history.submit("two"), None);
    }

    #[test]
    fn resolve_replaces_placeholder_and_feeds_next_request() {
        let mut history = ChatHistory::seeded("context");
        history.submit("hi").unwrap();
        history.resolve(Ok("Hello!".to_string()));
        assert!(!history.is_waiting());

        let request = history.submit("pricing?").unwrap();
        let roles: Vec<_> = request.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["system", "user", "assistant", "user"]);
        assert_eq!(request[2].content, "Hello!");
    }

    #[test]
    fn errors_are_shown_but_not_sent_back() {
        let mut history = ChatHistory::seeded("context");
        history.submit("hi").unwrap();
        history.resolve(Err(ChatError::EmptyReply));
        let last = history.visible().last().unwrap();
        assert!(last.is_error);
        assert_eq!(last.text, ChatError::EmptyReply.to_string());

        let request = history.submit("again").unwrap();
        assert_eq!(request.len(), 3);
    }
}
