//! The transcript — an ordered, append-only sequence of messages.

use serde::{Deserialize, Serialize};

use crate::types::{Message, Sender};

/// Append-only; insertion order is display order. Never reordered or
/// truncated during a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// How many agent messages exist — the selector's turn counter.
    pub fn agent_turns(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.sender == Sender::Agent)
            .count()
    }

    /// The most recent customer message, if any.
    pub fn last_customer_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.sender == Sender::Customer)
            .map(|m| m.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut convo = Conversation::new();
        convo.push(Message::new(Sender::Agent, "hello"));
        convo.push(Message::new(Sender::Customer, "hi"));
        convo.push(Message::new(Sender::Agent, "welcome"));

        let texts: Vec<&str> = convo.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["hello", "hi", "welcome"]);
    }

    #[test]
    fn test_agent_turns_counts_only_agent_messages() {
        let mut convo = Conversation::new();
        assert_eq!(convo.agent_turns(), 0);
        convo.push(Message::new(Sender::Agent, "a"));
        convo.push(Message::new(Sender::Customer, "b"));
        convo.push(Message::new(Sender::Agent, "c"));
        assert_eq!(convo.agent_turns(), 2);
    }

    #[test]
    fn test_last_customer_text() {
        let mut convo = Conversation::new();
        assert_eq!(convo.last_customer_text(), None);
        convo.push(Message::new(Sender::Agent, "a"));
        convo.push(Message::new(Sender::Customer, "first"));
        convo.push(Message::new(Sender::Customer, "second"));
        assert_eq!(convo.last_customer_text(), Some("second"));
    }
}
