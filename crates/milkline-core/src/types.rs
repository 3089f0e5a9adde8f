//! Core types — Sender, Message, HostState, StatusData.

use serde::{Deserialize, Serialize};

// ── Sender roles ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Agent,
    Customer,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::Agent => write!(f, "agent"),
            Sender::Customer => write!(f, "customer"),
        }
    }
}

// ── Messages ──

/// One entry in the transcript. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// Display-formatted local time, e.g. "7:45 AM".
    pub timestamp: String,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender,
            text: text.into(),
            timestamp: format_time(),
        }
    }
}

/// Current wall-clock time as an hour:minute display string.
pub fn format_time() -> String {
    chrono::Local::now().format("%-I:%M %p").to_string()
}

// ── Host state ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostState {
    Idle,
    AwaitingReply,
}

impl std::fmt::Display for HostState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostState::Idle => write!(f, "idle"),
            HostState::AwaitingReply => write!(f, "awaiting reply"),
        }
    }
}

// ── Status (broadcast to frontends) ──

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusData {
    pub state: HostState,
    pub agent_turns: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::new(Sender::Customer, "hello");
        let b = Message::new(Sender::Customer, "hello");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::Agent).unwrap(), "\"agent\"");
        assert_eq!(
            serde_json::to_string(&Sender::Customer).unwrap(),
            "\"customer\""
        );
    }
}
