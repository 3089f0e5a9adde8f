//! ChatEvent enum — broadcast from the host task to frontends via
//! tokio::broadcast.

use serde::{Deserialize, Serialize};

use crate::types::{Message, StatusData};

/// Events broadcast from the host task to all subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ChatEvent {
    /// A message was appended to the transcript (customer or agent).
    /// Frontends should scroll their feed to the bottom.
    #[serde(rename = "message")]
    Message(Message),

    /// Host state changed (idle / awaiting reply).
    #[serde(rename = "status")]
    Status(StatusData),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HostState, Sender};

    #[test]
    fn test_event_wire_shape() {
        let event = ChatEvent::Status(StatusData {
            state: HostState::Idle,
            agent_turns: 1,
        });
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], "status");
        assert_eq!(value["data"]["state"], "idle");

        let event = ChatEvent::Message(crate::types::Message::new(Sender::Customer, "hi"));
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], "message");
        assert_eq!(value["data"]["sender"], "customer");
    }
}
