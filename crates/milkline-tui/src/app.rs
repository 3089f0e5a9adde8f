//! App state, input handling, event dispatch.

use tokio::sync::mpsc;

use milkline_core::events::ChatEvent;
use milkline_core::host::HostCommand;
use milkline_core::script;
use milkline_core::types::{HostState, Message};

/// The main application state — a view over the host's broadcast stream.
pub struct App {
    pub messages: Vec<Message>,
    pub state: HostState,
    pub agent_turns: usize,
    pub input: String,
    pub input_focused: bool,
    pub scroll_offset: usize,
    pub should_quit: bool,
    pub command_tx: mpsc::Sender<HostCommand>,
}

impl App {
    pub fn new(command_tx: mpsc::Sender<HostCommand>) -> Self {
        Self {
            messages: Vec::new(),
            state: HostState::Idle,
            agent_turns: 0,
            input: String::new(),
            input_focused: true,
            scroll_offset: 0,
            should_quit: false,
            command_tx,
        }
    }

    /// Whether the input is locked because a reply is pending.
    pub fn awaiting_reply(&self) -> bool {
        self.state == HostState::AwaitingReply
    }

    /// The opener the host rolled for this session (first paragraph of the
    /// seed message), for the sidebar.
    pub fn signature_opener(&self) -> Option<&str> {
        self.messages
            .first()
            .map(|m| m.text.split("\n\n").next().unwrap_or(&m.text))
    }

    pub fn handle_event(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::Message(message) => {
                self.messages.push(message);
                // Auto-scroll to bottom
                self.scroll_offset = 0;
            }
            ChatEvent::Status(status) => {
                self.state = status.state;
                self.agent_turns = status.agent_turns;
            }
        }
    }

    /// Send the input buffer to the host. No-op while a reply is pending or
    /// when the buffer is only whitespace.
    pub async fn send_message(&mut self) {
        if self.awaiting_reply() || self.input.trim().is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.input);
        let _ = self.command_tx.send(HostCommand::Submit(text)).await;
    }

    /// Pre-fill the input with a quick prompt (1-based index). Never submits.
    pub fn prefill_prompt(&mut self, number: usize) {
        if self.awaiting_reply() {
            return;
        }
        if let Some((_, prompt)) = script::QUICK_PROMPTS.get(number.wrapping_sub(1)) {
            self.input = (*prompt).to_string();
            self.input_focused = true;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(3);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(3);
    }
}
