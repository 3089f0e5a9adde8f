//! The conversation host — owns the transcript, mediates the exchange
//! sequence, and drives the selector.
//!
//! Two layers: `Host` is the pure two-state machine (no timing, no channels),
//! and `ChatHost` is the tokio task that runs it, sleeping out the reply
//! delay and broadcasting events to frontends.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::conversation::Conversation;
use crate::events::ChatEvent;
use crate::selector;
use crate::types::{HostState, Message, Sender, StatusData};

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// A submission arrived while a reply was already pending. Frontends lock
    /// their input during AwaitingReply, so this guards the invariant rather
    /// than serving a real user path.
    #[error("a reply is already pending")]
    Busy,
}

/// Outcome of [`Host::submit`].
#[derive(Debug, Clone)]
pub enum Submitted {
    /// Customer message appended; the host is now awaiting the reply.
    Accepted(Message),
    /// Whitespace-only input; nothing appended, no state transition.
    Ignored,
}

/// The pure state machine: Idle ⇄ AwaitingReply over an append-only
/// transcript. Knows nothing about clocks or channels.
pub struct Host {
    conversation: Conversation,
    state: HostState,
    rng: StdRng,
}

impl Host {
    /// Create a host pre-seeded with the agent's opening message.
    pub fn new(rng_seed: Option<u64>) -> Self {
        let mut rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut conversation = Conversation::new();
        conversation.push(Message::new(Sender::Agent, selector::opening(&mut rng)));

        Self {
            conversation,
            state: HostState::Idle,
            rng,
        }
    }

    pub fn state(&self) -> HostState {
        self.state
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Submit customer text. Whitespace-only input is a no-op.
    pub fn submit(&mut self, text: &str) -> Result<Submitted, HostError> {
        if self.state == HostState::AwaitingReply {
            return Err(HostError::Busy);
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Submitted::Ignored);
        }

        let message = Message::new(Sender::Customer, trimmed);
        self.conversation.push(message.clone());
        self.state = HostState::AwaitingReply;
        Ok(Submitted::Accepted(message))
    }

    /// Run the selector against the pending submission and append the agent
    /// reply. No-op while Idle.
    pub fn deliver_reply(&mut self) -> Option<Message> {
        if self.state != HostState::AwaitingReply {
            return None;
        }
        let input = self
            .conversation
            .last_customer_text()
            .unwrap_or_default()
            .to_string();
        let turns = self.conversation.agent_turns();
        let reply = selector::respond(&input, turns, &mut self.rng);

        let message = Message::new(Sender::Agent, reply);
        self.conversation.push(message.clone());
        self.state = HostState::Idle;
        Some(message)
    }
}

/// Commands sent TO the host task (from the TUI).
#[derive(Debug)]
pub enum HostCommand {
    Submit(String),
    Stop,
}

/// The host as an independent tokio task: commands in via mpsc, events out
/// via broadcast. Processes one submission at a time, so a single pending
/// reply is guaranteed by construction.
pub struct ChatHost {
    host: Host,
    config: Config,
    event_tx: broadcast::Sender<ChatEvent>,
    command_tx: mpsc::Sender<HostCommand>,
    command_rx: Option<mpsc::Receiver<HostCommand>>,
}

impl ChatHost {
    pub fn new(config: Config) -> Self {
        let (event_tx, _) = broadcast::channel(256);
        let (command_tx, command_rx) = mpsc::channel(32);

        Self {
            host: Host::new(config.rng_seed),
            config,
            event_tx,
            command_tx,
            command_rx: Some(command_rx),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.event_tx.subscribe()
    }

    pub fn command_sender(&self) -> mpsc::Sender<HostCommand> {
        self.command_tx.clone()
    }

    fn broadcast(&self, event: ChatEvent) {
        let _ = self.event_tx.send(event);
    }

    fn broadcast_status(&self) {
        self.broadcast(ChatEvent::Status(StatusData {
            state: self.host.state(),
            agent_turns: self.host.conversation().agent_turns(),
        }));
    }

    pub async fn run(&mut self) {
        // Replay the seeded opening so subscribers start from a full feed.
        for message in self.host.conversation().messages().to_vec() {
            self.broadcast(ChatEvent::Message(message));
        }
        self.broadcast_status();
        info!("host ready, reply delay {}ms", self.config.reply_delay_ms);

        let mut command_rx = self.command_rx.take().expect("command_rx already taken");
        while let Some(cmd) = command_rx.recv().await {
            match cmd {
                HostCommand::Submit(text) => self.handle_submit(&text).await,
                HostCommand::Stop => break,
            }
        }

        info!("host shutting down");
    }

    async fn handle_submit(&mut self, text: &str) {
        match self.host.submit(text) {
            Ok(Submitted::Accepted(message)) => {
                info!("customer: {}", message.text);
                self.broadcast(ChatEvent::Message(message));
                self.broadcast_status();

                // The only suspension point: the "typing" pause before the
                // scripted reply lands.
                tokio::time::sleep(self.config.reply_delay()).await;

                if let Some(reply) = self.host.deliver_reply() {
                    info!("agent turn {}", self.host.conversation().agent_turns());
                    self.broadcast(ChatEvent::Message(reply));
                }
                self.broadcast_status();
            }
            Ok(Submitted::Ignored) => {
                debug!("ignoring whitespace-only submission");
            }
            Err(HostError::Busy) => {
                // Unreachable while commands are handled strictly in sequence.
                warn!("submission dropped: reply already pending");
            }
        }
    }
}
