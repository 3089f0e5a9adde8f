//! milkline-core — Pure domain logic, no UI.
//!
//! This crate contains the complete scripted-agent logic for the MilkyWay
//! Fresh sales-chat demo: the response selector, the conversation transcript,
//! and the host state machine. It is completely UI-agnostic — frontends
//! subscribe to events via tokio::broadcast.

pub mod config;
pub mod conversation;
pub mod events;
pub mod host;
pub mod script;
pub mod selector;
pub mod types;
