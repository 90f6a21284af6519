//! CLI command handlers module
//!
//! Organized by functional domain:
//! - ask: one-shot questions, ranked search, grouped context
//! - chat: interactive console loop
//! - info: knowledge base statistics, sections, config
//! - serve: HTTP API server

pub mod ask;
pub mod chat;
pub mod info;
pub mod serve;

pub use ask::*;
pub use chat::*;
pub use info::*;
pub use serve::*;
