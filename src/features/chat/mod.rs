//! Chat assistant.
//!
//! A scripted conversation that answers greetings, help and schedule
//! questions, and turns anything else into an event via the parser.

mod session;

pub use session::{classify_intent, ChatMessage, ChatSession, Intent, Sender, NOT_UNDERSTOOD_REPLY, WELCOME};
