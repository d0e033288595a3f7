//! Scripted assistant conversation.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::calendar::{CalendarManager, EventDetails};
use crate::config::DateFormat;
use crate::core::format_clock;
use crate::features::nlp::parse_natural_language;
use crate::storage::EventStore;

static GREETING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(hi|hello|hey)").unwrap_or_else(|e| panic!("Invalid greeting regex: {e}"))
});

/// First message of every session.
pub const WELCOME: &str = "Hi! 👋 I'm your AI assistant. I can help you create events using \
natural language. Try saying something like 'Team meeting tomorrow at 3pm'";

const GREETING_REPLY: &str = "Hello! How can I help you today? You can ask me to create events, \
check your schedule, or answer questions.";

const HELP_REPLY: &str = "I can help you:\n\n✓ Create events using natural language\n✓ Check your \
schedule\n✓ Set reminders\n✓ Answer questions\n\nTry: 'Schedule lunch with John tomorrow at noon'";

const CLEAR_DAY_REPLY: &str = "You have no events scheduled for today. Your calendar is clear! 📅";

/// Reply when the message could not be turned into an event.
pub const NOT_UNDERSTOOD_REPLY: &str = "I'm not sure I understood that. Could you try rephrasing? \
For example:\n\n'Meeting with Sarah tomorrow at 2pm'\n'Gym session Friday 6am'";

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person typing.
    User,
    /// The assistant.
    Bot,
}

/// One line of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    /// Author.
    pub sender: Sender,
    /// Message body.
    pub text: String,
    /// When it was added.
    pub timestamp: NaiveDateTime,
}

/// What the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// "hi", "hello", "hey" at the start.
    Greeting,
    /// Mentions "help".
    Help,
    /// Asks about today's schedule.
    Schedule,
    /// Anything else is treated as an event description.
    CreateEvent,
}

/// Classify a message. Checks run in a fixed order and the first hit wins.
#[must_use]
pub fn classify_intent(message: &str) -> Intent {
    let lower = message.to_lowercase();
    if GREETING_PATTERN.is_match(&lower) {
        Intent::Greeting
    } else if lower.contains("help") {
        Intent::Help
    } else if lower.contains("schedule") || (lower.contains("what") && lower.contains("today")) {
        Intent::Schedule
    } else {
        Intent::CreateEvent
    }
}

/// Conversation state for the assistant.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    open: bool,
    date_format: DateFormat,
}

impl ChatSession {
    /// Start a closed session holding the welcome message.
    #[must_use]
    pub fn new(now: NaiveDateTime, date_format: DateFormat) -> Self {
        let mut session = Self {
            messages: Vec::new(),
            open: false,
            date_format,
        };
        session.push(Sender::Bot, WELCOME.to_string(), now);
        session
    }

    /// Every message so far.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether the chat window is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Open or close the chat window, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Record a user message and the assistant's reply.
    ///
    /// Blank input is ignored and yields `None`; otherwise the reply is
    /// returned. Event creation failures become a rephrase prompt.
    pub fn send<S: EventStore>(
        &mut self,
        manager: &mut CalendarManager<S>,
        input: &str,
        now: NaiveDateTime,
    ) -> Option<&ChatMessage> {
        let message = input.trim();
        if message.is_empty() {
            return None;
        }

        self.push(Sender::User, message.to_string(), now);
        let reply = self.respond(manager, message, now);
        self.push(Sender::Bot, reply, now);
        self.messages.last()
    }

    fn respond<S: EventStore>(
        &self,
        manager: &mut CalendarManager<S>,
        message: &str,
        now: NaiveDateTime,
    ) -> String {
        match classify_intent(message) {
            Intent::Greeting => GREETING_REPLY.to_string(),
            Intent::Help => HELP_REPLY.to_string(),
            Intent::Schedule => {
                let events = manager.events_on(now.date());
                if events.is_empty() {
                    return CLEAR_DAY_REPLY.to_string();
                }
                let plural = if events.len() > 1 { "s" } else { "" };
                let mut reply = format!("You have {} event{plural} today:\n\n", events.len());
                for event in events {
                    reply.push_str(&format!("• {} - {}\n", format_clock(event.time), event.title));
                }
                reply
            },
            Intent::CreateEvent => {
                let request = parse_natural_language(message, now);
                match manager.add_event(request, EventDetails::default(), now) {
                    Ok(event) => format!(
                        "✓ Event created!\n\n📅 {}\n🕐 {} at {}\n⏱️ Duration: {} minutes\n\n\
                         Anything else I can help you with?",
                        event.title,
                        self.date_format.render(event.date),
                        format_clock(event.time),
                        event.duration
                    ),
                    Err(e) => {
                        tracing::warn!(error = %e, "chat message did not produce an event");
                        NOT_UNDERSTOOD_REPLY.to_string()
                    },
                }
            },
        }
    }

    fn push(&mut self, sender: Sender, text: String, timestamp: NaiveDateTime) {
        self.messages.push(ChatMessage {
            sender,
            text,
            timestamp,
        });
    }
}
