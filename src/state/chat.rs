//! Chat transcript state.
//!
//! DESIGN
//! ======
//! The transcript is append-only: messages are never edited or removed for
//! the lifetime of the page. Message content is a typed enum, so rendering
//! dispatches on structure rather than sniffing markers out of string
//! contents.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{AnalysisReport, HealthResponse};

/// State for the chat transcript.
///
/// Provided as an `RwSignal` context by [`crate::app::App`].
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Displayed messages, ordered by insertion.
    pub messages: Vec<ChatMessage>,
    /// True while an analysis request is in flight. The input row is
    /// disabled while set, so submissions cannot overlap.
    pub pending: bool,
}

impl ChatState {
    /// Append a message to the transcript.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Begin a submission: append the user's message and mark a request in
    /// flight. Refused with no transcript change while one is already
    /// pending.
    pub fn begin_submission(&mut self, text: String) -> bool {
        if self.pending {
            return false;
        }
        self.push(ChatMessage::user(text));
        self.pending = true;
        true
    }

    /// Complete the in-flight submission: append the bot's reply and return
    /// to idle.
    pub fn complete_submission(&mut self, reply: ChatMessage) {
        self.push(reply);
        self.pending = false;
    }

    /// Number of messages in the transcript.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when no message has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Who authored a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS modifier suffix for the message row.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// Typed content of a transcript message.
#[derive(Clone, Debug)]
pub enum MessageBody {
    /// Plain text bubble; also used for the fixed error strings.
    Text(String),
    /// Greeting shown shortly after load, carrying the health-check action.
    Welcome,
    /// Bold-titled notice bubble.
    Notice {
        title: String,
        detail: String,
    },
    /// System health snapshot from `GET /health`.
    Health(HealthResponse),
    /// Structured analysis panel from `POST /api/analyze-comprehensive`.
    Analysis(AnalysisReport),
}

/// A single transcript message.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    /// Unique id (UUID string), assigned at construction.
    pub id: String,
    /// Message author.
    pub sender: Sender,
    /// Typed content.
    pub body: MessageBody,
}

impl ChatMessage {
    fn new(sender: Sender, body: MessageBody) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender,
            body,
        }
    }

    /// User-authored text message.
    #[must_use]
    pub fn user(text: String) -> Self {
        Self::new(Sender::User, MessageBody::Text(text))
    }

    /// Bot text message.
    #[must_use]
    pub fn bot_text(text: String) -> Self {
        Self::new(Sender::Bot, MessageBody::Text(text))
    }

    /// Bot greeting message.
    #[must_use]
    pub fn welcome() -> Self {
        Self::new(Sender::Bot, MessageBody::Welcome)
    }

    /// Bot notice with a bold title line.
    #[must_use]
    pub fn notice(title: String, detail: String) -> Self {
        Self::new(Sender::Bot, MessageBody::Notice { title, detail })
    }

    /// Bot health status message.
    #[must_use]
    pub fn health(health: HealthResponse) -> Self {
        Self::new(Sender::Bot, MessageBody::Health(health))
    }

    /// Bot analysis panel message.
    #[must_use]
    pub fn analysis(report: AnalysisReport) -> Self {
        Self::new(Sender::Bot, MessageBody::Analysis(report))
    }
}
