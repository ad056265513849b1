/// Conversation session: the ordered message history for one chat
/// instance.
///
/// The log is append-only by design — a transcript never loses or
/// rewrites entries. Messages are immutable once appended and carry ids
/// monotonic within their session. Sessions live in memory for the chat's
/// lifetime and are never persisted.
use crate::composer::ComposedReply;
use crate::error::KbError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct Message {
    /// Monotonic within the session.
    pub id: u64,
    pub role: MessageRole,
    pub content: String,
    /// Follow-up prompt chips; populated for assistant messages only.
    pub suggestions: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ConversationSession {
    messages: Vec<Message>,
    next_id: u64,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message. The text is trimmed; empty input is
    /// rejected with `KbError::EmptyMessage` and leaves the session
    /// untouched.
    pub fn append_user(&mut self, text: &str) -> Result<&Message, KbError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(KbError::EmptyMessage);
        }
        Ok(self.push(MessageRole::User, text.to_string(), Vec::new()))
    }

    /// Append a composed assistant reply.
    pub fn append_assistant(&mut self, reply: ComposedReply) -> &Message {
        self.push(MessageRole::Assistant, reply.content, reply.suggestions)
    }

    /// Read-only view of the full ordered transcript.
    pub fn history(&self) -> &[Message] {
        &self.messages
    }

    fn push(&mut self, role: MessageRole, content: String, suggestions: Vec<String>) -> &Message {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message { id, role, content, suggestions });
        // Just pushed, so the last element exists.
        &self.messages[self.messages.len() - 1]
    }
}
