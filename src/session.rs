//! Append-only chat session history.
//!
//! The session is an explicit object owned by the UI and threaded through
//! render calls, rather than ambient global state. Turns are appended on each
//! user submission and each received model reply; no turn is ever mutated or
//! removed for the lifetime of the session. Nothing here is persisted.

// ---------------------------------------------------------------------------
// Role / ChatTurn
// ---------------------------------------------------------------------------

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One message in the session history. Assistant content is stored verbatim,
/// unparsed; rendering re-parses it on every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Exclusive owner of the ordered, append-only turn sequence.
#[derive(Debug, Default)]
pub struct Session {
    turns: Vec<ChatTurn>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user turn; returns its index in the history.
    pub fn push_user(&mut self, content: String) -> usize {
        self.push(Role::User, content)
    }

    /// Append an assistant turn (raw reply, verbatim); returns its index.
    pub fn push_assistant(&mut self, content: String) -> usize {
        self.push(Role::Assistant, content)
    }

    fn push(&mut self, role: Role, content: String) -> usize {
        self.turns.push(ChatTurn { role, content });
        self.turns.len() - 1
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
