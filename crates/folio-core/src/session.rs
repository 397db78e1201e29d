use chrono::{DateTime, Local};

/// Fallback assistant text appended when a chat call fails. Failures are
/// swallowed at the UI boundary; they never block further turns.
pub const FALLBACK_ANSWER: &str = "Sorry, I encountered an error. Please try again.";

/// Canned questions offered while the transcript is empty.
pub const SUGGESTED_QUESTIONS: [&str; 3] = [
    "What is this document about?",
    "Can you summarize the main points?",
    "What are the key takeaways?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// Client-captured, not server-issued.
    pub timestamp: DateTime<Local>,
}

/// The document a session is scoped to; `None` scope means all documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatScope {
    pub document_id: i64,
    pub file_name: String,
}

/// An append-only transcript of user/assistant pairs. Each submitted turn
/// grows the transcript by exactly one user entry and, once the outcome
/// arrives, exactly one assistant entry -- even when the call failed.
/// At most one turn is in flight at a time; input is disabled while
/// `is_pending`.
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: bool,
    scope: Option<ChatScope>,
}

impl ChatSession {
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn scope(&self) -> Option<&ChatScope> {
        self.scope.as_ref()
    }

    /// Scope the session to one document. Switching targets resets the
    /// transcript, mirroring the component-lifecycle reset of the web UI.
    pub fn set_scope(&mut self, scope: ChatScope) {
        if self.scope.as_ref() != Some(&scope) {
            self.scope = Some(scope);
            self.messages.clear();
            self.pending = false;
        }
    }

    /// Revert to all-documents scope, resetting the transcript.
    pub fn clear_scope(&mut self) {
        if self.scope.is_some() {
            self.scope = None;
            self.messages.clear();
            self.pending = false;
        }
    }

    /// Submit a question: append the user message optimistically and mark
    /// the turn pending. Returns the trimmed question for the network
    /// call, or `None` for empty/whitespace input or when a turn is
    /// already in flight.
    pub fn submit_question(&mut self, input: &str) -> Option<String> {
        if self.pending {
            return None;
        }
        let question = input.trim();
        if question.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            role: Role::User,
            content: question.to_owned(),
            timestamp: Local::now(),
        });
        self.pending = true;
        Some(question.to_owned())
    }

    /// Consume the turn outcome: the answer text on success, the fixed
    /// fallback on failure. Either way exactly one assistant entry is
    /// appended and the session becomes interactive again.
    ///
    /// An outcome arriving after a scope change is discarded: the scope
    /// switch reset the transcript, so the paired user entry is gone and
    /// the answer belongs to a conversation that no longer exists.
    pub fn complete_turn(&mut self, outcome: Result<String, String>) {
        if !self.pending {
            tracing::debug!("discarding answer for a cancelled turn");
            return;
        }
        let content = match outcome {
            Ok(answer) => answer,
            Err(reason) => {
                tracing::warn!(%reason, "chat turn failed, appending fallback");
                FALLBACK_ANSWER.to_owned()
            }
        };
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content,
            timestamp: Local::now(),
        });
        self.pending = false;
    }

    /// Irreversibly clear the transcript. The caller is responsible for
    /// user confirmation.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
