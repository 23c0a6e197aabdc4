// Transcript data model

/// Sender name used by the interviewer bot.
pub const INTERVIEWER_SENDER: &str = "morgan";

/// Sender name used for the candidate.
pub const CANDIDATE_SENDER: &str = "user";

/// Conversational role of a turn, resolved once from the free-form sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Interviewer,
    Candidate,
    /// Any other sender. Never matches either side of a pair.
    Unknown,
}

impl Role {
    /// Case-insensitive mapping from the transcript's `sender` field.
    pub fn from_sender(sender: &str) -> Self {
        match sender.to_lowercase().as_str() {
            INTERVIEWER_SENDER => Self::Interviewer,
            CANDIDATE_SENDER => Self::Candidate,
            _ => Self::Unknown,
        }
    }
}

/// One message of the interview chat, exactly as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub sender: String,
    pub content: String,
}

impl ChatTurn {
    pub fn new(sender: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        Role::from_sender(&self.sender)
    }
}

/// An interviewer question matched with the candidate answer that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}
