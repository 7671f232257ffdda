//! crates/athletic_spirit_core/src/domain.rs
//!
//! Defines the pure, core data structures for the client.
//! These structs are independent of any transport or serialization format.

use chrono::{DateTime, Utc};

/// The bot's opening line, present in every fresh transcript.
pub const GREETING: &str = "Welcome! Are you an athlete or a coach?";

//=========================================================================================
// Conversation
//=========================================================================================

/// Who authored a turn in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single message in the chat transcript.
#[derive(Debug, Clone)]
pub struct Turn {
    pub sender: Sender,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// The ordered, append-only record of a chat session.
///
/// Lives only as long as the widget that owns it; nothing is persisted.
#[derive(Debug, Clone)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Creates a transcript holding only the bot greeting.
    pub fn new() -> Self {
        Self {
            turns: vec![Turn::new(Sender::Bot, GREETING)],
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::new(Sender::User, text));
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::new(Sender::Bot, text));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================================
// Auth Form Payloads
//=========================================================================================

/// Email/password pair used by the login form.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Account data collected by the signup form.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// The reset token from the emailed link plus the chosen new password.
#[derive(Debug, Clone)]
pub struct PasswordReset {
    pub token: String,
    pub password: String,
}

/// Where the client can send the user after a form settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// The landing page after a successful login.
    Home,
    Login,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_transcript_starts_with_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.len(), 1);
        let first = &transcript.turns()[0];
        assert_eq!(first.sender, Sender::Bot);
        assert_eq!(first.text, GREETING);
    }

    #[test]
    fn turns_keep_creation_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("hi");
        transcript.push_bot("hello");
        transcript.push_user("bye");

        let senders: Vec<Sender> = transcript.turns().iter().map(|t| t.sender).collect();
        assert_eq!(
            senders,
            vec![Sender::Bot, Sender::User, Sender::Bot, Sender::User]
        );
        assert_eq!(transcript.last().map(|t| t.text.as_str()), Some("bye"));
    }
}
