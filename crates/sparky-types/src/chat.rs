//! Chat session types for Sparky.
//!
//! A session is an ordered list of turns keyed by an opaque identifier.
//! Sessions live in process memory only; there is no persistence layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;

/// Opaque identifier for a chat session.
///
/// Clients may supply their own key (any non-empty string, used as-is) or
/// omit it, in which case a fresh UUID v7 string is generated. Supplied keys
/// are never parsed or validated beyond non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a fresh globally-unique session identifier.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One completed exchange within a session.
///
/// Immutable once appended; the session's turn order equals the arrival
/// order of successful chat calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    pub assistant: String,
}

/// Result of a completed chat turn: the generated reply and the session
/// it was appended to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub chat_id: SessionId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_generate_unique() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_session_id_serde_transparent() {
        let id = SessionId::from("abc-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-123\"");
        let parsed: SessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_session_id_display() {
        let id = SessionId::from("my-session");
        assert_eq!(id.to_string(), "my-session");
    }

    #[test]
    fn test_turn_serde_roundtrip() {
        let turn = Turn {
            user: "How do I test a fuse?".to_string(),
            assistant: "Start by disconnecting the battery.".to_string(),
        };
        let json = serde_json::to_string(&turn).unwrap();
        let parsed: Turn = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, turn);
    }

    #[test]
    fn test_chat_reply_serialize() {
        let reply = ChatReply {
            response: "Does that make sense?".to_string(),
            chat_id: SessionId::from("s1"),
        };
        let json = serde_json::to_string(&reply).unwrap();
        assert!(json.contains("\"chat_id\":\"s1\""));
    }
}
