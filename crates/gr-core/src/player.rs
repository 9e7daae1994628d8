//! Roster player records.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable, unique identifier for a roster player.
///
/// Stored as a string so rosters written by older tools (which used
/// timestamps as ids) still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Generate a new random player ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The full id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A short prefix suitable for display.
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique id.
    pub id: PlayerId,
    /// Display name, unique (case-insensitive) within a roster.
    pub name: String,
    /// The god currently assigned to this player, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub god: Option<String>,
}

impl Player {
    /// Create a player with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            god: None,
        }
    }

    /// Whether this player's name matches `name`, ignoring case and
    /// surrounding whitespace.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_unique() {
        let a = Player::new("Alice");
        let b = Player::new("Alice");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn short_id() {
        let id = PlayerId::from("1700000000000");
        assert_eq!(id.short(), "17000000");
        assert_eq!(PlayerId::from("42").short(), "42");
    }

    #[test]
    fn name_matches_ignores_case() {
        let p = Player::new("Cara");
        assert!(p.name_matches("cARA "));
        assert!(!p.name_matches("Carla"));
    }

    #[test]
    fn serializes_without_god() {
        let p = Player {
            id: PlayerId::from("1"),
            name: "Dan".to_string(),
            god: None,
        };
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            r#"{"id":"1","name":"Dan"}"#
        );
    }

    #[test]
    fn deserializes_legacy_record() {
        let p: Player = serde_json::from_str(r#"{"id":"1712345678901","name":"Eve"}"#).unwrap();
        assert_eq!(p.id.as_str(), "1712345678901");
        assert_eq!(p.name, "Eve");
        assert!(p.god.is_none());
    }
}
