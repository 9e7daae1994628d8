//! Configuration for the roster store.

/// Storage key used by the Smite 2 web picker.
pub const DEFAULT_KEY: &str = "smite2Players";

/// Configuration for a [`RosterStore`](crate::RosterStore).
#[derive(Debug, Clone)]
pub struct RosterConfig {
    /// Key under which the serialized roster is stored.
    pub key: String,
    /// Persist assigned gods alongside roster membership.
    pub persist_assignments: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY.to_string(),
            persist_assignments: false,
        }
    }
}

impl RosterConfig {
    /// Set the storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Enable or disable persisting assigned gods.
    pub fn with_persist_assignments(mut self, persist: bool) -> Self {
        self.persist_assignments = persist;
        self
    }
}
