//! The roster store: ordered players, unique names, persisted on every edit.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use gr_core::{Player, PlayerId};

use crate::config::RosterConfig;
use crate::error::{RosterError, RosterResult};
use crate::storage::KeyValueStore;

/// Wire shape of a persisted player.
#[derive(Serialize)]
struct StoredPlayer<'a> {
    id: &'a PlayerId,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    god: Option<&'a str>,
}

/// Owns the player roster and keeps it in sync with a [`KeyValueStore`].
///
/// Insertion order is display order. No two players share a name, compared
/// case-insensitively on the trimmed name.
#[derive(Debug)]
pub struct RosterStore<S: KeyValueStore> {
    storage: S,
    config: RosterConfig,
    players: Vec<Player>,
}

impl<S: KeyValueStore> RosterStore<S> {
    /// Open a store and load whatever roster `storage` holds.
    pub fn load(storage: S, config: RosterConfig) -> Self {
        let mut store = Self {
            storage,
            config,
            players: Vec::new(),
        };
        store.reload();
        store
    }

    /// Replace the in-memory roster with the persisted one.
    ///
    /// Missing or malformed data yields an empty roster. Unusable entries
    /// (blank or repeated names) are dropped.
    pub fn reload(&mut self) {
        self.players = match self.storage.get(&self.config.key) {
            Ok(Some(text)) => match serde_json::from_str::<Vec<Player>>(&text) {
                Ok(players) => self.sanitize(players),
                Err(e) => {
                    warn!(key = %self.config.key, error = %e, "discarding malformed roster");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = %self.config.key, error = %e, "could not read roster");
                Vec::new()
            }
        };
        debug!(players = self.players.len(), "roster loaded");
    }

    fn sanitize(&self, loaded: Vec<Player>) -> Vec<Player> {
        let mut seen_names = HashSet::new();
        let mut seen_ids = HashSet::new();
        let mut players = Vec::with_capacity(loaded.len());

        for mut player in loaded {
            let name = player.name.trim().to_string();
            if name.is_empty() {
                warn!(id = %player.id, "dropping stored player with blank name");
                continue;
            }
            if !seen_names.insert(name.to_lowercase()) {
                warn!(name = %name, "dropping stored player with duplicate name");
                continue;
            }
            if !seen_ids.insert(player.id.clone()) {
                warn!(id = %player.id, "dropping stored player with duplicate id");
                continue;
            }
            player.name = name;
            if !self.config.persist_assignments {
                player.god = None;
            }
            players.push(player);
        }
        players
    }

    /// Write the full roster to storage. Failures are logged and ignored.
    fn persist(&mut self) {
        let persist_gods = self.config.persist_assignments;
        let records: Vec<StoredPlayer<'_>> = self
            .players
            .iter()
            .map(|p| StoredPlayer {
                id: &p.id,
                name: &p.name,
                god: if persist_gods { p.god.as_deref() } else { None },
            })
            .collect();

        let text = match serde_json::to_string(&records) {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "could not serialize roster");
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.config.key, &text) {
            warn!(key = %self.config.key, error = %e, "could not save roster");
        }
    }

    /// Add a player. The stored name is trimmed.
    pub fn add(&mut self, name: &str) -> RosterResult<&Player> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if let Some(existing) = self.find_by_name(name) {
            return Err(RosterError::DuplicateName(existing.name.clone()));
        }

        let player = Player::new(name);
        debug!(id = %player.id, name = %player.name, "player added");
        self.players.push(player);
        self.persist();

        let idx = self.players.len() - 1;
        Ok(&self.players[idx])
    }

    /// Rename a player.
    ///
    /// Renaming to another casing of the player's own name is allowed.
    pub fn update(&mut self, id: &PlayerId, new_name: &str) -> RosterResult<&Player> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if let Some(other) = self
            .players
            .iter()
            .find(|p| &p.id != id && p.name_matches(new_name))
        {
            return Err(RosterError::DuplicateName(other.name.clone()));
        }

        debug!(id = %id, from = %self.players[idx].name, to = %new_name, "player renamed");
        self.players[idx].name = new_name.to_string();
        self.persist();
        Ok(&self.players[idx])
    }

    /// Remove a player. Returns the removed player, or `None` if the id was
    /// not on the roster. The roster is persisted either way.
    pub fn remove(&mut self, id: &PlayerId) -> Option<Player> {
        let removed = self.index_of(id).map(|idx| self.players.remove(idx));
        if let Some(ref p) = removed {
            debug!(id = %p.id, name = %p.name, "player removed");
        }
        self.persist();
        removed
    }

    /// Remove every player.
    pub fn clear(&mut self) {
        self.players.clear();
        debug!("roster cleared");
        self.persist();
    }

    /// Copy assigned gods onto roster players and persist them.
    ///
    /// Only has an effect when assignment persistence is enabled. Unknown
    /// ids are skipped. Returns how many players were updated.
    pub fn record_assignments<'a, I>(&mut self, assignments: I) -> usize
    where
        I: IntoIterator<Item = (&'a PlayerId, Option<&'a str>)>,
    {
        if !self.config.persist_assignments {
            return 0;
        }

        let mut updated = 0;
        for (id, god) in assignments {
            if let Some(idx) = self.index_of(id) {
                self.players[idx].god = god.map(str::to_string);
                updated += 1;
            }
        }
        if updated > 0 {
            self.persist();
        }
        updated
    }

    /// All players in display order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by id.
    pub fn get(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Look up a player by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name_matches(name))
    }

    /// Resolve user input to a player: exact id, then case-insensitive name,
    /// then a unique id prefix.
    pub fn resolve(&self, query: &str) -> RosterResult<&Player> {
        let query = query.trim();
        if let Some(p) = self.players.iter().find(|p| p.id.as_str() == query) {
            return Ok(p);
        }
        if let Some(p) = self.find_by_name(query) {
            return Ok(p);
        }

        let mut matches = self
            .players
            .iter()
            .filter(|p| !query.is_empty() && p.id.as_str().starts_with(query));
        match (matches.next(), matches.next()) {
            (Some(p), None) => Ok(p),
            (Some(_), Some(_)) => Err(RosterError::Ambiguous(query.to_string())),
            _ => Err(RosterError::NotFound(query.to_string())),
        }
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Active configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// The backing store.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the roster and return the backing store.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn index_of(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }
}
