//! The god catalog: an immutable, ordered list of characters.
//!
//! Catalog order is display order. Names are unique (case-insensitive) and
//! the catalog is never empty; both are checked when the catalog is built.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::builtin::GODS;
use crate::error::{CatalogError, CatalogResult};

/// The combat role of a god.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Frontline tank.
    Guardian,
    /// Melee bruiser.
    Warrior,
    /// Magical damage dealer.
    Mage,
    /// Ranged basic-attack carry.
    Hunter,
    /// Mobile melee burst.
    Assassin,
}

impl Role {
    /// All roles in their canonical order.
    pub const ALL: [Role; 5] = [
        Role::Guardian,
        Role::Warrior,
        Role::Mage,
        Role::Hunter,
        Role::Assassin,
    ];

    /// Parse a role from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "guardian" => Some(Self::Guardian),
            "warrior" => Some(Self::Warrior),
            "mage" => Some(Self::Mage),
            "hunter" => Some(Self::Hunter),
            "assassin" => Some(Self::Assassin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guardian => write!(f, "Guardian"),
            Self::Warrior => write!(f, "Warrior"),
            Self::Mage => write!(f, "Mage"),
            Self::Hunter => write!(f, "Hunter"),
            Self::Assassin => write!(f, "Assassin"),
        }
    }
}

/// A selectable god.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Display name, unique within a catalog.
    pub name: String,
    /// Combat role.
    pub role: Role,
    /// Mythological pantheon.
    pub pantheon: String,
}

impl Character {
    /// Create a new character.
    pub fn new(name: impl Into<String>, role: Role, pantheon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role,
            pantheon: pantheon.into(),
        }
    }
}

/// An ordered, validated set of characters.
#[derive(Debug, Clone)]
pub struct Catalog {
    characters: Vec<Character>,
}

impl Catalog {
    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        Self {
            characters: GODS
                .iter()
                .map(|(name, role, pantheon)| Character::new(*name, *role, *pantheon))
                .collect(),
        }
    }

    /// Build a catalog from characters, checking that it is non-empty and
    /// that names are unique.
    pub fn from_characters(characters: Vec<Character>) -> CatalogResult<Self> {
        if characters.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for (i, c) in characters.iter().enumerate() {
            let key = c.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(CatalogError::BlankName(i));
            }
            if !seen.insert(key) {
                return Err(CatalogError::DuplicateName(c.name.clone()));
            }
        }

        Ok(Self { characters })
    }

    /// Parse a catalog from a JSON array of `{name, role, pantheon}` objects.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let characters: Vec<Character> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_characters(characters)
    }

    /// All characters in catalog order.
    pub fn all(&self) -> &[Character] {
        &self.characters
    }

    /// All names in catalog order.
    pub fn list_names(&self) -> Vec<&str> {
        self.characters.iter().map(|c| c.name.as_str()).collect()
    }

    /// Find a character by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&Character> {
        let lower = name.trim().to_lowercase();
        self.characters
            .iter()
            .find(|c| c.name.to_lowercase() == lower)
    }

    /// Characters with the given role, in catalog order.
    pub fn by_role(&self, role: Role) -> Vec<&Character> {
        self.characters.iter().filter(|c| c.role == role).collect()
    }

    /// Distinct pantheons in first-seen order.
    pub fn pantheons(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for c in &self.characters {
            if !out.contains(&c.pantheon.as_str()) {
                out.push(&c.pantheon);
            }
        }
        out
    }

    /// Restrict the catalog to a single role.
    ///
    /// Fails with [`CatalogError::Empty`] if no character has that role.
    pub fn filter_role(&self, role: Role) -> CatalogResult<Self> {
        let characters: Vec<Character> = self.by_role(role).into_iter().cloned().collect();
        if characters.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { characters })
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Always false for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_valid() {
        let catalog = Catalog::builtin();
        let rebuilt = Catalog::from_characters(catalog.all().to_vec()).unwrap();
        assert_eq!(rebuilt.len(), 33);
    }

    #[test]
    fn builtin_order_is_stable() {
        let catalog = Catalog::builtin();
        let names = catalog.list_names();
        assert_eq!(names.first(), Some(&"Achilles"));
        assert_eq!(names.last(), Some(&"Yemoja"));
        assert_eq!(names.len(), catalog.all().len());
    }

    #[test]
    fn every_role_is_represented() {
        let catalog = Catalog::builtin();
        for role in Role::ALL {
            assert!(!catalog.by_role(role).is_empty(), "no gods for {role}");
        }
    }

    #[test]
    fn find_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let god = catalog.find("baron samedi").unwrap();
        assert_eq!(god.name, "Baron Samedi");
        assert_eq!(god.role, Role::Mage);
        assert_eq!(god.pantheon, "Voodoo");
        assert!(catalog.find("Zeus").is_none());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            Catalog::from_characters(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = Catalog::from_characters(vec![
            Character::new("Loki", Role::Assassin, "Norse"),
            Character::new("LOKI", Role::Mage, "Norse"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateName(n)) if n == "LOKI"));
    }

    #[test]
    fn rejects_blank_name() {
        let result = Catalog::from_characters(vec![
            Character::new("Loki", Role::Assassin, "Norse"),
            Character::new("  ", Role::Mage, "Norse"),
        ]);
        assert!(matches!(result, Err(CatalogError::BlankName(1))));
    }

    #[test]
    fn from_json() {
        let catalog = Catalog::from_json(
            r#"[
                {"name": "Thor", "role": "Assassin", "pantheon": "Norse"},
                {"name": "Ymir", "role": "Guardian", "pantheon": "Norse"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.list_names(), vec!["Thor", "Ymir"]);
        assert_eq!(catalog.pantheons(), vec!["Norse"]);
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"[{"name": "Thor", "role": "Tank", "pantheon": "Norse"}]"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn filter_role() {
        let catalog = Catalog::builtin();
        let hunters = catalog.filter_role(Role::Hunter).unwrap();
        assert!(hunters.all().iter().all(|c| c.role == Role::Hunter));
        assert_eq!(hunters.len(), catalog.by_role(Role::Hunter).len());
    }

    #[test]
    fn role_parse_and_display() {
        for role in Role::ALL {
            assert_eq!(Role::parse(&role.to_string().to_uppercase()), Some(role));
        }
        assert_eq!(Role::parse("support"), None);
    }

    #[test]
    fn pantheons_first_seen_order() {
        let catalog = Catalog::builtin();
        let pantheons = catalog.pantheons();
        assert_eq!(&pantheons[..3], &["Greek", "Hindu", "Arabian"]);
    }
}
