//! The god roster shipped with Godroll.

use crate::catalog::Role;

/// Built-in gods as `(name, role, pantheon)`, in display order.
pub const GODS: &[(&str, Role, &str)] = &[
    ("Achilles", Role::Warrior, "Greek"),
    ("Agni", Role::Mage, "Hindu"),
    ("Aladdin", Role::Mage, "Arabian"),
    ("Amaterasu", Role::Warrior, "Japanese"),
    ("Anhur", Role::Hunter, "Egyptian"),
    ("Anubis", Role::Mage, "Egyptian"),
    ("Aphrodite", Role::Mage, "Greek"),
    ("Ares", Role::Guardian, "Greek"),
    ("Artemis", Role::Hunter, "Greek"),
    ("Athena", Role::Guardian, "Greek"),
    ("Awilix", Role::Assassin, "Maya"),
    ("Bacchus", Role::Guardian, "Roman"),
    ("Baron Samedi", Role::Mage, "Voodoo"),
    ("Bellona", Role::Warrior, "Roman"),
    ("Cabrakan", Role::Guardian, "Maya"),
    ("Cernunnos", Role::Hunter, "Celtic"),
    ("Chaac", Role::Warrior, "Maya"),
    ("Cupid", Role::Hunter, "Roman"),
    ("Danzaburou", Role::Hunter, "Japanese"),
    ("Fenrir", Role::Assassin, "Norse"),
    ("Geb", Role::Guardian, "Egyptian"),
    ("Hades", Role::Mage, "Greek"),
    ("Hecate", Role::Mage, "Greek"),
    ("Hercules", Role::Warrior, "Roman"),
    ("Hua Mulan", Role::Warrior, "Chinese"),
    ("Hun Batz", Role::Assassin, "Maya"),
    ("Izanami", Role::Hunter, "Japanese"),
    ("Jing Wei", Role::Hunter, "Chinese"),
    ("Loki", Role::Assassin, "Norse"),
    ("Merlin", Role::Mage, "Arthurian"),
    ("Nu Wa", Role::Mage, "Chinese"),
    ("Pele", Role::Assassin, "Polynesian"),
    ("Yemoja", Role::Guardian, "Yoruba"),
];
