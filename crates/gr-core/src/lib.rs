//! Core types for Godroll.
//!
//! Holds the immutable god catalog (name, role, pantheon) and the player
//! record shared by the roster store and the draft engine.

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod player;

pub use catalog::{Catalog, Character, Role};
pub use error::{CatalogError, CatalogResult};
pub use player::{Player, PlayerId};
