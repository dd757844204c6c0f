//! Listings
//!
//! A listing is anything the site prices: a room, a dish, a pool pass.
//! The pricing core only ever needs its identity and base price.

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a priceable room or service, shared with promotion targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Generate a fresh entity id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A priceable entity as the core sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<'a> {
    /// Identity used for entity-specific promotion matching.
    pub id: EntityId,

    /// Display name.
    pub name: String,

    /// Undiscounted price, in minor units (whole francs for XAF).
    pub base_price: Money<'a, Currency>,
}

impl<'a> Listing<'a> {
    /// Create a listing with a fresh id.
    pub fn new(name: impl Into<String>, base_price: Money<'a, Currency>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            base_price,
        }
    }
}
