//! Listing Fixtures

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso};
use serde::Deserialize;

use crate::{listings::Listing, promotions::TargetCategory};

/// Wrapper for listings in YAML
#[derive(Debug, Deserialize)]
pub struct ListingsFixture {
    /// Map of listing key -> listing fixture
    pub listings: FxHashMap<String, ListingFixture>,
}

/// Listing fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ListingFixture {
    /// Display name
    pub name: String,

    /// Category the listing belongs to
    pub category: TargetCategory,

    /// Base price in whole francs
    pub price: i64,
}

impl ListingFixture {
    /// Convert to a domain [`Listing`] with a fresh id.
    #[must_use]
    pub fn into_listing(self) -> (TargetCategory, Listing<'static>) {
        (
            self.category,
            Listing::new(self.name, Money::from_minor(self.price, iso::XAF)),
        )
    }
}
