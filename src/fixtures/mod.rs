//! Fixtures
//!
//! YAML-backed sample data sets under the repository's `fixtures/`
//! directory, standing in for the store during demos and integration
//! tests. Listings, promotions and announcements with the same set name
//! load together; promotion target references are resolved through the
//! listing keys.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    announcements::Announcement,
    fixtures::{
        announcements::AnnouncementsFixture, listings::ListingsFixture,
        promotions::PromotionsFixture,
    },
    listings::{EntityId, Listing},
    promotions::{Promotion, PromotionId, TargetCategory},
};

pub mod announcements;
pub mod listings;
pub mod promotions;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Listing not found
    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    /// Promotion not found
    #[error("Promotion not found: {0}")]
    PromotionNotFound(String),
}

/// A loaded fixture set.
#[derive(Debug, Default)]
pub struct Fixture {
    base_path: PathBuf,
    listings: Vec<(TargetCategory, Listing<'static>)>,
    listing_keys: FxHashMap<String, EntityId>,
    promotions: Vec<Promotion>,
    promotion_keys: FxHashMap<String, PromotionId>,
    announcements: Vec<Announcement>,
}

impl Fixture {
    /// Create an empty fixture rooted at the repository's `fixtures/`
    /// directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures"),
            ..Self::default()
        }
    }

    /// Load a listings file by set name.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_listings(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("listings").join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;
        let fixture: ListingsFixture = serde_norway::from_str(&contents)?;

        for (key, listing_fixture) in sorted(fixture.listings) {
            let (category, listing) = listing_fixture.into_listing();

            self.listing_keys.insert(key, listing.id);
            self.listings.push((category, listing));
        }

        Ok(self)
    }

    /// Load a promotions file by set name. Listings must be loaded first so
    /// entity targets resolve.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// promotion targets an unknown listing key.
    pub fn load_promotions(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self
            .base_path
            .join("promotions")
            .join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;
        let fixture: PromotionsFixture = serde_norway::from_str(&contents)?;

        for (key, promotion_fixture) in sorted(fixture.promotions) {
            let promotion = promotion_fixture.into_promotion(&self.listing_keys)?;

            self.promotion_keys.insert(key, promotion.id);
            self.promotions.push(promotion);
        }

        Ok(self)
    }

    /// Load an announcements file by set name.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_announcements(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self
            .base_path
            .join("announcements")
            .join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;
        let fixture: AnnouncementsFixture = serde_norway::from_str(&contents)?;

        for (_, announcement_fixture) in sorted(fixture.announcements) {
            self.announcements
                .push(announcement_fixture.into_announcement());
        }

        Ok(self)
    }

    /// Load a complete fixture set (listings, promotions and announcements
    /// with the same name).
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_listings(name)?
            .load_promotions(name)?
            .load_announcements(name)?;

        Ok(fixture)
    }

    /// Get a listing by its string key.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing is not found.
    pub fn listing(&self, key: &str) -> Result<&Listing<'static>, FixtureError> {
        let id = self.entity_id(key)?;

        self.listings
            .iter()
            .map(|(_, listing)| listing)
            .find(|listing| listing.id == id)
            .ok_or_else(|| FixtureError::ListingNotFound(key.to_string()))
    }

    /// Get a listing's entity id by its string key.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing is not found.
    pub fn entity_id(&self, key: &str) -> Result<EntityId, FixtureError> {
        self.listing_keys
            .get(key)
            .copied()
            .ok_or_else(|| FixtureError::ListingNotFound(key.to_string()))
    }

    /// Get a promotion by its string key.
    ///
    /// # Errors
    ///
    /// Returns an error if the promotion is not found.
    pub fn promotion(&self, key: &str) -> Result<&Promotion, FixtureError> {
        let id = self
            .promotion_keys
            .get(key)
            .ok_or_else(|| FixtureError::PromotionNotFound(key.to_string()))?;

        self.promotions
            .iter()
            .find(|promotion| promotion.id == *id)
            .ok_or_else(|| FixtureError::PromotionNotFound(key.to_string()))
    }

    /// All listings in a category, in load order.
    #[must_use]
    pub fn listings_in(&self, category: TargetCategory) -> Vec<&Listing<'static>> {
        self.listings
            .iter()
            .filter(|(listing_category, _)| *listing_category == category)
            .map(|(_, listing)| listing)
            .collect()
    }

    /// All promotions, in load order.
    #[must_use]
    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    /// All announcements, in load order.
    #[must_use]
    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }
}

/// YAML maps are unordered and promotion matching is order-sensitive, so
/// fixture entries load in key order to keep sets deterministic.
fn sorted<T>(map: FxHashMap<String, T>) -> Vec<(String, T)> {
    let mut entries: Vec<(String, T)> = map.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}
