//! Promotion Fixtures

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    listings::EntityId,
    promotions::{DiscountKind, Promotion, TargetCategory},
};

/// Wrapper for promotions in YAML
#[derive(Debug, Deserialize)]
pub struct PromotionsFixture {
    /// Map of promotion key -> promotion fixture
    pub promotions: FxHashMap<String, PromotionFixture>,
}

/// Promotion fixture from YAML
#[derive(Debug, Deserialize)]
pub struct PromotionFixture {
    /// Promotion name
    pub name: String,

    /// Discount kind, in the store spelling (`PERCENTAGE`, ...)
    pub kind: DiscountKind,

    /// Percentage or whole-franc amount
    pub value: Decimal,

    /// Category the promotion governs
    pub category: TargetCategory,

    /// Listing key of the targeted entity, when entity-specific
    #[serde(default)]
    pub target: Option<String>,

    /// Customer-facing code
    #[serde(default)]
    pub promo_code: Option<String>,

    /// First day of validity (inclusive)
    pub valid_from: NaiveDate,

    /// Last day of validity (inclusive)
    pub valid_until: NaiveDate,

    /// Manual enable switch; enabled when omitted
    #[serde(default = "enabled")]
    pub is_active: bool,
}

fn enabled() -> bool {
    true
}

impl PromotionFixture {
    /// Convert to a domain [`Promotion`], resolving the target listing key.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::ListingNotFound`] when `target` names a
    /// listing key that was not loaded.
    pub fn into_promotion(
        self,
        listing_keys: &FxHashMap<String, EntityId>,
    ) -> Result<Promotion, FixtureError> {
        let mut promotion = Promotion::new(
            self.name,
            self.kind,
            self.value,
            self.category,
            self.valid_from,
            self.valid_until,
        );

        if let Some(target) = self.target {
            let entity = listing_keys
                .get(&target)
                .copied()
                .ok_or_else(|| FixtureError::ListingNotFound(target))?;
            promotion = promotion.targeting(entity);
        }

        if let Some(code) = self.promo_code {
            promotion = promotion.with_code(&code);
        }

        if !self.is_active {
            promotion = promotion.disabled();
        }

        Ok(promotion)
    }
}
