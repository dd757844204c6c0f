//! Promotions
//!
//! Promotion records as authored in the back office, plus the read-time
//! activity filter that mirrors the store's "active promotions" query.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listings::EntityId;

/// Promotion identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromotionId(Uuid);

impl PromotionId {
    /// Generate a fresh promotion id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PromotionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PromotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// How a promotion's `value` is applied to a base price.
///
/// The store keeps these as open strings; unrecognized values land in
/// [`DiscountKind::Unknown`] so a kind added administratively never breaks
/// price display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    /// `value` is a percentage of the base price, in [0, 100].
    Percentage,

    /// `value` is a whole-franc amount subtracted from the base price.
    FixedAmount,

    /// Informational offer; no arithmetic discount.
    SpecialOffer,

    /// Bundle offer; no arithmetic discount.
    Pack,

    /// Any kind this build does not recognize.
    #[serde(other)]
    Unknown,
}

/// Which part of the lodge a promotion governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetCategory {
    /// Storewide, every category.
    All,
    /// Rooms and suites.
    Room,
    /// Restaurant dishes and menus.
    Restoration,
    /// Pool access and passes.
    Pool,
    /// Excursions and on-site activities.
    Activity,
    /// Spa and wellness services.
    Wellness,
    /// Hosted events.
    Event,
    /// Any category this build does not recognize.
    #[serde(other)]
    Unknown,
}

/// A promotion record.
///
/// `target_entity` present means the promotion is entity-specific; absent
/// means it is general for its category. The usage counters are enforced at
/// redemption time and never consulted by price display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    /// Unique id.
    pub id: PromotionId,

    /// Display name, shown verbatim for non-arithmetic kinds.
    pub name: String,

    /// How `value` is applied.
    pub kind: DiscountKind,

    /// Percentage or whole-franc amount, depending on `kind`.
    pub value: Decimal,

    /// Category this promotion governs.
    pub category: TargetCategory,

    /// Specific room or service, when the promotion is not category-general.
    pub target_entity: Option<EntityId>,

    /// Customer-facing code, stored uppercased.
    pub promo_code: Option<String>,

    /// First day the promotion applies (inclusive).
    pub valid_from: NaiveDate,

    /// Last day the promotion applies (inclusive).
    pub valid_until: NaiveDate,

    /// Manual enable switch, independent of the validity window.
    pub is_active: bool,

    /// Total redemption cap, if any.
    #[serde(default)]
    pub usage_max: Option<u32>,

    /// Redemptions so far.
    #[serde(default)]
    pub usage_count: u32,

    /// Per-customer redemption cap, if any.
    #[serde(default)]
    pub usage_per_customer: Option<u32>,
}

impl Promotion {
    /// Create an enabled, category-general promotion with no code and no
    /// usage caps.
    pub fn new(
        name: impl Into<String>,
        kind: DiscountKind,
        value: Decimal,
        category: TargetCategory,
        valid_from: NaiveDate,
        valid_until: NaiveDate,
    ) -> Self {
        Self {
            id: PromotionId::new(),
            name: name.into(),
            kind,
            value,
            category,
            target_entity: None,
            promo_code: None,
            valid_from,
            valid_until,
            is_active: true,
            usage_max: None,
            usage_count: 0,
            usage_per_customer: None,
        }
    }

    /// Narrow this promotion to a single room or service.
    #[must_use]
    pub fn targeting(mut self, entity: EntityId) -> Self {
        self.target_entity = Some(entity);
        self
    }

    /// Attach a customer-facing code, uppercased.
    #[must_use]
    pub fn with_code(mut self, code: &str) -> Self {
        self.promo_code = Some(code.to_uppercase());
        self
    }

    /// Disable the promotion without touching its window.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Whether the promotion applies on the given day.
    ///
    /// Both window bounds are inclusive. Activity is derived at read time;
    /// there is no background expiry.
    #[must_use]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.is_active && date >= self.valid_from && date <= self.valid_until
    }

    /// Whether the promotion governs the given category.
    ///
    /// [`TargetCategory::All`] promotions govern every category.
    #[must_use]
    pub fn governs(&self, category: TargetCategory) -> bool {
        self.category == TargetCategory::All || self.category == category
    }
}

/// Filter promotions down to those active for a category on a given day.
///
/// Pure counterpart of the store's active-promotions query; preserves input
/// order, which downstream matching relies on.
#[must_use]
pub fn active_for(
    category: TargetCategory,
    today: NaiveDate,
    promotions: &[Promotion],
) -> Vec<Promotion> {
    promotions
        .iter()
        .filter(|promo| promo.governs(category) && promo.is_active_on(today))
        .cloned()
        .collect()
}
