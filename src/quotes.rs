//! Quotes
//!
//! Ties matching, calculation and labelling together the way a page data
//! loader does: one listing in, one display-ready price out.

use rusty_money::{Money, MoneyError, iso::Currency};

use crate::{
    discounts::{DiscountError, discounted_price},
    display::format_promo_label,
    listings::EntityId,
    matching::resolve_promotion,
    promotions::{Promotion, PromotionId, TargetCategory},
};

/// The promotion a quote ended up applying, ready for a badge.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedPromotion {
    /// Id of the applied promotion.
    pub id: PromotionId,

    /// Display name.
    pub name: String,

    /// Badge text, per [`format_promo_label`].
    pub label: String,
}

/// Display-ready pricing for one listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote<'a> {
    /// Undiscounted price.
    pub base_price: Money<'a, Currency>,

    /// Discounted price, when the applied promotion carries one.
    pub discounted_price: Option<Money<'a, Currency>>,

    /// The promotion that applied, if any.
    pub applied: Option<AppliedPromotion>,
}

impl<'a> Quote<'a> {
    /// The price the visitor pays: discounted when available, base
    /// otherwise.
    #[must_use]
    pub fn display_price(&self) -> Money<'a, Currency> {
        self.discounted_price.unwrap_or(self.base_price)
    }

    /// Savings against the base price, when a discounted price exists.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction fails.
    pub fn savings(&self) -> Result<Option<Money<'a, Currency>>, MoneyError> {
        self.discounted_price
            .map(|discounted| self.base_price.sub(discounted))
            .transpose()
    }
}

/// Quote one listing against the active promotions for its category.
///
/// Resolves a promotion per [`resolve_promotion`], computes the display
/// price per [`discounted_price`], and renders the badge. Pure; re-run on
/// every page render from freshly fetched data, never cached.
///
/// # Errors
///
/// Propagates [`DiscountError`] precondition violations from the
/// calculator.
pub fn quote<'a>(
    entity: EntityId,
    category: TargetCategory,
    base_price: Money<'a, Currency>,
    active: &[Promotion],
) -> Result<Quote<'a>, DiscountError> {
    let Some(promotion) = resolve_promotion(entity, category, active) else {
        return Ok(Quote {
            base_price,
            discounted_price: None,
            applied: None,
        });
    };

    let discounted = discounted_price(&base_price, promotion)?;

    Ok(Quote {
        base_price,
        discounted_price: discounted,
        applied: Some(AppliedPromotion {
            id: promotion.id,
            name: promotion.name.clone(),
            label: format_promo_label(promotion),
        }),
    })
}
