//! Display
//!
//! Human-readable price and promotion labels. The lodge prices everything
//! in CFA francs, which have no subunits, so amounts are whole francs with
//! space-grouped thousands in the local convention: `75 000 FCFA`.

use rust_decimal::{RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Formatter, Money, Params, Position, iso};

use crate::promotions::{DiscountKind, Promotion};

/// Format a whole-franc amount as `"75 000 FCFA"`.
///
/// Space thousands separator, no decimal places, trailing currency label.
#[must_use]
pub fn format_currency(amount: i64) -> String {
    let money = Money::from_minor(amount, iso::XAF);

    let params = Params {
        digit_separator: ' ',
        symbol: Some("FCFA"),
        positions: &[
            Position::Sign,
            Position::Amount,
            Position::Space,
            Position::Symbol,
        ],
        ..Params::default()
    };

    Formatter::money(&money, params)
}

/// Render the badge text for a promotion.
///
/// - [`DiscountKind::Percentage`] → `"-10%"`
/// - [`DiscountKind::FixedAmount`] → `"-10 000 FCFA"`
/// - every other kind → the promotion's name verbatim
///
/// Kept in lockstep with [`crate::discounts::discounted_price`]: every kind
/// that yields an arithmetic price yields an arithmetic label here.
#[must_use]
pub fn format_promo_label(promotion: &Promotion) -> String {
    match promotion.kind {
        DiscountKind::Percentage => format!("-{}%", promotion.value.normalize()),
        DiscountKind::FixedAmount => {
            // Authoring validates the amount fits a whole-franc i64; fall
            // back to the raw decimal rather than panic if it does not.
            promotion
                .value
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
                .map_or_else(
                    || format!("-{} FCFA", promotion.value.normalize()),
                    |minor| format!("-{}", format_currency(minor)),
                )
        }
        DiscountKind::SpecialOffer | DiscountKind::Pack | DiscountKind::Unknown => {
            promotion.name.clone()
        }
    }
}
