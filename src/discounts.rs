//! Discounts
//!
//! Turns a resolved promotion and a base price into a display price.

use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::promotions::{DiscountKind, Promotion};

/// Errors specific to discount calculations.
///
/// All of these indicate a data-integrity bug upstream (the promotion
/// authoring form validates values), not an expected runtime condition.
#[derive(Debug, Error, PartialEq)]
pub enum DiscountError {
    /// Base price was zero or negative.
    #[error("base price must be positive, got {0} minor units")]
    NonPositiveBasePrice(i64),

    /// Percentage promotion carried a value outside [0, 100].
    #[error("percentage value {0} is outside [0, 100]")]
    PercentOutOfRange(Decimal),

    /// Fixed-amount promotion carried a zero or negative value.
    #[error("fixed discount amount {0} is not positive")]
    NonPositiveAmount(Decimal),

    /// Decimal arithmetic overflowed or could not be represented.
    #[error("discount amount conversion overflowed or was not finite")]
    AmountConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculate the discounted display price for a base price under a
/// promotion.
///
/// Pure and idempotent. `Ok(None)` means "no discounted price to display":
/// either the promotion carries no arithmetic discount
/// ([`DiscountKind::SpecialOffer`], [`DiscountKind::Pack`], and unrecognized
/// kinds), or a fixed amount would make the price zero or negative. The
/// promotion name is shown instead in those cases.
///
/// Rounding is half-up to the whole minor unit; XAF has no subunits.
///
/// # Errors
///
/// Returns an error only for precondition violations:
///
/// - [`DiscountError::NonPositiveBasePrice`]: base price ≤ 0.
/// - [`DiscountError::PercentOutOfRange`]: percentage value outside [0, 100].
/// - [`DiscountError::NonPositiveAmount`]: fixed amount ≤ 0.
/// - [`DiscountError::AmountConversion`]: decimal conversion overflowed.
pub fn discounted_price<'a>(
    base_price: &Money<'a, Currency>,
    promotion: &Promotion,
) -> Result<Option<Money<'a, Currency>>, DiscountError> {
    let base_minor = base_price.to_minor_units();

    if base_minor <= 0 {
        return Err(DiscountError::NonPositiveBasePrice(base_minor));
    }

    match promotion.kind {
        DiscountKind::Percentage => {
            if !(Decimal::ZERO..=Decimal::ONE_HUNDRED).contains(&promotion.value) {
                return Err(DiscountError::PercentOutOfRange(promotion.value));
            }

            let remaining = percent_remainder_of_minor(promotion.value, base_minor)?;

            Ok(Some(Money::from_minor(remaining, base_price.currency())))
        }
        DiscountKind::FixedAmount => {
            if promotion.value <= Decimal::ZERO {
                return Err(DiscountError::NonPositiveAmount(promotion.value));
            }

            let remaining = fixed_remainder_of_minor(promotion.value, base_minor)?;

            if remaining > 0 {
                Ok(Some(Money::from_minor(remaining, base_price.currency())))
            } else {
                // Free or negative pricing is never displayed.
                Ok(None)
            }
        }
        DiscountKind::SpecialOffer | DiscountKind::Pack | DiscountKind::Unknown => Ok(None),
    }
}

/// What remains of a minor-unit amount after removing a percentage,
/// rounded half-up.
fn percent_remainder_of_minor(percent: Decimal, minor: i64) -> Result<i64, DiscountError> {
    let Some(minor) = Decimal::from_i64(minor) else {
        unreachable!("always returns `Some` for every `i64`")
    };

    let Some(fraction) = (Decimal::ONE_HUNDRED - percent).checked_div(Decimal::ONE_HUNDRED) else {
        return Err(DiscountError::AmountConversion);
    };

    let Some(remaining) = minor.checked_mul(fraction) else {
        return Err(DiscountError::AmountConversion);
    };

    let rounded = remaining.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    rounded.to_i64().ok_or(DiscountError::AmountConversion)
}

/// What remains of a minor-unit amount after subtracting a fixed currency
/// amount, rounded half-up. The subtraction happens on the exact decimal
/// value, so a fractional amount rounds the difference rather than itself.
fn fixed_remainder_of_minor(amount: Decimal, minor: i64) -> Result<i64, DiscountError> {
    let Some(minor) = Decimal::from_i64(minor) else {
        unreachable!("always returns `Some` for every `i64`")
    };

    let Some(remaining) = minor.checked_sub(amount) else {
        return Err(DiscountError::AmountConversion);
    };

    let rounded = remaining.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    rounded.to_i64().ok_or(DiscountError::AmountConversion)
}
