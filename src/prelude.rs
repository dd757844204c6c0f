//! Baobab prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    announcements::{
        Announcement, AnnouncementId, DisplayState, ParsePlacementError, Placement,
        select_announcements,
    },
    discounts::{DiscountError, discounted_price},
    display::{format_currency, format_promo_label},
    fixtures::{Fixture, FixtureError},
    listings::{EntityId, Listing},
    matching::resolve_promotion,
    promotions::{DiscountKind, Promotion, PromotionId, TargetCategory, active_for},
    quotes::{AppliedPromotion, Quote, quote},
};
