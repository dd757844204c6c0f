//! Promotion matching
//!
//! Resolves which single promotion applies to a given room or service, out
//! of the active promotions fetched for its category.

use crate::{
    listings::EntityId,
    promotions::{Promotion, TargetCategory},
};

/// Resolve the one promotion that applies to an entity, if any.
///
/// `active` is expected to be pre-filtered to promotions active today for
/// `category`; this function still narrows by [`Promotion::governs`]
/// defensively, which is the identity on a correctly filtered list. It never
/// filters by date.
///
/// Precedence is two-tier, first match wins on stable input order:
///
/// 1. a promotion targeting exactly this entity;
/// 2. otherwise a category-general promotion (no target entity).
///
/// An entity-specific offer always overrides a blanket category offer, and
/// an entity without its own offer still benefits from the blanket one.
/// There is no scoring and no "best discount wins". When several promotions
/// target the same entity, the first in input order is kept.
///
/// No match is a valid, silent outcome, not an error.
#[must_use]
pub fn resolve_promotion<'a>(
    entity: EntityId,
    category: TargetCategory,
    active: &'a [Promotion],
) -> Option<&'a Promotion> {
    let mut governed = active.iter().filter(|promo| promo.governs(category));

    governed
        .clone()
        .find(|promo| promo.target_entity == Some(entity))
        .or_else(|| governed.find(|promo| promo.target_entity.is_none()))
}
