//! End-to-end pricing against the lodge fixture set, the way the public
//! pages consume the core: fetch active promotions for a category, resolve
//! one promotion per listing, compute the display price and badge.
//!
//! The lodge set (priced on 2026-08-30) works out to:
//!
//! - Chambre Standard, 45 000: no offer of its own, falls back to the
//!   category-general "Offre verte -10%" -> 40 500, badge `-10%`.
//! - Suite Deluxe, 75 000: has a direct 10 000-franc offer which overrides
//!   the general one -> 65 000, badge `-10 000 FCFA`.
//! - Chambre Familiale, 95 000: targeted by an informational PACK offer, so
//!   no computed price; the page shows the base price plus the pack's name.
//! - Ndolè aux crevettes, 15 000: restaurant category, general 2 000-franc
//!   menu offer -> 13 000.
//! - "Saint-Valentin -20%" exists in the set but its window closed in
//!   February; read-time filtering drops it before matching.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::XAF};
use testresult::TestResult;

use baobab::prelude::*;

fn end_of_august() -> TestResult<NaiveDate> {
    Ok("2026-08-30".parse()?)
}

#[test]
fn standard_room_gets_the_general_offer() -> TestResult {
    let fixture = Fixture::from_set("lodge")?;
    let today = end_of_august()?;
    let active = active_for(TargetCategory::Room, today, fixture.promotions());

    let standard = fixture.listing("standard")?;
    let priced = quote(standard.id, TargetCategory::Room, standard.base_price, &active)?;

    assert_eq!(priced.display_price(), Money::from_minor(40_500, XAF));
    assert_eq!(
        priced.applied.as_ref().map(|applied| applied.label.as_str()),
        Some("-10%")
    );

    Ok(())
}

#[test]
fn deluxe_suite_keeps_its_own_offer() -> TestResult {
    let fixture = Fixture::from_set("lodge")?;
    let today = end_of_august()?;
    let active = active_for(TargetCategory::Room, today, fixture.promotions());

    let deluxe = fixture.listing("deluxe")?;
    let priced = quote(deluxe.id, TargetCategory::Room, deluxe.base_price, &active)?;

    assert_eq!(
        priced.display_price(),
        Money::from_minor(65_000, XAF),
        "the suite's direct offer overrides the blanket -10%"
    );
    assert_eq!(
        priced.applied.as_ref().map(|applied| applied.label.as_str()),
        Some("-10 000 FCFA")
    );
    assert_eq!(priced.savings()?, Some(Money::from_minor(10_000, XAF)));

    Ok(())
}

#[test]
fn pack_offer_shows_name_instead_of_price() -> TestResult {
    let fixture = Fixture::from_set("lodge")?;
    let today = end_of_august()?;
    let active = active_for(TargetCategory::Room, today, fixture.promotions());

    let familiale = fixture.listing("familiale")?;
    let priced = quote(
        familiale.id,
        TargetCategory::Room,
        familiale.base_price,
        &active,
    )?;

    assert_eq!(priced.discounted_price, None);
    assert_eq!(priced.display_price(), familiale.base_price);
    assert_eq!(
        priced.applied.as_ref().map(|applied| applied.label.as_str()),
        Some("Pack Lune de Miel")
    );

    Ok(())
}

#[test]
fn restaurant_menu_gets_its_fixed_discount() -> TestResult {
    let fixture = Fixture::from_set("lodge")?;
    let today = end_of_august()?;
    let active = active_for(TargetCategory::Restoration, today, fixture.promotions());

    let ndole = fixture.listing("ndole")?;
    let priced = quote(ndole.id, TargetCategory::Restoration, ndole.base_price, &active)?;

    assert_eq!(priced.display_price(), Money::from_minor(13_000, XAF));

    Ok(())
}

#[test]
fn expired_storewide_offer_never_reaches_matching() -> TestResult {
    let fixture = Fixture::from_set("lodge")?;
    let today = end_of_august()?;
    let active = active_for(TargetCategory::Room, today, fixture.promotions());

    assert!(
        active
            .iter()
            .all(|promotion| promotion.name != "Saint-Valentin -20%"),
        "the February window closed; read-time filtering drops the offer"
    );

    Ok(())
}

#[test]
fn oversized_fixed_discount_hides_the_discounted_price() -> TestResult {
    let today = end_of_august()?;
    let dish_price = Money::from_minor(15_000, XAF);

    let oversized = Promotion::new(
        "Trop généreux",
        DiscountKind::FixedAmount,
        Decimal::from(20_000),
        TargetCategory::Restoration,
        "2026-01-01".parse()?,
        "2026-12-31".parse()?,
    );
    let active = active_for(TargetCategory::Restoration, today, &[oversized]);

    let priced = quote(EntityId::new(), TargetCategory::Restoration, dish_price, &active)?;

    assert_eq!(
        priced.discounted_price, None,
        "a discount larger than the price shows the original price only"
    );
    assert_eq!(priced.display_price(), dish_price);

    Ok(())
}

#[test]
fn calculator_and_label_agree_on_kind_dispatch() -> TestResult {
    let base = Money::from_minor(75_000, XAF);
    let from: NaiveDate = "2026-01-01".parse()?;
    let until: NaiveDate = "2026-12-31".parse()?;

    for kind in [
        DiscountKind::Percentage,
        DiscountKind::FixedAmount,
        DiscountKind::SpecialOffer,
        DiscountKind::Pack,
        DiscountKind::Unknown,
    ] {
        let promotion = Promotion::new(
            "Nom générique",
            kind,
            Decimal::from(10),
            TargetCategory::Room,
            from,
            until,
        );

        let price = discounted_price(&base, &promotion)?;
        let label = format_promo_label(&promotion);

        if price.is_some() {
            assert_ne!(
                label, promotion.name,
                "{kind:?} computes a price, so its badge must not fall back to the name"
            );
        } else {
            assert_eq!(
                label, promotion.name,
                "{kind:?} has no arithmetic price, so its badge is the name"
            );
        }
    }

    Ok(())
}
