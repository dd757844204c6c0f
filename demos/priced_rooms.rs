//! Prices the lodge fixture's rooms the way the public room-listing page
//! does: fetch active promotions for the category, resolve one per room,
//! compute the display price and badge.

use anyhow::Result;
use baobab::{prelude::*, utils::DemoArgs};
use clap::Parser;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Room")]
    name: String,

    #[tabled(rename = "Base price")]
    base: String,

    #[tabled(rename = "Badge")]
    badge: String,

    #[tabled(rename = "Display price")]
    display: String,
}

fn main() -> Result<()> {
    let args = DemoArgs::parse();
    let today = args.today();

    let fixture = Fixture::from_set(&args.fixture)?;
    let active = active_for(TargetCategory::Room, today, fixture.promotions());

    let mut rows = Vec::new();

    for listing in fixture.listings_in(TargetCategory::Room) {
        let priced = quote(listing.id, TargetCategory::Room, listing.base_price, &active)?;

        rows.push(Row {
            name: listing.name.clone(),
            base: format_currency(priced.base_price.to_minor_units()),
            badge: priced
                .applied
                .as_ref()
                .map_or_else(|| "-".to_string(), |applied| applied.label.clone()),
            display: format_currency(priced.display_price().to_minor_units()),
        });
    }

    println!("Rooms on {today}");
    println!("{}", Table::new(rows));

    Ok(())
}
