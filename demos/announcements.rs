//! Shows which announcements a page position displays on a given day, in
//! display order, alongside each record's derived state.

use anyhow::Result;
use baobab::{prelude::*, utils::DemoArgs};
use clap::Parser;
use tabled::{Table, Tabled};

#[derive(Debug, Parser)]
struct Args {
    #[clap(flatten)]
    common: DemoArgs,

    /// Page position to select for, in the store spelling (e.g. HOME)
    #[clap(short, long, default_value = "HOME")]
    placement: Placement,
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Title")]
    title: String,

    #[tabled(rename = "Placement")]
    placement: String,

    #[tabled(rename = "Pinned")]
    pinned: bool,

    #[tabled(rename = "State")]
    state: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let today = args.common.today();

    let fixture = Fixture::from_set(&args.common.fixture)?;
    let selected = select_announcements(args.placement, fixture.announcements(), today);

    let rows: Vec<Row> = selected
        .iter()
        .map(|announcement| Row {
            title: announcement.title.clone(),
            placement: format!("{:?}", announcement.placement),
            pinned: announcement.is_pinned,
            state: format!("{:?}", announcement.display_state(today)),
        })
        .collect();

    println!("{:?} announcements on {today}", args.placement);
    println!("{}", Table::new(rows));

    Ok(())
}
