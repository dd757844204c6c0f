//! Utils

use chrono::NaiveDate;
use clap::Parser;

/// Arguments shared by the demos
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Fixture set to load
    #[clap(short, long, default_value = "lodge")]
    pub fixture: String,

    /// Day to price/select for, `YYYY-MM-DD`; defaults to today
    #[clap(short, long)]
    pub date: Option<NaiveDate>,
}

impl DemoArgs {
    /// The day to evaluate against, defaulting to the current date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.date
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}
