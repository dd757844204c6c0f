//! Baobab
//!
//! Baobab is the pricing and announcement core of a lodge marketing site: it resolves which
//! promotion applies to a room or dish, computes the discounted price, renders the badge, and
//! decides which announcements each page position shows.

pub mod announcements;
pub mod discounts;
pub mod display;
pub mod fixtures;
pub mod listings;
pub mod matching;
pub mod prelude;
pub mod promotions;
pub mod quotes;
pub mod utils;
