//! Announcements
//!
//! Banner and popup records authored in the back office, and the targeting
//! resolver that decides which of them a page position shows today.
//! "Expired" and "upcoming" are derived at read time by comparing the
//! current date to the display window; nothing is persisted.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;
use uuid::Uuid;

/// Announcement identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnouncementId(Uuid);

impl AnnouncementId {
    /// Generate a fresh announcement id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AnnouncementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnnouncementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Page or slot an announcement targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Placement {
    /// Landing page.
    Home,
    /// Rooms and suites pages.
    Lodging,
    /// Restaurant pages.
    Restoration,
    /// Activities pages.
    Activity,
    /// Events pages.
    Event,
    /// Shown on every page.
    AllPages,
    /// Modal popup slot.
    Popup,
    /// Top banner slot.
    Banner,
    /// Any placement this build does not recognize.
    #[serde(other)]
    Unknown,
}

/// Failed to parse a placement from its store spelling.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown placement: {0}")]
pub struct ParsePlacementError(String);

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HOME" => Ok(Self::Home),
            "LODGING" => Ok(Self::Lodging),
            "RESTORATION" => Ok(Self::Restoration),
            "ACTIVITY" => Ok(Self::Activity),
            "EVENT" => Ok(Self::Event),
            "ALL_PAGES" => Ok(Self::AllPages),
            "POPUP" => Ok(Self::Popup),
            "BANNER" => Ok(Self::Banner),
            other => Err(ParsePlacementError(other.to_string())),
        }
    }
}

/// Read-time classification of an announcement.
///
/// Mutually exclusive and exhaustive; a pure function of the current date,
/// the display window and the manual switch. Recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayState {
    /// Within the window and enabled.
    Active,
    /// Within the window but manually disabled.
    Inactive,
    /// The window has not opened yet.
    Upcoming,
    /// The window has closed.
    Expired,
}

/// An announcement record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    /// Unique id.
    pub id: AnnouncementId,

    /// Headline.
    pub title: String,

    /// Body copy.
    pub body: String,

    /// Page or slot this announcement targets.
    pub placement: Placement,

    /// First day of the display window (inclusive).
    pub active_from: NaiveDate,

    /// Last day of the display window (inclusive).
    pub active_until: NaiveDate,

    /// Manual enable switch, independent of the window.
    pub is_active: bool,

    /// Pinned announcements sort before the rest.
    #[serde(default)]
    pub is_pinned: bool,

    /// Explicit secondary sort key, ascending.
    #[serde(default)]
    pub order: i32,

    /// Authoring timestamp; final ordering tie-break.
    pub created_at: DateTime<Utc>,
}

impl Announcement {
    /// Create an enabled, unpinned announcement with order 0, created now.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        placement: Placement,
        active_from: NaiveDate,
        active_until: NaiveDate,
    ) -> Self {
        Self {
            id: AnnouncementId::new(),
            title: title.into(),
            body: body.into(),
            placement,
            active_from,
            active_until,
            is_active: true,
            is_pinned: false,
            order: 0,
            created_at: Utc::now(),
        }
    }

    /// Pin the announcement ahead of unpinned ones.
    #[must_use]
    pub fn pinned(mut self) -> Self {
        self.is_pinned = true;
        self
    }

    /// Set the explicit sort key.
    #[must_use]
    pub fn ordered(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Disable the announcement without touching its window.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Override the authoring timestamp.
    #[must_use]
    pub fn created(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    /// Whether this announcement may be shown at `placement` today.
    ///
    /// Enabled, window open (both bounds inclusive), and targeting either
    /// the requested placement or every page. Expiry always beats pinning:
    /// a pinned announcement outside its window is simply not eligible.
    #[must_use]
    pub fn is_eligible(&self, placement: Placement, today: NaiveDate) -> bool {
        self.is_active
            && today >= self.active_from
            && today <= self.active_until
            && (self.placement == placement || self.placement == Placement::AllPages)
    }

    /// Classify the announcement for the admin tables.
    #[must_use]
    pub fn display_state(&self, today: NaiveDate) -> DisplayState {
        if today > self.active_until {
            DisplayState::Expired
        } else if today < self.active_from {
            DisplayState::Upcoming
        } else if self.is_active {
            DisplayState::Active
        } else {
            DisplayState::Inactive
        }
    }
}

/// Select and order the announcements a page position shows today.
///
/// Eligible candidates only, pinned first, then by explicit `order`
/// ascending, ties broken by authoring time ascending. An empty candidate
/// list or no eligible announcement yields an empty result, never an error.
#[must_use]
pub fn select_announcements<'a>(
    placement: Placement,
    candidates: &'a [Announcement],
    today: NaiveDate,
) -> SmallVec<[&'a Announcement; 4]> {
    let mut eligible: SmallVec<[&Announcement; 4]> = candidates
        .iter()
        .filter(|announcement| announcement.is_eligible(placement, today))
        .collect();

    eligible.sort_by(|a, b| {
        b.is_pinned
            .cmp(&a.is_pinned)
            .then_with(|| a.order.cmp(&b.order))
            .then_with(|| a.created_at.cmp(&b.created_at))
    });

    eligible
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn in_window() -> TestResult<Announcement> {
        Ok(Announcement::new(
            "Pool reopening",
            "The pool reopens this weekend.",
            Placement::Home,
            "2026-08-01".parse()?,
            "2026-08-31".parse()?,
        ))
    }

    #[test]
    fn eligibility_window_is_inclusive() -> TestResult {
        let banner = in_window()?;

        assert!(banner.is_eligible(Placement::Home, "2026-08-01".parse()?));
        assert!(banner.is_eligible(Placement::Home, "2026-08-31".parse()?));
        assert!(!banner.is_eligible(Placement::Home, "2026-07-31".parse()?));
        assert!(!banner.is_eligible(Placement::Home, "2026-09-01".parse()?));

        Ok(())
    }

    #[test]
    fn all_pages_is_eligible_everywhere() -> TestResult {
        let mut banner = in_window()?;
        banner.placement = Placement::AllPages;

        assert!(banner.is_eligible(Placement::Home, "2026-08-15".parse()?));
        assert!(banner.is_eligible(Placement::Restoration, "2026-08-15".parse()?));

        Ok(())
    }

    #[test]
    fn other_placement_is_not_eligible() -> TestResult {
        let banner = in_window()?;

        assert!(!banner.is_eligible(Placement::Lodging, "2026-08-15".parse()?));

        Ok(())
    }

    #[test]
    fn disabled_announcement_is_not_eligible() -> TestResult {
        let banner = in_window()?.disabled();

        assert!(!banner.is_eligible(Placement::Home, "2026-08-15".parse()?));

        Ok(())
    }

    #[test]
    fn display_state_covers_all_four_cases() -> TestResult {
        let banner = in_window()?;

        assert_eq!(
            banner.display_state("2026-07-15".parse()?),
            DisplayState::Upcoming
        );
        assert_eq!(
            banner.display_state("2026-08-15".parse()?),
            DisplayState::Active
        );
        assert_eq!(
            banner.display_state("2026-09-15".parse()?),
            DisplayState::Expired
        );
        assert_eq!(
            banner.disabled().display_state("2026-08-15".parse()?),
            DisplayState::Inactive
        );

        Ok(())
    }

    #[test]
    fn expired_wins_over_the_manual_switch() -> TestResult {
        let banner = in_window()?.disabled();

        assert_eq!(
            banner.display_state("2026-09-15".parse()?),
            DisplayState::Expired,
            "the four states are mutually exclusive; window checks run first"
        );

        Ok(())
    }

    #[test]
    fn placement_parses_store_spelling() -> TestResult {
        assert_eq!("ALL_PAGES".parse::<Placement>()?, Placement::AllPages);
        assert_eq!("POPUP".parse::<Placement>()?, Placement::Popup);
        assert_eq!(
            "SIDEBAR".parse::<Placement>(),
            Err(ParsePlacementError("SIDEBAR".to_string()))
        );

        Ok(())
    }

    #[test]
    fn unknown_placement_deserializes_to_fallback() -> TestResult {
        let placement: Placement = serde_norway::from_str("SIDEBAR")?;

        assert_eq!(placement, Placement::Unknown);

        Ok(())
    }
}
