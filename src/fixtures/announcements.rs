//! Announcement Fixtures

use chrono::{DateTime, NaiveDate, Utc};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::announcements::{Announcement, Placement};

/// Wrapper for announcements in YAML
#[derive(Debug, Deserialize)]
pub struct AnnouncementsFixture {
    /// Map of announcement key -> announcement fixture
    pub announcements: FxHashMap<String, AnnouncementFixture>,
}

/// Announcement fixture from YAML
#[derive(Debug, Deserialize)]
pub struct AnnouncementFixture {
    /// Headline
    pub title: String,

    /// Body copy
    pub body: String,

    /// Placement, in the store spelling (`HOME`, `ALL_PAGES`, ...)
    pub placement: Placement,

    /// First day of the display window (inclusive)
    pub active_from: NaiveDate,

    /// Last day of the display window (inclusive)
    pub active_until: NaiveDate,

    /// Manual enable switch; enabled when omitted
    #[serde(default = "enabled")]
    pub is_active: bool,

    /// Pinned ahead of unpinned announcements
    #[serde(default)]
    pub is_pinned: bool,

    /// Explicit secondary sort key
    #[serde(default)]
    pub order: i32,

    /// Authoring timestamp; final ordering tie-break
    pub created_at: DateTime<Utc>,
}

fn enabled() -> bool {
    true
}

impl AnnouncementFixture {
    /// Convert to a domain [`Announcement`] with a fresh id.
    #[must_use]
    pub fn into_announcement(self) -> Announcement {
        let mut announcement = Announcement::new(
            self.title,
            self.body,
            self.placement,
            self.active_from,
            self.active_until,
        )
        .ordered(self.order)
        .created(self.created_at);

        if self.is_pinned {
            announcement = announcement.pinned();
        }

        if !self.is_active {
            announcement = announcement.disabled();
        }

        announcement
    }
}
