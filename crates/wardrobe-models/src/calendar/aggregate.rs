//! Per-day aggregation of outfit records for the calendar grid.
//!
//! The calendar view fetches a month's worth of records (a flat, possibly
//! unsorted list) and needs O(1) answers while painting each day cell:
//! "does this date have anything, and of what provenance?". [`DateBuckets`]
//! builds that index once per fetch; [`DayIndicators`] reduces a day's tag
//! set to the two indicator dots the grid actually renders.
//!
//! Records arrive pre-normalized to a calendar date in the caller's display
//! timezone. No timezone conversion happens here.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How an outfit record was produced. Closed set, matching the backend's
/// `outfit_source` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutfitSource {
    /// Generated by the daily schedule.
    Scheduled,
    /// Requested explicitly by the user.
    OnDemand,
    /// Entered by hand.
    Manual,
    /// Built around a chosen source item.
    Pairing,
}

impl OutfitSource {
    /// All provenance tags, in wire order.
    pub const ALL: [Self; 4] = [Self::Scheduled, Self::OnDemand, Self::Manual, Self::Pairing];

    /// The wire name used by the backend API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::OnDemand => "on_demand",
            Self::Manual => "manual",
            Self::Pairing => "pairing",
        }
    }
}

impl fmt::Display for OutfitSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutfitSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "on_demand" => Ok(Self::OnDemand),
            "manual" => Ok(Self::Manual),
            "pairing" => Ok(Self::Pairing),
            other => Err(Error::UnknownSource(other.to_owned())),
        }
    }
}

/// One dated record, as fed to [`DateBuckets::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEntry {
    /// The calendar day this record belongs to.
    pub date: NaiveDate,
    /// Where the record came from.
    pub source: OutfitSource,
}

impl CalendarEntry {
    /// Creates an entry for `date` with the given provenance.
    pub fn new(date: NaiveDate, source: OutfitSource) -> Self {
        Self { date, source }
    }
}

/// Parses a backend date key (`YYYY-MM-DD`) into a [`NaiveDate`].
pub fn parse_date_key(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| Error::InvalidDateKey {
        value: value.to_owned(),
        source,
    })
}

/// Index of distinct provenance tags per calendar day.
///
/// Duplicate (date, source) pairs collapse to one entry; days with no
/// records are absent rather than mapped to an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateBuckets {
    buckets: HashMap<NaiveDate, HashSet<OutfitSource>>,
}

impl DateBuckets {
    /// Builds the index from a flat record list. Input order is irrelevant.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CalendarEntry>,
    {
        let mut buckets: HashMap<NaiveDate, HashSet<OutfitSource>> = HashMap::new();
        let mut entry_count = 0usize;
        for entry in entries {
            buckets.entry(entry.date).or_default().insert(entry.source);
            entry_count += 1;
        }
        tracing::trace!(entries = entry_count, days = buckets.len(), "built date buckets");
        Self { buckets }
    }

    /// The distinct tags present on `date`, or `None` if the day is empty.
    pub fn tags_for(&self, date: NaiveDate) -> Option<&HashSet<OutfitSource>> {
        self.buckets.get(&date)
    }

    /// True if `date` has at least one record.
    pub fn has_entries(&self, date: NaiveDate) -> bool {
        self.buckets.contains_key(&date)
    }

    /// Number of days with at least one record.
    pub fn day_count(&self) -> usize {
        self.buckets.len()
    }

    /// True when no record was indexed.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterates over `(date, tags)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &HashSet<OutfitSource>)> {
        self.buckets.iter()
    }

    /// Indicator flags for `date`, for painting the day cell.
    pub fn classify(&self, date: NaiveDate) -> DayIndicators {
        DayIndicators::classify(self.tags_for(date))
    }
}

/// The indicator dots a calendar day cell renders.
///
/// Manual entries render identically to on-demand ones; that merge is a
/// fixed UI policy, not a lossy accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayIndicators {
    /// The day has a scheduled outfit.
    pub has_scheduled: bool,
    /// The day has an on-demand or manual outfit.
    pub has_on_demand: bool,
}

impl DayIndicators {
    /// Classifies a day's tag set (`None` for a day with no records).
    pub fn classify(tags: Option<&HashSet<OutfitSource>>) -> Self {
        match tags {
            None => Self::default(),
            Some(tags) => Self {
                has_scheduled: tags.contains(&OutfitSource::Scheduled),
                has_on_demand: tags.contains(&OutfitSource::OnDemand)
                    || tags.contains(&OutfitSource::Manual),
            },
        }
    }

    /// True when the cell shows any indicator at all.
    pub fn any(self) -> bool {
        self.has_scheduled || self.has_on_demand
    }
}
