use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::day::DayRecord;

/// Date format used for store keys and display.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Every recorded day, keyed by calendar date.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Store {
    days: BTreeMap<NaiveDate, DayRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistorySummary {
    pub days: usize,
    pub sessions: usize,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.get(&date)
    }

    pub fn days(&self) -> impl Iterator<Item = (&NaiveDate, &DayRecord)> {
        self.days.iter()
    }

    pub fn dates_newest_first(&self) -> Vec<NaiveDate> {
        self.days.keys().rev().copied().collect()
    }

    pub fn summary(&self) -> HistorySummary {
        HistorySummary {
            days: self.days.len(),
            sessions: self.days.values().map(|d| d.sessions().len()).sum(),
        }
    }

    /// Insert a rebuilt day. Days with neither sessions nor a target are not kept.
    pub(crate) fn insert(&mut self, date: NaiveDate, day: DayRecord) {
        if day.is_empty() {
            self.days.remove(&date);
        } else {
            self.days.insert(date, day);
        }
    }

    pub(crate) fn day_mut(&mut self, date: NaiveDate) -> &mut DayRecord {
        self.days.entry(date).or_default()
    }

    /// Returns whether the date was present.
    pub(crate) fn remove(&mut self, date: NaiveDate) -> bool {
        self.days.remove(&date).is_some()
    }

    pub(crate) fn clear(&mut self) {
        self.days.clear();
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}
