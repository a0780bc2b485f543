use serde::{Deserialize, Serialize};

use crate::{entry::RunEntry, metrics};

/// One recorded run. Field names on disk are kept from the original data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Wall-clock time of entry, `HH:MM`.
    #[serde(rename = "time")]
    pub time_of_day: String,
    #[serde(rename = "jarak")]
    pub distance_km: f64,
    #[serde(rename = "waktu")]
    pub duration_min: f64,
    #[serde(rename = "pace")]
    pub pace_min_per_km: f64,
    #[serde(rename = "speed")]
    pub speed_km_per_h: f64,
    #[serde(rename = "kal")]
    pub calories_burned: f64,
    /// Daily target in effect when recorded, 0 when there was none.
    #[serde(rename = "target")]
    pub target_at_entry_km: f64,
    /// The day's total distance including this session.
    #[serde(rename = "total_jarak_harian")]
    pub cumulative_distance_at_entry_km: f64,
}

impl Session {
    /// Derive the metrics for `entry`. The cumulative figure is filled in by
    /// [`DayRecord::append`].
    pub(crate) fn from_entry(time_of_day: String, entry: &RunEntry, target_km: f64) -> Self {
        Self {
            time_of_day,
            distance_km: entry.distance_km,
            duration_min: entry.duration_min,
            pace_min_per_km: metrics::pace_min_per_km(entry.distance_km, entry.duration_min),
            speed_km_per_h: metrics::speed_km_per_h(entry.distance_km, entry.duration_min),
            calories_burned: metrics::calories_burned(entry.distance_km, entry.body_weight_kg),
            target_at_entry_km: target_km,
            cumulative_distance_at_entry_km: 0.0,
        }
    }
}

/// Aggregate state for one calendar date.
///
/// `cumulative_distance_km` is always the in-order sum of the session
/// distances; the only way to add a session is [`DayRecord::append`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DayRecord {
    target_km: Option<f64>,
    cumulative_distance_km: f64,
    sessions: Vec<Session>,
}

impl DayRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a day from stored parts, recomputing the cumulative distance.
    pub fn from_parts(target_km: Option<f64>, sessions: Vec<Session>) -> Self {
        let cumulative_distance_km = sessions.iter().fold(0.0, |acc, s| acc + s.distance_km);
        Self {
            target_km: target_km.filter(|t| *t > 0.0),
            cumulative_distance_km,
            sessions,
        }
    }

    pub fn target_km(&self) -> Option<f64> {
        self.target_km
    }

    pub fn cumulative_distance_km(&self) -> f64 {
        self.cumulative_distance_km
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty() && self.target_km.is_none()
    }

    pub fn total_duration_min(&self) -> f64 {
        self.sessions.iter().map(|s| s.duration_min).sum()
    }

    pub fn total_calories(&self) -> f64 {
        self.sessions.iter().map(|s| s.calories_burned).sum()
    }

    pub(crate) fn set_target(&mut self, target_km: f64) {
        self.target_km = Some(target_km);
    }

    /// Append a session, advancing the day's cumulative distance.
    pub(crate) fn append(&mut self, mut session: Session) -> &Session {
        self.cumulative_distance_km += session.distance_km;
        session.cumulative_distance_at_entry_km = self.cumulative_distance_km;
        self.sessions.push(session);
        &self.sessions[self.sessions.len() - 1]
    }
}
