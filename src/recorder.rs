use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::{
    day::{DayRecord, Session},
    entry::RunEntry,
    store::Store,
};

/// Folds validated entries into the store.
///
/// Carries the last resolved target across calls, so a target set on one
/// day is reused on a later day that has none of its own. The carry-over is
/// process-local and never read from storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recorder {
    carried_target_km: Option<f64>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn carried_target_km(&self) -> Option<f64> {
        self.carried_target_km
    }

    /// Target that applies to a new session on `day`, in priority order:
    /// explicit, the day's own, the carried one.
    pub fn resolve_target(&self, day: Option<&DayRecord>, explicit_km: Option<f64>) -> Option<f64> {
        explicit_km
            .or_else(|| day.and_then(DayRecord::target_km))
            .or(self.carried_target_km)
    }

    /// Append a session for `entry` to the day of `at` and return it.
    pub fn record(&mut self, store: &mut Store, entry: &RunEntry, at: NaiveDateTime) -> Session {
        let date: NaiveDate = at.date();
        let target = self.resolve_target(store.day(date), entry.target_km);

        let day = store.day_mut(date);
        if let Some(target_km) = target {
            day.set_target(target_km);
            self.carried_target_km = Some(target_km);
        }

        let session = Session::from_entry(
            at.format("%H:%M").to_string(),
            entry,
            target.unwrap_or(0.0),
        );
        let session = day.append(session).clone();

        debug!(
            date = %date,
            distance_km = session.distance_km,
            cumulative_km = session.cumulative_distance_at_entry_km,
            target_km = session.target_at_entry_km,
            "recorded session"
        );
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::parse_date;

    fn at(date: &str, hm: (u32, u32)) -> NaiveDateTime {
        parse_date(date).unwrap().and_hms_opt(hm.0, hm.1, 0).unwrap()
    }

    fn entry(distance_km: f64, target_km: Option<f64>) -> RunEntry {
        RunEntry::new(distance_km, distance_km * 6.0, 70.0, target_km).unwrap()
    }

    #[test]
    fn test_no_target_ever_set_records_zero() {
        let mut store = Store::new();
        let mut recorder = Recorder::new();
        let s = recorder.record(&mut store, &entry(3.0, None), at("2024-01-01", (7, 0)));
        assert_eq!(s.target_at_entry_km, 0.0);
        assert_eq!(recorder.carried_target_km(), None);
        let day = store.day(parse_date("2024-01-01").unwrap()).unwrap();
        assert_eq!(day.target_km(), None);
    }

    #[test]
    fn test_explicit_target_overwrites_day_target() {
        let mut store = Store::new();
        let mut recorder = Recorder::new();
        recorder.record(&mut store, &entry(3.0, Some(10.0)), at("2024-01-01", (7, 0)));
        let s = recorder.record(&mut store, &entry(2.0, Some(8.0)), at("2024-01-01", (9, 0)));
        assert_eq!(s.target_at_entry_km, 8.0);
        let day = store.day(parse_date("2024-01-01").unwrap()).unwrap();
        assert_eq!(day.target_km(), Some(8.0));
        assert_eq!(day.sessions()[0].target_at_entry_km, 10.0);
    }

    #[test]
    fn test_day_target_is_sticky() {
        let mut store = Store::new();
        let mut recorder = Recorder::new();
        recorder.record(&mut store, &entry(5.0, Some(10.0)), at("2024-01-01", (7, 0)));
        let s = recorder.record(&mut store, &entry(6.0, None), at("2024-01-01", (18, 0)));
        assert_eq!(s.target_at_entry_km, 10.0);
    }

    #[test]
    fn test_stored_day_target_wins_over_carry() {
        let mut store = Store::new();
        Recorder::new().record(&mut store, &entry(1.0, Some(12.0)), at("2024-01-02", (6, 0)));

        let mut recorder = Recorder::new();
        recorder.record(&mut store, &entry(1.0, Some(4.0)), at("2024-01-01", (6, 0)));
        let s = recorder.record(&mut store, &entry(1.0, None), at("2024-01-02", (7, 0)));
        assert_eq!(s.target_at_entry_km, 12.0);
        assert_eq!(recorder.carried_target_km(), Some(12.0));
    }

    #[test]
    fn test_carried_target_is_persisted_on_new_day() {
        let mut store = Store::new();
        let mut recorder = Recorder::new();
        recorder.record(&mut store, &entry(5.0, Some(10.0)), at("2024-01-01", (7, 0)));
        let s = recorder.record(&mut store, &entry(4.0, None), at("2024-01-02", (7, 0)));
        assert_eq!(s.target_at_entry_km, 10.0);
        let day = store.day(parse_date("2024-01-02").unwrap()).unwrap();
        assert_eq!(day.target_km(), Some(10.0));
    }

    #[test]
    fn test_time_of_day_is_hours_and_minutes() {
        let mut store = Store::new();
        let s = Recorder::new().record(&mut store, &entry(1.0, None), at("2024-01-01", (6, 5)));
        assert_eq!(s.time_of_day, "06:05");
    }
}
