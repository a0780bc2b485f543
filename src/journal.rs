use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::{info, warn};

use crate::{
    day::{DayRecord, Session},
    entry::RunEntry,
    error::{StorageError, ValidationError},
    persistence::{LoadStatus, StoreBackend},
    recorder::Recorder,
    store::Store,
};

/// Result of recording a session. The session is in memory either way; `save`
/// says whether it also reached storage.
#[derive(Debug)]
pub struct Recorded {
    pub session: Session,
    pub save: Result<(), StorageError>,
}

/// The running log of one process: the in-memory store, its backend and the recorder.
///
/// Every mutation is followed by a save. A failed save never rolls back the
/// in-memory state, and the next mutation or [`Journal::save`] retries it.
#[derive(Debug)]
pub struct Journal<B: StoreBackend> {
    backend: B,
    store: Store,
    recorder: Recorder,
}

impl<B: StoreBackend> Journal<B> {
    pub fn open(backend: B) -> (Self, LoadStatus) {
        let loaded = backend.load();
        let journal = Self {
            backend,
            store: loaded.store,
            recorder: Recorder::new(),
        };
        (journal, loaded.status)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.store.day(date)
    }

    pub fn today(&self) -> Option<&DayRecord> {
        self.day(Local::now().date_naive())
    }

    pub fn carried_target_km(&self) -> Option<f64> {
        self.recorder.carried_target_km()
    }

    /// Validate raw figures and record them on the date of `at`.
    pub fn record_session(
        &mut self,
        distance_km: f64,
        duration_min: f64,
        body_weight_kg: f64,
        target_km: Option<f64>,
        at: NaiveDateTime,
    ) -> Result<Recorded, ValidationError> {
        let entry = RunEntry::new(distance_km, duration_min, body_weight_kg, target_km)?;
        Ok(self.record(&entry, at))
    }

    pub fn record(&mut self, entry: &RunEntry, at: NaiveDateTime) -> Recorded {
        let session = self.recorder.record(&mut self.store, entry, at);
        info!(
            date = %at.date(),
            distance_km = session.distance_km,
            day_total_km = session.cumulative_distance_at_entry_km,
            "session recorded"
        );
        Recorded {
            session,
            save: self.save(),
        }
    }

    pub fn record_now(&mut self, entry: &RunEntry) -> Recorded {
        self.record(entry, Local::now().naive_local())
    }

    /// Remove every trace of `date`. Returns whether the date existed; an absent
    /// date is a no-op and touches nothing on disk.
    pub fn delete_day(&mut self, date: NaiveDate) -> Result<bool, StorageError> {
        if !self.store.remove(date) {
            return Ok(false);
        }
        info!(date = %date, "deleted day");
        self.save()?;
        Ok(true)
    }

    pub fn clear_all(&mut self) -> Result<(), StorageError> {
        self.store.clear();
        info!("cleared running log");
        self.save()
    }

    pub fn save(&self) -> Result<(), StorageError> {
        self.backend.save(&self.store).map_err(|e| {
            warn!(error = %e, "failed to save running log");
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{persistence::MemoryStore, store::parse_date};
    use assert_matches::assert_matches;

    fn at(date: &str) -> NaiveDateTime {
        parse_date(date).unwrap().and_hms_opt(7, 30, 0).unwrap()
    }

    #[test]
    fn record_saves_after_each_session() {
        let (mut journal, status) = Journal::open(MemoryStore::new());
        assert_matches!(status, LoadStatus::Fresh);
        let recorded = journal
            .record_session(5.0, 30.0, 70.0, Some(10.0), at("2024-01-01"))
            .unwrap();
        assert!(recorded.save.is_ok());
        let json = journal.backend().saved_json().unwrap();
        assert!(json.contains("\"2024-01-01\""));
    }

    #[test]
    fn invalid_input_changes_nothing() {
        let (mut journal, _) = Journal::open(MemoryStore::new());
        let err = journal
            .record_session(5.0, 0.0, 70.0, None, at("2024-01-01"))
            .unwrap_err();
        assert_matches!(err, ValidationError::NotPositive { .. });
        assert!(journal.store().is_empty());
        assert!(journal.backend().saved_json().is_none());
    }

    #[test]
    fn failed_save_keeps_session_in_memory() {
        let (mut journal, _) = Journal::open(MemoryStore::failing());
        let recorded = journal
            .record_session(5.0, 30.0, 70.0, None, at("2024-01-01"))
            .unwrap();
        assert_matches!(recorded.save, Err(StorageError::Write { .. }));
        let day = journal.day(parse_date("2024-01-01").unwrap()).unwrap();
        assert_eq!(day.sessions().len(), 1);
        assert_eq!(day.cumulative_distance_km(), 5.0);
    }

    #[test]
    fn delete_missing_day_is_noop() {
        let (mut journal, _) = Journal::open(MemoryStore::new());
        journal
            .record_session(5.0, 30.0, 70.0, None, at("2024-01-01"))
            .unwrap();
        let removed = journal.delete_day(parse_date("2030-01-01").unwrap()).unwrap();
        assert!(!removed);
        assert_eq!(journal.store().len(), 1);
    }

    #[test]
    fn delete_day_removes_and_persists() {
        let (mut journal, _) = Journal::open(MemoryStore::new());
        journal
            .record_session(5.0, 30.0, 70.0, Some(8.0), at("2024-01-01"))
            .unwrap();
        journal
            .record_session(3.0, 20.0, 70.0, None, at("2024-01-02"))
            .unwrap();
        assert!(journal.delete_day(parse_date("2024-01-01").unwrap()).unwrap());
        let json = journal.backend().saved_json().unwrap();
        assert!(!json.contains("\"2024-01-01\""));
        assert!(json.contains("\"2024-01-02\""));
    }

    #[test]
    fn clear_all_empties_and_persists() {
        let (mut journal, _) = Journal::open(MemoryStore::new());
        journal
            .record_session(5.0, 30.0, 70.0, Some(10.0), at("2024-01-01"))
            .unwrap();
        journal.clear_all().unwrap();
        assert!(journal.store().is_empty());
        let value: serde_json::Value =
            serde_json::from_str(&journal.backend().saved_json().unwrap()).unwrap();
        assert_eq!(value["history"], serde_json::json!({}));
        assert_eq!(value["daily_targets"], serde_json::json!({}));
        assert_eq!(value["daily_distances"], serde_json::json!({}));
    }

    #[test]
    fn carry_over_survives_clear_all() {
        let (mut journal, _) = Journal::open(MemoryStore::new());
        journal
            .record_session(5.0, 30.0, 70.0, Some(10.0), at("2024-01-01"))
            .unwrap();
        journal.clear_all().unwrap();
        let recorded = journal
            .record_session(2.0, 12.0, 70.0, None, at("2024-01-01"))
            .unwrap();
        assert_eq!(recorded.session.target_at_entry_km, 10.0);
    }
}
