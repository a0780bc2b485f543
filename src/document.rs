//! The on-disk JSON document.
//!
//! The file keeps three parallel maps keyed by `YYYY-MM-DD`: `history`
//! (session lists), `daily_targets` and `daily_distances`. The key names and
//! the session field names are those of existing data files and must not change.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    day::{DayRecord, Session},
    store::{format_date, parse_date, Store},
};

/// Stored and recomputed cumulative distances closer than this are treated as equal.
const DISTANCE_TOLERANCE_KM: f64 = 1e-9;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub history: BTreeMap<String, Vec<Session>>,
    #[serde(default)]
    pub daily_targets: BTreeMap<String, f64>,
    #[serde(default)]
    pub daily_distances: BTreeMap<String, f64>,
}

impl From<&Store> for StoreDocument {
    fn from(store: &Store) -> Self {
        let mut doc = StoreDocument::default();
        for (date, day) in store.days() {
            let key = format_date(*date);
            if let Some(target) = day.target_km() {
                doc.daily_targets.insert(key.clone(), target);
            }
            doc.daily_distances
                .insert(key.clone(), day.cumulative_distance_km());
            doc.history.insert(key, day.sessions().to_vec());
        }
        doc
    }
}

impl StoreDocument {
    /// Rebuild a typed [`Store`], reconciling the three maps.
    ///
    /// Keys that are not valid dates are dropped. The cumulative distance is
    /// always recomputed from the session list.
    pub fn into_store(mut self) -> Store {
        let keys: BTreeSet<String> = self
            .history
            .keys()
            .chain(self.daily_targets.keys())
            .chain(self.daily_distances.keys())
            .cloned()
            .collect();

        let mut store = Store::new();
        for key in keys {
            let Some(date) = parse_date(&key) else {
                warn!(key = %key, "skipping entry with invalid date key");
                continue;
            };

            let sessions = self.history.remove(&key).unwrap_or_default();
            let target = self.daily_targets.get(&key).copied();
            let day = DayRecord::from_parts(target, sessions);

            if let Some(stored) = self.daily_distances.get(&key) {
                if (stored - day.cumulative_distance_km()).abs() > DISTANCE_TOLERANCE_KM {
                    warn!(
                        date = %key,
                        stored = *stored,
                        recomputed = day.cumulative_distance_km(),
                        "stored daily distance disagrees with sessions, using session sum"
                    );
                }
            }

            store.insert(date, day);
        }
        store
    }
}
