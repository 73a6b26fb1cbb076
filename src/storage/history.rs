//! Persisted analysis history: a JSON array, newest first, under one key

use crate::analysis::entry::{now_millis, AnalysisEntry};
use crate::error::Result;
use crate::storage::store::KeyValueStore;
use log::{error, warn};
use serde_json::Value;

pub const DEFAULT_HISTORY_KEY: &str = "placement_prep_analysis_history";

/// Allow-list check for one persisted record: an object with a string `id`
/// and a numeric `finalScore`. New schema fields do not weaken this.
pub fn is_valid_record(record: &Value) -> bool {
    match record.as_object() {
        Some(obj) => {
            obj.get("id").map_or(false, Value::is_string)
                && obj.get("finalScore").map_or(false, Value::is_number)
        }
        None => false,
    }
}

/// Parse a stored history blob into the records that pass the allow-list.
/// An unreadable blob is treated as an empty history.
fn parse_records(raw: &str) -> Vec<Value> {
    let parsed: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            error!("Failed to parse analysis history: {}", e);
            return Vec::new();
        }
    };

    match parsed {
        Value::Array(records) => records.into_iter().filter(is_valid_record).collect(),
        _ => {
            warn!("Analysis history is not a list, ignoring it");
            Vec::new()
        }
    }
}

fn decode_records(records: Vec<Value>) -> Vec<AnalysisEntry> {
    records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<AnalysisEntry>(record) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable analysis record: {}", e);
                None
            }
        })
        .collect()
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

/// Parse a stored history blob. Records failing the allow-list are skipped,
/// as are records that cannot be decoded into an entry.
pub fn parse_history(raw: &str) -> Vec<AnalysisEntry> {
    decode_records(parse_records(raw))
}

/// History repository over any key-value backend.
///
/// Mutations rewrite the allow-listed raw records, so a record this version
/// cannot decode is hidden from `list` but kept in storage.
pub struct HistoryStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_HISTORY_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    fn records(&self) -> Result<Vec<Value>> {
        Ok(match self.store.get(&self.key)? {
            Some(raw) => parse_records(&raw),
            None => Vec::new(),
        })
    }

    /// All readable entries, newest first.
    pub fn list(&self) -> Result<Vec<AnalysisEntry>> {
        Ok(decode_records(self.records()?))
    }

    /// Prepend a new entry.
    pub fn save(&mut self, entry: &AnalysisEntry) -> Result<()> {
        let mut records = self.records()?;
        records.insert(0, serde_json::to_value(entry)?);
        self.write(&records)
    }

    /// Replace the stored entry with the same id, bumping `updatedAt`.
    /// Returns `false` when no such entry exists.
    pub fn update(&mut self, entry: &AnalysisEntry) -> Result<bool> {
        let mut records = self.records()?;
        let Some(slot) = records
            .iter_mut()
            .find(|record| record_id(record) == Some(entry.id.as_str()))
        else {
            return Ok(false);
        };

        let mut updated = entry.clone();
        updated.updated_at = now_millis().max(entry.updated_at);
        *slot = serde_json::to_value(&updated)?;
        self.write(&records)?;
        Ok(true)
    }

    pub fn get(&self, id: &str) -> Result<Option<AnalysisEntry>> {
        Ok(self.list()?.into_iter().find(|e| e.id == id))
    }

    pub fn latest(&self) -> Result<Option<AnalysisEntry>> {
        Ok(self.list()?.into_iter().next())
    }

    /// Look up by full id or by a unique id prefix (as printed by `history list`).
    pub fn find(&self, id_or_prefix: &str) -> Result<Option<AnalysisEntry>> {
        let history = self.list()?;
        if let Some(entry) = history.iter().find(|e| e.id == id_or_prefix) {
            return Ok(Some(entry.clone()));
        }
        let mut matches = history.into_iter().filter(|e| e.id.starts_with(id_or_prefix));
        match (matches.next(), matches.next()) {
            (Some(entry), None) if !id_or_prefix.is_empty() => Ok(Some(entry)),
            _ => Ok(None),
        }
    }

    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let mut records = self.records()?;
        let before = records.len();
        records.retain(|record| record_id(record) != Some(id));
        if records.len() == before {
            return Ok(false);
        }
        self.write(&records)?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(&self.key)
    }

    fn write(&mut self, records: &[Value]) -> Result<()> {
        let json = serde_json::to_string(records)?;
        self.store.set(&self.key, &json)
    }
}
