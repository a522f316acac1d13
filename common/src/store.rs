//! Analysis history store.
//!
//! An in-memory, newest-first collection of past analyses, persisted
//! through a pluggable [`StorageAdapter`] on every mutation. Retention is
//! bounded at [`MAX_HISTORY`] records; the oldest are evicted first.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::severity::SeverityLevel;
use crate::types::AnalysisResult;

/// Retention bound: only the most recent analyses are kept.
pub const MAX_HISTORY: usize = 100;

/// Fixed browser-storage key for the serialized history.
pub const STORAGE_KEY: &str = "analysis-storage";

/// One persisted past analysis: the result plus provenance.
///
/// `id` and `timestamp` are assigned at insertion time; the insertion
/// timestamp deliberately wins over any timestamp on the incoming result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: String,
    pub timestamp: String,
    pub filename: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// Persistence boundary for the history store.
///
/// `load` reports a corrupt blob as an error so the store can apply its
/// recovery policy; `save` is fire-and-forget from the store's point of
/// view, so adapters handle (and log) their own failures.
pub trait StorageAdapter {
    fn load(&self) -> Result<Vec<AnalysisRecord>>;
    fn save(&self, records: &[AnalysisRecord]);
}

/// In-memory adapter for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct MemoryAdapter {
    saved: std::rc::Rc<std::cell::RefCell<Vec<AnalysisRecord>>>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records written by the last `save`.
    pub fn saved(&self) -> Vec<AnalysisRecord> {
        self.saved.borrow().clone()
    }
}

impl StorageAdapter for MemoryAdapter {
    fn load(&self) -> Result<Vec<AnalysisRecord>> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, records: &[AnalysisRecord]) {
        *self.saved.borrow_mut() = records.to_vec();
    }
}

/// Derived statistics over the current history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStats {
    pub total: usize,
    /// Count per severity level, indexed 0..=4; every level always present.
    pub by_level: [usize; 5],
    /// Mean severity confidence, 0.0 for an empty history.
    pub average_confidence: f64,
}

impl HistoryStats {
    pub fn count(&self, level: SeverityLevel) -> usize {
        self.by_level[usize::from(u8::from(level))]
    }
}

/// History of past analyses, newest first.
#[derive(Debug, Clone)]
pub struct HistoryStore<A: StorageAdapter> {
    records: Vec<AnalysisRecord>,
    adapter: A,
}

impl<A: StorageAdapter> HistoryStore<A> {
    /// Hydrates from the adapter. A corrupt blob is dropped and the store
    /// starts empty rather than failing the whole application.
    pub fn new(adapter: A) -> Self {
        let records = adapter.load().unwrap_or_default();
        Self { records, adapter }
    }

    pub fn records(&self) -> &[AnalysisRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Prepends a new record and evicts beyond [`MAX_HISTORY`].
    ///
    /// The caller is responsible for having validated the result via
    /// [`crate::types::AnalysisResponse::into_result`]; no validation is
    /// re-applied here. Returns the assigned record id.
    pub fn add_analysis(&mut self, result: AnalysisResult, filename: &str) -> String {
        let now = Utc::now();
        let id = now.timestamp_millis().to_string();
        // The insertion timestamp replaces any timestamp on the incoming
        // result; clearing the inner field keeps the flattened record to a
        // single `timestamp` key.
        let mut result = result;
        result.timestamp = None;
        let record = AnalysisRecord {
            id: id.clone(),
            timestamp: now.to_rfc3339(),
            filename: filename.to_string(),
            result,
        };
        self.records.insert(0, record);
        self.records.truncate(MAX_HISTORY);
        self.adapter.save(&self.records);
        id
    }

    /// Removes the record with the given id; silently a no-op if absent.
    pub fn delete_analysis(&mut self, id: &str) {
        self.records.retain(|record| record.id != id);
        self.adapter.save(&self.records);
    }

    pub fn clear_history(&mut self) {
        self.records.clear();
        self.adapter.save(&self.records);
    }

    pub fn get_stats(&self) -> HistoryStats {
        let mut by_level = [0usize; 5];
        let mut total_confidence = 0.0;
        for record in &self.records {
            by_level[usize::from(u8::from(record.result.severity.level))] += 1;
            total_confidence += record.result.severity.confidence;
        }
        let average_confidence = if self.records.is_empty() {
            0.0
        } else {
            total_confidence / self.records.len() as f64
        };
        HistoryStats {
            total: self.records.len(),
            by_level,
            average_confidence,
        }
    }
}
