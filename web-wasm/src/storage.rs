//! localStorage persistence for the analysis history.

use gloo::console;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};

use fundus_ai_common::{AnalysisRecord, Error, Result, StorageAdapter, STORAGE_KEY};

/// Persists the serialized history under the fixed `analysis-storage` key.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageAdapter;

impl StorageAdapter for LocalStorageAdapter {
    fn load(&self) -> Result<Vec<AnalysisRecord>> {
        match LocalStorage::get::<Vec<AnalysisRecord>>(STORAGE_KEY) {
            Ok(records) => Ok(records),
            Err(StorageError::KeyNotFound(_)) => Ok(Vec::new()),
            Err(e) => {
                // Corrupt blob: warn and let the store start empty.
                console::warn!(format!("discarding unreadable analysis history: {}", e));
                Err(Error::StorageCorrupt(e.to_string()))
            }
        }
    }

    fn save(&self, records: &[AnalysisRecord]) {
        if let Err(e) = LocalStorage::set(STORAGE_KEY, records) {
            console::warn!(format!("failed to persist analysis history: {}", e));
        }
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use fundus_ai_common::HistoryStore;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_corrupt_blob_loads_as_empty() {
        LocalStorage::raw()
            .set_item(STORAGE_KEY, "{definitely not json")
            .expect("seed corrupt blob");

        let store = HistoryStore::new(LocalStorageAdapter);
        assert!(store.is_empty());

        LocalStorage::delete(STORAGE_KEY);
    }
}
