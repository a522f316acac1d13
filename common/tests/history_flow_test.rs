//! End-to-end history flow: wire response -> validation -> store -> stats,
//! including persistence through a serialized blob like the browser
//! adapter uses.

use std::cell::RefCell;
use std::rc::Rc;

use fundus_ai_common::{
    AnalysisRecord, AnalysisResponse, Error, HistoryStore, SeverityLevel, StorageAdapter,
};

/// Adapter that persists the history as one serialized JSON blob, the same
/// shape the browser writes to localStorage.
#[derive(Clone, Default)]
struct JsonBlobAdapter {
    blob: Rc<RefCell<Option<String>>>,
}

impl JsonBlobAdapter {
    fn with_blob(blob: &str) -> Self {
        Self {
            blob: Rc::new(RefCell::new(Some(blob.to_string()))),
        }
    }
}

impl StorageAdapter for JsonBlobAdapter {
    fn load(&self) -> fundus_ai_common::Result<Vec<AnalysisRecord>> {
        match self.blob.borrow().as_deref() {
            None => Ok(Vec::new()),
            Some(blob) => serde_json::from_str(blob)
                .map_err(|e| Error::StorageCorrupt(e.to_string())),
        }
    }

    fn save(&self, records: &[AnalysisRecord]) {
        if let Ok(blob) = serde_json::to_string(records) {
            *self.blob.borrow_mut() = Some(blob);
        }
    }
}

fn analyze_body(level: u8, confidence: f64) -> String {
    format!(
        r#"{{
            "severity": {{"level": {}, "confidence": {}, "name": "Moderate"}},
            "conditions": [
                {{"name": "Microaneurysms", "probability": 0.62, "detected": true}},
                {{"name": "Hemorrhages", "probability": 0.15, "detected": false}}
            ],
            "report": "CLINICAL SUMMARY\n\nPatient shows moderate signs.",
            "model_version": "convnext-tiny-v3"
        }}"#,
        level, confidence
    )
}

#[test]
fn test_validated_response_persists_and_reloads() {
    let adapter = JsonBlobAdapter::default();

    let response: AnalysisResponse =
        serde_json::from_str(&analyze_body(2, 0.78)).expect("parse body");
    let result = response.into_result().expect("valid response");

    let mut store = HistoryStore::new(adapter.clone());
    store.add_analysis(result, "left-eye.png");

    // A fresh store hydrates from the blob and sees the identical record,
    // unknown backend fields included.
    let reloaded = HistoryStore::new(adapter);
    assert_eq!(reloaded.len(), 1);
    let record = &reloaded.records()[0];
    assert_eq!(record.filename, "left-eye.png");
    assert_eq!(record.result.severity.level, SeverityLevel::Moderate);
    assert_eq!(
        record.result.extra.get("model_version"),
        Some(&serde_json::Value::String("convnext-tiny-v3".to_string()))
    );

    let stats = reloaded.get_stats();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.count(SeverityLevel::Moderate), 1);
    assert!((stats.average_confidence - 0.78).abs() < 1e-9);
}

#[test]
fn test_corrupt_blob_hydrates_as_empty_history() {
    let adapter = JsonBlobAdapter::with_blob("{not json at all");
    assert!(matches!(adapter.load(), Err(Error::StorageCorrupt(_))));

    let store = HistoryStore::new(adapter);
    assert!(store.is_empty());
    assert_eq!(store.get_stats().total, 0);
}

#[test]
fn test_incomplete_response_never_reaches_the_store() {
    let body = r#"{"severity": {"level": 1, "confidence": 0.6, "name": "Mild"}, "report": "x"}"#;
    let response: AnalysisResponse = serde_json::from_str(body).expect("parse body");

    let adapter = JsonBlobAdapter::default();
    let mut store = HistoryStore::new(adapter.clone());
    if let Ok(result) = response.into_result() {
        store.add_analysis(result, "rejected.png");
    }

    assert!(store.is_empty());
    assert!(HistoryStore::new(adapter).is_empty());
}

#[test]
fn test_delete_and_clear_round_trip_through_blob() {
    let adapter = JsonBlobAdapter::default();
    let mut store = HistoryStore::new(adapter.clone());

    let parse = |body: &str| {
        serde_json::from_str::<AnalysisResponse>(body)
            .expect("parse")
            .into_result()
            .expect("valid")
    };
    let first = store.add_analysis(parse(&analyze_body(0, 0.9)), "a.png");
    // Ids are millisecond timestamps; space the inserts so they differ.
    std::thread::sleep(std::time::Duration::from_millis(2));
    store.add_analysis(parse(&analyze_body(3, 0.7)), "b.png");

    store.delete_analysis(&first);
    let reloaded = HistoryStore::new(adapter.clone());
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.records()[0].filename, "b.png");

    store.clear_history();
    assert!(HistoryStore::new(adapter).is_empty());
}
