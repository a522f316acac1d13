//! Fundus AI Common Library
//!
//! Types and logic shared between native tests and the Web (WASM) app:
//! - types: analysis result contract and wire validation
//! - store: persisted analysis history with derived statistics
//! - conditions / report: condition-table and report-panel logic
//! - export: JSON / CSV / plain-text serializers

pub mod conditions;
pub mod error;
pub mod export;
pub mod report;
pub mod severity;
pub mod store;
pub mod types;

pub use conditions::{filter_and_sort, DetectionStatus, SortKey, SortOrder};
pub use error::{Error, Result};
pub use report::{split_sections, ReportSection};
pub use severity::SeverityLevel;
pub use store::{
    AnalysisRecord, HistoryStats, HistoryStore, MemoryAdapter, StorageAdapter, MAX_HISTORY,
    STORAGE_KEY,
};
pub use types::{
    AnalysisMetadata, AnalysisResponse, AnalysisResult, ConditionResult, HealthStatus,
    ProcessingBreakdown, ProcessingTime, ReportType, ServiceStatus, SeverityResult,
};
