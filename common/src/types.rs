//! Analysis result types.
//!
//! Shapes mirror the backend's JSON exactly (snake_case). `AnalysisResponse`
//! is the raw wire shape in which the three required sections may be
//! missing; `AnalysisResult` is the validated value the rest of the
//! dashboard works with.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::severity::SeverityLevel;

/// Requested verbosity of the generated clinical narrative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    #[default]
    Brief,
    Comprehensive,
    Technical,
}

impl ReportType {
    /// Wire value sent in the multipart `report_type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Brief => "brief",
            ReportType::Comprehensive => "comprehensive",
            ReportType::Technical => "technical",
        }
    }

    pub const ALL: [ReportType; 3] = [
        ReportType::Brief,
        ReportType::Comprehensive,
        ReportType::Technical,
    ];
}

/// Severity classification for one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityResult {
    pub level: SeverityLevel,
    pub confidence: f64,
    /// Backend display name (e.g. "No DR", "Proliferative DR").
    pub name: String,
    /// Per-level probability distribution, 5 entries summing to ~1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Vec<f64>>,
}

/// One named clinical finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionResult {
    pub name: String,
    pub probability: f64,
    pub detected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

/// Per-stage timing breakdown, all stages optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingBreakdown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_loading: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision_model: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlm_generation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kb_retrieval: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_formatting: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingTime {
    pub total: f64,
    pub vision: f64,
    pub vlm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ProcessingBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub filename: String,
    pub timestamp: String,
    pub report_type: String,
}

/// Validated analysis outcome. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub severity: SeverityResult,
    pub conditions: Vec<ConditionResult>,
    /// Paragraph-separated clinical narrative (blank-line boundaries).
    pub report: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradcam: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<ProcessingTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnalysisMetadata>,
    /// Fields the backend may add that this client does not model;
    /// preserved across persistence round trips.
    #[serde(flatten, default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Raw analyze-endpoint body before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub severity: Option<SeverityResult>,
    #[serde(default)]
    pub conditions: Option<Vec<ConditionResult>>,
    #[serde(default)]
    pub report: Option<String>,
    #[serde(default)]
    pub gradcam: Option<String>,
    #[serde(default)]
    pub processing_time: Option<ProcessingTime>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub metadata: Option<AnalysisMetadata>,
    #[serde(flatten, default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AnalysisResponse {
    /// Validates the response: severity, conditions and report must all be
    /// present before the result may be rendered or stored.
    pub fn into_result(self) -> Result<AnalysisResult> {
        match (self.severity, self.conditions, self.report) {
            (Some(severity), Some(conditions), Some(report)) => Ok(AnalysisResult {
                severity,
                conditions,
                report,
                gradcam: self.gradcam,
                processing_time: self.processing_time,
                timestamp: self.timestamp,
                metadata: self.metadata,
                extra: self.extra,
            }),
            _ => Err(Error::AnalysisFailed(
                "Invalid response from server".to_string(),
            )),
        }
    }
}

/// Health-check endpoint body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: ServiceStatus,
    pub pipeline_ready: bool,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Error,
}
