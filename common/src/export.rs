//! Export serializers: one validated result into JSON, CSV and plain text.
//!
//! Serialization is pure and synchronous; the browser download step lives
//! in the web crate.

use crate::error::Result;
use crate::types::AnalysisResult;

pub const JSON_FILENAME: &str = "analysis-result.json";
pub const CSV_FILENAME: &str = "analysis-results.csv";
pub const TXT_FILENAME: &str = "clinical-report.txt";

/// Probability as a percentage string with one decimal, e.g. "62.0%".
fn percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Pretty-printed structural dump of the full result.
pub fn to_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Condition table as CSV: header row plus one row per condition.
pub fn to_csv(result: &AnalysisResult) -> String {
    let mut lines = vec!["Condition,Probability,Detected".to_string()];
    for condition in &result.conditions {
        lines.push(format!(
            "{},{},{}",
            condition.name,
            percent(condition.probability),
            if condition.detected { "Yes" } else { "No" }
        ));
    }
    lines.join("\n")
}

/// Fixed-layout plain-text report.
///
/// `generated_at` is the caller-formatted generation time for the footer.
pub fn to_text(result: &AnalysisResult, generated_at: &str) -> String {
    let rule = "=".repeat(50);
    let mut lines = vec![
        "OPHTHALMOLOGY AI - ANALYSIS REPORT".to_string(),
        rule.clone(),
        String::new(),
        "SEVERITY:".to_string(),
        format!(
            "{} (Level {}/4)",
            result.severity.name,
            u8::from(result.severity.level)
        ),
        format!("Confidence: {}", percent(result.severity.confidence)),
        String::new(),
        "DETECTED CONDITIONS:".to_string(),
    ];
    for condition in &result.conditions {
        let mut line = format!("- {}: {}", condition.name, percent(condition.probability));
        if condition.detected {
            line.push_str(" [DETECTED]");
        }
        lines.push(line);
    }
    lines.push(String::new());
    lines.push("CLINICAL REPORT:".to_string());
    lines.push(result.report.clone());
    lines.push(String::new());
    lines.push(rule);
    lines.push(format!("Generated: {}", generated_at));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::SeverityLevel;
    use crate::types::{ConditionResult, SeverityResult};

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            severity: SeverityResult {
                level: SeverityLevel::Moderate,
                confidence: 0.78,
                name: "Moderate".to_string(),
                distribution: None,
            },
            conditions: vec![
                ConditionResult {
                    name: "Microaneurysms".to_string(),
                    probability: 0.62,
                    detected: true,
                    threshold: None,
                },
                ConditionResult {
                    name: "Hemorrhages".to_string(),
                    probability: 0.15,
                    detected: false,
                    threshold: None,
                },
            ],
            report: "CLINICAL SUMMARY\n\nPatient shows moderate signs.".to_string(),
            gradcam: None,
            processing_time: None,
            timestamp: None,
            metadata: None,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_csv_row_count_and_cells() {
        let csv = to_csv(&sample_result());
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows.len(), sample_result().conditions.len() + 1);
        assert_eq!(rows[0], "Condition,Probability,Detected");
        assert_eq!(rows[1], "Microaneurysms,62.0%,Yes");
        assert_eq!(rows[2], "Hemorrhages,15.0%,No");
    }

    #[test]
    fn test_csv_percent_is_one_decimal() {
        let mut result = sample_result();
        result.conditions[0].probability = 0.6789;
        let csv = to_csv(&result);
        assert!(csv.contains("Microaneurysms,67.9%,Yes"));
    }

    #[test]
    fn test_json_is_pretty_printed() {
        let json = to_json(&sample_result()).expect("serialize");
        assert!(json.contains("\n  \"severity\""));
        let reparsed: AnalysisResult = serde_json::from_str(&json).expect("reparse");
        assert_eq!(reparsed, sample_result());
    }

    #[test]
    fn test_text_report_layout() {
        let text = to_text(&sample_result(), "2026-02-11 09:30:00");
        assert!(text.starts_with("OPHTHALMOLOGY AI - ANALYSIS REPORT\n"));
        assert!(text.contains(&"=".repeat(50)));
        assert!(text.contains("Moderate (Level 2/4)"));
        assert!(text.contains("Confidence: 78.0%"));
        assert!(text.contains("- Microaneurysms: 62.0% [DETECTED]"));
        assert!(text.contains("- Hemorrhages: 15.0%"));
        assert!(!text.contains("Hemorrhages: 15.0% [DETECTED]"));
        assert!(text.contains("CLINICAL REPORT:\nCLINICAL SUMMARY"));
        assert!(text.ends_with("Generated: 2026-02-11 09:30:00"));
    }
}
