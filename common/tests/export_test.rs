//! Export pipeline tests over a realistic backend response.

use fundus_ai_common::{export, AnalysisResponse, AnalysisResult};

fn sample_result() -> AnalysisResult {
    let body = r#"{
        "severity": {"level": 3, "confidence": 0.842, "name": "Severe",
                     "distribution": [0.01, 0.04, 0.1, 0.7, 0.15]},
        "conditions": [
            {"name": "Microaneurysms", "probability": 0.91, "detected": true, "threshold": 0.5},
            {"name": "Hemorrhages", "probability": 0.734, "detected": true},
            {"name": "Hard Exudates", "probability": 0.28, "detected": false},
            {"name": "Cotton Wool Spots", "probability": 0.066, "detected": false}
        ],
        "report": "CLINICAL SUMMARY\n\nSevere non-proliferative changes.\n\nRECOMMENDATIONS\n\nUrgent referral.",
        "processing_time": {"total": 191.2, "vision": 4.1, "vlm": 180.0}
    }"#;
    serde_json::from_str::<AnalysisResponse>(body)
        .expect("parse body")
        .into_result()
        .expect("valid response")
}

#[test]
fn test_csv_has_header_plus_one_row_per_condition() {
    let result = sample_result();
    let csv = export::to_csv(&result);
    assert_eq!(csv.lines().count(), result.conditions.len() + 1);
    assert_eq!(csv.lines().next(), Some("Condition,Probability,Detected"));
    assert!(csv.contains("Hemorrhages,73.4%,Yes"));
    assert!(csv.contains("Cotton Wool Spots,6.6%,No"));
}

#[test]
fn test_json_dump_round_trips_full_structure() {
    let result = sample_result();
    let json = export::to_json(&result).expect("serialize");
    let reparsed: AnalysisResult = serde_json::from_str(&json).expect("reparse");
    assert_eq!(reparsed, result);
    assert!(json.contains("distribution"));
    assert!(json.contains("processing_time"));
}

#[test]
fn test_text_report_contains_all_sections() {
    let text = export::to_text(&sample_result(), "2026-02-11 09:30:00");
    assert!(text.contains("Severe (Level 3/4)"));
    assert!(text.contains("Confidence: 84.2%"));
    assert!(text.contains("- Microaneurysms: 91.0% [DETECTED]"));
    assert!(text.contains("- Hard Exudates: 28.0%"));
    assert!(text.contains("RECOMMENDATIONS"));
    assert!(text.contains("Generated: 2026-02-11 09:30:00"));
}

#[test]
fn test_export_filenames_are_fixed() {
    assert_eq!(export::JSON_FILENAME, "analysis-result.json");
    assert_eq!(export::CSV_FILENAME, "analysis-results.csv");
    assert_eq!(export::TXT_FILENAME, "clinical-report.txt");
}
