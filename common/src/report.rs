//! Clinical report sectioning.
//!
//! Reports arrive as free-form text with paragraphs separated by blank
//! lines. A paragraph containing one of the fixed marker substrings is a
//! section header.

/// Marker substrings that flag a paragraph as a section header.
pub const HEADER_MARKERS: [&str; 4] =
    ["CLINICAL", "KEY FINDINGS", "RECOMMENDATIONS", "FOLLOW-UP"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub text: String,
    pub is_header: bool,
}

pub fn is_header(paragraph: &str) -> bool {
    HEADER_MARKERS.iter().any(|marker| paragraph.contains(marker))
}

/// Splits a report on blank-line boundaries, dropping empty paragraphs.
pub fn split_sections(report: &str) -> Vec<ReportSection> {
    report
        .split("\n\n")
        .filter(|paragraph| !paragraph.trim().is_empty())
        .map(|paragraph| ReportSection {
            text: paragraph.to_string(),
            is_header: is_header(paragraph),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_paragraph_marked_header() {
        let sections = split_sections("CLINICAL SUMMARY\n\nPatient shows moderate signs.");
        assert_eq!(sections.len(), 2);
        assert!(sections[0].is_header);
        assert!(!sections[1].is_header);
        assert_eq!(sections[1].text, "Patient shows moderate signs.");
    }

    #[test]
    fn test_all_markers_detected() {
        for marker in HEADER_MARKERS {
            assert!(is_header(&format!("{}:", marker)), "marker {}", marker);
        }
        assert!(!is_header("Patient is stable."));
    }

    #[test]
    fn test_marker_inside_paragraph_counts() {
        assert!(is_header("See KEY FINDINGS below for details."));
    }

    #[test]
    fn test_blank_paragraphs_dropped() {
        let sections = split_sections("RECOMMENDATIONS\n\n\n\n  \n\nReturn in 6 months.");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].text, "Return in 6 months.");
    }

    #[test]
    fn test_empty_report_degrades_to_no_sections() {
        assert!(split_sections("").is_empty());
    }
}
