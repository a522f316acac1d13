//! Closed severity staging scale (0..=4).
//!
//! Diabetic retinopathy severity is a five-level clinical staging. The
//! enum keeps level handling total: labels and colors are matched, never
//! indexed, so an out-of-range wire value can only be rejected or
//! clamped, not panic.

use serde::{Deserialize, Serialize};

/// Severity staging level, 0 = no disease, 4 = proliferative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SeverityLevel {
    None,
    Mild,
    Moderate,
    Severe,
    Proliferative,
}

impl SeverityLevel {
    /// All levels in staging order.
    pub const ALL: [SeverityLevel; 5] = [
        SeverityLevel::None,
        SeverityLevel::Mild,
        SeverityLevel::Moderate,
        SeverityLevel::Severe,
        SeverityLevel::Proliferative,
    ];

    /// Clamps an arbitrary wire value into the closed scale.
    pub fn from_clamped(level: u8) -> Self {
        Self::ALL[usize::from(level).min(4)]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeverityLevel::None => "None",
            SeverityLevel::Mild => "Mild",
            SeverityLevel::Moderate => "Moderate",
            SeverityLevel::Severe => "Severe",
            SeverityLevel::Proliferative => "Proliferative",
        }
    }

    /// CSS class suffix used by the gauge, history badges and analytics bars.
    pub fn css_class(&self) -> &'static str {
        match self {
            SeverityLevel::None => "severity-none",
            SeverityLevel::Mild => "severity-mild",
            SeverityLevel::Moderate => "severity-moderate",
            SeverityLevel::Severe => "severity-severe",
            SeverityLevel::Proliferative => "severity-proliferative",
        }
    }

    /// Gauge fill fraction: level / 4.
    pub fn fill_fraction(&self) -> f64 {
        f64::from(u8::from(*self)) / 4.0
    }
}

impl From<SeverityLevel> for u8 {
    fn from(level: SeverityLevel) -> u8 {
        match level {
            SeverityLevel::None => 0,
            SeverityLevel::Mild => 1,
            SeverityLevel::Moderate => 2,
            SeverityLevel::Severe => 3,
            SeverityLevel::Proliferative => 4,
        }
    }
}

impl TryFrom<u8> for SeverityLevel {
    type Error = String;

    fn try_from(level: u8) -> std::result::Result<Self, Self::Error> {
        match level {
            0 => Ok(SeverityLevel::None),
            1 => Ok(SeverityLevel::Mild),
            2 => Ok(SeverityLevel::Moderate),
            3 => Ok(SeverityLevel::Severe),
            4 => Ok(SeverityLevel::Proliferative),
            other => Err(format!("severity level {} out of range 0..=4", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_round_trip() {
        for level in 0u8..=4 {
            let parsed = SeverityLevel::try_from(level).expect("in range");
            assert_eq!(u8::from(parsed), level);
        }
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert!(SeverityLevel::try_from(5).is_err());
        assert!(SeverityLevel::try_from(255).is_err());
    }

    #[test]
    fn test_from_clamped() {
        assert_eq!(SeverityLevel::from_clamped(0), SeverityLevel::None);
        assert_eq!(SeverityLevel::from_clamped(4), SeverityLevel::Proliferative);
        assert_eq!(SeverityLevel::from_clamped(9), SeverityLevel::Proliferative);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let parsed: std::result::Result<SeverityLevel, _> = serde_json::from_str("7");
        assert!(parsed.is_err());

        let parsed: SeverityLevel = serde_json::from_str("2").expect("valid level");
        assert_eq!(parsed, SeverityLevel::Moderate);
    }

    #[test]
    fn test_fill_fraction() {
        assert_eq!(SeverityLevel::None.fill_fraction(), 0.0);
        assert_eq!(SeverityLevel::Moderate.fill_fraction(), 0.5);
        assert_eq!(SeverityLevel::Proliferative.fill_fraction(), 1.0);
    }

    #[test]
    fn test_labels_cover_all_levels() {
        let labels: Vec<&str> = SeverityLevel::ALL.iter().map(|l| l.label()).collect();
        assert_eq!(
            labels,
            vec!["None", "Mild", "Moderate", "Severe", "Proliferative"]
        );
    }
}
