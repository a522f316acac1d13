//! Condition-table presentation logic: filtering, sorting and the fixed
//! probability status bands.

use crate::types::ConditionResult;

/// Status band derived from detection probability. The 0.5 / 0.2
/// thresholds are fixed policy, not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionStatus {
    Detected,
    Possible,
    NotDetected,
}

impl DetectionStatus {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.5 {
            DetectionStatus::Detected
        } else if probability >= 0.2 {
            DetectionStatus::Possible
        } else {
            DetectionStatus::NotDetected
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetectionStatus::Detected => "detected",
            DetectionStatus::Possible => "possible",
            DetectionStatus::NotDetected => "not-detected",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            DetectionStatus::Detected => "status-detected",
            DetectionStatus::Possible => "status-possible",
            DetectionStatus::NotDetected => "status-not-detected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Probability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }
}

/// Case-insensitive substring filter followed by a stable sort.
///
/// Returns a new vector; the canonical order held by the caller is never
/// mutated.
pub fn filter_and_sort(
    conditions: &[ConditionResult],
    search: &str,
    key: SortKey,
    order: SortOrder,
) -> Vec<ConditionResult> {
    let needle = search.to_lowercase();
    let mut rows: Vec<ConditionResult> = conditions
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    rows.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Probability => a.probability.total_cmp(&b.probability),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    rows
}
