//! Coarse narrative insights derived from the journey and statistics

use super::journey::JourneyStop;
use super::statistics::Statistics;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Historical periods offered as background, as `(start, end, name)`
const HISTORICAL_PERIODS: [(i32, i32, &str); 8] = [
    (1776, 1783, "American Revolution"),
    (1861, 1865, "American Civil War"),
    (1914, 1918, "World War I"),
    (1929, 1939, "Great Depression"),
    (1939, 1945, "World War II"),
    (1845, 1852, "Irish Potato Famine"),
    (1849, 1855, "California Gold Rush"),
    (1892, 1954, "Ellis Island Immigration"),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migration_distance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_size_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longevity_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_span: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical_events: Option<Vec<String>>,
}

impl Insights {
    pub fn derive(journey: &[JourneyStop], stats: &Statistics) -> Self {
        let mut insights = Self::default();

        if journey.len() > 1 {
            insights.migration_distance = Some(migration_span(journey).to_string());
            insights.settlement_pattern = Some(settlement_pattern(journey).to_string());
        }

        let avg_children = stats.average_children_per_family;
        if avg_children > 6.0 {
            insights.family_size_note = Some("Large families were common in your ancestry".into());
        } else if avg_children > 0.0 && avg_children < 2.0 {
            insights.family_size_note =
                Some("Your ancestors tended to have smaller families".into());
        }

        if let Some(avg_lifespan) = stats.average_lifespan {
            if avg_lifespan > 70.0 {
                insights.longevity_note = Some("Your family has a history of longevity".into());
            } else if avg_lifespan < 50.0 {
                insights.longevity_note = Some("Life was harder for earlier generations".into());
            }
        }

        if let (Some(earliest), Some(latest)) = (stats.date_range.earliest, stats.date_range.latest) {
            insights.time_span = Some(format!(
                "Your family history spans {} years",
                latest - earliest
            ));
            insights.historical_events = Some(historical_context(earliest, latest));
        }

        insights
    }
}

/// How widely the family spread, by number of distinct places
pub fn migration_span(journey: &[JourneyStop]) -> &'static str {
    let distinct: HashSet<&str> = journey.iter().map(|s| s.location.as_str()).collect();
    match distinct.len() {
        n if n > 3 => "extensive - across multiple regions",
        n if n > 1 => "moderate - within a general region",
        _ => "minimal - largely settled in one area",
    }
}

/// How quickly the family moved, by years covered by the journey
pub fn settlement_pattern(journey: &[JourneyStop]) -> &'static str {
    let min = journey.iter().map(|s| s.year).min();
    let max = journey.iter().map(|s| s.year).max();
    match (min, max) {
        (Some(min), Some(max)) if max - min > 100 => "gradual migration over generations",
        (Some(min), Some(max)) if max - min > 50 => "steady movement over decades",
        (Some(_), Some(_)) => "rapid relocation",
        _ => "stable settlement",
    }
}

/// Historical periods overlapping `[earliest, latest]`
pub fn historical_context(earliest: i32, latest: i32) -> Vec<String> {
    HISTORICAL_PERIODS
        .iter()
        .filter(|(start, end, _)| *start <= latest && *end >= earliest)
        .map(|(_, _, name)| name.to_string())
        .collect()
}
