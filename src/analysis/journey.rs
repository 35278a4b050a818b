//! Geographic journey: distinct places in the order the family reached them

use crate::model::{EventType, FamilyTree};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// First dated appearance of a place in the family's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyStop {
    pub location: String,
    pub year: i32,
    pub significance: String,
}

/// Why a place matters, by the event that first brought the family there
pub fn significance(event_type: EventType) -> &'static str {
    match event_type {
        EventType::Birth => "birthplace",
        EventType::Death => "final resting place",
        EventType::Marriage => "marriage location",
        EventType::Immigration => "immigration destination",
        EventType::Emigration => "emigration origin",
        EventType::Residence => "residence",
        _ => "significant location",
    }
}

/// Distinct event locations ordered by the year each was first reached
///
/// Only events with both a year and a place count. Ties on year keep
/// person order, then event order.
pub fn geographic_journey(tree: &FamilyTree) -> Vec<JourneyStop> {
    let mut sightings: Vec<(i32, String, EventType)> = tree
        .persons()
        .flat_map(|person| person.events.iter())
        .filter_map(|event| Some((event.year()?, event.location_name()?, event.event_type)))
        .collect();

    sightings.sort_by_key(|(year, _, _)| *year);

    let mut seen = HashSet::new();
    sightings
        .into_iter()
        .filter(|(_, place, _)| seen.insert(place.clone()))
        .map(|(year, location, kind)| JourneyStop {
            location,
            year,
            significance: significance(kind).to_string(),
        })
        .collect()
}
