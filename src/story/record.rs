//! Exported story record types

use crate::analysis::{Insights, JourneyStop, KeyEvent, Statistics, StoryTheme};
use crate::model::EventType;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Id-keyed entries that serialize as a JSON object in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct IdMap<V>(Vec<(String, V)>);

impl<V> IdMap<V> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an entry; ids come from a keyed collection, so they are unique
    pub fn push(&mut self, id: impl Into<String>, value: V) {
        self.0.push((id.into(), value));
    }

    pub fn get(&self, id: &str) -> Option<&V> {
        self.0.iter().find(|(key, _)| key == id).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> Default for IdMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize> Serialize for IdMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, value) in &self.0 {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}

/// A person event as presented to narration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventStory {
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Narrative date, e.g. "around 1920"
    pub date: String,
    pub year: Option<i32>,
    pub location: Option<String>,
    pub age: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonStory {
    pub name: String,
    pub lifespan: Option<i32>,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub events: Vec<EventStory>,
    pub themes: Vec<StoryTheme>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarriageStory {
    pub date: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyStory {
    /// Number of direct children
    pub size: usize,
    pub is_large: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marriage: Option<MarriageStory>,
}

/// Everything downstream narration needs, in one serializable record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryRecord {
    pub individuals: IdMap<PersonStory>,
    pub families: IdMap<FamilyStory>,
    pub narrative_themes: Vec<StoryTheme>,
    pub key_events: Vec<KeyEvent>,
    pub geographic_journey: Vec<JourneyStop>,
    pub statistics: Statistics,
    pub opening_narrative: String,
    pub insights: Insights,
}

impl StoryRecord {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_map_keeps_insertion_order() {
        let mut map = IdMap::new();
        map.push("@I2@", 2);
        map.push("@I1@", 1);

        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"@I2@":2,"@I1@":1}"#);
        assert_eq!(map.get("@I1@"), Some(&1));
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
    }

    #[test]
    fn test_family_without_marriage_omits_key() {
        let family = FamilyStory {
            size: 0,
            is_large: false,
            marriage: None,
        };
        assert_eq!(
            serde_json::to_string(&family).unwrap(),
            r#"{"size":0,"is_large":false}"#
        );
    }
}
