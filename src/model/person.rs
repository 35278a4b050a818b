//! Person records

use super::event::{Event, EventType};
use serde::{Deserialize, Serialize};

/// A person with their owned events and family back-references
///
/// `family_child` and `family_spouse` hold family ids; resolving them is a
/// lookup into [`FamilyTree`](super::FamilyTree), never ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Cross-reference id, e.g. `@I1@`
    pub id: String,
    pub given_names: Option<String>,
    pub surname: Option<String>,
    pub sex: Option<String>,
    /// Events in source order
    pub events: Vec<Event>,
    pub family_child: Vec<String>,
    pub family_spouse: Vec<String>,
    pub notes: Vec<String>,
}

impl Person {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            given_names: None,
            surname: None,
            sex: None,
            events: Vec::new(),
            family_child: Vec::new(),
            family_spouse: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// "Given Surname", whichever part exists, or "Unknown"
    pub fn full_name(&self) -> String {
        match (self.given_names.as_deref(), self.surname.as_deref()) {
            (Some(given), Some(surname)) => format!("{} {}", given, surname),
            (Some(only), None) | (None, Some(only)) => only.to_string(),
            (None, None) => "Unknown".to_string(),
        }
    }

    /// Year of the first event of the given kind
    fn first_year(&self, kind: EventType) -> Option<i32> {
        self.events
            .iter()
            .find(|e| e.event_type == kind)
            .and_then(Event::year)
    }

    pub fn birth_year(&self) -> Option<i32> {
        self.first_year(EventType::Birth)
    }

    pub fn death_year(&self) -> Option<i32> {
        self.first_year(EventType::Death)
    }

    /// Death year minus birth year; may be zero or negative on bad data
    pub fn lifespan(&self) -> Option<i32> {
        Some(self.death_year()? - self.birth_year()?)
    }

    pub fn count_events(&self, kind: EventType) -> usize {
        self.events.iter().filter(|e| e.event_type == kind).count()
    }

    /// Stamp each dated event with the person's age at that time
    pub(crate) fn compute_ages(&mut self) {
        let Some(birth) = self.birth_year() else {
            return;
        };
        for event in &mut self.events {
            event.age_at_event = event.year().map(|year| year - birth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person_with(events: Vec<Event>) -> Person {
        let mut person = Person::new("@I1@");
        person.events = events;
        person
    }

    #[test]
    fn test_full_name_variants() {
        let mut person = Person::new("@I1@");
        assert_eq!(person.full_name(), "Unknown");

        person.surname = Some("Murphy".into());
        assert_eq!(person.full_name(), "Murphy");

        person.given_names = Some("Mary Ann".into());
        assert_eq!(person.full_name(), "Mary Ann Murphy");

        person.surname = None;
        assert_eq!(person.full_name(), "Mary Ann");
    }

    #[test]
    fn test_lifespan_requires_both_years() {
        let born = person_with(vec![Event::new(EventType::Birth).with_date("1850")]);
        assert_eq!(born.lifespan(), None);

        let full = person_with(vec![
            Event::new(EventType::Birth).with_date("1850"),
            Event::new(EventType::Death).with_date("ABT 1920"),
        ]);
        assert_eq!(full.lifespan(), Some(70));
    }

    #[test]
    fn test_lifespan_negative_does_not_panic() {
        let person = person_with(vec![
            Event::new(EventType::Death).with_date("1800"),
            Event::new(EventType::Birth).with_date("1850"),
        ]);
        assert_eq!(person.lifespan(), Some(-50));
    }

    #[test]
    fn test_first_birth_event_wins() {
        let person = person_with(vec![
            Event::new(EventType::Birth),
            Event::new(EventType::Birth).with_date("1850"),
        ]);
        assert_eq!(person.birth_year(), None);
    }

    #[test]
    fn test_compute_ages() {
        let mut person = person_with(vec![
            Event::new(EventType::Birth).with_date("1850"),
            Event::new(EventType::Marriage).with_date("2 JUN 1875"),
            Event::new(EventType::Occupation),
        ]);
        person.compute_ages();
        assert_eq!(person.events[0].age_at_event, Some(0));
        assert_eq!(person.events[1].age_at_event, Some(25));
        assert_eq!(person.events[2].age_at_event, None);
    }
}
