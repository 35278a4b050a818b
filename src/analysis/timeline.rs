//! Key-events timeline

use crate::model::{Event, EventType, FamilyTree, Person};
use serde::{Deserialize, Serialize};

/// One dated event on the family timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub person: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub year: i32,
    pub description: String,
}

/// Every dated person event, sorted by year
///
/// The sort is stable: events in the same year keep person order, then
/// event order within the person.
pub fn key_events(tree: &FamilyTree) -> Vec<KeyEvent> {
    let mut events: Vec<KeyEvent> = tree
        .persons()
        .flat_map(|person| {
            let name = person.full_name();
            person.events.iter().filter_map(move |event| {
                Some(KeyEvent {
                    person: name.clone(),
                    event_type: event.event_type,
                    year: event.year()?,
                    description: describe_event(person, event),
                })
            })
        })
        .collect();

    events.sort_by_key(|e| e.year);
    events
}

/// A one-sentence description of an event for narration
pub fn describe_event(person: &Person, event: &Event) -> String {
    let name = person.full_name();
    let when = event.narrative_date();

    let mut description = match event.event_type {
        EventType::Birth => format!("{} was born {}", name, when),
        EventType::Death => format!("{} passed away {}", name, when),
        EventType::Marriage => format!("{} married {}", name, when),
        EventType::Immigration => format!("{} immigrated {}", name, when),
        EventType::Emigration => format!("{} emigrated {}", name, when),
        EventType::Military => format!("{} served in the military", name),
        EventType::Occupation => format!(
            "{} worked as {}",
            name,
            event.description.as_deref().unwrap_or("unknown")
        ),
        other => format!("{} experienced {}", name, other.tag()),
    };

    if let Some(place) = event.location_name() {
        description.push_str(" in ");
        description.push_str(&place);
    }

    description
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_str;

    #[test]
    fn test_timeline_sorted_and_stable() {
        let tree = parse_str(
            "0 @I1@ INDI\n1 NAME Ann /Doyle/\n1 BIRT\n2 DATE 1880\n1 MARR\n2 DATE 1850\n\
             0 @I2@ INDI\n1 NAME Tom /Doyle/\n1 BIRT\n2 DATE 1850\n1 DEAT\n",
        );

        let events = key_events(&tree);
        let years: Vec<_> = events.iter().map(|e| e.year).collect();
        assert_eq!(years, vec![1850, 1850, 1880]);
        assert_eq!(events[0].person, "Ann Doyle");
        assert_eq!(events[0].event_type, EventType::Marriage);
        assert_eq!(events[1].person, "Tom Doyle");
    }

    #[test]
    fn test_undated_events_are_excluded() {
        let tree = parse_str("0 @I1@ INDI\n1 BIRT\n1 DEAT\n2 DATE unknown\n");
        assert!(key_events(&tree).is_empty());
    }

    #[test]
    fn test_descriptions() {
        let mut person = Person::new("@I1@");
        person.given_names = Some("Ann".into());
        person.surname = Some("Doyle".into());

        let birth = Event::new(EventType::Birth)
            .with_date("1850")
            .with_place("Cork, Ireland");
        assert_eq!(describe_event(&person, &birth), "Ann Doyle was born in 1850 in Cork, Ireland");

        let death = Event::new(EventType::Death).with_date("ABT 1920");
        assert_eq!(describe_event(&person, &death), "Ann Doyle passed away around 1920");

        let service = Event::new(EventType::Military).with_date("1917");
        assert_eq!(describe_event(&person, &service), "Ann Doyle served in the military");

        let work = Event::new(EventType::Occupation);
        assert_eq!(describe_event(&person, &work), "Ann Doyle worked as unknown");

        let study = Event::new(EventType::Education);
        assert_eq!(describe_event(&person, &study), "Ann Doyle experienced EDUC");
    }
}
