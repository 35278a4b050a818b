//! Assemble per-entity projections and analytics into a StoryRecord

use super::record::{EventStory, FamilyStory, IdMap, MarriageStory, PersonStory, StoryRecord};
use crate::analysis::{self, Insights, Statistics, StoryTheme};
use crate::config::StoryConfig;
use crate::model::{Event, Family, FamilyTree, Person};
use std::collections::BTreeSet;
use tracing::info;

/// Build the complete story record for a parsed tree
pub fn assemble(tree: &FamilyTree, config: &StoryConfig) -> StoryRecord {
    let mut individuals = IdMap::new();
    let mut all_themes = BTreeSet::new();

    for person in tree.persons() {
        let themes = analysis::classify(person, config);
        all_themes.extend(themes.iter().copied());
        individuals.push(person.id.as_str(), person_story(person, themes));
    }

    let mut families = IdMap::new();
    for family in tree.families() {
        families.push(family.id.as_str(), family_story(family, config));
    }

    let narrative_themes: Vec<StoryTheme> = all_themes.into_iter().collect();
    let key_events = analysis::key_events(tree);
    let geographic_journey = analysis::geographic_journey(tree);
    let statistics = Statistics::compute(tree, config);
    let opening_narrative =
        analysis::opening_narrative(&narrative_themes, &geographic_journey, &statistics);
    let insights = Insights::derive(&geographic_journey, &statistics);

    info!(
        individuals = individuals.len(),
        families = families.len(),
        key_events = key_events.len(),
        journey_stops = geographic_journey.len(),
        "assembled story record"
    );

    StoryRecord {
        individuals,
        families,
        narrative_themes,
        key_events,
        geographic_journey,
        statistics,
        opening_narrative,
        insights,
    }
}

fn person_story(person: &Person, themes: BTreeSet<StoryTheme>) -> PersonStory {
    PersonStory {
        name: person.full_name(),
        lifespan: person.lifespan(),
        birth_year: person.birth_year(),
        death_year: person.death_year(),
        events: person.events.iter().map(event_story).collect(),
        themes: themes.into_iter().collect(),
    }
}

fn event_story(event: &Event) -> EventStory {
    EventStory {
        event_type: event.event_type,
        date: event.narrative_date(),
        year: event.year(),
        location: event.location_name(),
        age: event.age_at_event,
    }
}

fn family_story(family: &Family, config: &StoryConfig) -> FamilyStory {
    FamilyStory {
        size: family.child_count(),
        is_large: family.is_large_family(config.large_family_min_children),
        marriage: family.marriage_event.as_ref().map(|event| MarriageStory {
            date: event.narrative_date(),
            location: event.location_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventType;
    use crate::parse::parse_str;

    #[test]
    fn test_person_projection() {
        let tree = parse_str(
            "0 @I1@ INDI\n1 NAME Ann /Doyle/\n1 BIRT\n2 DATE 1850\n2 PLAC Cork, Ireland\n\
             1 IMMI\n2 DATE 1868\n",
        );
        let record = assemble(&tree, &StoryConfig::default());

        let ann = record.individuals.get("@I1@").unwrap();
        assert_eq!(ann.name, "Ann Doyle");
        assert_eq!(ann.birth_year, Some(1850));
        assert_eq!(ann.lifespan, None);
        assert_eq!(ann.events.len(), 2);
        assert_eq!(ann.events[0].event_type, EventType::Birth);
        assert_eq!(ann.events[0].date, "in 1850");
        assert_eq!(ann.events[0].location.as_deref(), Some("Cork, Ireland"));
        assert_eq!(ann.events[1].age, Some(18));
        assert_eq!(ann.themes, vec![StoryTheme::Immigration]);
        assert_eq!(record.narrative_themes, vec![StoryTheme::Immigration]);
    }

    #[test]
    fn test_family_projection() {
        let tree = parse_str(
            "0 @F1@ FAM\n1 MARR\n2 DATE 2 JUN 1875\n2 PLAC Galway, Ireland\n0 @F2@ FAM\n",
        );
        let record = assemble(&tree, &StoryConfig::default());

        let married = record.families.get("@F1@").unwrap();
        let marriage = married.marriage.as_ref().unwrap();
        assert_eq!(marriage.date, "on 2 JUN 1875");
        assert_eq!(marriage.location.as_deref(), Some("Galway, Ireland"));
        assert!(record.families.get("@F2@").unwrap().marriage.is_none());
    }

    #[test]
    fn test_family_marriage_not_in_person_timeline() {
        let tree = parse_str("0 @F1@ FAM\n1 MARR\n2 DATE 1875\n2 PLAC Galway, Ireland\n");
        let record = assemble(&tree, &StoryConfig::default());
        assert!(record.key_events.is_empty());
        assert!(record.geographic_journey.is_empty());
        assert_eq!(record.statistics.date_range.earliest, None);
    }

    #[test]
    fn test_large_family_threshold_from_config() {
        let tree = parse_str("0 @F1@ FAM\n1 CHIL @I1@\n1 CHIL @I2@\n1 CHIL @I3@\n");
        let config = StoryConfig {
            large_family_min_children: 3,
            ..StoryConfig::default()
        };
        assert!(assemble(&tree, &config).families.get("@F1@").unwrap().is_large);
        assert!(!assemble(&tree, &StoryConfig::default()).families.get("@F1@").unwrap().is_large);
    }

    #[test]
    fn test_empty_tree() {
        let record = assemble(&FamilyTree::new(), &StoryConfig::default());
        assert!(record.individuals.is_empty());
        assert!(record.narrative_themes.is_empty());
        assert!(record.opening_narrative.starts_with("Every family has a story."));
    }
}
