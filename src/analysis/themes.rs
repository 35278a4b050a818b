//! Narrative theme classification

use crate::config::StoryConfig;
use crate::model::{EventType, Person};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Narrative themes that can be detected from a person's events
///
/// Ordered by declaration, which is the order themes appear in output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryTheme {
    Immigration,
    LargeFamily,
    MilitaryService,
    EarlyDeath,
    LongLife,
    MultipleMarriages,
    Pioneer,
    Tragedy,
    Success,
    FamilyBusiness,
}

impl StoryTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            StoryTheme::Immigration => "immigration",
            StoryTheme::LargeFamily => "large_family",
            StoryTheme::MilitaryService => "military_service",
            StoryTheme::EarlyDeath => "early_death",
            StoryTheme::LongLife => "long_life",
            StoryTheme::MultipleMarriages => "multiple_marriages",
            StoryTheme::Pioneer => "pioneer",
            StoryTheme::Tragedy => "tragedy",
            StoryTheme::Success => "success",
            StoryTheme::FamilyBusiness => "family_business",
        }
    }
}

impl std::fmt::Display for StoryTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Themes detected for one person
///
/// `LargeFamily` is never produced here: counting children would need the
/// person's spouse families resolved, which this pass does not do. Family
/// size is reported on the family projections instead.
pub fn classify(person: &Person, config: &StoryConfig) -> BTreeSet<StoryTheme> {
    let mut themes = BTreeSet::new();

    if let Some(lifespan) = person.lifespan() {
        if lifespan < config.early_death_below {
            themes.insert(StoryTheme::EarlyDeath);
        } else if lifespan > config.long_life_above {
            themes.insert(StoryTheme::LongLife);
        }
    }

    for event in &person.events {
        match event.event_type {
            EventType::Immigration | EventType::Emigration => {
                themes.insert(StoryTheme::Immigration);
            }
            EventType::Military => {
                themes.insert(StoryTheme::MilitaryService);
            }
            _ => {}
        }
    }

    if person.count_events(EventType::Marriage) > 1 {
        themes.insert(StoryTheme::MultipleMarriages);
    }

    themes
}
