//! Opening paragraph for the documentary, chosen by dominant theme

use super::journey::JourneyStop;
use super::statistics::Statistics;
use super::themes::StoryTheme;

/// Pick and fill the opening paragraph
///
/// Priority: immigration, then military service, then large family, then a
/// default built from the date range.
pub fn opening_narrative(
    themes: &[StoryTheme],
    journey: &[JourneyStop],
    stats: &Statistics,
) -> String {
    if themes.contains(&StoryTheme::Immigration) {
        immigration_opening(journey)
    } else if themes.contains(&StoryTheme::MilitaryService) {
        military_opening()
    } else if themes.contains(&StoryTheme::LargeFamily) {
        large_family_opening(stats)
    } else {
        default_opening(stats)
    }
}

fn immigration_opening(journey: &[JourneyStop]) -> String {
    match (journey.first(), journey.last()) {
        (Some(origin), Some(destination)) if journey.len() > 1 => format!(
            "This is the story of a family's journey across continents and generations. \
             From {} to {}, they carried with them hopes, dreams, and the determination \
             to build a better life. Their courage would shape the destiny of generations \
             to come.",
            origin.location, destination.location
        ),
        _ => "This is a story of courage, journey, and new beginnings.".to_string(),
    }
}

fn military_opening() -> String {
    "Throughout history, this family has answered the call to serve. From generation \
     to generation, they have stood in defense of their nation, their sacrifices woven \
     into the fabric of history. This is their story of duty, honor, and the price of \
     freedom."
        .to_string()
}

fn large_family_opening(stats: &Statistics) -> String {
    format!(
        "In an era when large families were both a blessing and a necessity, this family \
         tree spread wide and strong. With an average of {:.1} children per generation, \
         theirs is a story of resilience, love, and the bonds that tie us together across \
         time.",
        stats.average_children_per_family
    )
}

fn default_opening(stats: &Statistics) -> String {
    let range = &stats.date_range;
    match (range.earliest, range.latest) {
        (Some(earliest), Some(latest)) => format!(
            "Across {} generations and {} years, this family's story unfolds like a \
             tapestry woven with love, loss, triumph, and tradition. From {} to {}, each \
             thread tells a tale of lives lived, challenges overcome, and legacies left \
             behind.",
            stats.generations,
            latest - earliest,
            earliest,
            latest
        ),
        _ => "Every family has a story. This is yours. A story of ordinary people living \
              extraordinary lives, of connections that span generations, and of the \
              enduring power of family."
            .to_string(),
    }
}
