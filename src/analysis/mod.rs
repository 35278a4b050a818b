//! Story analytics over a parsed [`FamilyTree`](crate::model::FamilyTree)
//!
//! Every pass reads the tree and never modifies it.
//!
//! # Passes
//!
//! - **themes**: per-person narrative themes from lifespan and event patterns
//! - **timeline**: every dated event as a sentence, sorted by year
//! - **journey**: distinct places in the order the family first reached them
//! - **statistics**: counts, averages, common places, date range
//! - **insights**: coarse notes derived from the journey and statistics
//! - **opening**: the opening paragraph, picked by dominant theme

mod insights;
mod journey;
mod opening;
mod statistics;
mod themes;
mod timeline;

pub use insights::{historical_context, migration_span, settlement_pattern, Insights};
pub use journey::{geographic_journey, significance, JourneyStop};
pub use opening::opening_narrative;
pub use statistics::{
    average_children, average_lifespan, common_locations, date_range, estimate_generations,
    DateRange, Statistics,
};
pub use themes::{classify, StoryTheme};
pub use timeline::{describe_event, key_events, KeyEvent};
