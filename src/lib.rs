//! Kinstory: GEDCOM Record Parser and Family-Story Analytics
//!
//! Reads genealogical record files in the level-based GEDCOM line format and
//! turns them into a story-oriented record for documentary narration.
//!
//! # Core Concepts
//!
//! - **FamilyTree**: persons and families keyed by cross-reference id
//! - **Events**: births, deaths, marriages, migrations and more, each owned
//!   by exactly one person or family
//! - **StoryRecord**: projections plus derived themes, timeline, geographic
//!   journey, statistics and insights
//!
//! # Example
//!
//! ```
//! use kinstory::{assemble, parse_str, StoryConfig};
//!
//! let tree = parse_str("0 @I1@ INDI\n1 NAME Ann /Doyle/\n1 BIRT\n2 DATE 1850\n");
//! let record = assemble(&tree, &StoryConfig::default());
//! assert_eq!(record.statistics.total_individuals, 1);
//! ```

pub mod analysis;
pub mod config;
pub mod model;
pub mod parse;
pub mod story;

pub use analysis::{DateRange, Insights, JourneyStop, KeyEvent, Statistics, StoryTheme};
pub use config::{ConfigError, StoryConfig};
pub use model::{Event, EventType, Family, FamilyTree, Location, Person};
pub use parse::{parse_file, parse_reader, parse_str, ParseError, ParseResult, RecordBuilder};
pub use story::{assemble, StoryRecord};

use std::path::Path;

/// Parse a record file and assemble its story record
pub fn story_from_file(path: impl AsRef<Path>, config: &StoryConfig) -> ParseResult<StoryRecord> {
    let tree = parse_file(path)?;
    Ok(assemble(&tree, config))
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
