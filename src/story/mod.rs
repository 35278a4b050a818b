//! Story record: the structured output handed to narration
//!
//! [`assemble`] combines per-person and per-family projections with every
//! analytics pass into one [`StoryRecord`]. The record serializes to JSON
//! deterministically: maps keep the tree's insertion order and theme lists
//! keep the theme declaration order.

mod assemble;
mod record;

pub use assemble::assemble;
pub use record::{EventStory, FamilyStory, IdMap, MarriageStory, PersonStory, StoryRecord};
