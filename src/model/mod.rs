//! Core data model: persons, families, events and locations
//!
//! All cross-entity links are cross-reference id strings resolved through
//! [`FamilyTree`]. Nothing in the model holds a pointer to another record.

pub mod date;
mod event;
mod family;
mod location;
mod person;
mod tree;

pub use event::{Event, EventType};
pub use family::Family;
pub use location::Location;
pub use person::Person;
pub use tree::FamilyTree;
