//! RecordBuilder: level-driven state machine that assembles the FamilyTree
//!
//! Lines are folded in one at a time. Level 0 starts a record, level 1
//! fills in the current person or family (or opens an event), and level 2
//! fills in the open event. An open event is attached to its owner when the
//! next line at level 0 or 1 arrives, or when input ends.

use super::line::Line;
use super::name::PersonalName;
use crate::model::{Event, EventType, Family, FamilyTree, Location, Person};
use tracing::{debug, trace};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// The record currently under construction
#[derive(Debug, Default)]
enum Current {
    #[default]
    None,
    Person(Person),
    Family(Family),
}

/// Incremental builder for one record file
///
/// All parse state lives in the instance, so independent builders can run
/// on different threads without coordination.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    tree: FamilyTree,
    current: Current,
    open_event: Option<Event>,
    lines_read: usize,
    lines_skipped: usize,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one raw text line into the builder state
    ///
    /// Malformed lines are skipped without affecting any state.
    pub fn feed(&mut self, raw: &str) {
        self.lines_read += 1;

        let raw = if self.lines_read == 1 {
            raw.trim_start_matches(BYTE_ORDER_MARK)
        } else {
            raw
        };
        let text = raw.trim();

        let Some(line) = Line::decode(text) else {
            if !text.is_empty() {
                self.lines_skipped += 1;
                trace!(line = self.lines_read, "skipping malformed line");
            }
            return;
        };

        if line.level <= 1 {
            self.close_event();
        }

        match line.level {
            0 => self.start_record(&line),
            1 => match &mut self.current {
                Current::Person(person) => {
                    if let Some(event) = apply_person_line(person, &line) {
                        self.open_event = Some(event);
                    }
                }
                Current::Family(family) => {
                    if let Some(event) = apply_family_line(family, &line) {
                        self.open_event = Some(event);
                    }
                }
                Current::None => {}
            },
            2 => {
                if let Some(event) = &mut self.open_event {
                    apply_event_detail(event, &line);
                }
            }
            _ => {}
        }
    }

    /// Number of non-empty lines that did not decode
    pub fn lines_skipped(&self) -> usize {
        self.lines_skipped
    }

    /// Close any open event, commit the last record and return the tree
    pub fn finish(mut self) -> FamilyTree {
        self.close_event();
        self.commit_current();
        debug!(
            lines = self.lines_read,
            skipped = self.lines_skipped,
            "record builder finished"
        );
        self.tree
    }

    fn start_record(&mut self, line: &Line<'_>) {
        self.commit_current();

        self.current = match (line.xref, line.tag) {
            (Some(id), "INDI") => Current::Person(Person::new(id)),
            (Some(id), "FAM") => Current::Family(Family::new(id)),
            _ => Current::None,
        };
    }

    /// Attach the open event, if any, to the record that opened it
    fn close_event(&mut self) {
        let Some(event) = self.open_event.take() else {
            return;
        };

        match &mut self.current {
            Current::Person(person) => person.events.push(event),
            Current::Family(family) => match event.event_type {
                EventType::Marriage => family.marriage_event = Some(event),
                EventType::Divorce => family.divorce_event = Some(event),
                _ => {}
            },
            Current::None => {}
        }
    }

    fn commit_current(&mut self) {
        match std::mem::take(&mut self.current) {
            Current::Person(mut person) => {
                person.compute_ages();
                debug!(id = %person.id, events = person.events.len(), "committed person");
                if self.tree.upsert_person(person) {
                    debug!("person id seen twice, later record kept");
                }
            }
            Current::Family(family) => {
                debug!(id = %family.id, children = family.child_count(), "committed family");
                if self.tree.upsert_family(family) {
                    debug!("family id seen twice, later record kept");
                }
            }
            Current::None => {}
        }
    }
}

/// Apply a level-1 line to a person; returns a newly opened event
fn apply_person_line(person: &mut Person, line: &Line<'_>) -> Option<Event> {
    match line.tag {
        "NAME" => {
            if let Some(name) = line.value.and_then(PersonalName::parse) {
                person.given_names = name.given_names;
                person.surname = name.surname;
            }
        }
        "SEX" => person.sex = line.value.map(str::to_string),
        "FAMC" => person.family_child.extend(line.value.map(str::to_string)),
        "FAMS" => person.family_spouse.extend(line.value.map(str::to_string)),
        "NOTE" => {
            if let Some(note) = line.value.filter(|v| !v.is_empty()) {
                person.notes.push(note.to_string());
            }
        }
        tag => {
            let kind = EventType::from_tag(tag).filter(|k| k.opens_on_person())?;
            let mut event = Event::new(kind);
            // Attribute-style events carry their descriptor on the same line.
            if matches!(kind, EventType::Occupation | EventType::Education) {
                event.description = line.value.map(str::to_string);
            }
            return Some(event);
        }
    }
    None
}

/// Apply a level-1 line to a family; returns a newly opened event
fn apply_family_line(family: &mut Family, line: &Line<'_>) -> Option<Event> {
    match line.tag {
        "HUSB" => family.husband_id = line.value.map(str::to_string),
        "WIFE" => family.wife_id = line.value.map(str::to_string),
        "CHIL" => family.children_ids.extend(line.value.map(str::to_string)),
        tag => {
            let kind = EventType::from_tag(tag).filter(|k| k.opens_on_family())?;
            return Some(Event::new(kind));
        }
    }
    None
}

/// Apply a level-2 detail line to the open event
fn apply_event_detail(event: &mut Event, line: &Line<'_>) {
    match line.tag {
        "DATE" => event.date = line.value.map(str::to_string),
        "PLAC" => event.location = line.value.map(Location::parse),
        "NOTE" => event.description = line.value.map(str::to_string),
        _ => {}
    }
}
