//! FamilyTree: the keyed collections produced by a parse

use super::family::Family;
use super::person::Person;
use std::collections::HashMap;

/// Records keyed by id, iterated in first-insertion order
///
/// Re-inserting an existing id replaces the record in place, so iteration
/// order only depends on when an id was first seen.
#[derive(Debug, Clone)]
struct Keyed<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Keyed<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Keyed<T> {
    fn upsert(&mut self, id: String, record: T) -> bool {
        match self.index.get(&id) {
            Some(&slot) => {
                self.records[slot] = record;
                true
            }
            None => {
                self.index.insert(id, self.records.len());
                self.records.push(record);
                false
            }
        }
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&slot| &self.records[slot])
    }
}

/// Persons and families from one record file
///
/// This is the sole source of truth for every analytics pass.
#[derive(Debug, Clone, Default)]
pub struct FamilyTree {
    persons: Keyed<Person>,
    families: Keyed<Family>,
}

impl FamilyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a person; returns true if the id was already present
    pub fn upsert_person(&mut self, person: Person) -> bool {
        self.persons.upsert(person.id.clone(), person)
    }

    /// Insert or replace a family; returns true if the id was already present
    pub fn upsert_family(&mut self, family: Family) -> bool {
        self.families.upsert(family.id.clone(), family)
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.persons.get(id)
    }

    pub fn family(&self, id: &str) -> Option<&Family> {
        self.families.get(id)
    }

    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.records.iter()
    }

    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.families.records.iter()
    }

    pub fn person_count(&self) -> usize {
        self.persons.records.len()
    }

    pub fn family_count(&self) -> usize {
        self.families.records.len()
    }

    /// Families in which the person is a spouse; dangling ids are skipped
    pub fn spouse_families<'a>(&'a self, person: &'a Person) -> impl Iterator<Item = &'a Family> {
        person.family_spouse.iter().filter_map(|id| self.family(id))
    }

    /// Families in which the person is a child; dangling ids are skipped
    pub fn parent_families<'a>(&'a self, person: &'a Person) -> impl Iterator<Item = &'a Family> {
        person.family_child.iter().filter_map(|id| self.family(id))
    }
}
