//! Family units

use super::event::Event;
use serde::{Deserialize, Serialize};

/// A family unit; spouse and child entries are person ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    /// Cross-reference id, e.g. `@F1@`
    pub id: String,
    pub husband_id: Option<String>,
    pub wife_id: Option<String>,
    pub children_ids: Vec<String>,
    pub marriage_event: Option<Event>,
    pub divorce_event: Option<Event>,
}

impl Family {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            husband_id: None,
            wife_id: None,
            children_ids: Vec::new(),
            marriage_event: None,
            divorce_event: None,
        }
    }

    pub fn child_count(&self) -> usize {
        self.children_ids.len()
    }

    /// Direct children count meets the threshold
    pub fn is_large_family(&self, min_children: usize) -> bool {
        self.child_count() >= min_children
    }
}
