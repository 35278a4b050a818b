//! Life events and their closed set of kinds

use super::date;
use super::location::Location;
use serde::{Deserialize, Serialize};

/// Kinds of life event tracked for storytelling
///
/// Serializes as the record-file tag (`BIRT`, `DEAT`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "BIRT")]
    Birth,
    #[serde(rename = "DEAT")]
    Death,
    #[serde(rename = "MARR")]
    Marriage,
    #[serde(rename = "DIV")]
    Divorce,
    #[serde(rename = "IMMI")]
    Immigration,
    #[serde(rename = "EMIG")]
    Emigration,
    #[serde(rename = "CENS")]
    Census,
    #[serde(rename = "OCCU")]
    Occupation,
    #[serde(rename = "EDUC")]
    Education,
    #[serde(rename = "MILI")]
    Military,
    #[serde(rename = "BAPM")]
    Baptism,
    #[serde(rename = "BURI")]
    Burial,
    #[serde(rename = "RESI")]
    Residence,
}

impl EventType {
    /// The record-file tag for this event kind
    pub fn tag(self) -> &'static str {
        match self {
            EventType::Birth => "BIRT",
            EventType::Death => "DEAT",
            EventType::Marriage => "MARR",
            EventType::Divorce => "DIV",
            EventType::Immigration => "IMMI",
            EventType::Emigration => "EMIG",
            EventType::Census => "CENS",
            EventType::Occupation => "OCCU",
            EventType::Education => "EDUC",
            EventType::Military => "MILI",
            EventType::Baptism => "BAPM",
            EventType::Burial => "BURI",
            EventType::Residence => "RESI",
        }
    }

    /// Look up an event kind by its record-file tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "BIRT" => EventType::Birth,
            "DEAT" => EventType::Death,
            "MARR" => EventType::Marriage,
            "DIV" => EventType::Divorce,
            "IMMI" => EventType::Immigration,
            "EMIG" => EventType::Emigration,
            "CENS" => EventType::Census,
            "OCCU" => EventType::Occupation,
            "EDUC" => EventType::Education,
            "MILI" => EventType::Military,
            "BAPM" => EventType::Baptism,
            "BURI" => EventType::Burial,
            "RESI" => EventType::Residence,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether a person record opens an event for this kind.
    ///
    /// Census, baptism, burial, residence and divorce lines under a person
    /// are not interpreted.
    pub fn opens_on_person(self) -> bool {
        matches!(
            self,
            EventType::Birth
                | EventType::Death
                | EventType::Marriage
                | EventType::Immigration
                | EventType::Emigration
                | EventType::Occupation
                | EventType::Education
                | EventType::Military
        )
    }

    /// Whether a family record opens an event for this kind
    pub fn opens_on_family(self) -> bool {
        matches!(self, EventType::Marriage | EventType::Divorce)
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single life event, owned by exactly one person or family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_type: EventType,
    /// Raw date token as written in the file
    pub date: Option<String>,
    pub location: Option<Location>,
    pub description: Option<String>,
    /// Years since the owner's birth, filled in when the owner is committed
    pub age_at_event: Option<i32>,
}

impl Event {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            date: None,
            location: None,
            description: None,
            age_at_event: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.location = Some(Location::parse(place));
        self
    }

    pub fn year(&self) -> Option<i32> {
        self.date.as_deref().and_then(date::year_of)
    }

    pub fn narrative_date(&self) -> String {
        date::narrative_date(self.date.as_deref())
    }

    pub fn location_name(&self) -> Option<String> {
        self.location.as_ref().map(Location::display_name)
    }
}
