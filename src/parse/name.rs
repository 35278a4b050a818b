//! Personal name values: `Given Names /Surname/ [suffix]`

use regex_lite::Regex;
use std::sync::OnceLock;

static SLASHED_NAME_RE: OnceLock<Regex> = OnceLock::new();

/// Given names and surname split out of a raw name value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonalName {
    pub given_names: Option<String>,
    pub surname: Option<String>,
}

impl PersonalName {
    /// Split a name value; `None` for an empty value
    ///
    /// With a `/Surname/` pair, text after the closing slash is dropped.
    /// Without one, the last whitespace token is taken as the surname.
    pub fn parse(value: &str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }

        let re = SLASHED_NAME_RE
            .get_or_init(|| Regex::new(r"^([^/]*)\s*/([^/]*)/\s*(.*)$").unwrap());

        if let Some(caps) = re.captures(value) {
            return Some(Self {
                given_names: caps.get(1).and_then(|m| non_empty(m.as_str())),
                surname: caps.get(2).and_then(|m| non_empty(m.as_str())),
            });
        }

        let parts: Vec<&str> = value.split_whitespace().collect();
        let name = match parts.split_last() {
            Some((last, rest)) if !rest.is_empty() => Self {
                given_names: Some(rest.join(" ")),
                surname: Some((*last).to_string()),
            },
            _ => Self {
                given_names: non_empty(value),
                surname: None,
            },
        };
        Some(name)
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
