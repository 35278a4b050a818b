//! Line decoder: `LEVEL [XREF] TAG [VALUE]`

use regex_lite::Regex;
use std::sync::OnceLock;

static LINE_RE: OnceLock<Regex> = OnceLock::new();

/// One decoded record line, borrowing from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub level: u32,
    /// Cross-reference id including its `@` markers
    pub xref: Option<&'a str>,
    pub tag: &'a str,
    pub value: Option<&'a str>,
}

impl<'a> Line<'a> {
    /// Decode a trimmed line; `None` for empty or malformed input
    pub fn decode(text: &'a str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }

        let re =
            LINE_RE.get_or_init(|| Regex::new(r"^(\d+)\s+(@\w+@\s+)?(\w+)(\s+(.*))?$").unwrap());
        let caps = re.captures(text)?;

        Some(Self {
            level: caps.get(1)?.as_str().parse().ok()?,
            xref: caps.get(2).map(|m| m.as_str().trim_end()),
            tag: caps.get(3)?.as_str(),
            value: caps.get(5).map(|m| m.as_str()),
        })
    }
}
