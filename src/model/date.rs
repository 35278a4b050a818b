//! Date interpretation: year extraction and narrative rendering
//!
//! Record dates are free-form tokens such as `1850`, `2 JUN 1875`,
//! `ABT 1920` or `BEF 3 MAR 1901`. Year extraction and narrative rendering
//! are independent: a qualified date still yields its year.

use regex_lite::Regex;
use std::sync::OnceLock;

static YEAR_RE: OnceLock<Regex> = OnceLock::new();
static BARE_YEAR_RE: OnceLock<Regex> = OnceLock::new();
static DAY_MONTH_YEAR_RE: OnceLock<Regex> = OnceLock::new();

/// Approximation qualifiers and their narrative replacements, checked in order
const QUALIFIERS: [(&str, &str); 3] = [("ABT", "around"), ("BEF", "before"), ("AFT", "after")];

/// First standalone year in 1000..=2999 found anywhere in the token
pub fn year_of(raw: &str) -> Option<i32> {
    let re = YEAR_RE.get_or_init(|| Regex::new(r"\b(1[0-9]{3}|2[0-9]{3})\b").unwrap());
    re.captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Render a date for use inside a sentence ("in 1850", "around 1920", ...)
pub fn narrative_date(raw: Option<&str>) -> String {
    let Some(date) = raw else {
        return "on an unknown date".to_string();
    };

    let bare_year = BARE_YEAR_RE.get_or_init(|| Regex::new(r"^\d{4}$").unwrap());
    let day_month_year =
        DAY_MONTH_YEAR_RE.get_or_init(|| Regex::new(r"^\d{1,2} \w+ \d{4}$").unwrap());

    if bare_year.is_match(date) {
        return format!("in {}", date);
    }
    if day_month_year.is_match(date) {
        return format!("on {}", date);
    }
    for (qualifier, phrase) in QUALIFIERS {
        if date.contains(qualifier) {
            return date.replace(qualifier, phrase);
        }
    }

    format!("on {}", date)
}
