//! Elapsed-days computation from the status detail text.
//!
//! The detail paragraph opens with either `On <Month Day, Year>, ...`
//! or `As of <Month Day, Year>, ...`; both lead-ins are handled the
//! same way.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

use crate::error::CasewatchError;

/// Sentinel reported when elapsed days cannot be determined.
pub const UNKNOWN: i64 = -1;

/// Only this many leading characters are searched for a lead-in token.
const LEAD_WINDOW: usize = 20;

const DATE_FORMAT: &str = "%B %d, %Y";

fn as_of_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^As of (\w+ +\d+, \d{4}), ").unwrap())
}

fn on_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^On (\w+ +\d+, \d{4}), ").unwrap())
}

/// Extract the leading calendar date from `detail` and return the whole
/// days between it and `today`. Returns [`UNKNOWN`] when no lead-in
/// token appears in the first [`LEAD_WINDOW`] characters. A date in the
/// future yields a negative count.
///
/// A lead-in without a parseable date is a [`CasewatchError::DateParse`];
/// callers decide whether to degrade to [`UNKNOWN`].
pub fn days_since(detail: &str, today: NaiveDate) -> Result<i64, CasewatchError> {
    let head: String = detail
        .chars()
        .take(LEAD_WINDOW)
        .collect::<String>()
        .to_uppercase();

    let re = if head.contains("AS OF") {
        as_of_re()
    } else if head.contains("ON") {
        on_re()
    } else {
        return Ok(UNKNOWN);
    };

    let caps = re.captures(detail).ok_or_else(|| {
        let snippet: String = detail.chars().take(40).collect();
        CasewatchError::DateParse(format!("lead-in without date pattern: {snippet:?}"))
    })?;
    let datestr = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    if datestr.is_empty() {
        return Ok(UNKNOWN);
    }

    let date = NaiveDate::parse_from_str(datestr, DATE_FORMAT)
        .map_err(|e| CasewatchError::DateParse(format!("{datestr:?}: {e}")))?;
    Ok((today - date).num_days())
}
