//! Report rendering for console and email.

use chrono::{DateTime, Local};

use crate::elapsed::UNKNOWN;

pub const DASHES: &str =
    "------------------------------------------------------------";

const HTML_BREAK: &str = "<br>";
const HTML_TAB: &str = "&emsp;";

/// Everything the report needs, assembled by the caller. Rendering is
/// pure: no I/O, no failure modes.
pub struct Report<'a> {
    pub case_number: &'a str,
    pub status: &'a str,
    pub elapsed_days: i64,
    pub previous: Option<&'a str>,
    pub changed: bool,
    pub generated_at: DateTime<Local>,
    pub detail: Option<&'a str>,
}

impl Report<'_> {
    pub fn render_plain(&self) -> String {
        let previous = self.previous.unwrap_or("None");
        let elapsed = if self.elapsed_days == UNKNOWN {
            "unknown".to_string()
        } else {
            self.elapsed_days.to_string()
        };
        let mut out = format!(
            "\n\t-------  Your USCIS Case [{}] ---------\n\
             \nCurrent Status \t\t: {}\
             \nDays since received \t: {}\
             \nPrevious Status \t: {}\
             \nChanged? \t\t: {}\
             \nCurrent Timestamp\t: {}\n{}\n",
            self.case_number,
            self.status,
            elapsed,
            previous,
            self.changed,
            self.generated_at.format("%Y-%m-%d %H:%M"),
            DASHES,
        );
        if let Some(detail) = self.detail {
            out.push_str(&format!("\n\nDetail:\n{detail}\n{DASHES}"));
        }
        out
    }

    /// The plain report with newlines as line breaks and tabs as wide
    /// spaces, for the email body.
    pub fn render_html(&self) -> String {
        self.render_plain()
            .replace('\n', HTML_BREAK)
            .replace('\t', HTML_TAB)
    }
}
