// src/specs/incidents.rs
//
// Monthly listing page: each incident is a pair of
//   <td style="width: 15%;">Feb-07</td>   date label
//   <div class="more">…summary…</div>      free text (expandable)
// appearing in the same order. Pairing is positional, so the two lists must
// have equal length for the page to be trusted.

use crate::core::html::{block_text, find_elements, has_class, style_is};
use crate::core::sanitize::strip_marker;

pub const INCIDENT_CLASS: &str = "more";
pub const DATE_CELL_STYLE: &str = "width: 15%;";
/// Toggle text of the expandable block, glued to the end of every summary.
pub const READ_LESS_MARKER: &str = "Read less...";

/// Date labels and summaries, each in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageNodes {
    pub dates: Vec<String>,
    pub summaries: Vec<String>,
}

impl PageNodes {
    pub fn is_aligned(&self) -> bool { self.dates.len() == self.summaries.len() }

    /// (date label, summary) pairs; `None` when the lists disagree in length.
    pub fn pairs(&self) -> Option<impl Iterator<Item = (&str, &str)>> {
        if !self.is_aligned() { return None; }
        Some(self.dates.iter().map(String::as_str).zip(self.summaries.iter().map(String::as_str)))
    }
}

pub fn parse_doc(html_doc: &str) -> PageNodes {
    let summaries = find_elements(html_doc, "div", |o| has_class(o, INCIDENT_CLASS))
        .into_iter()
        .map(|block| clean_summary(&block_text(block)))
        .collect();

    let dates = find_elements(html_doc, "td", |o| style_is(o, DATE_CELL_STYLE))
        .into_iter()
        .map(block_text)
        .collect();

    PageNodes { dates, summaries }
}

/// Whitespace collapsed, toggle marker removed.
pub fn clean_summary(text: &str) -> String {
    strip_marker(text, READ_LESS_MARKER)
}

/// Day of month from a date label: the last `-`-separated token
/// ("Feb-07" → 7, "7" → 7). `None` when that token is not a number.
pub fn day_of_month(label: &str) -> Option<u32> {
    label
        .trim()
        .rsplit('-')
        .next()
        .map(str::trim)
        .filter(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()))
        .and_then(|t| t.parse().ok())
}
