//! Report title and date

use crate::document::{ReportDocument, HEADING};
use crate::error::{ReportError, Result};
use regex::Regex;
use std::sync::LazyLock;

static TITLE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(January|February|March|April|May|June|July|August|September|October|November|December)\s+(\d{1,2}),\s+(\d{4})",
    )
    .expect("invalid regex: title date")
});

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Normalized text of the first top-level heading, or empty
pub fn extract_title(doc: &ReportDocument) -> String {
    doc.select_first(&HEADING)
        .map(|h1| h1.normalized_text())
        .unwrap_or_default()
}

/// Find `<Month> <Day>, <Year>` in a title and return it as `YYYY-MM-DD`.
///
/// The first match in reading order with a day in 1..=31 wins.
pub fn extract_date_from_title(title: &str) -> Result<String> {
    TITLE_DATE
        .captures_iter(title)
        .find_map(|caps| {
            let month = MONTHS.iter().position(|m| *m == &caps[1])? + 1;
            let day: u32 = caps[2].parse().ok()?;
            let year: u32 = caps[3].parse().ok()?;
            (1..=31)
                .contains(&day)
                .then(|| format!("{:04}-{:02}-{:02}", year, month, day))
        })
        .ok_or_else(|| ReportError::missing_date(title))
}
