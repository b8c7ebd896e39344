//! Display formatting for ISO-style `YYYY-MM-DD` dates.

use regex::Regex;
use std::sync::OnceLock;

const MONTHS_FULL: [&str; 12] = [
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

const MONTHS_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// How the month is spelled in a formatted date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    /// `March  5, 2024`, used on page datelines.
    Full,
    /// `Mar  5, 2024`, used in the index table.
    Abbreviated,
}

impl MonthStyle {
    fn names(self) -> &'static [&'static str; 12] {
        match self {
            MonthStyle::Full => &MONTHS_FULL,
            MonthStyle::Abbreviated => &MONTHS_ABBR,
        }
    }
}

/// A calendar date as written in front matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl IsoDate {
    /// Parses the leading `Y-M-D` of `s`.
    ///
    /// Leading whitespace is skipped and anything after the day (such as a
    /// time) is ignored. Returns `None` if the numbers are missing, the month
    /// is outside 1..=12 or the day outside 1..=31.
    pub fn parse(s: &str) -> Option<Self> {
        static ISO_DATE: OnceLock<Regex> = OnceLock::new();
        let re = ISO_DATE
            .get_or_init(|| Regex::new(r"^\s*(\d+)-(\d+)-(\d+)").expect("Invalid date regex"));

        let caps = re.captures(s)?;
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn display(&self, style: MonthStyle) -> String {
        let month = style.names()[(self.month - 1) as usize];
        format!("{month} {:>2}, {:04}", self.day, self.year)
    }
}

/// Formats `iso_date` for display, or `None` if it doesn't parse.
pub fn format_date(iso_date: &str, style: MonthStyle) -> Option<String> {
    IsoDate::parse(iso_date).map(|d| d.display(style))
}

pub fn format_date_full(iso_date: &str) -> Option<String> {
    format_date(iso_date, MonthStyle::Full)
}

pub fn format_date_abbr(iso_date: &str) -> Option<String> {
    format_date(iso_date, MonthStyle::Abbreviated)
}
