//! Locales for semantic labels and month names.
//!
//! Labels use calendar-relative wording: a Day one step before the reference
//! day is "yesterday" regardless of how many hours have elapsed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Granularity;
use crate::error::PeriodError;

/// Supported label locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// British English (`en-GB`); also used for any other `en-*` tag, so
    /// month abbreviations follow en-GB for every English locale.
    #[default]
    English,
    /// Danish (`da-DK`).
    Danish,
}

// en-GB abbreviations; September is "Sept" there, unlike en-US.
const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

const DA_MONTHS: [&str; 12] = [
    "jan.", "feb.", "mar.", "apr.", "maj", "jun.", "jul.", "aug.", "sep.", "okt.", "nov.", "dec.",
];

impl Locale {
    /// Canonical BCP 47 tag.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::English => "en-GB",
            Locale::Danish => "da-DK",
        }
    }

    /// Abbreviated month name for `month` in 1..=12.
    pub fn short_month(self, month: u32) -> &'static str {
        let index = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::English => EN_MONTHS[index],
            Locale::Danish => DA_MONTHS[index],
        }
    }

    /// Calendar-relative phrase for `offset` units of `granularity` away from
    /// the reference period.
    pub fn relative_label(self, granularity: Granularity, offset: i64) -> String {
        match self {
            Locale::English => english_label(granularity, offset),
            Locale::Danish => danish_label(granularity, offset),
        }
    }
}

fn english_label(granularity: Granularity, offset: i64) -> String {
    let unit = match granularity {
        Granularity::Day => {
            match offset {
                0 => return "today".to_string(),
                -1 => return "yesterday".to_string(),
                1 => return "tomorrow".to_string(),
                _ => "day",
            }
        }
        Granularity::Week => "week",
        Granularity::Month => "month",
        Granularity::Quarter => "quarter",
        Granularity::Year => "year",
    };

    match offset {
        0 => format!("this {unit}"),
        -1 => format!("last {unit}"),
        1 => format!("next {unit}"),
        n if n < 0 => format!("{} {unit}s ago", -n),
        n => format!("in {n} {unit}s"),
    }
}

fn danish_label(granularity: Granularity, offset: i64) -> String {
    let (current, previous, next, plural) = match granularity {
        Granularity::Day => ("i dag", "i går", "i morgen", "dage"),
        Granularity::Week => ("denne uge", "sidste uge", "næste uge", "uger"),
        Granularity::Month => ("denne måned", "sidste måned", "næste måned", "måneder"),
        Granularity::Quarter => ("dette kvartal", "sidste kvartal", "næste kvartal", "kvartaler"),
        Granularity::Year => ("i år", "sidste år", "næste år", "år"),
    };

    match offset {
        0 => current.to_string(),
        -1 => previous.to_string(),
        1 => next.to_string(),
        n if n < 0 => format!("for {} {plural} siden", -n),
        n => format!("om {n} {plural}"),
    }
}

impl FromStr for Locale {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase().replace('_', "-");
        let language = tag.split('-').next().unwrap_or_default();
        match language {
            "en" => Ok(Locale::English),
            "da" => Ok(Locale::Danish),
            _ => Err(PeriodError::unsupported(format!("locale '{}' is not supported", s))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
