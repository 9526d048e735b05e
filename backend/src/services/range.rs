//! Parsing of request date bounds into an inclusive day span.

use chrono::{Datelike, NaiveDate};

use crate::error::{PeriodError, PeriodResult};
use crate::models::Granularity;

use super::arithmetic;

/// Which side of the range a bound is parsed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEdge {
    /// Partial dates expand to their first day.
    Start,
    /// Partial dates expand to their last day.
    End,
}

/// Inclusive span of local days `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateSpan {
    /// Create a span; fails when `to` precedes `from`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> PeriodResult<Self> {
        if to < from {
            return Err(PeriodError::invalid_range(format!(
                "range is empty: 'to' ({}) is before 'from' ({})",
                to, from
            )));
        }
        Ok(Self { from, to })
    }

    /// The calendar year containing `date`.
    pub fn year_of(date: NaiveDate) -> PeriodResult<Self> {
        Self::new(
            arithmetic::align_start(date, Granularity::Year)?,
            arithmetic::align_end(date, Granularity::Year)?,
        )
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Number of days covered, both ends included.
    pub fn num_days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}

/// Parse `YYYY`, `YYYY/MM` or `YYYY/MM/DD` (`-` also accepted as separator).
pub fn parse_bound(raw: &str, edge: RangeEdge) -> PeriodResult<NaiveDate> {
    let invalid = || PeriodError::invalid_range(format!("'{}' is not a valid date", raw));

    let parts = raw
        .trim()
        .split(['/', '-'])
        .map(|part| part.parse::<u32>().map_err(|_| invalid()))
        .collect::<PeriodResult<Vec<u32>>>()?;

    let year = match parts.first() {
        Some(&year) if (1..=9999).contains(&year) => year as i32,
        _ => return Err(invalid()),
    };

    let date = match (parts.as_slice(), edge) {
        ([_], RangeEdge::Start) => NaiveDate::from_ymd_opt(year, 1, 1),
        ([_], RangeEdge::End) => NaiveDate::from_ymd_opt(year, 12, 31),
        ([_, month], RangeEdge::Start) => NaiveDate::from_ymd_opt(year, *month, 1),
        ([_, month], RangeEdge::End) => match NaiveDate::from_ymd_opt(year, *month, 1) {
            Some(first) => Some(arithmetic::align_end(first, Granularity::Month)?),
            None => None,
        },
        ([_, month, day], _) => NaiveDate::from_ymd_opt(year, *month, *day),
        _ => None,
    };

    date.filter(|d| d.year() == year).ok_or_else(invalid)
}
