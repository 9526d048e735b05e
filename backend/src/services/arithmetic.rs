//! Calendar arithmetic per granularity.
//!
//! All functions operate on local calendar dates. Weeks follow ISO-8601:
//! they start on Monday and week 1 is the week holding the first Thursday.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{PeriodError, PeriodResult};
use crate::models::{Granularity, Locale, PeriodInterval};

fn out_of_range(date: NaiveDate, operation: &str, granularity: Granularity) -> PeriodError {
    PeriodError::internal(format!(
        "{} of {} for {} is outside the supported calendar range",
        operation, granularity, date
    ))
}

/// Snap `date` down to the first day of its enclosing period.
pub fn align_start(date: NaiveDate, granularity: Granularity) -> PeriodResult<NaiveDate> {
    let aligned = match granularity {
        Granularity::Day => Some(date),
        Granularity::Week => {
            date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
        }
        Granularity::Month => date.with_day(1),
        Granularity::Quarter => NaiveDate::from_ymd_opt(date.year(), quarter_first_month(date), 1),
        Granularity::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1),
    };
    aligned.ok_or_else(|| out_of_range(date, "start", granularity))
}

/// Aligned start of the period following the one enclosing `date`.
pub fn advance(date: NaiveDate, granularity: Granularity) -> PeriodResult<NaiveDate> {
    let start = align_start(date, granularity)?;
    let next = match granularity {
        Granularity::Day => start.checked_add_days(Days::new(1)),
        Granularity::Week => start.checked_add_days(Days::new(7)),
        Granularity::Month => start.checked_add_months(Months::new(1)),
        Granularity::Quarter => start.checked_add_months(Months::new(3)),
        Granularity::Year => start.checked_add_months(Months::new(12)),
    };
    next.ok_or_else(|| out_of_range(date, "advance", granularity))
}

/// Last day of the period enclosing `date`.
pub fn align_end(date: NaiveDate, granularity: Granularity) -> PeriodResult<NaiveDate> {
    advance(date, granularity)?
        .pred_opt()
        .ok_or_else(|| out_of_range(date, "end", granularity))
}

/// The aligned interval of `granularity` enclosing `date`.
pub fn interval_of(date: NaiveDate, granularity: Granularity) -> PeriodResult<PeriodInterval> {
    Ok(PeriodInterval::new(
        align_start(date, granularity)?,
        advance(date, granularity)?,
    ))
}

/// Whole granularity units from `reference_start` to `period_start`.
///
/// Negative when the period lies before the reference period. Both dates are
/// compared by the periods they fall in, so unaligned inputs are tolerated.
pub fn units_between(
    period_start: NaiveDate,
    reference_start: NaiveDate,
    granularity: Granularity,
) -> i64 {
    match granularity {
        Granularity::Day => (period_start - reference_start).num_days(),
        Granularity::Week => (monday_ordinal(period_start) - monday_ordinal(reference_start)) / 7,
        Granularity::Month => month_index(period_start) - month_index(reference_start),
        Granularity::Quarter => quarter_index(period_start) - quarter_index(reference_start),
        Granularity::Year => i64::from(period_start.year()) - i64::from(reference_start.year()),
    }
}

/// Localized calendar-relative phrase for the distance between the periods.
pub fn semantic_label(
    period_start: NaiveDate,
    reference_start: NaiveDate,
    granularity: Granularity,
    locale: Locale,
) -> String {
    locale.relative_label(granularity, units_between(period_start, reference_start, granularity))
}

/// Number local to the granularity.
pub fn number(date: NaiveDate, granularity: Granularity) -> i32 {
    match granularity {
        Granularity::Day => date.ordinal() as i32,
        Granularity::Week => date.iso_week().week() as i32,
        Granularity::Month => date.month() as i32,
        Granularity::Quarter => quarter(date) as i32,
        Granularity::Year => date.year(),
    }
}

/// Display name without the semantic suffix.
pub fn name(date: NaiveDate, granularity: Granularity, locale: Locale) -> String {
    match granularity {
        Granularity::Day => date.format("%Y/%m/%d").to_string(),
        Granularity::Week => {
            let week = date.iso_week();
            format!("{}W{:02}", week.year(), week.week())
        }
        Granularity::Month => format!(
            "{} {}",
            date.format("%Y/%m"),
            locale.short_month(date.month())
        ),
        Granularity::Quarter => format!("{}Q{}", date.year(), quarter(date)),
        Granularity::Year => date.year().to_string(),
    }
}

fn quarter(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}

fn quarter_first_month(date: NaiveDate) -> u32 {
    (quarter(date) - 1) * 3 + 1
}

fn monday_ordinal(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - i64::from(date.weekday().num_days_from_monday())
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

fn quarter_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 4 + i64::from(quarter(date) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_align_start() {
        // 2023-01-01 is a Sunday
        let d = date(2023, 1, 1);
        assert_eq!(align_start(d, Granularity::Day).unwrap(), d);
        assert_eq!(align_start(d, Granularity::Week).unwrap(), date(2022, 12, 26));
        assert_eq!(align_start(date(2023, 5, 17), Granularity::Month).unwrap(), date(2023, 5, 1));
        assert_eq!(align_start(date(2023, 5, 17), Granularity::Quarter).unwrap(), date(2023, 4, 1));
        assert_eq!(align_start(date(2023, 12, 31), Granularity::Quarter).unwrap(), date(2023, 10, 1));
        assert_eq!(align_start(date(2023, 5, 17), Granularity::Year).unwrap(), date(2023, 1, 1));
    }

    #[test]
    fn test_align_end() {
        assert_eq!(align_end(date(2024, 2, 10), Granularity::Month).unwrap(), date(2024, 2, 29));
        assert_eq!(align_end(date(2023, 2, 10), Granularity::Month).unwrap(), date(2023, 2, 28));
        assert_eq!(align_end(date(2023, 1, 4), Granularity::Week).unwrap(), date(2023, 1, 8));
        assert_eq!(align_end(date(2023, 8, 4), Granularity::Quarter).unwrap(), date(2023, 9, 30));
        assert_eq!(align_end(date(2023, 8, 4), Granularity::Year).unwrap(), date(2023, 12, 31));
    }

    #[test]
    fn test_advance() {
        assert_eq!(advance(date(2023, 1, 31), Granularity::Day).unwrap(), date(2023, 2, 1));
        assert_eq!(advance(date(2023, 1, 31), Granularity::Month).unwrap(), date(2023, 2, 1));
        assert_eq!(advance(date(2023, 1, 1), Granularity::Week).unwrap(), date(2023, 1, 2));
        assert_eq!(advance(date(2023, 11, 15), Granularity::Quarter).unwrap(), date(2024, 1, 1));
        assert_eq!(advance(date(2023, 6, 1), Granularity::Year).unwrap(), date(2024, 1, 1));
    }

    #[test]
    fn test_advance_out_of_range_is_internal_error() {
        let err = advance(NaiveDate::MAX, Granularity::Day).unwrap_err();
        assert!(matches!(err, PeriodError::InternalComputation(_)));
    }

    #[test]
    fn test_interval_of() {
        let interval = interval_of(date(2023, 2, 14), Granularity::Month).unwrap();
        assert_eq!(interval.start(), date(2023, 2, 1));
        assert_eq!(interval.end(), date(2023, 3, 1));
    }

    #[test]
    fn test_units_between_signs() {
        let reference = date(2023, 1, 15);
        assert_eq!(units_between(date(2023, 1, 14), reference, Granularity::Day), -1);
        assert_eq!(units_between(reference, reference, Granularity::Day), 0);
        assert_eq!(units_between(date(2023, 1, 18), reference, Granularity::Day), 3);

        let week_ref = date(2023, 1, 9);
        assert_eq!(units_between(date(2022, 12, 26), week_ref, Granularity::Week), -2);
        assert_eq!(units_between(date(2023, 1, 23), week_ref, Granularity::Week), 2);

        assert_eq!(units_between(date(2022, 12, 1), date(2023, 1, 1), Granularity::Month), -1);
        assert_eq!(units_between(date(2022, 10, 1), date(2023, 1, 1), Granularity::Quarter), -1);
        assert_eq!(units_between(date(2025, 1, 1), date(2023, 1, 1), Granularity::Year), 2);
    }

    #[test]
    fn test_semantic_label_is_calendar_relative() {
        let label = semantic_label(
            date(2022, 12, 31),
            date(2023, 1, 1),
            Granularity::Year,
            Locale::English,
        );
        assert_eq!(label, "last year");
    }

    #[test]
    fn test_number() {
        assert_eq!(number(date(2023, 2, 1), Granularity::Day), 32);
        assert_eq!(number(date(2023, 1, 2), Granularity::Week), 1);
        assert_eq!(number(date(2022, 12, 26), Granularity::Week), 52);
        assert_eq!(number(date(2023, 9, 1), Granularity::Month), 9);
        assert_eq!(number(date(2023, 9, 1), Granularity::Quarter), 3);
        assert_eq!(number(date(2023, 9, 1), Granularity::Year), 2023);
    }

    #[test]
    fn test_name() {
        assert_eq!(name(date(2023, 1, 5), Granularity::Day, Locale::English), "2023/01/05");
        assert_eq!(name(date(2023, 1, 2), Granularity::Week, Locale::English), "2023W01");
        assert_eq!(name(date(2023, 1, 1), Granularity::Month, Locale::English), "2023/01 Jan");
        assert_eq!(name(date(2023, 9, 1), Granularity::Month, Locale::English), "2023/09 Sept");
        assert_eq!(name(date(2023, 1, 1), Granularity::Month, Locale::Danish), "2023/01 jan.");
        assert_eq!(name(date(2023, 10, 1), Granularity::Quarter, Locale::English), "2023Q4");
        assert_eq!(name(date(2023, 1, 1), Granularity::Year, Locale::English), "2023");
    }

    #[test]
    fn test_iso_week_year_differs_from_calendar_year() {
        // 2020-12-28 starts ISO week 53 of 2020; 2024-12-30 starts week 1 of 2025
        assert_eq!(name(date(2020, 12, 28), Granularity::Week, Locale::English), "2020W53");
        assert_eq!(name(date(2024, 12, 30), Granularity::Week, Locale::English), "2025W01");
        assert_eq!(number(date(2024, 12, 30), Granularity::Week), 1);
    }
}
