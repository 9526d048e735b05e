//! Resolution of the coarser periods enclosing a period.

use crate::error::PeriodResult;
use crate::models::{Granularity, PeriodId, PeriodInterval};

use super::{arithmetic, identifier};

/// Identifiers of the periods enclosing `interval` in every granularity
/// coarser than `own`.
///
/// `remaining` is ordered finest first and consumed from its coarsest end.
/// Resolution stops at the first candidate that is not coarser than `own`,
/// so passing [`Granularity::ALL`] yields exactly the coarser containers.
/// The containing period is resolved for both the first and the last day of
/// the interval; duplicates are dropped, keeping first-seen order.
pub fn containers_of(
    interval: &PeriodInterval,
    own: Granularity,
    remaining: &[Granularity],
) -> PeriodResult<Vec<PeriodId>> {
    collect(interval, own, remaining, Vec::new())
}

fn collect(
    interval: &PeriodInterval,
    own: Granularity,
    remaining: &[Granularity],
    mut found: Vec<PeriodId>,
) -> PeriodResult<Vec<PeriodId>> {
    let Some((&candidate, rest)) = remaining.split_last() else {
        return Ok(found);
    };
    if candidate <= own {
        return Ok(found);
    }

    for day in [interval.start(), interval.last_day()] {
        let id = identifier::period_id(&arithmetic::interval_of(day, candidate)?);
        if !found.contains(&id) {
            found.push(id);
        }
    }

    collect(interval, own, rest, found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn id_of(day: NaiveDate, granularity: Granularity) -> PeriodId {
        identifier::period_id(&arithmetic::interval_of(day, granularity).unwrap())
    }

    #[test]
    fn test_day_has_four_containers_coarsest_first() {
        let day = arithmetic::interval_of(date(2023, 1, 15), Granularity::Day).unwrap();
        let ids = containers_of(&day, Granularity::Day, &Granularity::ALL).unwrap();

        assert_eq!(
            ids,
            vec![
                id_of(date(2023, 1, 15), Granularity::Year),
                id_of(date(2023, 1, 15), Granularity::Quarter),
                id_of(date(2023, 1, 15), Granularity::Month),
                id_of(date(2023, 1, 15), Granularity::Week),
            ]
        );
    }

    #[test]
    fn test_week_crossing_year_boundary() {
        // Week of 2022-12-26 .. 2023-01-01 straddles month, quarter and year
        let week = arithmetic::interval_of(date(2022, 12, 28), Granularity::Week).unwrap();
        let ids = containers_of(&week, Granularity::Week, &Granularity::ALL).unwrap();

        assert_eq!(ids.len(), 6);
        assert!(ids.contains(&id_of(date(2022, 12, 1), Granularity::Month)));
        assert!(ids.contains(&id_of(date(2023, 1, 1), Granularity::Month)));
        assert!(ids.contains(&id_of(date(2022, 1, 1), Granularity::Year)));
        assert!(ids.contains(&id_of(date(2023, 1, 1), Granularity::Year)));
        assert!(!ids.contains(&identifier::period_id(&week)));
    }

    #[test]
    fn test_month_only_has_quarter_and_year() {
        let month = arithmetic::interval_of(date(2023, 5, 1), Granularity::Month).unwrap();
        let ids = containers_of(&month, Granularity::Month, &Granularity::ALL).unwrap();
        assert_eq!(
            ids,
            vec![
                id_of(date(2023, 5, 1), Granularity::Year),
                id_of(date(2023, 5, 1), Granularity::Quarter),
            ]
        );
    }

    #[test]
    fn test_year_has_no_containers() {
        let year = arithmetic::interval_of(date(2023, 5, 1), Granularity::Year).unwrap();
        let ids = containers_of(&year, Granularity::Year, &Granularity::ALL).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_restricted_candidate_list() {
        let day = arithmetic::interval_of(date(2023, 7, 4), Granularity::Day).unwrap();
        let ids = containers_of(
            &day,
            Granularity::Day,
            &[Granularity::Month, Granularity::Year],
        )
        .unwrap();
        assert_eq!(
            ids,
            vec![
                id_of(date(2023, 7, 4), Granularity::Year),
                id_of(date(2023, 7, 4), Granularity::Month),
            ]
        );
    }
}
