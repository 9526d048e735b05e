//! Assembly of the per-granularity period sequences.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::PeriodResult;
use crate::models::{Granularity, Locale, PeriodId, PeriodRecord};

use super::range::DateSpan;
use super::{arithmetic, containment, identifier};

/// Builds period records relative to a fixed reference day.
///
/// Holds no state beyond its inputs; every call to [`HierarchyBuilder::build`]
/// recomputes the full range.
#[derive(Debug, Clone, Copy)]
pub struct HierarchyBuilder {
    reference: NaiveDate,
    locale: Locale,
}

impl HierarchyBuilder {
    pub fn new(reference: NaiveDate, locale: Locale) -> Self {
        Self { reference, locale }
    }

    /// Reference day is the local date of `instant` in `timezone`.
    pub fn at_instant(instant: DateTime<Utc>, timezone: Tz, locale: Locale) -> Self {
        Self::new(instant.with_timezone(&timezone).date_naive(), locale)
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Records for every granularity, concatenated Day, Week, Month, Quarter, Year.
    pub fn build(&self, span: &DateSpan) -> PeriodResult<Vec<PeriodRecord>> {
        let mut records = Vec::new();
        for granularity in Granularity::ALL {
            records.extend(self.build_granularity(span, granularity)?);
        }
        Ok(records)
    }

    /// The minimal run of contiguous periods of `granularity` covering `span`,
    /// each linked to its predecessor.
    pub fn build_granularity(
        &self,
        span: &DateSpan,
        granularity: Granularity,
    ) -> PeriodResult<Vec<PeriodRecord>> {
        let reference_start = arithmetic::align_start(self.reference, granularity)?;
        let mut cursor = arithmetic::align_start(span.from(), granularity)?;
        let mut previous = None;
        let mut records = Vec::new();

        while cursor <= span.to() {
            let record = self.record_at(cursor, granularity, reference_start, previous)?;
            previous = Some(record.id);
            records.push(record);
            cursor = arithmetic::advance(cursor, granularity)?;
        }

        debug!(
            granularity = %granularity,
            count = records.len(),
            from = %span.from(),
            to = %span.to(),
            "generated periods"
        );
        Ok(records)
    }

    fn record_at(
        &self,
        start: NaiveDate,
        granularity: Granularity,
        reference_start: NaiveDate,
        previous: Option<PeriodId>,
    ) -> PeriodResult<PeriodRecord> {
        let interval = arithmetic::interval_of(start, granularity)?;
        let relative = arithmetic::units_between(interval.start(), reference_start, granularity);
        let semantic =
            arithmetic::semantic_label(interval.start(), reference_start, granularity, self.locale);

        let mut name = arithmetic::name(interval.start(), granularity, self.locale);
        if relative.abs() <= 1 {
            name = format!("{} ({})", name, semantic);
        }

        Ok(PeriodRecord {
            granularity,
            dates: interval,
            number: arithmetic::number(interval.start(), granularity),
            name,
            relative,
            semantic,
            is_in: containment::containers_of(&interval, granularity, &Granularity::ALL)?,
            id: identifier::period_id(&interval),
            previous,
        })
    }
}
