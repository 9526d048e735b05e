//! Request-level entry point of the period generator.
//!
//! Validates a [`SyncRequest`], resolves timezone, locale and date range, and
//! runs the [`HierarchyBuilder`]. The filter is the sole source of truth for
//! range and timezone; settings only provide fallbacks.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::{info, warn};

use crate::api::{SyncFilter, SyncRequest, SyncResponse, PERIOD_REQUEST_TYPE};
use crate::error::{PeriodError, PeriodResult};
use crate::models::Locale;

use super::hierarchy::HierarchyBuilder;
use super::range::{parse_bound, DateSpan, RangeEdge};

/// Default longest range accepted, in days (about ten years).
pub const DEFAULT_MAX_SPAN_DAYS: i64 = 3660;

/// Fallbacks and limits applied to every request.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub default_timezone: Tz,
    pub default_locale: Locale,
    pub max_span_days: i64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            default_timezone: chrono_tz::UTC,
            default_locale: Locale::English,
            max_span_days: DEFAULT_MAX_SPAN_DAYS,
        }
    }
}

/// Generate the full period hierarchy for `request` relative to `now`.
pub fn generate_periods(
    request: &SyncRequest,
    now: DateTime<Utc>,
    settings: &GeneratorSettings,
) -> PeriodResult<SyncResponse> {
    match request.requested_type.as_deref() {
        Some(PERIOD_REQUEST_TYPE) => {}
        Some(other) => {
            warn!(requested_type = %other, "rejected unsupported request type");
            return Err(PeriodError::unsupported(format!(
                "requestedType '{}' cannot be synchronized; only '{}' is supported",
                other, PERIOD_REQUEST_TYPE
            )));
        }
        None => {
            warn!("rejected request without requestedType");
            return Err(PeriodError::unsupported(format!(
                "requestedType is missing; only '{}' is supported",
                PERIOD_REQUEST_TYPE
            )));
        }
    }

    let timezone = resolve_timezone(&request.filter, settings)?;
    let locale = resolve_locale(&request.filter, settings)?;
    let builder = HierarchyBuilder::at_instant(now, timezone, locale);
    let span = resolve_span(&request.filter, builder.reference(), settings)?;

    let items = builder.build(&span)?;
    info!(
        timezone = %timezone,
        locale = %locale,
        from = %span.from(),
        to = %span.to(),
        items = items.len(),
        "generated period hierarchy"
    );
    Ok(SyncResponse { items })
}

/// Timezone named by the filter, or the configured default when absent.
pub fn resolve_timezone(filter: &SyncFilter, settings: &GeneratorSettings) -> PeriodResult<Tz> {
    match non_empty(&filter.timezone) {
        Some(name) => name
            .parse::<Tz>()
            .map_err(|_| PeriodError::invalid_range(format!("unknown timezone '{}'", name))),
        None => Ok(settings.default_timezone),
    }
}

/// Locale named by the filter, or the configured default when absent.
pub fn resolve_locale(filter: &SyncFilter, settings: &GeneratorSettings) -> PeriodResult<Locale> {
    match non_empty(&filter.locale) {
        Some(tag) => tag.parse(),
        None => Ok(settings.default_locale),
    }
}

/// Inclusive day span of the filter. Missing bounds fall back to the
/// reference year.
pub fn resolve_span(
    filter: &SyncFilter,
    reference: NaiveDate,
    settings: &GeneratorSettings,
) -> PeriodResult<DateSpan> {
    let reference_year = DateSpan::year_of(reference)?;
    let from = match non_empty(&filter.from) {
        Some(raw) => parse_bound(raw, RangeEdge::Start)?,
        None => reference_year.from(),
    };
    let to = match non_empty(&filter.to) {
        Some(raw) => parse_bound(raw, RangeEdge::End)?,
        None => reference_year.to(),
    };

    let span = DateSpan::new(from, to)?;
    if span.num_days() > settings.max_span_days {
        return Err(PeriodError::invalid_range(format!(
            "range of {} days exceeds the limit of {} days",
            span.num_days(),
            settings.max_span_days
        )));
    }
    Ok(span)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
