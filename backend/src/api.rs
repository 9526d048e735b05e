//! Request and response types of the synchronizer API.
//!
//! These are the logical request/response shapes; the HTTP layer only
//! (de)serializes them.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub use crate::models::{Granularity, Locale, PeriodId, PeriodInterval, PeriodRecord};

/// The only request kind this service can generate.
pub const PERIOD_REQUEST_TYPE: &str = "period";

/// Data request body: `{ requestedType, filter: { from, to, timezone } }`.
///
/// `requestedType` is read leniently (missing, null or any JSON scalar) so
/// that an unexpected kind is reported as unsupported rather than as a
/// malformed body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    #[serde(default, deserialize_with = "any_as_text")]
    pub requested_type: Option<String>,
    #[serde(default)]
    pub filter: SyncFilter,
}

impl SyncRequest {
    /// A `period` request over the given filter.
    pub fn period(filter: SyncFilter) -> Self {
        Self {
            requested_type: Some(PERIOD_REQUEST_TYPE.to_string()),
            filter,
        }
    }
}

/// Range, timezone and locale selection. Bounds may be sent as strings or
/// bare numbers (`"from": 2023`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncFilter {
    #[serde(default, deserialize_with = "string_or_number")]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub to: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

impl SyncFilter {
    pub fn range(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
            ..Default::default()
        }
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a date string or year number, got {}",
            other
        ))),
    }
}

fn any_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Data response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncResponse {
    pub items: Vec<PeriodRecord>,
}

/// One selectable timezone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneOption {
    pub title: String,
    pub value: String,
}

/// Timezone list response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataListResponse {
    pub items: Vec<TimezoneOption>,
}
