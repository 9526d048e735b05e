use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::Granularity;

/// Canonical identifier of a calendar period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodId(Uuid);

impl PeriodId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for PeriodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half-open date range `[start, end)` at day resolution.
///
/// Serializes as `{ "start": "YYYY-MM-DD", "end": "YYYY-MM-DD" }` with `end`
/// being the day after the last covered day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PeriodInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl PeriodInterval {
    /// Create an interval. `end` is exclusive; arguments are reordered so that
    /// `start` is always the earlier date.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Exclusive end.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Last day covered by the interval (inclusive).
    pub fn last_day(&self) -> NaiveDate {
        if self.end > self.start {
            self.end.pred_opt().unwrap_or(self.start)
        } else {
            self.start
        }
    }

    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Textual key the identifier is minted from: first and last day,
    /// `YYYY/MM/DD – YYYY/MM/DD`.
    pub fn canonical_key(&self) -> String {
        format!(
            "{} – {}",
            self.start.format("%Y/%m/%d"),
            self.last_day().format("%Y/%m/%d")
        )
    }
}

/// One generated calendar period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRecord {
    #[serde(rename = "type")]
    pub granularity: Granularity,
    pub dates: PeriodInterval,
    /// Day-of-year, ISO week, month, quarter or year number.
    pub number: i32,
    pub name: String,
    /// Signed distance in granularity units from the reference period.
    pub relative: i64,
    pub semantic: String,
    /// Identifiers of the enclosing coarser periods.
    pub is_in: Vec<PeriodId>,
    pub id: PeriodId,
    /// Predecessor of the same granularity; serialized as `""` for the first.
    #[serde(with = "empty_as_none")]
    pub previous: Option<PeriodId>,
}

mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::PeriodId;

    pub fn serialize<S>(value: &Option<PeriodId>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(id) => id.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PeriodId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<uuid::Uuid>()
            .map(|uuid| Some(PeriodId::new(uuid)))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_interval_reorders() {
        let interval = PeriodInterval::new(date(2023, 2, 1), date(2023, 1, 1));
        assert_eq!(interval.start(), date(2023, 1, 1));
        assert_eq!(interval.end(), date(2023, 2, 1));
        assert_eq!(interval.num_days(), 31);
    }

    #[test]
    fn test_last_day_and_contains() {
        let interval = PeriodInterval::new(date(2023, 1, 1), date(2023, 2, 1));
        assert_eq!(interval.last_day(), date(2023, 1, 31));
        assert!(interval.contains(date(2023, 1, 31)));
        assert!(!interval.contains(date(2023, 2, 1)));
    }

    #[test]
    fn test_canonical_key() {
        let day = PeriodInterval::new(date(2023, 1, 1), date(2023, 1, 2));
        assert_eq!(day.canonical_key(), "2023/01/01 – 2023/01/01");

        let month = PeriodInterval::new(date(2023, 1, 1), date(2023, 2, 1));
        assert_eq!(month.canonical_key(), "2023/01/01 – 2023/01/31");
    }

    #[test]
    fn test_interval_serializes_iso_dates() {
        let interval = PeriodInterval::new(date(2023, 1, 1), date(2023, 1, 2));
        let json = serde_json::to_value(interval).unwrap();
        assert_eq!(json["start"], "2023-01-01");
        assert_eq!(json["end"], "2023-01-02");
    }

    #[test]
    fn test_record_previous_serialization() {
        let id = PeriodId::new(Uuid::nil());
        let mut record = PeriodRecord {
            granularity: Granularity::Day,
            dates: PeriodInterval::new(date(2023, 1, 1), date(2023, 1, 2)),
            number: 1,
            name: "2023/01/01".to_string(),
            relative: -3,
            semantic: "3 days ago".to_string(),
            is_in: vec![],
            id,
            previous: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "Day");
        assert_eq!(json["previous"], "");

        record.previous = Some(id);
        let text = serde_json::to_string(&record).unwrap();
        let back: PeriodRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(back.previous, Some(id));
    }
}
