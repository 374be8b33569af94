//! Raw observation records and the keys used to reshape them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use time::{macros::format_description, Date};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Identifies a U.S. state or territory. Used as the map-matching key and the chart series key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateKey(String);

/// Column name of the date in a wide row. Wide rows flatten state keys next to it, so no
/// state may carry this name.
pub const RESERVED_STATE: &str = "date";

impl StateKey {
    /// Trims surrounding whitespace; returns `None` for an empty identifier or for
    /// [`RESERVED_STATE`].
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == RESERVED_STATE {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical `YYYY-MM-DD` grouping key for a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(Date);

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl DateKey {
    pub fn date(self) -> Date {
        self.0
    }

    pub fn parse(raw: &str) -> Option<Self> {
        parse_date(raw).map(Self)
    }
}

impl From<Date> for DateKey {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.0;
        write!(
            f,
            "{:04}-{:02}-{:02}",
            date.year(),
            date.month() as u8,
            date.day()
        )
    }
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time component (`T...` or ` ...`),
/// which is discarded.
pub fn parse_date(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    let date_part = trimmed
        .split(['T', ' '])
        .next()
        .unwrap_or(trimmed);
    Date::parse(date_part, format_description!("[year]-[month]-[day]")).ok()
}

/// Numeric columns the dashboard can chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Metric {
    #[default]
    Median,
    Lower90,
    Upper90,
    Lower50,
    Upper50,
    Lower20,
    Upper20,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::Median,
        Metric::Lower90,
        Metric::Upper90,
        Metric::Lower50,
        Metric::Upper50,
        Metric::Lower20,
        Metric::Upper20,
    ];

    /// CSV header naming this metric.
    pub fn column(self) -> &'static str {
        match self {
            Metric::Median => "median",
            Metric::Lower90 => "lower_90",
            Metric::Upper90 => "upper_90",
            Metric::Lower50 => "lower_50",
            Metric::Upper50 => "upper_50",
            Metric::Lower20 => "lower_20",
            Metric::Upper20 => "upper_20",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Median => "Median Rt",
            Metric::Lower90 => "Lower 90% bound",
            Metric::Upper90 => "Upper 90% bound",
            Metric::Lower50 => "Lower 50% bound",
            Metric::Upper50 => "Upper 50% bound",
            Metric::Lower20 => "Lower 20% bound",
            Metric::Upper20 => "Upper 20% bound",
        }
    }

    pub fn from_column(column: &str) -> Option<Self> {
        let column = column.trim();
        Self::ALL.into_iter().find(|metric| metric.column() == column)
    }
}

/// A column value kept verbatim from the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Number(f64),
    Text(String),
    Missing,
}

impl Field {
    /// Empty cells and `NA` become `Missing`; anything that parses as a finite float is a number.
    pub fn from_cell(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("na") {
            return Field::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Field::Number(value),
            _ => Field::Text(trimmed.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Field::Number(value) => Some(*value),
            _ => None,
        }
    }
}

/// One row of the long-format feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub state: StateKey,
    pub median: Option<f64>,
    /// Every column other than `date`, `state`, and `median`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Field>,
}

impl RawRecord {
    pub fn new(date: Date, state: StateKey, median: Option<f64>) -> Self {
        Self {
            date,
            state,
            median,
            extra: BTreeMap::new(),
        }
    }

    pub fn date_key(&self) -> DateKey {
        DateKey(self.date)
    }

    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Median => self.median,
            other => self.extra.get(other.column()).and_then(Field::as_number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn state_key_rejects_blank() {
        assert!(StateKey::parse("   ").is_none());
        assert_eq!(StateKey::parse(" Alabama ").unwrap().as_str(), "Alabama");
    }

    #[test]
    fn state_key_rejects_the_date_column_name() {
        assert!(StateKey::parse("date").is_none());
        assert!(StateKey::parse(" date ").is_none());
        assert_eq!(StateKey::parse("Date").unwrap().as_str(), "Date");
    }

    #[test]
    fn date_key_formats_canonically() {
        let key = DateKey::from(date!(2021 - 03 - 07));
        assert_eq!(key.to_string(), "2021-03-07");
    }

    #[test]
    fn parse_date_drops_time_component() {
        assert_eq!(parse_date("2021-01-02T00:00:00Z"), Some(date!(2021 - 01 - 02)));
        assert_eq!(parse_date("2021-01-02"), Some(date!(2021 - 01 - 02)));
        assert_eq!(parse_date("01/02/2021"), None);
    }

    #[test]
    fn field_classifies_cells() {
        assert_eq!(Field::from_cell(" 1.25 "), Field::Number(1.25));
        assert_eq!(Field::from_cell(""), Field::Missing);
        assert_eq!(Field::from_cell("NA"), Field::Missing);
        assert_eq!(
            Field::from_cell("estimate"),
            Field::Text("estimate".to_string())
        );
    }

    #[test]
    fn value_reads_median_and_extra_columns() {
        let mut record = RawRecord::new(
            date!(2021 - 01 - 01),
            StateKey::parse("Alabama").unwrap(),
            Some(1.2),
        );
        record
            .extra
            .insert("upper_90".to_string(), Field::Number(1.6));
        record
            .extra
            .insert("lower_90".to_string(), Field::Text("oops".to_string()));

        assert_eq!(record.value(Metric::Median), Some(1.2));
        assert_eq!(record.value(Metric::Upper90), Some(1.6));
        assert_eq!(record.value(Metric::Lower90), None);
        assert_eq!(record.value(Metric::Lower20), None);
    }

    #[test]
    fn serializes_dates_as_iso_strings() {
        let record = RawRecord::new(
            date!(2021 - 01 - 02),
            StateKey::parse("Ohio").unwrap(),
            None,
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2021-01-02");
        assert_eq!(json["state"], "Ohio");
        assert!(json["median"].is_null());

        let key = serde_json::to_value(record.date_key()).unwrap();
        assert_eq!(key, "2021-01-02");
    }

    #[test]
    fn metric_round_trips_through_column_name() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_column(metric.column()), Some(metric));
        }
        assert_eq!(Metric::from_column("mean"), None);
    }
}
