// File: crates/playground-chart/src/record.rs
// Summary: Host records, the shared dataset, and ingestion into a plottable date/value series.

use std::ops::Deref;
use std::rc::Rc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{ChartConfig, InvalidRecordPolicy};
use crate::error::{ChartError, Result};

/// One host record: a field-name to value mapping, kept exactly as supplied.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// String value of `field`, if it holds one.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Finite numeric value of `field`; numeric strings are accepted.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(numeric)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Ordered records shared with the host. Cloning is cheap; the host re-supplies it wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset(Rc<[Record]>);

impl Default for Dataset {
    fn default() -> Self {
        Self(Rc::from(Vec::new()))
    }
}

impl Dataset {
    /// Identity comparison: same allocation, not just equal contents.
    pub fn ptr_eq(&self, other: &Dataset) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Dataset {
    type Target = [Record];
    fn deref(&self) -> &[Record] {
        &self.0
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(v: Vec<Record>) -> Self {
        Self(v.into())
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A record that survived ingestion. `index` points back into the dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub index: usize,
    pub at: DateTime<Utc>,
    pub value: f64,
}

impl DataPoint {
    #[inline]
    pub fn millis(&self) -> f64 {
        self.at.timestamp_millis() as f64
    }
}

/// Plottable view of a dataset, in dataset order.
#[derive(Clone, Debug, Default)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    pub fn ingest(dataset: &Dataset, cfg: &ChartConfig) -> Result<Self> {
        let mut points = Vec::with_capacity(dataset.len());
        for (index, record) in dataset.iter().enumerate() {
            match point_from(record, index, cfg) {
                Ok(p) => points.push(p),
                Err(e) => match cfg.invalid_records {
                    InvalidRecordPolicy::Skip => tracing::warn!("dropping record: {e}"),
                    InvalidRecordPolicy::Reject => return Err(e),
                },
            }
        }
        Ok(Self { points })
    }

    pub fn from_points(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&DataPoint> {
        self.points.get(i)
    }

    /// [min, max] of the dates, as milliseconds since the epoch.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(DataPoint::millis))
    }

    /// [min, max] of the values.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(|p| p.value))
    }

    /// Index of the point whose date is closest to `at_ms`.
    ///
    /// Center bisection over dates assumed ascending: on an exact tie the later
    /// point wins. Always a valid index for a non-empty series.
    pub fn nearest_index(&self, at_ms: f64) -> Option<usize> {
        let n = self.points.len();
        if n == 0 {
            return None;
        }
        let i = self.points[..n - 1].partition_point(|p| p.millis() < at_ms);
        if i > 0 && at_ms - self.points[i - 1].millis() < self.points[i].millis() - at_ms {
            Some(i - 1)
        } else {
            Some(i)
        }
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn point_from(record: &Record, index: usize, cfg: &ChartConfig) -> Result<DataPoint> {
    let missing = |field: &str| ChartError::MissingField { index, field: field.to_string() };

    let raw_date = record.get(&cfg.date_field).ok_or_else(|| missing(&cfg.date_field))?;
    let at = raw_date
        .as_str()
        .and_then(parse_date)
        .ok_or_else(|| ChartError::InvalidDate { index, raw: raw_date.to_string() })?;

    let raw_value = record.get(&cfg.value_field).ok_or_else(|| missing(&cfg.value_field))?;
    let value = numeric(raw_value).ok_or_else(|| ChartError::NotNumeric {
        index,
        field: cfg.value_field.clone(),
        raw: raw_value.to_string(),
    })?;

    Ok(DataPoint { index, at, value })
}

fn numeric(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Parse an ISO-8601 date or date-time into UTC.
///
/// Date-times with an offset are converted; naive date-times and plain dates are taken as UTC.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let zoned = s.strip_suffix(['Z', 'z']).map(|head| format!("{head}+00:00"));
    let zoned = zoned.as_deref().unwrap_or(s);
    for fmt in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(zoned, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(n) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(n.and_utc());
        }
    }
    if let Some(hour) = s.len().checked_sub(3).and_then(|i| s.get(i..)).and_then(|t| t.strip_prefix('T')) {
        let date = NaiveDate::parse_from_str(&s[..s.len() - 3], "%Y-%m-%d").ok()?;
        let hour = hour.parse::<u32>().ok()?;
        return date.and_hms_opt(hour, 0, 0).map(|n| n.and_utc());
    }
    ["%Y-%m-%d", "%Y%m%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|n| n.and_utc())
}

const ZONED_FORMATS: [&str; 4] =
    ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
