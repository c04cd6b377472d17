use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One observation as returned by the `datapoints` endpoint.
///
/// ```json
/// {"date": "1999-12-31", "freq": "a", "name": "GDP_yoy", "value": 106.4}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataPoint {
    #[serde(deserialize_with = "de_date_from_iso")]
    pub date: NaiveDate,
    pub freq: String,
    pub name: String,
    pub value: f64,
}

/// Serde helper: parse a `NaiveDate` from an ISO-8601 date or date-time string.
/// Date-times (`2020-03-31T00:00:00`, `2020-03-31 00:00:00`) are truncated to their date.
fn de_date_from_iso<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct DateVisitor;

    impl<'de> Visitor<'de> for DateVisitor {
        type Value = NaiveDate;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "an ISO-8601 date string like 2020-03-31")
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            let day = s.trim().split(['T', ' ']).next().unwrap_or_default();
            NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(E::custom)
        }
    }

    deserializer.deserialize_str(DateVisitor)
}

/// A single series as parallel date/value vectors, in response order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TimeSeries {
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
}

impl From<Vec<DataPoint>> for TimeSeries {
    fn from(points: Vec<DataPoint>) -> Self {
        let (x, y) = points.into_iter().map(|p| (p.date, p.value)).unzip();
        Self { x, y }
    }
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
