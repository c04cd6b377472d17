//! Two-series, date-indexed table: the backing data of the dashboard plot.
//!
//! Built by an outer pivot over `(date, name, value)`: rows are the union of the dates
//! found in either series, ascending, and a date missing from one series leaves that
//! cell empty. No gap filling.

use crate::api::SeriesSource;
use crate::error::Result;
use crate::models::DataPoint;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub date: NaiveDate,
    pub line1: Option<f64>,
    pub line2: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesTable {
    name1: String,
    name2: String,
    rows: Vec<Row>,
}

impl SeriesTable {
    /// Pivot raw points into a table with `name1` as `line1` and `name2` as `line2`.
    ///
    /// Points for other series are ignored. If the same `(date, name)` occurs twice the
    /// later point wins. When `name1 == name2` both columns carry that series.
    pub fn pivot<I>(points: I, name1: &str, name2: &str) -> Self
    where
        I: IntoIterator<Item = DataPoint>,
    {
        let mut grid: BTreeMap<NaiveDate, BTreeMap<String, f64>> = BTreeMap::new();
        for p in points {
            if p.name == name1 || p.name == name2 {
                grid.entry(p.date).or_default().insert(p.name, p.value);
            }
        }

        let rows = grid
            .into_iter()
            .map(|(date, cells)| Row {
                date,
                line1: cells.get(name1).copied(),
                line2: cells.get(name2).copied(),
            })
            .collect();

        Self {
            name1: name1.to_string(),
            name2: name2.to_string(),
            rows,
        }
    }

    /// Series names behind `line1` and `line2`.
    pub fn names(&self) -> (&str, &str) {
        (&self.name1, &self.name2)
    }

    /// Plot title, `"name1, name2"`.
    pub fn title(&self) -> String {
        format!("{}, {}", self.name1, self.name2)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Non-missing `(date, value)` pairs of `line1`.
    pub fn line1(&self) -> Vec<(NaiveDate, f64)> {
        self.rows
            .iter()
            .filter_map(|r| r.line1.map(|v| (r.date, v)))
            .collect()
    }

    /// Non-missing `(date, value)` pairs of `line2`.
    pub fn line2(&self) -> Vec<(NaiveDate, f64)> {
        self.rows
            .iter()
            .filter_map(|r| r.line2.map(|v| (r.date, v)))
            .collect()
    }

    /// First and last date, if any rows.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.rows.first()?.date, self.rows.last()?.date))
    }

    /// Min and max over both columns, ignoring missing and non-finite cells.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.rows
            .iter()
            .flat_map(|r| [r.line1, r.line2])
            .flatten()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            })
    }
}

/// Fetch both series at frequency `freq` and pivot them into a [`SeriesTable`].
///
/// Two requests are issued, one per name, even when the names are equal.
pub fn build_table<S>(source: &S, freq: &str, name1: &str, name2: &str) -> Result<SeriesTable>
where
    S: SeriesSource + ?Sized,
{
    let mut points = source.list_data_points(freq, name1)?;
    points.extend(source.list_data_points(freq, name2)?);
    Ok(SeriesTable::pivot(points, name1, name2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dp(date: &str, name: &str, value: f64) -> DataPoint {
        DataPoint {
            date: date.parse().unwrap(),
            freq: "q".into(),
            name: name.into(),
            value,
        }
    }

    #[test]
    fn later_duplicate_wins() {
        let t = SeriesTable::pivot(
            vec![dp("2020-03-31", "A", 1.0), dp("2020-03-31", "A", 2.0)],
            "A",
            "B",
        );
        assert_eq!(t.len(), 1);
        assert_eq!(t.rows()[0].line1, Some(2.0));
        assert_eq!(t.rows()[0].line2, None);
    }

    #[test]
    fn unrequested_series_are_ignored() {
        let t = SeriesTable::pivot(vec![dp("2020-03-31", "C", 1.0)], "A", "B");
        assert!(t.is_empty());
        assert_eq!(t.date_range(), None);
        assert_eq!(t.value_range(), None);
    }
}
